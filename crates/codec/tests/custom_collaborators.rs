//! The pipeline with caller-supplied encoding and verification types.

use helixfile_codec::{
    BinaryIndex, BitMatrix, CodecError, DecodeOptions, EncodeOptions, EncodingMethod,
    JsonModelStore, Layout, Model, ModelStore, Pipeline, ProgressMonitor, Silent, SymbolSequence,
    VerificationMethod,
};
use serde::{Deserialize, Serialize};
use tempfile::tempdir;

/// One bit per base using only `A` (0) and `T` (1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WeakStrong {
    recorded: Option<Layout>,
}

impl EncodingMethod for WeakStrong {
    fn encode(
        &mut self,
        matrix: BitMatrix,
        layout: Layout,
        _monitor: &mut dyn ProgressMonitor,
    ) -> Result<Vec<SymbolSequence>, CodecError> {
        self.recorded = Some(layout);
        Ok(matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|&bit| if bit == 1 { b'T' } else { b'A' }).collect())
            .collect())
    }

    fn decode(
        &self,
        sequences: &[SymbolSequence],
        _monitor: &mut dyn ProgressMonitor,
    ) -> Result<(BitMatrix, Layout), CodecError> {
        let layout = self
            .recorded
            .ok_or_else(|| CodecError::Decode("nothing recorded".into()))?;
        let mut rows = Vec::with_capacity(sequences.len());
        for (row, sequence) in sequences.iter().enumerate() {
            let bits = sequence
                .iter()
                .map(|&symbol| match symbol {
                    b'A' => Ok(0),
                    b'T' => Ok(1),
                    _ => Err(CodecError::InvalidSymbol { row, symbol }),
                })
                .collect::<Result<Vec<u8>, _>>()?;
            rows.push(bits);
        }
        Ok((BitMatrix::from_rows(rows)?, layout))
    }
}

/// Appends a reversed copy of every row and demands it match on the way back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Mirror;

impl VerificationMethod for Mirror {
    fn add_for_matrix(
        &self,
        matrix: BitMatrix,
        _monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        let rows = matrix
            .into_rows()
            .into_iter()
            .map(|mut row| {
                let mirrored: Vec<u8> = row.iter().rev().copied().collect();
                row.extend(mirrored);
                row
            })
            .collect();
        BitMatrix::from_rows(rows)
    }

    fn verify_for_matrix(
        &self,
        matrix: BitMatrix,
        _monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        let mut rows = matrix.into_rows();
        for (i, row) in rows.iter_mut().enumerate() {
            let half = row.len() / 2;
            let mirrored = row.split_off(half);
            if !mirrored.iter().rev().eq(row.iter()) {
                return Err(CodecError::Uncorrectable { row: i });
            }
        }
        BitMatrix::from_rows(rows)
    }
}

fn pipeline() -> Pipeline<WeakStrong, Mirror> {
    Pipeline::with_collaborators(BinaryIndex, JsonModelStore)
}

#[test]
fn test_custom_method_and_verifier_round_trip() {
    let data = b"collaborators are pluggable".to_vec();
    let mut method = WeakStrong::default();
    let mut dna = Vec::new();
    pipeline()
        .encode(
            &mut method,
            Some(Mirror),
            data.as_slice(),
            &mut dna,
            None,
            &EncodeOptions::default(),
            &mut Silent,
        )
        .unwrap();
    assert!(dna.iter().all(|b| matches!(b, b'A' | b'T' | b'\n')));

    let mut out = Vec::new();
    pipeline()
        .decode(
            Some(method),
            Some(Mirror),
            dna.as_slice(),
            &mut out,
            None,
            &DecodeOptions::default(),
            &mut Silent,
        )
        .unwrap();
    assert_eq!(out, data);
}

#[test]
fn test_custom_collaborators_persist_in_model() {
    let dir = tempdir().unwrap();
    let model_path = dir.path().join("custom.model.json");
    let data = b"restored from the model alone".to_vec();

    let mut dna = Vec::new();
    pipeline()
        .encode(
            &mut WeakStrong::default(),
            Some(Mirror),
            data.as_slice(),
            &mut dna,
            Some(&model_path),
            &EncodeOptions::default(),
            &mut Silent,
        )
        .unwrap();

    let model: Model<WeakStrong, Mirror> = JsonModelStore.load(&model_path).unwrap();
    assert!(model.indexed);
    assert_eq!(
        model.method.recorded,
        Some(Layout {
            size: data.len(),
            indexed: true,
        })
    );

    let mut out = Vec::new();
    pipeline()
        .decode(
            None,
            None,
            dna.as_slice(),
            &mut out,
            Some(&model_path),
            &DecodeOptions::default(),
            &mut Silent,
        )
        .unwrap();
    assert_eq!(out, data);
}

#[test]
fn test_custom_verifier_failure_propagates() {
    let mut method = WeakStrong::default();
    let options = EncodeOptions {
        need_index: false,
        segment_length: 8,
        ..EncodeOptions::default()
    };
    let mut dna = Vec::new();
    pipeline()
        .encode(
            &mut method,
            Some(Mirror),
            &b"ab"[..],
            &mut dna,
            None,
            &options,
            &mut Silent,
        )
        .unwrap();

    // first row: flip its first base
    dna[0] = if dna[0] == b'A' { b'T' } else { b'A' };
    let mut out = Vec::new();
    let result = pipeline().decode(
        Some(method),
        Some(Mirror),
        dna.as_slice(),
        &mut out,
        None,
        &DecodeOptions { has_index: false },
        &mut Silent,
    );
    assert!(matches!(result, Err(CodecError::Uncorrectable { row: 0 })));
}
