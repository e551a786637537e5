//! End-to-end `encode` and `decode`.
//!
//! Stages run strictly one after another; each consumes the complete output
//! of the previous one.
//!
//! ```text
//! encode: bytes -> bit matrix -> [index] -> [verify] -> method -> sequence file -> [model]
//! decode: sequence file -> method -> [verify] -> [index + reorder] -> bytes
//! ```
//!
//! Errors raised by collaborators are returned unchanged.

use std::io::{BufRead, Read, Write};
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::index::BinaryIndex;
use crate::matrix::{self, Layout, DEFAULT_INDEX_WARNING_RATIO, DEFAULT_SEGMENT_LENGTH};
use crate::model::{JsonModelStore, Model};
use crate::progress::ProgressMonitor;
use crate::seqio;
use crate::strategies::Method;
use crate::traits::{EncodingMethod, IndexOperator, ModelStore, VerificationMethod};
use crate::verify::Verifier;

/// Options for [`Pipeline::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Prefix every row with its position.
    pub need_index: bool,
    /// Bits per row before index and verification bits.
    pub segment_length: usize,
    /// Warn when the index exceeds `1 / index_warning_ratio` of a row.
    pub index_warning_ratio: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            need_index: true,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            index_warning_ratio: DEFAULT_INDEX_WARNING_RATIO,
        }
    }
}

/// Options for [`Pipeline::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Rows carry an index and must be reordered by it.
    pub has_index: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { has_index: true }
    }
}

/// Composes the bit matrix codec and sequence file I/O with an index operator
/// and a model store.
///
/// `M` and `V` are the encoding method and verification types the pipeline
/// works with. The defaults are the built-in [`Method`] and [`Verifier`] enums;
/// any type implementing the collaborator traits can take their place.
#[derive(Debug, Clone)]
pub struct Pipeline<M = Method, V = Verifier, I = BinaryIndex, S = JsonModelStore> {
    index: I,
    store: S,
    _collaborators: PhantomData<fn() -> (M, V)>,
}

impl Pipeline {
    /// Pipeline with [`BinaryIndex`] and [`JsonModelStore`].
    pub fn new() -> Self {
        Self::with_collaborators(BinaryIndex, JsonModelStore)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn check_index_flag(indexed: bool, has_index: bool) -> Result<(), CodecError> {
    if indexed != has_index {
        return Err(CodecError::IndexMismatch(format!(
            "Sequences were encoded with indexed={indexed}, decode requested has_index={has_index}"
        )));
    }
    Ok(())
}

impl<M, V, I: IndexOperator, S: ModelStore> Pipeline<M, V, I, S> {
    pub fn with_collaborators(index: I, store: S) -> Self {
        Self {
            index,
            store,
            _collaborators: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Convert the binary `source` into sequences written to `destination`.
    ///
    /// When `model_path` is given the method (with its recorded layout) and
    /// the verification scheme are saved there so `decode` can run without
    /// them. The model is written only once the sequences are.
    #[allow(clippy::too_many_arguments)]
    pub fn encode<R: Read, W: Write>(
        &self,
        method: &mut M,
        verify: Option<V>,
        source: R,
        destination: W,
        model_path: Option<&Path>,
        options: &EncodeOptions,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(), CodecError>
    where
        M: EncodingMethod + Clone + Serialize,
        V: VerificationMethod + Serialize,
    {
        let (mut bits, size) = matrix::read_bit_matrix(
            source,
            options.segment_length,
            options.index_warning_ratio,
            monitor,
        )?;

        if options.need_index {
            bits = self.index.connect_all(bits, monitor)?;
        }

        if let Some(verifier) = &verify {
            bits = verifier.add_for_matrix(bits, monitor)?;
        }

        let layout = Layout {
            size,
            indexed: options.need_index,
        };
        let sequences = method.encode(bits, layout, monitor)?;

        seqio::write_sequences(destination, &sequences, monitor)?;

        if let Some(path) = model_path {
            let model = Model::new(
                method.clone(),
                verify,
                options.need_index,
                options.segment_length,
            );
            self.store.save(path, &model)?;
        }

        tracing::info!(
            size,
            sequences = sequences.len(),
            indexed = options.need_index,
            "encoded payload"
        );
        Ok(())
    }

    /// Reconstruct the binary payload from the sequences in `source`.
    ///
    /// A model loaded from `model_path` replaces `method` and `verify`.
    /// `options.has_index` must agree with how the sequences were encoded,
    /// otherwise decoding fails with [`CodecError::IndexMismatch`].
    #[allow(clippy::too_many_arguments)]
    pub fn decode<R: BufRead, W: Write>(
        &self,
        method: Option<M>,
        verify: Option<V>,
        source: R,
        mut destination: W,
        model_path: Option<&Path>,
        options: &DecodeOptions,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(), CodecError>
    where
        M: EncodingMethod + DeserializeOwned,
        V: VerificationMethod + DeserializeOwned,
    {
        let (method, verify) = match (model_path, method) {
            (Some(path), _) => {
                let model: Model<M, V> = self.store.load(path)?;
                check_index_flag(model.indexed, options.has_index)?;
                (model.method, model.verify)
            }
            (None, Some(method)) => (method, verify),
            (None, None) => return Err(CodecError::MissingMethod),
        };

        let sequences = seqio::read_sequences(source, monitor)?;

        let (mut bits, layout) = method.decode(&sequences, monitor)?;
        check_index_flag(layout.indexed, options.has_index)?;

        if let Some(verifier) = &verify {
            bits = verifier.verify_for_matrix(bits, monitor)?;
        }

        if options.has_index {
            let (indexes, rows) = self.index.divide_all(bits, monitor)?;
            bits = self.index.sort_order(indexes, rows, monitor)?;
        }

        let bytes = matrix::from_bit_matrix(&bits, layout.size)?;
        destination.write_all(&bytes)?;
        destination.flush()?;

        tracing::info!(
            size = layout.size,
            sequences = sequences.len(),
            "decoded payload"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Silent;
    use crate::strategies::Church;

    fn round_trip(data: &[u8], method: Method, verify: Option<Verifier>, segment: usize) -> Vec<u8> {
        let pipeline = Pipeline::new();
        let mut method = method;
        let options = EncodeOptions {
            segment_length: segment,
            ..EncodeOptions::default()
        };
        let mut dna = Vec::new();
        pipeline
            .encode(&mut method, verify, data, &mut dna, None, &options, &mut Silent)
            .unwrap();

        let mut out = Vec::new();
        pipeline
            .decode(
                Some(method),
                verify,
                dna.as_slice(),
                &mut out,
                None,
                &DecodeOptions::default(),
                &mut Silent,
            )
            .unwrap();
        out
    }

    #[test]
    fn test_round_trip_sizes() {
        for len in [0usize, 1, 15, 16, 200] {
            let data: Vec<u8> = (0..len).map(|i| (i * 37 % 256) as u8).collect();
            assert_eq!(round_trip(&data, Method::default(), None, 120), data, "len={len}");
        }
    }

    #[test]
    fn test_round_trip_with_verification() {
        let data = b"verification wraps the indexed rows".to_vec();
        let church = Method::Church(Church::default());
        assert_eq!(round_trip(&data, church, Some(Verifier::Hamming), 40), data);
        assert_eq!(round_trip(&data, Method::default(), Some(Verifier::Parity), 33), data);
    }

    #[test]
    fn test_sequence_count_matches_rows() {
        let pipeline = Pipeline::new();
        let mut method = Method::default();
        let mut dna = Vec::new();
        let data = vec![0x5Au8; 45]; // 360 bits -> 3 rows of 120
        pipeline
            .encode(
                &mut method,
                None,
                data.as_slice(),
                &mut dna,
                None,
                &EncodeOptions::default(),
                &mut Silent,
            )
            .unwrap();
        let lines: Vec<&[u8]> = dna.split(|&b| b == b'\n').filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 3);
        // 2 index bits + 120 data bits, two bits per base
        assert!(lines.iter().all(|l| l.len() == 61));
    }

    #[test]
    fn test_missing_method() {
        let pipeline = Pipeline::new();
        let mut out = Vec::new();
        let result = pipeline.decode(
            None,
            None,
            &b"ACGT\n"[..],
            &mut out,
            None,
            &DecodeOptions::default(),
            &mut Silent,
        );
        assert!(matches!(result, Err(CodecError::MissingMethod)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_segment_length() {
        let pipeline = Pipeline::new();
        let mut method = Method::default();
        let options = EncodeOptions {
            segment_length: 0,
            ..EncodeOptions::default()
        };
        let mut dna = Vec::new();
        let result = pipeline.encode(
            &mut method,
            None,
            &b"abc"[..],
            &mut dna,
            None,
            &options,
            &mut Silent,
        );
        assert!(matches!(result, Err(CodecError::InvalidInput(_))));
        assert!(dna.is_empty());
    }

    fn encode_with(data: &[u8], need_index: bool) -> (Method, Vec<u8>) {
        let mut method = Method::default();
        let options = EncodeOptions {
            need_index,
            ..EncodeOptions::default()
        };
        let mut dna = Vec::new();
        Pipeline::new()
            .encode(&mut method, None, data, &mut dna, None, &options, &mut Silent)
            .unwrap();
        (method, dna)
    }

    fn decode_with(method: Method, dna: &[u8], has_index: bool) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        Pipeline::new().decode(
            Some(method),
            None,
            dna,
            &mut out,
            None,
            &DecodeOptions { has_index },
            &mut Silent,
        )?;
        Ok(out)
    }

    #[test]
    fn test_indexed_sequences_decoded_without_index() {
        let (method, dna) = encode_with(b"hello world", true);
        let result = decode_with(method, &dna, false);
        assert!(matches!(result, Err(CodecError::IndexMismatch(_))));
    }

    #[test]
    fn test_unindexed_single_row_decoded_with_index() {
        // one row always looks like a valid permutation
        let (method, dna) = encode_with(b"A", false);
        let result = decode_with(method, &dna, true);
        assert!(matches!(result, Err(CodecError::IndexMismatch(_))));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_model_not_saved_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.json");
        let mut method = Method::default();
        let result = Pipeline::new().encode(
            &mut method,
            Some(Verifier::Parity),
            &b"lost"[..],
            FullDisk,
            Some(&model),
            &EncodeOptions::default(),
            &mut Silent,
        );
        assert!(matches!(result, Err(CodecError::Io(_))));
        assert!(!model.exists());
    }
}
