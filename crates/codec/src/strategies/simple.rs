use serde::{Deserialize, Serialize};

use crate::base::Nucleotide;
use crate::error::CodecError;
use crate::matrix::{BitMatrix, Layout};
use crate::progress::ProgressMonitor;
use crate::seqio::SymbolSequence;
use crate::strategies::Shape;
use crate::traits::EncodingMethod;

/// Strategy: direct mapping, 2 bits per base (`00→A 01→C 10→G 11→T`).
///
/// Rows with an odd number of bits get one zero bit appended before mapping;
/// the recorded row width drops it again on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simple {
    #[serde(default)]
    shape: Option<Shape>,
}

impl Simple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }
}

impl EncodingMethod for Simple {
    fn encode(
        &mut self,
        matrix: BitMatrix,
        layout: Layout,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<Vec<SymbolSequence>, CodecError> {
        let total = matrix.len();
        let row_width = matrix.row_width();
        let mut sequences = Vec::with_capacity(total);

        for (i, row) in matrix.rows().iter().enumerate() {
            let sequence: SymbolSequence = row
                .chunks(2)
                .map(|pair| {
                    let high = pair[0];
                    let low = pair.get(1).copied().unwrap_or(0);
                    Nucleotide::from_bits((high << 1) | low).to_ascii()
                })
                .collect();
            sequences.push(sequence);
            monitor.report(i + 1, total);
        }

        self.shape = Some(Shape { layout, row_width });
        Ok(sequences)
    }

    fn decode(
        &self,
        sequences: &[SymbolSequence],
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(BitMatrix, Layout), CodecError> {
        let shape = Shape::require(self.shape)?;
        let expected_len = shape.row_width.div_ceil(2);
        let total = sequences.len();
        let mut rows = Vec::with_capacity(total);

        for (i, sequence) in sequences.iter().enumerate() {
            if sequence.len() != expected_len {
                return Err(CodecError::Decode(format!(
                    "Sequence {i} has {} bases, expected {expected_len}",
                    sequence.len()
                )));
            }
            let mut row = Vec::with_capacity(expected_len * 2);
            for &symbol in sequence {
                let base = Nucleotide::from_ascii(symbol)
                    .ok_or(CodecError::InvalidSymbol { row: i, symbol })?;
                row.push(base.bits() >> 1);
                row.push(base.bits() & 1);
            }
            row.truncate(shape.row_width);
            rows.push(row);
            monitor.report(i + 1, total);
        }

        Ok((BitMatrix::from_rows(rows)?, shape.layout))
    }
}
