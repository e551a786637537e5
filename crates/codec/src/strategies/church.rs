use serde::{Deserialize, Serialize};

use crate::base::Nucleotide;
use crate::error::CodecError;
use crate::matrix::{BitMatrix, Layout};
use crate::progress::ProgressMonitor;
use crate::seqio::SymbolSequence;
use crate::strategies::Shape;
use crate::traits::EncodingMethod;

/// Default longest allowed run of one base.
pub const DEFAULT_MAX_HOMOPOLYMER: usize = 3;

/// Strategy: one bit per base (`0→A|C`, `1→G|T`).
///
/// Each bit has two candidate bases. The first candidate is used unless it
/// would extend a run past `max_homopolymer`, in which case the second is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Church {
    max_homopolymer: usize,
    #[serde(default)]
    shape: Option<Shape>,
}

impl Default for Church {
    fn default() -> Self {
        Self {
            max_homopolymer: DEFAULT_MAX_HOMOPOLYMER,
            shape: None,
        }
    }
}

impl Church {
    pub fn new(max_homopolymer: usize) -> Result<Self, CodecError> {
        if max_homopolymer == 0 {
            return Err(CodecError::InvalidInput(
                "Maximum homopolymer length must be at least 1".into(),
            ));
        }
        Ok(Self {
            max_homopolymer,
            shape: None,
        })
    }

    pub fn max_homopolymer(&self) -> usize {
        self.max_homopolymer
    }

    pub fn shape(&self) -> Option<Shape> {
        self.shape
    }

    fn encode_row(&self, row: &[u8]) -> SymbolSequence {
        let mut sequence = Vec::with_capacity(row.len());
        let mut last: Option<Nucleotide> = None;
        let mut run = 0;

        for &bit in row {
            let (first, second) = if bit == 0 {
                (Nucleotide::A, Nucleotide::C)
            } else {
                (Nucleotide::G, Nucleotide::T)
            };
            let base = if last == Some(first) && run >= self.max_homopolymer {
                second
            } else {
                first
            };
            if last == Some(base) {
                run += 1;
            } else {
                last = Some(base);
                run = 1;
            }
            sequence.push(base.to_ascii());
        }
        sequence
    }
}

impl EncodingMethod for Church {
    fn encode(
        &mut self,
        matrix: BitMatrix,
        layout: Layout,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<Vec<SymbolSequence>, CodecError> {
        if self.max_homopolymer == 0 {
            return Err(CodecError::Encode(
                "Maximum homopolymer length must be at least 1".into(),
            ));
        }

        let total = matrix.len();
        let mut sequences = Vec::with_capacity(total);
        for (i, row) in matrix.rows().iter().enumerate() {
            sequences.push(self.encode_row(row));
            monitor.report(i + 1, total);
        }

        self.shape = Some(Shape {
            layout,
            row_width: matrix.row_width(),
        });
        Ok(sequences)
    }

    fn decode(
        &self,
        sequences: &[SymbolSequence],
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(BitMatrix, Layout), CodecError> {
        let shape = Shape::require(self.shape)?;
        let total = sequences.len();
        let mut rows = Vec::with_capacity(total);

        for (i, sequence) in sequences.iter().enumerate() {
            if sequence.len() != shape.row_width {
                return Err(CodecError::Decode(format!(
                    "Sequence {i} has {} bases, expected {}",
                    sequence.len(),
                    shape.row_width
                )));
            }
            let row = sequence
                .iter()
                .map(|&symbol| {
                    Nucleotide::from_ascii(symbol)
                        .map(|base| u8::from(base.is_high()))
                        .ok_or(CodecError::InvalidSymbol { row: i, symbol })
                })
                .collect::<Result<Vec<u8>, CodecError>>()?;
            rows.push(row);
            monitor.report(i + 1, total);
        }

        Ok((BitMatrix::from_rows(rows)?, shape.layout))
    }
}
