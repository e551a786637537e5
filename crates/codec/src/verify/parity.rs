use crate::error::CodecError;
use crate::matrix::BitMatrix;
use crate::progress::ProgressMonitor;
use crate::traits::VerificationMethod;

/// Strategy: one even-parity bit appended to every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parity;

impl VerificationMethod for Parity {
    fn add_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        let total = matrix.len();
        let mut rows = matrix.into_rows();
        for (i, row) in rows.iter_mut().enumerate() {
            let parity = row.iter().fold(0, |acc, &bit| acc ^ bit);
            row.push(parity);
            monitor.report(i + 1, total);
        }
        BitMatrix::from_rows(rows)
    }

    fn verify_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        if !matrix.is_empty() && matrix.row_width() == 0 {
            return Err(CodecError::Decode("Rows carry no parity bit".into()));
        }
        let total = matrix.len();
        let mut rows = matrix.into_rows();
        for (i, row) in rows.iter_mut().enumerate() {
            if row.iter().fold(0, |acc, &bit| acc ^ bit) != 0 {
                return Err(CodecError::Uncorrectable { row: i });
            }
            row.pop();
            monitor.report(i + 1, total);
        }
        BitMatrix::from_rows(rows)
    }
}
