//! Row index embedding.
//!
//! Every row gets its position prepended as a fixed-width, MSB-first binary
//! number. The width is the bit length of the row count, so it can be
//! derived again on the decoding side from the number of rows received.

use crate::error::CodecError;
use crate::matrix::{bit_length, BitMatrix};
use crate::progress::ProgressMonitor;
use crate::traits::IndexOperator;

/// Prepends `bit_length(row_count)` index bits to every row.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryIndex;

fn index_bits(index: usize, width: usize) -> impl Iterator<Item = u8> {
    (0..width).rev().map(move |shift| ((index >> shift) & 1) as u8)
}

impl IndexOperator for BinaryIndex {
    fn connect_all(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        let total = matrix.len();
        let width = bit_length(total);
        let rows = matrix
            .into_rows()
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut indexed = Vec::with_capacity(width + row.len());
                indexed.extend(index_bits(i, width));
                indexed.extend_from_slice(&row);
                monitor.report(i + 1, total);
                indexed
            })
            .collect();
        tracing::debug!(rows = total, index_width = width, "embedded row indexes");
        BitMatrix::from_rows(rows)
    }

    fn divide_all(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<(Vec<usize>, Vec<Vec<u8>>), CodecError> {
        let total = matrix.len();
        let width = bit_length(total);
        if !matrix.is_empty() && matrix.row_width() < width {
            return Err(CodecError::IndexMismatch(format!(
                "Rows hold {} bits, too few for a {width}-bit index",
                matrix.row_width()
            )));
        }

        let mut indexes = Vec::with_capacity(total);
        let mut rows = Vec::with_capacity(total);
        for (i, mut row) in matrix.into_rows().into_iter().enumerate() {
            let payload = row.split_off(width);
            let index = row.iter().fold(0usize, |acc, &bit| (acc << 1) | bit as usize);
            indexes.push(index);
            rows.push(payload);
            monitor.report(i + 1, total);
        }
        Ok((indexes, rows))
    }

    fn sort_order(
        &self,
        indexes: Vec<usize>,
        rows: Vec<Vec<u8>>,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        if indexes.len() != rows.len() {
            return Err(CodecError::IndexMismatch(format!(
                "{} indexes for {} rows",
                indexes.len(),
                rows.len()
            )));
        }

        let total = rows.len();
        let mut slots: Vec<Option<Vec<u8>>> = vec![None; total];
        for (i, (index, row)) in indexes.into_iter().zip(rows).enumerate() {
            let slot = slots.get_mut(index).ok_or_else(|| {
                CodecError::IndexMismatch(format!(
                    "Index {index} out of range for {total} rows; was the file encoded with indexes?"
                ))
            })?;
            if slot.is_some() {
                return Err(CodecError::IndexMismatch(format!(
                    "Index {index} appears more than once; was the file encoded with indexes?"
                )));
            }
            *slot = Some(row);
            monitor.report(i + 1, total);
        }

        // every slot is filled: `total` distinct indexes all below `total`
        let ordered = slots.into_iter().flatten().collect();
        BitMatrix::from_rows(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::to_bit_matrix;
    use crate::progress::Silent;

    #[test]
    fn test_connect_prepends_index() {
        let matrix = BitMatrix::from_rows(vec![vec![1, 1], vec![0, 0], vec![1, 0]]).unwrap();
        let indexed = BinaryIndex.connect_all(matrix, &mut Silent).unwrap();
        // three rows need two index bits
        assert_eq!(
            indexed.rows(),
            &[vec![0, 0, 1, 1], vec![0, 1, 0, 0], vec![1, 0, 1, 0]]
        );
    }

    #[test]
    fn test_divide_and_sort_restores_order() {
        let matrix = to_bit_matrix(b"shuffled rows come back", 12).unwrap();
        let indexed = BinaryIndex.connect_all(matrix.clone(), &mut Silent).unwrap();

        let mut rows = indexed.into_rows();
        rows.reverse();
        rows.swap(0, 3);
        let shuffled = BitMatrix::from_rows(rows).unwrap();

        let (indexes, payload) = BinaryIndex.divide_all(shuffled, &mut Silent).unwrap();
        let restored = BinaryIndex.sort_order(indexes, payload, &mut Silent).unwrap();
        assert_eq!(restored, matrix);
    }

    #[test]
    fn test_empty_matrix() {
        let indexed = BinaryIndex.connect_all(BitMatrix::new(), &mut Silent).unwrap();
        assert!(indexed.is_empty());
        let (indexes, rows) = BinaryIndex.divide_all(indexed, &mut Silent).unwrap();
        let restored = BinaryIndex.sort_order(indexes, rows, &mut Silent).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let result = BinaryIndex.sort_order(vec![0, 0], vec![vec![1], vec![0]], &mut Silent);
        assert!(matches!(result, Err(CodecError::IndexMismatch(_))));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let result = BinaryIndex.sort_order(vec![0, 2], vec![vec![1], vec![0]], &mut Silent);
        assert!(matches!(result, Err(CodecError::IndexMismatch(_))));
    }
}
