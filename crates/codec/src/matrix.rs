//! Conversion between byte streams and fixed-width bit matrices.
//!
//! A file of `size` bytes becomes `ceil(size * 8 / segment_length)` rows of
//! `segment_length` bits each. Bits are taken most-significant first from
//! every byte and laid out row-major, so the only zero padding lives at the
//! tail of the final row. [`from_bit_matrix`] reverses this and stops after
//! exactly `size` bytes, which is what strips the padding again.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::progress::ProgressMonitor;

/// Default number of bits per row.
pub const DEFAULT_SEGMENT_LENGTH: usize = 120;

/// Default index overhead threshold: warn once the index would take more than
/// `1 / DEFAULT_INDEX_WARNING_RATIO` of a row.
pub const DEFAULT_INDEX_WARNING_RATIO: usize = 7;

/// How a payload was laid out before an encoding method saw the matrix.
///
/// Methods receive this on encode and hand it back unchanged on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Payload size in bytes.
    pub size: usize,
    /// Whether every row starts with an index.
    pub indexed: bool,
}

/// A rectangular matrix of bits (stored as `0`/`1` bytes).
///
/// Every row has the same width. The width may differ from the segment length
/// once index or verification bits have been added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<Vec<u8>>,
}

impl BitMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from rows, rejecting ragged input and non-binary cells.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, CodecError> {
        if let Some(first) = rows.first() {
            let width = first.len();
            for (i, row) in rows.iter().enumerate() {
                if row.len() != width {
                    return Err(CodecError::Decode(format!(
                        "Row {i} has {} bits, expected {width}",
                        row.len()
                    )));
                }
                if row.iter().any(|&bit| bit > 1) {
                    return Err(CodecError::Decode(format!("Row {i} holds a non-binary value")));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every row in bits (0 for an empty matrix).
    #[inline]
    pub fn row_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Total number of bits held.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.len() * self.row_width()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[u8]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<Vec<u8>> {
        self.rows
    }
}

/// Number of bits needed to write `value` in binary (at least 1).
#[inline]
pub fn bit_length(value: usize) -> usize {
    (usize::BITS - value.leading_zeros()).max(1) as usize
}

/// Whether an index for `row_count` rows would be a large share of each row.
pub fn index_overhead_is_high(row_count: usize, segment_length: usize, ratio: usize) -> bool {
    bit_length(row_count) * ratio > segment_length
}

/// Lay `bytes` out as rows of `segment_length` bits.
pub fn to_bit_matrix(bytes: &[u8], segment_length: usize) -> Result<BitMatrix, CodecError> {
    if segment_length == 0 {
        return Err(CodecError::InvalidInput(
            "Segment length must be positive".into(),
        ));
    }

    let row_count = (bytes.len() * 8).div_ceil(segment_length);
    let mut rows = vec![vec![0u8; segment_length]; row_count];

    let (mut row, mut col) = (0, 0);
    for &byte in bytes {
        for shift in (0..8).rev() {
            rows[row][col] = (byte >> shift) & 1;
            col += 1;
            if col == segment_length {
                col = 0;
                row += 1;
            }
        }
    }

    Ok(BitMatrix { rows })
}

/// Read `source` to completion and lay it out as a bit matrix.
///
/// Returns the matrix together with the number of bytes consumed.
pub fn read_bit_matrix<R: Read>(
    mut source: R,
    segment_length: usize,
    warning_ratio: usize,
    monitor: &mut dyn ProgressMonitor,
) -> Result<(BitMatrix, usize), CodecError> {
    if segment_length == 0 {
        return Err(CodecError::InvalidInput(
            "Segment length must be positive".into(),
        ));
    }

    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let size = bytes.len();
    tracing::debug!(size, segment_length, "read binary payload");

    let matrix = to_bit_matrix(&bytes, segment_length)?;
    monitor.report(size, size);

    if index_overhead_is_high(matrix.len(), segment_length, warning_ratio) {
        tracing::warn!(
            rows = matrix.len(),
            segment_length,
            "the index may take a large share of each sequence; \
             consider a longer segment length or splitting the file"
        );
    }

    Ok((matrix, size))
}

/// Repack the first `size` bytes held by `matrix`.
///
/// Bits beyond `size * 8` (padding) are ignored.
pub fn from_bit_matrix(matrix: &BitMatrix, size: usize) -> Result<Vec<u8>, CodecError> {
    let needed = size * 8;
    let available = matrix.bit_count();
    if available < needed {
        return Err(CodecError::TruncatedInput { needed, available });
    }

    let mut bytes = Vec::with_capacity(size);
    let mut byte = 0u8;
    let mut filled = 0;
    'rows: for row in matrix.rows() {
        for &bit in row {
            if bytes.len() == size {
                break 'rows;
            }
            byte = (byte << 1) | (bit & 1);
            filled += 1;
            if filled == 8 {
                bytes.push(byte);
                byte = 0;
                filled = 0;
            }
        }
    }

    Ok(bytes)
}
