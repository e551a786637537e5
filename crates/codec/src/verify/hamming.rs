use crate::error::CodecError;
use crate::matrix::BitMatrix;
use crate::progress::ProgressMonitor;
use crate::traits::VerificationMethod;

/// Strategy: extended Hamming code (SECDED) over each row.
///
/// # Layout
///
/// For `m` data bits we use the smallest `r` with `2^r >= m + r + 1`.
/// Codeword positions `1..=m + r` hold parity bits at powers of two and data
/// bits everywhere else, in order. One overall parity bit follows, so a row
/// grows from `m` to `m + r + 1` bits.
///
/// A single flipped bit anywhere in the row is repaired. Two flipped bits are
/// detected and reported as [`CodecError::Uncorrectable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

/// Parity bits needed to protect `data_len` data bits.
fn parity_bits_for_data(data_len: usize) -> usize {
    let mut r = 0;
    while (1usize << r) < data_len + r + 1 {
        r += 1;
    }
    r
}

fn encode_row(data: &[u8]) -> Vec<u8> {
    let r = parity_bits_for_data(data.len());
    let inner = data.len() + r;
    // index 0 unused so positions are 1-based
    let mut code = vec![0u8; inner + 1];

    let mut bits = data.iter();
    for (pos, cell) in code.iter_mut().enumerate().skip(1) {
        if !pos.is_power_of_two() {
            *cell = bits.next().copied().unwrap_or(0);
        }
    }

    let syndrome = code
        .iter()
        .enumerate()
        .filter(|&(_, &bit)| bit == 1)
        .fold(0usize, |acc, (pos, _)| acc ^ pos);
    for j in 0..r {
        code[1 << j] = ((syndrome >> j) & 1) as u8;
    }

    let overall = code.iter().fold(0, |acc, &bit| acc ^ bit);
    code.push(overall);
    code.remove(0);
    code
}

fn decode_row(row: &mut [u8], index: usize) -> Result<Vec<u8>, CodecError> {
    let inner = row.len() - 1;

    // positions are 1-based: row[pos - 1]
    let syndrome = (1..=inner)
        .filter(|&pos| row[pos - 1] == 1)
        .fold(0usize, |acc, pos| acc ^ pos);
    let overall = row.iter().fold(0, |acc, &bit| acc ^ bit);

    match (syndrome, overall) {
        (0, 0) => {}
        (0, _) => {
            tracing::debug!(row = index, "corrected overall parity bit");
        }
        (pos, 1) if pos <= inner => {
            row[pos - 1] ^= 1;
            tracing::debug!(row = index, position = pos, "corrected single bit error");
        }
        _ => return Err(CodecError::Uncorrectable { row: index }),
    }

    Ok((1..=inner)
        .filter(|pos| !pos.is_power_of_two())
        .map(|pos| row[pos - 1])
        .collect())
}

impl VerificationMethod for Hamming {
    fn add_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        let total = matrix.len();
        let rows = matrix
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                monitor.report(i + 1, total);
                encode_row(row)
            })
            .collect();
        BitMatrix::from_rows(rows)
    }

    fn verify_for_matrix(
        &self,
        matrix: BitMatrix,
        monitor: &mut dyn ProgressMonitor,
    ) -> Result<BitMatrix, CodecError> {
        if matrix.is_empty() {
            return Ok(matrix);
        }
        if matrix.row_width() == 0 {
            return Err(CodecError::Decode("Rows carry no Hamming parity".into()));
        }

        let total = matrix.len();
        let mut rows = Vec::with_capacity(total);
        for (i, mut row) in matrix.into_rows().into_iter().enumerate() {
            rows.push(decode_row(&mut row, i)?);
            monitor.report(i + 1, total);
        }
        BitMatrix::from_rows(rows)
    }
}
