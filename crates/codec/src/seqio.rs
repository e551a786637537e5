//! Line oriented sequence files.
//!
//! One sequence per line, one byte per symbol, each line terminated by a
//! single `\n`. A `\r` before the terminator is dropped on read, so files
//! with CRLF line endings load too. Line order is significant and preserved
//! exactly.

use std::io::{BufRead, Write};

use crate::error::CodecError;
use crate::progress::ProgressMonitor;

/// A single sequence of one-byte symbols.
pub type SymbolSequence = Vec<u8>;

/// Line separator used in sequence files.
pub const SEPARATOR: u8 = b'\n';

const CARRIAGE_RETURN: u8 = b'\r';

/// Read every line of `source` as a sequence, in file order.
pub fn read_sequences<R: BufRead>(
    mut source: R,
    monitor: &mut dyn ProgressMonitor,
) -> Result<Vec<SymbolSequence>, CodecError> {
    let mut sequences = Vec::new();
    loop {
        let mut line = Vec::new();
        if source.read_until(SEPARATOR, &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&SEPARATOR) {
            line.pop();
        }
        if line.last() == Some(&CARRIAGE_RETURN) {
            line.pop();
        }
        sequences.push(line);
    }

    let total = sequences.len();
    monitor.report(total, total);
    tracing::debug!(sequences = total, "read sequence file");
    Ok(sequences)
}

/// Write `sequences` one per line, in iteration order.
pub fn write_sequences<W: Write>(
    mut destination: W,
    sequences: &[SymbolSequence],
    monitor: &mut dyn ProgressMonitor,
) -> Result<(), CodecError> {
    let total = sequences.len();
    for (i, sequence) in sequences.iter().enumerate() {
        if sequence.contains(&SEPARATOR) {
            return Err(CodecError::InvalidInput(format!(
                "Sequence {i} contains a line separator"
            )));
        }
        destination.write_all(sequence)?;
        destination.write_all(&[SEPARATOR])?;
        monitor.report(i + 1, total);
    }
    destination.flush()?;
    tracing::debug!(sequences = total, "wrote sequence file");
    Ok(())
}
