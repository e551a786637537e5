//! Adapters from file paths to the byte streams the pipeline consumes.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::CodecError;

/// Open `path` for buffered reading.
pub fn open_source(path: &Path) -> Result<BufReader<File>, CodecError> {
    File::open(path).map(BufReader::new).map_err(|e| {
        CodecError::InvalidInput(format!("Cannot open input {}: {e}", path.display()))
    })
}

/// Create (or truncate) `path` for buffered writing.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>, CodecError> {
    File::create(path).map(BufWriter::new).map_err(|e| {
        CodecError::InvalidInput(format!("Cannot create output {}: {e}", path.display()))
    })
}
