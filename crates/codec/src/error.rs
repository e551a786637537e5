use thiserror::Error;

/// Error type for transcoding operations.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Truncated input: need {needed} bits, matrix holds {available}")]
    TruncatedInput { needed: usize, available: usize },
    #[error("No encoding method given and no model to load one from")]
    MissingMethod,
    #[error("Index mismatch: {0}")]
    IndexMismatch(String),
    #[error("Encoding error: {0}")]
    Encode(String),
    #[error("Decoding error: {0}")]
    Decode(String),
    #[error("Invalid symbol 0x{symbol:02x} in sequence {row}")]
    InvalidSymbol { row: usize, symbol: u8 },
    #[error("Uncorrectable error in row {row}")]
    Uncorrectable { row: usize },
    #[error("Model error: {0}")]
    Model(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
