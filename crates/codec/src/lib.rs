//! Transcoding between binary files and DNA sequence sets.
//!
//! A file is split into a fixed-width bit matrix, optionally indexed and
//! protected row by row, and mapped to one sequence per row by an encoding
//! method. Decoding reverses every step and reproduces the file byte for
//! byte.
//!
//! ```no_run
//! use helixfile_codec::{DecodeOptions, EncodeOptions, Method, Pipeline, Silent, Verifier};
//!
//! # fn main() -> Result<(), helixfile_codec::CodecError> {
//! let pipeline = Pipeline::new();
//! let mut method = "church".parse::<Method>().map_err(helixfile_codec::CodecError::InvalidInput)?;
//!
//! let mut dna = Vec::new();
//! pipeline.encode(
//!     &mut method,
//!     Some(Verifier::Hamming),
//!     &b"hello"[..],
//!     &mut dna,
//!     None,
//!     &EncodeOptions::default(),
//!     &mut Silent,
//! )?;
//!
//! let mut restored = Vec::new();
//! pipeline.decode(
//!     Some(method),
//!     Some(Verifier::Hamming),
//!     dna.as_slice(),
//!     &mut restored,
//!     None,
//!     &DecodeOptions::default(),
//!     &mut Silent,
//! )?;
//! assert_eq!(restored, b"hello");
//! # Ok(())
//! # }
//! ```

pub mod base;
mod error;
pub mod index;
pub mod io;
pub mod matrix;
pub mod model;
pub mod pipeline;
mod progress;
pub mod seqio;
pub mod strategies;
mod traits;
pub mod verify;

pub use error::CodecError as Error;
pub use error::CodecError;
pub use index::BinaryIndex;
pub use matrix::{from_bit_matrix, read_bit_matrix, to_bit_matrix, BitMatrix, Layout};
pub use model::{JsonModelStore, Model};
pub use pipeline::{DecodeOptions, EncodeOptions, Pipeline};
pub use progress::{ProgressMonitor, Silent};
pub use seqio::{read_sequences, write_sequences, SymbolSequence};
pub use strategies::{Church, Method, Simple};
pub use traits::{EncodingMethod, IndexOperator, ModelStore, VerificationMethod};
pub use verify::{Hamming, Parity, Verifier};
