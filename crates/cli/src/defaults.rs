//! Shared default values for command line arguments.

use helixfile_codec::matrix::{DEFAULT_INDEX_WARNING_RATIO, DEFAULT_SEGMENT_LENGTH};
use helixfile_codec::strategies::DEFAULT_MAX_HOMOPOLYMER;

pub const METHOD: &str = "simple";

pub const SEGMENT_LENGTH: usize = DEFAULT_SEGMENT_LENGTH;
pub const INDEX_WARNING_RATIO: usize = DEFAULT_INDEX_WARNING_RATIO;

// Church method only
pub const MAX_HOMOPOLYMER: usize = DEFAULT_MAX_HOMOPOLYMER;
