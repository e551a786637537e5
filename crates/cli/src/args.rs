use clap::Args;
use helixfile_codec::Verifier;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Binary file to encode
    #[arg(short, long)]
    pub input: PathBuf,

    /// Sequence file to write (one sequence per line)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Encoding method (simple, church)
    #[arg(short, long, default_value = defaults::METHOD)]
    pub method: String,

    /// Longest run of one base the church method may produce
    #[arg(long, default_value_t = defaults::MAX_HOMOPOLYMER)]
    pub max_homopolymer: usize,

    /// Per-row verification (hamming, parity)
    #[arg(long)]
    pub verify: Option<Verifier>,

    /// Save the configuration here so the file can be decoded later
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Do not embed row indexes
    ///
    /// Sequences must then stay in file order until they are decoded.
    #[arg(long)]
    pub no_index: bool,

    /// Bits per sequence before index and verification bits
    #[arg(short = 'l', long, default_value_t = defaults::SEGMENT_LENGTH)]
    pub segment_length: usize,

    /// Warn when the index takes more than 1/N of a sequence
    #[arg(long, default_value_t = defaults::INDEX_WARNING_RATIO)]
    pub index_warning_ratio: usize,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Sequence file to decode
    #[arg(short, long)]
    pub input: PathBuf,

    /// Binary file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Model saved by `encode`
    #[arg(long)]
    pub model: PathBuf,

    /// Sequences carry no row indexes (must match how they were encoded)
    #[arg(long)]
    pub no_index: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}
