mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;
mod progress;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use args::{DecodeArgs, EncodeArgs};
use commands::{decode, encode, inspect};

/// Helixfile: store binary files as DNA sequences
///
/// Converts any file into a set of DNA sequences (one per line) and restores
/// the exact original file from them.
#[derive(Parser, Debug)]
#[command(name = "helixfile")]
#[command(author, version, about = "Transcodes binary files to and from DNA sequences", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a binary file into a sequence file.
    ///
    /// Use --model to save the configuration needed for decoding.
    Encode(Box<EncodeArgs>),

    /// Decode a sequence file back into the original binary file.
    Decode(DecodeArgs),

    /// Inspect: Show the configuration stored in a model file.
    Inspect {
        /// Model path
        #[arg(short, long)]
        model: PathBuf,

        /// Print the raw model JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Encode(args) => {
            encode::encode_file(&args)?;
        }
        Commands::Decode(args) => {
            decode::decode_file(&args)?;
        }
        Commands::Inspect { model, json } => {
            inspect::show_model(&model, json)?;
        }
    }

    Ok(())
}
