use anyhow::{Context, Result};
use helixfile_codec::io::{create_destination, open_source};
use helixfile_codec::{DecodeOptions, Pipeline};

use crate::args::DecodeArgs;
use crate::commands::discard_output;
use crate::progress::BarMonitor;

pub fn decode_file(args: &DecodeArgs) -> Result<()> {
    println!("🧬 Decoding {}", args.input.display());

    let options = DecodeOptions {
        has_index: !args.no_index,
    };

    let source = open_source(&args.input)?;
    let destination = create_destination(&args.output)?;

    let mut monitor = BarMonitor::new(args.progress);
    let result = Pipeline::new().decode(
        None,
        None,
        source,
        destination,
        Some(args.model.as_path()),
        &options,
        &mut monitor,
    );
    monitor.finish();

    if let Err(e) = result {
        discard_output(&args.output);
        return Err(e).context("Failed to decode sequences");
    }

    println!("✓ File restored to: {}", args.output.display());
    Ok(())
}
