use anyhow::{Context, Result};
use helixfile_codec::io::{create_destination, open_source};
use helixfile_codec::{Church, EncodeOptions, Method, Pipeline};

use crate::args::EncodeArgs;
use crate::commands::discard_output;
use crate::progress::BarMonitor;

fn build_method(name: &str, max_homopolymer: usize) -> Result<Method> {
    let method: Method = name.parse().map_err(anyhow::Error::msg)?;
    Ok(match method {
        Method::Church(_) => Method::Church(Church::new(max_homopolymer)?),
        other => other,
    })
}

pub fn encode_file(args: &EncodeArgs) -> Result<()> {
    println!("🧬 Encoding {}", args.input.display());

    let mut method = build_method(&args.method, args.max_homopolymer)?;
    let options = EncodeOptions {
        need_index: !args.no_index,
        segment_length: args.segment_length,
        index_warning_ratio: args.index_warning_ratio,
    };

    let source = open_source(&args.input)?;
    let destination = create_destination(&args.output)?;

    let mut monitor = BarMonitor::new(args.progress);
    let result = Pipeline::new().encode(
        &mut method,
        args.verify,
        source,
        destination,
        args.model.as_deref(),
        &options,
        &mut monitor,
    );
    monitor.finish();

    if let Err(e) = result {
        discard_output(&args.output);
        if let Some(model) = &args.model {
            discard_output(model);
        }
        return Err(e).context("Failed to encode file");
    }

    if let Some(shape) = method.shape() {
        println!("  Method: {method}, verification: {}", display_verify(args));
        println!("  Payload: {} bytes, {} bits per sequence", shape.layout.size, shape.row_width);
    }
    println!("✓ Sequences written to: {}", args.output.display());
    if let Some(model) = &args.model {
        println!("✓ Model saved to: {}", model.display());
    }
    Ok(())
}

fn display_verify(args: &EncodeArgs) -> String {
    args.verify
        .map_or_else(|| "none".to_string(), |v| v.to_string())
}
