use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level one step
/// from `warn`.
pub fn init_tracing(verbosity: u8) -> Result<(), anyhow::Error> {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
