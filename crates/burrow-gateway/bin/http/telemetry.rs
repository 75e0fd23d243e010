use crate::cli::LogFormatArg;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `level` when it is set.
pub fn init(level: &str, format: LogFormatArg) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormatArg::Pretty => registry.with(fmt::layer()).try_init()?,
        LogFormatArg::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    Ok(())
}
