//! Logging initialization for Coffee Shop binaries
//!
//! Filter priority, highest first:
//! 1. CLI flags (`-v/-q`)
//! 2. RUST_LOG environment variable
//! 3. Binary-specific default

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter for the given verbosity and default
pub fn build_filter<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<EnvFilter> {
    let filter = if verbosity.is_present() {
        match verbosity.log_level() {
            Some(level) => EnvFilter::try_new(level.as_str().to_ascii_lowercase())?,
            None => EnvFilter::try_new("off")?,
        }
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?
    };
    Ok(filter)
}

/// Install a compact stderr subscriber.
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{Verbosity, WarnLevel};
/// use coffee_common::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[clap(flatten)]
///     verbosity: Verbosity<WarnLevel>,
/// }
///
/// let args = Args::parse();
/// logging::init_logging(&args.verbosity, "coffee=warn").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = build_filter(verbosity, default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
