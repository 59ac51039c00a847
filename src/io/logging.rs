//! Console reporting through `tracing`
//!
//! Events are printed as bare lines, without timestamps, levels or module paths.

use crate::io::error::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Level used for console output
pub const fn level_for(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    }
}

/// Install the process-wide console subscriber
///
/// `RUST_LOG` takes precedence over the level derived from `quiet`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed
pub fn init(quiet: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(quiet).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish()
        .try_init()?;
    Ok(())
}
