//! In-memory election simulator
//!
//! Registers voters and candidates, records each accepted ballot in one of
//! three ballot logs (stack, queue or linked list) and reports ranked tallies.

pub mod ballot_log;
pub mod config;
pub mod errors;
pub mod registry;
pub mod shell;
pub mod types;

// Re-export commonly used types
pub use errors::{Error, Result};
pub use registry::{ElectionRegistry, SharedRegistry};
pub use types::LogStructure;

use config::{LogFormat, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so they never interleave with shell output. If a subscriber is already
/// installed this does nothing.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("election_sim={}", config.level).into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_ok() {
        tracing::info!("Election simulator v{} initialized", VERSION);
    }
    Ok(())
}
