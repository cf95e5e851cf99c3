//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging with a fallback filter used when `RUST_LOG` is unset
///
/// Returns an error if a logger was already installed (common in tests).
pub fn init_with_filter(default_filter: &str) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
}
