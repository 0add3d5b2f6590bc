//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use crate::core::config::EngineConfig;

/// Initialize logging with the level named in the engine configuration
///
/// `RUST_LOG` still takes precedence when it is set. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init_with_config(config: &EngineConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let _ = env_logger::Builder::from_env(env).try_init();
}
