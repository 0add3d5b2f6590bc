//! # Core Engine Module
//!
//! Shared abstractions the rendering subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the engine and the scene lights

pub mod config;

pub use crate::foundation;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    LightConfig,
    LightingConfig,
    Config,
    ConfigError,
};
