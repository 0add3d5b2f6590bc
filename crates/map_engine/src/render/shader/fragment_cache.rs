//! Type-level shader fragments, generated once per light type
//!
//! A cache lives as long as the shader-build session that owns it. Each slot
//! is a `OnceLock`, so concurrent first requests from several render contexts
//! generate the block exactly once and later reads take no lock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use log::debug;

use crate::render::lighting::LightType;

/// Lazily populated class blocks keyed by light type
#[derive(Debug, Default)]
pub struct ShaderFragmentCache {
    class_blocks: [OnceLock<String>; LightType::COUNT],
    generated: AtomicUsize,
}

impl ShaderFragmentCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Class block for `light_type`, generating it with `generate` on first use
    ///
    /// `generate` never runs again for a type once its slot is populated.
    pub fn class_block(&self, light_type: LightType, generate: impl FnOnce() -> String) -> &str {
        self.class_blocks[light_type.index()].get_or_init(|| {
            self.generated.fetch_add(1, Ordering::Relaxed);
            debug!("Generated shader class block for {}", light_type.type_name());
            generate()
        })
    }

    /// Whether the class block for `light_type` has been generated
    pub fn contains(&self, light_type: LightType) -> bool {
        self.class_blocks[light_type.index()].get().is_some()
    }

    /// Number of class blocks generated so far
    pub fn generated_count(&self) -> usize {
        self.generated.load(Ordering::Relaxed)
    }
}
