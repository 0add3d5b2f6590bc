//! Rendering: scene lights, shader source generation and the collaborator
//! contracts (program, view, mesh) the map tiles draw through.

pub mod lighting;
pub mod mesh;
pub mod shader;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

use thiserror::Error;

pub use lighting::{Light, LightError, LightOrigin, LightType, LightUniforms, LightingPass};
pub use mesh::VboMesh;
pub use shader::{ShaderFragmentCache, ShaderProgram, ShaderSource, UniformLocation, UniformValue};
pub use view::{Camera, View};

/// Errors surfaced while preparing a scene for rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// Light construction failed
    #[error("Lighting error: {0}")]
    Lighting(#[from] LightError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
