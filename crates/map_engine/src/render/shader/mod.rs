//! Shader program contract, source assembly and the per-session fragment cache

pub mod program;
pub mod source;
pub mod fragment_cache;
pub mod templates;

pub use program::{ShaderProgram, UniformLocation, UniformValue, tags};
pub use source::ShaderSource;
pub use fragment_cache::ShaderFragmentCache;
