//! The surface a shader program exposes to lights and tiles
//!
//! Compilation and linking live behind this trait. Lights only add source
//! text before the build and push uniform values after the program is bound.

use std::borrow::Cow;

use crate::foundation::math::{Mat3, Mat4, Vec3, Vec4};

/// Well-known source block tags that shader templates expose
pub mod tags {
    /// Preprocessor defines, placed before any other lighting code
    pub const DEFINES: &str = "defines";
    /// Light type structures and functions, followed by instance declarations
    pub const LIGHTING: &str = "lighting";
    /// Statements run at the top of `main()` that initialize light instances
    pub const SETUP: &str = "setup";
    /// Per-light calls accumulated inside `calculateLighting()`
    pub const LIGHTS_TO_COMPUTE: &str = "lights_to_compute";
}

/// Name of a uniform inside a program
///
/// The program resolves the name to a backend location lazily; callers hold
/// on to this value between frames.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniformLocation {
    name: Cow<'static, str>,
}

impl UniformLocation {
    /// Create a location for the given uniform name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Location with a name known at compile time, usable in constants
    pub const fn from_static(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name) }
    }

    /// The uniform name as written in GLSL
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Value uploaded to a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `vec3`
    Vec3(Vec3),
    /// `vec4`
    Vec4(Vec4),
    /// `mat3`
    Mat3(Mat3),
    /// `mat4`
    Mat4(Mat4),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

impl From<Mat3> for UniformValue {
    fn from(value: Mat3) -> Self {
        Self::Mat3(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

/// Shader program collaborator
pub trait ShaderProgram {
    /// Append a block of source text under `tag`
    ///
    /// When `allow_duplicate` is false and an identical block is already
    /// present under the same tag, the call does nothing. Returns whether the
    /// block was added.
    fn add_source_block(&mut self, tag: &str, block: &str, allow_duplicate: bool) -> bool;

    /// Upload a uniform value; only valid while the program is bound
    fn set_uniform(&mut self, location: &UniformLocation, value: UniformValue);
}
