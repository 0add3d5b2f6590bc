//! Directional light (like sunlight)

use log::trace;

use super::{BaseUniforms, LightBase, LightOrigin, LightType};
use crate::foundation::math::{GlslLiteral, Vec3};
use crate::render::shader::{ShaderProgram, UniformLocation};
use crate::render::view::View;

/// Light arriving from a single direction everywhere in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub(crate) base: LightBase,
    direction: Vec3,
}

/// Uniforms of a dynamic directional light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionalUniforms {
    /// Colour uniforms
    pub base: BaseUniforms,
    /// `u_<name>.direction`, in eye space
    pub direction: UniformLocation,
}

impl DirectionalLight {
    /// Create a light pointing along +X
    pub fn new(name: impl Into<String>, dynamic: bool) -> Self {
        Self {
            base: LightBase::new(name, dynamic),
            direction: Vec3::new(1.0, 0.0, 0.0),
        }
    }

    /// Shared light state
    pub fn base(&self) -> &LightBase {
        &self.base
    }

    /// Unit direction in the light's origin space
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Store `direction` normalized
    ///
    /// `direction` must not be zero length.
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize();
    }

    /// Direction in eye space for the current frame
    pub fn eye_direction(&self, view: &dyn View) -> Vec3 {
        match self.base.origin() {
            LightOrigin::World => view.normal_matrix() * self.direction,
            LightOrigin::Camera => self.direction,
        }
    }

    pub(crate) fn instance_assign_block(&self) -> String {
        let mut block = self.base.open_assign_block(LightType::Directional);
        if !self.base.is_dynamic() {
            block.push_str(&format!(", {})", self.direction.to_glsl()));
        }
        block
    }

    pub(crate) fn uniforms(&self, base: BaseUniforms) -> DirectionalUniforms {
        DirectionalUniforms {
            base,
            direction: UniformLocation::new(format!("{}.direction", self.base.uniform_name())),
        }
    }

    pub(crate) fn setup_program(&self, view: &dyn View, program: &mut dyn ShaderProgram, uniforms: &DirectionalUniforms) {
        let direction = self.eye_direction(view);

        self.base.setup_program(program, &uniforms.base);
        program.set_uniform(&uniforms.direction, direction.into());

        trace!("Directional light '{}' direction {:?}", self.base.name(), direction);
    }
}
