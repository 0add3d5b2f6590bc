//! Spot light (like a flashlight)

use super::point::{PointLight, PointUniforms};
use super::{BaseUniforms, LightBase, LightOrigin, LightType};
use crate::foundation::math::{GlslLiteral, Vec3};
use crate::render::shader::{ShaderProgram, UniformLocation};
use crate::render::view::View;

/// Point light restricted to a cone around a direction
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    point: PointLight,
    direction: Vec3,
    cutoff_angle: f32,
    cutoff_exponent: f32,
}

/// Uniforms of a dynamic spot light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotUniforms {
    /// Position, attenuation and colour uniforms
    pub point: PointUniforms,
    /// `u_<name>.direction`, in eye space
    pub direction: UniformLocation,
    /// `u_<name>.spotCosCutoff`
    pub cos_cutoff: UniformLocation,
    /// `u_<name>.spotExponent`
    pub exponent: UniformLocation,
}

impl SpotLight {
    /// Create a light at the origin shining along +X with a 90 degree cone
    pub fn new(name: impl Into<String>, dynamic: bool) -> Self {
        Self {
            point: PointLight::new(name, dynamic),
            direction: Vec3::new(1.0, 0.0, 0.0),
            cutoff_angle: std::f32::consts::FRAC_PI_4,
            cutoff_exponent: 0.0,
        }
    }

    /// Shared light state
    pub fn base(&self) -> &LightBase {
        &self.point.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut LightBase {
        &mut self.point.base
    }

    /// Position and attenuation
    pub fn point(&self) -> &PointLight {
        &self.point
    }

    /// Mutable position and attenuation
    pub fn point_mut(&mut self) -> &mut PointLight {
        &mut self.point
    }

    /// Unit direction in the light's origin space
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Store `direction` normalized; must not be zero length
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.normalize();
    }

    /// Half-angle of the cone in radians
    pub fn cutoff_angle(&self) -> f32 {
        self.cutoff_angle
    }

    /// Set the half-angle of the cone in radians
    pub fn set_cutoff_angle(&mut self, radians: f32) {
        self.cutoff_angle = radians;
    }

    /// Set how sharply intensity falls off toward the cone edge
    pub fn set_cutoff_exponent(&mut self, exponent: f32) {
        self.cutoff_exponent = exponent;
    }

    /// Direction in eye space for the current frame
    pub fn eye_direction(&self, view: &dyn View) -> Vec3 {
        match self.base().origin() {
            LightOrigin::World => view.normal_matrix() * self.direction,
            LightOrigin::Camera => self.direction,
        }
    }

    pub(crate) fn instance_assign_block(&self) -> String {
        let mut block = self.base().open_assign_block(LightType::Spot);
        if !self.base().is_dynamic() {
            block.push_str(&self.point.constructor_args());
            block.push_str(&format!(
                ", {}, {}, {})",
                self.direction.to_glsl(),
                self.cutoff_angle.cos().to_glsl(),
                self.cutoff_exponent.to_glsl()
            ));
        }
        block
    }

    pub(crate) fn uniforms(&self, base: BaseUniforms) -> SpotUniforms {
        let uniform = self.base().uniform_name();
        SpotUniforms {
            point: self.point.uniforms(base),
            direction: UniformLocation::new(format!("{uniform}.direction")),
            cos_cutoff: UniformLocation::new(format!("{uniform}.spotCosCutoff")),
            exponent: UniformLocation::new(format!("{uniform}.spotExponent")),
        }
    }

    pub(crate) fn setup_program(&self, view: &dyn View, program: &mut dyn ShaderProgram, uniforms: &SpotUniforms) {
        self.point.setup_program(view, program, &uniforms.point);

        program.set_uniform(&uniforms.direction, self.eye_direction(view).into());
        program.set_uniform(&uniforms.cos_cutoff, self.cutoff_angle.cos().into());
        program.set_uniform(&uniforms.exponent, self.cutoff_exponent.into());
    }
}
