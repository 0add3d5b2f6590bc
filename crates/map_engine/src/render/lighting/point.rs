//! Point light (like a lightbulb)

use log::trace;

use super::{BaseUniforms, LightBase, LightOrigin, LightType};
use crate::foundation::math::{GlslLiteral, Vec3, Vec4};
use crate::render::shader::{ShaderProgram, UniformLocation};
use crate::render::view::View;

/// Light radiating from a position, optionally attenuated with distance
///
/// An attenuation exponent of zero disables attenuation. With an outer
/// radius larger than the inner one the light fades out between the two;
/// otherwise it falls off with the inverse power of distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub(crate) base: LightBase,
    position: Vec4,
    attenuation: f32,
    inner_radius: f32,
    outer_radius: f32,
}

/// Uniforms of a dynamic point light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointUniforms {
    /// Colour uniforms
    pub base: BaseUniforms,
    /// `u_<name>.position`, in eye space
    pub position: UniformLocation,
    /// `u_<name>.attenuationExponent`
    pub attenuation: UniformLocation,
    /// `u_<name>.innerRadius`
    pub inner_radius: UniformLocation,
    /// `u_<name>.outerRadius`
    pub outer_radius: UniformLocation,
}

impl PointLight {
    /// Create an unattenuated light at the origin
    pub fn new(name: impl Into<String>, dynamic: bool) -> Self {
        Self {
            base: LightBase::new(name, dynamic),
            position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            attenuation: 0.0,
            inner_radius: 0.0,
            outer_radius: 0.0,
        }
    }

    /// Shared light state
    pub fn base(&self) -> &LightBase {
        &self.base
    }

    /// Homogeneous position in the light's origin space
    pub fn position(&self) -> Vec4 {
        self.position
    }

    /// Set the position in the light's origin space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.push(1.0);
    }

    /// Attenuation exponent
    pub fn attenuation(&self) -> f32 {
        self.attenuation
    }

    /// Set the attenuation exponent; zero disables attenuation
    pub fn set_attenuation(&mut self, exponent: f32) {
        self.attenuation = exponent;
    }

    /// Inner and outer radius
    pub fn radius(&self) -> (f32, f32) {
        (self.inner_radius, self.outer_radius)
    }

    /// Set inner and outer falloff radius
    pub fn set_radius(&mut self, inner: f32, outer: f32) {
        self.inner_radius = inner;
        self.outer_radius = outer;
    }

    /// Position in eye space for the current frame
    pub fn eye_position(&self, view: &dyn View) -> Vec4 {
        match self.base.origin() {
            LightOrigin::World => view.view_matrix() * self.position,
            LightOrigin::Camera => self.position,
        }
    }

    /// Arguments following the base colours in the static constructor
    pub(crate) fn constructor_args(&self) -> String {
        format!(
            ", {}, {}, {}, {}",
            self.position.to_glsl(),
            self.attenuation.to_glsl(),
            self.inner_radius.to_glsl(),
            self.outer_radius.to_glsl()
        )
    }

    pub(crate) fn instance_assign_block(&self) -> String {
        let mut block = self.base.open_assign_block(LightType::Point);
        if !self.base.is_dynamic() {
            block.push_str(&self.constructor_args());
            block.push(')');
        }
        block
    }

    pub(crate) fn uniforms(&self, base: BaseUniforms) -> PointUniforms {
        let uniform = self.base.uniform_name();
        PointUniforms {
            base,
            position: UniformLocation::new(format!("{uniform}.position")),
            attenuation: UniformLocation::new(format!("{uniform}.attenuationExponent")),
            inner_radius: UniformLocation::new(format!("{uniform}.innerRadius")),
            outer_radius: UniformLocation::new(format!("{uniform}.outerRadius")),
        }
    }

    pub(crate) fn setup_program(&self, view: &dyn View, program: &mut dyn ShaderProgram, uniforms: &PointUniforms) {
        let position = self.eye_position(view);

        self.base.setup_program(program, &uniforms.base);
        program.set_uniform(&uniforms.position, position.into());
        program.set_uniform(&uniforms.attenuation, self.attenuation.into());
        program.set_uniform(&uniforms.inner_radius, self.inner_radius.into());
        program.set_uniform(&uniforms.outer_radius, self.outer_radius.into());

        trace!("Point light '{}' position {:?}", self.base.name(), position);
    }
}
