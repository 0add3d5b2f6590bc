//! Ambient light

use super::{BaseUniforms, LightBase, LightType};
use crate::render::shader::ShaderProgram;

/// Directionless light that only adds its ambient colour
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    pub(crate) base: LightBase,
}

impl AmbientLight {
    /// Create an ambient light
    pub fn new(name: impl Into<String>, dynamic: bool) -> Self {
        Self { base: LightBase::new(name, dynamic) }
    }

    /// Shared light state
    pub fn base(&self) -> &LightBase {
        &self.base
    }

    pub(crate) fn instance_assign_block(&self) -> String {
        let mut block = self.base.open_assign_block(LightType::Ambient);
        if !self.base.is_dynamic() {
            block.push(')');
        }
        block
    }

    pub(crate) fn setup_program(&self, program: &mut dyn ShaderProgram, uniforms: &BaseUniforms) {
        self.base.setup_program(program, uniforms);
    }
}
