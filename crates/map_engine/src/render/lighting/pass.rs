//! The set of lights a group of shader programs is built with

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use super::{lights_from_config, Light, LightError, LightOrigin, LightType, LightUniforms, PointLight};
use crate::core::config::{ApplicationConfig, Config, LightingConfig};
use crate::foundation::math::{Vec3, Vec4};
use crate::render::RenderError;
use crate::render::shader::{ShaderFragmentCache, ShaderProgram};
use crate::render::view::View;

/// Uniform handles of the dynamic lights injected into one program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightBindings {
    bindings: Vec<(usize, LightUniforms)>,
}

impl LightBindings {
    /// Number of dynamic lights bound
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no dynamic light is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Ordered, uniquely named scene lights
#[derive(Debug, Clone, Default)]
pub struct LightingPass {
    lights: Vec<Light>,
}

impl LightingPass {
    /// Create a pass; light names must be unique
    pub fn new(lights: Vec<Light>) -> Result<Self, LightError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = lights.iter().find(|light| !seen.insert(light.name())) {
            return Err(LightError::DuplicateName(duplicate.name().to_string()));
        }
        Ok(Self { lights })
    }

    /// Build every configured light
    pub fn from_config(config: &LightingConfig) -> Result<Self, LightError> {
        Self::new(lights_from_config(config)?)
    }

    /// Load the lighting section of an application configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let config = ApplicationConfig::load_from_file(path)?;
        Ok(Self::from_config(&config.lighting)?)
    }

    /// Lights in declaration order
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Look a light up by name to change its parameters between frames
    ///
    /// Name, type and mode stay fixed, so bindings from [`Self::inject`]
    /// remain valid.
    pub fn light_mut(&mut self, name: &str) -> Option<LightParamsMut<'_>> {
        self.lights
            .iter_mut()
            .find(|light| light.name() == name)
            .map(|light| LightParamsMut { light })
    }

    /// Inject every light into `program` during its build phase
    pub fn inject(&self, program: &mut dyn ShaderProgram, cache: &ShaderFragmentCache) -> LightBindings {
        let bindings: Vec<_> = self
            .lights
            .iter()
            .enumerate()
            .filter_map(|(index, light)| light.inject_on_program(program, cache).map(|uniforms| (index, uniforms)))
            .collect();

        debug!(
            "Injected {} light(s) into program, {} dynamic",
            self.lights.len(),
            bindings.len()
        );
        LightBindings { bindings }
    }

    /// Upload the per-frame uniforms of every dynamic light
    ///
    /// `program` must be bound and `bindings` must come from [`Self::inject`]
    /// on the same program.
    pub fn setup_program(&self, bindings: &LightBindings, view: &dyn View, program: &mut dyn ShaderProgram) {
        for (index, uniforms) in &bindings.bindings {
            if let Some(light) = self.lights.get(*index) {
                light.setup_program(view, program, uniforms);
            }
        }
    }
}

/// Parameter access to one light of a [`LightingPass`]
///
/// Setters for a parameter the light's type lacks leave it untouched and
/// return `false`.
#[derive(Debug)]
pub struct LightParamsMut<'a> {
    light: &'a mut Light,
}

impl LightParamsMut<'_> {
    /// Light name
    pub fn name(&self) -> &str {
        self.light.name()
    }

    /// Light type tag
    pub fn light_type(&self) -> LightType {
        self.light.light_type()
    }

    /// Whether parameters are uploaded per frame
    pub fn is_dynamic(&self) -> bool {
        self.light.is_dynamic()
    }

    /// Set the space the light's parameters are expressed in
    pub fn set_origin(&mut self, origin: LightOrigin) {
        self.light.set_origin(origin);
    }

    /// Set the ambient colour
    pub fn set_ambient(&mut self, color: Vec4) {
        self.light.set_ambient(color);
    }

    /// Set the diffuse colour
    pub fn set_diffuse(&mut self, color: Vec4) {
        self.light.set_diffuse(color);
    }

    /// Set the specular colour
    pub fn set_specular(&mut self, color: Vec4) {
        self.light.set_specular(color);
    }

    /// Directional and spot lights; `direction` must not be zero length
    pub fn set_direction(&mut self, direction: Vec3) -> bool {
        match self.light {
            Light::Directional(light) => light.set_direction(direction),
            Light::Spot(light) => light.set_direction(direction),
            Light::Ambient(_) | Light::Point(_) => return false,
        }
        true
    }

    /// Point and spot lights
    pub fn set_position(&mut self, position: Vec3) -> bool {
        self.with_point(|point| point.set_position(position))
    }

    /// Point and spot lights
    pub fn set_attenuation(&mut self, exponent: f32) -> bool {
        self.with_point(|point| point.set_attenuation(exponent))
    }

    /// Point and spot lights
    pub fn set_radius(&mut self, inner: f32, outer: f32) -> bool {
        self.with_point(|point| point.set_radius(inner, outer))
    }

    /// Spot lights; half-angle in radians
    pub fn set_cutoff_angle(&mut self, radians: f32) -> bool {
        if let Light::Spot(light) = self.light {
            light.set_cutoff_angle(radians);
            return true;
        }
        false
    }

    /// Spot lights
    pub fn set_cutoff_exponent(&mut self, exponent: f32) -> bool {
        if let Light::Spot(light) = self.light {
            light.set_cutoff_exponent(exponent);
            return true;
        }
        false
    }

    fn with_point(&mut self, update: impl FnOnce(&mut PointLight)) -> bool {
        let point = match self.light {
            Light::Point(light) => light,
            Light::Spot(light) => light.point_mut(),
            Light::Ambient(_) | Light::Directional(_) => return false,
        };
        update(point);
        true
    }
}
