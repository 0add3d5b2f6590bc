//! Scene lights and the shader code they contribute
//!
//! Every light contributes GLSL in two layers:
//!
//! - a **class block**, the struct and `calculateLight` overload for its
//!   type, generated once per type through a [`ShaderFragmentCache`]
//! - **instance blocks** for each light: defines, the global instance
//!   declaration, the setup statement and the compute call
//!
//! A static light bakes its parameters into the instance declaration as a
//! constructor call. A dynamic light declares a uniform instead and gets a
//! [`LightUniforms`] handle back from [`Light::inject_on_program`], which the
//! renderer passes to [`Light::setup_program`] every frame.

pub mod ambient;
pub mod directional;
pub mod point;
pub mod spot;
pub mod pass;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::LightConfig;
use crate::foundation::math::{utils, GlslLiteral, Vec3, Vec4};
use crate::render::shader::{tags, ShaderFragmentCache, ShaderProgram, UniformLocation};
use crate::render::view::View;

pub use ambient::AmbientLight;
pub use directional::{DirectionalLight, DirectionalUniforms};
pub use point::{PointLight, PointUniforms};
pub use spot::{SpotLight, SpotUniforms};
pub use pass::{LightBindings, LightParamsMut, LightingPass};

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightType {
    /// Uniform light with no direction
    Ambient,
    /// Directional light (like sunlight)
    Directional,
    /// Point light (like a lightbulb)
    Point,
    /// Spot light (like a flashlight)
    Spot,
}

impl LightType {
    /// Number of light types
    pub const COUNT: usize = 4;

    /// Dense index, used to key per-type caches
    pub const fn index(self) -> usize {
        match self {
            Self::Ambient => 0,
            Self::Directional => 1,
            Self::Point => 2,
            Self::Spot => 3,
        }
    }

    /// GLSL struct name of this light type
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Ambient => "AmbientLight",
            Self::Directional => "DirectionalLight",
            Self::Point => "PointLight",
            Self::Spot => "SpotLight",
        }
    }

    fn class_source(self) -> &'static str {
        match self {
            Self::Ambient => include_str!("../../../shaders/lights/ambient.glsl"),
            Self::Directional => include_str!("../../../shaders/lights/directional.glsl"),
            Self::Point => include_str!("../../../shaders/lights/point.glsl"),
            Self::Spot => include_str!("../../../shaders/lights/spot.glsl"),
        }
    }

    /// Class block for this type, served from `cache`
    pub fn class_block(self, cache: &ShaderFragmentCache) -> &str {
        cache.class_block(self, || format!("{}\n", self.class_source()))
    }
}

/// Space a light's direction or position is expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightOrigin {
    /// World space; transformed into eye space every frame
    #[default]
    World,
    /// Already in eye space
    Camera,
}

/// Errors raised when building lights from configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LightError {
    /// Light names become GLSL identifiers
    #[error("Invalid light name '{0}': must be a non-empty identifier of [A-Za-z0-9_] not starting with a digit")]
    InvalidName(String),

    /// Two lights in one scene share a name
    #[error("Duplicate light name '{0}'")]
    DuplicateName(String),

    /// A direction of zero or non-finite length cannot be normalized
    #[error("Light '{0}' has a zero-length or non-finite direction")]
    DegenerateDirection(String),

    /// A parameter holds NaN or infinity, which has no GLSL literal
    #[error("Light '{name}' has a non-finite {parameter}")]
    NonFinite {
        /// Light name
        name: String,
        /// Offending parameter
        parameter: &'static str,
    },

    /// Attenuation radii must be finite and satisfy 0 <= inner <= outer
    #[error("Light '{name}' has invalid radius [{inner}, {outer}]")]
    InvalidRadius {
        /// Light name
        name: String,
        /// Inner radius
        inner: f32,
        /// Outer radius
        outer: f32,
    },
}

/// State shared by every light type
#[derive(Debug, Clone, PartialEq)]
pub struct LightBase {
    name: String,
    dynamic: bool,
    origin: LightOrigin,
    ambient: Vec4,
    diffuse: Vec4,
    specular: Vec4,
}

impl LightBase {
    /// Create base state; `dynamic` is fixed for the life of the light
    pub fn new(name: impl Into<String>, dynamic: bool) -> Self {
        Self {
            name: name.into(),
            dynamic,
            origin: LightOrigin::World,
            ambient: Vec4::zeros(),
            diffuse: Vec4::new(1.0, 1.0, 1.0, 1.0),
            specular: Vec4::zeros(),
        }
    }

    /// Light name, unique within a scene
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether parameters are uploaded per frame
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Space the light's parameters are expressed in
    pub fn origin(&self) -> LightOrigin {
        self.origin
    }

    /// Ambient colour
    pub fn ambient(&self) -> Vec4 {
        self.ambient
    }

    /// Diffuse colour
    pub fn diffuse(&self) -> Vec4 {
        self.diffuse
    }

    /// Specular colour
    pub fn specular(&self) -> Vec4 {
        self.specular
    }

    /// Name of the uniform a dynamic light is uploaded through
    pub fn uniform_name(&self) -> String {
        format!("u_{}", self.name)
    }

    /// Name of the global struct instance the lighting code reads
    pub fn instance_name(&self) -> String {
        format!("g_{}", self.name)
    }

    fn instance_block(&self, light_type: LightType, assign: &str) -> String {
        let type_name = light_type.type_name();
        if self.dynamic {
            format!("uniform {type_name} {};\n{type_name} {};\n", self.uniform_name(), self.instance_name())
        } else {
            format!("{type_name} {}{assign};\n", self.instance_name())
        }
    }

    /// Opening of the static constructor: ` = Type(ambient, diffuse, specular`
    ///
    /// Left unclosed; the concrete light appends its own arguments and the
    /// closing parenthesis. Empty for dynamic lights.
    fn open_assign_block(&self, light_type: LightType) -> String {
        if self.dynamic {
            return String::new();
        }
        format!(
            " = {}({}, {}, {}",
            light_type.type_name(),
            self.ambient.to_glsl(),
            self.diffuse.to_glsl(),
            self.specular.to_glsl()
        )
    }

    fn setup_block(&self) -> String {
        if self.dynamic {
            format!("{} = {};\n", self.instance_name(), self.uniform_name())
        } else {
            String::new()
        }
    }

    fn compute_block(&self) -> String {
        format!("calculateLight({}, eyeToPoint, normal);\n", self.instance_name())
    }

    fn uniforms(&self) -> BaseUniforms {
        let uniform = self.uniform_name();
        BaseUniforms {
            ambient: UniformLocation::new(format!("{uniform}.ambient")),
            diffuse: UniformLocation::new(format!("{uniform}.diffuse")),
            specular: UniformLocation::new(format!("{uniform}.specular")),
        }
    }

    /// Upload the colours every light type shares
    fn setup_program(&self, program: &mut dyn ShaderProgram, uniforms: &BaseUniforms) {
        program.set_uniform(&uniforms.ambient, self.ambient.into());
        program.set_uniform(&uniforms.diffuse, self.diffuse.into());
        program.set_uniform(&uniforms.specular, self.specular.into());
    }
}

/// Uniforms every dynamic light is uploaded through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUniforms {
    /// `u_<name>.ambient`
    pub ambient: UniformLocation,
    /// `u_<name>.diffuse`
    pub diffuse: UniformLocation,
    /// `u_<name>.specular`
    pub specular: UniformLocation,
}

/// Per-instance uniform handle for a dynamic light
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightUniforms {
    /// Ambient light uniforms
    Ambient(BaseUniforms),
    /// Directional light uniforms
    Directional(DirectionalUniforms),
    /// Point light uniforms
    Point(PointUniforms),
    /// Spot light uniforms
    Spot(SpotUniforms),
}

/// A scene light of any type
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Ambient light
    Ambient(AmbientLight),
    /// Directional light
    Directional(DirectionalLight),
    /// Point light
    Point(PointLight),
    /// Spot light
    Spot(SpotLight),
}

impl Light {
    /// Shared state
    pub fn base(&self) -> &LightBase {
        match self {
            Self::Ambient(light) => &light.base,
            Self::Directional(light) => &light.base,
            Self::Point(light) => &light.base,
            Self::Spot(light) => light.base(),
        }
    }

    fn base_mut(&mut self) -> &mut LightBase {
        match self {
            Self::Ambient(light) => &mut light.base,
            Self::Directional(light) => &mut light.base,
            Self::Point(light) => &mut light.base,
            Self::Spot(light) => light.base_mut(),
        }
    }

    /// Light name
    pub fn name(&self) -> &str {
        self.base().name()
    }

    /// Light type tag
    pub fn light_type(&self) -> LightType {
        match self {
            Self::Ambient(_) => LightType::Ambient,
            Self::Directional(_) => LightType::Directional,
            Self::Point(_) => LightType::Point,
            Self::Spot(_) => LightType::Spot,
        }
    }

    /// Whether parameters are uploaded per frame
    pub fn is_dynamic(&self) -> bool {
        self.base().is_dynamic()
    }

    /// Space the light's parameters are expressed in
    pub fn origin(&self) -> LightOrigin {
        self.base().origin()
    }

    /// Set the space the light's parameters are expressed in
    pub fn set_origin(&mut self, origin: LightOrigin) {
        self.base_mut().origin = origin;
    }

    /// Set the ambient colour
    pub fn set_ambient(&mut self, color: Vec4) {
        self.base_mut().ambient = color;
    }

    /// Set the diffuse colour
    pub fn set_diffuse(&mut self, color: Vec4) {
        self.base_mut().diffuse = color;
    }

    /// Set the specular colour
    pub fn set_specular(&mut self, color: Vec4) {
        self.base_mut().specular = color;
    }

    /// GLSL struct name of this light's type; constant per type
    pub fn type_name(&self) -> &'static str {
        self.light_type().type_name()
    }

    /// Type-level struct and function source, shared by all lights of this type
    pub fn class_block<'c>(&self, cache: &'c ShaderFragmentCache) -> &'c str {
        self.light_type().class_block(cache)
    }

    /// Preprocessor text this instance needs
    pub fn instance_defines_block(&self) -> String {
        match self {
            Self::Ambient(_) | Self::Directional(_) => "\n".to_string(),
            Self::Point(_) | Self::Spot(_) => "#define MAP_LIGHTING_USES_POSITION\n".to_string(),
        }
    }

    /// Constructor expression for a static light, empty for a dynamic one
    ///
    /// Always parenthesis-balanced.
    pub fn instance_assign_block(&self) -> String {
        match self {
            Self::Ambient(light) => light.instance_assign_block(),
            Self::Directional(light) => light.instance_assign_block(),
            Self::Point(light) => light.instance_assign_block(),
            Self::Spot(light) => light.instance_assign_block(),
        }
    }

    /// Global declaration of this light's struct instance
    pub fn instance_block(&self) -> String {
        self.base().instance_block(self.light_type(), &self.instance_assign_block())
    }

    /// Statement run at the top of `main()`; copies the uniform for dynamic lights
    pub fn instance_setup_block(&self) -> String {
        self.base().setup_block()
    }

    /// Call that adds this light's contribution inside `calculateLighting()`
    pub fn instance_compute_block(&self) -> String {
        self.base().compute_block()
    }

    /// Add this light's source blocks to `program`
    ///
    /// Returns the uniform handle for a dynamic light and `None` for a static
    /// one, whose values are already compiled into the source.
    pub fn inject_on_program(
        &self,
        program: &mut dyn ShaderProgram,
        cache: &ShaderFragmentCache,
    ) -> Option<LightUniforms> {
        program.add_source_block(tags::DEFINES, &self.instance_defines_block(), false);
        program.add_source_block(tags::LIGHTING, self.class_block(cache), false);
        program.add_source_block(tags::LIGHTING, &self.instance_block(), true);
        if self.is_dynamic() {
            program.add_source_block(tags::SETUP, &self.instance_setup_block(), true);
        }
        program.add_source_block(tags::LIGHTS_TO_COMPUTE, &self.instance_compute_block(), true);

        if !self.is_dynamic() {
            return None;
        }

        let base = self.base().uniforms();
        Some(match self {
            Self::Ambient(_) => LightUniforms::Ambient(base),
            Self::Directional(light) => LightUniforms::Directional(light.uniforms(base)),
            Self::Point(light) => LightUniforms::Point(light.uniforms(base)),
            Self::Spot(light) => LightUniforms::Spot(light.uniforms(base)),
        })
    }

    /// Upload this light's per-frame uniforms
    ///
    /// Call once per frame with the program bound, passing the handle
    /// returned by [`Light::inject_on_program`]. A handle belonging to a
    /// different light type is ignored.
    pub fn setup_program(&self, view: &dyn View, program: &mut dyn ShaderProgram, uniforms: &LightUniforms) {
        match (self, uniforms) {
            (Self::Ambient(light), LightUniforms::Ambient(u)) => light.setup_program(program, u),
            (Self::Directional(light), LightUniforms::Directional(u)) => light.setup_program(view, program, u),
            (Self::Point(light), LightUniforms::Point(u)) => light.setup_program(view, program, u),
            (Self::Spot(light), LightUniforms::Spot(u)) => light.setup_program(view, program, u),
            _ => {
                log::warn!("Uniform handle does not match light '{}'; skipping upload", self.name());
            }
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(light: AmbientLight) -> Self {
        Self::Ambient(light)
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Self::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Self::Point(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Self::Spot(light)
    }
}

fn is_glsl_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn checked_direction(name: &str, direction: [f32; 3]) -> Result<Vec3, LightError> {
    let direction = Vec3::from(direction);
    let length_squared = direction.norm_squared();
    if !length_squared.is_finite() || length_squared <= f32::EPSILON {
        return Err(LightError::DegenerateDirection(name.to_string()));
    }
    Ok(direction)
}

fn checked_finite<const N: usize>(name: &str, parameter: &'static str, values: [f32; N]) -> Result<[f32; N], LightError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(values)
    } else {
        Err(LightError::NonFinite { name: name.to_string(), parameter })
    }
}

impl TryFrom<&LightConfig> for Light {
    type Error = LightError;

    fn try_from(config: &LightConfig) -> Result<Self, Self::Error> {
        let name = config.name.as_str();
        if !is_glsl_identifier(name) {
            return Err(LightError::InvalidName(config.name.clone()));
        }

        let mut light: Light = match config.light_type {
            LightType::Ambient => AmbientLight::new(name, config.dynamic).into(),
            LightType::Directional => {
                let mut light = DirectionalLight::new(name, config.dynamic);
                if let Some(direction) = config.direction {
                    light.set_direction(checked_direction(name, direction)?);
                }
                light.into()
            }
            LightType::Point => {
                let mut light = PointLight::new(name, config.dynamic);
                apply_point_config(&mut light, config)?;
                light.into()
            }
            LightType::Spot => {
                let mut light = SpotLight::new(name, config.dynamic);
                apply_point_config(light.point_mut(), config)?;
                if let Some(direction) = config.direction {
                    light.set_direction(checked_direction(name, direction)?);
                }
                if let Some(angle) = config.angle {
                    let [angle] = checked_finite(name, "angle", [angle])?;
                    light.set_cutoff_angle(utils::deg_to_rad(angle));
                }
                if let Some(exponent) = config.exponent {
                    let [exponent] = checked_finite(name, "exponent", [exponent])?;
                    light.set_cutoff_exponent(exponent);
                }
                light.into()
            }
        };

        light.set_origin(config.origin);
        if let Some(ambient) = config.ambient {
            light.set_ambient(Vec4::from(checked_finite(name, "ambient", ambient)?));
        }
        if let Some(diffuse) = config.diffuse {
            light.set_diffuse(Vec4::from(checked_finite(name, "diffuse", diffuse)?));
        }
        if let Some(specular) = config.specular {
            light.set_specular(Vec4::from(checked_finite(name, "specular", specular)?));
        }

        Ok(light)
    }
}

fn apply_point_config(light: &mut PointLight, config: &LightConfig) -> Result<(), LightError> {
    let name = config.name.as_str();
    if let Some(position) = config.position {
        light.set_position(Vec3::from(checked_finite(name, "position", position)?));
    }
    if let Some(attenuation) = config.attenuation {
        let [attenuation] = checked_finite(name, "attenuation", [attenuation])?;
        light.set_attenuation(attenuation);
    }
    if let Some([inner, outer]) = config.radius {
        let ordered = inner >= 0.0 && outer >= inner;
        if !ordered || !outer.is_finite() {
            return Err(LightError::InvalidRadius { name: config.name.clone(), inner, outer });
        }
        light.set_radius(inner, outer);
    }
    Ok(())
}

/// Build every light of a lighting configuration, in declaration order
pub fn lights_from_config(config: &crate::core::config::LightingConfig) -> Result<Vec<Light>, LightError> {
    config.lights.iter().map(Light::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;
    use crate::core::config::{ApplicationConfig, Config, LightingConfig};
    use crate::render::shader::ShaderSource;
    use approx::assert_relative_eq;

    /// Parentheses never close before they open and end balanced
    fn is_balanced(text: &str) -> bool {
        let mut depth = 0i32;
        for c in text.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0
    }

    fn every_type(dynamic: bool) -> Vec<Light> {
        vec![
            AmbientLight::new("a", dynamic).into(),
            DirectionalLight::new("d", dynamic).into(),
            PointLight::new("p", dynamic).into(),
            SpotLight::new("s", dynamic).into(),
        ]
    }

    #[test]
    fn test_assign_blocks_are_balanced_for_every_type() {
        for light in every_type(false).into_iter().chain(every_type(true)) {
            let assign = light.instance_assign_block();
            assert!(is_balanced(&assign), "unbalanced assign block for {}: {assign}", light.type_name());
            assert!(is_balanced(&light.instance_block()));
        }
    }

    #[test]
    fn test_static_instance_block_declares_constructed_global() {
        let light: Light = DirectionalLight::new("sun", false).into();
        let block = light.instance_block();
        assert!(block.starts_with("DirectionalLight g_sun = DirectionalLight(vec4("));
        assert!(block.ends_with(");\n"));
        assert!(!block.contains("uniform"));
        assert!(light.instance_setup_block().is_empty());
    }

    #[test]
    fn test_dynamic_instance_block_declares_uniform_and_copies_it() {
        let light: Light = DirectionalLight::new("sun", true).into();
        assert_eq!(light.instance_assign_block(), "");
        assert_eq!(light.instance_block(), "uniform DirectionalLight u_sun;\nDirectionalLight g_sun;\n");
        assert_eq!(light.instance_setup_block(), "g_sun = u_sun;\n");
        assert_eq!(light.instance_compute_block(), "calculateLight(g_sun, eyeToPoint, normal);\n");
    }

    #[test]
    fn test_class_blocks_end_with_newline_and_name_their_struct() {
        let cache = ShaderFragmentCache::new();
        for light in every_type(false) {
            let block = light.class_block(&cache);
            assert!(block.contains(&format!("struct {}", light.type_name())));
            assert!(block.ends_with('\n'));
        }
        assert_eq!(cache.generated_count(), LightType::COUNT);
    }

    #[test]
    fn test_inject_returns_handle_only_for_dynamic_lights() {
        let cache = ShaderFragmentCache::new();
        let mut source = ShaderSource::new();

        for light in every_type(false) {
            assert!(light.inject_on_program(&mut source, &cache).is_none());
        }
        for light in every_type(true) {
            assert!(light.inject_on_program(&mut source, &cache).is_some());
        }
    }

    #[test]
    fn test_class_block_injected_once_per_program() {
        let cache = ShaderFragmentCache::new();
        let mut source = ShaderSource::new();

        let a: Light = PointLight::new("lamp_a", false).into();
        let b: Light = PointLight::new("lamp_b", false).into();
        a.inject_on_program(&mut source, &cache);
        b.inject_on_program(&mut source, &cache);

        let lighting = source.joined(tags::LIGHTING);
        assert_eq!(lighting.matches("struct PointLight").count(), 1);
        assert!(lighting.contains("PointLight g_lamp_a = PointLight("));
        assert!(lighting.contains("PointLight g_lamp_b = PointLight("));
        assert_eq!(source.blocks(tags::DEFINES).len(), 1);
        assert_eq!(source.blocks(tags::LIGHTS_TO_COMPUTE).len(), 2);
    }

    #[test]
    fn test_setters_never_change_type_or_mode() {
        let mut light: Light = DirectionalLight::new("sun", true).into();
        light.set_origin(LightOrigin::Camera);
        light.set_diffuse(Vec4::new(0.5, 0.5, 0.5, 1.0));
        if let Light::Directional(directional) = &mut light {
            directional.set_direction(Vec3::new(1.0, 1.0, 0.0));
        }
        assert_eq!(light.light_type(), LightType::Directional);
        assert!(light.is_dynamic());
        assert_eq!(light.origin(), LightOrigin::Camera);
    }

    #[test]
    fn test_lights_from_config() {
        let mut sun = LightConfig::new("sun", LightType::Directional);
        sun.direction = Some([0.0, 0.0, -2.0]);
        sun.dynamic = true;
        sun.diffuse = Some([1.0, 0.9, 0.8, 1.0]);

        let mut spot = LightConfig::new("torch", LightType::Spot);
        spot.angle = Some(90.0);
        spot.exponent = Some(2.0);
        spot.radius = Some([1.0, 50.0]);

        let lights = lights_from_config(&LightingConfig { lights: vec![sun, spot] }).unwrap();
        assert_eq!(lights.len(), 2);

        let Light::Directional(sun) = &lights[0] else { panic!("expected directional light") };
        assert_relative_eq!(sun.direction(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_eq!(sun.base().diffuse(), Vec4::new(1.0, 0.9, 0.8, 1.0));
        assert!(lights[0].is_dynamic());

        let Light::Spot(spot) = &lights[1] else { panic!("expected spot light") };
        assert_relative_eq!(spot.cutoff_angle(), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(spot.point().radius(), (1.0, 50.0));
    }

    #[test]
    fn test_config_rejects_bad_lights() {
        let bad_name = LightConfig::new("my light", LightType::Ambient);
        assert_eq!(Light::try_from(&bad_name), Err(LightError::InvalidName("my light".to_string())));

        let leading_digit = LightConfig::new("1sun", LightType::Ambient);
        assert!(matches!(Light::try_from(&leading_digit), Err(LightError::InvalidName(_))));

        let mut zero = LightConfig::new("sun", LightType::Directional);
        zero.direction = Some([0.0, 0.0, 0.0]);
        assert_eq!(Light::try_from(&zero), Err(LightError::DegenerateDirection("sun".to_string())));

        let mut radius = LightConfig::new("lamp", LightType::Point);
        radius.radius = Some([10.0, 5.0]);
        assert!(matches!(Light::try_from(&radius), Err(LightError::InvalidRadius { .. })));
    }

    fn first_light(toml_light: &str) -> Result<Light, LightError> {
        let text = format!("[[lighting.lights]]\n{toml_light}");
        let config = ApplicationConfig::parse(&text, ConfigFormat::Toml).unwrap();
        Light::try_from(&config.lighting.lights[0])
    }

    #[test]
    fn test_config_rejects_non_finite_values() {
        let nan_direction = first_light("name = \"sun\"\ntype = \"directional\"\ndirection = [nan, 0.0, 0.0]");
        assert_eq!(nan_direction, Err(LightError::DegenerateDirection("sun".to_string())));

        let inf_direction = first_light("name = \"sun\"\ntype = \"spot\"\ndirection = [inf, 0.0, 0.0]");
        assert_eq!(inf_direction, Err(LightError::DegenerateDirection("sun".to_string())));

        let nan_radius = first_light("name = \"lamp\"\ntype = \"point\"\nradius = [nan, nan]");
        assert!(matches!(nan_radius, Err(LightError::InvalidRadius { .. })));

        let inf_radius = first_light("name = \"lamp\"\ntype = \"point\"\nradius = [1.0, inf]");
        assert!(matches!(inf_radius, Err(LightError::InvalidRadius { .. })));

        let cases = [
            ("type = \"ambient\"\ndiffuse = [inf, 1.0, 1.0, 1.0]", "diffuse"),
            ("type = \"ambient\"\nambient = [0.0, nan, 0.0, 1.0]", "ambient"),
            ("type = \"directional\"\nspecular = [0.0, 0.0, -inf, 1.0]", "specular"),
            ("type = \"point\"\nposition = [0.0, nan, 0.0]", "position"),
            ("type = \"point\"\nattenuation = inf", "attenuation"),
            ("type = \"spot\"\nangle = nan", "angle"),
            ("type = \"spot\"\nexponent = -inf", "exponent"),
        ];
        for (fields, parameter) in cases {
            let result = first_light(&format!("name = \"bad\"\n{fields}"));
            assert_eq!(result, Err(LightError::NonFinite { name: "bad".to_string(), parameter }), "{fields}");
        }
    }

    #[test]
    fn test_pass_from_config_never_bakes_non_finite_literals() {
        let text = r#"
            [[lighting.lights]]
            name = "moon"
            type = "directional"
            direction = [nan, 0.0, 0.0]
        "#;
        let config = ApplicationConfig::parse(text, ConfigFormat::Toml).unwrap();
        assert!(LightingPass::from_config(&config.lighting).is_err());
    }
}
