//! # Unified Configuration System
//!
//! Configuration for engine behavior and for the lights of a scene. Both load
//! from TOML or RON through the [`Config`] trait.
//!
//! ```toml
//! [engine]
//! log_level = "debug"
//!
//! [[lighting.lights]]
//! name = "sun"
//! type = "directional"
//! dynamic = true
//! direction = [0.0, -1.0, 0.0]
//! ```

use serde::{Serialize, Deserialize};

use crate::render::lighting::{LightOrigin, LightType};

pub use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Core engine behavior: logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Light Configuration
///
/// Declarative description of one scene light. Fields that do not apply to
/// the light's type are ignored when the light is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    /// Unique light name, used to derive shader identifiers
    pub name: String,
    /// Light variant
    #[serde(rename = "type")]
    pub light_type: LightType,
    /// Space the direction/position is expressed in
    #[serde(default)]
    pub origin: LightOrigin,
    /// Whether the light is driven by uniforms instead of baked constants
    #[serde(default)]
    pub dynamic: bool,
    /// Ambient RGBA colour
    #[serde(default)]
    pub ambient: Option<[f32; 4]>,
    /// Diffuse RGBA colour
    #[serde(default)]
    pub diffuse: Option<[f32; 4]>,
    /// Specular RGBA colour
    #[serde(default)]
    pub specular: Option<[f32; 4]>,
    /// Direction (directional and spot lights)
    #[serde(default)]
    pub direction: Option<[f32; 3]>,
    /// Position (point and spot lights)
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    /// Attenuation exponent (point and spot lights)
    #[serde(default)]
    pub attenuation: Option<f32>,
    /// Inner and outer falloff radius (point and spot lights)
    #[serde(default)]
    pub radius: Option<[f32; 2]>,
    /// Cone cutoff angle in degrees (spot lights)
    #[serde(default)]
    pub angle: Option<f32>,
    /// Cone falloff exponent (spot lights)
    #[serde(default)]
    pub exponent: Option<f32>,
}

impl LightConfig {
    /// Minimal configuration for a light of the given type
    pub fn new(name: impl Into<String>, light_type: LightType) -> Self {
        Self {
            name: name.into(),
            light_type,
            origin: LightOrigin::default(),
            dynamic: false,
            ambient: None,
            diffuse: None,
            specular: None,
            direction: None,
            position: None,
            attenuation: None,
            radius: None,
            angle: None,
            exponent: None,
        }
    }
}

/// # Lighting Configuration
///
/// The ordered set of lights a scene's shaders are built with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Lights in declaration order
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

/// # Complete Application Configuration
///
/// Top-level configuration applications load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Engine core configuration
    #[serde(default)]
    pub engine: EngineConfig,
    /// Scene lighting
    #[serde(default)]
    pub lighting: LightingConfig,
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_engine_defaults_and_log_level_override() {
        assert_eq!(EngineConfig::default().log_level, "info");

        let engine = EngineConfig::new().with_log_level("warn");
        let text = toml::to_string(&engine).unwrap();
        let parsed: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.log_level, "warn");
    }

    #[test]
    fn test_parse_toml_lights() {
        let text = r#"
            [engine]
            log_level = "debug"

            [[lighting.lights]]
            name = "sun"
            type = "directional"
            dynamic = true
            direction = [0.0, -1.0, 0.0]

            [[lighting.lights]]
            name = "lamp"
            type = "point"
            origin = "camera"
            position = [0.0, 0.0, 100.0]
            radius = [10.0, 200.0]
        "#;

        let config = ApplicationConfig::parse(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.engine.log_level, "debug");
        assert_eq!(config.lighting.lights.len(), 2);

        let sun = &config.lighting.lights[0];
        assert_eq!(sun.light_type, LightType::Directional);
        assert_eq!(sun.origin, LightOrigin::World);
        assert!(sun.dynamic);

        let lamp = &config.lighting.lights[1];
        assert_eq!(lamp.light_type, LightType::Point);
        assert_eq!(lamp.origin, LightOrigin::Camera);
        assert!(!lamp.dynamic);
        assert_eq!(lamp.radius, Some([10.0, 200.0]));
    }

    #[test]
    fn test_parse_ron_lights() {
        let text = r#"(
            lighting: (
                lights: [
                    (name: "fill", type: ambient, ambient: Some((0.2, 0.2, 0.2, 1.0))),
                ],
            ),
        )"#;

        let config = ApplicationConfig::parse(text, ConfigFormat::Ron).unwrap();
        assert_eq!(config.engine.log_level, "info");
        assert_eq!(config.lighting.lights[0].light_type, LightType::Ambient);
        assert_eq!(config.lighting.lights[0].ambient, Some([0.2, 0.2, 0.2, 1.0]));
    }

    #[test]
    fn test_unknown_light_type_is_a_parse_error() {
        let text = r#"
            [[lighting.lights]]
            name = "x"
            type = "laser"
        "#;
        assert!(matches!(
            ApplicationConfig::parse(text, ConfigFormat::Toml),
            Err(ConfigError::Parse(_))
        ));
    }
}
