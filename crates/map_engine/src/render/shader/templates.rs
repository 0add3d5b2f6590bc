//! Shader templates with `#pragma map:` expansion points

/// Fragment shader for lit polygon styles
///
/// Expands `defines`, `lighting`, `lights_to_compute` and `setup`.
pub const POLYGON_FRAGMENT: &str = include_str!("../../../shaders/polygon.fs");
