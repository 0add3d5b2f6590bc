//! # Map Engine
//!
//! Drawable geometry and scene lighting for a real-time vector map renderer.
//!
//! ## Features
//!
//! - **Map tiles**: per-tile, per-style GPU meshes placed in projected space
//! - **Lights**: ambient, directional, point and spot lights that generate
//!   their own GLSL, either baked as constants or driven by uniforms
//! - **Shader assembly**: tagged source blocks expanded into a template, with
//!   type-level light code generated once per build session
//! - **Configuration**: scene lights loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use map_engine::prelude::*;
//!
//! let pass = LightingPass::new(vec![
//!     DirectionalLight::new("sun", true).into(),
//!     AmbientLight::new("fill", false).into(),
//! ])?;
//!
//! // Build phase, once per program
//! let cache = ShaderFragmentCache::new();
//! let mut source = ShaderSource::new();
//! let bindings = pass.inject(&mut source, &cache);
//! let fragment = source.assemble("#pragma map: defines\n#pragma map: lighting\n");
//! # let _ = (bindings, fragment);
//! # Ok::<(), LightError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod foundation;
pub mod config;
pub mod render;
pub mod tile;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, Config, EngineConfig, LightConfig, LightingConfig},
        foundation::math::{DMat4, DVec2, Mat3, Mat4, Vec3, Vec4},
        render::{
            lighting::{
                AmbientLight, DirectionalLight, Light, LightBindings, LightError, LightOrigin, LightParamsMut,
                LightType, LightUniforms, LightingPass, PointLight, SpotLight,
            },
            Camera, RenderError, ShaderFragmentCache, ShaderProgram, ShaderSource, UniformLocation,
            UniformValue, VboMesh, View,
        },
        tile::{MapProjection, MapTile, MercatorProjection, TileBounds, TileId},
    };
}
