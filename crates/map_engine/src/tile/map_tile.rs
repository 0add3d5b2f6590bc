//! Tile of vector map data
//!
//! A `MapTile` covers a fixed area of the map at one zoom level. It knows its
//! place in the tile quadtree and in projected space, and owns the drawable
//! geometry built for its area, one mesh per style.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};

use super::projection::MapProjection;
use super::tile_id::TileId;
use crate::foundation::math::{utils, DMat4, DVec2, Vector3};
use crate::render::mesh::VboMesh;
use crate::render::shader::{ShaderProgram, UniformLocation, UniformValue};

const MODEL_VIEW_PROJ: UniformLocation = UniformLocation::from_static("u_modelViewProj");

/// Drawable geometry of one map tile
#[derive(Debug)]
pub struct MapTile {
    id: TileId,
    projection: Arc<dyn MapProjection>,
    scale: f32,
    inverse_scale: f32,
    /// Centre of the tile in projected metres
    origin: DVec2,
    /// Translation from the world origin to `origin`
    model_matrix: DMat4,
    geometry: HashMap<String, Box<dyn VboMesh>>,
}

impl MapTile {
    /// Create an empty tile placed by `projection`
    pub fn new(id: TileId, projection: Arc<dyn MapProjection>) -> Self {
        let bounds = projection.tile_bounds(id);
        let scale = bounds.width() as f32;
        let origin = bounds.center();

        Self {
            id,
            projection,
            scale,
            inverse_scale: 1.0 / scale,
            origin,
            model_matrix: DMat4::new_translation(&Vector3::new(origin.x, origin.y, 0.0)),
            geometry: HashMap::new(),
        }
    }

    /// Immutable quadtree identity
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Centre of the tile in projection units
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Projection the tile's coordinates are interpreted with
    pub fn projection(&self) -> &dyn MapProjection {
        self.projection.as_ref()
    }

    /// Side length of the tile in projection units
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Reciprocal of [`Self::scale`]
    pub fn inverse_scale(&self) -> f32 {
        self.inverse_scale
    }

    /// Model matrix
    pub fn model_matrix(&self) -> &DMat4 {
        &self.model_matrix
    }

    /// Attach the mesh built for `style`
    ///
    /// Mesh coordinates must be relative to the tile origin. A mesh already
    /// registered for `style` is dropped, releasing its GPU resources.
    pub fn add_geometry(&mut self, style: impl Into<String>, mesh: Box<dyn VboMesh>) {
        let style = style.into();
        if let Some(previous) = self.geometry.insert(style, mesh) {
            debug!("Tile {} replaced mesh of {} vertices", self.id, previous.vertex_count());
        }
    }

    /// Whether a mesh is registered for `style`
    pub fn has_geometry(&self, style: &str) -> bool {
        self.geometry.contains_key(style)
    }

    /// Number of styles with geometry on this tile
    pub fn style_count(&self) -> usize {
        self.geometry.len()
    }

    /// Styles with geometry on this tile, in no particular order
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.geometry.keys().map(String::as_str)
    }

    /// Draw the mesh of `style` with `program`
    ///
    /// `program` must already be bound and configured for `style`. Uploads
    /// `u_modelViewProj = view_proj * model_matrix` before drawing. Returns
    /// `false` without touching the program when the tile has no geometry
    /// for `style`.
    pub fn draw(&self, style: &str, program: &mut dyn ShaderProgram, view_proj: &DMat4) -> bool {
        let Some(mesh) = self.geometry.get(style) else {
            return false;
        };

        let model_view_proj = view_proj * self.model_matrix;
        program.set_uniform(&MODEL_VIEW_PROJ, UniformValue::Mat4(utils::to_f32_matrix(&model_view_proj)));
        mesh.draw(program);

        trace!("Drew style '{style}' of tile {}", self.id);
        true
    }
}
