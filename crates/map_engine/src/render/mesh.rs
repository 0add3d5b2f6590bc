//! GPU mesh contract
//!
//! A mesh owns its GPU buffers and releases them when dropped. Vertex
//! coordinates are relative to the origin of the tile that owns the mesh.

use std::fmt;

use crate::render::shader::ShaderProgram;

/// GPU-resident mesh
pub trait VboMesh: fmt::Debug {
    /// Issue the draw call with `program` bound and configured
    fn draw(&self, program: &mut dyn ShaderProgram);

    /// Number of vertices uploaded
    fn vertex_count(&self) -> usize;
}
