//! Recording collaborators for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::{DMat4, Mat3, Mat4, Vec3, Vec4};
use crate::render::shader::{ShaderProgram, UniformLocation, UniformValue};
use crate::render::mesh::VboMesh;
use crate::render::view::View;

/// View with fixed matrices
#[derive(Debug, Clone)]
pub struct FixedView {
    pub normal: Mat3,
    pub view: Mat4,
    pub view_projection: DMat4,
}

impl FixedView {
    pub fn with_normal_matrix(normal: Mat3) -> Self {
        Self { normal, ..Self::default() }
    }
}

impl Default for FixedView {
    fn default() -> Self {
        Self {
            normal: Mat3::identity(),
            view: Mat4::identity(),
            view_projection: DMat4::identity(),
        }
    }
}

impl View for FixedView {
    fn normal_matrix(&self) -> Mat3 {
        self.normal
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn view_projection_matrix(&self) -> DMat4 {
        self.view_projection
    }
}

/// Program that records every source block and uniform upload
#[derive(Debug, Default)]
pub struct RecordingProgram {
    pub uploads: Vec<(String, UniformValue)>,
}

impl RecordingProgram {
    pub fn uploaded_names(&self) -> Vec<&str> {
        self.uploads.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn last(&self, name: &str) -> Option<UniformValue> {
        self.uploads.iter().rev().find(|(n, _)| n == name).map(|(_, value)| *value)
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.last(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.last(name)? {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn vec4(&self, name: &str) -> Option<Vec4> {
        match self.last(name)? {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn mat4(&self, name: &str) -> Option<Mat4> {
        match self.last(name)? {
            UniformValue::Mat4(v) => Some(v),
            _ => None,
        }
    }
}

impl ShaderProgram for RecordingProgram {
    fn add_source_block(&mut self, _tag: &str, _block: &str, _allow_duplicate: bool) -> bool {
        true
    }

    fn set_uniform(&mut self, location: &UniformLocation, value: UniformValue) {
        self.uploads.push((location.name().to_string(), value));
    }
}

/// Shared record of which meshes were drawn and how many were released
#[derive(Debug, Default, Clone)]
pub struct MeshLog {
    pub drawn: Rc<RefCell<Vec<&'static str>>>,
    pub released: Rc<RefCell<Vec<&'static str>>>,
}

impl MeshLog {
    pub fn mesh(&self, label: &'static str) -> Box<LabelledMesh> {
        Box::new(LabelledMesh { label, log: self.clone() })
    }

    pub fn drawn(&self) -> Vec<&'static str> {
        self.drawn.borrow().clone()
    }

    pub fn released(&self) -> Vec<&'static str> {
        self.released.borrow().clone()
    }
}

/// Mesh that logs draws and its own release
#[derive(Debug)]
pub struct LabelledMesh {
    label: &'static str,
    log: MeshLog,
}

impl Drop for LabelledMesh {
    fn drop(&mut self) {
        self.log.released.borrow_mut().push(self.label);
    }
}

impl VboMesh for LabelledMesh {
    fn draw(&self, _program: &mut dyn ShaderProgram) {
        self.log.drawn.borrow_mut().push(self.label);
    }

    fn vertex_count(&self) -> usize {
        3
    }
}
