//! View collaborator: the matrices lights and tiles read each frame

use crate::foundation::math::{DMat4, Mat3, Mat4, Vec3};

/// Per-frame view state
pub trait View {
    /// Transform from world to eye space for directions
    fn normal_matrix(&self) -> Mat3;

    /// Transform from world to eye space for positions
    fn view_matrix(&self) -> Mat4;

    /// Combined view and projection transform
    fn view_projection_matrix(&self) -> DMat4;
}

/// Perspective camera
///
/// Uses the right-handed, Y-up GL convention the generated GLSL expects.
/// Matrices are computed on demand.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the world origin
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: crate::foundation::math::utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Point the camera at `target`
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
    }

    /// Projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }
}

impl View for Camera {
    fn normal_matrix(&self) -> Mat3 {
        // Inverse transpose of the upper 3x3; a rigid view makes that the rotation itself
        let upper = self.view_matrix().fixed_view::<3, 3>(0, 0).into_owned();
        upper.try_inverse().map_or(upper, |inverse| inverse.transpose())
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(&self.position.into(), &self.target.into(), &self.up)
    }

    fn view_projection_matrix(&self) -> DMat4 {
        (self.projection_matrix() * self.view_matrix()).cast::<f64>()
    }
}
