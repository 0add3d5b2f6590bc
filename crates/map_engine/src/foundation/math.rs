//! Math utilities and types
//!
//! Single-precision types are what shaders consume. Tile placement works in
//! projected metres, which need double precision at high zoom levels.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix3, Matrix4,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Double precision 2D vector, used for projected coordinates
pub type DVec2 = Vector2<f64>;

/// Double precision 4x4 matrix, used for tile model and view-projection transforms
pub type DMat4 = Matrix4<f64>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Narrow a double precision matrix to the single precision layout shaders take
    pub fn to_f32_matrix(matrix: &DMat4) -> Mat4 {
        matrix.map(|v| v as f32)
    }
}

/// GLSL literal formatting for vectors baked into generated shader source
pub trait GlslLiteral {
    /// Render the value as a GLSL constructor expression, e.g. `vec3(1.0, 0.0, 0.0)`
    fn to_glsl(&self) -> String;
}

/// Format a float so GLSL always parses it as a float literal
fn glsl_float(value: f32) -> String {
    let text = format!("{value:?}");
    if text.contains('.') || text.contains('e') || text.contains("inf") || text.contains("NaN") {
        text
    } else {
        format!("{text}.0")
    }
}

impl GlslLiteral for f32 {
    fn to_glsl(&self) -> String {
        glsl_float(*self)
    }
}

impl GlslLiteral for Vec3 {
    fn to_glsl(&self) -> String {
        format!("vec3({}, {}, {})", glsl_float(self.x), glsl_float(self.y), glsl_float(self.z))
    }
}

impl GlslLiteral for Vec4 {
    fn to_glsl(&self) -> String {
        format!(
            "vec4({}, {}, {}, {})",
            glsl_float(self.x),
            glsl_float(self.y),
            glsl_float(self.z),
            glsl_float(self.w)
        )
    }
}
