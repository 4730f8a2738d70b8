//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Rotations are right-handed: a positive angle turns counter-clockwise
//!   when looking down the axis toward the origin
//!
//! # Example
//! ```ignore
//! let transform = rotation * scale;  // scale applied first, then rotation
//! let result = transform * vertex;   // transform the vertex
//! ```

use std::ops::Mul;

use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Y axis.
    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix around the Z axis.
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix for a camera looking down +z.
    ///
    /// # Arguments
    ///
    /// * `fov_y` - Vertical field of view in radians.
    /// * `aspect` - Height divided by width; scales x so square pixels stay square.
    /// * `near`, `far` - Distances to the near and far planes.
    ///
    /// The last row copies camera-space z into w, so dividing by w afterwards
    /// (see [`Mat4::project`]) yields normalized device coordinates.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth_scale = far / (far - near);
        Mat4::new([
            [aspect * f, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, depth_scale, -depth_scale * near],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Multiplies `v` by this matrix and performs the perspective divide.
    ///
    /// Returns `None` when w is (nearly) zero or the divide produces a
    /// non-finite value; the caller drops such geometry instead of drawing it.
    /// The returned `w` is the original clip-space w.
    pub fn project(&self, v: Vec4) -> Option<Vec4> {
        let clip = *self * v;
        if clip.w.abs() < f32::EPSILON {
            return None;
        }

        let ndc = Vec4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w);
        ndc.is_finite().then_some(ndc)
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let row = |r: usize| {
            self.data[r][0] * v.x
                + self.data[r][1] * v.y
                + self.data[r][2] * v.z
                + self.data[r][3] * v.w
        };
        Vec4::new(row(0), row(1), row(2), row(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

    fn assert_vec4_eq(a: Vec4, b: Vec4) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
        assert_relative_eq!(a.w, b.w, epsilon = 1e-4);
    }

    #[test]
    fn identity_leaves_vectors_untouched() {
        for v in [
            Vec4::new(0.0, 0.0, 0.0, 0.0),
            Vec4::new(1.5, -2.25, 1e6, 1.0),
            Vec4::new(-0.1, 0.3, -7.0, 0.5),
        ] {
            assert_eq!(Mat4::identity() * v, v);
        }
    }

    #[test]
    fn full_turn_returns_to_start() {
        let p = Vec4::point(1.0, -2.0, 3.0);
        for rotation in [
            Mat4::rotation_x(TAU),
            Mat4::rotation_y(TAU),
            Mat4::rotation_z(TAU),
        ] {
            assert_vec4_eq(rotation * p, p);
        }
    }

    #[test]
    fn quarter_turns_are_counter_clockwise() {
        assert_vec4_eq(
            Mat4::rotation_z(FRAC_PI_2) * Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
        );
        assert_vec4_eq(
            Mat4::rotation_x(FRAC_PI_2) * Vec4::point(0.0, 1.0, 0.0),
            Vec4::point(0.0, 0.0, 1.0),
        );
        assert_vec4_eq(
            Mat4::rotation_y(FRAC_PI_2) * Vec4::point(0.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn composition_is_associative() {
        let a = Mat4::translation(1.0, 2.0, 3.0);
        let b = Mat4::rotation_y(0.7) * Mat4::rotation_x(-0.3);
        let c = Mat4::scaling(2.0, 0.5, 1.5);
        let p = Vec4::point(0.25, -1.0, 4.0);

        assert_vec4_eq(((a * b) * c) * p, (a * (b * c)) * p);
        assert_vec4_eq((a * b * c) * p, a * (b * (c * p)));
    }

    #[test]
    fn composition_order_matters() {
        let translate = Mat4::translation(5.0, 0.0, 0.0);
        let rotate = Mat4::rotation_z(FRAC_PI_2);
        let p = Vec4::point(1.0, 0.0, 0.0);

        // Rotate first, then translate.
        assert_vec4_eq((translate * rotate) * p, Vec4::point(5.0, 1.0, 0.0));
        // Translate first, then rotate.
        assert_vec4_eq((rotate * translate) * p, Vec4::point(0.0, 6.0, 0.0));
    }

    #[test]
    fn scale_then_translate() {
        let m = Mat4::translation(0.0, 0.0, 5.0) * Mat4::scaling(2.0, 3.0, 4.0);
        assert_vec4_eq(m * Vec4::point(1.0, 1.0, 1.0), Vec4::point(2.0, 3.0, 9.0));
    }

    #[test]
    fn perspective_copies_depth_into_w() {
        let proj = Mat4::perspective(FRAC_PI_3, 0.75, 0.1, 100.0);
        let clip = proj * Vec4::point(1.0, 1.0, 5.0);
        assert_relative_eq!(clip.w, 5.0);
    }

    #[test]
    fn project_maps_near_and_far_planes() {
        let proj = Mat4::perspective(FRAC_PI_3, 1.0, 0.1, 100.0);
        let near = proj.project(Vec4::point(0.0, 0.0, 0.1)).unwrap();
        let far = proj.project(Vec4::point(0.0, 0.0, 100.0)).unwrap();
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn project_divides_by_w() {
        let proj = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
        // tan(45°) = 1, so a point at x == z lands on the right edge.
        let ndc = proj.project(Vec4::point(2.0, -2.0, 2.0)).unwrap();
        assert_relative_eq!(ndc.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn project_rejects_zero_w() {
        let proj = Mat4::perspective(FRAC_PI_3, 1.0, 0.1, 100.0);
        assert!(proj.project(Vec4::point(1.0, 1.0, 0.0)).is_none());
    }
}
