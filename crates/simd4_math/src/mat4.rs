//! 4x4 column-major matrix
//!
//! Columns are stored as four [`Vec4`]s, so the flat layout is
//! `m00, m10, m20, m30, m01, ...` (index = column * 4 + row). This is the
//! layout graphics APIs expect for column-major uniform uploads.
//!
//! Two multiplication conventions exist and they are deliberately different:
//! - `Mat4 * Vec4` treats the vector as a column: `c0*v.x + c1*v.y + c2*v.z + c3*v.w`.
//! - `Vec4 * Mat4` dots the vector with each column: `result[k] = dot(col(k), v)`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{F32x4, WWWW, XXXX, YYYY, ZZZZ};
use crate::Vec4;

/// 4x4 matrix (column-major)
///
/// `c0` is the first column and holds m00, m10, m20, m30.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);
    pub const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { c0, c1, c2, c3 }
    }

    /// Create a matrix from 16 values given one column at a time.
    ///
    /// Written as four lines of four, each line is a column:
    /// ```
    /// use simd4_math::{Mat4, Vec4};
    /// let m = Mat4::new(
    ///     1.0, 2.0, 3.0, 4.0,
    ///     5.0, 6.0, 7.0, 8.0,
    ///     9.0, 10.0, 11.0, 12.0,
    ///     13.0, 14.0, 15.0, 16.0,
    /// );
    /// assert_eq!(m.c0, Vec4::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m10: f32, m20: f32, m30: f32,
        m01: f32, m11: f32, m21: f32, m31: f32,
        m02: f32, m12: f32, m22: f32, m32: f32,
        m03: f32, m13: f32, m23: f32, m33: f32,
    ) -> Self {
        Self::from_cols(
            Vec4::new(m00, m10, m20, m30),
            Vec4::new(m01, m11, m21, m31),
            Vec4::new(m02, m12, m22, m32),
            Vec4::new(m03, m13, m23, m33),
        )
    }

    /// Create a matrix from a flat column-major array
    #[rustfmt::skip]
    #[inline]
    pub const fn from_cols_array(m: &[f32; 16]) -> Self {
        Self::new(
            m[0], m[1], m[2], m[3],
            m[4], m[5], m[6], m[7],
            m[8], m[9], m[10], m[11],
            m[12], m[13], m[14], m[15],
        )
    }

    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        *self.as_array()
    }

    /// View the matrix as 16 contiguous floats in column-major order
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 16] {
        bytemuck::cast_mut(self)
    }

    /// Get a column vector. Panics if `index > 3`.
    #[inline]
    pub fn col(&self, index: usize) -> Vec4 {
        bytemuck::cast_ref::<Self, [Vec4; 4]>(self)[index]
    }

    /// Get a row vector. Panics if `index > 3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        self.transpose().col(index)
    }

    /// Transpose a matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        let [c0, c1, c2, c3] = F32x4::transpose4([self.c0.0, self.c1.0, self.c2.0, self.c3.0]);
        Self::from_cols(Vec4(c0), Vec4(c1), Vec4(c2), Vec4(c3))
    }

    /// Translation in the 4th column (homogeneous coordinates)
    pub fn translate(translation: Vec4) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, translation)
    }

    /// Uniform scale on x, y, z; w stays 1
    pub fn scale_uniform(scale: f32) -> Self {
        Self::from_cols(
            Vec4::new(scale, 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale, 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale, 0.0),
            Vec4::W,
        )
    }

    /// Per-axis scale from the xyz of `scale`; w stays 1
    pub fn scale(scale: Vec4) -> Self {
        Self::from_cols(
            Vec4::new(scale.x(), 0.0, 0.0, 0.0),
            Vec4::new(0.0, scale.y(), 0.0, 0.0),
            Vec4::new(0.0, 0.0, scale.z(), 0.0),
            Vec4::W,
        )
    }

    /// Right-handed rotation about the X axis, `theta` in radians
    pub fn rotate_x(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols(
            Vec4::X,
            Vec4::new(0.0, c, s, 0.0),
            Vec4::new(0.0, -s, c, 0.0),
            Vec4::W,
        )
    }

    /// Right-handed rotation about the Y axis, `theta` in radians
    pub fn rotate_y(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols(
            Vec4::new(c, 0.0, -s, 0.0),
            Vec4::Y,
            Vec4::new(s, 0.0, c, 0.0),
            Vec4::W,
        )
    }

    /// Right-handed rotation about the Z axis, `theta` in radians
    pub fn rotate_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::from_cols(
            Vec4::new(c, s, 0.0, 0.0),
            Vec4::new(-s, c, 0.0, 0.0),
            Vec4::Z,
            Vec4::W,
        )
    }

    /// Right-handed view matrix; the camera looks down -Z in view space.
    ///
    /// `eye` and `target` are points (same w, usually 1), `up` is a
    /// direction with w = 0.
    pub fn look_at(eye: Vec4, target: Vec4, up: Vec4) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        let mut result = Self::from_cols(x, y, z, Vec4::ZERO).transpose();
        result.c3 = -Vec4::new(x.dot(eye), y.dot(eye), z.dot(eye), -1.0);
        result
    }

    /// Right-handed perspective projection with OpenGL clip depth [-1, 1].
    ///
    /// `fov` is the full vertical field of view in radians.
    #[rustfmt::skip]
    pub fn perspective(fov: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let half_tan = (fov * 0.5).tan();
        Self::new(
            1.0 / (aspect_ratio * half_tan), 0.0, 0.0, 0.0,
            0.0, 1.0 / half_tan, 0.0, 0.0,
            0.0, 0.0, (far + near) / (near - far), -1.0,
            0.0, 0.0, 2.0 * far * near / (near - far), 0.0,
        )
    }
}

impl std::ops::Index<usize> for Mat4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl std::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_mut_array()[index]
    }
}

/// Transform a column vector: `c0*v.x + c1*v.y + c2*v.z + c3*v.w`
impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        let x = self.c0.0.mul(v.0.shuffle::<XXXX>());
        let y = self.c1.0.mul(v.0.shuffle::<YYYY>());
        let z = self.c2.0.mul(v.0.shuffle::<ZZZZ>());
        let w = self.c3.0.mul(v.0.shuffle::<WWWW>());
        Vec4(x.add(y).add(z.add(w)))
    }
}

/// Matrix composition: `a * b` applies `b` first, then `a`
impl std::ops::Mul for Mat4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.c0, self * rhs.c1, self * rhs.c2, self * rhs.c3)
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Dot the vector with each column: `result[k] = dot(m.col(k), v)`
impl std::ops::Mul<Mat4> for Vec4 {
    type Output = Vec4;
    #[inline]
    fn mul(self, m: Mat4) -> Vec4 {
        let products = [
            m.c0.0.mul(self.0),
            m.c1.0.mul(self.0),
            m.c2.0.mul(self.0),
            m.c3.0.mul(self.0),
        ];
        // After the transpose, lane k of every register belongs to column k.
        let [a, b, c, d] = F32x4::transpose4(products);
        Vec4(a.add(b).add(c.add(d)))
    }
}
