//! Quaternion for 3D rotations
//!
//! Stored as (x, y, z, w) in one 128-bit register: (x, y, z) is the vector
//! part and w the scalar part. Only unit quaternions describe rotations; the
//! type does not enforce this, so callers supply normalized axes or accept
//! unnormalized results.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{F32x4, WWWW, WZYX, XXXX, YXWZ, YYYY, ZWXY, ZZZZ};
use crate::{Mat4, Vec4};

// Per-lane signs of the Hamilton product terms scaled by self.x, self.y, self.z
const SIGN_X: F32x4 = F32x4::from_array([1.0, -1.0, 1.0, -1.0]);
const SIGN_Y: F32x4 = F32x4::from_array([1.0, 1.0, -1.0, -1.0]);
const SIGN_Z: F32x4 = F32x4::from_array([-1.0, 1.0, 1.0, -1.0]);
const SIGN_CONJUGATE: F32x4 = F32x4::from_array([-1.0, -1.0, -1.0, 1.0]);

/// Rotation quaternion (x, y, z, w)
#[repr(transparent)]
#[derive(Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "Vec4", into = "Vec4")]
pub struct Quat(pub(crate) F32x4);

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity rotation (0, 0, 0, 1)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from raw components
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(F32x4::from_array([x, y, z, w]))
    }

    /// Rotation of `theta` radians about `axis`.
    ///
    /// The axis is normalized here and should have w = 0. The result is
    /// `(axis * sin(theta/2), cos(theta/2))`.
    pub fn from_axis_angle(axis: Vec4, theta: f32) -> Self {
        let (s, c) = (theta * 0.5).sin_cos();
        let vector = axis.normalize().0.mul(F32x4::splat(s));
        Self(vector.with_w(F32x4::splat(c)))
    }

    /// Reinterpret the lanes of a vector as (x, y, z, w)
    #[inline]
    pub fn from_vec4(v: Vec4) -> Self {
        Self(v.0)
    }

    #[inline]
    pub fn as_vec4(self) -> Vec4 {
        Vec4(self.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.lane(0)
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.lane(1)
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.0.lane(2)
    }

    #[inline]
    pub fn w(self) -> f32 {
        self.0.lane(3)
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self[1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self[2] = z;
    }

    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self[3] = w;
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.as_vec4().dot(other.as_vec4())
    }

    /// Magnitude; 1 for rotation quaternions
    #[inline]
    pub fn length(self) -> f32 {
        self.as_vec4().length()
    }

    /// Scale to unit length. A zero quaternion yields NaN lanes.
    #[inline]
    pub fn normalize(self) -> Self {
        Self::from_vec4(self.as_vec4().normalize())
    }

    /// Negate the vector part. For unit quaternions this is the inverse rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self(self.0.mul(SIGN_CONJUGATE))
    }

    /// Rotate the xyz part of `v`; w passes through unchanged.
    ///
    /// Same result as `self.to_mat4() * v` for a unit quaternion.
    pub fn rotate(self, v: Vec4) -> Vec4 {
        let axis = Vec4(self.0.clear_w());
        let t = axis.cross(v) * 2.0;
        v + t * self.w() + axis.cross(t)
    }

    /// Convert to the equivalent rotation matrix.
    ///
    /// The matrix acts on column vectors (`m * v`), so for a unit quaternion
    /// built with [`Quat::from_axis_angle`] about X it equals [`Mat4::rotate_x`].
    #[rustfmt::skip]
    pub fn to_mat4(self) -> Mat4 {
        let [x, y, z, w] = self.to_array();
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;
        let xy = x * y;
        let yz = y * z;
        let xz = x * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;
        Mat4::new(
            1.0 - 2.0 * y2 - 2.0 * z2, 2.0 * xy + 2.0 * wz, 2.0 * xz - 2.0 * wy, 0.0,
            2.0 * xy - 2.0 * wz, 1.0 - 2.0 * x2 - 2.0 * z2, 2.0 * yz + 2.0 * wx, 0.0,
            2.0 * xz + 2.0 * wy, 2.0 * yz - 2.0 * wx, 1.0 - 2.0 * x2 - 2.0 * y2, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl std::fmt::Debug for Quat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        q.as_vec4()
    }
}

impl std::ops::Index<usize> for Quat {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl std::ops::IndexMut<usize> for Quat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_mut_array()[index]
    }
}

/// Negates all four components: the other quaternion for the same rotation
impl std::ops::Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

/// Hamilton product. `a * b` rotates by `b` first, then by `a`.
impl std::ops::Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, q: Self) -> Self {
        // q reordered so that each of self.x, self.y, self.z, self.w scales one register
        let fx = SIGN_X.mul(q.0.shuffle::<WZYX>());
        let fy = SIGN_Y.mul(q.0.shuffle::<ZWXY>());
        let fz = SIGN_Z.mul(q.0.shuffle::<YXWZ>());

        let px = self.0.shuffle::<XXXX>().mul(fx);
        let py = self.0.shuffle::<YYYY>().mul(fy);
        let pz = self.0.shuffle::<ZZZZ>().mul(fz);
        let pw = self.0.shuffle::<WWWW>().mul(q.0);

        Self(px.add(py).add(pz.add(pw)))
    }
}

impl std::ops::MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, q: Self) {
        *self = *self * q;
    }
}
