//! Scalar reference math
//!
//! Straight-line `f32` versions of the kernel operations. They are the
//! baseline the throughput runner measures the SIMD types against, and an
//! independent check on their results.
//!
//! Matrices are `[[f32; 4]; 4]` where each inner array is a column, the same
//! layout `Mat4` uses and a graphics API expects.

use simd4_math::{Mat4, Quat, Vec4};

/// Column-major 4x4 matrix as nested arrays
pub type PlainMat4 = [[f32; 4]; 4];

/// Four floats with no SIMD behind them
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlainVec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PlainVec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Divide every component by the full 4-component length
    pub fn normalize(&self) -> Self {
        let len = self.dot(self).sqrt();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// 3D cross product of xyz, w = 0
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            0.0,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<PlainVec4> for Vec4 {
    fn from(v: PlainVec4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vec4> for PlainVec4 {
    fn from(v: Vec4) -> Self {
        PlainVec4::new(v.x(), v.y(), v.z(), v.w())
    }
}

/// Quaternion (x, y, z, w) with scalar arithmetic
#[repr(C, align(16))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlainQuat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl PlainQuat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Hamilton product `self * other`
    pub fn mul(&self, other: &Self) -> Self {
        let (x1, y1, z1, w1) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2, w2) = (other.x, other.y, other.z, other.w);
        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }

    /// Rotation matrix for a unit quaternion, column-major
    pub fn to_mat4(&self) -> PlainMat4 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (xy, yz, xz) = (x * y, y * z, x * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        [
            [1.0 - 2.0 * (y2 + z2), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0],
            [2.0 * (xy - wz), 1.0 - 2.0 * (x2 + z2), 2.0 * (yz + wx), 0.0],
            [2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (x2 + y2), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

impl From<PlainQuat> for Quat {
    fn from(q: PlainQuat) -> Self {
        Quat::new(q.x, q.y, q.z, q.w)
    }
}

/// Convert a nested-array matrix into the SIMD type
pub fn to_simd_mat(m: &PlainMat4) -> Mat4 {
    Mat4::from_cols(
        Vec4::from_array(m[0]),
        Vec4::from_array(m[1]),
        Vec4::from_array(m[2]),
        Vec4::from_array(m[3]),
    )
}

/// Matrix product `a * b`
pub fn plain_mat_mul(a: &PlainMat4, b: &PlainMat4) -> PlainMat4 {
    let mut result = [[0.0f32; 4]; 4];
    for (col, out) in result.iter_mut().enumerate() {
        for (row, value) in out.iter_mut().enumerate() {
            *value = a[0][row] * b[col][0] + a[1][row] * b[col][1] + a[2][row] * b[col][2] + a[3][row] * b[col][3];
        }
    }
    result
}

/// Matrix times column vector
pub fn plain_transform(m: &PlainMat4, v: &PlainVec4) -> PlainVec4 {
    let v = v.to_array();
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * v[0] + m[1][row] * v[1] + m[2][row] * v[2] + m[3][row] * v[3];
    }
    PlainVec4::new(out[0], out[1], out[2], out[3])
}

pub fn plain_transpose(m: &PlainMat4) -> PlainMat4 {
    let mut result = [[0.0f32; 4]; 4];
    for (i, col) in result.iter_mut().enumerate() {
        for (j, value) in col.iter_mut().enumerate() {
            *value = m[j][i];
        }
    }
    result
}

/// Right-handed view matrix looking from `eye` towards `target`
pub fn plain_look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> PlainMat4 {
    let f = normalize3([target[0] - eye[0], target[1] - eye[1], target[2] - eye[2]]);
    let s = normalize3(cross3(f, up));
    let u = cross3(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot3(s, eye), -dot3(u, eye), dot3(f, eye), 1.0],
    ]
}

/// OpenGL-style perspective projection, depth mapped to [-1, 1]
pub fn plain_perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> PlainMat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (far + near) * nf, -1.0],
        [0.0, 0.0, 2.0 * far * near * nf, 0.0],
    ]
}

fn normalize3(v: [f32; 3]) -> [f32; 3] {
    let len = dot3(v, v).sqrt();
    [v[0] / len, v[1] / len, v[2] / len]
}

fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
