//! 4-lane vector type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::lanes::{F32x4, YZXW, ZXYW};

/// 4D vector with x, y, z, w components held in one 128-bit register
///
/// Layout is four packed `f32`s in x, y, z, w order with 16-byte alignment, so
/// a `&[Vec4]` can be handed to a graphics API through `bytemuck::cast_slice`.
/// `dot`, `length` and the normalizations run over all four lanes; `cross`
/// is the 3D cross product and always returns w = 0.
#[repr(transparent)]
#[derive(Clone, Copy, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "Components", into = "Components")]
pub struct Vec4(pub(crate) F32x4);

/// Named-field form used for (de)serialization
#[derive(Serialize, Deserialize)]
struct Components {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl From<Components> for Vec4 {
    fn from(c: Components) -> Self {
        Self::new(c.x, c.y, c.z, c.w)
    }
}

impl From<Vec4> for Components {
    fn from(v: Vec4) -> Self {
        let [x, y, z, w] = v.to_array();
        Self { x, y, z, w }
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(F32x4::from_array([x, y, z, w]))
    }

    /// Broadcast one value to all four lanes
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self(F32x4::from_array([v; 4]))
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self(F32x4::from_array(a))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// View the lanes as a flat float array (same bytes, no copy)
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

    /// Dot product over all four lanes
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.0.dot(other.0).lane(0)
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.0.dot(self.0).sqrt().lane(0)
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Divide every lane by the exact length.
    ///
    /// A zero vector is not special-cased: the result is NaN in every lane.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.0.dot(self.0).sqrt();
        Self(self.0.div(len))
    }

    /// Multiply every lane by an approximate reciprocal length.
    ///
    /// Maximum relative error per component is 1.5*2^-12 (about 3.66e-4).
    /// Like [`Vec4::normalize`], a zero vector produces NaN lanes.
    #[inline]
    pub fn fast_normalize(self) -> Self {
        let rev_len = self.0.dot(self.0).rsqrt();
        Self(self.0.mul(rev_len))
    }

    /// 3D cross product of the xyz parts; the w lane of the result is 0.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let a_yzx = self.0.shuffle::<YZXW>();
        let a_zxy = self.0.shuffle::<ZXYW>();
        let b_yzx = other.0.shuffle::<YZXW>();
        let b_zxy = other.0.shuffle::<ZXYW>();
        Self(a_yzx.mul(b_zxy).sub(a_zxy.mul(b_yzx)).clear_w())
    }

    /// Extract the xyz components as an array
    #[inline]
    pub fn xyz(self) -> [f32; 3] {
        let [x, y, z, _] = self.to_array();
        [x, y, z]
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Default for Vec4 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Vec4 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl std::fmt::Debug for Vec4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vec4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl std::ops::Index<usize> for Vec4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl std::ops::IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_mut_array()[index]
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0.add(other.0))
    }
}

impl std::ops::AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0.sub(other.0))
    }
}

impl std::ops::SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(self.0.mul(other.0))
    }
}

impl std::ops::MulAssign for Vec4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self(self.0.mul(F32x4::splat(scalar)))
    }
}

impl std::ops::MulAssign<f32> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl std::ops::Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        Self(self.0.div(other.0))
    }
}

impl std::ops::DivAssign for Vec4 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl std::ops::Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self(self.0.div(F32x4::splat(scalar)))
    }
}

impl std::ops::DivAssign<f32> for Vec4 {
    #[inline]
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = f32::EPSILON * 100.0;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.z(), b.z()) && approx_eq(a.w(), b.w())
    }

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
    }

    #[test]
    fn test_construction() {
        assert_eq!(Vec4::default(), Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Vec4::splat(42.0), Vec4::new(42.0, 42.0, 42.0, 42.0));
        assert_eq!(Vec4::from([1.0, -2.0, 3.25, 4.0]), Vec4::new(1.0, -2.0, 3.25, 4.0));
    }

    #[test]
    fn test_accessors() {
        let mut a = Vec4::ZERO;
        assert_eq!(a[0], 0.0);
        assert_eq!(a.as_array(), &[0.0; 4]);

        a.set_x(1.0);
        assert_eq!(a[0], 1.0);
        assert_eq!(a.x(), 1.0);

        a[3] = 7.0;
        assert_eq!(a.w(), 7.0);
        assert_eq!(a.to_array(), [1.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vec4::ONE;
        let _ = v[4];
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
        assert_eq!(b.dot(a), 70.0);
    }

    #[test]
    fn test_length_and_distance() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 3.0, 4.0, 5.0);
        assert!(approx_eq(a.length(), 5.477225575051661));
        assert!(approx_eq(b.length(), 7.3484692283495345));
        assert!(approx_eq(a.distance(b), 2.0));
        assert!(approx_eq(b.distance(a), 2.0));
        assert_eq!(a.length_squared(), 30.0);
    }

    #[test]
    fn test_normalize() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let expected = Vec4::new(0.18257418583505536, 0.3651483716701107, 0.5477225575051661, 0.7302967433402214);
        assert!(vec_approx_eq(a.normalize(), expected), "got {:?}", a.normalize());
        assert!(approx_eq(a.normalize().length(), 1.0));
    }

    #[test]
    fn test_fast_normalize_within_bound() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let exact = a.normalize();
        let fast = a.fast_normalize();
        for i in 0..4 {
            let rel = ((fast[i] - exact[i]) / exact[i]).abs();
            assert!(rel <= 0.0003662109375, "lane {} off by {}", i, rel);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec4::ZERO.normalize();
        assert!(n.to_array().iter().all(|c| c.is_nan()), "got {:?}", n);
        let f = Vec4::ZERO.fast_normalize();
        assert!(f.to_array().iter().all(|c| c.is_nan()), "got {:?}", f);
    }

    #[test]
    fn test_cross() {
        let c = Vec4::new(1.0, 2.0, 3.0, 0.0);
        let d = Vec4::new(2.0, 3.0, 4.0, 0.0);
        assert_eq!(c.cross(d), Vec4::new(-1.0, 2.0, -1.0, 0.0));
    }

    #[test]
    fn test_cross_ignores_w() {
        let c = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let d = Vec4::new(2.0, 3.0, 4.0, f32::INFINITY);
        assert_eq!(c.cross(d), Vec4::new(-1.0, 2.0, -1.0, 0.0));
    }

    #[test]
    fn test_cross_basis() {
        let (i, j, k) = (Vec4::X, Vec4::Y, Vec4::Z);
        assert_eq!(i.cross(i), Vec4::ZERO);
        assert_eq!(j.cross(j), Vec4::ZERO);
        assert_eq!(k.cross(k), Vec4::ZERO);
        assert_eq!(i.cross(j), k);
        assert_eq!(j.cross(k), i);
        assert_eq!(k.cross(i), j);
        assert_eq!(j.cross(i), -k);
        assert_eq!(k.cross(j), -i);
        assert_eq!(i.cross(k), -j);
    }

    #[test]
    fn test_basic_operators() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a + b, Vec4::new(3.0, 5.0, 7.0, 9.0));
        assert_eq!(a - b, Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(a * b, Vec4::new(2.0, 6.0, 12.0, 20.0));
        assert!(vec_approx_eq(a / b, Vec4::new(0.5, 0.6666666666666666, 0.75, 0.8)));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v += Vec4::ONE;
        assert_eq!(v, Vec4::new(2.0, 3.0, 4.0, 5.0));
        v -= Vec4::new(2.0, 2.0, 2.0, 2.0);
        assert_eq!(v, Vec4::new(0.0, 1.0, 2.0, 3.0));
        v *= 3.0;
        assert_eq!(v, Vec4::new(0.0, 3.0, 6.0, 9.0));
        v *= Vec4::new(2.0, 1.0, 0.5, 2.0);
        assert_eq!(v, Vec4::new(0.0, 3.0, 3.0, 18.0));
        v /= Vec4::new(1.0, 3.0, 2.0, 6.0);
        assert_eq!(v, Vec4::new(0.0, 1.0, 1.5, 3.0));
        v /= 2.0;
        assert_eq!(v, Vec4::new(0.0, 0.5, 0.75, 1.5));
    }

    #[test]
    fn test_div_by_zero_follows_ieee() {
        let v = Vec4::new(1.0, -1.0, 0.0, 2.0) / Vec4::ZERO;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
        assert!(v.z().is_nan());
        assert_eq!(v.w(), f32::INFINITY);
    }

    #[test]
    fn test_comparisons() {
        let a = Vec4::new(1.0, -2.0, 3.25, 4.0);
        assert_eq!(a, Vec4::new(1.0, -2.0, 3.25, 4.0));
        assert_ne!(a, Vec4::new(0.0, -2.0, 3.25, 4.0));
        let nan = Vec4::splat(f32::NAN);
        assert_ne!(nan, nan);
    }

    #[test]
    fn test_xyz() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_lerp() {
        let a = Vec4::ZERO;
        let b = Vec4::splat(10.0);
        assert_eq!(a.lerp(b, 0.5), Vec4::splat(5.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_min_max_abs() {
        let a = Vec4::new(1.0, 5.0, 2.0, 8.0);
        let b = Vec4::new(3.0, 2.0, 4.0, 6.0);
        assert_eq!(a.min(b), Vec4::new(1.0, 2.0, 2.0, 6.0));
        assert_eq!(a.max(b), Vec4::new(3.0, 5.0, 4.0, 8.0));
        assert_eq!(Vec4::new(-1.0, 2.0, -3.0, 4.0).abs(), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_debug_names_components() {
        let s = format!("{:?}", Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(s, "Vec4 { x: 1.0, y: 2.0, z: 3.0, w: 4.0 }");
    }
}
