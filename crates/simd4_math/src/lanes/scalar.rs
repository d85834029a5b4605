//! Portable backend for targets without SSE2

use bytemuck::{Pod, Zeroable};

#[derive(Clone, Copy)]
#[repr(C, align(16))]
pub(crate) struct F32x4([f32; 4]);

// SAFETY: four f32s, 16 bytes, alignment adds no padding.
unsafe impl Zeroable for F32x4 {}
unsafe impl Pod for F32x4 {}

impl F32x4 {
    #[inline]
    pub(crate) const fn from_array(a: [f32; 4]) -> Self {
        Self(a)
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline]
    pub(crate) fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    #[inline]
    pub(crate) fn lane(self, i: usize) -> f32 {
        self.0[i]
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self([f(self.0[0]), f(self.0[1]), f(self.0[2]), f(self.0[3])])
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let (a, b) = (self.0, other.0);
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }

    #[inline]
    pub(crate) fn add(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    #[inline]
    pub(crate) fn sub(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    #[inline]
    pub(crate) fn mul(self, other: Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    #[inline]
    pub(crate) fn div(self, other: Self) -> Self {
        self.zip(other, |a, b| a / b)
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        self.map(|a| 0.0 - a)
    }

    #[inline]
    pub(crate) fn min(self, other: Self) -> Self {
        // minps semantics: second operand wins when either is NaN
        self.zip(other, |a, b| if a < b { a } else { b })
    }

    #[inline]
    pub(crate) fn max(self, other: Self) -> Self {
        self.zip(other, |a, b| if a > b { a } else { b })
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        self.map(f32::abs)
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    /// Reciprocal square root. Exact here, which is inside the SSE error bound.
    #[inline]
    pub(crate) fn rsqrt(self) -> Self {
        self.map(|a| 1.0 / a.sqrt())
    }

    /// Sum of lane products, broadcast to all four lanes.
    #[inline]
    pub(crate) fn dot(self, other: Self) -> Self {
        let p = self.mul(other).0;
        Self::splat((p[0] + p[1]) + (p[2] + p[3]))
    }

    #[inline]
    pub(crate) fn shuffle<const MASK: i32>(self) -> Self {
        let a = self.0;
        let m = MASK as usize;
        Self([a[m & 3], a[(m >> 2) & 3], a[(m >> 4) & 3], a[(m >> 6) & 3]])
    }

    /// xyz from `self`, w from `other`.
    #[inline]
    pub(crate) fn with_w(self, other: Self) -> Self {
        Self([self.0[0], self.0[1], self.0[2], other.0[3]])
    }

    #[inline]
    pub(crate) fn clear_w(self) -> Self {
        Self([self.0[0], self.0[1], self.0[2], 0.0])
    }

    #[inline]
    pub(crate) fn transpose4(rows: [Self; 4]) -> [Self; 4] {
        let r = rows.map(|v| v.0);
        [
            Self([r[0][0], r[1][0], r[2][0], r[3][0]]),
            Self([r[0][1], r[1][1], r[2][1], r[3][1]]),
            Self([r[0][2], r[1][2], r[2][2], r[3][2]]),
            Self([r[0][3], r[1][3], r[2][3], r[3][3]]),
        ]
    }
}
