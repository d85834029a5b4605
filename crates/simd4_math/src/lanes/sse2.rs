//! SSE2 backend (SSE4.1 dot product when statically enabled)

// Newer toolchains treat these intrinsics as safe inside an sse2 context.
#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use bytemuck::{Pod, Zeroable};

const XYZ_MASK: __m128 =
    unsafe { core::mem::transmute::<[u32; 4], __m128>([u32::MAX, u32::MAX, u32::MAX, 0]) };
const W_MASK: __m128 = unsafe { core::mem::transmute::<[u32; 4], __m128>([0, 0, 0, u32::MAX]) };

#[derive(Clone, Copy)]
#[repr(transparent)]
pub(crate) struct F32x4(__m128);

// SAFETY: __m128 is 16 plain bytes with no padding and no invalid bit patterns.
unsafe impl Zeroable for F32x4 {}
unsafe impl Pod for F32x4 {}

impl F32x4 {
    #[inline]
    pub(crate) const fn from_array(a: [f32; 4]) -> Self {
        // SAFETY: same size, lane 0 is the lowest address.
        Self(unsafe { core::mem::transmute::<[f32; 4], __m128>(a) })
    }

    #[inline]
    pub(crate) fn to_array(self) -> [f32; 4] {
        // SAFETY: see from_array.
        unsafe { core::mem::transmute::<__m128, [f32; 4]>(self.0) }
    }

    #[inline]
    pub(crate) fn splat(v: f32) -> Self {
        unsafe { Self(_mm_set1_ps(v)) }
    }

    #[inline]
    pub(crate) fn lane(self, i: usize) -> f32 {
        self.to_array()[i]
    }

    #[inline]
    pub(crate) fn add(self, other: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn sub(self, other: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn mul(self, other: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn div(self, other: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn neg(self) -> Self {
        unsafe { Self(_mm_sub_ps(_mm_setzero_ps(), self.0)) }
    }

    #[inline]
    pub(crate) fn min(self, other: Self) -> Self {
        unsafe { Self(_mm_min_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn max(self, other: Self) -> Self {
        unsafe { Self(_mm_max_ps(self.0, other.0)) }
    }

    #[inline]
    pub(crate) fn abs(self) -> Self {
        unsafe { Self(_mm_andnot_ps(_mm_set1_ps(-0.0), self.0)) }
    }

    #[inline]
    pub(crate) fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_ps(self.0)) }
    }

    /// Approximate reciprocal square root, max relative error 1.5*2^-12.
    #[inline]
    pub(crate) fn rsqrt(self) -> Self {
        unsafe { Self(_mm_rsqrt_ps(self.0)) }
    }

    /// Sum of lane products, broadcast to all four lanes.
    ///
    /// Uses `dpps` when SSE4.1 is enabled at compile time. Both forms add
    /// `(x + y) + (z + w)`, so they agree bit for bit.
    #[inline]
    pub(crate) fn dot(self, other: Self) -> Self {
        if cfg!(target_feature = "sse4.1") {
            // SAFETY: only reached when sse4.1 is statically enabled.
            unsafe { Self(dot_dpps(self.0, other.0)) }
        } else {
            Self(dot_shuffle(self.0, other.0))
        }
    }

    #[inline]
    pub(crate) fn shuffle<const MASK: i32>(self) -> Self {
        unsafe { Self(_mm_shuffle_ps::<MASK>(self.0, self.0)) }
    }

    /// xyz from `self`, w from `other`.
    #[inline]
    pub(crate) fn with_w(self, other: Self) -> Self {
        unsafe { Self(_mm_or_ps(_mm_and_ps(self.0, XYZ_MASK), _mm_and_ps(other.0, W_MASK))) }
    }

    #[inline]
    pub(crate) fn clear_w(self) -> Self {
        unsafe { Self(_mm_and_ps(self.0, XYZ_MASK)) }
    }

    /// In-register 4x4 transpose (`_MM_TRANSPOSE4_PS`).
    #[inline]
    pub(crate) fn transpose4(rows: [Self; 4]) -> [Self; 4] {
        unsafe {
            let t0 = _mm_unpacklo_ps(rows[0].0, rows[1].0);
            let t1 = _mm_unpacklo_ps(rows[2].0, rows[3].0);
            let t2 = _mm_unpackhi_ps(rows[0].0, rows[1].0);
            let t3 = _mm_unpackhi_ps(rows[2].0, rows[3].0);
            [
                Self(_mm_movelh_ps(t0, t1)),
                Self(_mm_movehl_ps(t1, t0)),
                Self(_mm_movelh_ps(t2, t3)),
                Self(_mm_movehl_ps(t3, t2)),
            ]
        }
    }
}

#[inline]
fn dot_shuffle(a: __m128, b: __m128) -> __m128 {
    unsafe {
        let prod = _mm_mul_ps(a, b);
        let pairs = _mm_add_ps(prod, _mm_shuffle_ps::<{ super::YXWZ }>(prod, prod));
        _mm_add_ps(pairs, _mm_shuffle_ps::<{ super::ZWXY }>(pairs, pairs))
    }
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn dot_dpps(a: __m128, b: __m128) -> __m128 {
    _mm_dp_ps::<0xFF>(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: __m128) -> [u32; 4] {
        F32x4(v).to_array().map(f32::to_bits)
    }

    #[test]
    fn test_dpps_matches_shuffle_dot() {
        if !is_x86_feature_detected!("sse4.1") {
            return;
        }
        let cases = [
            ([1.0, 2.0, 3.0, 4.0], [2.0, 3.0, 4.0, 5.0]),
            ([1e8, 1.0, -1e8, 0.5], [1.0, 3.0, 1.0, 7.0]),
            ([0.1, 0.2, 0.3, 0.4], [-0.7, 1.3, 2.9, -5.5]),
            ([f32::INFINITY, 1.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]),
        ];
        for (a, b) in cases {
            let (a, b) = (F32x4::from_array(a).0, F32x4::from_array(b).0);
            // SAFETY: sse4.1 support checked above.
            let dpps = unsafe { dot_dpps(a, b) };
            assert_eq!(bits(dpps), bits(dot_shuffle(a, b)), "{:?} . {:?}", F32x4(a).to_array(), F32x4(b).to_array());
        }
    }
}
