//! 128-bit lane register shared by every math type in this crate.
//!
//! On x86/x86_64 with SSE2 the register is an `__m128`. Every other target gets
//! a 16-byte aligned `[f32; 4]` with the same operation set applied lane by lane,
//! so the public types keep one memory layout everywhere: x, y, z, w in order.

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
mod sse2;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
pub(crate) use sse2::F32x4;

#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2")))]
mod scalar;
#[cfg(not(all(any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2")))]
pub(crate) use scalar::F32x4;

// Builds the portable backend next to SSE2 so the two can be compared.
#[cfg(all(test, any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2"))]
#[allow(dead_code)]
#[path = "scalar.rs"]
mod scalar_reference;

/// Build a lane permutation mask in `_MM_SHUFFLE` encoding.
///
/// Output lane 0 reads input lane `x`, output lane 1 reads `y`, and so on.
pub(crate) const fn shuffle_mask(x: u32, y: u32, z: u32, w: u32) -> i32 {
    ((w << 6) | (z << 4) | (y << 2) | x) as i32
}

pub(crate) const XXXX: i32 = shuffle_mask(0, 0, 0, 0);
pub(crate) const YYYY: i32 = shuffle_mask(1, 1, 1, 1);
pub(crate) const ZZZZ: i32 = shuffle_mask(2, 2, 2, 2);
pub(crate) const WWWW: i32 = shuffle_mask(3, 3, 3, 3);

/// Rotations used by the cross product.
pub(crate) const YZXW: i32 = shuffle_mask(1, 2, 0, 3);
pub(crate) const ZXYW: i32 = shuffle_mask(2, 0, 1, 3);

/// Reversals used by the Hamilton product and the horizontal sum.
pub(crate) const WZYX: i32 = shuffle_mask(3, 2, 1, 0);
pub(crate) const ZWXY: i32 = shuffle_mask(2, 3, 0, 1);
pub(crate) const YXWZ: i32 = shuffle_mask(1, 0, 3, 2);
