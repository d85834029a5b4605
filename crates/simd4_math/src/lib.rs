//! SIMD 3D/4D Mathematics Library
//!
//! This crate provides 128-bit SIMD vector, matrix, and quaternion types for
//! real-time graphics transforms.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4-lane vector with x, y, z, w components
//! - [`Mat4`] - 4x4 column-major matrix built from four `Vec4` columns
//! - [`Quat`] - Rotation quaternion, convertible to `Mat4`
//!
//! All three are plain `Copy` values, 16-byte aligned, with no padding, so
//! they can be uploaded to a graphics API as flat `f32` arrays through
//! [`bytemuck`]. No operation is fallible: division by zero and normalizing a
//! zero vector follow IEEE-754 and produce infinities or NaN.
//!
//! On x86/x86_64 the lanes live in SSE registers; other targets use a
//! portable four-float fallback with the same layout and results.

mod lanes;
mod vec4;
pub mod mat4;
mod quat;

pub use vec4::Vec4;
pub use mat4::Mat4;
pub use quat::Quat;

use static_assertions::{assert_eq_align, assert_eq_size, const_assert_eq};

const_assert_eq!(std::mem::size_of::<Vec4>(), 16);
const_assert_eq!(std::mem::align_of::<Vec4>(), 16);
assert_eq_size!(Quat, Vec4);
assert_eq_align!(Quat, Vec4);
assert_eq_size!(Mat4, [Vec4; 4]);
assert_eq_align!(Mat4, Vec4);
