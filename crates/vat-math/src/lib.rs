//! # vat-math
//!
//! Vector math and coordinate-convention remapping for vertex animation
//! texture (VAT) baking.
//!
//! - [`Vec3`] - positions, normals, scales
//! - [`Vec4`] - generic 4-tuples and `(x, y, z, w)` quaternions
//! - [`swizzle`] - axis permutation and sign-flip tables
//!
//! # Design
//!
//! Engines disagree on handedness and on which axis points up. A bake
//! picks one of six axis orderings ([`AxisSwizzle`]) and one of eight sign
//! patterns ([`AxisFlip`]) for vectors, plus one of fifteen sign patterns
//! ([`QuatFlip`]) for rotations. Codes arrive as plain integers from UI
//! menus and are validated once, then carried as enums:
//!
//! ```text
//! i32 code --TryFrom--> enum --index--> const table --> permute * signs
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vat_math::{swizzle_vector3, Vec3};
//!
//! // Y-up to Z-up style remap: permute (y, z, x), negate the new x
//! let p = swizzle_vector3(Vec3::new(1.0, 2.0, 3.0), 3, 1).unwrap();
//! assert_eq!(p, Vec3::new(-2.0, 3.0, 1.0));
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with engine-side math types
//! - [`rayon`] - Parallel slice remapping
//! - [`vat-core`] - Error type

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vec3;
mod vec4;
pub mod swizzle;

pub use vec3::*;
pub use vec4::*;
pub use swizzle::{
    swizzle_quaternion, swizzle_quaternion_slice, swizzle_vector3, swizzle_vector3_slice,
    swizzle_vector4, swizzle_vector4_slice, AxisFlip, AxisRemap, AxisSwizzle, QuatFlip,
};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Quat as GlamQuat, Vec3 as GlamVec3};
}
