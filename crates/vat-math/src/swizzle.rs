//! Axis swizzle and sign-flip remapping.
//!
//! A remap is a permutation of the three axes followed by a per-axis sign
//! flip. Quaternions only get the sign flip, over all four components.
//! Bake settings store both as small integer codes; this module validates
//! those codes into enums and looks the pattern up in constant tables.
//!
//! # Tables
//!
//! | code | [`AxisSwizzle`] | [`AxisFlip`] |
//! |------|-----------------|--------------|
//! | 0    | (0, 1, 2)       | ( 1,  1,  1) |
//! | 1    | (0, 2, 1)       | (-1,  1,  1) |
//! | 2    | (1, 0, 2)       | ( 1, -1,  1) |
//! | 3    | (1, 2, 0)       | ( 1,  1, -1) |
//! | 4    | (2, 0, 1)       | (-1, -1,  1) |
//! | 5    | (2, 1, 0)       | (-1,  1, -1) |
//! | 6    |                 | (-1, -1, -1) |
//! | 7    |                 | ( 1, -1, -1) |
//!
//! [`QuatFlip`] codes 0..=14 are listed in [`QUAT_SIGNS`]. Codes 12 and 14
//! select the same pattern; both are kept so stored bake settings keep
//! their meaning.
//!
//! # Usage
//!
//! ```rust
//! use vat_math::{AxisFlip, AxisRemap, AxisSwizzle, Vec3};
//!
//! let remap = AxisRemap::new(AxisSwizzle::Yzx, AxisFlip::X);
//! assert_eq!(remap.apply_vec3(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(-2.0, 3.0, 1.0));
//! assert_eq!(remap, AxisRemap::from_codes(3, 1).unwrap());
//! ```

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;
use vat_core::{Error, Result};

use crate::{Vec3, Vec4};

/// Axis index triples, indexed by swizzle code.
pub const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Sign triples, indexed by axis flip code.
pub const AXIS_SIGNS: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Sign quadruples `(x, y, z, w)`, indexed by quaternion flip code.
pub const QUAT_SIGNS: [[f32; 4]; 15] = [
    [1.0, 1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0, -1.0],
];

/// Looks `code` up in `all`, or reports it as out of range.
fn decode<T: Copy, const N: usize>(all: &[T; N], code: i32, name: &'static str) -> Result<T> {
    usize::try_from(code)
        .ok()
        .and_then(|i| all.get(i).copied())
        .ok_or_else(|| Error::invalid_argument(name, code, N as i32 - 1))
}

/// Axis ordering, named by which source axis lands in each output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AxisSwizzle {
    /// (x, y, z)
    #[default]
    Xyz = 0,
    /// (x, z, y)
    Xzy = 1,
    /// (y, x, z)
    Yxz = 2,
    /// (y, z, x)
    Yzx = 3,
    /// (z, x, y)
    Zxy = 4,
    /// (z, y, x)
    Zyx = 5,
}

impl AxisSwizzle {
    /// Every swizzle in code order.
    pub const ALL: [Self; 6] = [
        Self::Xyz,
        Self::Xzy,
        Self::Yxz,
        Self::Yzx,
        Self::Zxy,
        Self::Zyx,
    ];

    /// Integer code stored in bake settings.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Source axis index for each output slot.
    #[inline]
    pub const fn indices(self) -> [usize; 3] {
        PERMUTATIONS[self as usize]
    }

    /// Short lowercase name, e.g. `"yzx"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyz => "xyz",
            Self::Xzy => "xzy",
            Self::Yxz => "yxz",
            Self::Yzx => "yzx",
            Self::Zxy => "zxy",
            Self::Zyx => "zyx",
        }
    }

    /// Permutes the components of `v`.
    #[inline]
    pub fn apply(self, v: Vec3) -> Vec3 {
        let [i0, i1, i2] = self.indices();
        Vec3::new(v[i0], v[i1], v[i2])
    }
}

impl TryFrom<i32> for AxisSwizzle {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        decode(&Self::ALL, code, "swizzle code")
    }
}

impl fmt::Display for AxisSwizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Sign pattern over three axes, named by the axes it negates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AxisFlip {
    /// No negation.
    #[default]
    Keep = 0,
    /// Negate x.
    X = 1,
    /// Negate y.
    Y = 2,
    /// Negate z.
    Z = 3,
    /// Negate x and y.
    Xy = 4,
    /// Negate x and z.
    Xz = 5,
    /// Negate all three.
    Xyz = 6,
    /// Negate y and z.
    Yz = 7,
}

impl AxisFlip {
    /// Every flip in code order.
    pub const ALL: [Self; 8] = [
        Self::Keep,
        Self::X,
        Self::Y,
        Self::Z,
        Self::Xy,
        Self::Xz,
        Self::Xyz,
        Self::Yz,
    ];

    /// Integer code stored in bake settings.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Per-axis multipliers, each `1.0` or `-1.0`.
    #[inline]
    pub const fn signs(self) -> [f32; 3] {
        AXIS_SIGNS[self as usize]
    }

    /// Short lowercase name, e.g. `"xz"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Xyz => "xyz",
            Self::Yz => "yz",
        }
    }

    /// Multiplies `v` by the sign pattern.
    #[inline]
    pub fn apply(self, v: Vec3) -> Vec3 {
        v * Vec3::from_array(self.signs())
    }
}

impl TryFrom<i32> for AxisFlip {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        decode(&Self::ALL, code, "axis flip code")
    }
}

impl fmt::Display for AxisFlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Sign pattern over `(x, y, z, w)`, named by the components it negates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum QuatFlip {
    /// No negation.
    #[default]
    Keep = 0,
    /// Negate x.
    X = 1,
    /// Negate y.
    Y = 2,
    /// Negate z.
    Z = 3,
    /// Negate w.
    W = 4,
    /// Negate x and y.
    Xy = 5,
    /// Negate x and z.
    Xz = 6,
    /// Negate x and w.
    Xw = 7,
    /// Negate x, y and z.
    Xyz = 8,
    /// Negate x, y and w.
    Xyw = 9,
    /// Negate every component.
    Xyzw = 10,
    /// Negate y and z.
    Yz = 11,
    /// Negate z and w.
    Zw = 12,
    /// Negate y, z and w.
    Yzw = 13,
    /// Negate z and w. Same pattern as [`QuatFlip::Zw`] under another code.
    #[serde(rename = "zw")]
    ZwAlt = 14,
}

impl QuatFlip {
    /// Every flip in code order.
    pub const ALL: [Self; 15] = [
        Self::Keep,
        Self::X,
        Self::Y,
        Self::Z,
        Self::W,
        Self::Xy,
        Self::Xz,
        Self::Xw,
        Self::Xyz,
        Self::Xyw,
        Self::Xyzw,
        Self::Yz,
        Self::Zw,
        Self::Yzw,
        Self::ZwAlt,
    ];

    /// Integer code stored in bake settings.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Per-component multipliers, each `1.0` or `-1.0`.
    #[inline]
    pub const fn signs(self) -> [f32; 4] {
        QUAT_SIGNS[self as usize]
    }

    /// Short lowercase name, e.g. `"xyw"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Xw => "xw",
            Self::Xyz => "xyz",
            Self::Xyw => "xyw",
            Self::Xyzw => "xyzw",
            Self::Yz => "yz",
            Self::Zw => "zw",
            Self::Yzw => "yzw",
            Self::ZwAlt => "zw",
        }
    }

    /// Multiplies `q` by the sign pattern.
    #[inline]
    pub fn apply(self, q: Vec4) -> Vec4 {
        q * Vec4::from_array(self.signs())
    }
}

impl TryFrom<i32> for QuatFlip {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        decode(&Self::ALL, code, "quaternion flip code")
    }
}

impl fmt::Display for QuatFlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A validated swizzle plus flip, applied in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AxisRemap {
    /// Axis permutation, applied first.
    pub swizzle: AxisSwizzle,
    /// Sign pattern, applied to the permuted vector.
    pub flip: AxisFlip,
}

impl AxisRemap {
    /// Leaves every vector unchanged.
    pub const IDENTITY: Self = Self::new(AxisSwizzle::Xyz, AxisFlip::Keep);

    /// Creates a remap from typed parts.
    #[inline]
    pub const fn new(swizzle: AxisSwizzle, flip: AxisFlip) -> Self {
        Self { swizzle, flip }
    }

    /// Validates integer codes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `swizzle_code` is outside `0..=5` or
    /// `flip_code` is outside `0..=7`.
    pub fn from_codes(swizzle_code: i32, flip_code: i32) -> Result<Self> {
        Ok(Self::new(
            AxisSwizzle::try_from(swizzle_code)?,
            AxisFlip::try_from(flip_code)?,
        ))
    }

    /// Permutes then flips all three components.
    #[inline]
    pub fn apply_vec3(self, v: Vec3) -> Vec3 {
        self.flip.apply(self.swizzle.apply(v))
    }

    /// Remaps `x` and `y` from the full 3-axis remap of `v.xyz()`.
    ///
    /// `z` and `w` always come back as they went in. Bakes rely on this
    /// for packed vectors whose `z` slot carries non-spatial data.
    #[inline]
    pub fn apply_vec4(self, v: Vec4) -> Vec4 {
        let r = self.apply_vec3(v.xyz());
        Vec4::new(r.x, r.y, v.z, v.w)
    }
}

impl fmt::Display for AxisRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} flip {}", self.swizzle, self.flip)
    }
}

/// Remaps a 3-vector by swizzle code `0..=5` and flip code `0..=7`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for out-of-range codes.
///
/// # Example
///
/// ```rust
/// use vat_math::{swizzle_vector3, Vec3};
///
/// let v = swizzle_vector3(Vec3::new(1.0, 2.0, 3.0), 5, 6).unwrap();
/// assert_eq!(v, Vec3::new(-3.0, -2.0, -1.0));
/// assert!(swizzle_vector3(v, 6, 0).is_err());
/// ```
pub fn swizzle_vector3(coord: Vec3, swizzle_code: i32, flip_code: i32) -> Result<Vec3> {
    Ok(AxisRemap::from_codes(swizzle_code, flip_code)?.apply_vec3(coord))
}

/// Remaps the `x`, `y` slots of a 4-vector; `z` and `w` pass through.
///
/// See [`AxisRemap::apply_vec4`].
///
/// # Errors
///
/// [`Error::InvalidArgument`] for out-of-range codes.
pub fn swizzle_vector4(coord: Vec4, swizzle_code: i32, flip_code: i32) -> Result<Vec4> {
    Ok(AxisRemap::from_codes(swizzle_code, flip_code)?.apply_vec4(coord))
}

/// Flips quaternion component signs by flip code `0..=14`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for out-of-range codes.
pub fn swizzle_quaternion(src: Vec4, flip_code: i32) -> Result<Vec4> {
    Ok(QuatFlip::try_from(flip_code)?.apply(src))
}

/// In-place, parallel [`swizzle_vector3`] over a slice.
///
/// Codes are validated before any element is touched, so on error the
/// slice is unchanged.
pub fn swizzle_vector3_slice(coords: &mut [Vec3], swizzle_code: i32, flip_code: i32) -> Result<()> {
    let remap = AxisRemap::from_codes(swizzle_code, flip_code)?;
    trace!(count = coords.len(), %remap, "remapping vec3 slice");
    coords.par_iter_mut().for_each(|v| *v = remap.apply_vec3(*v));
    Ok(())
}

/// In-place, parallel [`swizzle_vector4`] over a slice.
pub fn swizzle_vector4_slice(coords: &mut [Vec4], swizzle_code: i32, flip_code: i32) -> Result<()> {
    let remap = AxisRemap::from_codes(swizzle_code, flip_code)?;
    trace!(count = coords.len(), %remap, "remapping vec4 slice");
    coords.par_iter_mut().for_each(|v| *v = remap.apply_vec4(*v));
    Ok(())
}

/// In-place, parallel [`swizzle_quaternion`] over a slice.
pub fn swizzle_quaternion_slice(quats: &mut [Vec4], flip_code: i32) -> Result<()> {
    let flip = QuatFlip::try_from(flip_code)?;
    trace!(count = quats.len(), %flip, "flipping quaternion slice");
    quats.par_iter_mut().for_each(|q| *q = flip.apply(*q));
    Ok(())
}
