//! 4D vector type for quaternions and padded vectors.
//!
//! [`Vec4`] doubles as a plain 4-tuple (a position packed with a pivot
//! scale or a frame index in `w`) and as an `(x, y, z, w)` quaternion.
//! No quaternion algebra lives here; rotations only ever get their signs
//! flipped on the way into a texture.

use std::ops::{Index, IndexMut, Mul, Neg};

use serde::{Deserialize, Serialize};

use crate::Vec3;

/// A 4D vector of `f32` components.
///
/// When used as a quaternion, `w` is the scalar part.
///
/// # Example
///
/// ```rust
/// use vat_math::Vec4;
///
/// let q = Vec4::new(0.0, 0.0, 0.0, 1.0);
/// assert_eq!(q, Vec4::IDENTITY_QUAT);
/// assert_eq!(q.xyz().to_array(), [0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component (quaternion scalar part)
    pub w: f32,
}

impl Vec4 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY_QUAT: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops `w`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// `false` if any component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Reinterprets as a glam quaternion without normalizing.
    #[inline]
    pub fn to_quat(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from a glam quaternion.
    #[inline]
    pub fn from_quat(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of bounds: {}", i),
        }
    }
}

// Vec4 * Vec4 (component-wise)
impl Mul for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.z * rhs.z,
            self.w * rhs.w,
        )
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

impl From<glam::Quat> for Vec4 {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_quat(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec4_index() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[0] = -1.0;
        assert_eq!(v.x, -1.0);
    }

    #[test]
    fn test_vec4_mul_componentwise() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let signs = Vec4::new(-1.0, 1.0, -1.0, 1.0);
        assert_eq!(a * signs, Vec4::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(-a, a * Vec4::splat(-1.0));
    }

    #[test]
    fn test_vec4_quat_roundtrip_preserves_sign() {
        let q = glam::Quat::from_rotation_y(1.2);
        let v = Vec4::from_quat(q);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);

        // -q is the same rotation but a different 4-tuple
        let back = (-v).to_quat();
        assert_relative_eq!(back.w, -q.w);
        assert_relative_eq!(back.y, -q.y);
    }

    #[test]
    fn test_vec4_is_finite() {
        assert!(Vec4::IDENTITY_QUAT.is_finite());
        assert!(!Vec4::new(0.0, 0.0, 0.0, f32::INFINITY).is_finite());
        assert!(!Vec4::new(f32::NAN, 0.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn test_vec4_xyz() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.xyz().extend(v.w), v);
    }
}
