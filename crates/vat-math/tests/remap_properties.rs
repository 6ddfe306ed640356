//! Remap table validation tests.
//!
//! Pins the full swizzle/flip tables used by VAT bake settings, including
//! the quirks stored settings depend on: the repeated quaternion pattern at
//! codes 12 and 14, and `z`/`w` passthrough for 4-vectors.

use vat_core::Error;
use vat_math::{
    swizzle_quaternion, swizzle_vector3, swizzle_vector4, AxisFlip, AxisSwizzle, QuatFlip, Vec3,
    Vec4,
};

// ============================================================================
// Reference tables
// ============================================================================
// Written out independently of the library constants so a typo in either
// place shows up as a failure.

const PERMUTATION_REF: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

const AXIS_SIGN_REF: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

const QUAT_SIGN_REF: [[f32; 4]; 15] = [
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

/// Distinct, non-zero components so every permutation is observable.
const P: Vec3 = Vec3::new(1.5, -2.25, 4.0);
const Q: Vec4 = Vec4::new(0.125, -0.5, 0.75, 2.0);

// ============================================================================
// swizzle_vector3
// ============================================================================

#[test]
fn vector3_all_48_combinations() {
    let src = P.to_array();
    for (s, perm) in PERMUTATION_REF.iter().enumerate() {
        for (f, signs) in AXIS_SIGN_REF.iter().enumerate() {
            let expected = Vec3::new(
                src[perm[0]] * signs[0],
                src[perm[1]] * signs[1],
                src[perm[2]] * signs[2],
            );
            let got = swizzle_vector3(P, s as i32, f as i32).unwrap();
            assert_eq!(got, expected, "swizzle {s} flip {f}");
        }
    }
}

#[test]
fn vector3_worked_example() {
    let got = swizzle_vector3(Vec3::new(1.0, 2.0, 3.0), 3, 1).unwrap();
    assert_eq!(got, Vec3::new(-2.0, 3.0, 1.0));
}

#[test]
fn vector3_identity() {
    assert_eq!(swizzle_vector3(P, 0, 0).unwrap(), P);
}

#[test]
fn vector3_preserves_length() {
    for s in 0..6 {
        for f in 0..8 {
            let got = swizzle_vector3(P, s, f).unwrap();
            // squares of P's components are exact, so no rounding slack needed
            assert_eq!(got.length(), P.length());
        }
    }
}

// ============================================================================
// swizzle_vector4
// ============================================================================

#[test]
fn vector4_z_and_w_pass_through() {
    for s in 0..6 {
        for f in 0..8 {
            let got = swizzle_vector4(Q, s, f).unwrap();
            assert_eq!(got.z, Q.z, "swizzle {s} flip {f}");
            assert_eq!(got.w, Q.w, "swizzle {s} flip {f}");
        }
    }
}

#[test]
fn vector4_xy_follow_vector3() {
    for s in 0..6 {
        for f in 0..8 {
            let v3 = swizzle_vector3(Q.xyz(), s, f).unwrap();
            let v4 = swizzle_vector4(Q, s, f).unwrap();
            assert_eq!((v4.x, v4.y), (v3.x, v3.y), "swizzle {s} flip {f}");
        }
    }
}

#[test]
fn vector4_discards_swizzled_z() {
    // zyx + negate all: the 3-axis z slot would be -x, but z stays put
    let got = swizzle_vector4(Vec4::new(1.0, 2.0, 3.0, 4.0), 5, 6).unwrap();
    assert_eq!(got, Vec4::new(-3.0, -2.0, 3.0, 4.0));
}

#[test]
fn vector4_identity() {
    assert_eq!(swizzle_vector4(Q, 0, 0).unwrap(), Q);
}

// ============================================================================
// swizzle_quaternion
// ============================================================================

#[test]
fn quaternion_all_15_codes() {
    for (f, signs) in QUAT_SIGN_REF.iter().enumerate() {
        let expected = Q * Vec4::from_array(*signs);
        let got = swizzle_quaternion(Q, f as i32).unwrap();
        assert_eq!(got, expected, "flip {f}");
    }
}

#[test]
fn quaternion_codes_12_and_14_match() {
    let a = swizzle_quaternion(Q, 12).unwrap();
    let b = swizzle_quaternion(Q, 14).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Vec4::new(Q.x, Q.y, -Q.z, -Q.w));
    assert_eq!(QuatFlip::Zw.signs(), QuatFlip::ZwAlt.signs());
    assert_ne!(QuatFlip::Zw, QuatFlip::ZwAlt);
}

#[test]
fn quaternion_identity() {
    assert_eq!(swizzle_quaternion(Q, 0).unwrap(), Q);
}

// ============================================================================
// Sign tables
// ============================================================================

#[test]
fn signs_are_unit() {
    let unit = |s: &f32| *s == 1.0 || *s == -1.0;
    for f in AxisFlip::ALL {
        assert!(f.signs().iter().all(unit), "{f:?}");
    }
    for f in QuatFlip::ALL {
        assert!(f.signs().iter().all(unit), "{f:?}");
    }
}

#[test]
fn swizzles_are_permutations() {
    for s in AxisSwizzle::ALL {
        let mut idx = s.indices();
        idx.sort_unstable();
        assert_eq!(idx, [0, 1, 2], "{s:?}");
    }
}

// ============================================================================
// Out of range codes
// ============================================================================

#[test]
fn rejects_out_of_range_swizzle() {
    for code in [-1, 6, 100, i32::MIN] {
        let err = swizzle_vector3(P, code, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { value, max: 5, .. } if value == code));
        assert!(swizzle_vector4(Q, code, 0).is_err());
    }
}

#[test]
fn rejects_out_of_range_axis_flip() {
    for code in [-1, 8, 15] {
        let err = swizzle_vector3(P, 0, code).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { value, max: 7, .. } if value == code));
        assert!(swizzle_vector4(Q, 0, code).is_err());
    }
}

#[test]
fn rejects_out_of_range_quaternion_flip() {
    for code in [-1, 15, 16] {
        let err = swizzle_quaternion(Q, code).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { value, max: 14, .. } if value == code));
    }
}
