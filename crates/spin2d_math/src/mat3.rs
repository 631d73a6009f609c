//! 3x3 Matrix utilities for 2D affine transformations
//!
//! Transforms are composed right-to-left: in `mul(a, b)`, `b` is applied to a
//! point first, then `a`. Points are treated as column vectors with an implied
//! homogeneous coordinate of 1.

use crate::Vec2;

/// 3x3 matrix type (column-major)
pub type Mat3 = [[f32; 3]; 3];

/// Identity matrix
pub const IDENTITY: Mat3 = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Create a translation matrix.
pub fn translation(offset: Vec2) -> Mat3 {
    let mut m = IDENTITY;
    m[2][0] = offset.x;
    m[2][1] = offset.y;
    m
}

/// Create a rotation matrix about the origin.
///
/// The rotation maps the X axis toward the Y axis for positive angles.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
pub fn rotation(angle: f32) -> Mat3 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Multiply two 3x3 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat3, b: Mat3) -> Mat3 {
    let mut result = [[0.0f32; 3]; 3];

    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point by an affine matrix (column-major)
///
/// The point is extended with a homogeneous coordinate of 1, so translation
/// applies.
pub fn transform_point(m: Mat3, p: Vec2) -> Vec2 {
    Vec2::new(
        m[0][0] * p.x + m[1][0] * p.y + m[2][0],
        m[0][1] * p.x + m[1][1] * p.y + m[2][1],
    )
}

/// Transform a direction by an affine matrix (column-major)
///
/// Rotation and scale apply, translation does not.
pub fn transform_vector(m: Mat3, v: Vec2) -> Vec2 {
    Vec2::new(
        m[0][0] * v.x + m[1][0] * v.y,
        m[0][1] * v.x + m[1][1] * v.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    fn mat_approx_eq(a: Mat3, b: Mat3) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (a[i][j] - b[i][j]).abs() > 1e-5 {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_mul_identity() {
        let a = rotation(0.5);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_rotation_direction() {
        // 90 degrees maps X to Y
        let m = rotation(FRAC_PI_2);
        let result = transform_point(m, Vec2::X);
        assert!(vec_approx_eq(result, Vec2::Y), "got {:?}", result);
    }

    #[test]
    fn test_rotation_composition() {
        // Two 45 degree rotations equal one 90 degree rotation
        let r45 = rotation(FRAC_PI_4);
        let r90 = rotation(FRAC_PI_2);

        let composed = mul(r45, r45);

        let v = Vec2::new(1.0, 0.0);
        let result1 = transform_point(composed, v);
        let result2 = transform_point(r90, v);
        assert!(vec_approx_eq(result1, result2),
            "Composed: {:?}, Direct: {:?}", result1, result2);
    }

    #[test]
    fn test_translation() {
        let m = translation(Vec2::new(10.0, -5.0));
        let result = transform_point(m, Vec2::new(1.0, 2.0));
        assert!(vec_approx_eq(result, Vec2::new(11.0, -3.0)));
    }

    #[test]
    fn test_translate_then_rotate_order() {
        // mul(rotate, translate) applies the translation first
        let m = mul(rotation(FRAC_PI_2), translation(Vec2::new(1.0, 0.0)));
        let result = transform_point(m, Vec2::ZERO);
        assert!(vec_approx_eq(result, Vec2::new(0.0, 1.0)), "got {:?}", result);

        // mul(translate, rotate) moves after rotating
        let m = mul(translation(Vec2::new(1.0, 0.0)), rotation(FRAC_PI_2));
        let result = transform_point(m, Vec2::ZERO);
        assert!(vec_approx_eq(result, Vec2::new(1.0, 0.0)), "got {:?}", result);
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let m = translation(Vec2::new(100.0, 100.0));
        let result = transform_vector(m, Vec2::X);
        assert!(vec_approx_eq(result, Vec2::X));
    }
}
