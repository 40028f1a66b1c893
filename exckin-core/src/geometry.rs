use std::f64::consts::PI;

use nalgebra::Rotation3;

use crate::{Error, Result};

/// Calculate the shortest rotation between two points on a circle
pub fn shortest_rotation(distance: f64) -> f64 {
    let dist_normal = (distance + (2.0 * PI)) % (2.0 * PI);

    if dist_normal > PI {
        dist_normal - (2.0 * PI)
    } else {
        dist_normal
    }
}

/// Calculate the enclosed angle of a triangle using the law of cosines.
///
/// `a` and `b` are the sides adjacent to the returned angle, `c` the
/// side opposite it. If the cosine argument falls outside `[-1, 1]` the
/// sides cannot close into a triangle and `Error::CosineDomain` is
/// returned. The boundary values are included: collinear (degenerate)
/// triangles solve to exactly `0` or `PI`.
pub fn law_of_cosines(a: f64, b: f64, c: f64) -> Result<f64> {
    let a2 = a.powi(2);
    let b2 = b.powi(2);
    let c2 = c.powi(2);

    let numerator = a2 + b2 - c2;
    let denominator = 2.0 * a * b;

    let argument = numerator / denominator;
    if !(-1.0..=1.0).contains(&argument) {
        return Err(Error::CosineDomain(argument));
    }

    Ok(argument.acos())
}

/// Calculate the third triangle side from two sides and their enclosed angle.
pub fn law_of_cosines_side(a: f64, b: f64, gamma: f64) -> f64 {
    (a.powi(2) + b.powi(2) - 2.0 * a * b * gamma.cos()).sqrt()
}

pub trait EulerAngles {
    /// Create a rotation matrix from a roll angle.
    fn from_roll(roll: f64) -> Self;
    /// Create a rotation matrix from a pitch angle.
    fn from_pitch(pitch: f64) -> Self;
    /// Create a rotation matrix from a yaw angle.
    fn from_yaw(yaw: f64) -> Self;
}

impl EulerAngles for Rotation3<f64> {
    fn from_roll(roll: f64) -> Self {
        Rotation3::from_euler_angles(roll, 0.0, 0.0)
    }

    fn from_pitch(pitch: f64) -> Self {
        Rotation3::from_euler_angles(0.0, pitch, 0.0)
    }

    fn from_yaw(yaw: f64) -> Self {
        Rotation3::from_euler_angles(0.0, 0.0, yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_rotation() {
        assert!(shortest_rotation(45.0_f64.to_radians()) < 46.0_f64.to_radians());
        assert!(shortest_rotation(179.0_f64.to_radians()) < 180.0_f64.to_radians());
        assert!((shortest_rotation(270.0_f64.to_radians()) + 90.0_f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_law_of_cosines() {
        let tolerance = 1e-9;

        assert!((law_of_cosines(3.0, 4.0, 5.0).unwrap() - 90.0_f64.to_radians()).abs() < tolerance);
        assert!((law_of_cosines(1.0, 1.0, 1.0).unwrap() - 60.0_f64.to_radians()).abs() < tolerance);
    }

    #[test]
    fn test_law_of_cosines_collinear() {
        // Degenerate triangles land exactly on the acos boundary.
        assert_eq!(law_of_cosines(1.0, 1.0, 2.0), Ok(PI));
        assert_eq!(law_of_cosines(1.0, 1.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_law_of_cosines_unreachable() {
        match law_of_cosines(1.0, 1.0, 2.1) {
            Err(Error::CosineDomain(argument)) => assert!(argument < -1.0),
            other => panic!("expected domain error, got {:?}", other),
        }
    }

    #[test]
    fn test_law_of_cosines_side() {
        let tolerance = 1e-9;

        assert!((law_of_cosines_side(3.0, 4.0, 90.0_f64.to_radians()) - 5.0).abs() < tolerance);
    }
}
