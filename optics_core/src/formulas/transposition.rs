//! # Cylinder Transposition
//!
//! Flat transposition between plus- and minus-cylinder prescription forms.
//! Each function branches on the sign of the cylinder: plus cylinder
//! transposes, minus cylinder is already in minus form and passes through,
//! zero cylinder has nothing to transpose and returns zero.

use crate::sign::Sign;

/// Transposed sphere power of a plus-cylinder prescription.
///
/// # Formula
/// S' = S + C for plus cylinder; S unchanged for minus; 0 for no cylinder
#[inline]
pub fn transpose_sphere_power(sphere: f64, cylinder: f64) -> f64 {
    match Sign::of(cylinder) {
        Sign::Positive => sphere + cylinder,
        Sign::Negative => sphere,
        Sign::Zero => 0.0,
    }
}

/// Transposed cylinder axis of a plus-cylinder prescription.
///
/// Plus cylinder rotates the axis 90 degrees, staying inside the 1-180
/// notation: axes below 90 gain 90, axes above 90 lose 90, and an axis of
/// exactly 90 becomes 180.
#[inline]
pub fn transpose_axis(cylinder: f64, axis_deg: f64) -> f64 {
    match Sign::of(cylinder) {
        Sign::Positive => {
            if axis_deg < 90.0 {
                axis_deg + 90.0
            } else if axis_deg > 90.0 {
                axis_deg - 90.0
            } else {
                180.0
            }
        }
        Sign::Negative => axis_deg,
        Sign::Zero => 0.0,
    }
}

/// Transposed cylinder sign of a plus-cylinder prescription.
///
/// # Formula
/// C' = -C for plus cylinder; C unchanged for minus; 0 for no cylinder
#[inline]
pub fn transposed_cylinder_sign(cylinder: f64) -> f64 {
    match Sign::of(cylinder) {
        Sign::Positive => -cylinder,
        Sign::Negative => cylinder,
        Sign::Zero => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_sphere_power() {
        assert_eq!(transpose_sphere_power(-2.0, 1.25), -0.75);
        assert_eq!(transpose_sphere_power(-2.0, -1.25), -2.0);
        assert_eq!(transpose_sphere_power(-2.0, 0.0), 0.0);
    }

    #[test]
    fn test_transpose_axis() {
        assert_eq!(transpose_axis(1.0, 45.0), 135.0);
        assert_eq!(transpose_axis(1.0, 170.0), 80.0);
        assert_eq!(transpose_axis(1.0, 90.0), 180.0);
        assert_eq!(transpose_axis(-1.0, 45.0), 45.0);
        assert_eq!(transpose_axis(0.0, 45.0), 0.0);
    }

    #[test]
    fn test_transposed_cylinder_sign_trichotomy() {
        // Plus cylinder flips sign
        for cylinder in [0.25, 1.0, 5.5] {
            assert_eq!(transposed_cylinder_sign(cylinder), -cylinder);
        }
        // Minus cylinder passes through
        for cylinder in [-0.25, -1.0, -5.5] {
            assert_eq!(transposed_cylinder_sign(cylinder), cylinder);
        }
        // Zero stays zero
        assert_eq!(transposed_cylinder_sign(0.0), 0.0);
    }

    #[test]
    fn test_full_transposition_round_trip() {
        // +2.00 +1.00 x 045 transposes to +3.00 -1.00 x 135 and back
        let sphere = transpose_sphere_power(2.0, 1.0);
        let cylinder = transposed_cylinder_sign(1.0);
        let axis = transpose_axis(1.0, 45.0);
        assert_eq!((sphere, cylinder, axis), (3.0, -1.0, 135.0));
    }
}
