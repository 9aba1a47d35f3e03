//! # Base Curve Selection
//!
//! Rules of thumb for choosing the front base curve of a lens blank:
//! Vogel's rule for single-vision lenses and the Boddy formula for
//! progressives. All results are in diopters of front curve.
//!
//! ## References
//!
//! - Brooks & Borish, System for Ophthalmic Dispensing, 3rd Edition

use crate::formulas::power::spherical_equivalent;
use crate::sign::Sign;

/// Vogel's rule base curve for a plus lens.
///
/// # Formula
/// BC = SE + 6
#[inline]
pub fn vogels_rule_plus(sphere: f64, cylinder: f64) -> f64 {
    spherical_equivalent(sphere, cylinder) + 6.0
}

/// Vogel's rule base curve for a minus lens.
///
/// # Formula
/// BC = SE / 2 + 6
#[inline]
pub fn vogels_rule_minus(sphere: f64, cylinder: f64) -> f64 {
    spherical_equivalent(sphere, cylinder) / 2.0 + 6.0
}

/// Boddy formula front curve estimate for a plus progressive lens.
///
/// # Formula
/// BC = add / 2 + SE + 3.50
#[inline]
pub fn boddy_formula_plus(sphere: f64, cylinder: f64, add_power: f64) -> f64 {
    add_power / 2.0 + spherical_equivalent(sphere, cylinder) + 3.50
}

/// Boddy formula front curve estimate for a minus progressive lens.
///
/// # Formula
/// BC = (SE + add) / 2 + 4.25
#[inline]
pub fn boddy_formula_minus(sphere: f64, cylinder: f64, add_power: f64) -> f64 {
    (spherical_equivalent(sphere, cylinder) + add_power) / 2.0 + 4.25
}

/// Boddy formula front curve estimate, dispatching on the sphere sign.
///
/// A positive sphere takes the plus branch; zero and minus spheres take the
/// minus branch.
pub fn boddy_formula(sphere: f64, cylinder: f64, add_power: f64) -> f64 {
    match Sign::of(sphere) {
        Sign::Positive => boddy_formula_plus(sphere, cylinder, add_power),
        Sign::Negative | Sign::Zero => boddy_formula_minus(sphere, cylinder, add_power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vogels_rule_plus() {
        assert_eq!(vogels_rule_plus(6.0, 0.0), 12.0);
        assert_eq!(vogels_rule_plus(1.0, 1.0), 7.5);
    }

    #[test]
    fn test_vogels_rule_minus() {
        assert_eq!(vogels_rule_minus(6.0, 0.0), 9.0);
        assert_eq!(vogels_rule_minus(-4.0, 0.5), 4.125);
    }

    #[test]
    fn test_boddy_formula_plus() {
        assert_eq!(boddy_formula_plus(0.0, 0.0, 0.0), 3.5);
        assert_eq!(boddy_formula_plus(2.0, 0.0, 2.0), 6.5);
    }

    #[test]
    fn test_boddy_formula_minus() {
        assert_eq!(boddy_formula_minus(0.0, 0.0, 0.0), 4.25);
        assert_eq!(boddy_formula_minus(-2.0, 0.0, 2.0), 4.25);
    }

    #[test]
    fn test_boddy_formula_dispatch() {
        // Zero and minus spheres take the minus branch
        assert_eq!(boddy_formula(-1.0, 0.0, 0.0), 3.75);
        assert_eq!(boddy_formula(0.0, 0.0, 0.0), 4.25);
        // Positive spheres take the plus branch
        assert_eq!(boddy_formula(1.0, 0.0, 0.0), 4.5);
        assert_eq!(
            boddy_formula(2.0, -0.5, 2.0),
            boddy_formula_plus(2.0, -0.5, 2.0)
        );
    }
}
