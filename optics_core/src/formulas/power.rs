//! # Power / Vergence Formulas
//!
//! Fundamental lens power relations: vergence, focal length, surface power,
//! nominal power, meridian power, and vertex-distance compensation.
//!
//! ## Notation
//!
//! - `D` = Dioptric power (reciprocal meters)
//! - `F1`, `F2` = Front and back surface powers
//! - `n` = Index of refraction
//! - `r` = Radius of curvature
//! - `t` = Center thickness
//! - `θ` = Cylinder axis in degrees
//!
//! ## Sign Conventions
//!
//! - Vergence: divergent light (object side) is negative
//! - Radii: convex front surface positive, concave back surface negative;
//!   sign is the caller's responsibility
//! - Vertex change: positive when the lens moves closer to the eye,
//!   negative when moved further away
//!
//! ## References
//!
//! - Brooks & Borish, System for Ophthalmic Dispensing, 3rd Edition
//! - Stoner, Perkins & Ferguson, Optical Formulas Tutorial, 2nd Edition

use crate::errors::{OpticsError, OpticsResult};
use crate::rounding::round_to_places;

/// Calculate the vergence of light at a given distance from its source.
///
/// # Formula
/// V = -100 / d
///
/// # Arguments
/// * `distance_cm` - Distance from the source in centimeters
///
/// # Returns
/// Vergence in diopters, rounded to 3 places. Fails when `distance_cm` is
/// zero (vergence is undefined at the source).
///
/// # Example
/// ```rust
/// use optics_core::formulas::power::vergence;
///
/// assert_eq!(vergence(55.0).unwrap(), -1.818);
/// ```
#[inline]
pub fn vergence(distance_cm: f64) -> OpticsResult<f64> {
    if distance_cm == 0.0 {
        return Err(OpticsError::domain(
            "distance_cm",
            distance_cm.to_string(),
            "Vergence is undefined at zero distance",
        ));
    }
    let distance_m = distance_cm / 100.0;
    Ok(round_to_places(-1.0 / distance_m, 3))
}

/// Calculate the dioptric power of a lens from its focal length.
///
/// # Formula
/// D = 1 / f
///
/// # Arguments
/// * `focal_m` - Focal length in meters
///
/// # Returns
/// Dioptric power, rounded to 3 places. Fails when `focal_m` is zero.
#[inline]
pub fn dioptric_power(focal_m: f64) -> OpticsResult<f64> {
    if focal_m == 0.0 {
        return Err(OpticsError::domain(
            "focal_m",
            focal_m.to_string(),
            "Focal length of zero has no finite power",
        ));
    }
    Ok(round_to_places(1.0 / focal_m, 3))
}

/// Calculate the focal length of a lens from its dioptric power.
///
/// Inverse of [`dioptric_power`] up to rounding.
///
/// # Formula
/// f = 1 / D
///
/// # Returns
/// Focal distance in meters, rounded to 3 places. Fails when `diopters` is
/// zero (a plano lens has no focal point).
#[inline]
pub fn focal_distance(diopters: f64) -> OpticsResult<f64> {
    if diopters == 0.0 {
        return Err(OpticsError::domain(
            "diopters",
            diopters.to_string(),
            "A plano lens has no focal point",
        ));
    }
    Ok(round_to_places(1.0 / diopters, 3))
}

/// Calculate the refractive power of a single lens surface.
///
/// # Formula
/// F = (n - 1) * 1000 / r
///
/// # Arguments
/// * `index` - Index of refraction of the lens material
/// * `radius_mm` - Radius of curvature in millimeters
///
/// # Returns
/// Surface power in diopters, unrounded. Fails when `radius_mm` is zero.
#[inline]
pub fn surface_power(index: f64, radius_mm: f64) -> OpticsResult<f64> {
    if radius_mm == 0.0 {
        return Err(OpticsError::domain(
            "radius_mm",
            radius_mm.to_string(),
            "A surface with zero radius has no finite power",
        ));
    }
    Ok((index - 1.0) * 1000.0 / radius_mm)
}

/// Calculate the radius of curvature producing a given surface power.
///
/// Always non-negative: the magnitude of the radius is returned regardless
/// of the power's sign, unlike [`surface_power`] which is signed.
///
/// # Formula
/// r = |(n - 1) * 1000 / F|
///
/// # Returns
/// Radius of curvature in millimeters, rounded to 2 places. Fails when
/// `diopters` is zero (a flat surface has infinite radius).
#[inline]
pub fn radius_of_curvature(index: f64, diopters: f64) -> OpticsResult<f64> {
    if diopters == 0.0 {
        return Err(OpticsError::domain(
            "diopters",
            diopters.to_string(),
            "A plano surface has infinite radius",
        ));
    }
    Ok(round_to_places(((index - 1.0) * 1000.0 / diopters).abs(), 2))
}

/// Calculate the nominal power of a lens from its two surface powers.
///
/// # Formula
/// D = F1 + F2, rounded to 2 places
#[inline]
pub fn nominal_power(front_power: f64, back_power: f64) -> f64 {
    round_to_places(front_power + back_power, 2)
}

/// Calculate the back surface power needed to reach a total nominal power.
///
/// # Formula
/// F2 = D - F1, rounded to 2 places
#[inline]
pub fn nominal_backside_power(front_power: f64, total_power: f64) -> f64 {
    round_to_places(total_power - front_power, 2)
}

/// Calculate nominal lens power from the lens maker's equation.
///
/// Radii are signed per optical convention (convex front positive, concave
/// back negative); the caller supplies the signs.
///
/// # Formula
/// D = (n - 1)/r1 + (n - 1)/r2, radii converted from centimeters to meters
///
/// # Arguments
/// * `index` - Index of refraction
/// * `radius_front_cm` - Front surface radius in centimeters, signed
/// * `radius_back_cm` - Back surface radius in centimeters, signed
///
/// # Returns
/// Nominal power in diopters, rounded to 2 places. Fails when either radius
/// is zero.
///
/// # Example
/// ```rust
/// use optics_core::formulas::power::lens_makers_equation;
///
/// assert_eq!(lens_makers_equation(1.523, 10.0, -20.0).unwrap(), 2.61);
/// ```
pub fn lens_makers_equation(
    index: f64,
    radius_front_cm: f64,
    radius_back_cm: f64,
) -> OpticsResult<f64> {
    if radius_front_cm == 0.0 || radius_back_cm == 0.0 {
        let (field, value) = if radius_front_cm == 0.0 {
            ("radius_front_cm", radius_front_cm)
        } else {
            ("radius_back_cm", radius_back_cm)
        };
        return Err(OpticsError::domain(
            field,
            value.to_string(),
            "A surface with zero radius has no finite power",
        ));
    }
    let radius_front_m = radius_front_cm / 100.0;
    let radius_back_m = radius_back_cm / 100.0;

    let front_diopters = (index - 1.0) / radius_front_m;
    let back_diopters = (index - 1.0) / radius_back_m;

    Ok(round_to_places(front_diopters + back_diopters, 2))
}

/// Calculate the spherical equivalent of a spherocylinder lens.
///
/// # Formula
/// SE = sphere + cylinder / 2, unrounded
#[inline]
pub fn spherical_equivalent(sphere: f64, cylinder: f64) -> f64 {
    sphere + cylinder / 2.0
}

/// Calculate approximate lens power in the 180-degree (horizontal) meridian.
///
/// # Formula
/// P = sphere + cylinder * sin²(θ - 180°), rounded to 2 places
///
/// # Arguments
/// * `sphere` - Sphere power in diopters
/// * `cylinder` - Cylinder power in diopters
/// * `axis_degrees` - Cylinder axis in degrees; by convention an integer in
///   [0, 180), not validated here
#[inline]
pub fn power_meridian_180(sphere: f64, cylinder: f64, axis_degrees: f64) -> f64 {
    let theta = (axis_degrees - 180.0).to_radians();
    round_to_places(sphere + cylinder * theta.sin().powi(2), 2)
}

/// Calculate approximate lens power in the 90-degree (vertical) meridian.
///
/// # Formula
/// P = sphere + cylinder * sin²(θ - 90°), rounded to 2 places
#[inline]
pub fn power_meridian_90(sphere: f64, cylinder: f64, axis_degrees: f64) -> f64 {
    let theta = (axis_degrees - 90.0).to_radians();
    round_to_places(sphere + cylinder * theta.sin().powi(2), 2)
}

/// Calculate the effective power of a lens after a vertex-distance change.
///
/// # Formula
/// P' = P / (1 + v * P), with v = vertex_change_mm / 1000
///
/// # Arguments
/// * `original_power` - Original lens power in diopters
/// * `vertex_change_mm` - Vertex change in millimeters; positive when the
///   lens moves closer to the eye, negative when moved further away
///
/// # Returns
/// Effective power in diopters, rounded to 2 places. Fails when the
/// denominator vanishes (the new vertex coincides with the focal point).
#[inline]
pub fn effective_power(original_power: f64, vertex_change_mm: f64) -> OpticsResult<f64> {
    let vertex_m = vertex_change_mm / 1000.0;
    let denominator = 1.0 + vertex_m * original_power;
    if denominator == 0.0 {
        return Err(OpticsError::domain(
            "vertex_change_mm",
            vertex_change_mm.to_string(),
            "Vertex change places the lens at its focal point",
        ));
    }
    Ok(round_to_places(original_power / denominator, 2))
}

/// Calculate the compensated power to order after a vertex-distance change.
///
/// Not the literal inverse of [`effective_power`]: compensating a power for
/// a new fitting distance and computing the effective power at that distance
/// are different physical directions, hence the flipped denominator sign.
///
/// # Formula
/// P' = P / (1 - v * P), with v = vertex_change_mm / 1000
#[inline]
pub fn compensated_power(original_power: f64, vertex_change_mm: f64) -> OpticsResult<f64> {
    let vertex_m = vertex_change_mm / 1000.0;
    let denominator = 1.0 - vertex_m * original_power;
    if denominator == 0.0 {
        return Err(OpticsError::domain(
            "vertex_change_mm",
            vertex_change_mm.to_string(),
            "Vertex change places the lens at its focal point",
        ));
    }
    Ok(round_to_places(original_power / denominator, 2))
}

/// Approximate the change in effective power per vertex-distance change.
///
/// Gives only the magnitude of the change, not the power to order; the
/// caller decides whether to add or subtract it.
///
/// # Formula
/// ΔP = v * P² / 1000, rounded to 2 places
#[inline]
pub fn vertex_power_change_approx(original_power: f64, vertex_change_mm: f64) -> f64 {
    round_to_places(vertex_change_mm * original_power.powi(2) / 1000.0, 2)
}

/// Calculate the back vertex power of a thick lens.
///
/// # Formula
/// BVP = F1 / (1 - (t/n) * F1) + F2, with t in meters
///
/// # Arguments
/// * `front_power` - Front surface power in diopters
/// * `back_power` - Back surface power in diopters
/// * `thickness_mm` - Center thickness in millimeters
/// * `index` - Index of refraction
///
/// # Returns
/// Back vertex power in diopters, rounded to 2 places. Fails when the
/// thickness factor cancels the front surface power.
///
/// # Example
/// ```rust
/// use optics_core::formulas::power::back_vertex_power;
///
/// assert_eq!(back_vertex_power(12.0, -3.0, 14.0, 1.498).unwrap(), 10.52);
/// ```
pub fn back_vertex_power(
    front_power: f64,
    back_power: f64,
    thickness_mm: f64,
    index: f64,
) -> OpticsResult<f64> {
    let thickness_m = thickness_mm / 1000.0;
    let factor = thickness_m / index;
    let denominator = 1.0 - factor * front_power;
    if denominator == 0.0 {
        return Err(OpticsError::domain(
            "thickness_mm",
            thickness_mm.to_string(),
            "Thickness factor cancels the front surface power",
        ));
    }
    Ok(round_to_places(front_power / denominator + back_power, 2))
}

/// Calculate the front vertex power of a thick lens.
///
/// Note the asymmetry with [`back_vertex_power`]: the back surface power sits
/// in the denominator here. Front and back vertex powers differ physically.
///
/// # Formula
/// FVP = F2 / (1 - (t/n) * F2) + F1, with t in meters
pub fn front_vertex_power(
    front_power: f64,
    back_power: f64,
    thickness_mm: f64,
    index: f64,
) -> OpticsResult<f64> {
    let thickness_m = thickness_mm / 1000.0;
    let factor = thickness_m / index;
    let denominator = 1.0 - factor * back_power;
    if denominator == 0.0 {
        return Err(OpticsError::domain(
            "thickness_mm",
            thickness_mm.to_string(),
            "Thickness factor cancels the back surface power",
        ));
    }
    Ok(round_to_places(back_power / denominator + front_power, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vergence() {
        assert_eq!(vergence(55.0).unwrap(), -1.818);
        assert_eq!(vergence(-50.0).unwrap(), 2.0);
    }

    #[test]
    fn test_vergence_zero_distance_fails() {
        assert!(vergence(0.0).is_err());
    }

    #[test]
    fn test_dioptric_power() {
        assert_eq!(dioptric_power(0.333).unwrap(), 3.003);
        assert_eq!(dioptric_power(2.0).unwrap(), 0.5);
        assert!(dioptric_power(0.0).is_err());
    }

    #[test]
    fn test_focal_distance() {
        assert_eq!(focal_distance(8.0).unwrap(), 0.125);
        assert!(focal_distance(0.0).is_err());
    }

    #[test]
    fn test_focal_power_round_trip() {
        // dioptric_power(focal_distance(d)) recovers d within rounding
        for d in [8.0, -4.0, 2.5, 10.0] {
            let focal = focal_distance(d).unwrap();
            let power = dioptric_power(focal).unwrap();
            assert!(
                (power - d).abs() < 0.05,
                "round trip for {} gave {}",
                d,
                power
            );
        }
    }

    #[test]
    fn test_surface_power() {
        assert_eq!(surface_power(1.498, 49.8).unwrap(), 10.0);
        assert!(surface_power(1.498, 0.0).is_err());
    }

    #[test]
    fn test_radius_of_curvature() {
        assert_eq!(radius_of_curvature(1.74, 1.75).unwrap(), 422.86);
        // Magnitude only, even for minus powers
        assert_eq!(radius_of_curvature(1.74, -1.75).unwrap(), 422.86);
        assert!(radius_of_curvature(1.74, 0.0).is_err());
    }

    #[test]
    fn test_nominal_power() {
        assert_eq!(nominal_power(2.25, -4.25), -2.0);
        assert_eq!(nominal_backside_power(5.25, -2.25), -7.5);
    }

    #[test]
    fn test_lens_makers_equation() {
        assert_eq!(lens_makers_equation(1.523, 10.0, -20.0).unwrap(), 2.61);
        assert!(lens_makers_equation(1.523, 0.0, -20.0).is_err());
        assert!(lens_makers_equation(1.523, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_spherical_equivalent() {
        assert_eq!(spherical_equivalent(1.0, 1.0), 1.5);
        assert_eq!(spherical_equivalent(1.0, -0.25), 0.875);
        assert_eq!(spherical_equivalent(0.25, -0.25), 0.125);
    }

    #[test]
    fn test_power_meridian_180() {
        // Cylinder axis 90: full cylinder power in the horizontal meridian
        assert_eq!(power_meridian_180(5.5, -5.5, 90.0), 0.0);
        assert_eq!(power_meridian_180(-4.5, -2.5, 125.0), -6.18);
        assert_eq!(power_meridian_180(2.25, -1.0, 60.0), 1.5);
    }

    #[test]
    fn test_power_meridian_90() {
        assert_eq!(power_meridian_90(1.0, -1.0, 180.0), 0.0);
        assert_eq!(power_meridian_90(-1.0, -2.0, 60.0), -1.5);
    }

    #[test]
    fn test_effective_power() {
        assert_eq!(effective_power(0.0, -3.0).unwrap(), 0.0);
        assert_eq!(effective_power(-6.0, -3.0).unwrap(), -5.89);
    }

    #[test]
    fn test_compensated_power() {
        assert_eq!(compensated_power(0.0, -3.0).unwrap(), 0.0);
        assert_eq!(compensated_power(-6.0, -3.0).unwrap(), -6.11);
    }

    #[test]
    fn test_effective_vs_compensated_direction() {
        // The two formulas move in opposite directions for the same change
        let effective = effective_power(-6.0, -3.0).unwrap();
        let compensated = compensated_power(-6.0, -3.0).unwrap();
        assert!(effective > -6.0);
        assert!(compensated < -6.0);
    }

    #[test]
    fn test_vertex_power_change_approx() {
        assert_eq!(vertex_power_change_approx(0.0, 3.0), 0.0);
        assert_eq!(vertex_power_change_approx(10.0, 3.0), 0.3);
    }

    #[test]
    fn test_back_vertex_power() {
        assert_eq!(back_vertex_power(12.0, -3.0, 14.0, 1.498).unwrap(), 10.52);
    }

    #[test]
    fn test_front_vertex_power() {
        assert_eq!(front_vertex_power(12.0, -3.0, 14.0, 1.498).unwrap(), 9.08);
    }

    #[test]
    fn test_vertex_powers_differ() {
        // Front and back vertex powers are distinct for a thick lens
        let bvp = back_vertex_power(12.0, -3.0, 14.0, 1.498).unwrap();
        let fvp = front_vertex_power(12.0, -3.0, 14.0, 1.498).unwrap();
        assert!((bvp - fvp).abs() > 1.0);
    }
}
