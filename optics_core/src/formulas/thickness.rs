//! # Thickness / Sag Formulas
//!
//! Sagittal depth of a spherical surface over a chord, and the center/edge
//! thickness relations used when laying out finished and prism lenses.
//!
//! ## Notation
//!
//! - `s` = Sagittal depth (sag) in millimeters
//! - `R` = Radius of curvature
//! - `h` = Semi-diameter (half the chord) in millimeters
//! - `F` = Surface power in diopters
//! - `n` = Index of refraction
//!
//! ## References
//!
//! - Brooks & Borish, System for Ophthalmic Dispensing, 3rd Edition
//! - Stoner, Perkins & Ferguson, Optical Formulas Tutorial, 2nd Edition

use crate::errors::{OpticsError, OpticsResult};

/// Calculate the exact sagittal depth of a surface from its radius.
///
/// # Formula
/// s = R - sqrt(R² - h²)
///
/// # Arguments
/// * `radius_mm` - Radius of curvature in millimeters
/// * `diameter_mm` - Lens diameter (chord) in millimeters
///
/// # Returns
/// Sagittal depth in millimeters. Fails when the semi-diameter exceeds the
/// radius magnitude (the chord does not fit on the sphere); the negative
/// square-root term is never allowed to propagate as NaN.
///
/// # Example
/// ```rust
/// use optics_core::formulas::thickness::sagittal_depth;
///
/// let sag = sagittal_depth(100.0, 60.0).unwrap();
/// assert!((sag - 4.606).abs() < 0.001);
/// ```
pub fn sagittal_depth(radius_mm: f64, diameter_mm: f64) -> OpticsResult<f64> {
    let semi_diameter = diameter_mm / 2.0;
    let radicand = radius_mm * radius_mm - semi_diameter * semi_diameter;
    if radicand < 0.0 {
        return Err(OpticsError::domain(
            "diameter_mm",
            diameter_mm.to_string(),
            "Semi-diameter exceeds the radius of curvature",
        ));
    }
    Ok(radius_mm - radicand.sqrt())
}

/// Calculate the exact sagittal depth of a surface from its power.
///
/// The radius is derived from the surface power as R = (n - 1) / F, then the
/// chord relation of [`sagittal_depth`] applies.
///
/// # Arguments
/// * `lens_power` - True surface power in diopters
/// * `diameter_mm` - Lens diameter in millimeters
/// * `index` - Index of refraction
///
/// # Returns
/// Sagittal depth. Fails on zero power (flat surface, infinite radius) or
/// when the semi-diameter exceeds the derived radius.
pub fn sagittal_depth_from_power(
    lens_power: f64,
    diameter_mm: f64,
    index: f64,
) -> OpticsResult<f64> {
    if lens_power == 0.0 {
        return Err(OpticsError::domain(
            "lens_power",
            lens_power.to_string(),
            "A plano surface has no sagittal depth",
        ));
    }
    let semi_diameter = diameter_mm / 2.0;
    let radius = (index - 1.0) / lens_power;
    let radicand = radius * radius - semi_diameter * semi_diameter;
    if radicand < 0.0 {
        return Err(OpticsError::domain(
            "diameter_mm",
            diameter_mm.to_string(),
            "Semi-diameter exceeds the radius of curvature",
        ));
    }
    Ok(radius - radicand.sqrt())
}

/// Calculate the edge thickness of a minus lens.
///
/// # Formula
/// e = (sag_back - sag_front) + center
#[inline]
pub fn edge_thickness(sag_front: f64, sag_back: f64, center_thickness: f64) -> f64 {
    (sag_back - sag_front) + center_thickness
}

/// Calculate the center thickness of a plus lens.
///
/// Rearrangement of the same linear relation as [`edge_thickness`].
///
/// # Formula
/// t = sag_front - sag_back + edge
#[inline]
pub fn center_thickness(sag_front: f64, sag_back: f64, edge_thickness: f64) -> f64 {
    sag_front - sag_back + edge_thickness
}

/// Approximate the sagittal depth from surface power.
///
/// # Formula
/// s ≈ h² * F / (2000 * (n - 1))
///
/// # Returns
/// Approximate sag in millimeters. Fails at `index` = 1.
#[inline]
pub fn approximate_sag(surface_power: f64, diameter_mm: f64, index: f64) -> OpticsResult<f64> {
    if index == 1.0 {
        return Err(OpticsError::domain(
            "index",
            index.to_string(),
            "A material with index 1 has no refracting surface",
        ));
    }
    let semi_diameter = diameter_mm / 2.0;
    Ok(semi_diameter * semi_diameter * surface_power / (2000.0 * (index - 1.0)))
}

/// Approximate a lens thickness: the approximate sag plus a base center or
/// edge thickness.
#[inline]
pub fn approximate_thickness(
    surface_power: f64,
    diameter_mm: f64,
    index: f64,
    base_thickness_mm: f64,
) -> OpticsResult<f64> {
    Ok(approximate_sag(surface_power, diameter_mm, index)? + base_thickness_mm)
}

/// Calculate the base-to-apex thickness difference of a purely prismatic
/// lens.
///
/// # Formula
/// t = d * Δ / (100 * (n - 1))
///
/// # Returns
/// Thickness difference in millimeters. Fails at `index` = 1.
#[inline]
pub fn prism_thickness(prism_power: f64, diameter_mm: f64, index: f64) -> OpticsResult<f64> {
    if index == 1.0 {
        return Err(OpticsError::domain(
            "index",
            index.to_string(),
            "A material with index 1 produces no prism",
        ));
    }
    Ok(diameter_mm * prism_power / (100.0 * (index - 1.0)))
}

/// Calculate prism power from the edge thickness difference.
///
/// Algebraic inverse of [`prism_thickness`].
///
/// # Formula
/// Δ = t * 100 * (n - 1) / d
///
/// # Returns
/// Prism power in prism diopters. Fails when `diameter_mm` is zero.
#[inline]
pub fn prism_power_from_thickness(
    thickness_difference_mm: f64,
    diameter_mm: f64,
    index: f64,
) -> OpticsResult<f64> {
    if diameter_mm == 0.0 {
        return Err(OpticsError::domain(
            "diameter_mm",
            diameter_mm.to_string(),
            "Prism power over a zero chord is undefined",
        ));
    }
    Ok(thickness_difference_mm * (100.0 * (index - 1.0)) / diameter_mm)
}

/// Thickest edge of a plus lens carrying prism.
///
/// # Formula
/// e = prism_base + minimum_edge
#[inline]
pub fn plus_prism_lens_thickest_edge(
    prism_base_thickness: f64,
    minimum_edge_thickness: f64,
) -> f64 {
    prism_base_thickness + minimum_edge_thickness
}

/// Center thickness of a plus lens carrying prism.
///
/// # Formula
/// t = sag + minimum_edge + prism_base / 2
#[inline]
pub fn plus_prism_lens_center_thickness(
    sagittal_depth: f64,
    minimum_edge_thickness: f64,
    prism_base_thickness: f64,
) -> f64 {
    sagittal_depth + minimum_edge_thickness + prism_base_thickness / 2.0
}

/// Edge thickness of a minus lens carrying prism.
///
/// # Formula
/// e = sag + minimum_center + prism_base / 2
#[inline]
pub fn minus_prism_lens_edge_thickness(
    sagittal_depth: f64,
    minimum_center_thickness: f64,
    prism_base_thickness: f64,
) -> f64 {
    sagittal_depth + minimum_center_thickness + prism_base_thickness / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_sagittal_depth() {
        // R = 100, d = 60: s = 100 - sqrt(10000 - 900) = 4.6061
        let sag = sagittal_depth(100.0, 60.0).unwrap();
        assert!(approx_eq(sag, 4.6061), "sag = {}", sag);
    }

    #[test]
    fn test_sagittal_depth_chord_too_wide_fails() {
        // Semi-diameter 20 over radius 10: no spherical cap exists
        let result = sagittal_depth(10.0, 40.0);
        assert!(matches!(result, Err(OpticsError::Domain { .. })));
    }

    #[test]
    fn test_sagittal_depth_from_power() {
        // F = +5.00, n = 1.53: R = 0.106 (same units as the classic
        // approximation chart); chord scaled to match
        let sag = sagittal_depth_from_power(5.0, 0.12, 1.53).unwrap();
        let radius: f64 = 0.53 / 5.0;
        let expected = radius - (radius * radius - 0.06f64 * 0.06).sqrt();
        assert!(approx_eq(sag, expected), "sag = {}", sag);
    }

    #[test]
    fn test_sagittal_depth_from_power_zero_power_fails() {
        assert!(sagittal_depth_from_power(0.0, 60.0, 1.53).is_err());
    }

    #[test]
    fn test_edge_and_center_thickness_inverse() {
        let sag_front = 4.2;
        let sag_back = 1.1;
        let center = 2.0;
        let edge = edge_thickness(sag_front, sag_back, center);
        // Rearranging the same relation recovers the center thickness
        assert!(approx_eq(center_thickness(sag_front, sag_back, edge), center));
    }

    #[test]
    fn test_approximate_sag() {
        // h = 30, F = +5.00, n = 1.53: s = 900 * 5 / 1060 = 4.245
        let sag = approximate_sag(5.0, 60.0, 1.53).unwrap();
        assert!(approx_eq(sag, 4.2453), "sag = {}", sag);
        assert!(approximate_sag(5.0, 60.0, 1.0).is_err());
    }

    #[test]
    fn test_approximate_thickness() {
        let thickness = approximate_thickness(5.0, 60.0, 1.53, 2.0).unwrap();
        assert!(approx_eq(thickness, 6.2453), "t = {}", thickness);
    }

    #[test]
    fn test_approximate_sag_close_to_exact() {
        // For moderate powers the approximation tracks the exact sag
        let exact = sagittal_depth(106.0, 60.0).unwrap();
        let approx = approximate_sag(5.0, 60.0, 1.53).unwrap();
        assert!((exact - approx).abs() < 0.25, "exact {} approx {}", exact, approx);
    }

    #[test]
    fn test_prism_thickness() {
        // 2 prism diopters over 50 mm in crown glass
        let t = prism_thickness(2.0, 50.0, 1.523).unwrap();
        assert!(approx_eq(t, 1.9120), "t = {}", t);
        assert!(prism_thickness(2.0, 50.0, 1.0).is_err());
    }

    #[test]
    fn test_prism_power_round_trip() {
        let t = prism_thickness(3.0, 60.0, 1.498).unwrap();
        let prism = prism_power_from_thickness(t, 60.0, 1.498).unwrap();
        assert!(approx_eq(prism, 3.0), "prism = {}", prism);
        assert!(prism_power_from_thickness(1.0, 0.0, 1.498).is_err());
    }

    #[test]
    fn test_prism_lens_thicknesses() {
        assert!(approx_eq(plus_prism_lens_thickest_edge(1.8, 1.0), 2.8));
        assert!(approx_eq(plus_prism_lens_center_thickness(4.2, 1.0, 1.8), 6.1));
        assert!(approx_eq(minus_prism_lens_edge_thickness(3.1, 1.5, 1.8), 5.5));
    }
}
