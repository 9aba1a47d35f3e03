//! # Spectacle Magnification
//!
//! Shape- and power-factor magnification of a spectacle lens.
//!
//! ## References
//!
//! - Stoner, Perkins & Ferguson, Optical Formulas Tutorial, 2nd Edition

use crate::errors::{OpticsError, OpticsResult};
use crate::rounding::round_to_places;

/// Anatomical offset from the corneal vertex to the eye's entrance pupil,
/// added to the fitted vertex distance in the power factor.
const ENTRANCE_PUPIL_OFFSET_M: f64 = 0.003;

/// Calculate the total spectacle magnification of a lens.
///
/// # Formula
/// M = shape * power, where
/// shape = 1 / (1 - (t/n) * F1) and
/// power = 1 / (1 - (v + 0.003) * D)
///
/// # Arguments
/// * `front_base_curve` - Front surface power F1 in diopters
/// * `actual_power` - Actual lens power D in diopters
/// * `index` - Index of refraction
/// * `thickness_mm` - Center thickness in millimeters
/// * `vertex_mm` - Fitted vertex distance in millimeters
///
/// # Returns
/// Magnification ratio, rounded to 3 places. Fails when either factor's
/// denominator vanishes.
///
/// # Example
/// ```rust
/// use optics_core::formulas::magnification::spectacle_magnification;
///
/// let mag = spectacle_magnification(6.25, 1.50, 1.498, 3.0, 12.0).unwrap();
/// assert_eq!(mag, 1.036);
/// ```
pub fn spectacle_magnification(
    front_base_curve: f64,
    actual_power: f64,
    index: f64,
    thickness_mm: f64,
    vertex_mm: f64,
) -> OpticsResult<f64> {
    let thickness_m = thickness_mm / 1000.0;
    let vertex_m = vertex_mm / 1000.0;

    let shape_denominator = 1.0 - (thickness_m / index) * front_base_curve;
    if shape_denominator == 0.0 {
        return Err(OpticsError::domain(
            "front_base_curve",
            front_base_curve.to_string(),
            "Shape factor denominator vanishes",
        ));
    }

    let vertex_adjusted = vertex_m + ENTRANCE_PUPIL_OFFSET_M;
    let power_denominator = 1.0 - vertex_adjusted * actual_power;
    if power_denominator == 0.0 {
        return Err(OpticsError::domain(
            "actual_power",
            actual_power.to_string(),
            "Power factor denominator vanishes",
        ));
    }

    Ok(round_to_places(
        (1.0 / shape_denominator) * (1.0 / power_denominator),
        3,
    ))
}

/// Express a magnification ratio as a percentage change.
///
/// # Formula
/// % = (M - 1) * 100, rounded to 2 places
#[inline]
pub fn magnification_percent(spectacle_magnification: f64) -> f64 {
    round_to_places((spectacle_magnification - 1.0) * 100.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectacle_magnification() {
        // Optical Formulas handbook worked examples
        assert_eq!(
            spectacle_magnification(6.25, 1.50, 1.498, 3.0, 12.0).unwrap(),
            1.036
        );
        assert_eq!(
            spectacle_magnification(9.25, 4.50, 1.498, 5.0, 12.0).unwrap(),
            1.107
        );
    }

    #[test]
    fn test_plano_thin_lens_has_unit_magnification() {
        assert_eq!(
            spectacle_magnification(0.0, 0.0, 1.5, 0.0, 12.0).unwrap(),
            1.0
        );
    }

    #[test]
    fn test_magnification_percent() {
        assert_eq!(magnification_percent(1.036), 3.6);
        assert_eq!(magnification_percent(1.107), 10.7);
        assert_eq!(magnification_percent(1.0), 0.0);
    }
}
