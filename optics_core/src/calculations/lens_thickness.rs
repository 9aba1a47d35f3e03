//! # Finished Lens Thickness Calculation
//!
//! Computes the center and edge thickness of a finished spherical lens from
//! its surface powers, material, and blank diameter. Exact sagittal depths
//! are used for both surfaces; the plus/minus branch decides which of the
//! center and edge carries the minimum thickness.
//!
//! ## Assumptions
//!
//! - Spherical surfaces, uncut round blank
//! - Thickness measured on the optical axis
//! - Plus lenses are edged to a minimum edge thickness, minus lenses are
//!   surfaced to a minimum center thickness
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use optics_core::calculations::lens_thickness::{calculate, LensThicknessInput};
//!
//! let input = LensThicknessInput {
//!     label: "OD".to_string(),
//!     front_power: 6.25,
//!     back_power: -4.25,
//!     index: 1.498,
//!     diameter_mm: 60.0,
//!     minimum_thickness_mm: 1.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.center_thickness_mm > result.edge_thickness_mm);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{OpticsError, OpticsResult};
use crate::formulas::power::nominal_power;
use crate::formulas::thickness::{center_thickness, edge_thickness, sagittal_depth};
use crate::sign::Sign;

/// Input parameters for a finished lens thickness calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "OD",
///   "front_power": 6.25,
///   "back_power": -4.25,
///   "index": 1.498,
///   "diameter_mm": 60.0,
///   "minimum_thickness_mm": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensThicknessInput {
    /// User label for this lens (e.g., "OD", "OS")
    pub label: String,

    /// Front surface power in diopters, signed
    pub front_power: f64,

    /// Back surface power in diopters, signed
    pub back_power: f64,

    /// Index of refraction of the lens material
    pub index: f64,

    /// Blank diameter in millimeters
    pub diameter_mm: f64,

    /// Minimum thickness in millimeters: edge for a plus lens, center for a
    /// minus lens
    pub minimum_thickness_mm: f64,
}

impl LensThicknessInput {
    /// Validate input parameters.
    pub fn validate(&self) -> OpticsResult<()> {
        if self.index <= 1.0 {
            return Err(OpticsError::invalid_input(
                "index",
                self.index.to_string(),
                "Index of refraction must exceed 1",
            ));
        }
        if self.diameter_mm <= 0.0 {
            return Err(OpticsError::invalid_input(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Blank diameter must be positive",
            ));
        }
        if self.minimum_thickness_mm < 0.0 {
            return Err(OpticsError::invalid_input(
                "minimum_thickness_mm",
                self.minimum_thickness_mm.to_string(),
                "Minimum thickness cannot be negative",
            ));
        }
        Ok(())
    }

    /// Nominal power of the finished lens
    pub fn nominal_power(&self) -> f64 {
        nominal_power(self.front_power, self.back_power)
    }

    /// Exact sag of one surface of this lens, by its unsigned power.
    /// A plano surface has zero sag.
    fn surface_sag(&self, surface_power: f64) -> OpticsResult<f64> {
        if surface_power == 0.0 {
            return Ok(0.0);
        }
        let radius_mm = (self.index - 1.0) * 1000.0 / surface_power.abs();
        sagittal_depth(radius_mm, self.diameter_mm)
    }
}

/// Results from a finished lens thickness calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "nominal_power": 2.0,
///   "front_sag_mm": 5.86,
///   "back_sag_mm": 3.91,
///   "center_thickness_mm": 2.96,
///   "edge_thickness_mm": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensThicknessResult {
    /// Nominal power of the lens in diopters
    pub nominal_power: f64,

    /// Sagittal depth of the front surface in millimeters
    pub front_sag_mm: f64,

    /// Sagittal depth of the back surface in millimeters
    pub back_sag_mm: f64,

    /// Thickness at the optical center in millimeters
    pub center_thickness_mm: f64,

    /// Thickness at the edge in millimeters
    pub edge_thickness_mm: f64,
}

impl LensThicknessResult {
    /// Difference between center and edge thickness, positive for a plus
    /// lens.
    pub fn thickness_difference_mm(&self) -> f64 {
        self.center_thickness_mm - self.edge_thickness_mm
    }
}

/// Calculate center and edge thickness for a finished lens.
///
/// # Returns
///
/// * `Ok(LensThicknessResult)` - Thickness profile of the lens
/// * `Err(OpticsError)` - Invalid input, or the blank diameter does not fit
///   on one of the surface curves
pub fn calculate(input: &LensThicknessInput) -> OpticsResult<LensThicknessResult> {
    input.validate()?;

    let front_sag_mm = input.surface_sag(input.front_power)?;
    let back_sag_mm = input.surface_sag(input.back_power)?;
    let nominal = input.nominal_power();

    let (center, edge) = match Sign::of(nominal) {
        Sign::Positive => {
            let edge = input.minimum_thickness_mm;
            (center_thickness(front_sag_mm, back_sag_mm, edge), edge)
        }
        Sign::Negative => {
            let center = input.minimum_thickness_mm;
            (center, edge_thickness(front_sag_mm, back_sag_mm, center))
        }
        Sign::Zero => (input.minimum_thickness_mm, input.minimum_thickness_mm),
    };

    Ok(LensThicknessResult {
        nominal_power: nominal,
        front_sag_mm,
        back_sag_mm,
        center_thickness_mm: center,
        edge_thickness_mm: edge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_lens() -> LensThicknessInput {
        LensThicknessInput {
            label: "OD".to_string(),
            front_power: 6.25,
            back_power: -4.25,
            index: 1.498,
            diameter_mm: 60.0,
            minimum_thickness_mm: 1.0,
        }
    }

    fn minus_lens() -> LensThicknessInput {
        LensThicknessInput {
            label: "OS".to_string(),
            front_power: 2.0,
            back_power: -6.0,
            index: 1.498,
            diameter_mm: 60.0,
            minimum_thickness_mm: 1.5,
        }
    }

    #[test]
    fn test_plus_lens_center_governs() {
        let result = calculate(&plus_lens()).unwrap();
        assert_eq!(result.nominal_power, 2.0);
        assert_eq!(result.edge_thickness_mm, 1.0);
        assert!(result.center_thickness_mm > result.edge_thickness_mm);
        assert!(result.thickness_difference_mm() > 0.0);
    }

    #[test]
    fn test_minus_lens_edge_governs() {
        let result = calculate(&minus_lens()).unwrap();
        assert_eq!(result.nominal_power, -4.0);
        assert_eq!(result.center_thickness_mm, 1.5);
        assert!(result.edge_thickness_mm > result.center_thickness_mm);
        assert!(result.thickness_difference_mm() < 0.0);
    }

    #[test]
    fn test_plano_lens_is_uniform() {
        let mut input = plus_lens();
        input.front_power = 4.0;
        input.back_power = -4.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.center_thickness_mm, result.edge_thickness_mm);
    }

    #[test]
    fn test_sag_magnitudes() {
        // Front: R = 498/6.25 = 79.68 mm over a 60 mm chord
        let result = calculate(&plus_lens()).unwrap();
        assert!((result.front_sag_mm - 5.863).abs() < 0.01);
        assert!((result.back_sag_mm - 3.905).abs() < 0.01);
    }

    #[test]
    fn test_blank_too_wide_fails() {
        let mut input = plus_lens();
        input.front_power = 20.0; // R = 24.9 mm, smaller than the semi-diameter
        let result = calculate(&input);
        assert!(matches!(result, Err(OpticsError::Domain { .. })));
    }

    #[test]
    fn test_invalid_index() {
        let mut input = plus_lens();
        input.index = 1.0;
        assert!(matches!(
            calculate(&input),
            Err(OpticsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = plus_lens();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: LensThicknessInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.front_power, roundtrip.front_power);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("center_thickness_mm"));
        let roundtrip: LensThicknessResult = serde_json::from_str(&json).unwrap();
        assert!((result.center_thickness_mm - roundtrip.center_thickness_mm).abs() < 1e-12);
    }
}
