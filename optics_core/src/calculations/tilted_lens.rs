//! # Tilted Lens Calculation
//!
//! Applies Martin's tilt formula to a spherocylinder prescription: the
//! effective sphere power of the tilted lens, the cylinder the tilt induces,
//! and the combined cylinder on the axis of tilt.
//!
//! ## Assumptions
//!
//! - The prescription is transposed so the cylinder axis matches the axis of
//!   tilt (pantoscopic tilt: axis 180)
//! - The induced cylinder falls on the axis of tilt and adds to the original

use serde::{Deserialize, Serialize};

use crate::errors::{OpticsError, OpticsResult};
use crate::formulas::tilt::{induced_cylinder, induced_cylinder_combined, martin_tilt_sphere};

/// Input parameters for a tilted lens calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "OD pantoscopic",
///   "sphere": -4.0,
///   "cylinder": -1.25,
///   "tilt_deg": 20.0,
///   "index": 1.498
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiltedLensInput {
    /// User label for this calculation
    pub label: String,

    /// Sphere power in diopters, transposed to the axis of tilt
    pub sphere: f64,

    /// Cylinder power in diopters on the axis of tilt
    pub cylinder: f64,

    /// Tilt angle in degrees
    pub tilt_deg: f64,

    /// Index of refraction
    pub index: f64,
}

impl TiltedLensInput {
    /// Validate input parameters.
    pub fn validate(&self) -> OpticsResult<()> {
        if self.index <= 1.0 {
            return Err(OpticsError::invalid_input(
                "index",
                self.index.to_string(),
                "Index of refraction must exceed 1",
            ));
        }
        if self.tilt_deg.abs() >= 90.0 {
            return Err(OpticsError::invalid_input(
                "tilt_deg",
                self.tilt_deg.to_string(),
                "Tilt must be less than 90 degrees",
            ));
        }
        Ok(())
    }
}

/// Results from a tilted lens calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiltedLensResult {
    /// Effective sphere power of the tilted lens in diopters
    pub effective_sphere: f64,

    /// Cylinder induced by the tilt alone in diopters
    pub induced_cylinder: f64,

    /// Induced cylinder combined with the original cylinder in diopters
    pub combined_cylinder: f64,
}

impl TiltedLensResult {
    /// Power change in the sphere meridian caused by the tilt
    pub fn sphere_change(&self, original_sphere: f64) -> f64 {
        self.effective_sphere - original_sphere
    }
}

/// Calculate the effective power of a tilted lens.
///
/// The effective sphere from Martin's formula feeds the induced-cylinder
/// formula; the original cylinder is then added on the same axis.
pub fn calculate(input: &TiltedLensInput) -> OpticsResult<TiltedLensResult> {
    input.validate()?;

    let effective_sphere = martin_tilt_sphere(input.sphere, input.tilt_deg, input.index);
    let induced = induced_cylinder(effective_sphere, input.tilt_deg);
    let combined = induced_cylinder_combined(effective_sphere, input.tilt_deg, input.cylinder);

    Ok(TiltedLensResult {
        effective_sphere,
        induced_cylinder: induced,
        combined_cylinder: combined,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> TiltedLensInput {
        TiltedLensInput {
            label: "OD pantoscopic".to_string(),
            sphere: -4.0,
            cylinder: -1.25,
            tilt_deg: 20.0,
            index: 1.498,
        }
    }

    #[test]
    fn test_tilted_lens() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.effective_sphere - -4.1562).abs() < 0.001);
        assert!((result.induced_cylinder - -0.5506).abs() < 0.001);
        assert!((result.combined_cylinder - -1.8006).abs() < 0.001);
    }

    #[test]
    fn test_no_tilt_changes_nothing() {
        let mut input = test_input();
        input.tilt_deg = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.effective_sphere, -4.0);
        assert_eq!(result.induced_cylinder, 0.0);
        assert_eq!(result.combined_cylinder, -1.25);
    }

    #[test]
    fn test_minus_lens_gains_minus_power() {
        let result = calculate(&test_input()).unwrap();
        assert!(result.sphere_change(-4.0) < 0.0);
    }

    #[test]
    fn test_extreme_tilt_rejected() {
        let mut input = test_input();
        input.tilt_deg = 90.0;
        assert!(matches!(
            calculate(&input),
            Err(OpticsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: TiltedLensInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.tilt_deg, roundtrip.tilt_deg);
    }
}
