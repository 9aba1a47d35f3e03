//! # Prism Layout Calculation
//!
//! Combines signed vertical and horizontal prism components for one eye into
//! the resultant the lab grinds: magnitude, base angle, base directions, and
//! the quadrant the base angle falls in.

use serde::{Deserialize, Serialize};

use crate::errors::OpticsResult;
use crate::formulas::prism::{
    resultant_prism, resultant_prism_angle, Eye, HorizontalBase, Quadrant, VerticalBase,
};
use crate::sign::Sign;

/// Input parameters for a prism layout calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "OD near",
///   "eye": "Od",
///   "vertical": 2.0,
///   "horizontal": 2.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismLayoutInput {
    /// User label for this calculation
    pub label: String,

    /// Eye being calculated
    pub eye: Eye,

    /// Vertical component in prism diopters, base up positive
    pub vertical: f64,

    /// Horizontal component in prism diopters, base in positive
    pub horizontal: f64,
}

impl PrismLayoutInput {
    /// Vertical base direction of the prescription, if any
    pub fn vertical_direction(&self) -> Option<VerticalBase> {
        match Sign::of(self.vertical) {
            Sign::Positive => Some(VerticalBase::Up),
            Sign::Negative => Some(VerticalBase::Down),
            Sign::Zero => None,
        }
    }

    /// Horizontal base direction of the prescription, if any
    pub fn horizontal_direction(&self) -> Option<HorizontalBase> {
        match Sign::of(self.horizontal) {
            Sign::Positive => Some(HorizontalBase::In),
            Sign::Negative => Some(HorizontalBase::Out),
            Sign::Zero => None,
        }
    }
}

/// Results from a prism layout calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrismLayoutResult {
    /// Magnitude of the resultant prism in prism diopters
    pub magnitude: f64,

    /// Base angle in degrees, counterclockwise in [0, 360)
    pub base_angle_deg: f64,

    /// Vertical base direction, absent for purely horizontal prism
    pub vertical_direction: Option<VerticalBase>,

    /// Horizontal base direction, absent for purely vertical prism
    pub horizontal_direction: Option<HorizontalBase>,

    /// Quadrant of the base angle, absent when the angle lies on an axis
    pub quadrant: Option<Quadrant>,
}

/// Calculate the resultant prism layout for one eye.
///
/// Fails when both components are zero (the base direction is undefined).
pub fn calculate(input: &PrismLayoutInput) -> OpticsResult<PrismLayoutResult> {
    let magnitude = resultant_prism(input.vertical, input.horizontal);
    let base_angle_deg = resultant_prism_angle(input.eye, input.vertical, input.horizontal)?;

    let quadrant = if base_angle_deg > 0.0 && base_angle_deg < 90.0 {
        Some(Quadrant::I)
    } else if base_angle_deg > 90.0 && base_angle_deg < 180.0 {
        Some(Quadrant::II)
    } else if base_angle_deg > 180.0 && base_angle_deg < 270.0 {
        Some(Quadrant::III)
    } else if base_angle_deg > 270.0 && base_angle_deg < 360.0 {
        Some(Quadrant::IV)
    } else {
        None
    };

    Ok(PrismLayoutResult {
        magnitude,
        base_angle_deg,
        vertical_direction: input.vertical_direction(),
        horizontal_direction: input.horizontal_direction(),
        quadrant,
    })
}
