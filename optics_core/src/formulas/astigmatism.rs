//! # Astigmatism Classification
//!
//! Classifies a spherocylinder prescription by where its two focal lines
//! fall relative to the retina. Classification depends only on the signs of
//! the sphere, the cylinder, and their sum (the power in the second
//! principal meridian).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sign::Sign;

/// Type of astigmatism of a spherocylinder lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstigmatismType {
    /// Neither sphere nor cylinder power
    NoPower,
    /// Spherical lens, no astigmatism
    NoCylinder,
    /// One meridian emmetropic, the other hyperopic
    SimpleHyperopic,
    /// One meridian emmetropic, the other myopic
    SimpleMyopic,
    /// Both meridians hyperopic
    CompoundHyperopic,
    /// Both meridians myopic
    CompoundMyopic,
    /// One meridian hyperopic, the other myopic
    Mixed,
}

impl fmt::Display for AstigmatismType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AstigmatismType::NoPower => "The lens has no power.",
            AstigmatismType::NoCylinder => "There is no cylinder, therefore no astigmatism.",
            AstigmatismType::SimpleHyperopic => "Simple Hyperopic Astigmatism",
            AstigmatismType::SimpleMyopic => "Simple Myopic Astigmatism",
            AstigmatismType::CompoundHyperopic => "Compound Hyperopic Astigmatism",
            AstigmatismType::CompoundMyopic => "Compound Myopic Astigmatism",
            AstigmatismType::Mixed => "Mixed Astigmatism",
        };
        write!(f, "{}", label)
    }
}

/// Classify the astigmatism of a prescription.
///
/// The two principal meridian powers are `sphere` and `sphere + cylinder`;
/// their signs decide the classification.
///
/// # Example
/// ```rust
/// use optics_core::formulas::astigmatism::{astigmatism_type, AstigmatismType};
///
/// assert_eq!(astigmatism_type(0.0, 5.0), AstigmatismType::SimpleHyperopic);
/// assert_eq!(astigmatism_type(5.0, -6.0), AstigmatismType::Mixed);
/// ```
pub fn astigmatism_type(sphere: f64, cylinder: f64) -> AstigmatismType {
    let second_meridian = sphere + cylinder;
    match (Sign::of(sphere), Sign::of(cylinder)) {
        (Sign::Zero, Sign::Zero) => AstigmatismType::NoPower,
        (_, Sign::Zero) => AstigmatismType::NoCylinder,
        (Sign::Zero, Sign::Positive) => AstigmatismType::SimpleHyperopic,
        (Sign::Zero, Sign::Negative) => AstigmatismType::SimpleMyopic,
        (Sign::Positive, _) => match Sign::of(second_meridian) {
            Sign::Zero => AstigmatismType::SimpleHyperopic,
            Sign::Positive => AstigmatismType::CompoundHyperopic,
            Sign::Negative => AstigmatismType::Mixed,
        },
        (Sign::Negative, _) => match Sign::of(second_meridian) {
            Sign::Zero => AstigmatismType::SimpleMyopic,
            Sign::Negative => AstigmatismType::CompoundMyopic,
            Sign::Positive => AstigmatismType::Mixed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_power_and_no_cylinder() {
        assert_eq!(astigmatism_type(0.0, 0.0), AstigmatismType::NoPower);
        assert_eq!(astigmatism_type(5.0, 0.0), AstigmatismType::NoCylinder);
        assert_eq!(astigmatism_type(-2.0, 0.0), AstigmatismType::NoCylinder);
    }

    #[test]
    fn test_simple_astigmatism() {
        assert_eq!(astigmatism_type(0.0, 5.0), AstigmatismType::SimpleHyperopic);
        assert_eq!(astigmatism_type(5.0, -5.0), AstigmatismType::SimpleHyperopic);
        assert_eq!(astigmatism_type(0.0, -5.0), AstigmatismType::SimpleMyopic);
        assert_eq!(astigmatism_type(-5.0, 5.0), AstigmatismType::SimpleMyopic);
    }

    #[test]
    fn test_compound_astigmatism() {
        assert_eq!(astigmatism_type(5.0, -4.0), AstigmatismType::CompoundHyperopic);
        assert_eq!(astigmatism_type(-5.0, -6.0), AstigmatismType::CompoundMyopic);
    }

    #[test]
    fn test_mixed_astigmatism() {
        assert_eq!(astigmatism_type(5.0, -6.0), AstigmatismType::Mixed);
        assert_eq!(astigmatism_type(-5.0, 6.0), AstigmatismType::Mixed);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(astigmatism_type(0.0, 0.0).to_string(), "The lens has no power.");
        assert_eq!(
            astigmatism_type(5.0, 0.0).to_string(),
            "There is no cylinder, therefore no astigmatism."
        );
        assert_eq!(
            astigmatism_type(0.0, 5.0).to_string(),
            "Simple Hyperopic Astigmatism"
        );
        assert_eq!(astigmatism_type(5.0, -6.0).to_string(), "Mixed Astigmatism");
    }
}
