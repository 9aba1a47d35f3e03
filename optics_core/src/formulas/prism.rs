//! # Prism Formulas
//!
//! Prismatic deviation, Prentice's law, resolution of prism into components,
//! and the quadrant/eye conventions for resultant prism base angles.
//!
//! ## Notation
//!
//! - `Δ` = Prism diopters (centimeters of displacement per meter of distance)
//! - `a` = Apical angle of the prism in degrees
//! - `n` = Index of refraction
//! - `d` = Deviation angle in degrees
//!
//! ## Sign Conventions
//!
//! Vertical prism components are positive base up and negative base down.
//! Horizontal components are positive base in and negative base out; because
//! "in" and "out" flip nasally, the two eyes use mirrored horizontal signs
//! when converting components to a base angle (bi-nasal form).
//!
//! ## References
//!
//! - Brooks & Borish, System for Ophthalmic Dispensing, 3rd Edition
//! - Stoner, Perkins & Ferguson, Optical Formulas Tutorial, 2nd Edition

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{OpticsError, OpticsResult};
use crate::rounding::round_to_places;

// =============================================================================
// DEVIATION AND DISPLACEMENT
// =============================================================================

/// Calculate the angle between the emerging ray and the original ray path.
///
/// # Formula
/// d = a * (n - 1), rounded to 1 place
#[inline]
pub fn prism_deviation(apical_angle_deg: f64, index: f64) -> f64 {
    round_to_places(apical_angle_deg * (index - 1.0), 1)
}

/// Calculate the apical angle needed to deviate a ray by a given amount.
///
/// Approximate inverse of [`prism_deviation`].
///
/// # Formula
/// a = d / (n - 1), rounded to 1 place
///
/// # Returns
/// Apical angle in degrees. Fails at `index` = 1 (no refraction, no
/// deviation is possible).
#[inline]
pub fn apical_angle(deviation_deg: f64, index: f64) -> OpticsResult<f64> {
    if index == 1.0 {
        return Err(OpticsError::domain(
            "index",
            index.to_string(),
            "A material with index 1 deviates no light",
        ));
    }
    Ok(round_to_places(deviation_deg / (index - 1.0), 1))
}

/// Calculate prism power from ray displacement.
///
/// # Formula
/// Δ = displacement / distance, rounded to 2 places
///
/// # Arguments
/// * `displacement_cm` - Displacement of the ray in centimeters
/// * `distance_m` - Distance from the prism in meters
///
/// # Returns
/// Prism power in prism diopters. Fails when `distance_m` is zero.
#[inline]
pub fn prism_diopter(displacement_cm: f64, distance_m: f64) -> OpticsResult<f64> {
    if distance_m == 0.0 {
        return Err(OpticsError::domain(
            "distance_m",
            distance_m.to_string(),
            "Displacement per meter is undefined at zero distance",
        ));
    }
    Ok(round_to_places(displacement_cm / distance_m, 2))
}

/// Calculate the displacement of a ray at a given distance from a prism.
///
/// # Formula
/// displacement = Δ * distance, unrounded, in centimeters
#[inline]
pub fn prism_displacement(prism_diopters: f64, distance_m: f64) -> f64 {
    prism_diopters * distance_m
}

/// Calculate the distance at which a prism produces a given displacement.
///
/// # Formula
/// distance = displacement / Δ, unrounded, in meters
///
/// # Returns
/// Distance in meters. Fails when `prism_diopters` is zero.
#[inline]
pub fn prism_distance(prism_diopters: f64, displacement_cm: f64) -> OpticsResult<f64> {
    if prism_diopters == 0.0 {
        return Err(OpticsError::domain(
            "prism_diopters",
            prism_diopters.to_string(),
            "A zero-power prism displaces at no finite distance",
        ));
    }
    Ok(displacement_cm / prism_diopters)
}

/// Calculate prism power from the deviation angle via the centrad relation.
///
/// # Formula
/// Δ = 100 * tan(d), unrounded
#[inline]
pub fn prism_centrad(deviation_deg: f64) -> f64 {
    100.0 * deviation_deg.to_radians().tan()
}

/// Approximate prism power from apical angle and index.
///
/// Two-stage approximation: the deviation-angle formula feeds the centrad
/// tangent step.
///
/// # Formula
/// Δ ≈ 100 * tan(a * (n - 1)), rounded to 1 place
#[inline]
pub fn prism_diopter_approximation(apical_angle_deg: f64, index: f64) -> f64 {
    let deviation_deg = apical_angle_deg * (index - 1.0);
    round_to_places(100.0 * deviation_deg.to_radians().tan(), 1)
}

// =============================================================================
// PRENTICE'S LAW
// =============================================================================

/// Prismatic effect of decentration, distance in centimeters.
///
/// # Formula
/// Δ = c * D, unrounded
#[inline]
pub fn prentices_law_centimeters(lens_power: f64, distance_cm: f64) -> f64 {
    distance_cm * lens_power
}

/// Prismatic effect of decentration, distance in millimeters.
///
/// # Formula
/// Δ = mm * D / 10, unrounded
#[inline]
pub fn prentices_law_millimeters(lens_power: f64, distance_mm: f64) -> f64 {
    distance_mm * lens_power / 10.0
}

// =============================================================================
// COMPONENT RESOLUTION
// =============================================================================

/// Calculate the magnitude of the resultant of two orthogonal prism
/// components.
///
/// # Formula
/// Δ = sqrt(h² + v²), unrounded
#[inline]
pub fn resultant_prism(vertical: f64, horizontal: f64) -> f64 {
    (horizontal.powi(2) + vertical.powi(2)).sqrt()
}

/// Calculate the effective decentration of a spherocylinder lens along its
/// cylinder axis.
///
/// # Formula
/// c = h * sin(θ) + v * cos(θ), unrounded, in centimeters
#[inline]
pub fn effective_decentration(
    horizontal_cm: f64,
    vertical_cm: f64,
    cylinder_axis_deg: f64,
) -> f64 {
    let axis = cylinder_axis_deg.to_radians();
    horizontal_cm * axis.sin() + vertical_cm * axis.cos()
}

/// Resolve the horizontal component of a prism at a given base angle.
///
/// # Formula
/// h = Δ * cos(θ), unrounded
#[inline]
pub fn resolving_prism_horizontal(prism_power: f64, angle_deg: f64) -> f64 {
    prism_power * angle_deg.to_radians().cos()
}

/// Resolve the vertical component of a prism at a given base angle.
///
/// # Formula
/// v = Δ * sin(θ), unrounded
#[inline]
pub fn resolving_prism_vertical(prism_power: f64, angle_deg: f64) -> f64 {
    prism_power * angle_deg.to_radians().sin()
}

// =============================================================================
// BASE ANGLE AND EYE RESOLUTION
// =============================================================================

/// Eye being calculated, in ophthalmic notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eye {
    /// Right eye (oculus dexter)
    Od,
    /// Left eye (oculus sinister)
    Os,
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eye::Od => write!(f, "Right Eye (OD)"),
            Eye::Os => write!(f, "Left Eye (OS)"),
        }
    }
}

/// Quadrant of the prism base angle, counterclockwise from 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    I,
    II,
    III,
    IV,
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quadrant::I => write!(f, "Quadrant I"),
            Quadrant::II => write!(f, "Quadrant II"),
            Quadrant::III => write!(f, "Quadrant III"),
            Quadrant::IV => write!(f, "Quadrant IV"),
        }
    }
}

/// Vertical base direction of a prescribed prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalBase {
    Up,
    Down,
}

impl fmt::Display for VerticalBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerticalBase::Up => write!(f, "Base Up"),
            VerticalBase::Down => write!(f, "Base Down"),
        }
    }
}

/// Horizontal base direction of a prescribed prism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalBase {
    In,
    Out,
}

impl fmt::Display for HorizontalBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizontalBase::In => write!(f, "Base In"),
            HorizontalBase::Out => write!(f, "Base Out"),
        }
    }
}

/// Eye and base-angle quadrant resolved from a prism prescription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EyeQuadrant {
    pub eye: Eye,
    pub quadrant: Quadrant,
}

impl fmt::Display for EyeQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.eye, self.quadrant)
    }
}

/// Calculate the base angle of a resultant prism for one eye.
///
/// The angle is measured counterclockwise in [0, 360). The horizontal sign
/// convention is mirrored between the eyes (bi-nasal form), so the same
/// component pair lands in mirrored quadrants for OD and OS.
///
/// # Arguments
/// * `eye` - Eye being calculated
/// * `vertical` - Vertical component in prism diopters, base up positive
/// * `horizontal` - Horizontal component in prism diopters, base in positive
///
/// # Returns
/// Base angle in degrees in [0, 360). Axis-aligned prisms resolve to
/// 0/90/180/270 exactly; both components zero is an undefined direction and
/// fails rather than returning NaN.
pub fn resultant_prism_angle(eye: Eye, vertical: f64, horizontal: f64) -> OpticsResult<f64> {
    if horizontal == 0.0 && vertical == 0.0 {
        return Err(OpticsError::undefined(
            "resultant_prism_angle",
            "A zero prism has no base direction",
        ));
    }

    // Nasal mirror: base-in points toward 0 degrees for OD, 180 for OS.
    let nasal_horizontal = match eye {
        Eye::Od => horizontal,
        Eye::Os => -horizontal,
    };

    if horizontal == 0.0 {
        return Ok(if vertical > 0.0 { 90.0 } else { 270.0 });
    }
    if vertical == 0.0 {
        return Ok(if nasal_horizontal > 0.0 { 0.0 } else { 180.0 });
    }

    let base_angle = (vertical / horizontal).atan().to_degrees().abs();

    let angle = if nasal_horizontal > 0.0 && vertical > 0.0 {
        base_angle
    } else if nasal_horizontal < 0.0 && vertical > 0.0 {
        180.0 - base_angle
    } else if nasal_horizontal < 0.0 && vertical < 0.0 {
        180.0 + base_angle
    } else {
        360.0 - base_angle
    };
    Ok(angle)
}

/// Base angle of a resultant prism for the right eye (OD).
///
/// See [`resultant_prism_angle`] for conventions.
#[inline]
pub fn resultant_prism_angle_right_eye(vertical: f64, horizontal: f64) -> OpticsResult<f64> {
    resultant_prism_angle(Eye::Od, vertical, horizontal)
}

/// Base angle of a resultant prism for the left eye (OS).
///
/// See [`resultant_prism_angle`] for conventions.
#[inline]
pub fn resultant_prism_angle_left_eye(vertical: f64, horizontal: f64) -> OpticsResult<f64> {
    resultant_prism_angle(Eye::Os, vertical, horizontal)
}

/// Determine which eye and quadrant a prism prescription belongs to.
///
/// Fixed decision table keyed on the base directions and the angle range.
/// Base angles exactly on a quadrant boundary (0/90/180/270) or direction
/// combinations inconsistent with the angle have no table entry and fail.
///
/// # Example
/// ```rust
/// use optics_core::formulas::prism::{resolve_eye, Eye, HorizontalBase, Quadrant, VerticalBase};
///
/// let resolved = resolve_eye(45.0, VerticalBase::Up, HorizontalBase::In).unwrap();
/// assert_eq!(resolved.eye, Eye::Od);
/// assert_eq!(resolved.quadrant, Quadrant::I);
/// assert_eq!(resolved.to_string(), "Right Eye (OD) Quadrant I");
/// ```
pub fn resolve_eye(
    prism_base_angle_deg: f64,
    vertical: VerticalBase,
    horizontal: HorizontalBase,
) -> OpticsResult<EyeQuadrant> {
    let angle = prism_base_angle_deg;
    let entry = match (vertical, horizontal) {
        (VerticalBase::Up, HorizontalBase::In) if angle > 0.0 && angle < 90.0 => {
            Some((Eye::Od, Quadrant::I))
        }
        (VerticalBase::Up, HorizontalBase::In) if angle > 90.0 && angle < 180.0 => {
            Some((Eye::Os, Quadrant::II))
        }
        (VerticalBase::Up, HorizontalBase::Out) if angle > 90.0 && angle < 180.0 => {
            Some((Eye::Od, Quadrant::II))
        }
        (VerticalBase::Up, HorizontalBase::Out) if angle > 0.0 && angle < 90.0 => {
            Some((Eye::Os, Quadrant::I))
        }
        (VerticalBase::Down, HorizontalBase::Out) if angle > 180.0 && angle < 270.0 => {
            Some((Eye::Od, Quadrant::III))
        }
        (VerticalBase::Down, HorizontalBase::Out) if angle > 270.0 && angle < 360.0 => {
            Some((Eye::Os, Quadrant::IV))
        }
        (VerticalBase::Down, HorizontalBase::In) if angle > 270.0 && angle < 360.0 => {
            Some((Eye::Od, Quadrant::IV))
        }
        (VerticalBase::Down, HorizontalBase::In) if angle > 180.0 && angle < 270.0 => {
            Some((Eye::Os, Quadrant::III))
        }
        _ => None,
    };

    entry.map(|(eye, quadrant)| EyeQuadrant { eye, quadrant }).ok_or_else(|| {
        OpticsError::undefined(
            "resolve_eye",
            format!(
                "No quadrant for {} / {} at {} degrees",
                vertical, horizontal, prism_base_angle_deg
            ),
        )
    })
}
