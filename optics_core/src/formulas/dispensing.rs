//! # Dispensing Measurements
//!
//! Frame-and-fitting arithmetic: decentration from the frame's boxing
//! measurements, bifocal segment drop, and minimum blank size.
//!
//! ## Notation
//!
//! - `A` = Horizontal boxing dimension of the lens shape in millimeters
//! - `B` = Vertical boxing dimension in millimeters
//! - `DBL` = Distance between lenses (bridge) in millimeters
//! - `PD` = Pupillary distance in millimeters
//! - `ED` = Effective diameter of the lens shape in millimeters

use crate::rounding::round_to_places;

/// Total binocular decentration of a pair of lenses in a frame.
///
/// # Formula
/// dec = (A + DBL) - PD, rounded to 1 place
#[inline]
pub fn binocular_decentration(a_mm: f64, dbl_mm: f64, binocular_pd_mm: f64) -> f64 {
    round_to_places((a_mm + dbl_mm) - binocular_pd_mm, 1)
}

/// Decentration of a single lens in a frame.
///
/// # Formula
/// dec = (A + DBL) / 2 - monocular PD, rounded to 2 places
#[inline]
pub fn monocular_decentration(a_mm: f64, dbl_mm: f64, mono_pd_mm: f64) -> f64 {
    round_to_places((a_mm + dbl_mm) / 2.0 - mono_pd_mm, 2)
}

/// Drop of a bifocal segment below the horizontal midline.
///
/// # Formula
/// drop = segment height - B / 2, rounded to 2 places
#[inline]
pub fn seg_drop(segment_height_mm: f64, b_mm: f64) -> f64 {
    round_to_places(segment_height_mm - b_mm / 2.0, 2)
}

/// Minimum blank size needed to cut a decentered lens.
///
/// # Formula
/// MBS = ED + 2 * decentration, plus 2 mm when compensating for edge
/// chipping; rounded to 2 places
#[inline]
pub fn minimum_blank_size(
    effective_diameter_mm: f64,
    mono_decentration_mm: f64,
    chip_factor: bool,
) -> f64 {
    let base = effective_diameter_mm + 2.0 * mono_decentration_mm;
    if chip_factor {
        round_to_places(base + 2.0, 2)
    } else {
        round_to_places(base, 2)
    }
}
