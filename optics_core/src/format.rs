//! # Text Formatting
//!
//! Free functions rendering numeric results in standard prescription
//! notation: explicitly signed dioptric powers ("+2.00", "-0.50"), zero-padded
//! three-digit cylinder axes ("005", "180"), and millimeter distances.
//!
//! Pure formatting, no numeric computation.

/// Format a dioptric power with explicit sign to two decimal places.
///
/// Zero prints unsigned, matching prescription convention.
///
/// # Example
/// ```rust
/// use optics_core::format::diopter_two_places;
///
/// assert_eq!(diopter_two_places(2.0), "+2.00");
/// assert_eq!(diopter_two_places(-0.5), "-0.50");
/// assert_eq!(diopter_two_places(0.0), "0.00");
/// ```
pub fn diopter_two_places(value: f64) -> String {
    if value == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:+.2}", value)
    }
}

/// Format a dioptric power with explicit sign to three decimal places.
pub fn diopter_three_places(value: f64) -> String {
    if value == 0.0 {
        "0.000".to_string()
    } else {
        format!("{:+.3}", value)
    }
}

/// Format a cylinder axis as a zero-padded three-digit string.
///
/// # Example
/// ```rust
/// use optics_core::format::cylinder_axis;
///
/// assert_eq!(cylinder_axis(5), "005");
/// assert_eq!(cylinder_axis(180), "180");
/// ```
pub fn cylinder_axis(axis_degrees: i32) -> String {
    format!("{:03}", axis_degrees)
}

/// Append the "mm" unit suffix to a distance value.
pub fn distance_mm(distance: f64) -> String {
    format!("{}mm", distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diopter_two_places() {
        assert_eq!(diopter_two_places(2.25), "+2.25");
        assert_eq!(diopter_two_places(-10.0), "-10.00");
        assert_eq!(diopter_two_places(0.0), "0.00");
    }

    #[test]
    fn test_diopter_three_places() {
        assert_eq!(diopter_three_places(3.003), "+3.003");
        assert_eq!(diopter_three_places(-1.818), "-1.818");
        assert_eq!(diopter_three_places(0.0), "0.000");
    }

    #[test]
    fn test_cylinder_axis() {
        assert_eq!(cylinder_axis(1), "001");
        assert_eq!(cylinder_axis(90), "090");
        assert_eq!(cylinder_axis(180), "180");
    }

    #[test]
    fn test_distance_mm() {
        assert_eq!(distance_mm(62.0), "62mm");
        assert_eq!(distance_mm(14.5), "14.5mm");
    }
}
