//! # Wave and Refraction Physics
//!
//! Basic wave relations (v = fλ), refractive index from the speed of light,
//! and the inverse-square law of illumination.

use crate::errors::{OpticsError, OpticsResult};
use crate::rounding::round_to_places;

/// Speed of light in vacuum, in centimeters per second.
pub const LIGHT_SPEED: f64 = 2.9979e10;

/// Calculate the velocity of a wave.
///
/// # Formula
/// v = f * λ, rounded to 3 places
#[inline]
pub fn wave_velocity(frequency: f64, wavelength: f64) -> f64 {
    round_to_places(frequency * wavelength, 3)
}

/// Calculate the frequency of a wave.
///
/// # Formula
/// f = v / λ, rounded to 3 places. Fails at zero wavelength.
#[inline]
pub fn wave_frequency(velocity: f64, wavelength: f64) -> OpticsResult<f64> {
    if wavelength == 0.0 {
        return Err(OpticsError::domain(
            "wavelength",
            wavelength.to_string(),
            "A wave with zero wavelength has no finite frequency",
        ));
    }
    Ok(round_to_places(velocity / wavelength, 3))
}

/// Calculate the wavelength of a wave.
///
/// # Formula
/// λ = v / f, rounded to 3 places. Fails at zero frequency.
#[inline]
pub fn wave_wavelength(velocity: f64, frequency: f64) -> OpticsResult<f64> {
    if frequency == 0.0 {
        return Err(OpticsError::domain(
            "frequency",
            frequency.to_string(),
            "A wave with zero frequency has no finite wavelength",
        ));
    }
    Ok(round_to_places(velocity / frequency, 3))
}

/// Calculate relative illumination at a distance from a point source.
///
/// # Formula
/// E = 1 / d², rounded to 3 places. Fails at zero distance.
#[inline]
pub fn illumination(distance_m: f64) -> OpticsResult<f64> {
    if distance_m == 0.0 {
        return Err(OpticsError::domain(
            "distance_m",
            distance_m.to_string(),
            "Illumination is unbounded at the source",
        ));
    }
    Ok(round_to_places(1.0 / (distance_m * distance_m), 3))
}

/// Calculate the refractive index of a material from the speed of light in
/// it.
///
/// # Formula
/// n = c / v. Fails when the speed in the material is zero.
#[inline]
pub fn index_of_refraction(speed_in_material: f64) -> OpticsResult<f64> {
    if speed_in_material == 0.0 {
        return Err(OpticsError::domain(
            "speed_in_material",
            speed_in_material.to_string(),
            "Light does not propagate at zero speed",
        ));
    }
    Ok(LIGHT_SPEED / speed_in_material)
}

/// Calculate the speed of light in a material of a given index.
///
/// # Formula
/// v = c / n. Fails at zero index.
#[inline]
pub fn speed_of_light_in_material(index: f64) -> OpticsResult<f64> {
    if index == 0.0 {
        return Err(OpticsError::domain(
            "index",
            index.to_string(),
            "Index of refraction must be nonzero",
        ));
    }
    Ok(LIGHT_SPEED / index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_relations() {
        assert_eq!(wave_velocity(1.0, 1.0), 1.0);
        assert_eq!(wave_frequency(1.0, 3.0).unwrap(), 0.333);
        assert_eq!(wave_wavelength(1.0, 8.0).unwrap(), 0.125);
        assert!(wave_frequency(1.0, 0.0).is_err());
        assert!(wave_wavelength(1.0, 0.0).is_err());
    }

    #[test]
    fn test_illumination() {
        assert_eq!(illumination(16.0).unwrap(), 0.004);
        assert_eq!(illumination(1.0).unwrap(), 1.0);
        assert!(illumination(0.0).is_err());
    }

    #[test]
    fn test_index_and_speed() {
        assert_eq!(index_of_refraction(LIGHT_SPEED).unwrap(), 1.0);
        assert_eq!(speed_of_light_in_material(1.0).unwrap(), LIGHT_SPEED);
        // Higher index slows light
        let speed = speed_of_light_in_material(1.5).unwrap();
        assert!((speed - LIGHT_SPEED / 1.5).abs() < 1.0);
        assert!(index_of_refraction(0.0).is_err());
        assert!(speed_of_light_in_material(0.0).is_err());
    }
}
