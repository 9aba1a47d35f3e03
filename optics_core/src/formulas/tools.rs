//! # Lab Tool Selection
//!
//! Surfacing tools are marked for a 1.53 reference index; these formulas
//! convert between the refractive power a lens needs and the tool curve that
//! grinds it, snapping to the quarter-diopter steps tools come in.

use crate::errors::{OpticsError, OpticsResult};
use crate::rounding::round_to_quarter;

/// Reference index the tool markings assume.
const TOOL_REFERENCE_INDEX: f64 = 1.53;

/// Select the backside tool curve producing a needed refractive power.
///
/// # Formula
/// T = 0.53 / (n - 1) * F, snapped to the nearest quarter diopter
///
/// # Returns
/// Tool curve in diopters. Fails at `index` = 1 (no tool can produce power
/// in a non-refracting material).
#[inline]
pub fn tool_selector(refractive_power: f64, index: f64) -> OpticsResult<f64> {
    if index == 1.0 {
        return Err(OpticsError::domain(
            "index",
            index.to_string(),
            "A material with index 1 takes no refractive power from any tool",
        ));
    }
    let tool_power = (TOOL_REFERENCE_INDEX - 1.0) / (index - 1.0) * refractive_power;
    Ok(round_to_quarter(tool_power))
}

/// Calculate the actual refractive power a marked tool grinds into a lens.
///
/// Algebraic inverse of [`tool_selector`], up to the quarter-diopter snap.
///
/// # Formula
/// F = (n - 1) / 0.53 * T, snapped to the nearest quarter diopter
#[inline]
pub fn refractive_power(tool_power: f64, index: f64) -> f64 {
    let power = (index - 1.0) / (TOOL_REFERENCE_INDEX - 1.0) * tool_power;
    round_to_quarter(power)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_selector() {
        // At the reference index the tool matches the power exactly
        assert_eq!(tool_selector(6.0, 1.53).unwrap(), 6.0);
        // CR-39 needs a steeper tool
        assert_eq!(tool_selector(4.25, 1.498).unwrap(), 4.5);
        assert!(tool_selector(4.25, 1.0).is_err());
    }

    #[test]
    fn test_refractive_power() {
        assert_eq!(refractive_power(6.0, 1.53), 6.0);
        assert_eq!(refractive_power(4.5, 1.498), 4.25);
    }

    #[test]
    fn test_quarter_diopter_round_trip() {
        // tool_selector(refractive_power(t)) recovers t within a quarter step
        for tool in [2.0, 4.5, -3.25, 7.75] {
            for index in [1.498, 1.523, 1.6] {
                let power = refractive_power(tool, index);
                let recovered = tool_selector(power, index).unwrap();
                assert!(
                    (recovered - tool).abs() <= 0.25,
                    "tool {} index {} recovered {}",
                    tool,
                    index,
                    recovered
                );
            }
        }
    }
}
