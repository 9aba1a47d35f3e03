//! # Composite Calculations
//!
//! Multi-step calculations built on the formula catalogue. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, OpticsError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`lens_thickness`] - Center/edge thickness of a finished lens
//! - [`tilted_lens`] - Martin's tilt effective power and induced cylinder
//! - [`prism_layout`] - Resultant prism magnitude and base angle per eye

pub mod lens_thickness;
pub mod prism_layout;
pub mod tilted_lens;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use lens_thickness::{LensThicknessInput, LensThicknessResult};
pub use prism_layout::{PrismLayoutInput, PrismLayoutResult};
pub use tilted_lens::{TiltedLensInput, TiltedLensResult};

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Finished lens thickness calculation
    LensThickness(LensThicknessInput),
    /// Tilted lens effective power calculation
    TiltedLens(TiltedLensInput),
    /// Prism layout calculation
    PrismLayout(PrismLayoutInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::LensThickness(c) => &c.label,
            CalculationItem::TiltedLens(c) => &c.label,
            CalculationItem::PrismLayout(c) => &c.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::LensThickness(_) => "LensThickness",
            CalculationItem::TiltedLens(_) => "TiltedLens",
            CalculationItem::PrismLayout(_) => "PrismLayout",
        }
    }
}
