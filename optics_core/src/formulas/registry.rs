//! # Formula Registry
//!
//! Central registry of every formula in the catalogue. Each entry carries
//! metadata (name, expression, result units, one-line description) for
//! documentation export and audit trails.
//!
//! ## Usage
//!
//! ```rust
//! use optics_core::formulas::registry::{Formula, FormulaGroup};
//!
//! let meta = Formula::BackVertexPower.metadata();
//! assert_eq!(meta.group, FormulaGroup::Power);
//! assert!(meta.expression.contains("F1"));
//! ```

use serde::{Deserialize, Serialize};

/// Physical domain a formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaGroup {
    Power,
    Prism,
    Thickness,
    BaseCurve,
    Magnification,
    Tilt,
    Tools,
    Transposition,
    Physics,
    Dispensing,
}

impl FormulaGroup {
    /// Display name for documentation headings
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaGroup::Power => "Power / Vergence",
            FormulaGroup::Prism => "Prism",
            FormulaGroup::Thickness => "Thickness / Sag",
            FormulaGroup::BaseCurve => "Base Curve",
            FormulaGroup::Magnification => "Magnification",
            FormulaGroup::Tilt => "Tilt",
            FormulaGroup::Tools => "Tools",
            FormulaGroup::Transposition => "Transposition",
            FormulaGroup::Physics => "Physics",
            FormulaGroup::Dispensing => "Dispensing",
        }
    }
}

/// All groups, in catalogue order.
pub const ALL_GROUPS: &[FormulaGroup] = &[
    FormulaGroup::Power,
    FormulaGroup::Prism,
    FormulaGroup::Thickness,
    FormulaGroup::BaseCurve,
    FormulaGroup::Magnification,
    FormulaGroup::Tilt,
    FormulaGroup::Tools,
    FormulaGroup::Transposition,
    FormulaGroup::Physics,
    FormulaGroup::Dispensing,
];

/// Metadata describing one formula in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaMetadata {
    /// Function name in the crate
    pub name: &'static str,
    /// Mathematical expression in conventional notation
    pub expression: &'static str,
    /// Units of the result ("D" = diopters, "Δ" = prism diopters)
    pub result_units: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Physical domain
    pub group: FormulaGroup,
}

/// Identifier for every formula in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    // Power / Vergence
    Vergence,
    DioptricPower,
    FocalDistance,
    SurfacePower,
    RadiusOfCurvature,
    NominalPower,
    NominalBacksidePower,
    LensMakersEquation,
    SphericalEquivalent,
    PowerMeridian180,
    PowerMeridian90,
    EffectivePower,
    CompensatedPower,
    VertexPowerChangeApprox,
    BackVertexPower,
    FrontVertexPower,
    // Prism
    PrismDeviation,
    ApicalAngle,
    PrismDiopter,
    PrismDisplacement,
    PrismDistance,
    PrismCentrad,
    PrismDiopterApproximation,
    PrenticesLawCentimeters,
    PrenticesLawMillimeters,
    ResultantPrism,
    EffectiveDecentration,
    ResultantPrismAngle,
    ResolvingPrismHorizontal,
    ResolvingPrismVertical,
    ResolveEye,
    // Thickness / Sag
    SagittalDepth,
    SagittalDepthFromPower,
    EdgeThickness,
    CenterThickness,
    ApproximateSag,
    ApproximateThickness,
    PrismThickness,
    PrismPowerFromThickness,
    PlusPrismLensThickestEdge,
    PlusPrismLensCenterThickness,
    MinusPrismLensEdgeThickness,
    // Base Curve
    VogelsRulePlus,
    VogelsRuleMinus,
    BoddyFormulaPlus,
    BoddyFormulaMinus,
    BoddyFormula,
    // Magnification
    SpectacleMagnification,
    MagnificationPercent,
    // Tilt
    MartinTiltSphere,
    InducedCylinder,
    InducedCylinderCombined,
    // Tools
    ToolSelector,
    RefractivePower,
    // Transposition
    TransposeSpherePower,
    TransposeAxis,
    TransposedCylinderSign,
    // Physics
    WaveVelocity,
    WaveFrequency,
    WaveWavelength,
    Illumination,
    IndexOfRefraction,
    SpeedOfLightInMaterial,
    // Dispensing
    AstigmatismClassification,
    BinocularDecentration,
    MonocularDecentration,
    SegDrop,
    MinimumBlankSize,
}

/// Every formula, in catalogue order.
pub const ALL_FORMULAS: &[Formula] = &[
    Formula::Vergence,
    Formula::DioptricPower,
    Formula::FocalDistance,
    Formula::SurfacePower,
    Formula::RadiusOfCurvature,
    Formula::NominalPower,
    Formula::NominalBacksidePower,
    Formula::LensMakersEquation,
    Formula::SphericalEquivalent,
    Formula::PowerMeridian180,
    Formula::PowerMeridian90,
    Formula::EffectivePower,
    Formula::CompensatedPower,
    Formula::VertexPowerChangeApprox,
    Formula::BackVertexPower,
    Formula::FrontVertexPower,
    Formula::PrismDeviation,
    Formula::ApicalAngle,
    Formula::PrismDiopter,
    Formula::PrismDisplacement,
    Formula::PrismDistance,
    Formula::PrismCentrad,
    Formula::PrismDiopterApproximation,
    Formula::PrenticesLawCentimeters,
    Formula::PrenticesLawMillimeters,
    Formula::ResultantPrism,
    Formula::EffectiveDecentration,
    Formula::ResultantPrismAngle,
    Formula::ResolvingPrismHorizontal,
    Formula::ResolvingPrismVertical,
    Formula::ResolveEye,
    Formula::SagittalDepth,
    Formula::SagittalDepthFromPower,
    Formula::EdgeThickness,
    Formula::CenterThickness,
    Formula::ApproximateSag,
    Formula::ApproximateThickness,
    Formula::PrismThickness,
    Formula::PrismPowerFromThickness,
    Formula::PlusPrismLensThickestEdge,
    Formula::PlusPrismLensCenterThickness,
    Formula::MinusPrismLensEdgeThickness,
    Formula::VogelsRulePlus,
    Formula::VogelsRuleMinus,
    Formula::BoddyFormulaPlus,
    Formula::BoddyFormulaMinus,
    Formula::BoddyFormula,
    Formula::SpectacleMagnification,
    Formula::MagnificationPercent,
    Formula::MartinTiltSphere,
    Formula::InducedCylinder,
    Formula::InducedCylinderCombined,
    Formula::ToolSelector,
    Formula::RefractivePower,
    Formula::TransposeSpherePower,
    Formula::TransposeAxis,
    Formula::TransposedCylinderSign,
    Formula::WaveVelocity,
    Formula::WaveFrequency,
    Formula::WaveWavelength,
    Formula::Illumination,
    Formula::IndexOfRefraction,
    Formula::SpeedOfLightInMaterial,
    Formula::AstigmatismClassification,
    Formula::BinocularDecentration,
    Formula::MonocularDecentration,
    Formula::SegDrop,
    Formula::MinimumBlankSize,
];

impl Formula {
    /// Physical domain this formula belongs to
    pub fn group(&self) -> FormulaGroup {
        use Formula::*;
        match self {
            Vergence | DioptricPower | FocalDistance | SurfacePower | RadiusOfCurvature
            | NominalPower | NominalBacksidePower | LensMakersEquation | SphericalEquivalent
            | PowerMeridian180 | PowerMeridian90 | EffectivePower | CompensatedPower
            | VertexPowerChangeApprox | BackVertexPower | FrontVertexPower => FormulaGroup::Power,
            PrismDeviation | ApicalAngle | PrismDiopter | PrismDisplacement | PrismDistance
            | PrismCentrad | PrismDiopterApproximation | PrenticesLawCentimeters
            | PrenticesLawMillimeters | ResultantPrism | EffectiveDecentration
            | ResultantPrismAngle | ResolvingPrismHorizontal | ResolvingPrismVertical
            | ResolveEye => FormulaGroup::Prism,
            SagittalDepth | SagittalDepthFromPower | EdgeThickness | CenterThickness
            | ApproximateSag | ApproximateThickness | PrismThickness | PrismPowerFromThickness
            | PlusPrismLensThickestEdge | PlusPrismLensCenterThickness
            | MinusPrismLensEdgeThickness => FormulaGroup::Thickness,
            VogelsRulePlus | VogelsRuleMinus | BoddyFormulaPlus | BoddyFormulaMinus
            | BoddyFormula => FormulaGroup::BaseCurve,
            SpectacleMagnification | MagnificationPercent => FormulaGroup::Magnification,
            MartinTiltSphere | InducedCylinder | InducedCylinderCombined => FormulaGroup::Tilt,
            ToolSelector | RefractivePower => FormulaGroup::Tools,
            TransposeSpherePower | TransposeAxis | TransposedCylinderSign => {
                FormulaGroup::Transposition
            }
            WaveVelocity | WaveFrequency | WaveWavelength | Illumination | IndexOfRefraction
            | SpeedOfLightInMaterial => FormulaGroup::Physics,
            AstigmatismClassification | BinocularDecentration | MonocularDecentration | SegDrop
            | MinimumBlankSize => FormulaGroup::Dispensing,
        }
    }

    /// Full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        use Formula::*;
        let (name, expression, result_units, description) = match self {
            Vergence => ("vergence", "V = -100 / d", "D", "Vergence of light at a distance in centimeters"),
            DioptricPower => ("dioptric_power", "D = 1 / f", "D", "Lens power from focal length in meters"),
            FocalDistance => ("focal_distance", "f = 1 / D", "m", "Focal length from lens power"),
            SurfacePower => ("surface_power", "F = (n - 1) * 1000 / r", "D", "Refractive power of a single surface"),
            RadiusOfCurvature => ("radius_of_curvature", "r = |(n - 1) * 1000 / F|", "mm", "Radius magnitude producing a surface power"),
            NominalPower => ("nominal_power", "D = F1 + F2", "D", "Sum of front and back surface powers"),
            NominalBacksidePower => ("nominal_backside_power", "F2 = D - F1", "D", "Back surface power reaching a total power"),
            LensMakersEquation => ("lens_makers_equation", "D = (n-1)/r1 + (n-1)/r2", "D", "Nominal power from signed surface radii"),
            SphericalEquivalent => ("spherical_equivalent", "SE = S + C/2", "D", "Mean power of a spherocylinder lens"),
            PowerMeridian180 => ("power_meridian_180", "P = S + C sin²(θ-180°)", "D", "Approximate power in the horizontal meridian"),
            PowerMeridian90 => ("power_meridian_90", "P = S + C sin²(θ-90°)", "D", "Approximate power in the vertical meridian"),
            EffectivePower => ("effective_power", "P' = P / (1 + vP)", "D", "Effective power after a vertex change"),
            CompensatedPower => ("compensated_power", "P' = P / (1 - vP)", "D", "Power to order after a vertex change"),
            VertexPowerChangeApprox => ("vertex_power_change_approx", "ΔP = v P² / 1000", "D", "Approximate power change per vertex change"),
            BackVertexPower => ("back_vertex_power", "BVP = F1 / (1 - (t/n)F1) + F2", "D", "Back vertex power of a thick lens"),
            FrontVertexPower => ("front_vertex_power", "FVP = F2 / (1 - (t/n)F2) + F1", "D", "Front vertex power of a thick lens"),
            PrismDeviation => ("prism_deviation", "d = a (n - 1)", "deg", "Ray deviation through a thin prism"),
            ApicalAngle => ("apical_angle", "a = d / (n - 1)", "deg", "Apical angle producing a deviation"),
            PrismDiopter => ("prism_diopter", "Δ = displacement / distance", "Δ", "Prism power from ray displacement"),
            PrismDisplacement => ("prism_displacement", "cm = Δ * distance", "cm", "Ray displacement at a distance"),
            PrismDistance => ("prism_distance", "m = displacement / Δ", "m", "Distance producing a displacement"),
            PrismCentrad => ("prism_centrad", "Δ = 100 tan(d)", "Δ", "Prism power from the deviation angle"),
            PrismDiopterApproximation => ("prism_diopter_approximation", "Δ ≈ 100 tan(a (n-1))", "Δ", "Prism power from apical angle and index"),
            PrenticesLawCentimeters => ("prentices_law_centimeters", "Δ = c D", "Δ", "Prismatic effect of decentration in centimeters"),
            PrenticesLawMillimeters => ("prentices_law_millimeters", "Δ = mm D / 10", "Δ", "Prismatic effect of decentration in millimeters"),
            ResultantPrism => ("resultant_prism", "Δ = sqrt(h² + v²)", "Δ", "Magnitude of two orthogonal prism components"),
            EffectiveDecentration => ("effective_decentration", "c = h sin(θ) + v cos(θ)", "cm", "Decentration effective along the cylinder axis"),
            ResultantPrismAngle => ("resultant_prism_angle", "θ = |atan(v/h)| + quadrant", "deg", "Base angle of a resultant prism per eye"),
            ResolvingPrismHorizontal => ("resolving_prism_horizontal", "h = Δ cos(θ)", "Δ", "Horizontal component of a prism"),
            ResolvingPrismVertical => ("resolving_prism_vertical", "v = Δ sin(θ)", "Δ", "Vertical component of a prism"),
            ResolveEye => ("resolve_eye", "table(direction, angle)", "-", "Eye and quadrant of a prism prescription"),
            SagittalDepth => ("sagittal_depth", "s = R - sqrt(R² - h²)", "mm", "Exact sag of a surface from its radius"),
            SagittalDepthFromPower => ("sagittal_depth_from_power", "s = R - sqrt(R² - h²), R = (n-1)/F", "mm", "Exact sag of a surface from its power"),
            EdgeThickness => ("edge_thickness", "e = (s2 - s1) + t", "mm", "Edge thickness of a minus lens"),
            CenterThickness => ("center_thickness", "t = s1 - s2 + e", "mm", "Center thickness of a plus lens"),
            ApproximateSag => ("approximate_sag", "s ≈ h² F / (2000 (n-1))", "mm", "Approximate sag from surface power"),
            ApproximateThickness => ("approximate_thickness", "t ≈ s + base", "mm", "Approximate sag plus a base thickness"),
            PrismThickness => ("prism_thickness", "t = d Δ / (100 (n-1))", "mm", "Base-to-apex thickness of a prism lens"),
            PrismPowerFromThickness => ("prism_power_from_thickness", "Δ = t 100 (n-1) / d", "Δ", "Prism power from edge thickness difference"),
            PlusPrismLensThickestEdge => ("plus_prism_lens_thickest_edge", "e = base + min edge", "mm", "Thickest edge of a plus lens with prism"),
            PlusPrismLensCenterThickness => ("plus_prism_lens_center_thickness", "t = s + min edge + base/2", "mm", "Center thickness of a plus lens with prism"),
            MinusPrismLensEdgeThickness => ("minus_prism_lens_edge_thickness", "e = s + min center + base/2", "mm", "Edge thickness of a minus lens with prism"),
            VogelsRulePlus => ("vogels_rule_plus", "BC = SE + 6", "D", "Vogel's base curve for a plus lens"),
            VogelsRuleMinus => ("vogels_rule_minus", "BC = SE/2 + 6", "D", "Vogel's base curve for a minus lens"),
            BoddyFormulaPlus => ("boddy_formula_plus", "BC = add/2 + SE + 3.50", "D", "Boddy front curve for a plus progressive"),
            BoddyFormulaMinus => ("boddy_formula_minus", "BC = (SE + add)/2 + 4.25", "D", "Boddy front curve for a minus progressive"),
            BoddyFormula => ("boddy_formula", "plus or minus branch by sign(S)", "D", "Boddy front curve, dispatching on sphere sign"),
            SpectacleMagnification => ("spectacle_magnification", "M = shape * power", "ratio", "Total spectacle magnification of a lens"),
            MagnificationPercent => ("magnification_percent", "% = (M - 1) * 100", "%", "Magnification ratio as a percentage"),
            MartinTiltSphere => ("martin_tilt_sphere", "S' = S (1 + sin²θ / 2n)", "D", "Effective sphere of a tilted lens"),
            InducedCylinder => ("induced_cylinder", "C = S' tan²θ", "D", "Cylinder induced by lens tilt"),
            InducedCylinderCombined => ("induced_cylinder_combined", "C = S' tan²θ + C0", "D", "Induced cylinder combined with the original"),
            ToolSelector => ("tool_selector", "T = 0.53/(n-1) * F", "D", "Tool curve producing a refractive power"),
            RefractivePower => ("refractive_power", "F = (n-1)/0.53 * T", "D", "Refractive power a marked tool grinds"),
            TransposeSpherePower => ("transpose_sphere_power", "S' = S + C for plus cylinder", "D", "Transposed sphere power"),
            TransposeAxis => ("transpose_axis", "θ' = θ ± 90 for plus cylinder", "deg", "Transposed cylinder axis"),
            TransposedCylinderSign => ("transposed_cylinder_sign", "C' = -C for plus cylinder", "D", "Transposed cylinder sign"),
            WaveVelocity => ("wave_velocity", "v = f λ", "-", "Velocity of a wave"),
            WaveFrequency => ("wave_frequency", "f = v / λ", "Hz", "Frequency of a wave"),
            WaveWavelength => ("wave_wavelength", "λ = v / f", "-", "Wavelength of a wave"),
            Illumination => ("illumination", "E = 1 / d²", "-", "Inverse-square illumination at a distance"),
            IndexOfRefraction => ("index_of_refraction", "n = c / v", "-", "Index from the speed of light in a material"),
            SpeedOfLightInMaterial => ("speed_of_light_in_material", "v = c / n", "cm/s", "Speed of light in a material"),
            AstigmatismClassification => ("astigmatism_type", "sign(S), sign(C), sign(S+C)", "-", "Astigmatism classification of a prescription"),
            BinocularDecentration => ("binocular_decentration", "dec = (A + DBL) - PD", "mm", "Total decentration of a pair of lenses"),
            MonocularDecentration => ("monocular_decentration", "dec = (A + DBL)/2 - PD", "mm", "Decentration of a single lens"),
            SegDrop => ("seg_drop", "drop = seg height - B/2", "mm", "Bifocal segment drop below the midline"),
            MinimumBlankSize => ("minimum_blank_size", "MBS = ED + 2 dec (+ 2)", "mm", "Minimum blank size for a decentered lens"),
        };
        FormulaMetadata {
            name,
            expression,
            result_units,
            description,
            group: self.group(),
        }
    }
}

/// Generate a markdown index of the whole catalogue, one section per group.
pub fn generate_catalogue_markdown() -> String {
    let mut out = String::from("# Formula Catalogue\n");
    for group in ALL_GROUPS {
        out.push_str(&format!("\n## {}\n\n", group.display_name()));
        out.push_str("| Formula | Expression | Result |\n");
        out.push_str("|---------|------------|--------|\n");
        for formula in ALL_FORMULAS.iter().filter(|f| f.group() == *group) {
            let meta = formula.metadata();
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                meta.name, meta.expression, meta.result_units
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_formula_has_metadata() {
        for formula in ALL_FORMULAS {
            let meta = formula.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.expression.is_empty());
            assert!(!meta.description.is_empty());
            assert_eq!(meta.group, formula.group());
        }
    }

    #[test]
    fn test_every_group_is_populated() {
        for group in ALL_GROUPS {
            let count = ALL_FORMULAS.iter().filter(|f| f.group() == *group).count();
            assert!(count > 0, "group {:?} has no formulas", group);
        }
    }

    #[test]
    fn test_catalogue_markdown() {
        let markdown = generate_catalogue_markdown();
        assert!(markdown.starts_with("# Formula Catalogue"));
        assert!(markdown.contains("## Power / Vergence"));
        assert!(markdown.contains("`back_vertex_power`"));
        assert!(markdown.contains("## Dispensing"));
    }

    #[test]
    fn test_registry_serialization() {
        let json = serde_json::to_string(&Formula::SagittalDepth).unwrap();
        let roundtrip: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Formula::SagittalDepth);
    }
}
