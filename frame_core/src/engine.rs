//! # Analysis Engine
//!
//! The two entry points hosts call:
//!
//! - [`compute_results`] - reactions, stresses, safety factor, deflection
//! - [`compute_diagrams`] - sampled shear, moment and deflection curves
//!
//! Both are pure: raw user input goes in, every value is normalized, and a
//! complete result comes out. Nothing is cached between calls and nothing
//! here returns an error.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::engine::AnalysisInput;
//! use frame_core::calculations::{AnalysisConfiguration, CrossSectionProfile};
//! use frame_core::loads::Load;
//! use frame_core::materials::Material;
//! use frame_core::settings::InputDefaults;
//!
//! let input = AnalysisInput {
//!     label: "Pump beam".to_string(),
//!     configuration: AnalysisConfiguration::SimpleBeam {
//!         length_mm: 2000.0,
//!         left_support_mm: 0.0,
//!         right_support_mm: 2000.0,
//!     },
//!     loads: vec![Load::point(1000.0, 1000.0)],
//!     sections: vec![],
//!     cross_section: CrossSectionProfile::Rectangular { width_mm: 100.0, height_mm: 200.0 },
//!     material: Material::SteelS235,
//!     density_kg_m3: None,
//! };
//!
//! let analysis = input.analyze(&InputDefaults::default());
//! assert!((analysis.results.max_bending_moment_nm - 500.0).abs() < 1e-9);
//! assert_eq!(analysis.diagrams.shear.len(), 100);
//! ```

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculations::base_frame::{BaseFrame, FRAME_MEMBERS};
use crate::calculations::cross_section::CrossSectionProfile;
use crate::calculations::diagrams::Diagrams;
use crate::calculations::simple_beam::SimpleBeam;
use crate::calculations::stress::StressCheck;
use crate::calculations::AnalysisConfiguration;
use crate::equations::beam::{frame_headline_deflection, total_load_deflection};
use crate::equations::frame::CornerReactions;
use crate::loads::{resolve_loads, FrameSection, Load};
use crate::materials::Material;
use crate::normalize::normalize_positive;
use crate::settings::InputDefaults;
use crate::units::mm_to_m;

/// Everything the engine reports for one analysis.
///
/// Rebuilt from scratch on every call; `Default` is the all-zero result.
/// A positive yield strength with zero bending stress gives an infinite
/// `safety_factor`, which serializes as JSON `null` and reads back as
/// infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Largest shear force magnitude (N)
    pub max_shear_force_n: f64,
    /// Largest bending moment magnitude (N·m)
    pub max_bending_moment_nm: f64,
    pub max_normal_stress_mpa: f64,
    pub max_shear_stress_mpa: f64,
    /// Yield strength over bending stress
    #[serde(deserialize_with = "infinite_if_null")]
    pub safety_factor: f64,
    /// Members carrying the load: 1 for a simple beam, 4 for a frame
    pub total_beams: u32,
    pub load_per_beam_n: f64,
    pub moment_of_inertia_m4: f64,
    pub section_modulus_m3: f64,
    /// Largest single support reaction (N)
    pub corner_reaction_force_n: f64,
    /// Support reactions; a simple beam reports R1/R2 only
    pub corner_reactions: CornerReactions,
    /// Headline deflection (m)
    pub max_deflection_m: f64,
    pub total_applied_load_n: f64,
}

/// JSON has no infinity: `serde_json` writes it as `null`, so read it back
fn infinite_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// Elastic modulus × second moment of area (N·m²)
fn flexural_rigidity(material: &Material, moment_of_inertia_m4: f64) -> f64 {
    material.properties().normalized().elastic_modulus_pa() * moment_of_inertia_m4
}

fn simple_beam(length_mm: f64, left_mm: f64, right_mm: f64, loads: &[Load], defaults: &InputDefaults) -> SimpleBeam {
    SimpleBeam::new(
        mm_to_m(length_mm),
        mm_to_m(left_mm),
        mm_to_m(right_mm),
        resolve_loads(loads, defaults),
    )
}

/// Run the full analysis for one configuration.
///
/// `density_kg_m3` drives frame self-weight; the simple beam carries no
/// self-weight. `sections` only apply to a base frame.
pub fn compute_results(
    config: &AnalysisConfiguration,
    loads: &[Load],
    sections: &[FrameSection],
    cross_section: &CrossSectionProfile,
    material: &Material,
    density_kg_m3: f64,
    defaults: &InputDefaults,
) -> AnalysisResults {
    let section = cross_section.normalized(&defaults.profile).properties();
    let props = material.properties().normalized();
    let ei = flexural_rigidity(material, section.moment_of_inertia_m4);

    let results = match config.normalized(defaults) {
        AnalysisConfiguration::SimpleBeam {
            length_mm,
            left_support_mm,
            right_support_mm,
        } => {
            let solution = simple_beam(length_mm, left_support_mm, right_support_mm, loads, defaults).solve();
            let stress = StressCheck::evaluate(solution.max_moment_nm, solution.max_shear_n, &section, props.yield_strength_mpa);
            let max_deflection = if ei > 0.0 && solution.span_m > 0.0 {
                total_load_deflection(solution.total_applied_load_n, solution.span_m, ei)
            } else {
                0.0
            };
            let reactions = CornerReactions {
                r1: solution.reaction_left_n,
                r2: solution.reaction_right_n,
                r3: 0.0,
                r4: 0.0,
            };
            AnalysisResults {
                max_shear_force_n: solution.max_shear_n,
                max_bending_moment_nm: solution.max_moment_nm,
                max_normal_stress_mpa: stress.max_normal_stress_mpa,
                max_shear_stress_mpa: stress.max_shear_stress_mpa,
                safety_factor: stress.safety_factor,
                total_beams: 1,
                load_per_beam_n: solution.total_applied_load_n,
                moment_of_inertia_m4: section.moment_of_inertia_m4,
                section_modulus_m3: section.section_modulus_m3,
                corner_reaction_force_n: reactions.max(),
                corner_reactions: reactions,
                max_deflection_m: max_deflection,
                total_applied_load_n: solution.total_applied_load_n,
            }
        }
        AnalysisConfiguration::BaseFrame { length_mm, width_mm } => {
            let frame = BaseFrame::new(mm_to_m(length_mm), mm_to_m(width_mm))
                .with_loads(resolve_loads(loads, defaults))
                .with_sections(sections.iter().map(FrameSection::resolve).collect())
                .with_self_weight(section.area_m2, normalize_positive(density_kg_m3, 0.0));
            let solution = frame.solve();
            let stress = StressCheck::evaluate(solution.max_moment_nm, solution.max_shear_n, &section, props.yield_strength_mpa);
            let max_deflection = if ei > 0.0 {
                frame_headline_deflection(solution.total_applied_load_n, solution.critical_length_m, ei)
            } else {
                0.0
            };
            AnalysisResults {
                max_shear_force_n: solution.max_shear_n,
                max_bending_moment_nm: solution.max_moment_nm,
                max_normal_stress_mpa: stress.max_normal_stress_mpa,
                max_shear_stress_mpa: stress.max_shear_stress_mpa,
                safety_factor: stress.safety_factor,
                total_beams: FRAME_MEMBERS,
                load_per_beam_n: solution.load_per_beam_n,
                moment_of_inertia_m4: section.moment_of_inertia_m4,
                section_modulus_m3: section.section_modulus_m3,
                corner_reaction_force_n: solution.corner_reactions.max(),
                corner_reactions: solution.corner_reactions,
                max_deflection_m: max_deflection,
                total_applied_load_n: solution.total_applied_load_n,
            }
        }
    };

    debug!(
        "{}: Mmax {:.2} N·m, σ {:.2} MPa, SF {:.2}, δ {:.3e} m",
        config.display_name(),
        results.max_bending_moment_nm,
        results.max_normal_stress_mpa,
        results.safety_factor,
        results.max_deflection_m
    );
    results
}

/// Sample the shear, moment and deflection curves.
///
/// The moment of inertia is read from `results`; the material supplies `E`.
/// A base frame is drawn as its critical beam under `load_per_beam / Lc`.
pub fn compute_diagrams(
    config: &AnalysisConfiguration,
    loads: &[Load],
    results: &AnalysisResults,
    material: &Material,
    defaults: &InputDefaults,
) -> Diagrams {
    let ei = flexural_rigidity(material, results.moment_of_inertia_m4);
    match config.normalized(defaults) {
        AnalysisConfiguration::SimpleBeam {
            length_mm,
            left_support_mm,
            right_support_mm,
        } => {
            let beam = simple_beam(length_mm, left_support_mm, right_support_mm, loads, defaults);
            Diagrams::for_simple_beam(&beam, ei)
        }
        AnalysisConfiguration::BaseFrame { length_mm, width_mm } => {
            let critical_length = mm_to_m(length_mm.max(width_mm));
            let w = if critical_length > 0.0 {
                results.load_per_beam_n / critical_length
            } else {
                0.0
            };
            Diagrams::for_critical_beam(critical_length, w, ei)
        }
    }
}

/// One complete analysis request, as stored in project files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// User-provided label (e.g., "Skid frame B-2")
    #[serde(default)]
    pub label: String,
    pub configuration: AnalysisConfiguration,
    #[serde(default)]
    pub loads: Vec<Load>,
    /// Frame sections; ignored for a simple beam
    #[serde(default)]
    pub sections: Vec<FrameSection>,
    pub cross_section: CrossSectionProfile,
    #[serde(default)]
    pub material: Material,
    /// Overrides the material density for self-weight when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
}

/// Results and diagrams of one [`AnalysisInput`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub results: AnalysisResults,
    pub diagrams: Diagrams,
}

impl AnalysisInput {
    /// Density used for self-weight (kg/m³)
    pub fn effective_density(&self) -> f64 {
        self.density_kg_m3
            .unwrap_or_else(|| self.material.properties().normalized().density_kg_m3)
    }

    /// Run [`compute_results`] then [`compute_diagrams`]
    pub fn analyze(&self, defaults: &InputDefaults) -> Analysis {
        let results = compute_results(
            &self.configuration,
            &self.loads,
            &self.sections,
            &self.cross_section,
            &self.material,
            self.effective_density(),
            defaults,
        );
        let diagrams = compute_diagrams(&self.configuration, &self.loads, &results, &self.material, defaults);
        Analysis { results, diagrams }
    }
}
