//! # Input Warnings
//!
//! The engine never rejects input: unusable numbers are replaced and
//! impossible geometry contributes nothing. [`AnalysisInput::warnings`]
//! lists what will be replaced or ignored so a host can tell the user.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::engine::AnalysisInput;
//! use frame_core::loads::Load;
//! use frame_core::warnings::InputWarning;
//!
//! let input = AnalysisInput {
//!     loads: vec![Load::uniform(100.0, 1500.0, 500.0)],
//!     ..Default::default()
//! };
//! assert!(input
//!     .warnings()
//!     .contains(&InputWarning::EmptyLoadRange { load_index: 0 }));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::{AnalysisConfiguration, CrossSectionProfile};
use crate::engine::AnalysisInput;
use crate::loads::Load;

/// Something the normalizer will replace or a solver will skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum InputWarning {
    /// A value is not a finite number or is out of range; its fallback is used
    UnusableValue { field: String, value: String },

    /// A uniform load ends at or before its start
    EmptyLoadRange { load_index: usize },

    /// A distributed load has neither a length nor an area
    MissingFootprint { load_index: usize },

    /// Right support is not to the right of the left support
    SupportsOutOfOrder { left_mm: f64, right_mm: f64 },

    /// A load starts beyond the member end
    OutsideMember { load_index: usize, position_mm: f64, length_mm: f64 },

    /// A frame section ends at or before its start
    EmptySection { name: String },

    /// Frame sections were given for a simple beam and are ignored
    SectionsIgnored { count: usize },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::UnusableValue { field, value } => {
                write!(f, "'{}' has unusable value {}; default used", field, value)
            }
            InputWarning::EmptyLoadRange { load_index } => {
                write!(f, "load #{} ends at or before its start and carries no force", load_index + 1)
            }
            InputWarning::MissingFootprint { load_index } => {
                write!(f, "distributed load #{} has no length/width or area and carries no force", load_index + 1)
            }
            InputWarning::SupportsOutOfOrder { left_mm, right_mm } => {
                write!(f, "right support ({} mm) is not right of left support ({} mm); no reactions", right_mm, left_mm)
            }
            InputWarning::OutsideMember {
                load_index,
                position_mm,
                length_mm,
            } => write!(
                f,
                "load #{} at {} mm lies beyond the member length of {} mm",
                load_index + 1,
                position_mm,
                length_mm
            ),
            InputWarning::EmptySection { name } => {
                write!(f, "section '{}' ends at or before its start", name)
            }
            InputWarning::SectionsIgnored { count } => {
                write!(f, "{} frame section(s) ignored for a simple beam", count)
            }
        }
    }
}

/// Collects warnings while walking the input
#[derive(Default)]
struct Checker {
    warnings: Vec<InputWarning>,
}

impl Checker {
    fn unusable(&mut self, field: impl Into<String>, value: f64) {
        self.warnings.push(InputWarning::UnusableValue {
            field: field.into(),
            value: value.to_string(),
        });
    }

    /// Dimensions and magnitudes: must be finite and > 0
    fn positive(&mut self, field: impl Into<String>, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.unusable(field, value);
        }
    }

    /// Positions: must be finite and ≥ 0
    fn position(&mut self, field: impl Into<String>, value: f64) {
        if !(value.is_finite() && value >= 0.0) {
            self.unusable(field, value);
        }
    }

    /// Plain numbers: must be finite
    fn finite(&mut self, field: impl Into<String>, value: f64) {
        if !value.is_finite() {
            self.unusable(field, value);
        }
    }

    fn configuration(&mut self, config: &AnalysisConfiguration) {
        match *config {
            AnalysisConfiguration::SimpleBeam {
                length_mm,
                left_support_mm,
                right_support_mm,
            } => {
                self.positive("length_mm", length_mm);
                self.position("left_support_mm", left_support_mm);
                self.positive("right_support_mm", right_support_mm);
            }
            AnalysisConfiguration::BaseFrame { length_mm, width_mm } => {
                self.positive("length_mm", length_mm);
                self.positive("width_mm", width_mm);
            }
        }
    }

    fn load(&mut self, index: usize, load: &Load, length_mm: f64) {
        let field = |name: &str| format!("loads[{}].{}", index, name);
        let start_mm = match *load {
            Load::Point {
                magnitude, position_mm, ..
            } => {
                self.positive(field("magnitude"), magnitude);
                self.position(field("position_mm"), position_mm);
                position_mm
            }
            Load::Uniform {
                magnitude_per_m,
                start_mm,
                end_mm,
                ..
            } => {
                self.positive(field("magnitude_per_m"), magnitude_per_m);
                self.position(field("start_mm"), start_mm);
                self.positive(field("end_mm"), end_mm);
                if end_mm.is_finite() && start_mm.is_finite() && end_mm <= start_mm {
                    self.warnings.push(InputWarning::EmptyLoadRange { load_index: index });
                }
                start_mm
            }
            Load::Distributed {
                magnitude_per_m2,
                start_mm,
                length_mm: load_length,
                area_m2,
                ..
            } => {
                self.positive(field("magnitude_per_m2"), magnitude_per_m2);
                self.position(field("start_mm"), start_mm);
                let usable = |v: Option<f64>| v.is_some_and(|v| v.is_finite() && v > 0.0);
                // A width alone is not a footprint
                if !usable(load_length) && !usable(area_m2) {
                    self.warnings.push(InputWarning::MissingFootprint { load_index: index });
                }
                start_mm
            }
        };

        if start_mm.is_finite() && start_mm > length_mm {
            self.warnings.push(InputWarning::OutsideMember {
                load_index: index,
                position_mm: start_mm,
                length_mm,
            });
        }
    }

    fn cross_section(&mut self, profile: &CrossSectionProfile) {
        match *profile {
            CrossSectionProfile::Rectangular { width_mm, height_mm } => {
                self.positive("cross_section.width_mm", width_mm);
                self.positive("cross_section.height_mm", height_mm);
            }
            CrossSectionProfile::IBeam {
                height_mm,
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
            }
            | CrossSectionProfile::CChannel {
                height_mm,
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
            } => {
                self.positive("cross_section.height_mm", height_mm);
                self.positive("cross_section.flange_width_mm", flange_width_mm);
                self.positive("cross_section.flange_thickness_mm", flange_thickness_mm);
                self.positive("cross_section.web_thickness_mm", web_thickness_mm);
            }
            CrossSectionProfile::Circular { diameter_mm } => {
                self.positive("cross_section.diameter_mm", diameter_mm);
            }
        }
    }
}

impl AnalysisInput {
    /// List the inputs the engine will replace or ignore.
    ///
    /// Lengths are compared against the raw configured length; defaults are
    /// not applied here.
    pub fn warnings(&self) -> Vec<InputWarning> {
        let mut checker = Checker::default();
        checker.configuration(&self.configuration);

        if let AnalysisConfiguration::SimpleBeam {
            left_support_mm,
            right_support_mm,
            ..
        } = self.configuration
        {
            if left_support_mm.is_finite() && right_support_mm.is_finite() && right_support_mm <= left_support_mm {
                checker.warnings.push(InputWarning::SupportsOutOfOrder {
                    left_mm: left_support_mm,
                    right_mm: right_support_mm,
                });
            }
            if !self.sections.is_empty() {
                checker.warnings.push(InputWarning::SectionsIgnored {
                    count: self.sections.len(),
                });
            }
        }

        let length_mm = self.configuration.length_mm();
        let member_length = if length_mm.is_finite() { length_mm } else { f64::INFINITY };
        for (index, load) in self.loads.iter().enumerate() {
            checker.load(index, load, member_length);
        }

        if self.configuration.is_frame() {
            for (index, section) in self.sections.iter().enumerate() {
                checker.position(format!("sections[{}].start_mm", index), section.start_mm);
                checker.positive(format!("sections[{}].end_mm", index), section.end_mm);
                if section.start_mm.is_finite() && section.end_mm.is_finite() && section.end_mm <= section.start_mm {
                    checker.warnings.push(InputWarning::EmptySection {
                        name: section.name.clone(),
                    });
                }
            }
        }

        checker.cross_section(&self.cross_section);

        let props = self.material.properties();
        checker.finite("material.yield_strength_mpa", props.yield_strength_mpa);
        checker.finite("material.elastic_modulus_gpa", props.elastic_modulus_gpa);
        checker.finite("material.density_kg_m3", props.density_kg_m3);
        if let Some(density) = self.density_kg_m3 {
            checker.positive("density_kg_m3", density);
        }

        checker.warnings
    }
}
