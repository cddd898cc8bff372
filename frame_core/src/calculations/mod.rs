//! # Structural Calculations
//!
//! Solvers and evaluators behind the engine entry points in
//! [`crate::engine`]. Every type here works in N and m; conversion from the
//! user's millimeters and force units happens before they are constructed.
//!
//! ## Available Calculations
//!
//! - [`cross_section`] - Area, second moment of area, section modulus
//! - [`simple_beam`] - Two-support beam reactions, shear, moment, deflection
//! - [`base_frame`] - Four-corner rectangular frame reactions and critical beam
//! - [`stress`] - Bending/shear stress and safety factor
//! - [`diagrams`] - Sampled curves for charting

pub mod base_frame;
pub mod cross_section;
pub mod diagrams;
pub mod simple_beam;
pub mod stress;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_positive;
use crate::settings::InputDefaults;

// Re-export commonly used types
pub use base_frame::{BaseFrame, FrameSolution};
pub use cross_section::{CrossSectionProfile, SectionProperties};
pub use diagrams::{DiagramPoint, Diagrams};
pub use simple_beam::{BeamSolution, SimpleBeam};
pub use stress::StressCheck;

/// Structural system under analysis (dimensions in mm).
///
/// ## JSON Example
///
/// ```json
/// { "type": "SimpleBeam", "length_mm": 3000.0, "left_support_mm": 0.0, "right_support_mm": 3000.0 }
/// { "type": "BaseFrame", "length_mm": 2000.0, "width_mm": 1000.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisConfiguration {
    /// Beam on two supports, overhangs allowed
    SimpleBeam {
        length_mm: f64,
        left_support_mm: f64,
        right_support_mm: f64,
    },
    /// Rectangular frame supported at its four corners
    BaseFrame { length_mm: f64, width_mm: f64 },
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        let defaults = InputDefaults::default();
        AnalysisConfiguration::BaseFrame {
            length_mm: defaults.length_mm,
            width_mm: defaults.width_mm,
        }
    }
}

impl AnalysisConfiguration {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisConfiguration::SimpleBeam { .. } => "Simple Beam",
            AnalysisConfiguration::BaseFrame { .. } => "Base Frame",
        }
    }

    /// Replace unusable dimensions.
    ///
    /// Lengths fall back to the configured defaults, the left support to 0
    /// and the right support to the (normalized) beam length.
    pub fn normalized(&self, defaults: &InputDefaults) -> Self {
        match *self {
            AnalysisConfiguration::SimpleBeam {
                length_mm,
                left_support_mm,
                right_support_mm,
            } => {
                let length_mm = normalize_positive(length_mm, defaults.length_mm);
                AnalysisConfiguration::SimpleBeam {
                    length_mm,
                    left_support_mm: normalize_positive(left_support_mm, 0.0),
                    right_support_mm: normalize_positive(right_support_mm, length_mm),
                }
            }
            AnalysisConfiguration::BaseFrame { length_mm, width_mm } => AnalysisConfiguration::BaseFrame {
                length_mm: normalize_positive(length_mm, defaults.length_mm),
                width_mm: normalize_positive(width_mm, defaults.width_mm),
            },
        }
    }

    /// Member length along x (mm)
    pub fn length_mm(&self) -> f64 {
        match *self {
            AnalysisConfiguration::SimpleBeam { length_mm, .. } | AnalysisConfiguration::BaseFrame { length_mm, .. } => {
                length_mm
            }
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self, AnalysisConfiguration::BaseFrame { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_beam_normalization() {
        let defaults = InputDefaults::default();
        let config = AnalysisConfiguration::SimpleBeam {
            length_mm: 3000.0,
            left_support_mm: f64::NAN,
            right_support_mm: -1.0,
        };
        assert_eq!(
            config.normalized(&defaults),
            AnalysisConfiguration::SimpleBeam {
                length_mm: 3000.0,
                left_support_mm: 0.0,
                right_support_mm: 3000.0,
            }
        );
    }

    #[test]
    fn test_frame_normalization() {
        let defaults = InputDefaults::default();
        let config = AnalysisConfiguration::BaseFrame {
            length_mm: 0.0,
            width_mm: f64::INFINITY,
        };
        assert_eq!(config.normalized(&defaults), AnalysisConfiguration::default());
        assert!(config.is_frame());
        assert_eq!(config.display_name(), "Base Frame");
    }

    #[test]
    fn test_json_tag() {
        let json = r#"{ "type": "BaseFrame", "length_mm": 2400.0, "width_mm": 1200.0 }"#;
        let config: AnalysisConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config.length_mm(), 2400.0);
    }
}
