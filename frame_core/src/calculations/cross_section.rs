//! # Cross-Section Properties
//!
//! Member profiles entered in millimeters and their area, second moment of
//! area and elastic section modulus in SI units.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::cross_section::CrossSectionProfile;
//! use frame_core::settings::ProfileDefaults;
//!
//! let profile = CrossSectionProfile::Rectangular { width_mm: 100.0, height_mm: 218.0 };
//! let props = profile.normalized(&ProfileDefaults::default()).properties();
//! assert!((props.area_m2 - 0.0218).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::{
    circular_area, circular_moment_of_inertia, flanged_area, flanged_moment_of_inertia, rectangular_area,
    rectangular_moment_of_inertia, section_modulus,
};
use crate::normalize::normalize_positive;
use crate::settings::ProfileDefaults;
use crate::units::mm_to_m;

/// Member cross-section shape (dimensions in mm).
///
/// ## JSON Example
///
/// ```json
/// { "type": "IBeam", "height_mm": 200.0, "flange_width_mm": 100.0,
///   "flange_thickness_mm": 8.5, "web_thickness_mm": 5.6 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSectionProfile {
    /// Solid rectangle
    Rectangular { width_mm: f64, height_mm: f64 },

    /// Doubly symmetric I-section
    IBeam {
        height_mm: f64,
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
    },

    /// Channel section. Strong-axis properties use the same flanged
    /// decomposition as [`CrossSectionProfile::IBeam`].
    CChannel {
        height_mm: f64,
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
    },

    /// Solid round bar
    Circular { diameter_mm: f64 },
}

impl Default for CrossSectionProfile {
    fn default() -> Self {
        let p = ProfileDefaults::default();
        CrossSectionProfile::Rectangular {
            width_mm: p.width_mm,
            height_mm: p.height_mm,
        }
    }
}

impl CrossSectionProfile {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CrossSectionProfile::Rectangular { .. } => "Rectangular",
            CrossSectionProfile::IBeam { .. } => "I-Beam",
            CrossSectionProfile::CChannel { .. } => "C-Channel",
            CrossSectionProfile::Circular { .. } => "Circular",
        }
    }

    /// Replace every unusable dimension with its profile default
    pub fn normalized(&self, defaults: &ProfileDefaults) -> Self {
        match *self {
            CrossSectionProfile::Rectangular { width_mm, height_mm } => CrossSectionProfile::Rectangular {
                width_mm: normalize_positive(width_mm, defaults.width_mm),
                height_mm: normalize_positive(height_mm, defaults.height_mm),
            },
            CrossSectionProfile::IBeam {
                height_mm,
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
            } => {
                let (h, bf, tf, tw) =
                    normalize_flanged(height_mm, flange_width_mm, flange_thickness_mm, web_thickness_mm, defaults);
                CrossSectionProfile::IBeam {
                    height_mm: h,
                    flange_width_mm: bf,
                    flange_thickness_mm: tf,
                    web_thickness_mm: tw,
                }
            }
            CrossSectionProfile::CChannel {
                height_mm,
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
            } => {
                let (h, bf, tf, tw) =
                    normalize_flanged(height_mm, flange_width_mm, flange_thickness_mm, web_thickness_mm, defaults);
                CrossSectionProfile::CChannel {
                    height_mm: h,
                    flange_width_mm: bf,
                    flange_thickness_mm: tf,
                    web_thickness_mm: tw,
                }
            }
            CrossSectionProfile::Circular { diameter_mm } => CrossSectionProfile::Circular {
                diameter_mm: normalize_positive(diameter_mm, defaults.diameter_mm),
            },
        }
    }

    /// Section properties in SI units.
    ///
    /// Dimensions are used as given; call [`normalized`](Self::normalized)
    /// first for user input.
    pub fn properties(&self) -> SectionProperties {
        match *self {
            CrossSectionProfile::Rectangular { width_mm, height_mm } => {
                let (w, h) = (mm_to_m(width_mm), mm_to_m(height_mm));
                let i = rectangular_moment_of_inertia(w, h);
                SectionProperties {
                    area_m2: rectangular_area(w, h),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: section_modulus(i, h / 2.0),
                }
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
                let h = mm_to_m(height_mm);
                let bf = mm_to_m(flange_width_mm);
                let tf = mm_to_m(flange_thickness_mm);
                let tw = mm_to_m(web_thickness_mm);
                let i = flanged_moment_of_inertia(h, bf, tf, tw);
                SectionProperties {
                    area_m2: flanged_area(h, bf, tf, tw),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: section_modulus(i, h / 2.0),
                }
            }
            CrossSectionProfile::Circular { diameter_mm } => {
                let d = mm_to_m(diameter_mm);
                let i = circular_moment_of_inertia(d);
                SectionProperties {
                    area_m2: circular_area(d),
                    moment_of_inertia_m4: i,
                    section_modulus_m3: section_modulus(i, d / 2.0),
                }
            }
        }
    }
}

fn normalize_flanged(h: f64, bf: f64, tf: f64, tw: f64, defaults: &ProfileDefaults) -> (f64, f64, f64, f64) {
    (
        normalize_positive(h, defaults.height_mm),
        normalize_positive(bf, defaults.flange_width_mm),
        normalize_positive(tf, defaults.flange_thickness_mm),
        normalize_positive(tw, defaults.web_thickness_mm),
    )
}

/// Geometric properties of a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Area (m²)
    pub area_m2: f64,
    /// Second moment of area about the bending axis (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Elastic section modulus (m³)
    pub section_modulus_m3: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_rectangular() {
        let props = CrossSectionProfile::Rectangular {
            width_mm: 100.0,
            height_mm: 200.0,
        }
        .properties();
        assert!(approx_eq(props.area_m2, 0.02, 1e-12));
        // 0.1 · 0.2³ / 12
        assert!(approx_eq(props.moment_of_inertia_m4, 6.666_666_666_666_667e-5, 1e-12));
        assert!(approx_eq(props.section_modulus_m3, 6.666_666_666_666_667e-4, 1e-12));
    }

    #[test]
    fn test_channel_matches_ibeam() {
        let ibeam = CrossSectionProfile::IBeam {
            height_mm: 200.0,
            flange_width_mm: 100.0,
            flange_thickness_mm: 8.5,
            web_thickness_mm: 5.6,
        };
        let channel = CrossSectionProfile::CChannel {
            height_mm: 200.0,
            flange_width_mm: 100.0,
            flange_thickness_mm: 8.5,
            web_thickness_mm: 5.6,
        };
        assert_eq!(ibeam.properties(), channel.properties());
    }

    #[test]
    fn test_circular() {
        let props = CrossSectionProfile::Circular { diameter_mm: 60.0 }.properties();
        let d: f64 = 0.06;
        assert!(approx_eq(props.area_m2, std::f64::consts::PI * 0.03 * 0.03, 1e-12));
        assert!(approx_eq(props.moment_of_inertia_m4, std::f64::consts::PI * d.powi(4) / 64.0, 1e-12));
        assert!(approx_eq(props.section_modulus_m3, props.moment_of_inertia_m4 / 0.03, 1e-12));
    }

    #[test]
    fn test_normalization_uses_defaults() {
        let defaults = ProfileDefaults::default();
        let bad = CrossSectionProfile::IBeam {
            height_mm: f64::NAN,
            flange_width_mm: -1.0,
            flange_thickness_mm: 0.0,
            web_thickness_mm: 7.0,
        };
        assert_eq!(
            bad.normalized(&defaults),
            CrossSectionProfile::IBeam {
                height_mm: 200.0,
                flange_width_mm: 100.0,
                flange_thickness_mm: 8.5,
                web_thickness_mm: 7.0,
            }
        );

        let round = CrossSectionProfile::Circular { diameter_mm: f64::INFINITY }.normalized(&defaults);
        assert_eq!(round, CrossSectionProfile::Circular { diameter_mm: 60.0 });
    }

    #[test]
    fn test_json_tag() {
        let json = serde_json::to_string(&CrossSectionProfile::Circular { diameter_mm: 60.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Circular","diameter_mm":60.0}"#);
    }
}
