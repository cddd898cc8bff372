//! # Loads
//!
//! User-facing load definitions and their normalized, SI-unit form.
//!
//! - [`Load`] - what the host stores: magnitudes in a chosen [`ForceUnit`],
//!   positions in millimeters, possibly unusable numbers
//! - [`ResolvedLoad`] - what the solvers consume: Newtons and meters, every
//!   field finite and non-negative
//! - [`FrameSection`] - a longitudinal slice of a base frame carrying casing
//!   weight and a primary load
//!
//! ## Example
//!
//! ```
//! use frame_core::loads::Load;
//! use frame_core::settings::InputDefaults;
//! use frame_core::units::ForceUnit;
//!
//! let load = Load::point(100.0, 500.0).with_unit(ForceUnit::Kgf);
//! let resolved = load.resolve(&InputDefaults::default());
//! assert!((resolved.total_force() - 981.0).abs() < 1e-9);
//!
//! let plate = Load::distributed_area(1000.0, 0.0, 0.25);
//! assert!((plate.resolve(&InputDefaults::default()).total_force() - 250.0).abs() < 1e-9);
//! ```

pub mod frame_section;

pub use frame_section::{FrameSection, ResolvedSection};

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_optional_positive, normalize_positive};
use crate::settings::InputDefaults;
use crate::units::{mm_to_m, ForceUnit};

// ============================================================================
// User-Facing Load
// ============================================================================

/// A load applied to the beam or frame.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "type": "Point", "magnitude": 1500.0, "position_mm": 1000.0 },
///   { "type": "Uniform", "magnitude_per_m": 200.0, "start_mm": 0.0, "end_mm": 2000.0, "unit": "kgf" },
///   { "type": "Distributed", "magnitude_per_m2": 1000.0, "start_mm": 250.0, "area_m2": 0.25 }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force
    Point {
        /// Force in `unit`
        magnitude: f64,
        /// Distance from the left end (mm)
        position_mm: f64,
        #[serde(default)]
        unit: ForceUnit,
    },

    /// Constant line load over `[start_mm, end_mm]`
    Uniform {
        /// Intensity in `unit` per meter
        magnitude_per_m: f64,
        start_mm: f64,
        end_mm: f64,
        #[serde(default)]
        unit: ForceUnit,
    },

    /// Pressure over a plan footprint.
    ///
    /// Needs either `length_mm` and `width_mm`, or `area_m2` (read as a
    /// square of side √area).
    Distributed {
        /// Intensity in `unit` per square meter
        magnitude_per_m2: f64,
        start_mm: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length_mm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width_mm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        area_m2: Option<f64>,
        #[serde(default)]
        unit: ForceUnit,
    },
}

impl Load {
    /// Create a point load in Newtons
    pub fn point(magnitude_n: f64, position_mm: f64) -> Self {
        Load::Point {
            magnitude: magnitude_n,
            position_mm,
            unit: ForceUnit::Newton,
        }
    }

    /// Create a uniform line load in N/m
    pub fn uniform(magnitude_n_per_m: f64, start_mm: f64, end_mm: f64) -> Self {
        Load::Uniform {
            magnitude_per_m: magnitude_n_per_m,
            start_mm,
            end_mm,
            unit: ForceUnit::Newton,
        }
    }

    /// Create a distributed load in N/m² with an explicit rectangular footprint
    pub fn distributed(magnitude_n_per_m2: f64, start_mm: f64, length_mm: f64, width_mm: f64) -> Self {
        Load::Distributed {
            magnitude_per_m2: magnitude_n_per_m2,
            start_mm,
            length_mm: Some(length_mm),
            width_mm: Some(width_mm),
            area_m2: None,
            unit: ForceUnit::Newton,
        }
    }

    /// Create a distributed load in N/m² described only by its area
    pub fn distributed_area(magnitude_n_per_m2: f64, start_mm: f64, area_m2: f64) -> Self {
        Load::Distributed {
            magnitude_per_m2: magnitude_n_per_m2,
            start_mm,
            length_mm: None,
            width_mm: None,
            area_m2: Some(area_m2),
            unit: ForceUnit::Newton,
        }
    }

    /// Set the force unit and return self (builder pattern)
    pub fn with_unit(mut self, new_unit: ForceUnit) -> Self {
        match &mut self {
            Load::Point { unit, .. } | Load::Uniform { unit, .. } | Load::Distributed { unit, .. } => {
                *unit = new_unit;
            }
        }
        self
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::Point { .. } => "Point",
            Load::Uniform { .. } => "Uniform",
            Load::Distributed { .. } => "Distributed",
        }
    }

    /// Force unit of this load's magnitude
    pub fn unit(&self) -> ForceUnit {
        match self {
            Load::Point { unit, .. } | Load::Uniform { unit, .. } | Load::Distributed { unit, .. } => *unit,
        }
    }

    /// Normalize every field and convert to Newtons and meters.
    ///
    /// Magnitudes and positions fall back to zero, so an unusable magnitude
    /// yields a load that contributes nothing.
    pub fn resolve(&self, defaults: &InputDefaults) -> ResolvedLoad {
        match self {
            Load::Point {
                magnitude,
                position_mm,
                unit,
            } => ResolvedLoad::Point {
                force_n: unit.to_newtons(normalize_positive(*magnitude, 0.0)),
                position_m: mm_to_m(normalize_positive(*position_mm, 0.0)),
            },
            Load::Uniform {
                magnitude_per_m,
                start_mm,
                end_mm,
                unit,
            } => {
                let start_m = mm_to_m(normalize_positive(*start_mm, 0.0));
                let end_m = mm_to_m(normalize_positive(*end_mm, 0.0));
                ResolvedLoad::Uniform {
                    intensity_n_per_m: unit.to_newtons(normalize_positive(*magnitude_per_m, 0.0)),
                    start_m,
                    // An inverted range collapses to zero length
                    end_m: end_m.max(start_m),
                }
            }
            Load::Distributed {
                magnitude_per_m2,
                start_mm,
                length_mm,
                width_mm,
                area_m2,
                unit,
            } => ResolvedLoad::Distributed {
                pressure_n_per_m2: unit.to_newtons(normalize_positive(*magnitude_per_m2, 0.0)),
                start_m: mm_to_m(normalize_positive(*start_mm, 0.0)),
                footprint: Footprint::resolve(*length_mm, *width_mm, *area_m2, defaults.load_width_m),
            },
        }
    }
}

// ============================================================================
// Resolved (SI) Load
// ============================================================================

/// Where a distributed load's footprint sits across the frame width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintAnchor {
    /// Measured from the far edge: centroid at `W − width/2`
    FarEdge,
    /// Centered on the frame width: centroid at `W/2`
    Centered,
}

/// Plan footprint of a distributed load (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Extent along the member
    pub length_m: f64,
    /// Extent across the member
    pub width_m: f64,
    pub anchor: FootprintAnchor,
}

impl Footprint {
    /// Pick the footprint from whichever fields are usable.
    ///
    /// Priority: length & width, then area (square of side √area), then
    /// length alone with the default width. Anything else has no footprint.
    pub fn resolve(
        length_mm: Option<f64>,
        width_mm: Option<f64>,
        area_m2: Option<f64>,
        default_width_m: f64,
    ) -> Option<Footprint> {
        let length = normalize_optional_positive(length_mm).map(mm_to_m);
        let width = normalize_optional_positive(width_mm).map(mm_to_m);
        let area = normalize_optional_positive(area_m2);

        match (length, width, area) {
            (Some(length_m), Some(width_m), _) => Some(Footprint {
                length_m,
                width_m,
                anchor: FootprintAnchor::FarEdge,
            }),
            (_, _, Some(area)) => {
                let side = area.sqrt();
                Some(Footprint {
                    length_m: side,
                    width_m: side,
                    anchor: FootprintAnchor::Centered,
                })
            }
            (Some(length_m), None, None) => Some(Footprint {
                length_m,
                width_m: default_width_m,
                anchor: FootprintAnchor::Centered,
            }),
            _ => None,
        }
    }

    /// Footprint area (m²)
    pub fn area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }
}

/// A load with every field finite, non-negative and in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResolvedLoad {
    Point {
        force_n: f64,
        position_m: f64,
    },
    Uniform {
        intensity_n_per_m: f64,
        start_m: f64,
        end_m: f64,
    },
    Distributed {
        pressure_n_per_m2: f64,
        start_m: f64,
        /// `None` when neither dimensions nor an area were usable
        footprint: Option<Footprint>,
    },
}

impl ResolvedLoad {
    /// Total force carried by the load (N)
    pub fn total_force(&self) -> f64 {
        match self {
            ResolvedLoad::Point { force_n, .. } => *force_n,
            ResolvedLoad::Uniform {
                intensity_n_per_m,
                start_m,
                end_m,
            } => intensity_n_per_m * (end_m - start_m),
            ResolvedLoad::Distributed {
                pressure_n_per_m2,
                footprint,
                ..
            } => footprint.map_or(0.0, |fp| pressure_n_per_m2 * fp.area_m2()),
        }
    }

    /// Start of the load along the member (m)
    pub fn start_m(&self) -> f64 {
        match self {
            ResolvedLoad::Point { position_m, .. } => *position_m,
            ResolvedLoad::Uniform { start_m, .. } | ResolvedLoad::Distributed { start_m, .. } => *start_m,
        }
    }

    /// Loaded length along the member (m); zero for point loads
    pub fn length_m(&self) -> f64 {
        match self {
            ResolvedLoad::Point { .. } => 0.0,
            ResolvedLoad::Uniform { start_m, end_m, .. } => end_m - start_m,
            ResolvedLoad::Distributed { footprint, .. } => footprint.map_or(0.0, |fp| fp.length_m),
        }
    }

    /// End of the load along the member (m)
    pub fn end_m(&self) -> f64 {
        self.start_m() + self.length_m()
    }

    /// Force per meter along the member for line-type loads (N/m).
    ///
    /// A distributed load acts as `pressure × width`.
    pub fn line_intensity(&self) -> f64 {
        match self {
            ResolvedLoad::Point { .. } => 0.0,
            ResolvedLoad::Uniform { intensity_n_per_m, .. } => *intensity_n_per_m,
            ResolvedLoad::Distributed {
                pressure_n_per_m2,
                footprint,
                ..
            } => footprint.map_or(0.0, |fp| pressure_n_per_m2 * fp.width_m),
        }
    }

    /// Plan centroid `(cx, cy)` on a frame of width `frame_width_m`
    pub fn plan_centroid(&self, frame_width_m: f64) -> (f64, f64) {
        let centered = frame_width_m / 2.0;
        match self {
            ResolvedLoad::Point { position_m, .. } => (*position_m, centered),
            ResolvedLoad::Uniform { start_m, end_m, .. } => ((start_m + end_m) / 2.0, centered),
            ResolvedLoad::Distributed { start_m, footprint, .. } => match footprint {
                Some(fp) => {
                    let cx = start_m + fp.length_m / 2.0;
                    let cy = match fp.anchor {
                        FootprintAnchor::FarEdge => frame_width_m - fp.width_m / 2.0,
                        FootprintAnchor::Centered => centered,
                    };
                    (cx, cy)
                }
                None => (*start_m, centered),
            },
        }
    }
}

/// Normalize and convert a whole load list
pub fn resolve_loads(loads: &[Load], defaults: &InputDefaults) -> Vec<ResolvedLoad> {
    loads.iter().map(|load| load.resolve(defaults)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> InputDefaults {
        InputDefaults::default()
    }

    #[test]
    fn test_point_resolution() {
        let r = Load::point(1500.0, 750.0).resolve(&defaults());
        assert_eq!(r, ResolvedLoad::Point { force_n: 1500.0, position_m: 0.75 });
        assert_eq!(r.total_force(), 1500.0);
        assert_eq!(r.length_m(), 0.0);
    }

    #[test]
    fn test_unit_conversion_on_resolve() {
        let r = Load::uniform(10.0, 0.0, 2000.0).with_unit(ForceUnit::Lbf).resolve(&defaults());
        // 10 lbf/m over 2 m = 20 lbf = 88.9644 N
        assert!((r.total_force() - 88.9644).abs() < 1e-9);
    }

    #[test]
    fn test_bad_numbers_fall_back_to_zero() {
        let r = Load::point(f64::NAN, -40.0).resolve(&defaults());
        assert_eq!(r.total_force(), 0.0);
        assert_eq!(r.start_m(), 0.0);

        let r = Load::uniform(-5.0, 0.0, 1000.0).resolve(&defaults());
        assert_eq!(r.total_force(), 0.0);
    }

    #[test]
    fn test_inverted_uniform_collapses() {
        let r = Load::uniform(100.0, 1500.0, 500.0).resolve(&defaults());
        assert_eq!(r.length_m(), 0.0);
        assert_eq!(r.total_force(), 0.0);
    }

    #[test]
    fn test_distributed_area_only() {
        let r = Load::distributed_area(1000.0, 0.0, 0.25).resolve(&defaults());
        assert!((r.total_force() - 250.0).abs() < 1e-9);
        // Square of side 0.5 m
        assert!((r.length_m() - 0.5).abs() < 1e-12);
        assert!((r.line_intensity() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_distributed_rect_preferred_over_area() {
        let load = Load::Distributed {
            magnitude_per_m2: 2000.0,
            start_mm: 100.0,
            length_mm: Some(400.0),
            width_mm: Some(300.0),
            area_m2: Some(9.0),
            unit: ForceUnit::Newton,
        };
        let r = load.resolve(&defaults());
        // 2000 · 0.4 · 0.3 = 240 N
        assert!((r.total_force() - 240.0).abs() < 1e-9);
        assert!((r.end_m() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distributed_length_only_uses_default_width() {
        let load = Load::Distributed {
            magnitude_per_m2: 100.0,
            start_mm: 0.0,
            length_mm: Some(2000.0),
            width_mm: None,
            area_m2: None,
            unit: ForceUnit::Newton,
        };
        let r = load.resolve(&defaults());
        assert!((r.total_force() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_distributed_without_footprint() {
        let load = Load::Distributed {
            magnitude_per_m2: 100.0,
            start_mm: 0.0,
            length_mm: None,
            width_mm: Some(500.0),
            area_m2: Some(-1.0),
            unit: ForceUnit::Newton,
        };
        let r = load.resolve(&defaults());
        assert_eq!(r.total_force(), 0.0);
        assert_eq!(r.line_intensity(), 0.0);
    }

    #[test]
    fn test_plan_centroids() {
        let w = 1.0;
        let point = Load::point(1.0, 500.0).resolve(&defaults());
        assert_eq!(point.plan_centroid(w), (0.5, 0.5));

        let uniform = Load::uniform(1.0, 200.0, 1000.0).resolve(&defaults());
        assert_eq!(uniform.plan_centroid(w), (0.6, 0.5));

        let rect = Load::distributed(1.0, 200.0, 400.0, 300.0).resolve(&defaults());
        let (cx, cy) = rect.plan_centroid(w);
        assert!((cx - 0.4).abs() < 1e-12);
        assert!((cy - 0.85).abs() < 1e-12);

        let square = Load::distributed_area(1.0, 0.0, 0.04).resolve(&defaults());
        let (cx, cy) = square.plan_centroid(w);
        assert!((cx - 0.1).abs() < 1e-12);
        assert_eq!(cy, 0.5);
    }

    #[test]
    fn test_json_unit_defaults_to_newtons() {
        let json = r#"{ "type": "Point", "magnitude": 10.0, "position_mm": 5.0 }"#;
        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load.unit(), ForceUnit::Newton);
        assert_eq!(load.display_name(), "Point");
    }

    #[test]
    fn test_serialization_skips_missing_footprint_fields() {
        let json = serde_json::to_string(&Load::distributed_area(1000.0, 0.0, 0.25)).unwrap();
        assert!(json.contains("area_m2"));
        assert!(!json.contains("length_mm"));
        let roundtrip: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Load::distributed_area(1000.0, 0.0, 0.25));
    }
}
