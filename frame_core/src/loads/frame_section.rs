//! # Frame Sections
//!
//! A base frame may be split into longitudinal sections, each carrying the
//! weight of a casing and a primary load (equipment, tank contents, ...).
//! Both forces act as one plan load at the middle of the section.
//!
//! ```text
//!   0        start          end                    L
//!   ├──────────┬─────────────┬─────────────────────┤
//!   │          │  casing +   │                     │
//!   │          │  primary ●  │                     │  W
//!   │          │             │                     │
//!   └──────────┴─────────────┴─────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize::normalize_positive;
use crate::units::{mm_to_m, ForceUnit};

/// A longitudinal slice of the base frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSection {
    /// Stable identifier for host-side editing
    pub id: Uuid,

    /// User-facing label (e.g., "Pump skid")
    #[serde(default)]
    pub name: String,

    /// Section start from the frame's left edge (mm)
    pub start_mm: f64,

    /// Section end from the frame's left edge (mm)
    pub end_mm: f64,

    /// Casing weight in `casing_weight_unit`
    #[serde(default)]
    pub casing_weight: f64,

    #[serde(default)]
    pub casing_weight_unit: ForceUnit,

    /// Primary load in `primary_load_unit`
    #[serde(default)]
    pub primary_load: f64,

    #[serde(default)]
    pub primary_load_unit: ForceUnit,
}

impl FrameSection {
    /// Create a section with both forces in Newtons
    pub fn new(name: impl Into<String>, start_mm: f64, end_mm: f64, casing_weight_n: f64, primary_load_n: f64) -> Self {
        FrameSection {
            id: Uuid::new_v4(),
            name: name.into(),
            start_mm,
            end_mm,
            casing_weight: casing_weight_n,
            casing_weight_unit: ForceUnit::Newton,
            primary_load: primary_load_n,
            primary_load_unit: ForceUnit::Newton,
        }
    }

    /// Set the unit of the casing weight (builder pattern)
    pub fn with_casing_unit(mut self, unit: ForceUnit) -> Self {
        self.casing_weight_unit = unit;
        self
    }

    /// Set the unit of the primary load (builder pattern)
    pub fn with_primary_unit(mut self, unit: ForceUnit) -> Self {
        self.primary_load_unit = unit;
        self
    }

    /// Casing weight plus primary load in Newtons, after normalization
    pub fn total_force_n(&self) -> f64 {
        self.casing_weight_unit.to_newtons(normalize_positive(self.casing_weight, 0.0))
            + self.primary_load_unit.to_newtons(normalize_positive(self.primary_load, 0.0))
    }

    /// Normalize and convert to SI
    pub fn resolve(&self) -> ResolvedSection {
        let start_m = mm_to_m(normalize_positive(self.start_mm, 0.0));
        let end_m = mm_to_m(normalize_positive(self.end_mm, 0.0));
        ResolvedSection {
            force_n: self.total_force_n(),
            center_m: (start_m + end_m) / 2.0,
        }
    }
}

/// A frame section reduced to one plan force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSection {
    /// Combined casing and primary force (N)
    pub force_n: f64,
    /// Longitudinal position of the section's midpoint (m)
    pub center_m: f64,
}
