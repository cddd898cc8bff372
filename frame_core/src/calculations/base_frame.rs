//! # Base Frame Solver
//!
//! Four members forming an `L` × `W` rectangle, supported at the corners.
//! Every plan load is split between the corners with the area method (see
//! [`crate::equations::frame`]); the frame's own weight goes a quarter to each
//! corner.
//!
//! Member stresses use a separate, simpler model: the longer side is taken as
//! a simply supported "critical beam" carrying a quarter of the total load
//! spread uniformly over its length. The corner reactions are not derived
//! from that model.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::base_frame::BaseFrame;
//! use frame_core::loads::ResolvedLoad;
//!
//! let frame = BaseFrame::new(2.0, 1.0)
//!     .with_loads(vec![ResolvedLoad::Point { force_n: 4000.0, position_m: 1.0 }]);
//! let solution = frame.solve();
//! assert!((solution.corner_reactions.r1 - 1000.0).abs() < 1e-9);
//! assert!((solution.load_per_beam_n - 1000.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::beam::{uniform_load_max_moment, uniform_load_max_shear};
use crate::equations::frame::{corner_shares, frame_perimeter, frame_self_weight, CornerReactions};
use crate::loads::{ResolvedLoad, ResolvedSection};
use crate::units::GRAVITY_M_S2;

/// Number of members in a rectangular base frame
pub const FRAME_MEMBERS: u32 = 4;

/// A rectangular base frame, all values in N and m.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseFrame {
    /// Frame length along x (m)
    pub length_m: f64,
    /// Frame width along y (m)
    pub width_m: f64,
    pub loads: Vec<ResolvedLoad>,
    pub sections: Vec<ResolvedSection>,
    /// Member cross-section area (m²), for self-weight
    pub member_area_m2: f64,
    /// Member density (kg/m³), for self-weight
    pub density_kg_m3: f64,
}

/// Statics summary of a [`BaseFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameSolution {
    pub corner_reactions: CornerReactions,
    /// Loads, section loads and self-weight together (N)
    pub total_applied_load_n: f64,
    /// Self-weight of the four members (N)
    pub self_weight_n: f64,
    /// Total load divided between the four members (N)
    pub load_per_beam_n: f64,
    /// Longer frame side (m)
    pub critical_length_m: f64,
    /// Uniform load on the critical beam (N/m)
    pub critical_intensity_n_per_m: f64,
    /// Critical beam end shear (N)
    pub max_shear_n: f64,
    /// Critical beam midspan moment (N·m)
    pub max_moment_nm: f64,
}

impl BaseFrame {
    pub fn new(length_m: f64, width_m: f64) -> Self {
        BaseFrame {
            length_m,
            width_m,
            ..Default::default()
        }
    }

    /// Set the plan loads (builder pattern)
    pub fn with_loads(mut self, loads: Vec<ResolvedLoad>) -> Self {
        self.loads = loads;
        self
    }

    /// Set the frame sections (builder pattern)
    pub fn with_sections(mut self, sections: Vec<ResolvedSection>) -> Self {
        self.sections = sections;
        self
    }

    /// Include the members' own weight (builder pattern)
    pub fn with_self_weight(mut self, member_area_m2: f64, density_kg_m3: f64) -> Self {
        self.member_area_m2 = member_area_m2;
        self.density_kg_m3 = density_kg_m3;
        self
    }

    /// Longer of the two sides (m)
    pub fn critical_length(&self) -> f64 {
        self.length_m.max(self.width_m)
    }

    /// Weight of the four members (N)
    pub fn self_weight(&self) -> f64 {
        frame_self_weight(
            self.member_area_m2,
            frame_perimeter(self.length_m, self.width_m),
            self.density_kg_m3,
            GRAVITY_M_S2,
        )
    }

    /// Corner shares of force `f` at `(cx, cy)`, with the centroid clamped
    /// into the rectangle
    fn distribute(&self, f: f64, cx: f64, cy: f64) -> CornerReactions {
        let (l, w) = (self.length_m, self.width_m);
        if l * w <= 0.0 {
            return CornerReactions::default();
        }
        corner_shares(f, cx.clamp(0.0, l), cy.clamp(0.0, w), l, w)
    }

    /// Corner reactions and total applied load from loads, sections and
    /// self-weight
    pub fn corner_reactions(&self) -> (CornerReactions, f64) {
        let mut reactions = CornerReactions::default();
        let mut total = 0.0;

        for load in &self.loads {
            let force = load.total_force();
            let (cx, cy) = load.plan_centroid(self.width_m);
            reactions += self.distribute(force, cx, cy);
            total += force;
        }

        for section in &self.sections {
            reactions += self.distribute(section.force_n, section.center_m, self.width_m / 2.0);
            total += section.force_n;
        }

        let weight = self.self_weight();
        reactions.add_to_each(weight / FRAME_MEMBERS as f64);
        total += weight;

        (reactions, total)
    }

    pub fn solve(&self) -> FrameSolution {
        let (corner_reactions, total) = self.corner_reactions();
        let critical_length = self.critical_length();
        let load_per_beam = total / FRAME_MEMBERS as f64;
        let w = if critical_length > 0.0 {
            load_per_beam / critical_length
        } else {
            0.0
        };

        let solution = FrameSolution {
            corner_reactions,
            total_applied_load_n: total,
            self_weight_n: self.self_weight(),
            load_per_beam_n: load_per_beam,
            critical_length_m: critical_length,
            critical_intensity_n_per_m: w,
            max_shear_n: uniform_load_max_shear(w, critical_length),
            max_moment_nm: uniform_load_max_moment(w, critical_length),
        };
        debug!(
            "base frame {:.3} x {:.3} m: total {:.2} N, corners [{:.2}, {:.2}, {:.2}, {:.2}] N",
            self.length_m,
            self.width_m,
            total,
            corner_reactions.r1,
            corner_reactions.r2,
            corner_reactions.r3,
            corner_reactions.r4
        );
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{Footprint, FootprintAnchor};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if b.abs() < 1e-12 {
            a.abs() < tol
        } else {
            ((a - b) / b).abs() < tol
        }
    }

    #[test]
    fn test_self_weight_only() {
        let frame = BaseFrame::new(2.0, 1.0).with_self_weight(0.0218, 7850.0);
        let s = frame.solve();
        // 0.0218 · 6 · 7850 · 9.81
        assert!(approx_eq(s.self_weight_n, 10_072.7118, 1e-9));
        assert!(approx_eq(s.total_applied_load_n, s.self_weight_n, 1e-12));
        let quarter = s.self_weight_n / 4.0;
        assert!(approx_eq(s.corner_reactions.r1, quarter, 1e-12));
        assert!(approx_eq(s.corner_reactions.r4, quarter, 1e-12));
    }

    #[test]
    fn test_reactions_conserve_force() {
        let loads = vec![
            ResolvedLoad::Point { force_n: 1000.0, position_m: 0.3 },
            ResolvedLoad::Uniform {
                intensity_n_per_m: 200.0,
                start_m: 0.5,
                end_m: 1.7,
            },
            ResolvedLoad::Distributed {
                pressure_n_per_m2: 1500.0,
                start_m: 1.2,
                footprint: Some(Footprint {
                    length_m: 0.4,
                    width_m: 0.3,
                    anchor: FootprintAnchor::FarEdge,
                }),
            },
        ];
        let sections = vec![ResolvedSection { force_n: 700.0, center_m: 1.5 }];
        let frame = BaseFrame::new(2.0, 1.0)
            .with_loads(loads)
            .with_sections(sections)
            .with_self_weight(0.002, 7850.0);
        let s = frame.solve();
        assert!(approx_eq(s.corner_reactions.total(), s.total_applied_load_n, 1e-12));
        assert!(approx_eq(s.load_per_beam_n, s.total_applied_load_n / 4.0, 1e-12));
    }

    #[test]
    fn test_far_edge_footprint_loads_far_corners() {
        let load = ResolvedLoad::Distributed {
            pressure_n_per_m2: 1000.0,
            start_m: 1.6,
            footprint: Some(Footprint {
                length_m: 0.4,
                width_m: 0.2,
                anchor: FootprintAnchor::FarEdge,
            }),
        };
        let s = BaseFrame::new(2.0, 1.0).with_loads(vec![load]).solve();
        // Centroid (1.8, 0.9): R4 takes 0.9 · 0.9 = 81% of 80 N
        assert!(approx_eq(s.corner_reactions.r4, 64.8, 1e-12));
        assert!(approx_eq(s.corner_reactions.max(), 64.8, 1e-12));
    }

    #[test]
    fn test_centroid_outside_is_clamped() {
        let s = BaseFrame::new(2.0, 1.0)
            .with_loads(vec![ResolvedLoad::Point { force_n: 500.0, position_m: 5.0 }])
            .solve();
        // Clamped to x = L: right corners only
        assert!(approx_eq(s.corner_reactions.r2, 250.0, 1e-12));
        assert!(approx_eq(s.corner_reactions.r4, 250.0, 1e-12));
        assert!(s.corner_reactions.r1.abs() < 1e-12);
        assert!(approx_eq(s.corner_reactions.total(), 500.0, 1e-12));
    }

    #[test]
    fn test_critical_beam() {
        let s = BaseFrame::new(1.0, 3.0)
            .with_loads(vec![ResolvedLoad::Point { force_n: 12_000.0, position_m: 0.5 }])
            .solve();
        assert_eq!(s.critical_length_m, 3.0);
        assert!(approx_eq(s.load_per_beam_n, 3000.0, 1e-12));
        assert!(approx_eq(s.critical_intensity_n_per_m, 1000.0, 1e-12));
        assert!(approx_eq(s.max_shear_n, 1500.0, 1e-12));
        // load_per_beam · Lc / 8
        assert!(approx_eq(s.max_moment_nm, 1125.0, 1e-12));
    }
}
