//! # Simple Beam Solver
//!
//! Two-support beam with optional overhangs. Reactions come from statics,
//! shear and moment are accumulated piecewise along the whole beam, and the
//! deflection curve is a superposition of closed-form cases inside the span.
//!
//! ```text
//!          P          w
//!          ↓    ↓↓↓↓↓↓↓↓↓↓↓
//!   ═══════════════════════════════
//!   0   △ left            △ right   length
//!       R1                R2
//! ```
//!
//! ## Approximations
//!
//! - Distributed loads enter shear and moment but not the reactions.
//! - The right reaction is subtracted from shear and moment once `x` reaches
//!   the right support, so the last shear sample of a supported beam is `−2·R2`.
//! - Only point loads inside the span and uniform loads covering exactly the
//!   span contribute to the deflection curve.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::calculations::simple_beam::SimpleBeam;
//! use frame_core::loads::ResolvedLoad;
//!
//! let beam = SimpleBeam::new(2.0, 0.0, 2.0, vec![ResolvedLoad::Point { force_n: 1000.0, position_m: 1.0 }]);
//! let solution = beam.solve();
//! assert!((solution.reaction_left_n - 500.0).abs() < 1e-9);
//! assert!((solution.max_moment_nm - 500.0).abs() < 1e-9);
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::calculations::diagrams::sample_positions;
use crate::equations::beam::{point_load_deflection, point_load_reactions, uniform_load_deflection};
use crate::loads::ResolvedLoad;

/// Tolerance for deciding that a clipped uniform load covers the full span (m)
const FULL_SPAN_TOLERANCE_M: f64 = 1e-9;

/// Which side of a discontinuity to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Value at `x` including any jump located exactly at `x`
    At,
    /// Limit approaching `x` from the left
    LeftOf,
}

impl Side {
    fn passed(self, x: f64, at: f64) -> bool {
        match self {
            Side::At => x >= at,
            Side::LeftOf => x > at,
        }
    }
}

/// A beam on two supports, all values in N and m.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBeam {
    /// Total beam length (m)
    pub length_m: f64,
    /// Left support position (m)
    pub left_m: f64,
    /// Right support position (m)
    pub right_m: f64,
    /// Normalized loads
    pub loads: Vec<ResolvedLoad>,
}

/// Statics summary of a [`SimpleBeam`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamSolution {
    /// Span between supports (m)
    pub span_m: f64,
    /// Left support reaction (N), positive upward
    pub reaction_left_n: f64,
    /// Right support reaction (N), positive upward
    pub reaction_right_n: f64,
    /// Largest shear magnitude (N)
    pub max_shear_n: f64,
    /// Largest moment magnitude (N·m)
    pub max_moment_nm: f64,
    /// Sum of every load's force, wherever it sits (N)
    pub total_applied_load_n: f64,
}

impl SimpleBeam {
    pub fn new(length_m: f64, left_m: f64, right_m: f64, loads: Vec<ResolvedLoad>) -> Self {
        SimpleBeam {
            length_m,
            left_m,
            right_m,
            loads,
        }
    }

    /// Distance between supports (m); may be zero or negative
    pub fn span(&self) -> f64 {
        self.right_m - self.left_m
    }

    /// Support reactions `(R1, R2)` in N.
    ///
    /// Both are zero when the span is not positive.
    pub fn reactions(&self) -> (f64, f64) {
        let span = self.span();
        if span <= 0.0 {
            return (0.0, 0.0);
        }

        let mut r1 = 0.0;
        let mut r2 = 0.0;
        for load in &self.loads {
            let (force, at) = match *load {
                ResolvedLoad::Point { force_n, position_m } => (force_n, position_m),
                ResolvedLoad::Uniform {
                    intensity_n_per_m,
                    start_m,
                    end_m,
                } => {
                    let start = start_m.max(self.left_m);
                    let end = end_m.min(self.right_m);
                    if end <= start {
                        continue;
                    }
                    (intensity_n_per_m * (end - start), (start + end) / 2.0)
                }
                ResolvedLoad::Distributed { .. } => continue,
            };
            let (dr1, dr2) = point_load_reactions(force, at - self.left_m, self.right_m - at, span);
            r1 += dr1;
            r2 += dr2;
        }
        (r1, r2)
    }

    /// Shear at `x` (N), including any jump located at `x`
    pub fn shear_at(&self, x: f64) -> f64 {
        self.shear(x, Side::At)
    }

    /// Shear just left of `x` (N)
    pub fn shear_left_of(&self, x: f64) -> f64 {
        self.shear(x, Side::LeftOf)
    }

    fn shear(&self, x: f64, side: Side) -> f64 {
        let (r1, r2) = self.reactions();
        let mut v = 0.0;
        if side.passed(x, self.left_m) {
            v += r1;
        }
        if side.passed(x, self.right_m) {
            v -= r2;
        }
        for load in &self.loads {
            match *load {
                ResolvedLoad::Point { force_n, position_m } => {
                    if side.passed(x, position_m) {
                        v -= force_n;
                    }
                }
                _ => {
                    let start = load.start_m();
                    if x > start {
                        v -= load.line_intensity() * (x - start).min(load.length_m());
                    }
                }
            }
        }
        v
    }

    /// Bending moment at `x` (N·m), positive sagging
    pub fn moment_at(&self, x: f64) -> f64 {
        let (r1, r2) = self.reactions();
        let mut m = 0.0;
        if x >= self.left_m {
            m += r1 * (x - self.left_m);
        }
        if x >= self.right_m {
            m -= r2 * (x - self.right_m);
        }
        for load in &self.loads {
            match *load {
                ResolvedLoad::Point { force_n, position_m } => {
                    if x > position_m {
                        m -= force_n * (x - position_m);
                    }
                }
                _ => {
                    let start = load.start_m();
                    if x > start {
                        let loaded = (x - start).min(load.length_m());
                        let force = load.line_intensity() * loaded;
                        m -= force * (x - (start + loaded / 2.0));
                    }
                }
            }
        }
        m
    }

    /// Deflection at `x` (m), positive downward. `ei` is E·I in N·m².
    ///
    /// Zero outside the span and whenever `E·I ≤ 0`.
    pub fn deflection_at(&self, x: f64, ei: f64) -> f64 {
        let span = self.span();
        if ei <= 0.0 || span <= 0.0 || x < self.left_m || x > self.right_m {
            return 0.0;
        }

        let local_x = x - self.left_m;
        self.loads
            .iter()
            .map(|load| match *load {
                ResolvedLoad::Point { force_n, position_m } => {
                    let a = position_m - self.left_m;
                    if (0.0..=span).contains(&a) {
                        point_load_deflection(force_n, a, span, local_x, ei)
                    } else {
                        0.0
                    }
                }
                ResolvedLoad::Uniform {
                    intensity_n_per_m,
                    start_m,
                    end_m,
                } => {
                    let start = start_m.max(self.left_m);
                    let end = end_m.min(self.right_m);
                    let full_span = (start - self.left_m).abs() < FULL_SPAN_TOLERANCE_M
                        && (end - self.right_m).abs() < FULL_SPAN_TOLERANCE_M;
                    if full_span {
                        uniform_load_deflection(intensity_n_per_m, span, local_x, ei)
                    } else {
                        0.0
                    }
                }
                ResolvedLoad::Distributed { .. } => 0.0,
            })
            .sum()
    }

    /// Sum of all load forces (N)
    pub fn total_applied_load(&self) -> f64 {
        self.loads.iter().map(ResolvedLoad::total_force).sum()
    }

    /// Positions where shear can jump or change slope, within the beam
    fn event_positions(&self) -> Vec<f64> {
        let mut events = vec![0.0, self.length_m, self.left_m, self.right_m];
        for load in &self.loads {
            events.push(load.start_m());
            events.push(load.end_m());
        }
        events.retain(|x| (0.0..=self.length_m).contains(x));
        events
    }

    /// Grid points plus events, sorted and deduplicated
    fn candidate_positions(&self) -> Vec<f64> {
        let mut positions: Vec<f64> = sample_positions(self.length_m).collect();
        positions.extend(self.event_positions());
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        positions
    }

    /// Largest shear and moment magnitudes along the beam.
    ///
    /// Shear is checked on both sides of every position; moment is also
    /// checked where shear changes sign between two positions.
    fn extremes(&self) -> (f64, f64) {
        let positions = self.candidate_positions();
        let mut max_shear: f64 = 0.0;
        let mut max_moment: f64 = 0.0;

        for &x in &positions {
            max_shear = max_shear.max(self.shear_at(x).abs()).max(self.shear_left_of(x).abs());
            max_moment = max_moment.max(self.moment_at(x).abs());
        }

        // Shear is linear between consecutive positions
        for pair in positions.windows(2) {
            let (x0, x1) = (pair[0], pair[1]);
            let v0 = self.shear_at(x0);
            let v1 = self.shear_left_of(x1);
            if v0 * v1 < 0.0 {
                let crossing = x0 + v0 / (v0 - v1) * (x1 - x0);
                trace!("zero shear at x = {:.6} m", crossing);
                max_moment = max_moment.max(self.moment_at(crossing).abs());
            }
        }

        (max_shear, max_moment)
    }

    /// Reactions, extremes and total load
    pub fn solve(&self) -> BeamSolution {
        let (r1, r2) = self.reactions();
        let (max_shear, max_moment) = self.extremes();
        let solution = BeamSolution {
            span_m: self.span(),
            reaction_left_n: r1,
            reaction_right_n: r2,
            max_shear_n: max_shear,
            max_moment_nm: max_moment,
            total_applied_load_n: self.total_applied_load(),
        };
        debug!(
            "simple beam: span {:.3} m, R1 {:.2} N, R2 {:.2} N, Vmax {:.2} N, Mmax {:.2} N·m",
            solution.span_m, r1, r2, max_shear, max_moment
        );
        solution
    }
}
