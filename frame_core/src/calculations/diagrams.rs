//! # Diagram Sampler
//!
//! Shear, moment and deflection curves sampled at 100 evenly spaced points,
//! ready for charting. Positions are reported in millimeters.
//!
//! Each call builds fresh vectors; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::calculations::simple_beam::SimpleBeam;
use crate::equations::beam::{uniform_load_deflection, uniform_load_moment, uniform_load_shear};
use crate::units::m_to_mm;

/// Number of points in every sampled curve
pub const SAMPLE_COUNT: usize = 100;

/// `SAMPLE_COUNT` evenly spaced positions from 0 to `length_m` inclusive.
///
/// The last position is exactly `length_m`.
pub fn sample_positions(length_m: f64) -> impl Iterator<Item = f64> {
    let last = SAMPLE_COUNT - 1;
    let step = length_m / last as f64;
    (0..SAMPLE_COUNT).map(move |i| if i == last { length_m } else { i as f64 * step })
}

/// One sampled point of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Position along the member (mm)
    pub x: f64,
    /// Curve value in the curve's unit
    pub y: f64,
}

/// The three sampled curves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagrams {
    /// Shear force (N)
    pub shear: Vec<DiagramPoint>,
    /// Bending moment (N·m)
    pub moment: Vec<DiagramPoint>,
    /// Deflection (m), positive downward
    pub deflection: Vec<DiagramPoint>,
}

impl Diagrams {
    fn sample<F, M, D>(length_m: f64, shear: F, moment: M, deflection: D) -> Self
    where
        F: Fn(f64) -> f64,
        M: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let mut diagrams = Diagrams {
            shear: Vec::with_capacity(SAMPLE_COUNT),
            moment: Vec::with_capacity(SAMPLE_COUNT),
            deflection: Vec::with_capacity(SAMPLE_COUNT),
        };
        for x in sample_positions(length_m) {
            let x_mm = m_to_mm(x);
            diagrams.shear.push(DiagramPoint { x: x_mm, y: shear(x) });
            diagrams.moment.push(DiagramPoint { x: x_mm, y: moment(x) });
            diagrams.deflection.push(DiagramPoint { x: x_mm, y: deflection(x) });
        }
        diagrams
    }

    /// Curves of a simple beam over its full length
    pub fn for_simple_beam(beam: &SimpleBeam, ei: f64) -> Self {
        Diagrams::sample(
            beam.length_m,
            |x| beam.shear_at(x),
            |x| beam.moment_at(x),
            |x| beam.deflection_at(x, ei),
        )
    }

    /// Curves of a frame's critical beam: a uniform load `w` over a simply
    /// supported span `critical_length_m`
    pub fn for_critical_beam(critical_length_m: f64, w: f64, ei: f64) -> Self {
        let l = critical_length_m;
        Diagrams::sample(
            l,
            |x| uniform_load_shear(w, l, x),
            |x| uniform_load_moment(w, l, x),
            |x| if ei > 0.0 { uniform_load_deflection(w, l, x, ei) } else { 0.0 },
        )
    }

    /// Largest absolute value in each curve: `(shear, moment, deflection)`
    pub fn peaks(&self) -> (f64, f64, f64) {
        fn peak(points: &[DiagramPoint]) -> f64 {
            points.iter().fold(0.0, |acc: f64, p| acc.max(p.y.abs()))
        }
        (peak(&self.shear), peak(&self.moment), peak(&self.deflection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::ResolvedLoad;

    #[test]
    fn test_sample_positions() {
        let xs: Vec<f64> = sample_positions(2.0).collect();
        assert_eq!(xs.len(), SAMPLE_COUNT);
        assert_eq!(xs[0], 0.0);
        assert!((xs[SAMPLE_COUNT - 1] - 2.0).abs() < 1e-12);
        // Exact end so a support there is always reached
        assert_eq!(sample_positions(2.5).last(), Some(2.5));
    }

    #[test]
    fn test_simple_beam_curves() {
        let beam = SimpleBeam::new(2.0, 0.0, 2.0, vec![ResolvedLoad::Point { force_n: 1000.0, position_m: 1.0 }]);
        let d = Diagrams::for_simple_beam(&beam, 1.0e6);
        assert_eq!(d.shear.len(), SAMPLE_COUNT);
        assert_eq!(d.moment.len(), SAMPLE_COUNT);
        assert_eq!(d.deflection.len(), SAMPLE_COUNT);

        // x is in mm
        assert!((d.shear[SAMPLE_COUNT - 1].x - 2000.0).abs() < 1e-9);
        assert!((d.shear[0].y - 500.0).abs() < 1e-12);
        assert!(d.moment[0].y.abs() < 1e-12);
        assert!(d.deflection[0].y.abs() < 1e-15);
        // Right reaction subtracted on the last sample
        assert!((d.shear[SAMPLE_COUNT - 1].y + 1000.0).abs() < 1e-9);

        let (_, m_peak, _) = d.peaks();
        assert!(m_peak < 500.0 && m_peak > 480.0);
    }

    #[test]
    fn test_critical_beam_curves() {
        let (l, w, ei) = (2.0_f64, 1000.0_f64, 1.0e6_f64);
        let d = Diagrams::for_critical_beam(l, w, ei);
        assert!((d.shear[0].y - 1000.0).abs() < 1e-9);
        assert!((d.shear[SAMPLE_COUNT - 1].y + 1000.0).abs() < 1e-9);
        let (v, m, delta) = d.peaks();
        assert!((v - 1000.0).abs() < 1e-9);
        assert!(m <= w * l * l / 8.0 + 1e-9);
        assert!(delta <= 5.0 * w * l.powi(4) / (384.0 * ei) + 1e-15);
    }

    #[test]
    fn test_critical_beam_without_stiffness() {
        let d = Diagrams::for_critical_beam(2.0, 1000.0, 0.0);
        assert!(d.deflection.iter().all(|p| p.y == 0.0));
    }
}
