//! # Rectangular Frame Corner Distribution
//!
//! Splits a plan load between the four corners of a rectangular base frame by
//! opposite-area weighting (bilinear interpolation).
//!
//! ```text
//!   (0,0) R1 ────────────────────── R2 (L,0)
//!         │          cx             │
//!         │ ┌──────────┐            │
//!      cy │ │          │            │
//!         │ │          ● F          │  W
//!         │ │          │            │
//!         │ └──────────┘            │
//!   (0,W) R3 ────────────────────── R4 (L,W)
//!                      L
//! ```
//!
//! Each corner receives the share of `F` equal to the area of the rectangle
//! between the load centroid and the diagonally opposite corner, divided by
//! the frame area `L·W`. The four shares always sum to one.
//!
//! ## Formulas
//!
//! - R1 = F·(L − cx)·(W − cy) / (L·W)
//! - R2 = F·cx·(W − cy) / (L·W)
//! - R3 = F·(L − cx)·cy / (L·W)
//! - R4 = F·cx·cy / (L·W)

use serde::{Deserialize, Serialize};

/// Reaction at each frame corner (N).
///
/// R1 = top-left (0,0), R2 = top-right (L,0), R3 = bottom-left (0,W),
/// R4 = bottom-right (L,W).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerReactions {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub r4: f64,
}

impl CornerReactions {
    /// Sum of all four corner reactions
    pub fn total(&self) -> f64 {
        self.r1 + self.r2 + self.r3 + self.r4
    }

    /// Largest single corner reaction
    pub fn max(&self) -> f64 {
        self.r1.max(self.r2).max(self.r3).max(self.r4)
    }

    /// Add the same force to every corner
    pub fn add_to_each(&mut self, force: f64) {
        self.r1 += force;
        self.r2 += force;
        self.r3 += force;
        self.r4 += force;
    }
}

impl std::ops::AddAssign for CornerReactions {
    fn add_assign(&mut self, rhs: Self) {
        self.r1 += rhs.r1;
        self.r2 += rhs.r2;
        self.r3 += rhs.r3;
        self.r4 += rhs.r4;
    }
}

/// Distribute a force `f` acting at `(cx, cy)` to the four corners of an
/// `l` × `w` frame.
///
/// Callers guard `l·w > 0`.
///
/// # Example
/// ```rust
/// use frame_core::equations::frame::corner_shares;
///
/// // A load at the exact center splits evenly
/// let r = corner_shares(1000.0, 1.0, 0.5, 2.0, 1.0);
/// assert!((r.r1 - 250.0).abs() < 1e-9);
/// assert!((r.total() - 1000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn corner_shares(f: f64, cx: f64, cy: f64, l: f64, w: f64) -> CornerReactions {
    let area = l * w;
    CornerReactions {
        r1: f * (l - cx) * (w - cy) / area,
        r2: f * cx * (w - cy) / area,
        r3: f * (l - cx) * cy / area,
        r4: f * cx * cy / area,
    }
}

/// Perimeter of the four-member frame: 2·(L + W)
#[inline]
pub fn frame_perimeter(l: f64, w: f64) -> f64 {
    2.0 * (l + w)
}

/// Self-weight of the frame members
///
/// # Formula
/// weight = A · perimeter · ρ · g
#[inline]
pub fn frame_self_weight(area_m2: f64, perimeter_m: f64, density_kg_m3: f64, gravity: f64) -> f64 {
    area_m2 * perimeter_m * density_kg_m3 * gravity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_at_corner_goes_to_that_corner() {
        let r = corner_shares(800.0, 0.0, 0.0, 2.0, 1.0);
        assert!((r.r1 - 800.0).abs() < 1e-9);
        assert!(r.r2.abs() < 1e-9 && r.r3.abs() < 1e-9 && r.r4.abs() < 1e-9);

        let r = corner_shares(800.0, 2.0, 1.0, 2.0, 1.0);
        assert!((r.r4 - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_conserve_force() {
        for &(cx, cy) in &[(0.3, 0.2), (1.9, 0.9), (1.0, 0.5), (0.01, 0.99)] {
            let r = corner_shares(1234.5, cx, cy, 2.0, 1.0);
            assert!((r.total() - 1234.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quarter_point() {
        // cx = L/4, cy = W/2: left corners take 3/8 each, right corners 1/8
        let r = corner_shares(800.0, 0.5, 0.5, 2.0, 1.0);
        assert!((r.r1 - 300.0).abs() < 1e-9);
        assert!((r.r3 - 300.0).abs() < 1e-9);
        assert!((r.r2 - 100.0).abs() < 1e-9);
        assert!((r.r4 - 100.0).abs() < 1e-9);
        assert!((r.max() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_weight() {
        // 100 x 218 mm rectangle, L=2 m, W=1 m, steel
        let weight = frame_self_weight(0.0218, frame_perimeter(2.0, 1.0), 7850.0, 9.81);
        assert!((weight - 10072.5).abs() < 1.0);
    }

    #[test]
    fn test_add_assign_and_add_to_each() {
        let mut r = CornerReactions::default();
        r += CornerReactions { r1: 1.0, r2: 2.0, r3: 3.0, r4: 4.0 };
        r.add_to_each(10.0);
        assert_eq!(r, CornerReactions { r1: 11.0, r2: 12.0, r3: 13.0, r4: 14.0 });
        assert_eq!(r.total(), 50.0);
    }
}
