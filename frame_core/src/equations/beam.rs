//! # Simply-Supported Beam Formulas
//!
//! Closed-form equations for a pin-roller beam. Positions are measured from
//! the left support unless stated otherwise; the engine works in N and m.
//!
//! ## Notation
//!
//! - `L` = Span length between supports
//! - `x` = Position measured from the left support
//! - `a` = Load position from the left support, `b = L − a`
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `E` = Elastic modulus, `I` = Second moment of area
//! - `R1` = Left reaction, `R2` = Right reaction
//!
//! ## Sign Conventions
//!
//! - Loads: positive downward
//! - Moment: positive sagging
//! - Deflection: positive downward
//! - Reactions: positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// POINT LOAD
// =============================================================================

/// Reactions for a point load P at distances `a` (from left) and `b` (to right)
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △ a │     b      △
///   R1  ←─────L──────→ R2
/// ```
///
/// # Formulas
/// - R1 = P·b/L
/// - R2 = P·a/L
///
/// `a` and `b` are passed separately so a load outside the span (negative
/// `a` or `b`) still balances moments about both supports.
///
/// # Example
/// ```rust
/// use frame_core::equations::beam::point_load_reactions;
///
/// let (r1, r2) = point_load_reactions(1000.0, 0.6, 1.4, 2.0);
/// assert!((r1 - 700.0).abs() < 1e-9);
/// assert!((r2 - 300.0).abs() < 1e-9);
/// ```
#[inline]
pub fn point_load_reactions(p: f64, a: f64, b: f64, l: f64) -> (f64, f64) {
    (p * b / l, p * a / l)
}

/// Deflection at `x` for a point load P at `a`
///
/// # Formulas (Roark's Table 8.1, Case 1a)
///
/// For x ≤ a:
/// ```text
/// δ(x) = P·b·x·(L² − b² − x²) / (6·L·E·I)
/// ```
///
/// For x > a:
/// ```text
/// δ(x) = P·a·(L − x)·(2·L·x − x² − a²) / (6·L·E·I)
/// ```
///
/// where b = L − a. Callers guard `E·I > 0` and `L > 0`.
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, ei: f64) -> f64 {
    let b = l - a;
    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * l * ei)
    } else {
        p * a * (l - x) * (2.0 * l * x - x * x - a * a) / (6.0 * l * ei)
    }
}

// =============================================================================
// FULL-SPAN UNIFORM LOAD
// =============================================================================

/// Shear at `x` for a full-span uniform load
///
/// # Formula
/// V(x) = w·(L/2 − x)
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment at `x` for a full-span uniform load
///
/// # Formula
/// M(x) = w·x·(L − x)/2
///
/// Maximum at midspan: M_max = wL²/8
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// Deflection at `x` for a full-span uniform load
///
/// # Formula
/// ```text
/// δ(x) = w·x·(L³ − 2·L·x² + x³) / (24·E·I)
/// ```
///
/// Maximum at midspan: δ_max = 5wL⁴/(384EI)
///
/// # Example
/// ```rust
/// use frame_core::equations::beam::uniform_load_deflection;
///
/// let (w, l, ei) = (1000.0_f64, 2.0_f64, 1.0e6_f64);
/// let mid = uniform_load_deflection(w, l, l / 2.0, ei);
/// let closed_form = 5.0 * w * l.powi(4) / (384.0 * ei);
/// assert!((mid - closed_form).abs() < 1e-12);
/// ```
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, ei: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * ei)
}

/// Maximum shear for a full-span uniform load: V = wL/2
#[inline]
pub fn uniform_load_max_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum moment for a full-span uniform load: M = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

// =============================================================================
// HEADLINE DEFLECTION
// =============================================================================

/// Midspan deflection of a simply supported beam carrying a total load
/// `W` spread uniformly over the span
///
/// # Formula
/// ```text
/// δ = 5·W·L³ / (384·E·I)
/// ```
///
/// Equivalent to 5wL⁴/(384EI) with w = W/L.
#[inline]
pub fn total_load_deflection(total: f64, l: f64, ei: f64) -> f64 {
    5.0 * total * l.powi(3) / (384.0 * ei)
}

/// Headline deflection of the critical frame beam
///
/// # Formula
/// ```text
/// δ = 5·W·Lc⁴ / (384·E·I)
/// ```
///
/// `W` is the frame's total applied load and `Lc` the critical (longer) side.
/// The total load is used directly as the intensity term, so the result is
/// not the same as [`total_load_deflection`] on the critical beam.
#[inline]
pub fn frame_headline_deflection(total: f64, lc: f64, ei: f64) -> f64 {
    5.0 * total * lc.powi(4) / (384.0 * ei)
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
    fn test_point_load_reactions_balance() {
        let (r1, r2) = point_load_reactions(1200.0, 0.5, 1.5, 2.0);
        assert!(approx_eq(r1, 900.0, 1e-12));
        assert!(approx_eq(r2, 300.0, 1e-12));
        assert!(approx_eq(r1 + r2, 1200.0, 1e-12));
    }

    #[test]
    fn test_point_load_deflection_midspan() {
        // Central load: δ = PL³/(48EI)
        let (p, l, ei) = (1000.0_f64, 3.0_f64, 2.0e6_f64);
        let d = point_load_deflection(p, l / 2.0, l, l / 2.0, ei);
        assert!(approx_eq(d, p * l.powi(3) / (48.0 * ei), 1e-12));
    }

    #[test]
    fn test_point_load_deflection_continuous_at_load() {
        let (p, a, l, ei) = (500.0_f64, 0.7_f64, 2.0_f64, 1.0e5_f64);
        let left = point_load_deflection(p, a, l, a, ei);
        let right = point_load_deflection(p, a, l, a + 1e-9, ei);
        assert!(approx_eq(left, right, 1e-6));
    }

    #[test]
    fn test_point_load_deflection_zero_at_supports() {
        let (p, a, l, ei) = (500.0_f64, 0.7_f64, 2.0_f64, 1.0e5_f64);
        assert!(point_load_deflection(p, a, l, 0.0, ei).abs() < 1e-15);
        assert!(point_load_deflection(p, a, l, l, ei).abs() < 1e-15);
    }

    #[test]
    fn test_uniform_load_curves() {
        let (w, l) = (100.0_f64, 10.0_f64);
        assert!(approx_eq(uniform_load_shear(w, l, 0.0), 500.0, 1e-12));
        assert!(approx_eq(uniform_load_shear(w, l, l), -500.0, 1e-12));
        assert!(approx_eq(uniform_load_moment(w, l, 5.0), 1250.0, 1e-12));
        assert!(approx_eq(uniform_load_max_moment(w, l), 1250.0, 1e-12));
        assert!(approx_eq(uniform_load_max_shear(w, l), 500.0, 1e-12));
    }

    #[test]
    fn test_total_load_deflection_matches_intensity_form() {
        let (w, l, ei) = (2500.0_f64, 2.0_f64, 3.0e5_f64);
        let from_total = total_load_deflection(w * l, l, ei);
        let from_intensity = 5.0 * w * l.powi(4) / (384.0 * ei);
        assert!(approx_eq(from_total, from_intensity, 1e-12));
    }

    #[test]
    fn test_frame_headline_deflection() {
        let d = frame_headline_deflection(384.0, 1.0, 5.0);
        assert!(approx_eq(d, 1.0, 1e-12));
    }
}
