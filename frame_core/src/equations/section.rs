//! # Cross-Section Property Formulas
//!
//! Geometric properties of the supported member profiles. Every function
//! takes dimensions in one consistent length unit (the engine passes meters)
//! and returns area, second moment of area or section modulus in the
//! matching squared, fourth-power or cubed unit.
//!
//! Bending is always about the horizontal axis, so `h` (or `d`) is the
//! bending-resisting dimension.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about the horizontal centroidal axis
//! - `S` = Section modulus (I/c, c = distance to extreme fiber)
//! - `w`, `h` = Rectangle width and height
//! - `bf`, `tf` = Flange width and thickness
//! - `tw` = Web thickness
//! - `d` = Diameter
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          w
/// ```
///
/// # Formula
/// A = w × h
#[inline]
pub fn rectangular_area(w: f64, h: f64) -> f64 {
    w * h
}

/// Second moment of area of a solid rectangle
///
/// # Formula
/// I = w·h³/12
///
/// # Example
/// ```rust
/// use frame_core::equations::section::rectangular_moment_of_inertia;
///
/// // 100 x 218 mm section, in meters
/// let i = rectangular_moment_of_inertia(0.1, 0.218);
/// assert!((i - 8.6334e-5).abs() < 1e-8);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(w: f64, h: f64) -> f64 {
    w * h.powi(3) / 12.0
}

// =============================================================================
// FLANGED SECTIONS (I-BEAM, C-CHANNEL)
// =============================================================================

/// Area of a flanged section (two flanges plus a web)
///
/// ```text
///     ┌───────────┐  ─┬─ tf
///     └───┐   ┌───┘   │
///         │   │       │
///       h │tw │       │
///         │   │       │
///     ┌───┘   └───┐   │
///     └───────────┘  ─┴─
///          bf
/// ```
///
/// # Formula
/// A = 2·bf·tf + (h − 2·tf)·tw
#[inline]
pub fn flanged_area(h: f64, bf: f64, tf: f64, tw: f64) -> f64 {
    2.0 * bf * tf + (h - 2.0 * tf) * tw
}

/// Second moment of area of a flanged section
///
/// Both flanges are moved to the centroidal axis with the parallel-axis
/// theorem; the web is a centered rectangle of height `h − 2·tf`.
///
/// # Formula
/// ```text
/// I = 2·(bf·tf³/12 + bf·tf·((h − tf)/2)²) + tw·(h − 2·tf)³/12
/// ```
///
/// C-channels are evaluated with this same decomposition. About the
/// horizontal axis a channel's flanges sit at the same lever arm as an
/// I-beam's, so the web offset is ignored.
#[inline]
pub fn flanged_moment_of_inertia(h: f64, bf: f64, tf: f64, tw: f64) -> f64 {
    let flange_own = bf * tf.powi(3) / 12.0;
    let lever_arm = (h - tf) / 2.0;
    let flange_transfer = bf * tf * lever_arm * lever_arm;
    let web = tw * (h - 2.0 * tf).powi(3) / 12.0;
    2.0 * (flange_own + flange_transfer) + web
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Area of a solid circle
///
/// # Formula
/// A = π·(d/2)²
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * (d / 2.0).powi(2)
}

/// Second moment of area of a solid circle
///
/// # Formula
/// I = π·d⁴/64
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Elastic section modulus from I and the extreme fiber distance
///
/// # Formula
/// S = I / c
///
/// Every supported profile is symmetric about the bending axis, so `c` is
/// half the depth (or half the diameter).
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        ((a - b) / b).abs() < tol
    }

    #[test]
    fn test_rectangle() {
        let (w, h) = (0.1_f64, 0.218_f64);
        assert!(approx_eq(rectangular_area(w, h), 0.0218, 1e-12));

        let i = rectangular_moment_of_inertia(w, h);
        assert!(approx_eq(i, 0.1 * 0.218_f64.powi(3) / 12.0, 1e-12));

        // S = I/(h/2) collapses to w·h²/6
        let s = section_modulus(i, h / 2.0);
        assert!(approx_eq(s, w * h * h / 6.0, 1e-12));
    }

    #[test]
    fn test_flanged_section_ipe200() {
        // IPE 200: h=200, bf=100, tf=8.5, tw=5.6 (mm)
        let (h, bf, tf, tw) = (0.2_f64, 0.1_f64, 0.0085_f64, 0.0056_f64);
        let a = flanged_area(h, bf, tf, tw);
        // 2·100·8.5 + 183·5.6 = 1700 + 1024.8 = 2724.8 mm²
        assert!(approx_eq(a, 2724.8e-6, 1e-9));

        let i = flanged_moment_of_inertia(h, bf, tf, tw);
        // Root fillets are ignored, so this lands a little under the catalogue 1943 cm⁴
        assert!(i > 1.6e-5 && i < 1.95e-5);
    }

    #[test]
    fn test_flanged_section_degenerates_to_rectangle() {
        // A "flanged" section whose web is as wide as the flanges is a solid rectangle
        let (h, b, tf) = (0.3_f64, 0.12_f64, 0.02_f64);
        let i = flanged_moment_of_inertia(h, b, tf, b);
        assert!(approx_eq(i, rectangular_moment_of_inertia(b, h), 1e-9));
        assert!(approx_eq(flanged_area(h, b, tf, b), rectangular_area(b, h), 1e-12));
    }

    #[test]
    fn test_circle() {
        let d = 0.06_f64;
        assert!(approx_eq(circular_area(d), PI * 0.03 * 0.03, 1e-12));
        let i = circular_moment_of_inertia(d);
        assert!(approx_eq(i, PI * d.powi(4) / 64.0, 1e-12));
        // S = π·d³/32
        assert!(approx_eq(section_modulus(i, d / 2.0), PI * d.powi(3) / 32.0, 1e-12));
    }
}
