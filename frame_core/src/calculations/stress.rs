//! # Stress & Safety Evaluator
//!
//! Turns solver extremes and section properties into member stresses, a
//! yield-based safety factor and the headline deflection.
//!
//! ## Formulas
//!
//! - σ = M / S (bending, extreme fiber)
//! - τ = 1.5 · V / A (peak shear, same factor for every profile)
//! - SF = f_y / σ
//!
//! Every division is guarded; nothing here returns NaN.

use serde::{Deserialize, Serialize};

use crate::calculations::cross_section::SectionProperties;

/// Pa per MPa
const PA_PER_MPA: f64 = 1e6;

/// Peak-to-average ratio applied to the mean shear stress
pub const SHEAR_STRESS_FACTOR: f64 = 1.5;

/// Bending stress σ = M / S (MPa). Zero when `S ≤ 0`.
#[inline]
pub fn normal_stress_mpa(moment_nm: f64, section_modulus_m3: f64) -> f64 {
    if section_modulus_m3 > 0.0 {
        moment_nm / section_modulus_m3 / PA_PER_MPA
    } else {
        0.0
    }
}

/// Shear stress τ = 1.5 · V / A (MPa). Zero when `A ≤ 0`.
#[inline]
pub fn shear_stress_mpa(shear_n: f64, area_m2: f64) -> f64 {
    if area_m2 > 0.0 {
        SHEAR_STRESS_FACTOR * shear_n / area_m2 / PA_PER_MPA
    } else {
        0.0
    }
}

/// Yield strength over bending stress.
///
/// - `yield ≤ 0`: exactly 0, no division
/// - `σ = 0` with positive yield: `f64::INFINITY` (unloaded member)
///
/// # Example
/// ```rust
/// use frame_core::calculations::stress::safety_factor;
///
/// assert_eq!(safety_factor(235.0, 117.5), 2.0);
/// assert_eq!(safety_factor(0.0, 117.5), 0.0);
/// assert!(safety_factor(235.0, 0.0).is_infinite());
/// ```
#[inline]
pub fn safety_factor(yield_strength_mpa: f64, normal_stress_mpa: f64) -> f64 {
    if yield_strength_mpa <= 0.0 {
        0.0
    } else if normal_stress_mpa == 0.0 {
        f64::INFINITY
    } else {
        yield_strength_mpa / normal_stress_mpa.abs()
    }
}

/// Stress check of one member.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressCheck {
    pub max_normal_stress_mpa: f64,
    pub max_shear_stress_mpa: f64,
    pub safety_factor: f64,
}

impl StressCheck {
    /// Evaluate stresses for the given extremes.
    pub fn evaluate(max_moment_nm: f64, max_shear_n: f64, section: &SectionProperties, yield_strength_mpa: f64) -> Self {
        let sigma = normal_stress_mpa(max_moment_nm, section.section_modulus_m3);
        StressCheck {
            max_normal_stress_mpa: sigma,
            max_shear_stress_mpa: shear_stress_mpa(max_shear_n, section.area_m2),
            safety_factor: safety_factor(yield_strength_mpa, sigma),
        }
    }

    /// Whether the bending stress stays below yield
    pub fn passes(&self) -> bool {
        self.safety_factor >= 1.0
    }
}
