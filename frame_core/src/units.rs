//! # Unit Types
//!
//! Type-safe wrappers for engineering units plus the force-unit selector used
//! by loads and frame sections.
//!
//! ## Internal Units
//!
//! All engine arithmetic runs in SI base units:
//! - Length: meters (user inputs arrive in millimeters and are divided by 1000)
//! - Force: Newtons (kgf and lbf inputs are converted on entry)
//! - Moment: Newton-meters
//! - Stress: reported in MPa
//!
//! ## Example
//!
//! ```rust
//! use frame_core::units::{ForceUnit, Meters, Millimeters};
//!
//! let length = Millimeters(2500.0);
//! let meters: Meters = length.into();
//! assert_eq!(meters.0, 2.5);
//!
//! assert!((ForceUnit::Kgf.to_newtons(10.0) - 98.1).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard gravity used for every weight conversion (m/s²)
pub const GRAVITY_M_S2: f64 = 9.81;

/// Newtons per kilogram-force
pub const NEWTONS_PER_KGF: f64 = 9.81;

/// Newtons per pound-force
pub const NEWTONS_PER_LBF: f64 = 4.44822;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters (user-facing geometry)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters (engine-internal geometry)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

/// Convert a millimeter value straight to meters
#[inline]
pub fn mm_to_m(mm: f64) -> f64 {
    Meters::from(Millimeters(mm)).0
}

/// Convert a meter value straight to millimeters
#[inline]
pub fn m_to_mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).0
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in Newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilograms-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilogramsForce(pub f64);

/// Force in pounds-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoundsForce(pub f64);

impl From<KilogramsForce> for Newtons {
    fn from(kgf: KilogramsForce) -> Self {
        Newtons(kgf.0 * NEWTONS_PER_KGF)
    }
}

impl From<Newtons> for KilogramsForce {
    fn from(n: Newtons) -> Self {
        KilogramsForce(n.0 / NEWTONS_PER_KGF)
    }
}

impl From<PoundsForce> for Newtons {
    fn from(lbf: PoundsForce) -> Self {
        Newtons(lbf.0 * NEWTONS_PER_LBF)
    }
}

impl From<Newtons> for PoundsForce {
    fn from(n: Newtons) -> Self {
        PoundsForce(n.0 / NEWTONS_PER_LBF)
    }
}

/// Unit a user-entered force (or weight) is expressed in.
///
/// Line and area loads use the same selector for their numerator, so a
/// uniform load in `Kgf` is read as kgf per meter.
///
/// ## JSON
///
/// ```json
/// "N"   "kgf"   "lbf"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Newtons
    #[default]
    #[serde(rename = "N")]
    Newton,
    /// Kilograms-force (1 kgf = 9.81 N)
    #[serde(rename = "kgf")]
    Kgf,
    /// Pounds-force (1 lbf = 4.44822 N)
    #[serde(rename = "lbf")]
    Lbf,
}

impl ForceUnit {
    /// All supported force units
    pub const ALL: [ForceUnit; 3] = [ForceUnit::Newton, ForceUnit::Kgf, ForceUnit::Lbf];

    /// Convert a value expressed in this unit to Newtons
    pub fn to_newtons(self, value: f64) -> f64 {
        match self {
            ForceUnit::Newton => value,
            ForceUnit::Kgf => Newtons::from(KilogramsForce(value)).0,
            ForceUnit::Lbf => Newtons::from(PoundsForce(value)).0,
        }
    }

    /// Convert a value in Newtons to this unit
    pub fn from_newtons(self, newtons: f64) -> f64 {
        match self {
            ForceUnit::Newton => newtons,
            ForceUnit::Kgf => KilogramsForce::from(Newtons(newtons)).0,
            ForceUnit::Lbf => PoundsForce::from(Newtons(newtons)).0,
        }
    }

    /// Unit symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kgf => "kgf",
            ForceUnit::Lbf => "lbf",
        }
    }
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for ForceUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "newton" | "newtons" => Ok(ForceUnit::Newton),
            "kgf" | "kg" | "kilogram-force" => Ok(ForceUnit::Kgf),
            "lbf" | "lb" | "pound-force" => Ok(ForceUnit::Lbf),
            _ => Err(CalcError::invalid_input(
                "force_unit",
                s,
                "Expected one of N, kgf, lbf",
            )),
        }
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KilogramsForce);
impl_arithmetic!(PoundsForce);
