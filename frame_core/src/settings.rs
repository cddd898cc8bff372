//! # Input Defaults
//!
//! Fallback values handed to the normalizer. The host owns these (they are
//! stored with each project file) and passes them into every engine call;
//! the engine itself keeps no defaults of its own.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length_mm": 2000.0,
//!   "width_mm": 1000.0,
//!   "load_width_m": 1.0,
//!   "profile": {
//!     "width_mm": 100.0,
//!     "height_mm": 200.0,
//!     "flange_width_mm": 100.0,
//!     "flange_thickness_mm": 8.5,
//!     "web_thickness_mm": 5.6,
//!     "diameter_mm": 60.0
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Fallbacks for every normalized user input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Beam or frame length used when the entered length is unusable (mm)
    pub length_mm: f64,

    /// Frame width used when the entered width is unusable (mm)
    pub width_mm: f64,

    /// Width assumed for a distributed load on a simple beam when the load
    /// carries no usable width (m)
    pub load_width_m: f64,

    /// Cross-section dimension fallbacks
    pub profile: ProfileDefaults,
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            length_mm: 2000.0,
            width_mm: 1000.0,
            load_width_m: 1.0,
            profile: ProfileDefaults::default(),
        }
    }
}

/// Cross-section dimension fallbacks (mm).
///
/// The flanged defaults match an IPE 200.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    pub width_mm: f64,
    pub height_mm: f64,
    pub flange_width_mm: f64,
    pub flange_thickness_mm: f64,
    pub web_thickness_mm: f64,
    pub diameter_mm: f64,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        ProfileDefaults {
            width_mm: 100.0,
            height_mm: 200.0,
            flange_width_mm: 100.0,
            flange_thickness_mm: 8.5,
            web_thickness_mm: 5.6,
            diameter_mm: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let defaults: InputDefaults = serde_json::from_str(r#"{ "length_mm": 3000.0 }"#).unwrap();
        assert_eq!(defaults.length_mm, 3000.0);
        assert_eq!(defaults.width_mm, 1000.0);
        assert_eq!(defaults.profile, ProfileDefaults::default());
    }

    #[test]
    fn test_defaults_are_positive() {
        let d = InputDefaults::default();
        let p = d.profile;
        for v in [
            d.length_mm,
            d.width_mm,
            d.load_width_m,
            p.width_mm,
            p.height_mm,
            p.flange_width_mm,
            p.flange_thickness_mm,
            p.web_thickness_mm,
            p.diameter_mm,
        ] {
            assert!(v > 0.0);
        }
    }
}
