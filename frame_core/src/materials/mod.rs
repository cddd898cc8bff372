//! # Materials
//!
//! Named material presets and the user-defined `Custom` variant.
//!
//! Preset values are fixed; only `Custom` carries caller-supplied numbers.
//! Values are typical nominal properties for preliminary sizing.
//!
//! ## Example
//!
//! ```rust
//! use frame_core::materials::Material;
//!
//! let steel = Material::SteelS235;
//! let props = steel.properties();
//! assert_eq!(props.yield_strength_mpa, 235.0);
//! assert_eq!(props.elastic_modulus_pa(), 210.0e9);
//!
//! let found = Material::from_name("al 6061-t6").unwrap();
//! assert_eq!(found, Material::Aluminum6061T6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::normalize::normalize_number;

/// Mechanical and physical properties of a member material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Elastic (Young's) modulus (GPa)
    pub elastic_modulus_gpa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Poisson's ratio (dimensionless)
    pub poissons_ratio: f64,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion: f64,
}

impl MaterialProperties {
    /// Elastic modulus in Pa
    pub fn elastic_modulus_pa(&self) -> f64 {
        self.elastic_modulus_gpa * 1e9
    }

    /// Replace non-finite fields with zero.
    ///
    /// Zero and negative values are kept: the stress evaluator guards
    /// `yield ≤ 0` and `E·I ≤ 0` itself.
    pub fn normalized(&self) -> Self {
        MaterialProperties {
            yield_strength_mpa: normalize_number(self.yield_strength_mpa, 0.0),
            elastic_modulus_gpa: normalize_number(self.elastic_modulus_gpa, 0.0),
            density_kg_m3: normalize_number(self.density_kg_m3, 0.0),
            poissons_ratio: normalize_number(self.poissons_ratio, 0.0),
            thermal_expansion: normalize_number(self.thermal_expansion, 0.0),
        }
    }
}

const fn props(yield_mpa: f64, e_gpa: f64, density: f64, nu: f64, alpha: f64) -> MaterialProperties {
    MaterialProperties {
        yield_strength_mpa: yield_mpa,
        elastic_modulus_gpa: e_gpa,
        density_kg_m3: density,
        poissons_ratio: nu,
        thermal_expansion: alpha,
    }
}

const STEEL_S235: MaterialProperties = props(235.0, 210.0, 7850.0, 0.30, 12.0e-6);
const STEEL_S275: MaterialProperties = props(275.0, 210.0, 7850.0, 0.30, 12.0e-6);
const STEEL_S355: MaterialProperties = props(355.0, 210.0, 7850.0, 0.30, 12.0e-6);
const STEEL_A36: MaterialProperties = props(250.0, 200.0, 7850.0, 0.26, 11.7e-6);
const STAINLESS_304: MaterialProperties = props(215.0, 193.0, 8000.0, 0.29, 17.3e-6);
const ALUMINUM_6061_T6: MaterialProperties = props(276.0, 68.9, 2700.0, 0.33, 23.6e-6);
const ALUMINUM_6063_T6: MaterialProperties = props(214.0, 68.9, 2700.0, 0.33, 23.4e-6);

/// Member material: a named preset or custom properties.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "SteelS355" }
///
/// {
///   "type": "Custom",
///   "yield_strength_mpa": 300.0,
///   "elastic_modulus_gpa": 205.0,
///   "density_kg_m3": 7800.0,
///   "poissons_ratio": 0.3,
///   "thermal_expansion": 1.2e-5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// EN 10025 S235 structural steel
    SteelS235,
    /// EN 10025 S275 structural steel
    SteelS275,
    /// EN 10025 S355 structural steel
    SteelS355,
    /// ASTM A36 structural steel
    SteelA36,
    /// AISI 304 stainless steel (annealed)
    StainlessSteel304,
    /// Aluminum 6061-T6
    Aluminum6061T6,
    /// Aluminum 6063-T6
    Aluminum6063T6,
    /// User-defined properties
    Custom(MaterialProperties),
}

impl Default for Material {
    fn default() -> Self {
        Material::SteelS235
    }
}

impl Material {
    /// All named presets (excludes `Custom`)
    pub const ALL_PRESETS: [Material; 7] = [
        Material::SteelS235,
        Material::SteelS275,
        Material::SteelS355,
        Material::SteelA36,
        Material::StainlessSteel304,
        Material::Aluminum6061T6,
        Material::Aluminum6063T6,
    ];

    /// Property set for this material
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::SteelS235 => STEEL_S235,
            Material::SteelS275 => STEEL_S275,
            Material::SteelS355 => STEEL_S355,
            Material::SteelA36 => STEEL_A36,
            Material::StainlessSteel304 => STAINLESS_304,
            Material::Aluminum6061T6 => ALUMINUM_6061_T6,
            Material::Aluminum6063T6 => ALUMINUM_6063_T6,
            Material::Custom(props) => *props,
        }
    }

    /// Short code (e.g., "S355", "AL6061-T6")
    pub fn code(&self) -> &'static str {
        match self {
            Material::SteelS235 => "S235",
            Material::SteelS275 => "S275",
            Material::SteelS355 => "S355",
            Material::SteelA36 => "A36",
            Material::StainlessSteel304 => "SS304",
            Material::Aluminum6061T6 => "AL6061-T6",
            Material::Aluminum6063T6 => "AL6063-T6",
            Material::Custom(_) => "CUSTOM",
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> &'static str {
        match self {
            Material::SteelS235 => "Structural Steel S235",
            Material::SteelS275 => "Structural Steel S275",
            Material::SteelS355 => "Structural Steel S355",
            Material::SteelA36 => "Structural Steel A36",
            Material::StainlessSteel304 => "Stainless Steel 304",
            Material::Aluminum6061T6 => "Aluminum 6061-T6",
            Material::Aluminum6063T6 => "Aluminum 6063-T6",
            Material::Custom(_) => "Custom",
        }
    }

    /// Whether this material carries user-supplied values
    pub fn is_custom(&self) -> bool {
        matches!(self, Material::Custom(_))
    }

    /// Look up a preset by code or display name (case-insensitive).
    ///
    /// Spaces are ignored, so "AL 6061-T6" matches "AL6061-T6".
    pub fn from_name(name: &str) -> CalcResult<Material> {
        let wanted = squash(name);
        Material::ALL_PRESETS
            .iter()
            .copied()
            .find(|m| squash(m.code()) == wanted || squash(m.display_name()) == wanted)
            .ok_or_else(|| CalcError::material_not_found(name))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_physical() {
        for mat in Material::ALL_PRESETS {
            let p = mat.properties();
            assert!(p.yield_strength_mpa > 0.0, "{}", mat.display_name());
            assert!(p.elastic_modulus_gpa > 0.0);
            assert!(p.density_kg_m3 > 0.0);
            assert!(p.poissons_ratio > 0.0 && p.poissons_ratio < 0.5);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Material::from_name("S355").unwrap(), Material::SteelS355);
        assert_eq!(Material::from_name("stainless steel 304").unwrap(), Material::StainlessSteel304);
        assert_eq!(Material::from_name("Al 6063-T6").unwrap(), Material::Aluminum6063T6);

        let err = Material::from_name("balsa").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_custom_normalization() {
        let custom = MaterialProperties {
            yield_strength_mpa: f64::NAN,
            elastic_modulus_gpa: 200.0,
            density_kg_m3: f64::INFINITY,
            poissons_ratio: 0.3,
            thermal_expansion: 1.2e-5,
        };
        let n = Material::Custom(custom).properties().normalized();
        assert_eq!(n.yield_strength_mpa, 0.0);
        assert_eq!(n.elastic_modulus_gpa, 200.0);
        assert_eq!(n.density_kg_m3, 0.0);
    }

    #[test]
    fn test_zero_yield_survives_normalization() {
        let custom = MaterialProperties {
            yield_strength_mpa: 0.0,
            ..Material::SteelS235.properties()
        };
        assert_eq!(custom.normalized().yield_strength_mpa, 0.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Material::SteelS355).unwrap();
        assert_eq!(json, r#"{"type":"SteelS355"}"#);

        let custom = Material::Custom(Material::SteelA36.properties());
        let json = serde_json::to_string(&custom).unwrap();
        assert!(json.contains("\"Custom\""));
        let roundtrip: Material = serde_json::from_str(&json).unwrap();
        assert!(roundtrip.is_custom());
        assert_eq!(roundtrip.properties().yield_strength_mpa, 250.0);
        assert_eq!(roundtrip.properties().density_kg_m3, 7850.0);
    }
}
