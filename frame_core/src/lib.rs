//! # frame_core - Beam & Base Frame Analysis Engine
//!
//! `frame_core` computes support reactions, internal-force diagrams, member
//! stresses, deflection and a yield safety factor for two structural systems:
//!
//! - a **simple beam** on two supports (overhangs allowed)
//! - a **base frame**: four members forming a rectangle, supported at the
//!   corners, with loads split between the corners by the area method
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Never fails**: Unusable numbers are replaced by caller-supplied
//!   defaults; degenerate geometry contributes zero
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **SI inside**: Users enter mm and N/kgf/lbf; solvers work in N and m
//!
//! ## Quick Start
//!
//! ```rust
//! use frame_core::{compute_diagrams, compute_results};
//! use frame_core::calculations::{AnalysisConfiguration, CrossSectionProfile};
//! use frame_core::loads::Load;
//! use frame_core::materials::Material;
//! use frame_core::settings::InputDefaults;
//!
//! let defaults = InputDefaults::default();
//! let config = AnalysisConfiguration::BaseFrame { length_mm: 2000.0, width_mm: 1000.0 };
//! let loads = [Load::point(5000.0, 1000.0)];
//! let profile = CrossSectionProfile::Rectangular { width_mm: 100.0, height_mm: 218.0 };
//! let material = Material::SteelS235;
//!
//! let results = compute_results(&config, &loads, &[], &profile, &material, 7850.0, &defaults);
//! assert!((results.corner_reactions.total() - results.total_applied_load_n).abs() < 1e-6);
//!
//! let diagrams = compute_diagrams(&config, &loads, &results, &material, &defaults);
//! assert_eq!(diagrams.moment.len(), 100);
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - `compute_results` / `compute_diagrams` entry points
//! - [`calculations`] - Cross-section, beam, frame, stress and diagram solvers
//! - [`equations`] - Closed-form structural formulas
//! - [`loads`] - Load and frame-section definitions
//! - [`materials`] - Material presets and custom properties
//! - [`normalize`] - Input normalization
//! - [`settings`] - Normalization defaults
//! - [`units`] - Force units and type-safe unit wrappers
//! - [`warnings`] - Advisory input warnings
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - Atomic project saves and version-checked loads
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod engine;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod normalize;
pub mod project;
pub mod settings;
pub mod units;
pub mod warnings;

// Re-export commonly used types at crate root for convenience
pub use engine::{compute_diagrams, compute_results, Analysis, AnalysisInput, AnalysisResults};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use project::{AnalysisProject, GlobalSettings, ProjectMetadata};
pub use settings::InputDefaults;
