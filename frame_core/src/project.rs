//! # Project Data Structures
//!
//! The `AnalysisProject` struct is the root container for one analysis.
//! Projects serialize to `.bfa` (base frame analysis) files as human-readable
//! JSON.
//!
//! ## Structure
//!
//! ```text
//! AnalysisProject
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (input defaults, display unit)
//! └── input: AnalysisInput (configuration, loads, sections, profile, material)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use frame_core::project::AnalysisProject;
//!
//! let project = AnalysisProject::new("Jane Engineer", "25-042", "ACME Corp");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("25-042"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{Analysis, AnalysisInput};
use crate::settings::InputDefaults;
use crate::units::ForceUnit;
use crate::warnings::InputWarning;

/// Current schema version for .bfa files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "bfa";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisProject {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Defaults and display preferences
    #[serde(default)]
    pub settings: GlobalSettings,

    /// The analysis request
    pub input: AnalysisInput,
}

impl AnalysisProject {
    /// Create a new project with a default input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use frame_core::project::AnalysisProject;
    ///
    /// let project = AnalysisProject::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        AnalysisProject {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            input: AnalysisInput::default(),
        }
    }

    /// Replace the analysis input and return self (builder pattern)
    pub fn with_input(mut self, input: AnalysisInput) -> Self {
        self.input = input;
        self.touch();
        self
    }

    /// Replace the analysis input
    pub fn set_input(&mut self, input: AnalysisInput) {
        self.input = input;
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Analyze the input with this project's defaults
    pub fn analyze(&self) -> Analysis {
        self.input.analyze(&self.settings.defaults)
    }

    /// Input warnings for the stored analysis
    pub fn warnings(&self) -> Vec<InputWarning> {
        self.input.warnings()
    }
}

impl Default for AnalysisProject {
    fn default() -> Self {
        AnalysisProject::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Normalization fallbacks handed to the engine
    pub defaults: InputDefaults,

    /// Unit used when showing forces to the user
    pub display_unit: ForceUnit,
}

impl GlobalSettings {
    /// Convert a force in N to the display unit
    pub fn display_force(&self, newtons: f64) -> f64 {
        self.display_unit.from_newtons(newtons)
    }
}
