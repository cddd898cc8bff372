//! # File I/O Module
//!
//! Handles project file operations with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility
//!
//! ## File Format
//!
//! Projects are saved as `.bfa` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use frame_core::file_io::{save_project, load_project};
//! use frame_core::project::AnalysisProject;
//! use std::path::Path;
//!
//! let project = AnalysisProject::new("Engineer", "25-001", "Client");
//! let path = Path::new("skid.bfa");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), frame_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::project::{AnalysisProject, PROJECT_EXTENSION, SCHEMA_VERSION};

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to the target (atomic on most filesystems)
///
/// # Example
///
/// ```rust,no_run
/// use frame_core::file_io::save_project;
/// use frame_core::project::AnalysisProject;
/// use std::path::Path;
///
/// let project = AnalysisProject::new("Engineer", "25-001", "Client");
/// save_project(&project, Path::new("myproject.bfa"))?;
/// # Ok::<(), frame_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &AnalysisProject, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project)?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("saved project {} to {}", project.meta.job_id, path.display());
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(AnalysisProject)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<AnalysisProject> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let project: AnalysisProject = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&project.meta.version)?;

    debug!("loaded project {} (schema {})", project.meta.job_id, project.meta.version);
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
///
/// The major version must match; while the schema is 0.x, a newer minor
/// version is rejected as well.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(&file_major), Some(&current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if current_major == 0 {
        if let (Some(&file_minor), Some(&current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
