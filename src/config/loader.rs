// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{RawRoadmapFile, RoadmapFile};
use crate::errors::Result;

/// Load a roadmap file from a given path and return the raw `RawRoadmapFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (graph correctness, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawRoadmapFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let roadmap: RawRoadmapFile = toml::from_str(&contents)?;

    Ok(roadmap)
}

/// Load a roadmap file from path and run basic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - unknown `after` references,
///   - cycles in the dependency graph,
///   - difficulty out of range.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<RoadmapFile> {
    let raw = load_from_path(&path)?;
    let roadmap = RoadmapFile::try_from(raw)?;
    Ok(roadmap)
}

/// Helper to resolve a default roadmap path.
///
/// Currently this just returns `Roadmap.toml` in the current working
/// directory; it exists so that project-local discovery can be added later
/// without touching callers.
pub fn default_roadmap_path() -> PathBuf {
    PathBuf::from("Roadmap.toml")
}
