// src/paths.rs

//! Locating the progress database on disk.
//!
//! Candidates are probed in order:
//! 1. explicit `--db` value
//! 2. `TRAILMAP_DB` environment variable
//! 3. `<platform data dir>/trailmap/progress.db` (e.g. `~/.local/share` on
//!    Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on
//!    Windows)
//! 4. `./trailmap-progress.db` in the current working directory
//!
//! The first candidate whose parent directory exists or can be created
//! wins; the cwd fallback is always accepted.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Database file name inside the platform data directory.
const DATA_DIR_NAME: &str = "trailmap";
const DB_FILE_NAME: &str = "progress.db";

/// Fallback file name used when no platform data directory is available.
const CWD_DB_FILE_NAME: &str = "trailmap-progress.db";

/// Resolve the effective database path.
pub fn resolve_db_path(cli_override: Option<&str>) -> PathBuf {
    if let Some(path) = cli_override {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("TRAILMAP_DB") {
        if !path.trim().is_empty() {
            debug!(path = %path, "using TRAILMAP_DB database path");
            return PathBuf::from(path);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join(DATA_DIR_NAME);
        match fs::create_dir_all(&dir) {
            Ok(()) => return dir.join(DB_FILE_NAME),
            Err(err) => {
                warn!(dir = ?dir, error = %err, "cannot create data directory; falling back to cwd");
            }
        }
    }

    PathBuf::from(CWD_DB_FILE_NAME)
}
