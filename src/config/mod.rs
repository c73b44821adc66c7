// src/config/mod.rs

//! Roadmap file loading and validation for trailmap.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a roadmap file from disk (`loader.rs`).
//! - Validate basic invariants like graph acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{MetaSection, NodeConfig, RawRoadmapFile, Resources, RoadmapFile};
pub use validate::validate_roadmap;
