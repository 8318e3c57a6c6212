//! Configuration loading, parsing, and validation for envdoctor.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envdoctor::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".envdoctor");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "app_name: test").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.app_name, Some("test".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! envdoctor discovers and merges configuration in this order:
//! 1. Project config (`.envdoctor/config.yml`)
//! 2. Local overrides (`.envdoctor/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{CheckConfig, CheckKind, DoctorConfig, OutputMode, Settings};

// Loader re-exports
pub use loader::{
    find_project_root, load_config, load_config_file, load_merged_config, parse_config,
    resolve_project_root, ConfigPaths, CONFIG_DIR,
};

// Merger re-exports
pub use merger::{merge, merge_configs};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
