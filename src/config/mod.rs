//! Configuration management module
//!
//! Handles YAML configuration parsing, JSON schema validation, and logic checks

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::system::System;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base directory; per-package working directories derive from it
    pub datadir: String,

    /// Info file names read from the info repository, in order
    #[serde(default = "default_info_files")]
    pub info_files: Vec<String>,

    /// Remote info repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_repo: Option<String>,

    /// Cache base directory for remote info checkouts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<String>,

    /// Preprocessing command lines, executed in order before a package build
    #[serde(default)]
    pub custom_preprocess: Vec<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }

    /// Base directory with a leading `~` expanded
    #[must_use]
    pub fn datadir_path(&self) -> PathBuf {
        expand_tilde(&self.datadir)
    }

    /// Cache base directory with a leading `~` expanded, when configured
    #[must_use]
    pub fn cache_path(&self) -> Option<PathBuf> {
        self.cache_dir.as_deref().map(expand_tilde)
    }
}

fn default_info_files() -> Vec<String> {
    return vec!["packages.yml".to_owned()];
}
