//! Package info model and provider contract
//!
//! The info repository is a git repository (or local checkout) holding YAML
//! files that list the trackable packages. A provider materializes those
//! files and parses them; the driver decides where the provider looks.

pub mod git;
pub mod mock;

pub use git::GitInfoProvider;
pub use mock::MockProvider;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Info repository used when neither a local path nor a URL is supplied
pub const DEFAULT_INFO_REPO: &str = "https://github.com/tixena/pkgprep-info";

/// A single trackable package, as defined in the info repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package name, unique within an info source
    pub name: String,
    /// Upstream source location
    pub upstream: String,
    /// Distro-git location holding packaging metadata
    pub distgit: String,
}

/// Where the info repository is addressed
///
/// Resolved once from argument and configuration precedence, then carried
/// verbatim in the provider request so the call shape stays observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoLocation {
    /// Local checkout supplied as an argument
    LocalPath(PathBuf),
    /// Remote URL supplied by configuration
    RemoteGit(String),
    /// Built-in default remote
    DefaultRemote,
}

impl InfoLocation {
    /// Resolve the location by precedence: argument > configured URL > default
    #[must_use]
    pub fn resolve(local_info_repo: Option<&Path>, configured_repo: Option<&str>) -> Self {
        if let Some(path) = local_info_repo {
            return Self::LocalPath(path.to_path_buf());
        }
        if let Some(url) = configured_repo {
            return Self::RemoteGit(url.to_owned());
        }
        Self::DefaultRemote
    }

    /// The remote URL to fetch, if this location is remote
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::LocalPath(_) => None,
            Self::RemoteGit(url) => Some(url),
            Self::DefaultRemote => Some(DEFAULT_INFO_REPO),
        }
    }
}

/// Provider call contract
///
/// `cache_base` is always carried; `None` is the explicit absence marker,
/// letting the provider pick its own default cache location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRequest {
    pub info_files: Vec<String>,
    pub location: InfoLocation,
    pub cache_base: Option<PathBuf>,
}

/// Result of materializing and parsing the info repository
#[derive(Debug, Clone)]
pub struct InfoSnapshot {
    /// Parsed packages, in info-file order
    pub packages: Vec<PackageMetadata>,
    /// Local path of the primary info file after the fetch
    pub info_path: PathBuf,
}

/// Package metadata provider
pub trait InfoProvider {
    /// Fetch and parse the info files named by the request
    fn fetch(&self, request: &InfoRequest) -> Result<InfoSnapshot>;
}
