//! Preprocessing environment construction

use crate::error::DriverError;
use anyhow::{Context as _, Result};
use regex::Regex;

/// Always present: the package being processed
pub const ENV_PACKAGE_NAME: &str = "PKGPREP_PACKAGE_NAME";
/// Always present: per-package distro-git working directory
pub const ENV_DISTGIT: &str = "PKGPREP_DISTGIT";
/// Present when a prior metadata retrieval recorded the info file path
pub const ENV_INFO_REPO: &str = "PKGPREP_INFO_REPO";
/// Always present: per-package upstream source directory
pub const ENV_SOURCEDIR: &str = "PKGPREP_SOURCEDIR";
/// Present when the caller supplied the source commit being built
pub const ENV_SOURCE_COMMIT: &str = "PKGPREP_SOURCE_COMMIT";
/// Present when the invoking user is resolvable from the environment
pub const ENV_USER: &str = "PKGPREP_USER";

/// Inputs to environment construction for one preprocessing run
#[derive(Debug, Clone, Copy)]
pub struct EnvContext<'run> {
    pub package_name: &'run str,
    pub distgit_dir: &'run str,
    pub info_path: Option<&'run str>,
    pub source_dir: &'run str,
    pub commit_hash: Option<&'run str>,
    pub user: Option<&'run str>,
}

/// Build the environment assignments for a preprocessing run
///
/// The key order is part of the contract. Optional entries are filtered
/// out when their input is absent; an absent input never yields an empty
/// or placeholder assignment.
#[must_use]
pub fn build_env(ctx: &EnvContext<'_>) -> Vec<(String, String)> {
    let entries = [
        (ENV_PACKAGE_NAME, Some(ctx.package_name)),
        (ENV_DISTGIT, Some(ctx.distgit_dir)),
        (ENV_INFO_REPO, ctx.info_path),
        (ENV_SOURCEDIR, Some(ctx.source_dir)),
        (ENV_SOURCE_COMMIT, ctx.commit_hash),
        (ENV_USER, ctx.user),
    ];

    entries
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_owned(), v.to_owned())))
        .collect()
}

/// Validate a package name before deriving filesystem paths from it
pub fn validate_package_name(name: &str) -> Result<()> {
    let pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._+-]*$")
        .context("Failed to compile package name pattern")?;

    if !pattern.is_match(name) {
        return Err(DriverError::configuration(format!(
            "Invalid package name: '{name}'"
        ))
        .into());
    }

    Ok(())
}
