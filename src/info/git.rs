//! Info repository materialization and parsing
//!
//! Remote locations are fetched with the git CLI into a cache checkout;
//! local locations are read in place through the System abstraction.

use crate::error::DriverError;
use crate::info::{InfoLocation, InfoProvider, InfoRequest, InfoSnapshot, PackageMetadata};
use crate::system::System;
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Top-level structure of an info file
#[derive(Debug, Deserialize)]
struct InfoDocument {
    packages: Vec<PackageMetadata>,
}

/// Provider backed by a git-hosted info repository
pub struct GitInfoProvider<'src> {
    system: &'src dyn System,
}

impl<'src> GitInfoProvider<'src> {
    /// Create a provider reading through the given system
    #[must_use]
    pub fn new(system: &'src dyn System) -> Self {
        Self { system }
    }

    /// Materialize the info repository locally and return its root
    fn materialize(&self, request: &InfoRequest) -> Result<PathBuf> {
        match &request.location {
            InfoLocation::LocalPath(path) => {
                if !self.system.is_dir(path) {
                    return Err(DriverError::metadata(format!(
                        "Local info repository is not a directory: {}",
                        path.display()
                    ))
                    .into());
                }
                Ok(path.clone())
            }
            InfoLocation::RemoteGit(_) | InfoLocation::DefaultRemote => {
                let url = request
                    .location
                    .url()
                    .expect("remote location always has a URL");
                self.sync_remote(url, request.cache_base.as_deref())
            }
        }
    }

    /// Clone or update the cache checkout for a remote info repository
    fn sync_remote(&self, url: &str, cache_base: Option<&Path>) -> Result<PathBuf> {
        let cache_root = resolve_cache_root(cache_base)?;
        self.system
            .create_dir_all(&cache_root)
            .map_err(|e| {
                DriverError::filesystem(format!(
                    "Failed to create cache directory {}: {e}",
                    cache_root.display()
                ))
            })?;

        let checkout = cache_root.join(url_slug(url));

        if self.system.is_dir(&checkout) {
            debug!("Updating info repository checkout: {}", checkout.display());
            run_git(&["fetch", "--depth", "1", "origin"], Some(&checkout))?;
            run_git(&["reset", "--hard", "FETCH_HEAD"], Some(&checkout))?;
        } else {
            info!("Cloning info repository {url}");
            // Clone into a scratch directory first so a failed clone never
            // leaves a half-populated checkout in the cache
            let scratch = tempfile::Builder::new()
                .prefix(".sync-")
                .tempdir_in(&cache_root)
                .map_err(|e| {
                    DriverError::filesystem(format!(
                        "Failed to create scratch directory in {}: {e}",
                        cache_root.display()
                    ))
                })?;
            let scratch_path = scratch.path().display().to_string();
            run_git(&["clone", "--depth", "1", url, scratch_path.as_str()], None)?;
            std::fs::rename(scratch.keep(), &checkout).map_err(|e| {
                DriverError::filesystem(format!(
                    "Failed to move checkout into cache {}: {e}",
                    checkout.display()
                ))
            })?;
        }

        Ok(checkout)
    }
}

impl InfoProvider for GitInfoProvider<'_> {
    fn fetch(&self, request: &InfoRequest) -> Result<InfoSnapshot> {
        let primary = request.info_files.first().ok_or_else(|| {
            DriverError::configuration("No info files configured for metadata retrieval")
        })?;

        let root = self.materialize(request)?;

        let mut packages: Vec<PackageMetadata> = Vec::new();
        for file in &request.info_files {
            let path = root.join(file);
            let content = self.system.read_to_string(&path).map_err(|e| {
                DriverError::metadata(format!("Failed to read info file {}: {e}", path.display()))
            })?;
            let document: InfoDocument = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse info file: {}", path.display()))?;
            merge_packages(&mut packages, document.packages);
        }

        debug!("Loaded {} package definitions", packages.len());

        Ok(InfoSnapshot {
            packages,
            info_path: root.join(primary),
        })
    }
}

/// Merge packages from a later info file into the accumulated list
///
/// A later definition replaces an earlier one with the same name, keeping
/// the earlier position; new names append in file order.
fn merge_packages(accumulated: &mut Vec<PackageMetadata>, incoming: Vec<PackageMetadata>) {
    for package in incoming {
        if let Some(existing) = accumulated.iter_mut().find(|p| p.name == package.name) {
            *existing = package;
        } else {
            accumulated.push(package);
        }
    }
}

/// Cache root for remote checkouts
///
/// Falls back to the per-user cache directory when the request carries no
/// cache base.
fn resolve_cache_root(cache_base: Option<&Path>) -> Result<PathBuf> {
    if let Some(base) = cache_base {
        return Ok(base.to_path_buf());
    }
    dirs::cache_dir()
        .map(|dir| dir.join("pkgprep"))
        .ok_or_else(|| {
            DriverError::filesystem("Could not determine a cache directory for info checkouts")
                .into()
        })
}

/// Directory name for a remote URL inside the cache
fn url_slug(url: &str) -> String {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Run a git command, folding stderr into the error on failure
fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<()> {
    let mut command = Command::new("git");
    command.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DriverError::metadata(format!(
            "git {} failed with exit code {}: {}",
            args.join(" "),
            output.status.code().unwrap_or(-1),
            stderr.trim()
        ))
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_slug_uses_last_segment() {
        assert_eq!(
            url_slug("https://github.com/tixena/pkgprep-info"),
            "pkgprep-info"
        );
        assert_eq!(
            url_slug("https://git.example.com/infra/packages.git"),
            "packages"
        );
        assert_eq!(url_slug("https://git.example.com/infra/packages/"), "packages");
    }

    #[test]
    fn test_url_slug_sanitizes_odd_characters() {
        assert_eq!(url_slug("https://example.com/a%20b"), "a-20b");
    }

    #[test]
    fn test_resolve_cache_root_prefers_request_value() {
        let root = resolve_cache_root(Some(Path::new("/var/cache/custom"))).unwrap();
        assert_eq!(root, PathBuf::from("/var/cache/custom"));
    }

    #[test]
    fn test_merge_packages_later_wins_in_place() {
        let mut accumulated = vec![
            PackageMetadata {
                name: "a".to_owned(),
                upstream: "u1".to_owned(),
                distgit: "d1".to_owned(),
            },
            PackageMetadata {
                name: "b".to_owned(),
                upstream: "u2".to_owned(),
                distgit: "d2".to_owned(),
            },
        ];
        merge_packages(
            &mut accumulated,
            vec![
                PackageMetadata {
                    name: "a".to_owned(),
                    upstream: "u1-new".to_owned(),
                    distgit: "d1-new".to_owned(),
                },
                PackageMetadata {
                    name: "c".to_owned(),
                    upstream: "u3".to_owned(),
                    distgit: "d3".to_owned(),
                },
            ],
        );
        assert_eq!(accumulated.len(), 3);
        assert_eq!(accumulated[0].name, "a");
        assert_eq!(accumulated[0].upstream, "u1-new");
        assert_eq!(accumulated[2].name, "c");
    }
}
