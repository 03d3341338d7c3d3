//! Pluggable package-information drivers
//!
//! A driver answers two questions for the surrounding build pipeline:
//! which packages exist (`getpackages`), and how to prepare a package's
//! working tree before a build (`preprocess`).

pub mod preprocess;

use crate::config::Config;
use crate::driver::preprocess::{EnvContext, build_env, validate_package_name};
use crate::info::{InfoLocation, InfoProvider, InfoRequest, PackageMetadata};
use crate::runner::{CommandInvocation, CommandRunner};
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Package-information driver contract
pub trait PkgInfoDriver {
    /// Retrieve the package list, optionally from a local info checkout
    fn getpackages(&mut self, local_info_repo: Option<&Path>) -> Result<Vec<PackageMetadata>>;

    /// Run the configured preprocessing commands for a package
    fn preprocess(&self, package_name: &str, commit_hash: Option<&str>) -> Result<()>;
}

/// Driver backed by a YAML info repository
pub struct InfoDriver<'src> {
    config: Config,
    system: &'src dyn System,
    provider: &'src dyn InfoProvider,
    runner: &'src dyn CommandRunner,
    info_path: Option<PathBuf>,
}

impl<'src> InfoDriver<'src> {
    /// Create a driver from configuration and collaborators
    #[must_use]
    pub fn new(
        config: Config,
        system: &'src dyn System,
        provider: &'src dyn InfoProvider,
        runner: &'src dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            system,
            provider,
            runner,
            info_path: None,
        }
    }

    /// Info file path recorded by the last successful `getpackages`
    #[must_use]
    pub fn info_path(&self) -> Option<&Path> {
        self.info_path.as_deref()
    }

    /// Record the info file path directly
    ///
    /// Normally `getpackages` records this; setting it by hand lets a
    /// caller preprocess against an already-known info file.
    pub fn set_info_path(&mut self, path: PathBuf) {
        self.info_path = Some(path);
    }

    /// The driver's configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Per-package distro-git working directory, trailing slash preserved
    fn distgit_dir(&self, package_name: &str) -> String {
        format!(
            "{}/{}_distro/",
            self.config.datadir_path().display(),
            package_name
        )
    }

    /// Per-package upstream source directory
    fn source_dir(&self, package_name: &str) -> String {
        format!("{}/{}", self.config.datadir_path().display(), package_name)
    }
}

impl PkgInfoDriver for InfoDriver<'_> {
    fn getpackages(&mut self, local_info_repo: Option<&Path>) -> Result<Vec<PackageMetadata>> {
        let location = InfoLocation::resolve(local_info_repo, self.config.info_repo.as_deref());
        debug!("Retrieving package metadata from {location:?}");

        let request = InfoRequest {
            info_files: self.config.info_files.clone(),
            location,
            cache_base: self.config.cache_path(),
        };

        let snapshot = self.provider.fetch(&request)?;
        self.info_path = Some(snapshot.info_path);

        Ok(snapshot.packages)
    }

    fn preprocess(&self, package_name: &str, commit_hash: Option<&str>) -> Result<()> {
        if self.config.custom_preprocess.is_empty() {
            return Ok(());
        }

        validate_package_name(package_name)?;

        let distgit_dir = self.distgit_dir(package_name);
        let source_dir = self.source_dir(package_name);
        let info_path = self.info_path().map(|p| p.display().to_string());
        // A missing USER means the entry is omitted, never an error
        let user = self.system.env_var("USER").ok();

        let assignments = build_env(&EnvContext {
            package_name,
            distgit_dir: &distgit_dir,
            info_path: info_path.as_deref(),
            source_dir: &source_dir,
            commit_hash,
            user: user.as_deref(),
        });

        for command_line in &self.config.custom_preprocess {
            info!("Preprocessing {package_name}: {command_line}");

            let invocation = CommandInvocation {
                assignments: assignments.clone(),
                command_line: command_line.clone(),
                working_dir: PathBuf::from(&distgit_dir),
            };

            self.runner.run(&invocation).with_context(|| {
                format!("Preprocessing failed for package '{package_name}'")
            })?;
        }

        Ok(())
    }
}
