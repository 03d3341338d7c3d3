//! CLI command handlers

use crate::config::Config;
use crate::driver::{InfoDriver, PkgInfoDriver as _};
use crate::error::DriverError;
use crate::info::GitInfoProvider;
use crate::runner::EnvCommandRunner;
use crate::system::System;
use crate::utils::path::expand_tilde;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// List the packages defined in the info repository
pub fn run_packages(
    config_path: &str,
    local_info_repo: Option<&str>,
    system: &dyn System,
) -> Result<()> {
    let config = Config::load_from_file(system, config_path)?;
    let provider = GitInfoProvider::new(system);
    let runner = EnvCommandRunner::new();
    let mut driver = InfoDriver::new(config, system, &provider, &runner);

    let local = local_info_repo.map(resolve_local_repo);
    let packages = driver.getpackages(local.as_deref())?;

    info!("{} packages defined", packages.len());
    for package in &packages {
        println!("{}\t{}\t{}", package.name, package.upstream, package.distgit);
    }

    Ok(())
}

/// Run the configured preprocessing commands for a package
pub fn run_preprocess(
    config_path: &str,
    package: &str,
    commit: Option<&str>,
    local_info_repo: Option<&str>,
    system: &dyn System,
) -> Result<()> {
    let config = Config::load_from_file(system, config_path)?;
    let provider = GitInfoProvider::new(system);
    let runner = EnvCommandRunner::new();
    let mut driver = InfoDriver::new(config, system, &provider, &runner);

    let local = local_info_repo.map(resolve_local_repo);
    let packages = driver.getpackages(local.as_deref())?;

    if !packages.iter().any(|p| p.name == package) {
        return Err(DriverError::configuration(format!(
            "Package '{package}' not found in package metadata"
        ))
        .into());
    }

    driver.preprocess(package, commit)?;
    info!("Preprocessing finished for {package}");

    Ok(())
}

fn resolve_local_repo(path: &str) -> PathBuf {
    expand_tilde(path)
}
