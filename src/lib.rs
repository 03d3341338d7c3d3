//! `pkgprep` - Package metadata retrieval and build preprocessing
//!
//! This library provides the package-information driver of a distribution
//! build pipeline: it retrieves the list of trackable packages from an
//! info repository and runs user-configured preprocessing commands inside
//! a package's distro-git working directory before a build.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod info;
pub mod runner;
pub mod system;
pub mod utils;

use anyhow::Result;
use cli::{Args, DriverCommand};
use system::RealSystem;

/// Main entry point for the pkgprep library
pub fn run(args: Args) -> Result<()> {
    let system = RealSystem::new();

    match &args.command {
        DriverCommand::Packages { local_info_repo } => {
            cli::commands::run_packages(&args.config, local_info_repo.as_deref(), &system)
        }
        DriverCommand::Preprocess {
            package,
            commit,
            local_info_repo,
        } => cli::commands::run_preprocess(
            &args.config,
            package,
            commit.as_deref(),
            local_info_repo.as_deref(),
            &system,
        ),
    }
}
