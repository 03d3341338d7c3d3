//! # pkgprep
//!
//! `pkgprep` is the package-information driver of a distribution build pipeline.
//! It retrieves the list of trackable packages from a YAML info repository and
//! runs user-configured preprocessing commands before a package build.
//!
//! ## Usage
//!
//! **List packages:**
//! ```sh
//! pkgprep --config pkgprep.yaml packages
//! ```
//!
//! **Preprocess a package before building:**
//! ```sh
//! pkgprep --config pkgprep.yaml preprocess --package foo --commit abc123456
//! ```
//!
//! See `pkgprep --help` for more options and details.

use anyhow::Result;
use clap::Parser as _;
use pkgprep::cli::Args;
use pkgprep::error::DriverError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match pkgprep::run(args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<DriverError>()
                    .map_or(1, DriverError::exit_code),
            );
        }
    }
}
