use clap::{Parser, Subcommand};

/// Command-line arguments for pkgprep
#[derive(Parser, Debug, Clone)]
#[command(name = "pkgprep")]
#[command(about = "Package metadata retrieval and build preprocessing for distribution build pipelines")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(long, value_name = "PATH", default_value = "./pkgprep.yaml")]
    pub config: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: DriverCommand,
}

/// Driver operations
#[derive(Subcommand, Debug, Clone)]
pub enum DriverCommand {
    /// List the packages defined in the info repository
    Packages {
        /// Use a local info repository checkout instead of fetching
        #[arg(long = "local-info-repo", value_name = "PATH")]
        local_info_repo: Option<String>,
    },

    /// Run the configured preprocessing commands for a package
    Preprocess {
        /// Package to preprocess
        #[arg(long, value_name = "NAME")]
        package: String,

        /// Upstream source commit being built
        #[arg(long, value_name = "HASH")]
        commit: Option<String>,

        /// Use a local info repository checkout instead of fetching
        #[arg(long = "local-info-repo", value_name = "PATH")]
        local_info_repo: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_packages_subcommand() {
        let args = Args::try_parse_from(["pkgprep", "packages"]).unwrap();
        assert_eq!(args.config, "./pkgprep.yaml");
        assert!(matches!(
            args.command,
            DriverCommand::Packages {
                local_info_repo: None
            }
        ));
    }

    #[test]
    fn test_parse_preprocess_subcommand() {
        let args = Args::try_parse_from([
            "pkgprep",
            "--config",
            "custom.yaml",
            "preprocess",
            "--package",
            "foo",
            "--commit",
            "abc123456",
        ])
        .unwrap();
        assert_eq!(args.config, "custom.yaml");
        match args.command {
            DriverCommand::Preprocess {
                package,
                commit,
                local_info_repo,
            } => {
                assert_eq!(package, "foo");
                assert_eq!(commit.as_deref(), Some("abc123456"));
                assert!(local_info_repo.is_none());
            }
            DriverCommand::Packages { .. } => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_preprocess_requires_package() {
        assert!(Args::try_parse_from(["pkgprep", "preprocess"]).is_err());
    }
}
