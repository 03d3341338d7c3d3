//! Configuration logic validation

use crate::config::Config;
use crate::error::DriverError;
use anyhow::Result;

/// Validate configuration values beyond what the schema can express
pub fn validate_config(config: &Config) -> Result<()> {
    if config.datadir.trim().is_empty() {
        return Err(DriverError::configuration("'datadir' must not be empty").into());
    }

    if config.info_files.is_empty() {
        return Err(
            DriverError::configuration("'info_files' must name at least one info file").into(),
        );
    }

    for (index, file) in config.info_files.iter().enumerate() {
        if file.trim().is_empty() {
            return Err(DriverError::configuration(format!(
                "'info_files' entry #{} is empty",
                index + 1
            ))
            .into());
        }
    }

    for (index, command) in config.custom_preprocess.iter().enumerate() {
        if command.trim().is_empty() {
            return Err(DriverError::configuration(format!(
                "'custom_preprocess' command #{} is empty",
                index + 1
            ))
            .into());
        }
    }

    if let Some(repo) = config.info_repo.as_deref() {
        if repo.trim().is_empty() {
            return Err(DriverError::configuration("'info_repo' must not be empty").into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            datadir: "/data".to_owned(),
            info_files: vec!["packages.yml".to_owned()],
            info_repo: None,
            cache_dir: None,
            custom_preprocess: Vec::new(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_empty_datadir_rejected() {
        let mut config = base_config();
        config.datadir = "  ".to_owned();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_info_files_rejected() {
        let mut config = base_config();
        config.info_files.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut config = base_config();
        config.custom_preprocess = vec!["/bin/true".to_owned(), String::new()];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("command #2"));
    }
}
