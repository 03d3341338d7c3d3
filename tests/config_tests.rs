//! Configuration loading tests

use pkgprep::config::Config;
use pkgprep::system::MockSystem;

#[test]
fn test_minimal_config_applies_defaults() {
    let system = MockSystem::new().with_file("/cfg/pkgprep.yaml", "datadir: /data\n");

    let config = Config::load_from_file(&system, "/cfg/pkgprep.yaml").unwrap();

    assert_eq!(config.datadir, "/data");
    assert_eq!(config.info_files, vec!["packages.yml"]);
    assert!(config.info_repo.is_none());
    assert!(config.cache_dir.is_none());
    assert!(config.custom_preprocess.is_empty());
}

#[test]
fn test_full_config_loads() {
    let content = r#"
datadir: /data
info_files:
  - base.yml
  - override.yml
info_repo: https://git.example.com/info
cache_dir: /var/cache/pkgprep
custom_preprocess:
  - /usr/local/bin/prepare-sources
  - /usr/local/bin/apply-downstream-patches
"#;
    let system = MockSystem::new().with_file("/cfg/pkgprep.yaml", content);

    let config = Config::load_from_file(&system, "/cfg/pkgprep.yaml").unwrap();

    assert_eq!(config.info_files, vec!["base.yml", "override.yml"]);
    assert_eq!(config.info_repo.as_deref(), Some("https://git.example.com/info"));
    assert_eq!(config.cache_dir.as_deref(), Some("/var/cache/pkgprep"));
    assert_eq!(config.custom_preprocess.len(), 2);
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let system = MockSystem::new();

    let err = Config::load_from_file(&system, "/cfg/pkgprep.yaml").unwrap_err();

    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let system = MockSystem::new().with_file("/cfg/pkgprep.yaml", "datadir: [\n");

    let err = Config::load_from_file(&system, "/cfg/pkgprep.yaml").unwrap_err();

    assert!(err.to_string().contains("Failed to parse YAML configuration"));
}

#[test]
fn test_unknown_field_is_rejected_by_schema() {
    let content = "datadir: /data\nbogus_option: true\n";
    let system = MockSystem::new().with_file("/cfg/pkgprep.yaml", content);

    assert!(Config::load_from_file(&system, "/cfg/pkgprep.yaml").is_err());
}

#[test]
fn test_empty_preprocess_command_is_rejected() {
    let content = "datadir: /data\ncustom_preprocess:\n  - /bin/true\n  - \"\"\n";
    let system = MockSystem::new().with_file("/cfg/pkgprep.yaml", content);

    assert!(Config::load_from_file(&system, "/cfg/pkgprep.yaml").is_err());
}

#[test]
fn test_datadir_tilde_expansion() {
    let config = Config {
        datadir: "~/build/data".to_owned(),
        info_files: vec!["packages.yml".to_owned()],
        info_repo: None,
        cache_dir: Some("~/cache".to_owned()),
        custom_preprocess: Vec::new(),
    };

    if dirs::home_dir().is_some() {
        assert!(!config.datadir_path().to_string_lossy().starts_with('~'));
        assert!(config.datadir_path().ends_with("build/data"));
        assert!(!config.cache_path().unwrap().to_string_lossy().starts_with('~'));
    }
}
