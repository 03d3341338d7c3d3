//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const INFO_YML: &str = r#"
packages:
  - name: acme-widget
    upstream: https://github.com/acme/widget
    distgit: https://git.example.com/rpms/widget
"#;

/// Config file + local info repo + datadir, ready for driver runs
fn fixture(custom_preprocess: &str) -> (TempDir, String, String) {
    let temp_dir = TempDir::new().unwrap();

    let info_dir = temp_dir.path().join("info");
    fs::create_dir(&info_dir).unwrap();
    fs::write(info_dir.join("packages.yml"), INFO_YML).unwrap();

    let datadir = temp_dir.path().join("data");
    fs::create_dir_all(datadir.join("acme-widget_distro")).unwrap();

    let config_path = temp_dir.path().join("pkgprep.yaml");
    let config_content = format!(
        "datadir: {}\ncustom_preprocess:{}\n",
        datadir.display(),
        custom_preprocess
    );
    fs::write(&config_path, config_content).unwrap();

    let config = config_path.to_string_lossy().into_owned();
    let info = info_dir.to_string_lossy().into_owned();
    (temp_dir, config, info)
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgprep"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Package metadata retrieval and build preprocessing",
        ));
}

#[test]
fn test_missing_config_error() {
    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg("nonexistent.yaml")
        .arg("packages")
        .assert()
        .failure()
        .code(1) // Configuration error
        .stdout(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_packages_lists_local_info_repo() {
    let (_temp_dir, config, info) = fixture(" []");

    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("packages")
        .arg("--local-info-repo")
        .arg(&info)
        .assert()
        .success()
        .stdout(predicate::str::contains("acme-widget"))
        .stdout(predicate::str::contains("https://github.com/acme/widget"));
}

#[test]
fn test_preprocess_succeeds_with_trivial_command() {
    let (_temp_dir, config, info) = fixture("\n  - /bin/true");

    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("preprocess")
        .arg("--package")
        .arg("acme-widget")
        .arg("--local-info-repo")
        .arg(&info)
        .assert()
        .success();
}

#[test]
fn test_preprocess_unknown_package_fails() {
    let (_temp_dir, config, info) = fixture(" []");

    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("preprocess")
        .arg("--package")
        .arg("nope")
        .arg("--local-info-repo")
        .arg(&info)
        .assert()
        .failure()
        .code(1) // Configuration error
        .stdout(predicate::str::contains("not found in package metadata"));
}

#[test]
fn test_preprocess_failing_command_maps_exit_code() {
    let (_temp_dir, config, info) = fixture("\n  - /bin/nonexistingcommand");

    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("preprocess")
        .arg("--package")
        .arg("acme-widget")
        .arg("--local-info-repo")
        .arg(&info)
        .assert()
        .failure()
        .code(3) // Preprocess error
        .stdout(predicate::str::contains("Preprocessing failed"));
}

#[test]
fn test_missing_info_file_maps_metadata_exit_code() {
    let (_temp_dir, config, _info) = fixture(" []");
    let empty_info = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("pkgprep").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("packages")
        .arg("--local-info-repo")
        .arg(empty_info.path())
        .assert()
        .failure()
        .code(2); // Metadata error
}
