use assert_cmd::cargo;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn catalog_config(dir: &Path) -> PathBuf {
    let tools_csv = dir.join("tools.csv");
    fs::write(
        &tools_csv,
        "id,name,description,url,category,primary_category,source,launch_date\n\
         1,Scribe,Blog post writer,https://scribe.example,content,content,producthunt,2024-03-05\n",
    )
    .unwrap();

    let config_path = dir.join("toolscout.toml");
    fs::write(
        &config_path,
        format!(
            "[data]\ntools_csv = \"{}\"\n",
            tools_csv.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();
    config_path
}

#[test]
#[serial]
fn test_tools_with_no_color_prints_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = catalog_config(temp_dir.path());

    cargo::cargo_bin_cmd!("toolscout")
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .args(["tools", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Scribe"))
        .stdout(predicate::str::contains("**Category:** `content`"));
}

#[test]
#[serial]
fn test_tools_with_clicolor_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = catalog_config(temp_dir.path());

    cargo::cargo_bin_cmd!("toolscout")
        .current_dir(temp_dir.path())
        .env_remove("NO_COLOR")
        .env("CLICOLOR_FORCE", "1")
        .args(["tools", "--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scribe"))
        .stdout(predicate::str::contains("### Scribe").not());
}

#[test]
#[serial]
fn test_color_never_flag_wins_over_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = catalog_config(temp_dir.path());

    cargo::cargo_bin_cmd!("toolscout")
        .current_dir(temp_dir.path())
        .env("CLICOLOR_FORCE", "1")
        .args([
            "--color",
            "never",
            "tools",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Visit Tool](https://scribe.example)"));
}
