//! Integration tests for the wixdom binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::wixdom_cmd;

const VALID_SETTINGS: &str = r#"
[product]
id = "{0C8C3E4A-1B2C-4D5E-8F90-A1B2C3D4E5F6}"
language = "1033"
manufacturer = "Acme"

[package]
compressed = true
installer_version = "200"

[[raw]]
markup = "<test />"
"#;

fn write_settings(temp: &TempDir, contents: &str) {
    fs::write(temp.path().join("wixdom.toml"), contents).unwrap();
}

#[test]
fn test_init_creates_settings() {
    let temp = TempDir::new().unwrap();

    wixdom_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized wixdom settings"));

    let content = fs::read_to_string(temp.path().join("wixdom.toml")).unwrap();
    assert!(content.contains("[product]"));
    assert!(content.contains("language = \"1033\""));
    assert!(content.contains("[package]"));
}

#[test]
fn test_init_twice_fails_without_force() {
    let temp = TempDir::new().unwrap();

    wixdom_cmd().arg("init").arg(temp.path()).assert().success();
    wixdom_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    wixdom_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_check_clean_settings() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, VALID_SETTINGS);

    wixdom_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No defects found"));
}

#[test]
fn test_check_reports_every_defect() {
    let temp = TempDir::new().unwrap();
    write_settings(
        &temp,
        "[product]\nlanguage = \"\"\n\n[package]\ninstaller_version = \"two\"\n",
    );

    wixdom_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Missing product language"))
        .stdout(predicate::str::contains("Installer version must be numeric"))
        .stdout(predicate::str::contains("2 defect(s)"))
        .stderr(predicate::str::contains("2 defect(s) found"))
        .stderr(predicate::str::contains("Missing product language").not())
        .stderr(predicate::str::contains("--no-validate").not());
}

#[test]
fn test_check_without_settings() {
    let temp = TempDir::new().unwrap();

    wixdom_cmd()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("wixdom init"));
}

#[test]
fn test_build_writes_default_output() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, VALID_SETTINGS);

    wixdom_cmd()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let output = fs::read_to_string(temp.path().join("product.wxs")).unwrap();
    assert_eq!(
        output,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <Wix xmlns=\"http://schemas.microsoft.com/wix/2006/wi\">\
         <product Id=\"0C8C3E4A-1B2C-4D5E-8F90-A1B2C3D4E5F6\" Language=\"1033\" Manufacturer=\"Acme\" >\
         <package Compressed=\"yes\" InstallerVersion=\"200\" ></package>\
         <test /></product ></Wix>"
    );
}

#[test]
fn test_build_to_stdout() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, VALID_SETTINGS);

    wixdom_cmd()
        .current_dir(temp.path())
        .args(["build", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::ends_with("</Wix>"));

    assert!(!temp.path().join("product.wxs").exists());
}

#[test]
fn test_build_invalid_writes_nothing() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, "[product]\nlanguage = \"\"\n");

    wixdom_cmd()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing product language"));

    assert!(!temp.path().join("product.wxs").exists());
}

#[test]
fn test_build_no_validate() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, "[product]\nlanguage = \"\"\n");

    wixdom_cmd()
        .current_dir(temp.path())
        .args(["build", "--no-validate", "-o", "out/custom.wxs"])
        .assert()
        .success();

    assert!(temp.path().join("out/custom.wxs").exists());
}

#[test]
fn test_build_with_explicit_settings() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("custom.toml");
    fs::write(&settings, VALID_SETTINGS).unwrap();

    wixdom_cmd()
        .arg("build")
        .arg("--settings")
        .arg(&settings)
        .assert()
        .success();

    assert!(temp.path().join("product.wxs").exists());
}

#[test]
fn test_settings_env_var() {
    let temp = TempDir::new().unwrap();
    write_settings(&temp, VALID_SETTINGS);
    let elsewhere = TempDir::new().unwrap();

    wixdom_cmd()
        .current_dir(elsewhere.path())
        .env("WIXDOM_SETTINGS", temp.path().join("wixdom.toml"))
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_guid_prints_braced_identifier() {
    wixdom_cmd()
        .arg("guid")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\{[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}\}\n$").unwrap());
}
