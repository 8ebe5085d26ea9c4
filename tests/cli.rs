use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    cargo_bin_cmd!("hospital-factory")
}

#[test]
fn default_runs_both_scenarios() {
    cmd()
        .assert()
        .success()
        .stdout(contains("Демонстрація Абстрактної Фабрики"))
        .stdout(contains("✅ Сценарій 1: Створення Польової Лікарні (Field Hospital):"))
        .stdout(contains("✅ Сценарій 2: Створення Капітальної Лікарні (Capital Hospital):"))
        .stdout(contains("(Field)."))
        .stdout(contains("(Capital)."));
}

#[test]
fn single_family_never_mixes() {
    cmd()
        .args(["--family", "capital", "--no-banner"])
        .assert()
        .success()
        .stdout(contains("Персонал капітальної лікарні"))
        .stdout(contains("(Field)").not())
        .stdout(contains("=====").not());
}

#[test]
fn families_run_in_requested_order() {
    let out = cmd()
        .args(["--family", "capital", "--family", "field"])
        .output()
        .unwrap();
    let text = String::from_utf8(out.stdout).unwrap();

    let capital = text.find("(Capital)").unwrap();
    let field = text.find("(Field)").unwrap();
    assert!(capital < field);
}

#[test]
fn unknown_family_fails() {
    cmd()
        .args(["--family", "mobile"])
        .assert()
        .failure()
        .stderr(contains("mobile"));
}

#[test]
fn json_output() {
    let out = cmd().arg("--json").output().unwrap();
    assert!(out.status.success());

    let value: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"].as_array().unwrap().len(), 2);
    assert_eq!(value["data"][0]["family"], "field");
}

#[test]
fn config_file_controls_scenarios() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("demo.toml");
    fs::write(
        &path,
        r#"
show_banner = false

[[scenarios]]
title = "Лише польова"
family = "field"
"#,
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("✅ Сценарій 1: Лише польова:"))
        .stdout(contains("Сценарій 2").not())
        .stdout(contains("=====").not());
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/demo.toml"])
        .assert()
        .failure()
        .stderr(contains("failed to load config"));
}
