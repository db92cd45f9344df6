use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Home directory without a config file
fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

fn write_config(home: &Path, contents: &str) {
    let dir = home.join(".config").join("berthplot");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("berth allocation chart"))
        .stdout(predicate::str::contains("--print"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("berthplot"));
}

#[test]
fn test_cli_requires_input() {
    cargo_bin_cmd!().assert().failure();
}

#[test]
fn test_print_layout_from_csv() {
    let home = empty_home();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.csv"))
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("vessel"))
        .stdout(predicate::str::contains("departure"))
        .stdout(predicate::str::is_match(r"1\s+100\s+0\s+60\s+0\.00\s+0\.00\s+48\.00\s+80\.00").unwrap())
        .stdout(predicate::str::is_match(r"2\s+80\s+30\s+90\s+24\.00\s+90\.00\s+48\.00\s+64\.00").unwrap())
        .stdout(predicate::str::is_match(r"3\s+120\s+70\s+150\s+56\.00\s+164\.00\s+64\.00\s+96\.00").unwrap());
}

#[test]
fn test_print_layout_from_json_matches_csv() {
    let home = empty_home();

    let csv = cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.csv"))
        .arg("--print")
        .output()
        .unwrap();
    let json = cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.json"))
        .arg("--print")
        .output()
        .unwrap();

    assert!(json.status.success());
    assert_eq!(csv.stdout, json.stdout);
}

#[test]
fn test_print_rejects_departure_before_berth() {
    let home = empty_home();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("invalid_departure.csv"))
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "vessel 2: departure time 30 is before berth time 90",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_print_rejects_vessel_too_large_to_draw() {
    let home = empty_home();
    let table = home.path().join("huge.csv");
    fs::write(
        &table,
        "length_of_vessel,time_of_arrival_at_port,cargo_dead_weight\n100,0,60\n1e300,0,60\n",
    )
    .unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(&table)
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "vessel 2: position or size is too large to draw",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_print_empty_table_warns() {
    let home = empty_home();

    let assert = cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("empty.csv"))
        .arg("--print")
        .assert()
        .success()
        .stderr(predicate::str::contains("no vessels to draw"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_missing_column_fails() {
    let home = empty_home();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("missing_column.csv"))
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing column 'cargo_dead_weight'",
        ));
}

#[test]
fn test_print_layout_from_xlsx_matches_csv() {
    let home = empty_home();

    let csv = cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.csv"))
        .arg("--print")
        .output()
        .unwrap();
    let xlsx = cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.xlsx"))
        .arg("--print")
        .output()
        .unwrap();

    assert!(xlsx.status.success());
    assert_eq!(csv.stdout, xlsx.stdout);
}

#[test]
fn test_xlsx_missing_column_fails() {
    let home = empty_home();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("missing_column.xlsx"))
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing column 'cargo_dead_weight'",
        ));
}

#[test]
fn test_corrupt_workbook_fails() {
    let home = empty_home();
    let table = home.path().join("broken.xlsx");
    fs::write(&table, "not a spreadsheet").unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(&table)
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vessel table"));
}

#[test]
fn test_unsupported_format_fails() {
    let home = empty_home();
    let table = home.path().join("vessels.ods");
    fs::write(&table, "not a spreadsheet").unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(&table)
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported table format"));
}

#[test]
fn test_nonexistent_file_fails() {
    let home = empty_home();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg("nonexistent.csv")
        .arg("--print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_config_scale_applies_to_layout() {
    let home = empty_home();
    write_config(home.path(), "[chart]\nwidth_scale = 1.0\nheight_scale = 1.0\n");

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.csv"))
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"1\s+100\s+0\s+60\s+0\.00\s+0\.00\s+60\.00\s+100\.00").unwrap())
        .stdout(predicate::str::is_match(r"2\s+80\s+30\s+90\s+30\.00\s+110\.00").unwrap());
}

#[test]
fn test_config_column_names() {
    let home = empty_home();
    write_config(
        home.path(),
        "[columns]\nlength = \"loa\"\nberth_time = \"ata\"\ndeparture_time = \"atd\"\n",
    );
    let table = home.path().join("renamed.csv");
    fs::write(&table, "loa,ata,atd\n50,10,20\n").unwrap();

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(&table)
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"1\s+50\s+10\s+20\s+8\.00\s+0\.00\s+8\.00\s+40\.00").unwrap());
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let home = empty_home();
    write_config(home.path(), "[chart]\nwidth_scale = -1.0\n");

    cargo_bin_cmd!()
        .env("HOME", home.path())
        .arg(fixture_path("vessels.csv"))
        .arg("--print")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid config"))
        .stdout(predicate::str::contains("48.00"));
}

#[test]
fn test_fixture_files_exist() {
    for name in [
        "vessels.csv",
        "vessels.json",
        "vessels.xlsx",
        "invalid_departure.csv",
        "missing_column.csv",
        "missing_column.xlsx",
        "empty.csv",
    ] {
        assert!(fixture_path(name).exists(), "missing fixture {}", name);
    }
}
