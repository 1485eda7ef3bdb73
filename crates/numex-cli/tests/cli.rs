use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command pinned to an isolated default config.
fn numex(dir: &Path) -> Command {
    let config = dir.join("config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }

    let mut cmd = Command::cargo_bin("numex").unwrap();
    cmd.arg("-c").arg(config);
    cmd
}

#[test]
fn test_extract_text_argument() {
    let dir = TempDir::new().unwrap();

    numex(dir.path())
        .args(["extract", "Ela pagou vinte e cinco reais pela entrada."])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"MONEY""#))
        .stdout(predicate::str::contains(r#""source":"vinte e cinco reais""#))
        .stdout(predicate::str::contains(r#""value":25.0"#));
}

#[test]
fn test_extract_from_stdin() {
    let dir = TempDir::new().unwrap();

    numex(dir.path())
        .arg("extract")
        .write_stdin("Correu 5 km.")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""unit":"km""#));
}

#[test]
fn test_extract_from_file_as_csv_with_spans() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Andou 25 metros").unwrap();

    numex(dir.path())
        .args(["extract", "--format", "csv", "--spans", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("value,type,unit,symbol,source,start,end"))
        .stdout(predicate::str::contains("25,MEASURE,m,,25 metros,6,15"));
}

#[test]
fn test_extract_kind_filter() {
    let dir = TempDir::new().unwrap();

    numex(dir.path())
        .args(["extract", "--kinds", "PERSON,MONEY", "R$ 10,00 e 3 metros"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MONEY"))
        .stdout(predicate::str::contains("MEASURE").not());

    numex(dir.path())
        .args(["extract", "--kinds", "PERSON", "R$ 10,00 e 3 metros"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_extract_without_word_numerals() {
    let dir = TempDir::new().unwrap();

    numex(dir.path())
        .args(["extract", "--format", "text", "--no-words", "vinte reais"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No numeric values found."));
}

#[test]
fn test_extract_missing_file() {
    let dir = TempDir::new().unwrap();

    numex(dir.path())
        .args(["extract", "--file"])
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_config_init_and_set() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nested").join("config.json");

    Command::cargo_bin("numex")
        .unwrap()
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    Command::cargo_bin("numex")
        .unwrap()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "extraction.kinds", "MONEY"])
        .assert()
        .failure();

    Command::cargo_bin("numex")
        .unwrap()
        .arg("-c")
        .arg(&config)
        .args(["config", "set", "extraction.kinds", "[\"MONEY\"]"])
        .assert()
        .success();

    Command::cargo_bin("numex")
        .unwrap()
        .arg("-c")
        .arg(&config)
        .args(["extract", "R$ 10,00 e 3 metros"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MEASURE").not());

    Command::cargo_bin("numex")
        .unwrap()
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("in");
    let output_dir = dir.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("a.txt"), "R$ 5 e 3 metros").unwrap();
    fs::write(input_dir.join("b.txt"), "nada aqui").unwrap();
    fs::write(input_dir.join("c.pdf"), "ignored").unwrap();

    let pattern = format!("{}/*", input_dir.display());

    numex(dir.path())
        .args(["batch", &pattern, "--summary", "-j", "2", "--output-dir"])
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    let a = fs::read_to_string(output_dir.join("a.json")).unwrap();
    assert!(a.contains("MONEY"));
    assert_eq!(fs::read_to_string(output_dir.join("b.json")).unwrap(), "[]");
    assert!(!output_dir.join("c.json").exists());

    let summary = fs::read_to_string(output_dir.join("summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "filename,status,numbers,measures,money,processing_time_ms,error");
    assert!(lines[1].starts_with("a.txt,success,0,1,1,"));
    assert!(lines[2].starts_with("b.txt,success,0,0,0,"));
}

#[test]
fn test_batch_no_matches() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    numex(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}
