use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    let mut file = File::create(&file_path)?;
    writeln!(file, "{}", content)?;
    Ok(file_path)
}

// Runs from an empty directory so no local .wordscout.yaml is picked up
fn wordscout(dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("wordscout-cli")?;
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_search_single_word() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "--grid-size", "5x5", "--word", "a", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("of 1 words"));
    Ok(())
}

#[test]
fn test_search_json_output() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args([
            "search", "-g", "4x4", "-w", "ab", "--seed", "9", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words_searched\": 1"))
        .stdout(predicate::str::contains("\"word\": \"ab\""));
    Ok(())
}

#[test]
fn test_search_stats_only() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "3x3", "-w", "zzzzzz", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 0 matches for 0 of 1 words",
        ))
        .stdout(predicate::str::contains("is absent").not());
    Ok(())
}

#[test]
fn test_show_grid() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "2x3", "-w", "foo", "--seed", "5", "--show-grid"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[a-z]{3}\n[a-z]{3}\n\n")?);
    Ok(())
}

#[test]
fn test_invalid_grid_dimension() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "--grid-size", "0x5", "--word", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot generate a grid of letters due to invalid \"0x5\" grid size",
        ));
    Ok(())
}

#[test]
fn test_oversized_grid() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "--grid-size", "99999999999x99999999999", "--word", "foo"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too large"));
    Ok(())
}

#[test]
fn test_invalid_grid_size_pattern() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "--grid-size", "5by5", "--word", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NxN"));
    Ok(())
}

#[test]
fn test_invalid_word() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "--grid-size", "5x5", "--word", "Foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"Foo\" word value is invalid"));
    Ok(())
}

#[test]
fn test_search_words_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let words = create_test_file(&temp_dir, "words.txt", "foo\nbar\nbaz\nqux")?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "10x10", "--seed", "11", "--mode", "cooperative"])
        .args(["--words-limit", "3", "--words-file-path"])
        .arg(&words)
        .assert()
        .success()
        .stdout(predicate::str::contains("of 3 words"));
    Ok(())
}

#[test]
fn test_search_words_file_in_pool() -> Result<()> {
    let temp_dir = tempdir()?;
    let words = create_test_file(&temp_dir, "words.log", "foo bar")?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "8x8", "-m", "pool", "-j", "2", "-n", "4", "-f"])
        .arg(&words)
        .assert()
        .success()
        .stdout(predicate::str::contains("of 4 words"));
    Ok(())
}

#[test]
fn test_invalid_words_file_suffix() -> Result<()> {
    let temp_dir = tempdir()?;
    let words = create_test_file(&temp_dir, "words.csv", "foo,bar")?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "5x5", "-f"])
        .arg(&words)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid suffix"));
    Ok(())
}

#[test]
fn test_unknown_mode() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "-g", "5x5", "-w", "foo", "--mode", "threads"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown execution mode"));
    Ok(())
}

#[test]
fn test_generate_grid() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["generate", "--grid-size", "3x4", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[a-z]{4}\n[a-z]{4}\n[a-z]{4}\n$")?);
    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<()> {
    let temp_dir = tempdir()?;
    let args = ["search", "-g", "6x6", "-w", "ab", "--seed", "42", "--show-grid"];

    let first = wordscout(&temp_dir)?.args(args).output()?;
    let second = wordscout(&temp_dir)?.args(args).output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let config = create_test_file(
        &temp_dir,
        "config.yaml",
        "grid_size: \"4x4\"\nword: \"abc\"\nexecution_mode: \"sequential\"\nseed: 7",
    )?;

    wordscout(&temp_dir)?
        .args(["search", "--format", "json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"abc\""));
    Ok(())
}

#[test]
fn test_missing_config_file() -> Result<()> {
    let temp_dir = tempdir()?;

    wordscout(&temp_dir)?
        .args(["search", "-w", "foo", "--config", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
    Ok(())
}
