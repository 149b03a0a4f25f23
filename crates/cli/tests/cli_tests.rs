//! CLI integration tests
use std::fs;
use std::path::PathBuf;

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("textgauge").unwrap()
}

/// Lays out stop-word lists, sentiment lists and an input CSV in a temp dir.
///
/// The URLs point at the discard port on localhost, so fetches fail fast and
/// every row is skipped; the pipeline itself still runs end to end.
fn fixture_dir() -> (TempDir, PathBuf, PathBuf, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();

    let stopwords = dir.path().join("stopwords");
    fs::create_dir(&stopwords).unwrap();
    fs::write(stopwords.join("generic.txt"), "the\na\nof\n").unwrap();
    fs::write(stopwords.join("names.txt"), "smith\n").unwrap();

    let positive = dir.path().join("positive-words.txt");
    let negative = dir.path().join("negative-words.txt");
    fs::write(&positive, "good great calm").unwrap();
    fs::write(&negative, "bad awful gloomy").unwrap();

    let input = dir.path().join("input.csv");
    fs::write(
        &input,
        "URL_ID,URL\nblackassign0001,http://127.0.0.1:9/a\nblackassign0002,http://127.0.0.1:9/b\n",
    )
    .unwrap();

    (dir, stopwords, positive, negative, input)
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readability and sentiment"));
}

#[test]
fn test_cli_requires_lexicon_args() {
    let (_dir, _stopwords, _positive, _negative, input) = fixture_dir();
    cmd().arg(&input).assert().failure();
}

#[test]
fn test_cli_missing_stopword_dir_fails() {
    let (dir, _stopwords, positive, negative, input) = fixture_dir();
    cmd()
        .arg(&input)
        .args(["--stopwords", "/nonexistent/stopwords"])
        .arg("--positive")
        .arg(&positive)
        .arg("--negative")
        .arg(&negative)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("stop-word"));
}

#[test]
fn test_cli_missing_input_csv_fails() {
    let (dir, stopwords, positive, negative, _input) = fixture_dir();
    cmd()
        .arg(dir.path().join("no-such-input.csv"))
        .arg("--stopwords")
        .arg(&stopwords)
        .arg("--positive")
        .arg(&positive)
        .arg("--negative")
        .arg(&negative)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input CSV"));
}

#[test]
fn test_cli_skips_unreachable_urls_and_succeeds() {
    let (dir, stopwords, positive, negative, input) = fixture_dir();
    let output = dir.path().join("out.csv");

    cmd()
        .arg(&input)
        .arg("--stopwords")
        .arg(&stopwords)
        .arg("--positive")
        .arg(&positive)
        .arg("--negative")
        .arg(&negative)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error processing URL"))
        .stderr(predicate::str::contains("Analysis complete"));

    assert!(output.exists());
}

#[test]
fn test_cli_verbose_steps() {
    let (dir, stopwords, positive, negative, input) = fixture_dir();

    cmd()
        .arg(&input)
        .arg("--stopwords")
        .arg(&stopwords)
        .arg("--positive")
        .arg(&positive)
        .arg("--negative")
        .arg(&negative)
        .arg("-o")
        .arg(dir.path().join("out.csv"))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/4]"))
        .stderr(predicate::str::contains("Textgauge"));
}
