//! Integration tests for reading numbered output back

use std::fs;
use std::io::BufReader;

use predicates::prelude::*;
use tempfile::TempDir;

use chatclean::extract::{extract_file, ExtractionConfig, ScriptedSource};
use chatclean::read_numbered;

use crate::helpers::{chatclean, load_fixture, temp_fixture, SAMPLE_CLEANED};

#[test]
fn read_numbered_recovers_extracted_messages() {
    let (temp_dir, input) = temp_fixture("sample_chat.txt");
    let output = temp_dir.path().join("out.txt");
    let config = ExtractionConfig {
        insert_probability: 0.0,
        ..ExtractionConfig::default()
    };
    extract_file(&input, &output, &config, ScriptedSource::default()).unwrap();

    let messages = read_numbered(BufReader::new(fs::File::open(&output).unwrap())).unwrap();

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].text, "Call me at 2348055889183\nSee you soon");
    assert_eq!(messages[3].number, 4);
}

#[test]
fn fixture_is_not_numbered_output() {
    let messages = read_numbered(load_fixture("sample_chat.txt").as_bytes()).unwrap();

    assert!(messages.is_empty());
}

#[test]
fn inspect_counts_and_shows_messages() {
    let home = TempDir::new().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let cleaned = temp_dir.path().join("cleaned.txt");
    fs::write(&cleaned, SAMPLE_CLEANED).unwrap();

    chatclean(&home)
        .arg("inspect")
        .arg(&cleaned)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 message(s)"));

    chatclean(&home)
        .arg("inspect")
        .arg(&cleaned)
        .args(["--show", "3"])
        .assert()
        .success()
        .stdout("hi NovelsRepublic, welcome back\n");
}

#[test]
fn inspect_unknown_number_fails() {
    let home = TempDir::new().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let cleaned = temp_dir.path().join("cleaned.txt");
    fs::write(&cleaned, SAMPLE_CLEANED).unwrap();

    chatclean(&home)
        .arg("inspect")
        .arg(&cleaned)
        .args(["--show", "9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Message [9] not found"));
}
