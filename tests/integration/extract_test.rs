//! Integration tests for the extraction pipeline (library)

use std::fs;

use chatclean::extract::{
    extract_file, ExtractionConfig, RngSource, ScriptedSource, CANONICAL_PHONE, PROMO_BLOCK,
};
use chatclean::{read_numbered, ExtractError};

use crate::helpers::{temp_fixture, SAMPLE_CLEANED};

fn no_promo() -> ExtractionConfig {
    ExtractionConfig {
        insert_probability: 0.0,
        ..ExtractionConfig::default()
    }
}

#[test]
fn sample_chat_extracts_to_expected_output() {
    let (temp_dir, input) = temp_fixture("sample_chat.txt");
    let output = temp_dir.path().join("cleaned_messages.txt");

    let stats = extract_file(&input, &output, &no_promo(), RngSource::seeded(1)).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), SAMPLE_CLEANED);
    assert_eq!(stats.messages, 4);
    assert_eq!(stats.chunks, 4);
    assert_eq!(stats.ignored_lines, 1);
    assert_eq!(stats.promos_inserted, 0);
}

#[test]
fn zero_boundary_lines_produce_empty_file() {
    let (temp_dir, input) = temp_fixture("no_messages.txt");
    let output = temp_dir.path().join("out.txt");

    let stats = extract_file(&input, &output, &no_promo(), ScriptedSource::default()).unwrap();

    assert_eq!(stats.chunks, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn numbering_matches_total_chunk_count() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("chat.txt");
    let output = temp_dir.path().join("out.txt");

    let mut chat = String::new();
    for i in 0..20 {
        chat.push_str(&format!("1/2/24, 10:{:02} - User{}: message {}\n", i, i, i));
        for j in 0..(i % 4) * 10 {
            chat.push_str(&format!("continuation line {} of {}\n", j, i));
        }
    }
    fs::write(&input, chat).unwrap();

    let config = ExtractionConfig {
        max_length: 200,
        ..ExtractionConfig::default()
    };
    let stats = extract_file(&input, &output, &config, RngSource::seeded(99)).unwrap();

    let file = fs::File::open(&output).unwrap();
    let messages = read_numbered(std::io::BufReader::new(file)).unwrap();
    let numbers: Vec<usize> = messages.iter().map(|m| m.number).collect();
    let expected: Vec<usize> = (1..=stats.chunks).collect();

    assert_eq!(stats.messages, 20);
    assert!(stats.split_messages > 0);
    assert_eq!(numbers, expected);
    for message in &messages {
        let over_limit = message.text.chars().count() > 200;
        let single_line = !message.text.contains('\n');
        assert!(!over_limit || single_line, "chunk too long: {}", message.number);
    }
}

#[test]
fn scripted_promo_lands_where_requested() {
    let (temp_dir, input) = temp_fixture("sample_chat.txt");
    let output = temp_dir.path().join("out.txt");
    // Only the third message draws below 0.4; it is inserted at line 0.
    let random = ScriptedSource::new(vec![0.9, 0.9, 0.2, 0.9], vec![0]);

    let stats = extract_file(&input, &output, &ExtractionConfig::default(), random).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(stats.promos_inserted, 1);
    assert!(content.contains(&format!("[3] {}\nhi NovelsRepublic", PROMO_BLOCK)));
    assert_eq!(content.matches(PROMO_BLOCK).count(), 1);
}

#[test]
fn redacted_output_keeps_only_canonical_phone() {
    let (temp_dir, input) = temp_fixture("sample_chat.txt");
    let output = temp_dir.path().join("out.txt");

    extract_file(&input, &output, &no_promo(), ScriptedSource::default()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.matches(CANONICAL_PHONE).count(), 2);
    assert!(!content.contains("0803"));
    assert!(!content.contains("novels.example.com"));
    assert!(!content.contains('"'));
}

#[test]
fn missing_input_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out.txt");

    let err = extract_file(
        &temp_dir.path().join("missing.txt"),
        &output,
        &no_promo(),
        ScriptedSource::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ExtractError::InputOpen { .. }));
    assert!(err.to_string().contains("missing.txt"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_directory_is_fatal() {
    let (temp_dir, input) = temp_fixture("sample_chat.txt");
    let output = temp_dir.path().join("no_such_dir").join("out.txt");

    let err = extract_file(&input, &output, &no_promo(), ScriptedSource::default()).unwrap_err();

    assert!(matches!(err, ExtractError::OutputCreate { .. }));
}

#[test]
fn failed_run_leaves_previous_output_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("chat.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, b"1/1/24, 9:00 - A: ok\n\xff\n").unwrap();
    fs::write(&output, "previous run").unwrap();

    let err = extract_file(&input, &output, &no_promo(), ScriptedSource::default()).unwrap_err();

    assert!(matches!(err, ExtractError::Read(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous run");
}
