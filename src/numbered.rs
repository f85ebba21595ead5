//! Reading numbered output back into messages.
//!
//! A cleaned file is a sequence of `[n] text` blocks. Consumers that forward
//! the messages one at a time split the file on lines starting with `[n]`.

use std::io::{self, BufRead};

use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(\d+)\] ?").unwrap());

/// One numbered block recovered from a cleaned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedMessage {
    pub number: usize,
    pub text: String,
}

/// Parse numbered blocks from `reader`.
///
/// Each line starting with `[n]` opens a block; following lines belong to it
/// until the next marker. Block text is trimmed. Lines before the first
/// marker are skipped.
pub fn read_numbered<R: BufRead>(reader: R) -> io::Result<Vec<NumberedMessage>> {
    let mut messages = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for line in reader.lines() {
        let line = line?;
        let marker = MARKER_RE
            .captures(&line)
            .and_then(|caps| Some((caps[1].parse::<usize>().ok()?, caps.get(0)?.end())));

        if let Some((number, end)) = marker {
            if let Some((previous, text)) = current.take() {
                messages.push(NumberedMessage::new(previous, &text));
            }
            current = Some((number, line[end..].to_string()));
        } else if let Some((_, text)) = current.as_mut() {
            text.push('\n');
            text.push_str(&line);
        }
    }

    if let Some((number, text)) = current {
        messages.push(NumberedMessage::new(number, &text));
    }
    Ok(messages)
}

impl NumberedMessage {
    fn new(number: usize, text: &str) -> Self {
        Self {
            number,
            text: text.trim().to_string(),
        }
    }
}
