//! Message boundary detection for exported chat logs.
//!
//! An export line such as `12/5/23, 14:30 - Alice: hello` starts a new message.
//! Every other line belongs to the message before it. The segmenter is a
//! two-state machine: no message open yet, or one message accumulating lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// `D/M/YY, H:MM - Sender: text`, anchored at line start.
static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2} - (.*?): (.*)").unwrap()
});

/// The parts of a boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary<'a> {
    pub sender: &'a str,
    pub text: &'a str,
}

/// Parse a boundary line, or `None` for a continuation line.
pub fn parse_boundary(line: &str) -> Option<Boundary<'_>> {
    let caps = BOUNDARY_RE.captures(line)?;
    Some(Boundary {
        sender: caps.get(1).map_or("", |m| m.as_str()),
        text: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Accumulates lines into message bodies.
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Option<Vec<String>>,
    ignored_lines: usize,
}

impl Segmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line (without its line terminator).
    ///
    /// Returns the previous message body, joined with `\n`, when this line
    /// starts a new message.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        match parse_boundary(line) {
            Some(boundary) => {
                let flushed = self.finish();
                self.current = Some(vec![normalize_quotes(boundary.text)]);
                flushed
            }
            None => {
                match self.current.as_mut() {
                    Some(lines) => lines.push(normalize_quotes(line)),
                    None => self.ignored_lines += 1,
                }
                None
            }
        }
    }

    /// Close the open message, if any, and return its body.
    pub fn finish(&mut self) -> Option<String> {
        self.current.take().map(|lines| lines.join("\n"))
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Lines dropped because no message had started yet.
    pub fn ignored_lines(&self) -> usize {
        self.ignored_lines
    }
}

/// Double quotes become single quotes so numbered output never carries `"`.
fn normalize_quotes(line: &str) -> String {
    line.replace('"', "'")
}
