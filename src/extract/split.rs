//! Line-aligned splitting of oversized messages.

/// Default chunk limit, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 19_000;

/// Split `message` into chunks of at most `max_length` characters.
///
/// Messages within the limit come back unchanged as a single chunk. Longer
/// messages are packed greedily on `\n` boundaries; each chunk is trimmed of
/// trailing whitespace and chunks that trim to nothing are dropped. A single
/// line longer than `max_length` is kept whole as its own chunk.
pub fn split_long_message(message: &str, max_length: usize) -> Vec<String> {
    if message.chars().count() <= max_length {
        return vec![message.to_string()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    // Character count of `current`, including its trailing newline.
    let mut current_len = 0;

    for line in message.split('\n') {
        let line_len = line.chars().count();
        if current_len + line_len + 1 > max_length {
            push_trimmed(&mut parts, &current);
            current.clear();
            current_len = 0;
        }
        current.push_str(line);
        current.push('\n');
        current_len += line_len + 1;
    }

    push_trimmed(&mut parts, &current);
    parts
}

fn push_trimmed(parts: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim_end();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}
