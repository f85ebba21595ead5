//! Phone number, link and name redaction transforms.
//!
//! All three replace matches with fixed canonical literals so that every
//! cleaned message points readers at the same contact and channel.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Transform;

/// Replacement for every phone-number-like substring.
pub const CANONICAL_PHONE: &str = "2348055889183";

/// Replacement for every link-like substring.
pub const CANONICAL_CHANNEL_URL: &str = "https://whatsapp.com/channel/0029VaALswPCRs1qNr0IJW2e";

/// Optional +234/+233 or leading 0, then a 3-3-4 digit grouping.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\+?(234|233)|0)?[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap());

/// Ordered name substitutions. Each rule is one case-insensitive pass.
const NAME_RULES: &[(&str, &str)] = &[
    ("Coolval", "Novels Republic"),
    ("kwaku", "Novels Republic"),
    (
        "zero eight zero three six nine five six four seven one",
        "+2348055889183",
    ),
    ("hi phoenix", "hi NovelsRepublic"),
];

/// Replaces phone-number-like substrings with [`CANONICAL_PHONE`].
pub struct RedactPhoneNumbers;

impl Transform for RedactPhoneNumbers {
    fn transform(&mut self, message: &mut String) {
        replace_in_place(&PHONE_RE, message, CANONICAL_PHONE);
    }
}

/// Replaces `http://`, `https://` and `www.` tokens with [`CANONICAL_CHANNEL_URL`].
pub struct RedactLinks;

impl Transform for RedactLinks {
    fn transform(&mut self, message: &mut String) {
        replace_in_place(&LINK_RE, message, CANONICAL_CHANNEL_URL);
    }
}

/// Applies the fixed name substitution table in order.
pub struct SubstituteNames {
    rules: Vec<(Regex, &'static str)>,
}

impl Default for SubstituteNames {
    fn default() -> Self {
        let rules = NAME_RULES
            .iter()
            .map(|(target, replacement)| {
                let pattern = format!("(?i){}", regex::escape(target));
                (Regex::new(&pattern).unwrap(), *replacement)
            })
            .collect();
        Self { rules }
    }
}

impl Transform for SubstituteNames {
    fn transform(&mut self, message: &mut String) {
        for (pattern, replacement) in &self.rules {
            replace_in_place(pattern, message, replacement);
        }
    }
}

/// Replace every match literally, leaving the string untouched when nothing matches.
fn replace_in_place(pattern: &Regex, message: &mut String, replacement: &str) {
    let replaced = match pattern.replace_all(message, regex::NoExpand(replacement)) {
        Cow::Owned(replaced) => replaced,
        Cow::Borrowed(_) => return,
    };
    *message = replaced;
}
