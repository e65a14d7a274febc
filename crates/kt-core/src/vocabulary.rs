//! Character classes, key markers and fixed word sets used by the pipeline.
//!
//! Everything the tokenizer and detectors match against is enumerated here so
//! that a single value describes the exact behavior of an [`Analyzer`].
//!
//! [`Analyzer`]: crate::Analyzer

use serde::{Deserialize, Serialize};

/// Separator between the timestamp prefix and the key payload.
pub const DEFAULT_SEPARATOR: char = '-';

/// Payload of the space key.
pub const SPACE_KEY: &str = "Key.space";

/// Payload of the backspace key.
pub const BACKSPACE_KEY: &str = "Key.backspace";

/// Prefix shared by every named (non-printable) key.
pub const SPECIAL_KEY_PREFIX: &str = "Key.";

/// Single-character tokens emitted alongside word runs.
pub const PUNCTUATION: &str = ".,!?;()/@&*^%#$~=+";

/// Non-alphanumeric characters allowed inside a password candidate.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+={}[]:;'\"<>,.?/\\|-";

/// Recognized top-level domain suffixes.
pub const DOMAINS: &[&str] = &["com", "org", "net", "gov", "edu", "io", "co", "me", "us"];

/// Function words excluded from most-common-word counting.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "is", "are", "of", "to", "in", "on", "for", "it", "with", "at", "by",
    "this",
];

/// Matching vocabulary for one analysis run.
///
/// Every field can be overridden from configuration; unspecified fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Separator between the timestamp prefix and the payload of a log line.
    pub separator: char,
    /// Payload that appends a space.
    pub space_key: String,
    /// Payload that deletes the last character.
    pub backspace_key: String,
    /// Prefix of payloads that contribute no text.
    pub special_key_prefix: String,
    /// Characters emitted as single-character tokens.
    pub punctuation: String,
    /// Symbols allowed in password candidates besides letters and digits.
    pub password_symbols: String,
    /// Top-level domain suffixes.
    pub domains: Vec<String>,
    /// Words ignored when counting the most common word (lowercase).
    pub stop_words: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            space_key: SPACE_KEY.to_string(),
            backspace_key: BACKSPACE_KEY.to_string(),
            special_key_prefix: SPECIAL_KEY_PREFIX.to_string(),
            punctuation: PUNCTUATION.to_string(),
            password_symbols: PASSWORD_SYMBOLS.to_string(),
            domains: DOMAINS.iter().map(ToString::to_string).collect(),
            stop_words: STOP_WORDS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Vocabulary {
    /// Returns true if `word` is one of the domain suffixes (case-sensitive).
    pub fn is_domain(&self, word: &str) -> bool {
        self.domains.iter().any(|d| d == word)
    }

    /// Returns true if `word` is a stop word, ignoring case.
    pub fn is_stop_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.stop_words.iter().any(|s| *s == lower)
    }

    /// Returns true if `c` may appear in a password candidate.
    pub fn is_password_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.password_symbols.contains(c)
    }
}
