//! Entity detectors over reconstructed text and merged tokens.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;
use crate::vocabulary::Vocabulary;

/// The most frequent non-stop word and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Compiled detectors for one vocabulary.
#[derive(Debug, Clone)]
pub struct Detectors {
    word_re: Regex,
    /// `None` when the vocabulary has no domain suffixes.
    url_re: Option<Regex>,
    vocab: Vocabulary,
}

impl Detectors {
    pub fn new(vocab: &Vocabulary) -> Result<Self, CoreError> {
        let word_re = Regex::new(r"\w+").map_err(|source| CoreError::InvalidPattern {
            name: "word",
            source,
        })?;

        let url_re = if vocab.domains.is_empty() {
            None
        } else {
            let suffixes: Vec<String> = vocab.domains.iter().map(|d| regex::escape(d)).collect();
            let pattern = format!(r"^(?:[A-Za-z0-9-]+\.)+(?:{})$", suffixes.join("|"));
            let re = Regex::new(&pattern).map_err(|source| CoreError::InvalidPattern {
                name: "url",
                source,
            })?;
            Some(re)
        };

        Ok(Self {
            word_re,
            url_re,
            vocab: vocab.clone(),
        })
    }

    /// Word runs of `text` with stop words removed, in order.
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.word_re
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| !self.vocab.is_stop_word(w))
            .collect()
    }

    /// Most common word of `text`, ignoring stop words.
    pub fn most_common_word(&self, text: &str) -> Result<WordCount, CoreError> {
        most_common(&self.words(text))
    }

    /// Tokens shaped like `label.tld` that are not email-like.
    pub fn urls(&self, tokens: &[String]) -> Vec<String> {
        let Some(url_re) = &self.url_re else {
            return Vec::new();
        };
        tokens
            .iter()
            .filter(|t| !t.contains('@') && url_re.is_match(t))
            .cloned()
            .collect()
    }

    /// Whitespace-delimited substrings of `text` that look like passwords.
    pub fn passwords(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|w| self.is_password_like(w))
            .map(ToString::to_string)
            .collect()
    }

    /// Only allowed characters, with a digit that is neither first nor last.
    ///
    /// A heuristic, not a strength check.
    pub fn is_password_like(&self, candidate: &str) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        if chars.len() < 3 || !chars.iter().all(|&c| self.vocab.is_password_char(c)) {
            return false;
        }
        chars[1..chars.len() - 1].iter().any(char::is_ascii_digit)
    }
}

/// Count words case-insensitively and return the most frequent one.
///
/// The reported spelling is the first one seen. Among equal counts the word
/// seen first wins.
pub fn most_common<S: AsRef<str>>(words: &[S]) -> Result<WordCount, CoreError> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for word in words {
        let word = word.as_ref();
        let slot = *index.entry(word.to_lowercase()).or_insert_with(|| {
            counts.push(WordCount {
                word: word.to_string(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    let mut best: Option<WordCount> = None;
    for entry in counts {
        if best.as_ref().is_none_or(|b| entry.count > b.count) {
            best = Some(entry);
        }
    }
    best.ok_or(CoreError::NoWords)
}
