//! Tokenization and compound merging of reconstructed text.
//!
//! Tokens are maximal word runs or single punctuation characters. A second
//! pass joins `word . tld` into a domain token and `word @ word` into an
//! email-like token so that they survive as one unit in the report.

use regex::Regex;

use crate::error::CoreError;
use crate::vocabulary::Vocabulary;

/// Email-shaped substrings, matched against the raw text.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Splits text into tokens and merges compounds.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    token_re: Regex,
    email_re: Regex,
    domains: Vec<String>,
}

/// Build a character class matching exactly the characters of `chars`.
pub(crate) fn char_class(chars: &str) -> String {
    let escaped: String = chars.chars().map(|c| regex::escape(c.encode_utf8(&mut [0; 4]))).collect();
    format!("[{escaped}]")
}

/// Returns true for a non-empty token made only of alphabetic characters.
pub fn is_alpha(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

impl Tokenizer {
    pub fn new(vocab: &Vocabulary) -> Result<Self, CoreError> {
        let pattern = if vocab.punctuation.is_empty() {
            r"\w+".to_string()
        } else {
            format!(r"\w+|{}", char_class(&vocab.punctuation))
        };
        let token_re = Regex::new(&pattern).map_err(|source| CoreError::InvalidPattern {
            name: "token",
            source,
        })?;
        let email_re = Regex::new(EMAIL_PATTERN).map_err(|source| CoreError::InvalidPattern {
            name: "email",
            source,
        })?;

        Ok(Self {
            token_re,
            email_re,
            domains: vocab.domains.clone(),
        })
    }

    /// Split text into word runs and single punctuation characters.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.token_re.find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Merge `alpha . domain` and `alpha @ alpha` triples into single tokens.
    ///
    /// At each position the domain merge is tried before the email merge, and
    /// at most one merge applies.
    pub fn merge_compounds(&self, raw: &[&str]) -> Vec<String> {
        let mut merged = Vec::with_capacity(raw.len());
        let mut i = 0;

        while i < raw.len() {
            if let &[head, delim, tail, ..] = &raw[i..] {
                if is_alpha(head) && delim == "." && self.domains.iter().any(|d| d == tail) {
                    merged.push(format!("{head}.{tail}"));
                    i += 3;
                    continue;
                }
                if is_alpha(head) && delim == "@" && is_alpha(tail) {
                    merged.push(format!("{head}@{tail}"));
                    i += 3;
                    continue;
                }
            }
            merged.push(raw[i].to_string());
            i += 1;
        }

        merged
    }

    /// Tokenize and merge in one step.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let raw = self.tokenize(text);
        let merged = self.merge_compounds(&raw);
        tracing::debug!(raw = raw.len(), merged = merged.len(), "tokenized text");
        merged
    }

    /// Extract email addresses directly from the text.
    ///
    /// Independent of [`Self::merge_compounds`]; the two may report the same
    /// address in different shapes.
    pub fn emails(&self, text: &str) -> Vec<String> {
        self.email_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
