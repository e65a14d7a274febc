//! The full pipeline from raw log lines to extracted entities.

use serde::Serialize;

use crate::clean::clean_lines;
use crate::detect::{Detectors, WordCount};
use crate::error::CoreError;
use crate::reconstruct::reconstruct_text;
use crate::token::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Everything extracted from one keystroke log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// First line of the log.
    pub header: String,
    /// Text reconstructed from the key events.
    pub text: String,
    /// Tokens after compound merging.
    pub tokens: Vec<String>,
    pub most_common: WordCount,
    pub urls: Vec<String>,
    pub passwords: Vec<String>,
    /// Matches of the email pattern over the raw text.
    pub emails: Vec<String>,
}

/// Runs the pipeline with patterns compiled once from a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    vocab: Vocabulary,
    tokenizer: Tokenizer,
    detectors: Detectors,
}

impl Analyzer {
    pub fn new(vocab: Vocabulary) -> Result<Self, CoreError> {
        let tokenizer = Tokenizer::new(&vocab)?;
        let detectors = Detectors::new(&vocab)?;
        Ok(Self {
            vocab,
            tokenizer,
            detectors,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn detectors(&self) -> &Detectors {
        &self.detectors
    }

    /// Analyze the lines of a log, header first.
    pub fn analyze<S: AsRef<str>>(&self, lines: &[S]) -> Result<Analysis, CoreError> {
        let cleaned = clean_lines(lines, self.vocab.separator)?;
        let text = reconstruct_text(&cleaned.payloads, &self.vocab);
        self.analyze_text(cleaned.header, text)
    }

    /// Analyze already reconstructed text.
    pub fn analyze_text(&self, header: String, text: String) -> Result<Analysis, CoreError> {
        let passwords = self.detectors.passwords(&text);
        let tokens = self.tokenizer.tokens(&text);
        let emails = self.tokenizer.emails(&text);
        let most_common = self.detectors.most_common_word(&text)?;
        let urls = self.detectors.urls(&tokens);

        tracing::debug!(
            tokens = tokens.len(),
            urls = urls.len(),
            passwords = passwords.len(),
            emails = emails.len(),
            "analysis complete"
        );

        Ok(Analysis {
            header,
            text,
            tokens,
            most_common,
            urls,
            passwords,
            emails,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(Vocabulary::default()).unwrap()
    }

    /// Build log lines that type `text`, one key per line.
    fn typed(text: &str) -> Vec<String> {
        let mut lines = vec!["2024-10-16 09:00:00".to_string()];
        for c in text.chars() {
            let key = if c == ' ' {
                "Key.space".to_string()
            } else {
                c.to_string()
            };
            lines.push(format!("2024-10-16 09:00:01,000 - {key}"));
        }
        lines
    }

    #[test]
    fn analyzes_typed_log() {
        let analysis = analyzer()
            .analyze(&typed("go to example . com now"))
            .unwrap();

        assert_eq!(analysis.header, "2024-10-16 09:00:00");
        assert_eq!(analysis.text, "go to example . com now");
        assert!(analysis.tokens.contains(&"example.com".to_string()));
        assert_eq!(analysis.urls, vec!["example.com"]);
        assert!(analysis.emails.is_empty());
    }

    #[test]
    fn edits_and_special_keys_are_applied() {
        let lines = [
            "header",
            "t - h",
            "t - x",
            "t - Key.backspace",
            "t - i",
            "t - Key.enter",
            "t - Key.space",
            "t - h",
            "t - i",
        ];
        let analysis = analyzer().analyze(&lines).unwrap();
        assert_eq!(analysis.text, "hi hi");
        assert_eq!(analysis.most_common.word, "hi");
        assert_eq!(analysis.most_common.count, 2);
    }

    #[test]
    fn finds_emails_and_passwords() {
        let analysis = analyzer()
            .analyze_text(
                "h".to_string(),
                "contact me at foo@bar.com please use secret99x".to_string(),
            )
            .unwrap();
        assert_eq!(analysis.emails, vec!["foo@bar.com"]);
        assert_eq!(analysis.passwords, vec!["secret99x"]);
        assert!(analysis.tokens.contains(&"foo@bar".to_string()));
        assert!(analysis.urls.is_empty());
    }

    #[test]
    fn header_only_log_has_no_words() {
        let err = analyzer().analyze(&["only a header"]).unwrap_err();
        assert!(matches!(err, CoreError::NoWords));
    }

    #[test]
    fn empty_log_has_no_header() {
        let lines: [&str; 0] = [];
        let err = analyzer().analyze(&lines).unwrap_err();
        assert!(matches!(err, CoreError::EmptyLog));
    }

    #[test]
    fn custom_vocabulary() {
        let vocab = Vocabulary {
            separator: '|',
            domains: vec!["dev".to_string()],
            ..Vocabulary::default()
        };
        let analyzer = Analyzer::new(vocab).unwrap();
        let lines = ["h", "t|r", "t|s", "t|.", "t|d", "t|e", "t|v"];
        let analysis = analyzer.analyze(&lines).unwrap();
        assert_eq!(analysis.urls, vec!["rs.dev"]);
    }

    #[test]
    fn analysis_serializes_to_json() {
        let analysis = analyzer()
            .analyze_text("h".to_string(), "hello hello".to_string())
            .unwrap();
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["most_common"]["word"], "hello");
        assert_eq!(json["most_common"]["count"], 2);
        assert_eq!(json["tokens"].as_array().unwrap().len(), 2);
    }
}
