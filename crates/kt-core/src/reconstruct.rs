//! Replay of key events into text.

use std::fmt;

use crate::vocabulary::Vocabulary;

/// A cleaned payload classified by its textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent<'a> {
    /// Appends one space.
    Space,
    /// Removes the last character, if any.
    Backspace,
    /// Named key that contributes no text (enter, shift, ...).
    Special(&'a str),
    /// Text appended verbatim.
    Literal(&'a str),
}

impl<'a> KeyEvent<'a> {
    /// Classify a payload.
    ///
    /// Space and backspace must match exactly; any other payload starting with
    /// the special prefix is ignored.
    pub fn classify(payload: &'a str, vocab: &Vocabulary) -> Self {
        if payload == vocab.space_key {
            Self::Space
        } else if payload == vocab.backspace_key {
            Self::Backspace
        } else if payload.starts_with(vocab.special_key_prefix.as_str()) {
            Self::Special(payload)
        } else {
            Self::Literal(payload)
        }
    }
}

/// Text accumulated from key events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the buffer.
    pub fn apply(&mut self, event: KeyEvent<'_>) {
        match event {
            KeyEvent::Space => self.text.push(' '),
            KeyEvent::Backspace => {
                // Empty buffer: nothing to delete.
                self.text.pop();
            }
            KeyEvent::Special(name) => tracing::trace!(key = name, "ignored special key"),
            KeyEvent::Literal(s) => self.text.push_str(s),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replay payloads in order and return the resulting text.
pub fn reconstruct_text<S: AsRef<str>>(payloads: &[S], vocab: &Vocabulary) -> String {
    let mut buffer = TextBuffer::new();
    for payload in payloads {
        buffer.apply(KeyEvent::classify(payload.as_ref(), vocab));
    }
    tracing::debug!(chars = buffer.as_str().chars().count(), "reconstructed text");
    buffer.into_string()
}
