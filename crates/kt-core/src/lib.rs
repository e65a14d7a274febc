//! Core logic for reconstructing text from keystroke logs.
//!
//! This crate contains the pipeline stages:
//! - Cleaning: stripping timestamps and separating the header line
//! - Reconstruction: replaying key events into a text buffer
//! - Tokenization: word/punctuation tokens with domain and email compounds
//! - Detection: most common word, URLs, emails and password-like strings
//! - Reporting: the fixed-layout text report

mod analyzer;
pub mod clean;
pub mod detect;
mod error;
pub mod reconstruct;
pub mod report;
pub mod token;
pub mod vocabulary;

pub use analyzer::{Analysis, Analyzer};
pub use clean::{CleanedLog, clean_lines};
pub use detect::{Detectors, WordCount};
pub use error::CoreError;
pub use reconstruct::{KeyEvent, TextBuffer, reconstruct_text};
pub use report::write_report;
pub use token::Tokenizer;
pub use vocabulary::Vocabulary;
