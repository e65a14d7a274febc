//! Timestamp stripping for raw log lines.

use crate::error::CoreError;

/// A log split into its header and cleaned key payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedLog {
    /// First line of the log, trimmed. Never replayed.
    pub header: String,
    /// One payload per remaining line, in file order.
    pub payloads: Vec<String>,
}

/// Strip the prefix of a single line up to and including the last `separator`.
///
/// A line without the separator is kept whole. The result is trimmed.
pub fn clean_line(line: &str, separator: char) -> &str {
    match line.rfind(separator) {
        Some(idx) => line[idx + separator.len_utf8()..].trim(),
        None => {
            tracing::trace!(line, "no separator, keeping whole line");
            line.trim()
        }
    }
}

/// Split raw lines into the header and the cleaned payloads.
pub fn clean_lines<S: AsRef<str>>(lines: &[S], separator: char) -> Result<CleanedLog, CoreError> {
    let (first, rest) = lines.split_first().ok_or(CoreError::EmptyLog)?;

    let payloads: Vec<String> = rest
        .iter()
        .map(|line| clean_line(line.as_ref(), separator).to_string())
        .collect();

    tracing::debug!(lines = payloads.len(), "cleaned log lines");

    Ok(CleanedLog {
        header: first.as_ref().trim().to_string(),
        payloads,
    })
}
