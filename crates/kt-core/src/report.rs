//! Plain-text report rendering.

use std::io::Write;

use crate::analyzer::Analysis;
use crate::error::CoreError;

/// Rule written after every section.
pub const SECTION_RULE: &str = "---------------------------------------------------------------";

/// Quote a string the way list items appear in the report.
///
/// Single quotes unless the item contains a single quote and no double quote.
fn quote(item: &str) -> String {
    let delim = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(item.len() + 2);
    out.push(delim);
    for c in item.chars() {
        if c == '\\' || c == delim {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delim);
    out
}

/// Render items as `['a', 'b']`.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

fn write_rule<W: Write>(writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "{SECTION_RULE}")?;
    writeln!(writer)
}

fn write_list_section<W: Write>(
    writer: &mut W,
    label: &str,
    empty: &str,
    items: &[String],
) -> std::io::Result<()> {
    if items.is_empty() {
        writeln!(writer, "{empty}")?;
    } else {
        writeln!(writer, "{label}: {}", format_list(items))?;
    }
    write_rule(writer)
}

/// Write the full report for an analysis.
pub fn write_report<W: Write>(writer: &mut W, analysis: &Analysis) -> Result<(), CoreError> {
    writeln!(writer, "{}", analysis.header)?;
    writeln!(writer)?;

    writeln!(writer, "{}", analysis.tokens.join(" "))?;
    write_rule(writer)?;

    writeln!(
        writer,
        "Most common word: '{}' (appears {} times)",
        analysis.most_common.word, analysis.most_common.count
    )?;
    write_rule(writer)?;

    write_list_section(writer, "URLs Found", "No URLs Found.", &analysis.urls)?;
    write_list_section(
        writer,
        "Potential Passwords found",
        "No Passwords detected.",
        &analysis.passwords,
    )?;
    write_list_section(writer, "Emails Found", "No Emails Found.", &analysis.emails)?;

    Ok(())
}
