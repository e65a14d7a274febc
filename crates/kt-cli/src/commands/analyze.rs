//! Analyze command: reconstruct a keystroke log and write the report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use kt_core::{Analysis, Analyzer, write_report};

use crate::Config;

/// Reads the log lines of `path`.
pub fn read_log(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(String::from).collect())
}

/// Renders the report and writes it to `path` in one go.
pub fn write_report_file(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut rendered = Vec::new();
    write_report(&mut rendered, analysis).context("failed to render report")?;
    std::fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))
}

/// Runs the analysis described by `config`.
///
/// The report file is only created once the analysis has succeeded.
pub fn run<W: Write>(writer: &mut W, config: &Config, json: bool) -> Result<Analysis> {
    let analyzer =
        Analyzer::new(config.vocabulary.clone()).context("invalid vocabulary configuration")?;

    let lines = read_log(&config.input_path)?;
    tracing::debug!(path = %config.input_path.display(), lines = lines.len(), "read keystroke log");

    let analysis = analyzer
        .analyze(&lines)
        .with_context(|| format!("failed to analyze {}", config.input_path.display()))?;

    write_report_file(&config.output_path, &analysis)?;

    if json {
        let json = serde_json::to_string_pretty(&analysis)?;
        writeln!(writer, "{json}")?;
    } else {
        writeln!(
            writer,
            "Words have been output to {}",
            config.output_path.display()
        )?;
    }

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use insta::assert_snapshot;
    use tempfile::TempDir;

    const LOG: &str = "\
2024-10-16 09:00:00
2024-10-16 09:00:01,001 - h
2024-10-16 09:00:01,002 - i
2024-10-16 09:00:01,003 - Key.space
2024-10-16 09:00:01,004 - h
2024-10-16 09:00:01,005 - i
2024-10-16 09:00:01,006 - p
2024-10-16 09:00:01,007 - Key.backspace
2024-10-16 09:00:01,008 - Key.space
2024-10-16 09:00:01,009 - a
2024-10-16 09:00:01,010 - t
2024-10-16 09:00:01,011 - Key.space
2024-10-16 09:00:01,012 - x
2024-10-16 09:00:01,013 - .
2024-10-16 09:00:01,014 - i
2024-10-16 09:00:01,015 - o
2024-10-16 09:00:01,016 - Key.enter
";

    fn config_in(temp: &TempDir) -> Config {
        Config {
            input_path: temp.path().join("raw_log.txt"),
            output_path: temp.path().join("extracted_words.txt"),
            ..Config::default()
        }
    }

    #[test]
    fn writes_report_and_confirms() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.input_path, LOG).unwrap();

        let mut out = Vec::new();
        let analysis = run(&mut out, &config, false).unwrap();
        assert_eq!(analysis.text, "hi hi at x.io");

        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.starts_with("Words have been output to "));

        let report = std::fs::read_to_string(&config.output_path).unwrap();
        assert_snapshot!(report, @r"
        2024-10-16 09:00:00

        hi hi at x.io
        ---------------------------------------------------------------

        Most common word: 'hi' (appears 2 times)
        ---------------------------------------------------------------

        URLs Found: ['x.io']
        ---------------------------------------------------------------

        No Passwords detected.
        ---------------------------------------------------------------

        No Emails Found.
        ---------------------------------------------------------------
        ");
    }

    #[test]
    fn json_output_prints_analysis() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.input_path, LOG).unwrap();

        let mut out = Vec::new();
        run(&mut out, &config, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["header"], "2024-10-16 09:00:00");
        assert_eq!(value["urls"][0], "x.io");
        assert!(config.output_path.exists());
    }

    #[test]
    fn missing_input_fails_without_output() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);

        let err = run(&mut Vec::new(), &config, false).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn header_only_log_fails_without_output() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.input_path, "2024-10-16 09:00:00\n").unwrap();

        let err = run(&mut Vec::new(), &config, false).unwrap_err();
        assert!(format!("{err:#}").contains("no words found"));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn unwritable_output_fails() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            output_path: PathBuf::from(temp.path()).join("missing").join("out.txt"),
            ..config_in(&temp)
        };
        std::fs::write(&config.input_path, LOG).unwrap();

        let err = run(&mut Vec::new(), &config, false).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
    }
}
