//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use kt_core::Vocabulary;
use serde::{Deserialize, Serialize};

/// Default keystroke log path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "raw_log.txt";

/// Default report path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "extracted_words.txt";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Keystroke log to read.
    pub input_path: PathBuf,
    /// Report file to write.
    pub output_path: PathBuf,
    /// Markers, character sets and word lists used by the analyzer.
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // KT_INPUT_PATH, KT_VOCABULARY__SEPARATOR, ...
        figment = figment.merge(Env::prefixed("KT_").split("__"));

        figment.extract()
    }

    /// Applies command-line path overrides.
    #[must_use]
    pub fn with_paths(mut self, input: Option<&Path>, output: Option<&Path>) -> Self {
        if let Some(input) = input {
            self.input_path = input.to_path_buf();
        }
        if let Some(output) = output {
            self.output_path = output.to_path_buf();
        }
        self
    }
}

/// Returns the platform-specific config directory for kt.
///
/// On Linux: `~/.config/kt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kt"))
}
