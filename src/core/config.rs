//! Console configuration.
//!
//! `ConsoleConfig` controls how a console session presents the lobby and
//! reads player names. It can be built in code with the `with_*` methods,
//! or loaded from a TOML file where every key is optional:
//!
//! ```toml
//! show_roster = true
//! one_word_names = false
//! separator = " | "
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Separator used when rendering a roster on one line.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Presentation and input options for a console session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Print the lobby listing before every menu.
    pub show_roster: bool,

    /// Keep only the first word of a name, like a whitespace-delimited read.
    pub one_word_names: bool,

    /// Separator for the one-line roster in `SessionSummary::roster_line`.
    pub separator: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_roster: true,
            one_word_names: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load from `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command line flags on top of this configuration.
    ///
    /// A set flag always wins over the file; an unset flag leaves the file's
    /// value alone.
    #[must_use]
    pub fn with_cli_flags(self, quiet_roster: bool, multi_word_names: bool) -> Self {
        let mut config = self;
        if quiet_roster {
            config = config.with_show_roster(false);
        }
        if multi_word_names {
            config = config.multi_word_names();
        }
        config
    }

    /// Set whether the lobby is printed before each menu.
    #[must_use]
    pub fn with_show_roster(mut self, show: bool) -> Self {
        self.show_roster = show;
        self
    }

    /// Keep whole input lines as names instead of the first word.
    #[must_use]
    pub fn multi_word_names(mut self) -> Self {
        self.one_word_names = false;
        self
    }

    /// Set the one-line roster separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
