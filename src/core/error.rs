//! Error types.
//!
//! Lobby and menu errors are recoverable: the console reports them and
//! carries on. Only I/O and configuration failures end a session.

use std::path::PathBuf;

/// Errors from lobby operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LobbyError {
    /// Removal was requested but nobody is waiting.
    #[error("The game lobby is empty. No one to remove!")]
    Empty,
}

/// Errors from interpreting a line of menu input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// Input did not name a menu entry.
    #[error("That was not a valid choice.")]
    InvalidChoice(String),

    /// The player name prompt got nothing usable.
    #[error("A player needs a name. Nobody was added.")]
    BlankName,

    /// The name prompt got bytes that are not valid UTF-8.
    #[error("That name could not be read. Nobody was added.")]
    UnreadableName,
}

/// Fatal errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading a console configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ConsoleConfig`](super::ConsoleConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
