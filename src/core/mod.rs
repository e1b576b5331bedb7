//! Core types: player entries, their arena, errors, configuration.
//!
//! The lobby and the console are built on these; nothing here does I/O
//! except loading a config file.

pub mod arena;
pub mod config;
pub mod error;
pub mod player;

pub use arena::PlayerArena;
pub use config::{ConsoleConfig, DEFAULT_SEPARATOR};
pub use error::{ConfigError, ConsoleError, LobbyError, MenuError};
pub use player::{Player, PlayerId};
