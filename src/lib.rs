//! # game-lobby
//!
//! A game lobby: a first-in, first-out line of named players waiting for a
//! game, with a console menu to manage it.
//!
//! ## Design Principles
//!
//! 1. **O(1) at both ends**: joining appends behind the tracked tail, leaving
//!    pops the tracked head. No operation walks the line except rendering.
//!
//! 2. **Indices, not pointers**: players live in a slot arena and link to
//!    each other by generation-checked [`PlayerId`]s. A stale ID never
//!    resolves to whoever reused the slot.
//!
//! 3. **Recoverable by default**: removing from an empty lobby and bad menu
//!    input are ordinary errors reported to the user. Only I/O failures end
//!    a session.
//!
//! ## Modules
//!
//! - `core`: Player entries, the slot arena, errors, configuration
//! - `lobby`: The lobby and its rendered roster
//! - `console`: Menu-driven session over any reader and writer
//! - `python`: PyO3 bindings (feature `python`)

pub mod console;
pub mod core;
pub mod lobby;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, ConsoleConfig, ConsoleError, LobbyError, MenuError,
    Player, PlayerArena, PlayerId,
};

pub use crate::lobby::{Lobby, Names, Roster, EMPTY_ROSTER};

pub use crate::console::{Console, MenuChoice, SessionSummary, Step};
