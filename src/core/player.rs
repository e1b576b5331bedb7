//! Player entries and their stable identifiers.
//!
//! ## PlayerId
//!
//! Handle to an arena slot: slot index plus generation. Removing a player
//! bumps the slot's generation, so old handles stop resolving even after the
//! slot is reused.
//!
//! ## Player
//!
//! One named participant waiting in the lobby, linked to whoever joined
//! after them.

use serde::{Deserialize, Serialize};

/// Stable identifier for a player held by a [`PlayerArena`](super::PlayerArena).
///
/// ```
/// use game_lobby::core::PlayerId;
///
/// let id = PlayerId::new(3, 1);
/// assert_eq!(id.index(), 3);
/// assert_eq!(id.generation(), 1);
/// assert_eq!(format!("{}", id), "Player(3v1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId {
    index: u32,
    generation: u32,
}

impl PlayerId {
    /// Create a player ID from a slot index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Generation of the slot when this ID was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({}v{})", self.index, self.generation)
    }
}

/// A named player waiting in the lobby.
///
/// `next` points at the player who joined right after this one, or is `None`
/// for the back of the line. Only the owning lobby sets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    next: Option<PlayerId>,
}

impl Player {
    /// Create an unlinked player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next: None,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player who joined after this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<PlayerId> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<PlayerId>) {
        self.next = next;
    }

    /// Consume the player, returning the name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
