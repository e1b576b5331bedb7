//! The game lobby: a first-in, first-out line of named players.
//!
//! Players join at the back and leave from the front, both in O(1). The
//! lobby keeps handles to the first and last player; each player links to
//! whoever joined next. Players live in a [`PlayerArena`], so the links are
//! generation-checked indices rather than pointers.
//!
//! ## Example
//!
//! ```
//! use game_lobby::{Lobby, LobbyError};
//!
//! let mut lobby = Lobby::new();
//! lobby.add_player("Alice");
//! lobby.add_player("Bob");
//! assert_eq!(lobby.roster().to_string(), "Alice, Bob");
//!
//! assert_eq!(lobby.remove_player().unwrap().name(), "Alice");
//! assert_eq!(lobby.roster().to_string(), "Bob");
//!
//! lobby.remove_player().unwrap();
//! assert_eq!(lobby.roster().to_string(), "(empty)");
//! assert_eq!(lobby.remove_player(), Err(LobbyError::Empty));
//! ```

mod roster;

pub use roster::{Names, Roster, EMPTY_ROSTER};

use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::core::{LobbyError, Player, PlayerArena, PlayerId};

/// Ordered line of players waiting for a game.
///
/// While non-empty, `head` is the oldest player and `tail` the newest, and
/// following `next` from `head` reaches every player once, ending at `tail`.
/// While empty, both are `None`.
#[derive(Clone, Debug, Default)]
pub struct Lobby {
    players: PlayerArena,
    head: Option<PlayerId>,
    tail: Option<PlayerId>,
}

impl Lobby {
    /// Create an empty lobby.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lobby with room for `capacity` players.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            players: PlayerArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Add a player to the back of the line.
    ///
    /// Names need not be unique. Returns the new player's ID.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.players.insert(Player::new(name));

        match self.tail.and_then(|tail| self.players.get_mut(tail)) {
            Some(last) => last.set_next(Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);

        debug!(player = %id, len = self.len(), "player joined lobby");
        id
    }

    /// Remove the player at the front of the line and return them.
    ///
    /// Returns [`LobbyError::Empty`] without changing anything if nobody is
    /// waiting.
    pub fn remove_player(&mut self) -> Result<Player, LobbyError> {
        let head = self.head.ok_or(LobbyError::Empty)?;
        // `head` always resolves while the lobby is non-empty.
        let player = self.players.remove(head).ok_or(LobbyError::Empty)?;

        self.head = player.next();
        if self.head.is_none() {
            self.tail = None;
        }

        debug!(player = %head, len = self.len(), "player left lobby");
        Ok(player)
    }

    /// Remove every player, front to back. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.remove_player().is_ok() {
            removed += 1;
        }
        debug!(removed, "lobby cleared");
        removed
    }

    /// Render the current line-up.
    #[must_use]
    pub fn roster(&self) -> Roster<'_> {
        if self.is_empty() {
            Roster::Empty
        } else {
            Roster::Players(self.iter())
        }
    }

    /// Iterate player names front to back.
    #[must_use]
    pub fn iter(&self) -> Names<'_> {
        Names::new(&self.players, self.head)
    }

    /// Number of waiting players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The player who will leave next.
    #[must_use]
    pub fn front(&self) -> Option<&Player> {
        self.players.get(self.head?)
    }

    /// The player who joined most recently.
    #[must_use]
    pub fn back(&self) -> Option<&Player> {
        self.players.get(self.tail?)
    }

    /// ID of the front player, `None` when empty.
    #[must_use]
    pub fn head(&self) -> Option<PlayerId> {
        self.head
    }

    /// ID of the back player, `None` when empty.
    #[must_use]
    pub fn tail(&self) -> Option<PlayerId> {
        self.tail
    }

    /// Look up a waiting player by ID.
    ///
    /// Returns `None` once the player has left.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
}

impl fmt::Display for Lobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Here's who's in the game lobby:")?;
        if self.is_empty() {
            return writeln!(f, "The lobby is empty.");
        }
        for name in self.iter() {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}

impl PartialEq for Lobby {
    fn eq(&self, other: &Self) -> bool {
        self.roster() == other.roster()
    }
}

impl Eq for Lobby {}

impl<S: Into<String>> Extend<S> for Lobby {
    fn extend<I: IntoIterator<Item = S>>(&mut self, names: I) {
        for name in names {
            self.add_player(name);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Lobby {
    fn from_iter<I: IntoIterator<Item = S>>(names: I) -> Self {
        let mut lobby = Lobby::new();
        lobby.extend(names);
        lobby
    }
}

impl<'a> IntoIterator for &'a Lobby {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serialized as the ordered list of names.
impl Serialize for Lobby {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Lobby {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}
