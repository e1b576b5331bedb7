//! Rendered view of a lobby.

use std::fmt;
use std::iter::FusedIterator;

use crate::core::{PlayerArena, PlayerId};

/// Marker rendered for a lobby with nobody in it.
pub const EMPTY_ROSTER: &str = "(empty)";

/// Snapshot view of who is waiting, front to back.
///
/// An empty lobby renders as [`Roster::Empty`] rather than an empty
/// sequence. A roster is `Copy`, so [`Roster::names`] can be called any
/// number of times and always restarts from the front.
///
/// ```
/// use game_lobby::Lobby;
///
/// let mut lobby = Lobby::new();
/// assert_eq!(lobby.roster().to_string(), "(empty)");
///
/// lobby.add_player("Alice");
/// lobby.add_player("Bob");
/// let roster = lobby.roster();
/// assert_eq!(roster.to_string(), "Alice, Bob");
/// assert_eq!(roster.names().count(), 2);
/// assert_eq!(roster.names().next(), Some("Alice"));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Roster<'a> {
    /// Nobody is waiting.
    Empty,
    /// At least one player is waiting.
    Players(Names<'a>),
}

impl<'a> Roster<'a> {
    /// Iterate names front to back. Empty for [`Roster::Empty`].
    #[must_use]
    pub fn names(&self) -> Names<'a> {
        match self {
            Roster::Empty => Names::empty(),
            Roster::Players(names) => *names,
        }
    }

    /// Check for the empty indicator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Roster::Empty)
    }

    /// Join the names with `separator`, or return the empty marker.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        match self {
            Roster::Empty => EMPTY_ROSTER.to_string(),
            Roster::Players(_) => self.names().collect::<Vec<_>>().join(separator),
        }
    }

    /// Collect the names into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&'a str> {
        self.names().collect()
    }
}

impl fmt::Display for Roster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(crate::core::DEFAULT_SEPARATOR))
    }
}

impl PartialEq for Roster<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() == other.is_empty() && self.names().eq(other.names())
    }
}

impl Eq for Roster<'_> {}

/// Iterator over player names, following each player's `next` link.
#[derive(Clone, Copy, Debug)]
pub struct Names<'a> {
    players: Option<&'a PlayerArena>,
    cursor: Option<PlayerId>,
    remaining: usize,
}

impl<'a> Names<'a> {
    pub(crate) fn new(players: &'a PlayerArena, head: Option<PlayerId>) -> Self {
        Self {
            players: Some(players),
            cursor: head,
            remaining: players.len(),
        }
    }

    fn empty() -> Self {
        Self {
            players: None,
            cursor: None,
            remaining: 0,
        }
    }
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let player = self.players?.get(self.cursor?)?;
        self.cursor = player.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(player.name())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_none() {
            (0, Some(0))
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}

impl ExactSizeIterator for Names<'_> {}

impl FusedIterator for Names<'_> {}

#[cfg(test)]
mod tests {
    use crate::Lobby;

    use super::*;

    #[test]
    fn test_empty_roster() {
        let lobby = Lobby::new();
        let roster = lobby.roster();

        assert!(roster.is_empty());
        assert_eq!(roster, Roster::Empty);
        assert_eq!(roster.names().next(), None);
        assert_eq!(roster.to_string(), EMPTY_ROSTER);
        assert_eq!(roster.join(" | "), EMPTY_ROSTER);
    }

    #[test]
    fn test_roster_is_restartable() {
        let lobby: Lobby = ["A", "B", "C"].into_iter().collect();
        let roster = lobby.roster();

        let first: Vec<_> = roster.names().collect();
        let second: Vec<_> = roster.names().collect();
        assert_eq!(first, vec!["A", "B", "C"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_names_exact_size() {
        let lobby: Lobby = ["A", "B", "C"].into_iter().collect();
        let mut names = lobby.roster().names();

        assert_eq!(names.len(), 3);
        names.next();
        assert_eq!(names.len(), 2);
        names.next();
        names.next();
        assert_eq!(names.len(), 0);
        assert_eq!(names.next(), None);
    }

    #[test]
    fn test_join_separator() {
        let lobby: Lobby = ["A", "B"].into_iter().collect();
        assert_eq!(lobby.roster().join(" | "), "A | B");
        assert_eq!(lobby.roster().to_vec(), vec!["A", "B"]);
    }

    #[test]
    fn test_roster_equality_across_lobbies() {
        let a: Lobby = ["X", "Y"].into_iter().collect();
        let b: Lobby = ["X", "Y"].into_iter().collect();
        let c: Lobby = ["X"].into_iter().collect();

        assert_eq!(a.roster(), b.roster());
        assert_ne!(a.roster(), c.roster());
        assert_ne!(c.roster(), Roster::Empty);
    }
}
