//! Menu entries and input parsing.

use std::fmt;
use std::str::FromStr;

use crate::core::MenuError;

/// One entry of the lobby menu.
///
/// Entries are numbered as shown to the user:
///
/// ```
/// use game_lobby::console::MenuChoice;
///
/// assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddPlayer));
/// assert_eq!(" 0 ".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
/// assert!("7".parse::<MenuChoice>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Leave the program.
    Exit,
    /// Prompt for a name and add that player.
    AddPlayer,
    /// Remove the player at the front.
    RemovePlayer,
    /// Remove everyone.
    Clear,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Exit,
        MenuChoice::AddPlayer,
        MenuChoice::RemovePlayer,
        MenuChoice::Clear,
    ];

    /// Number typed to pick this entry.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::AddPlayer => 1,
            MenuChoice::RemovePlayer => 2,
            MenuChoice::Clear => 3,
        }
    }

    /// Text shown next to the number.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit the program.",
            MenuChoice::AddPlayer => "Add a player to the lobby.",
            MenuChoice::RemovePlayer => "Remove a player from the lobby.",
            MenuChoice::Clear => "Clear the lobby.",
        }
    }

    /// Look up an entry by number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| MenuError::InvalidChoice(trimmed.to_string()))
    }
}

/// Turn a line typed at the name prompt into a player name.
///
/// With `one_word` only the first whitespace-separated word is kept;
/// otherwise the trimmed line is used as is.
///
/// ```
/// use game_lobby::console::parse_name;
///
/// assert_eq!(parse_name("  Ada Lovelace\n", true).unwrap(), "Ada");
/// assert_eq!(parse_name("  Ada Lovelace\n", false).unwrap(), "Ada Lovelace");
/// assert!(parse_name("   \n", true).is_err());
/// ```
pub fn parse_name(line: &str, one_word: bool) -> Result<String, MenuError> {
    let name = if one_word {
        line.split_whitespace().next().unwrap_or_default()
    } else {
        line.trim()
    };

    if name.is_empty() {
        Err(MenuError::BlankName)
    } else {
        Ok(name.to_string())
    }
}
