//! Console menu driving a [`Lobby`].
//!
//! A [`Console`] reads commands from any `BufRead` and writes its transcript
//! to any `Write`, one command at a time:
//!
//! ```text
//! GAME LOBBY
//! 0 - Exit the program.
//! 1 - Add a player to the lobby.
//! 2 - Remove a player from the lobby.
//! 3 - Clear the lobby.
//! ```
//!
//! Bad menu input and removing from an empty lobby are reported and the menu
//! is shown again. End of input ends the session like choosing `0`.
//!
//! ```
//! use game_lobby::console::Console;
//! use game_lobby::core::ConsoleConfig;
//!
//! let input = "1\nAlice\n1\nBob\n2\n0\n";
//! let mut output = Vec::new();
//! let summary = Console::new(input.as_bytes(), &mut output, ConsoleConfig::default())
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(summary.lobby.roster().to_string(), "Bob");
//! assert_eq!(summary.commands, 4);
//! ```

mod menu;

pub use menu::{parse_name, MenuChoice};

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::{ConsoleConfig, ConsoleError, MenuError};
use crate::lobby::Lobby;

/// Whether a session keeps going after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Show the menu again.
    Continue,
    /// The session is over.
    Exit,
}

/// What a finished session did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Valid menu choices processed, including the final exit.
    pub commands: usize,
    /// Menu inputs that were rejected.
    pub invalid_choices: usize,
    /// The lobby as the session left it.
    pub lobby: Lobby,
    /// Final roster on one line, joined with the configured separator.
    pub roster_line: String,
}

/// Interactive lobby session over arbitrary input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    lobby: Lobby,
    commands: usize,
    invalid_choices: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a session with an empty lobby.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
            lobby: Lobby::new(),
            commands: 0,
            invalid_choices: 0,
        }
    }

    /// Start from an existing lobby instead of an empty one.
    #[must_use]
    pub fn with_lobby(mut self, lobby: Lobby) -> Self {
        self.lobby = lobby;
        self
    }

    /// The lobby being managed.
    #[must_use]
    pub fn lobby(&self) -> &Lobby {
        &self.lobby
    }

    /// Run until the user exits or input ends.
    pub fn run(mut self) -> Result<SessionSummary, ConsoleError> {
        info!("lobby session started");
        while self.step()? == Step::Continue {}

        let summary = SessionSummary {
            commands: self.commands,
            invalid_choices: self.invalid_choices,
            roster_line: self.lobby.roster().join(&self.config.separator),
            lobby: self.lobby,
        };
        info!(
            commands = summary.commands,
            invalid = summary.invalid_choices,
            remaining = %summary.roster_line,
            "lobby session finished"
        );
        Ok(summary)
    }

    /// Show the menu, read one choice, and carry it out.
    pub fn step(&mut self) -> Result<Step, ConsoleError> {
        if self.config.show_roster {
            write!(self.output, "\n{}", self.lobby)?;
        }
        self.write_menu()?;

        let Some(bytes) = self.read_line()? else {
            debug!("input ended at menu");
            return self.exit();
        };
        let line = String::from_utf8_lossy(&bytes);

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                warn!(input = %line.trim(), "invalid menu choice");
                self.invalid_choices += 1;
                writeln!(self.output, "{err}")?;
                return Ok(Step::Continue);
            }
        };

        debug!(?choice, "menu choice");
        self.commands += 1;
        match choice {
            MenuChoice::Exit => self.exit(),
            MenuChoice::AddPlayer => self.add_player(),
            MenuChoice::RemovePlayer => self.remove_player(),
            MenuChoice::Clear => {
                let removed = self.lobby.clear();
                writeln!(self.output, "Cleared {removed} player(s) from the lobby.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn add_player(&mut self) -> Result<Step, ConsoleError> {
        write!(self.output, "Please enter the name of the new player: ")?;
        self.output.flush()?;

        let Some(bytes) = self.read_line()? else {
            debug!("input ended at name prompt");
            return self.exit();
        };

        let name = String::from_utf8(bytes)
            .map_err(|_| MenuError::UnreadableName)
            .and_then(|line| parse_name(&line, self.config.one_word_names));
        match name {
            Ok(name) => {
                self.lobby.add_player(name);
            }
            Err(err) => {
                warn!(%err, "player name rejected");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn remove_player(&mut self) -> Result<Step, ConsoleError> {
        match self.lobby.remove_player() {
            Ok(player) => writeln!(self.output, "{player} has left the lobby.")?,
            Err(err) => {
                debug!("remove requested on empty lobby");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(Step::Continue)
    }

    fn exit(&mut self) -> Result<Step, ConsoleError> {
        writeln!(self.output, "Good-bye.")?;
        self.output.flush()?;
        Ok(Step::Exit)
    }

    fn write_menu(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\nGAME LOBBY")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        write!(self.output, "\nEnter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one raw line, `None` at end of input.
    ///
    /// Bytes are left undecoded so bad encodings are reported by the caller
    /// instead of failing the read.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>, ConsoleError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, config: ConsoleConfig) -> (SessionSummary, String) {
        let mut output = Vec::new();
        let summary = Console::new(input.as_bytes(), &mut output, config)
            .run()
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (summary, out) = run("0\n", ConsoleConfig::default());

        assert_eq!(summary.commands, 1);
        assert!(summary.lobby.is_empty());
        assert!(out.contains("The lobby is empty."));
        assert!(out.ends_with("Good-bye.\n"));
    }

    #[test]
    fn test_eof_exits() {
        let (summary, out) = run("", ConsoleConfig::default());

        assert_eq!(summary.commands, 0);
        assert!(out.ends_with("Good-bye.\n"));
    }

    #[test]
    fn test_step_reports_continue() {
        let mut output = Vec::new();
        let mut console = Console::new(
            "1\nZed\n".as_bytes(),
            &mut output,
            ConsoleConfig::default(),
        );

        assert_eq!(console.step().unwrap(), Step::Continue);
        assert_eq!(console.lobby().roster().to_string(), "Zed");
        assert_eq!(console.step().unwrap(), Step::Exit);
    }

    #[test]
    fn test_menu_listing() {
        let (_, out) = run("0\n", ConsoleConfig::default().with_show_roster(false));

        assert_eq!(
            out,
            "\nGAME LOBBY\n\
             0 - Exit the program.\n\
             1 - Add a player to the lobby.\n\
             2 - Remove a player from the lobby.\n\
             3 - Clear the lobby.\n\
             \nEnter choice: Good-bye.\n"
        );
    }

    #[test]
    fn test_with_lobby() {
        let lobby: Lobby = ["Ann", "Ben"].into_iter().collect();
        let mut output = Vec::new();
        let summary = Console::new("2\n0\n".as_bytes(), &mut output, ConsoleConfig::default())
            .with_lobby(lobby)
            .run()
            .unwrap();

        assert_eq!(summary.lobby.roster().to_vec(), vec!["Ben"]);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Ann has left the lobby."));
    }
}
