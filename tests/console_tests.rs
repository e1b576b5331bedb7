//! Console session tests.
//!
//! Scripted input is fed through a `Console` and the transcript and final
//! lobby are checked.

use game_lobby::{Console, ConsoleConfig};

fn session(input: &str, config: ConsoleConfig) -> (game_lobby::SessionSummary, String) {
    session_bytes(input.as_bytes(), config)
}

fn session_bytes(input: &[u8], config: ConsoleConfig) -> (game_lobby::SessionSummary, String) {
    let mut output = Vec::new();
    let summary = Console::new(input, &mut output, config)
        .run()
        .expect("in-memory session should not fail");
    (summary, String::from_utf8(output).unwrap())
}

/// Adding, listing and removing through the menu.
#[test]
fn test_add_and_remove() {
    let (summary, out) = session("1\nAlice\n1\nBob\n2\n0\n", ConsoleConfig::default());

    assert_eq!(summary.lobby.roster().to_vec(), vec!["Bob"]);
    assert!(out.contains("Here's who's in the game lobby:\nAlice\nBob\n"));
    assert!(out.contains("Alice has left the lobby."));
    assert!(out.contains("Here's who's in the game lobby:\nBob\n"));
}

/// Removing from an empty lobby prints a message and the session continues.
#[test]
fn test_remove_from_empty() {
    let (summary, out) = session("2\n2\n1\nZoe\n0\n", ConsoleConfig::default());

    assert_eq!(
        out.matches("The game lobby is empty. No one to remove!").count(),
        2
    );
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Zoe"]);
    assert_eq!(summary.commands, 4);
}

/// Unknown choices are reported, counted, and leave the lobby untouched.
#[test]
fn test_invalid_choices() {
    let (summary, out) = session("1\nAmy\n9\nabc\n\n0\n", ConsoleConfig::default());

    assert_eq!(out.matches("That was not a valid choice.").count(), 3);
    assert_eq!(summary.invalid_choices, 3);
    assert_eq!(summary.commands, 2);
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Amy"]);
    // Menu shown once per prompt: two valid choices plus three invalid ones.
    assert_eq!(out.matches("GAME LOBBY").count(), 5);
}

/// Clearing empties the lobby.
#[test]
fn test_clear() {
    let (summary, out) = session("1\nA\n1\nB\n1\nC\n3\n0\n", ConsoleConfig::default());

    assert!(summary.lobby.is_empty());
    assert!(out.contains("Cleared 3 player(s) from the lobby."));
    assert!(out.contains("The lobby is empty."));
}

/// Only the first word of a name is kept by default.
#[test]
fn test_one_word_names() {
    let (summary, _) = session("1\nMary Jane\n0\n", ConsoleConfig::default());
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Mary"]);
}

/// Whole lines are kept with multi-word names enabled.
#[test]
fn test_multi_word_names() {
    let config = ConsoleConfig::default().multi_word_names();
    let (summary, _) = session("1\n  Mary Jane  \n0\n", config);
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Mary Jane"]);
}

/// A blank name is refused.
#[test]
fn test_blank_name() {
    let (summary, out) = session("1\n   \n0\n", ConsoleConfig::default());

    assert!(summary.lobby.is_empty());
    assert!(out.contains("A player needs a name. Nobody was added."));
}

/// Running out of input at the name prompt ends the session cleanly.
#[test]
fn test_eof_at_name_prompt() {
    let (summary, out) = session("1\n", ConsoleConfig::default());

    assert!(summary.lobby.is_empty());
    assert!(out.ends_with("Please enter the name of the new player: Good-bye.\n"));
}

/// The roster listing can be turned off.
#[test]
fn test_quiet_roster() {
    let config = ConsoleConfig::default().with_show_roster(false);
    let (_, out) = session("1\nAl\n0\n", config);

    assert!(!out.contains("Here's who's in the game lobby:"));
}

/// Duplicate names are ordinary entries.
#[test]
fn test_duplicate_names() {
    let (summary, _) = session("1\nSam\n1\nSam\n2\n0\n", ConsoleConfig::default());
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Sam"]);
}

/// Menu input that is not UTF-8 is an invalid choice, not a dead session.
#[test]
fn test_non_utf8_menu_choice() {
    let (summary, out) = session_bytes(b"1\nAlice\n\xff\xfe\n2\n0\n", ConsoleConfig::default());

    assert_eq!(summary.invalid_choices, 1);
    assert_eq!(out.matches("That was not a valid choice.").count(), 1);
    assert!(out.contains("Alice has left the lobby."));
    assert!(summary.lobby.is_empty());
    assert!(out.ends_with("Good-bye.\n"));
}

/// A name that is not UTF-8 is refused and the session carries on.
#[test]
fn test_non_utf8_name() {
    let (summary, out) = session_bytes(b"1\n\xc3\x28\n1\nBea\n0\n", ConsoleConfig::default());

    assert!(out.contains("That name could not be read. Nobody was added."));
    assert_eq!(summary.lobby.roster().to_vec(), vec!["Bea"]);
    assert_eq!(summary.commands, 3);
}

/// The summary renders the final roster with the configured separator.
#[test]
fn test_summary_roster_line() {
    let config = ConsoleConfig::default().with_separator(" | ");
    let (summary, _) = session("1\nAnn\n1\nBen\n0\n", config);
    assert_eq!(summary.roster_line, "Ann | Ben");

    let (summary, _) = session("0\n", ConsoleConfig::default());
    assert_eq!(summary.roster_line, "(empty)");
}
