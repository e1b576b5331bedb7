//! Python bindings for the game lobby.
//!
//! # Quick Start
//!
//! ```python
//! import game_lobby
//!
//! lobby = game_lobby.Lobby()
//! lobby.add_player("Alice")
//! lobby.add_player("Bob")
//! print(lobby)               # Alice, Bob
//!
//! lobby.remove_player()      # "Alice"
//! lobby.clear()              # 1
//! lobby.remove_player()      # raises IndexError
//! ```

use pyo3::prelude::*;

mod py_lobby;

pub use py_lobby::*;

/// game_lobby: a first-in, first-out line of named players.
#[pymodule]
fn game_lobby(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyLobby>()?;
    Ok(())
}
