//! Lobby bindings for Python.

use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::lobby::Lobby;

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Arena slot index.
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Slot generation when the ID was issued.
    #[getter]
    fn generation(&self) -> u32 {
        self.0.generation()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({}, {})", self.0.index(), self.0.generation())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.index() as u64) << 32) | u64::from(self.0.generation())
    }
}

/// Python wrapper for Lobby.
#[pyclass(name = "Lobby")]
#[derive(Clone, Debug, Default)]
pub struct PyLobby {
    lobby: Lobby,
}

#[pymethods]
impl PyLobby {
    /// Create a lobby, optionally pre-filled with names in order.
    #[new]
    #[pyo3(signature = (names = None))]
    fn new(names: Option<Vec<String>>) -> Self {
        Self {
            lobby: names.unwrap_or_default().into_iter().collect(),
        }
    }

    /// Add a player to the back of the line.
    fn add_player(&mut self, name: String) -> PyPlayerId {
        PyPlayerId(self.lobby.add_player(name))
    }

    /// Remove the front player and return their name.
    ///
    /// Raises IndexError if the lobby is empty.
    fn remove_player(&mut self) -> PyResult<String> {
        self.lobby
            .remove_player()
            .map(|player| player.into_name())
            .map_err(|err| PyIndexError::new_err(err.to_string()))
    }

    /// Remove everyone. Returns how many were removed.
    fn clear(&mut self) -> usize {
        self.lobby.clear()
    }

    /// Names front to back, or None when the lobby is empty.
    fn roster(&self) -> Option<Vec<String>> {
        let roster = self.lobby.roster();
        if roster.is_empty() {
            None
        } else {
            Some(roster.names().map(str::to_string).collect())
        }
    }

    /// Front player's name, if any.
    fn front(&self) -> Option<String> {
        self.lobby.front().map(|p| p.name().to_string())
    }

    fn __len__(&self) -> usize {
        self.lobby.len()
    }

    fn __str__(&self) -> String {
        self.lobby.roster().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Lobby({})", self.lobby.roster())
    }
}
