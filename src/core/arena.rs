//! Slot arena holding lobby players.
//!
//! Players live in a flat `Vec` of slots and are referenced by
//! [`PlayerId`] indices instead of pointers. Vacated slots go on a free list
//! and are reused; each reuse carries a bumped generation so a handle to a
//! removed player never resolves to its successor in the slot. A slot whose
//! generation is used up is retired rather than wrapped back to zero.

use super::player::{Player, PlayerId};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    player: Option<Player>,
    /// No generations left; never reused.
    retired: bool,
}

impl Slot {
    /// Empty the slot and advance its generation, retiring it on exhaustion.
    ///
    /// Returns `true` if the slot can go back on the free list.
    fn vacate(&mut self) -> bool {
        self.player = None;
        match self.generation.checked_add(1) {
            Some(next) => self.generation = next,
            None => self.retired = true,
        }
        !self.retired
    }
}

/// Arena of players addressed by generation-checked indices.
///
/// ```
/// use game_lobby::core::{Player, PlayerArena};
///
/// let mut arena = PlayerArena::new();
/// let alice = arena.insert(Player::new("Alice"));
/// assert_eq!(arena.get(alice).map(|p| p.name()), Some("Alice"));
///
/// arena.remove(alice);
/// assert!(arena.get(alice).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl PlayerArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `capacity` players before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store a player, returning its ID.
    pub fn insert(&mut self, player: Player) -> PlayerId {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.player = Some(player);
            return PlayerId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            player: Some(player),
            retired: false,
        });
        PlayerId::new(index, 0)
    }

    /// Remove a player, returning it.
    ///
    /// Returns `None` if the ID is stale or was never issued.
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let slot = self.slots.get_mut(id.index())?;
        if slot.generation != id.generation() {
            return None;
        }

        let player = slot.player.take()?;
        if slot.vacate() {
            self.free.push(id.index() as u32);
        }
        self.len -= 1;
        Some(player)
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.player.as_ref())
    }

    /// Get a mutable player by ID.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.player.as_mut())
    }

    /// Check if an ID refers to a live player.
    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the arena holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every player.
    ///
    /// Slots are kept with bumped generations so outstanding IDs stay stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let reusable = if slot.player.is_some() {
                slot.vacate()
            } else {
                !slot.retired
            };
            if reusable {
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }
}
