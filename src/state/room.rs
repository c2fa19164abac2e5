//! Room registry.
//!
//! Creates, looks up, and destroys per-room `GameState` instances. This is
//! the only mutable global: rooms share no data, so the owner of the
//! registry decides how operations on different rooms interleave.

use std::collections::HashMap;

use rand::Rng;
use tracing::info;

use super::dice::DEFAULT_HAND_SIZE;
use super::game::GameState;

/// Length of generated room IDs.
pub const ROOM_ID_LEN: usize = 8;

/// Registry errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    RoomNotFound,
    RoomExists,
}

impl RegistryError {
    /// Machine-readable code for error acknowledgements.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoomNotFound => "room_not_found",
            Self::RoomExists => "room_exists",
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound => write!(f, "Room not found"),
            Self::RoomExists => write!(f, "Room already exists"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Room registry - tracks all live rooms.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<String, GameState>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lobby-phase room and return its ID.
    ///
    /// An explicit `id` fails with `RoomExists` on collision; otherwise a
    /// fresh shareable code is generated. `hand_size` is the die count dealt
    /// to each joiner, defaulting to [`DEFAULT_HAND_SIZE`].
    pub fn create<R: Rng>(
        &mut self,
        rng: &mut R,
        id: Option<String>,
        hand_size: Option<u8>,
    ) -> Result<String, RegistryError> {
        let id = match id {
            Some(id) => {
                if self.rooms.contains_key(&id) {
                    return Err(RegistryError::RoomExists);
                }
                id
            }
            None => loop {
                let id = random_room_id(rng);
                if !self.rooms.contains_key(&id) {
                    break id;
                }
            },
        };

        let hand_size = hand_size.unwrap_or(DEFAULT_HAND_SIZE);
        self.rooms
            .insert(id.clone(), GameState::new(id.clone(), hand_size));
        info!(room = %id, hand_size, "room created");
        Ok(id)
    }

    /// Get a room.
    pub fn get(&self, room_id: &str) -> Result<&GameState, RegistryError> {
        self.rooms.get(room_id).ok_or(RegistryError::RoomNotFound)
    }

    /// Get a mutable room.
    pub fn get_mut(&mut self, room_id: &str) -> Result<&mut GameState, RegistryError> {
        self.rooms
            .get_mut(room_id)
            .ok_or(RegistryError::RoomNotFound)
    }

    /// Check if a room exists.
    pub fn contains(&self, room_id: &str) -> bool {
        self.rooms.contains_key(room_id)
    }

    /// Remove a room.
    pub fn destroy(&mut self, room_id: &str) -> Option<GameState> {
        let room = self.rooms.remove(room_id);
        if room.is_some() {
            info!(room = %room_id, "room destroyed");
        }
        room
    }

    /// Remove rooms whose game has finished. Returns the removed IDs.
    pub fn cleanup_finished(&mut self) -> Vec<String> {
        let finished: Vec<String> = self
            .rooms
            .iter()
            .filter(|(_, g)| g.phase().is_terminal())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &finished {
            self.destroy(id);
        }

        finished
    }

    /// Remove rooms every player has left. Returns the removed IDs.
    pub fn cleanup_abandoned(&mut self) -> Vec<String> {
        let abandoned: Vec<String> = self
            .rooms
            .iter()
            .filter(|(_, g)| g.is_abandoned())
            .map(|(id, _)| id.clone())
            .collect();

        for id in &abandoned {
            self.destroy(id);
        }

        abandoned
    }

    /// Count live rooms.
    pub fn count(&self) -> usize {
        self.rooms.len()
    }

    /// Get all room IDs.
    pub fn room_ids(&self) -> impl Iterator<Item = &String> {
        self.rooms.keys()
    }
}

fn random_room_id<R: Rng>(rng: &mut R) -> String {
    use rand::distributions::Alphanumeric;

    (0..ROOM_ID_LEN)
        .map(|_| (rng.sample(Alphanumeric) as char).to_ascii_lowercase())
        .collect()
}
