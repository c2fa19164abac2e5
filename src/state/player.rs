//! Player roster entries.
//!
//! Players are appended to a room at join time and never removed; the join
//! order is the turn-rotation baseline for the whole game. Elimination and
//! disconnection only flip flags, so seat indexes stay stable and the turn
//! sequencer can simply skip dead entries.

use super::dice;

/// A player in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Opaque connection-scoped ID, supplied by the transport and unique
    /// within the room
    pub id: String,

    /// Display name
    pub name: String,

    /// Current die count
    pub hand_size: u8,

    /// Private hand. Never included in room-wide payloads.
    hand: Vec<u8>,

    /// False once eliminated (or after leaving the room)
    pub alive: bool,

    /// False once the player's connection is gone
    pub connected: bool,

    /// When the player joined
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl Player {
    /// Create a player with `hand_size` dice owed but no hand dealt yet.
    pub fn new(id: impl Into<String>, name: impl Into<String>, hand_size: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand_size,
            hand: Vec::new(),
            alive: true,
            connected: true,
            joined_at: chrono::Utc::now(),
        }
    }

    /// The player's private hand. Deliver only to the owning connection.
    pub fn hand(&self) -> &[u8] {
        &self.hand
    }

    /// Deal a fresh hand via the dice roller, sized at `hand_size`.
    pub fn reroll<R: rand::Rng>(&mut self, rng: &mut R) {
        self.hand = dice::roll(rng, self.hand_size);
    }

    /// Take one die away after losing a challenge. Marks the player dead
    /// when the last die goes.
    pub fn lose_die(&mut self) {
        self.hand_size = self.hand_size.saturating_sub(1);
        self.hand.pop();
        if self.hand_size == 0 {
            self.alive = false;
            self.hand.clear();
        }
    }

    /// Mark the player as gone: connection dropped, seat forfeited.
    pub fn leave(&mut self) {
        self.connected = false;
        self.alive = false;
    }

    /// Build a player holding exactly `hand`.
    #[cfg(test)]
    pub(crate) fn with_hand(id: &str, name: &str, hand: Vec<u8>) -> Self {
        let mut p = Self::new(id, name, hand.len() as u8);
        p.hand = hand;
        p
    }
}
