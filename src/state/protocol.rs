//! Wire protocol types.
//!
//! Fixes the JSON shapes exchanged with clients so every transport adapter
//! speaks the same dialect. Client operations arrive as [`ClientCommand`];
//! accepted operations hand back [`Notification`]s, each a [`ServerEvent`]
//! scoped to the whole room or to a single player's connection. Private
//! hands travel only in player-scoped notifications.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Operations a client can send over the real-time channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientCommand {
    #[serde(rename_all = "camelCase")]
    Join { room_id: String, name: String },

    #[serde(rename_all = "camelCase")]
    Start { room_id: String },

    #[serde(rename_all = "camelCase")]
    Bid { room_id: String, count: u32, face: u8 },

    #[serde(rename_all = "camelCase")]
    Call { room_id: String },
}

impl ClientCommand {
    /// The room the command targets.
    pub fn room_id(&self) -> &str {
        match self {
            Self::Join { room_id, .. }
            | Self::Start { room_id }
            | Self::Bid { room_id, .. }
            | Self::Call { room_id } => room_id,
        }
    }
}

/// Public view of one player, safe for room-wide delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub hand_size: u8,
    pub alive: bool,
}

impl PlayerSummary {
    pub fn of(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            hand_size: player.hand_size,
            alive: player.alive,
        }
    }
}

/// A seat in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: String,
    pub name: String,
}

impl Seat {
    pub fn of(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
        }
    }
}

/// Events the server pushes to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Roster or host changed (join, leave, host succession)
    #[serde(rename_all = "camelCase")]
    LobbyUpdate {
        players: Vec<PlayerSummary>,
        host_id: Option<String>,
    },

    /// The host started the game
    #[serde(rename_all = "camelCase")]
    GameStarted {
        turn_order: Vec<Seat>,
        current_turn_player_id: String,
    },

    /// A freshly dealt hand. Only ever player-scoped.
    #[serde(rename_all = "camelCase")]
    PrivateHand { dice: Vec<u8> },

    /// A bid was accepted
    #[serde(rename_all = "camelCase")]
    NewBid {
        count: u32,
        face: u8,
        bidder_id: String,
        bidder_name: String,
        next_turn_player_id: String,
    },

    /// A call was resolved: full reveal, loser, fresh round or winner
    #[serde(rename_all = "camelCase")]
    RoundResult {
        revealed_hands: BTreeMap<String, Vec<u8>>,
        actual_count: u32,
        count: u32,
        face: u8,
        result_text: String,
        loser_id: String,
        players: Vec<PlayerSummary>,
        next_turn_player_id: Option<String>,
        winner: Option<Seat>,
    },

    /// The turn holder left mid-round and the turn moved on
    #[serde(rename_all = "camelCase")]
    TurnChanged { current_turn_player_id: String },

    /// A disconnection ended the game
    #[serde(rename_all = "camelCase")]
    GameOver {
        winner: Seat,
        players: Vec<PlayerSummary>,
    },
}

impl ServerEvent {
    /// Wire event name, for adapters that emit `(name, payload)` pairs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LobbyUpdate { .. } => "lobbyUpdate",
            Self::GameStarted { .. } => "gameStarted",
            Self::PrivateHand { .. } => "privateHand",
            Self::NewBid { .. } => "newBid",
            Self::RoundResult { .. } => "roundResult",
            Self::TurnChanged { .. } => "turnChanged",
            Self::GameOver { .. } => "gameOver",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}

/// Delivery scope for a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Broadcast to every connection in the room
    Room,

    /// Deliver only to the named player's connection
    Player(String),
}

/// A server event bound to its delivery scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: Recipient,
    pub event: ServerEvent,
}

impl Notification {
    pub fn room(event: ServerEvent) -> Self {
        Self {
            recipient: Recipient::Room,
            event,
        }
    }

    pub fn player(player_id: impl Into<String>, event: ServerEvent) -> Self {
        Self {
            recipient: Recipient::Player(player_id.into()),
            event,
        }
    }

    /// True when the notification is room-wide.
    pub fn is_broadcast(&self) -> bool {
        self.recipient == Recipient::Room
    }
}
