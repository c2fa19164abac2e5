//! State management module for Fluff.
//!
//! This module provides the core state types:
//!
//! - `dice` - Dice rolling (hands, uniform draws)
//! - `bid` - Bid values and the bid-ordering rule
//! - `player` - Roster entries (private hand, alive/connected flags)
//! - `turn` - Turn rotation that skips eliminated seats
//! - `resolve` - Challenge resolution (wild-one tally, loser decision)
//! - `game` - Per-room game state machine
//! - `room` - Room registry
//! - `protocol` - Wire types shared with transport adapters
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        RoomRegistry                           │
//! │                                                               │
//! │  room_id → GameState (one per room, no shared data)           │
//! │            ┌─────────────────────────────────────────────┐    │
//! │            │  Lobby ──start──▶ Bidding ──win──▶ Finished │    │
//! │            │                                             │    │
//! │            │  players: Vec<Player>  (join order,         │    │
//! │            │          append-only, alive/connected)      │    │
//! │            │  current_bid + round_bids                   │    │
//! │            │  turn_index ──turn::next_alive──▶           │    │
//! │            └─────────────────────────────────────────────┘    │
//! │                                                               │
//! │  every accepted operation returns Vec<Notification>,          │
//! │  each scoped Room-wide or to one Player connection            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use fluff_state::state::{RoomRegistry, ServerEvent};
//!
//! let mut registry = RoomRegistry::new();
//! let mut rng = rand::thread_rng();
//!
//! // HTTP create endpoint
//! let room_id = registry.create(&mut rng, None, None)?;
//!
//! // Real-time channel operations
//! let game = registry.get_mut(&room_id)?;
//! let notifications = game.join("conn-1", "Alice")?;
//! for n in notifications {
//!     match n.recipient {
//!         Recipient::Room => broadcast(&room_id, n.event.to_json()),
//!         Recipient::Player(id) => send_to(&id, n.event.to_json()),
//!     }
//! }
//! ```

pub mod bid;
pub mod dice;
pub mod game;
pub mod player;
pub mod protocol;
pub mod resolve;
pub mod room;
pub mod turn;

// Re-export commonly used types
pub use bid::{Bid, PlacedBid};
pub use dice::{DEFAULT_HAND_SIZE, DIE_FACES};
pub use game::{GameError, GameState, Phase, MIN_PLAYERS};
pub use player::Player;
pub use protocol::{
    ClientCommand, Notification, PlayerSummary, Recipient, Seat, ServerEvent,
};
pub use resolve::Resolution;
pub use room::{RegistryError, RoomRegistry, ROOM_ID_LEN};
