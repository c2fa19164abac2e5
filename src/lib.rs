//! Fluff State Library
//!
//! This crate provides state management for Fluff (Liar's Dice) game logic.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Game State Machine** - One `GameState` per room: lobby membership,
//!   dealing, bid validation, turn rotation, challenge resolution,
//!   elimination, and win detection, with validated transitions.
//!
//! - **Room Registry** - Creates, looks up, and destroys rooms by ID; rooms
//!   are fully independent of each other.
//!
//! - **Wire Protocol** - Client commands and server events as serde types,
//!   each event scoped room-wide or to a single player's connection.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - Out-of-turn, out-of-phase,
//!    and malformed requests are rejected with a clear error before any
//!    mutation happens.
//!
//! 2. **The registry owns the rooms** - No process-wide tables; every room
//!    is an isolated value, so rooms can be unit tested on their own.
//!
//! 3. **No networking** - This crate is pure state. Operations return the
//!    notification set for the transport adapter to deliver; private hands
//!    only ever appear in player-scoped notifications.
//!
//! 4. **Serialization-ready** - All client-facing types convert to JSON.
//!
//! # Example
//!
//! ```rust
//! use fluff_state::state::{GameState, Phase};
//!
//! let mut game = GameState::new("room-1", 5);
//! game.join("conn-1", "Alice").unwrap();
//! game.join("conn-2", "Bob").unwrap();
//!
//! let mut rng = rand::thread_rng();
//! game.start("conn-1", &mut rng).unwrap();
//! assert_eq!(game.phase(), Phase::Bidding);
//!
//! // Alice opens the bidding; Bob challenges.
//! game.place_bid("conn-1", 2, 5).unwrap();
//! let notifications = game.call_bid("conn-2", &mut rng).unwrap();
//!
//! // One die left the table, the round reset.
//! assert!(game.current_bid().is_none());
//! assert!(!notifications.is_empty());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
