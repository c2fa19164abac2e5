//! Per-room game state machine.
//!
//! One `GameState` per room: joining, starting, bid validation, turn
//! rotation, challenge resolution, elimination, and win detection. Every
//! accepted operation mutates the room and returns the notification set the
//! transport adapter delivers; a rejected operation returns an error and
//! leaves the room untouched.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use super::bid::{Bid, PlacedBid};
use super::player::Player;
use super::protocol::{Notification, PlayerSummary, Seat, ServerEvent};
use super::{resolve, turn};

/// Minimum players required to start.
pub const MIN_PLAYERS: usize = 2;

/// Room phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Collecting players, not yet dealt
    #[default]
    Lobby,
    /// Round in progress, bids being raised
    Bidding,
    /// One player left standing
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lobby => "lobby",
            Self::Bidding => "bidding",
            Self::Finished => "finished",
        }
    }

    /// Check if the room accepts bids and calls.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Bidding)
    }

    /// Check if the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Game state for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Room ID
    pub id: String,

    /// Current phase
    phase: Phase,

    /// Players in join order. Append-only; elimination flips `alive`
    /// instead of removing entries, so seat indexes never shift.
    players: Vec<Player>,

    /// Index of the turn holder into `players`. Always an alive seat while
    /// the phase is `Bidding`.
    turn_index: usize,

    /// Current host (first joiner, or successor after a host disconnect)
    host_id: Option<String>,

    /// The standing bid, if any
    current_bid: Option<PlacedBid>,

    /// Every bid accepted since the last resolution, for duplicate rejection
    round_bids: HashSet<Bid>,

    /// Dice dealt to each new player
    pub default_hand_size: u8,

    /// When the room was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the game started (phase -> Bidding)
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the game ended
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl GameState {
    /// Create an empty lobby-phase room.
    pub fn new(id: impl Into<String>, default_hand_size: u8) -> Self {
        Self {
            id: id.into(),
            phase: Phase::Lobby,
            players: Vec::new(),
            turn_index: 0,
            host_id: None,
            current_bid: None,
            round_bids: HashSet::new(),
            default_hand_size,
            created_at: chrono::Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// All players in join order, eliminated seats included.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    fn player_index(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// Current host, if anyone is seated.
    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    /// Check if a player is the host.
    pub fn is_host(&self, player_id: &str) -> bool {
        self.host_id.as_deref() == Some(player_id)
    }

    /// The standing bid.
    pub fn current_bid(&self) -> Option<&PlacedBid> {
        self.current_bid.as_ref()
    }

    /// The turn holder's ID, while a round is running.
    pub fn current_player_id(&self) -> Option<&str> {
        if self.phase.is_active() {
            self.players.get(self.turn_index).map(|p| p.id.as_str())
        } else {
            None
        }
    }

    /// Count players still holding dice.
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    /// The winner, once the game is finished.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase.is_terminal() {
            self.players.iter().find(|p| p.alive)
        } else {
            None
        }
    }

    /// Check if every seat has disconnected. Abandoned rooms are fair game
    /// for registry cleanup.
    pub fn is_abandoned(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| !p.connected)
    }

    /// Total seats, eliminated ones included.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Add a player to the lobby.
    ///
    /// `player_id` is connection-scoped; the transport guarantees each
    /// connection joins a room at most once. The first joiner becomes host.
    pub fn join(
        &mut self,
        player_id: &str,
        name: &str,
    ) -> Result<Vec<Notification>, GameError> {
        if self.phase != Phase::Lobby {
            return Err(GameError::AlreadyStarted);
        }
        debug_assert!(self.player(player_id).is_none(), "duplicate player id");

        let name = if name.trim().is_empty() { "Player" } else { name };
        self.players
            .push(Player::new(player_id, name, self.default_hand_size));

        if self.host_id.is_none() {
            self.host_id = Some(player_id.to_string());
        }

        debug!(room = %self.id, player = %player_id, "player joined");
        Ok(vec![self.lobby_update()])
    }

    /// Start the game: deal every hand and open the first round.
    pub fn start<R: Rng>(
        &mut self,
        requester_id: &str,
        rng: &mut R,
    ) -> Result<Vec<Notification>, GameError> {
        if !self.is_host(requester_id) {
            return Err(GameError::NotHost);
        }
        if self.alive_count() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }
        if self.phase != Phase::Lobby {
            return Err(GameError::AlreadyStarted);
        }

        let mut notifications = Vec::new();
        for p in self.players.iter_mut().filter(|p| p.alive) {
            p.reroll(rng);
            notifications.push(Notification::player(
                p.id.clone(),
                ServerEvent::PrivateHand {
                    dice: p.hand().to_vec(),
                },
            ));
        }

        self.phase = Phase::Bidding;
        self.started_at = Some(chrono::Utc::now());
        self.current_bid = None;
        self.round_bids.clear();
        self.turn_index = self.players.iter().position(|p| p.alive).unwrap_or(0);

        let turn_order: Vec<Seat> = self
            .players
            .iter()
            .filter(|p| p.alive)
            .map(Seat::of)
            .collect();
        let first = self.players[self.turn_index].id.clone();

        info!(room = %self.id, players = turn_order.len(), "game started");
        notifications.push(Notification::room(ServerEvent::GameStarted {
            turn_order,
            current_turn_player_id: first,
        }));
        Ok(notifications)
    }

    /// Place a bid that raises the standing one.
    pub fn place_bid(
        &mut self,
        player_id: &str,
        count: u32,
        face: u8,
    ) -> Result<Vec<Notification>, GameError> {
        if self.phase != Phase::Bidding {
            return Err(GameError::GameNotRunning);
        }
        if self.players[self.turn_index].id != player_id {
            return Err(GameError::NotYourTurn);
        }

        let bid = Bid::new(count, face);
        if !bid.is_well_formed() {
            return Err(GameError::InvalidBid);
        }
        // Checked before monotonicity so a repeat of the standing bid reports
        // as a duplicate.
        if self.round_bids.contains(&bid) {
            return Err(GameError::DuplicateBid);
        }
        if let Some(placed) = &self.current_bid {
            if !bid.raises(&placed.bid) {
                return Err(GameError::InvalidBid);
            }
        }

        let bidder_name = self.players[self.turn_index].name.clone();
        self.current_bid = Some(PlacedBid::new(bid, player_id));
        self.round_bids.insert(bid);
        self.turn_index = turn::next_alive(&self.players, self.turn_index);

        debug!(room = %self.id, bidder = %player_id, bid = %bid, "bid placed");
        Ok(vec![Notification::room(ServerEvent::NewBid {
            count,
            face,
            bidder_id: player_id.to_string(),
            bidder_name,
            next_turn_player_id: self.players[self.turn_index].id.clone(),
        })])
    }

    /// Challenge the standing bid: reveal, resolve, and open the next round
    /// (or finish the game).
    pub fn call_bid<R: Rng>(
        &mut self,
        player_id: &str,
        rng: &mut R,
    ) -> Result<Vec<Notification>, GameError> {
        if self.phase != Phase::Bidding {
            return Err(GameError::GameNotRunning);
        }
        if self.players[self.turn_index].id != player_id {
            return Err(GameError::NotYourTurn);
        }
        let placed = self.current_bid.clone().ok_or(GameError::NoActiveBid)?;

        // Snapshot hands as bid upon, before the loser's die is popped.
        let revealed_hands = self
            .players
            .iter()
            .map(|p| (p.id.clone(), p.hand().to_vec()))
            .collect();

        let resolution = resolve::resolve(&self.players, &placed.bid, &placed.bidder_id, player_id);
        let loser_index = self
            .player_index(&resolution.loser_id)
            .unwrap_or(self.turn_index);
        self.players[loser_index].lose_die();

        info!(
            room = %self.id,
            bid = %placed.bid,
            actual = resolution.actual_count,
            loser = %resolution.loser_id,
            "bid called"
        );

        let mut notifications = Vec::new();
        for p in self.players.iter_mut().filter(|p| p.alive) {
            p.reroll(rng);
            notifications.push(Notification::player(
                p.id.clone(),
                ServerEvent::PrivateHand {
                    dice: p.hand().to_vec(),
                },
            ));
        }

        self.current_bid = None;
        self.round_bids.clear();

        let (next_turn_player_id, winner) = if self.alive_count() == 1 {
            self.phase = Phase::Finished;
            self.ended_at = Some(chrono::Utc::now());
            let winner = self.players.iter().find(|p| p.alive).map(Seat::of);
            info!(room = %self.id, "game finished");
            (None, winner)
        } else {
            self.turn_index = turn::next_alive(&self.players, loser_index);
            (Some(self.players[self.turn_index].id.clone()), None)
        };

        notifications.push(Notification::room(ServerEvent::RoundResult {
            revealed_hands,
            actual_count: resolution.actual_count,
            count: placed.bid.count,
            face: placed.bid.face,
            result_text: resolution.result_text,
            loser_id: resolution.loser_id,
            players: self.summaries(),
            next_turn_player_id,
            winner,
        }));
        Ok(notifications)
    }

    /// Handle a dropped connection: forfeit the seat, reassign the host,
    /// move the turn along, and re-check the win condition. A disconnection
    /// may end the game mid-bid.
    ///
    /// Unknown or already-disconnected IDs are a no-op.
    pub fn disconnect(&mut self, player_id: &str) -> Vec<Notification> {
        let Some(idx) = self.player_index(player_id) else {
            return Vec::new();
        };
        if !self.players[idx].connected {
            return Vec::new();
        }

        let held_turn = self.phase.is_active() && self.turn_index == idx;
        self.players[idx].leave();
        debug!(room = %self.id, player = %player_id, "player left");

        if self.host_id.as_deref() == Some(player_id) {
            self.host_id = self
                .players
                .iter()
                .find(|p| p.connected)
                .map(|p| p.id.clone());
        }

        let mut notifications = vec![self.lobby_update()];

        if self.phase.is_active() {
            if self.alive_count() == 1 {
                self.phase = Phase::Finished;
                self.ended_at = Some(chrono::Utc::now());
                if let Some(winner) = self.players.iter().find(|p| p.alive) {
                    info!(room = %self.id, winner = %winner.id, "game won by forfeit");
                    notifications.push(Notification::room(ServerEvent::GameOver {
                        winner: Seat::of(winner),
                        players: self.summaries(),
                    }));
                }
            } else if held_turn {
                self.turn_index = turn::next_alive(&self.players, self.turn_index);
                notifications.push(Notification::room(ServerEvent::TurnChanged {
                    current_turn_player_id: self.players[self.turn_index].id.clone(),
                }));
            }
        }

        notifications
    }

    fn summaries(&self) -> Vec<PlayerSummary> {
        self.players.iter().map(PlayerSummary::of).collect()
    }

    fn lobby_update(&self) -> Notification {
        Notification::room(ServerEvent::LobbyUpdate {
            players: self.summaries(),
            host_id: self.host_id.clone(),
        })
    }

    /// Public room snapshot. Never includes a hand.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "roomId": self.id,
            "phase": self.phase.as_str(),
            "players": self.summaries(),
            "hostId": self.host_id,
            "currentBid": self.current_bid.as_ref().map(|p| serde_json::json!({
                "count": p.bid.count,
                "face": p.bid.face,
                "bidderId": p.bidder_id,
            })),
            "currentTurnPlayerId": self.current_player_id(),
            "defaultHandSize": self.default_hand_size,
            "createdAt": self.created_at,
            "startedAt": self.started_at,
            "endedAt": self.ended_at,
        })
    }
}

/// Game errors. Request-local: returned to the offending connection, never
/// fatal to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NotHost,
    NotEnoughPlayers,
    AlreadyStarted,
    GameNotRunning,
    NotYourTurn,
    InvalidBid,
    DuplicateBid,
    NoActiveBid,
}

impl GameError {
    /// Machine-readable code for error acknowledgements.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotHost => "not_host",
            Self::NotEnoughPlayers => "not_enough_players",
            Self::AlreadyStarted => "already_started",
            Self::GameNotRunning => "game_not_running",
            Self::NotYourTurn => "not_your_turn",
            Self::InvalidBid => "invalid_bid",
            Self::DuplicateBid => "duplicate_bid",
            Self::NoActiveBid => "no_active_bid",
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotHost => write!(f, "Only the host can start the game"),
            Self::NotEnoughPlayers => write!(f, "Not enough players to start"),
            Self::AlreadyStarted => write!(f, "Game has already started"),
            Self::GameNotRunning => write!(f, "Game is not running"),
            Self::NotYourTurn => write!(f, "Not your turn"),
            Self::InvalidBid => write!(f, "Invalid bid"),
            Self::DuplicateBid => write!(f, "This exact bid has already been made this round"),
            Self::NoActiveBid => write!(f, "No bid to call"),
        }
    }
}

impl std::error::Error for GameError {}
