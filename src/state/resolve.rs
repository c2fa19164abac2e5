//! Challenge resolution.
//!
//! When a bid is called, every alive hand is tallied against the bid. Ones
//! are wild and count toward any other face; a bid on ones gets no wild
//! bonus. If the table holds at least the claimed count, the bid stands and
//! the caller loses a die; otherwise the bidder loses a die.

use super::bid::Bid;
use super::player::Player;

/// Outcome of a called bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Matching dice across all alive hands, wilds included
    pub actual_count: u32,

    /// True when the bid held up (the caller loses)
    pub bid_stood: bool,

    /// Player losing one die
    pub loser_id: String,

    /// Human-readable summary for the round-result broadcast
    pub result_text: String,
}

/// Count dice matching `face` across `hands`, applying the wild-one rule.
pub fn count_matching<'a, I>(hands: I, face: u8) -> u32
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut matches = 0;
    for hand in hands {
        for &die in hand {
            if die == face || (face != 1 && die == 1) {
                matches += 1;
            }
        }
    }
    matches
}

/// Decide the loser of a called bid.
///
/// Only alive players' dice are in play; a forfeited seat's dice no longer
/// count toward anyone's bid.
pub fn resolve(players: &[Player], bid: &Bid, bidder_id: &str, caller_id: &str) -> Resolution {
    let actual_count = count_matching(
        players.iter().filter(|p| p.alive).map(|p| p.hand()),
        bid.face,
    );

    let name = |id: &str| {
        players
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(id)
            .to_string()
    };

    let bid_stood = actual_count >= bid.count;
    let (loser_id, result_text) = if bid_stood {
        (
            caller_id.to_string(),
            format!(
                "{}'s bid was correct ({} >= {}). {} loses a die.",
                name(bidder_id),
                actual_count,
                bid.count,
                name(caller_id)
            ),
        )
    } else {
        (
            bidder_id.to_string(),
            format!(
                "{}'s bid failed ({} < {}). {} loses a die.",
                name(bidder_id),
                actual_count,
                bid.count,
                name(bidder_id)
            ),
        )
    };

    Resolution {
        actual_count,
        bid_stood,
        loser_id,
        result_text,
    }
}
