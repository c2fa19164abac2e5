//! Turn rotation over a fixed seat list.
//!
//! The player list is append-only, so rotation never renumbers seats; it
//! scans forward and skips entries that are no longer alive.

use super::player::Player;

/// Index of the next alive player after `from`, scanning forward cyclically.
///
/// Returns `from` unchanged when no other alive player exists. The win check
/// runs before rotation, so that degenerate case is not reachable from normal
/// play.
pub fn next_alive(players: &[Player], from: usize) -> usize {
    let n = players.len();
    if n == 0 {
        return from;
    }

    for step in 1..n {
        let idx = (from + step) % n;
        if players[idx].alive {
            return idx;
        }
    }
    from
}
