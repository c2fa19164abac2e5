//! Bids and the bid-ordering rule.
//!
//! A bid is a public claim that at least `count` dice among all hands show
//! `face` (ones wild, except when the bid is on ones). Bids within a round
//! must strictly increase: higher count, or same count and higher face.
//! The "compare count*face totals" rule seen in some informal variants is
//! non-monotonic and ambiguous on ties, and is deliberately not used.

use serde::{Deserialize, Serialize};

use super::dice::DIE_FACES;

/// A public claim about the dice in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// Claimed number of matching dice
    pub count: u32,

    /// Claimed face value (1-6)
    pub face: u8,
}

impl Bid {
    pub fn new(count: u32, face: u8) -> Self {
        Self { count, face }
    }

    /// Check ranges: `count >= 1`, `face` within 1-6.
    pub fn is_well_formed(&self) -> bool {
        self.count >= 1 && (1..=DIE_FACES).contains(&self.face)
    }

    /// Check whether this bid strictly raises `prev`.
    pub fn raises(&self, prev: &Bid) -> bool {
        self.count > prev.count || (self.count == prev.count && self.face > prev.face)
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.count, self.face)
    }
}

/// The current bid together with who placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBid {
    pub bid: Bid,
    pub bidder_id: String,
}

impl PlacedBid {
    pub fn new(bid: Bid, bidder_id: impl Into<String>) -> Self {
        Self {
            bid,
            bidder_id: bidder_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed() {
        assert!(Bid::new(1, 1).is_well_formed());
        assert!(Bid::new(3, 6).is_well_formed());

        assert!(!Bid::new(0, 4).is_well_formed());
        assert!(!Bid::new(2, 0).is_well_formed());
        assert!(!Bid::new(2, 7).is_well_formed());
    }

    #[test]
    fn test_raises_by_count() {
        let prev = Bid::new(3, 4);

        assert!(Bid::new(4, 1).raises(&prev));
        assert!(Bid::new(4, 4).raises(&prev));
        assert!(!Bid::new(2, 6).raises(&prev));
    }

    #[test]
    fn test_raises_by_face_on_equal_count() {
        let prev = Bid::new(3, 4);

        assert!(Bid::new(3, 5).raises(&prev));
        assert!(!Bid::new(3, 4).raises(&prev));
        assert!(!Bid::new(3, 3).raises(&prev));
    }

    #[test]
    fn test_product_totals_do_not_matter() {
        // 2x6 has a higher product than 3x1 but is not a raise of it.
        let prev = Bid::new(3, 1);
        assert!(!Bid::new(2, 6).raises(&prev));

        // 4x2 has a lower product than 3x6 but raises it on count.
        let prev = Bid::new(3, 6);
        assert!(Bid::new(4, 2).raises(&prev));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Bid::new(3, 5)), "3x5");
    }
}
