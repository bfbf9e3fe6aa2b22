use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank, Suit};

/// Pre-computed analysis of a 5-card hand.
/// Built once and consulted by every tier check.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards by rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    pub rank_groups: RankGroups,
    pub flush_suit: Option<Suit>,
    /// High card of the straight; Five for the wheel.
    pub straight_high: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let first = sorted_cards[0].suit();
        let flush_suit = sorted_cards.iter().all(|c| c.suit() == first).then_some(first);

        Self {
            sorted_cards,
            rank_groups: RankGroups::from_cards(cards),
            flush_suit,
            straight_high: straight_high(&sorted_cards),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    pub fn is_straight(&self) -> bool {
        self.straight_high.is_some()
    }

    pub fn top_rank(&self) -> Rank {
        self.sorted_cards[0].rank()
    }
}

/// Five distinct consecutive values, or the wheel A-5-4-3-2.
fn straight_high(sorted: &[Card; 5]) -> Option<Rank> {
    let v = (*sorted).map(Card::value);
    if v.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(sorted[0].rank());
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}
