//! Open-draw detection for a partially dealt board.
//!
//! The straight check is deliberately coarse: it reports at most one
//! straight draw, for the first run of four consecutive distinct values
//! (scanning high to low), and always credits it with 8 outs. Gutshots are
//! not detected and the ace never plays low.

use crate::cards::{Card, Suit};
use std::fmt;

pub const FLUSH_DRAW_OUTS: u8 = 9;
pub const STRAIGHT_DRAW_OUTS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    Flush(Suit),
    Straight,
}

/// An incomplete hand and the number of unseen cards that complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawInfo {
    pub kind: DrawKind,
    pub outs: u8,
}

impl fmt::Display for DrawInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DrawKind::Flush(suit) => write!(f, "flush draw ({}, {} outs)", suit.symbol(), self.outs),
            DrawKind::Straight => write!(f, "straight draw ({} outs)", self.outs),
        }
    }
}

/// Find flush and straight draws among `cards` (hole plus known community).
///
/// Returns nothing once `community_len` reaches 5: there are no cards to come.
///
/// ```
/// use holdem_odds::cards::{parse_cards, Suit};
/// use holdem_odds::draws::{detect_draws, DrawKind};
///
/// let cards = parse_cards("Ah Kh 7h 2h 9c").unwrap();
/// let draws = detect_draws(&cards, 3);
/// assert_eq!(draws.len(), 1);
/// assert_eq!(draws[0].kind, DrawKind::Flush(Suit::Hearts));
/// assert_eq!(draws[0].outs, 9);
/// ```
pub fn detect_draws(cards: &[Card], community_len: usize) -> Vec<DrawInfo> {
    if community_len >= 5 {
        return Vec::new();
    }

    let mut draws: Vec<DrawInfo> = Suit::ALL
        .iter()
        .filter(|&&s| cards.iter().filter(|c| c.suit() == s).count() == 4)
        .map(|&s| DrawInfo { kind: DrawKind::Flush(s), outs: FLUSH_DRAW_OUTS })
        .collect();

    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();
    if values.windows(4).any(|w| w.windows(2).all(|p| p[0] == p[1] + 1)) {
        draws.push(DrawInfo { kind: DrawKind::Straight, outs: STRAIGHT_DRAW_OUTS });
    }

    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn draws_of(s: &str, community_len: usize) -> Vec<DrawInfo> {
        detect_draws(&parse_cards(s).unwrap(), community_len)
    }

    #[test]
    fn complete_board_has_no_draws() {
        assert!(draws_of("Ah Kh 7h 2h 9c 8d 3s", 5).is_empty());
    }

    #[test]
    fn flush_draw_needs_exactly_four() {
        assert!(draws_of("Ah Kh 7h 9c 8d", 3).is_empty());
        // five of a suit is a made flush, not a draw
        assert!(draws_of("Ah Kh 7h 2h 3h", 3).is_empty());
    }

    #[test]
    fn open_ended_straight_draw() {
        let draws = draws_of("9c 8d 7h 6s Kc", 3);
        assert_eq!(draws, vec![DrawInfo { kind: DrawKind::Straight, outs: 8 }]);
    }

    #[test]
    fn only_one_straight_draw_is_reported() {
        // two separate four-card runs: J-T-9-8 and 5-4-3-2
        let draws = draws_of("Jc Td 9h 8s 5c 4d", 4);
        assert_eq!(draws.len(), 1);
        // paired ranks collapse before the scan
        let draws = draws_of("9c 9d 8h 7s 6c", 3);
        assert_eq!(draws.len(), 1);
    }

    #[test]
    fn gutshots_and_low_aces_are_ignored() {
        assert!(draws_of("9c 8d 6h 5s Kc", 3).is_empty());
        assert!(draws_of("Ac 2d 3h 4s 9c", 3).is_empty());
    }

    #[test]
    fn flush_and_straight_draw_together() {
        let draws = draws_of("9h 8h 7h 6h Kc", 3);
        assert_eq!(
            draws,
            vec![
                DrawInfo { kind: DrawKind::Flush(Suit::Hearts), outs: 9 },
                DrawInfo { kind: DrawKind::Straight, outs: 8 },
            ]
        );
    }

    #[test]
    fn display() {
        let d = DrawInfo { kind: DrawKind::Flush(Suit::Spades), outs: 9 };
        assert_eq!(d.to_string(), "flush draw (♠, 9 outs)");
    }
}
