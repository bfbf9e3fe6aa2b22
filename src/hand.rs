use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use holdem_odds::hand::HoleCards;
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub fn first(&self) -> Card {
        self.0
    }

    pub fn second(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    /// Reject anything other than two distinct cards.
    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match *slice {
            [a, b] => Self::try_new(a, b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Zero to five known community cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        Self::try_new(cards.to_vec())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once all five community cards are known.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 5
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that hole cards and board are mutually disjoint.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    let b = board.as_slice();
    if b.contains(&hole.first()) || b.contains(&hole.second()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}

/// Validate raw caller input and return the known cards, hole cards first.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::hand::{known_cards, HandError};
///
/// let hole = parse_cards("As Ah").unwrap();
/// let board = parse_cards("Ad 7c 2h").unwrap();
/// assert_eq!(known_cards(&hole, &board).unwrap().len(), 5);
///
/// let overlap = parse_cards("As 7c").unwrap();
/// assert_eq!(known_cards(&hole, &overlap), Err(HandError::Overlap));
/// ```
pub fn known_cards(player: &[Card], community: &[Card]) -> Result<Vec<Card>, HandError> {
    let hole = HoleCards::from_slice(player)?;
    let board = Board::from_slice(community)?;
    validate_holdem(&hole, &board)?;
    let mut known = Vec::with_capacity(2 + board.len());
    known.extend_from_slice(&hole.as_array());
    known.extend_from_slice(board.as_slice());
    Ok(known)
}
