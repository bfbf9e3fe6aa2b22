use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw {requested} cards, only {remaining} remain")]
    Underflow { requested: usize, remaining: usize },
}

/// The 52-card universe minus an exclusion set.
///
/// Draws take cards from the front and advance a cursor, so a deck can be
/// reshuffled and reused without reallocating.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// ```
    /// use holdem_odds::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::excluding(&[])
    }

    /// Every card not present in `known`, in suit-major order.
    ///
    /// ```
    /// use holdem_odds::cards::parse_cards;
    /// use holdem_odds::deck::Deck;
    ///
    /// let known = parse_cards("As Ah 7d").unwrap();
    /// let deck = Deck::excluding(&known);
    /// assert_eq!(deck.len(), 49);
    /// assert!(!deck.contains(known[0]));
    /// ```
    pub fn excluding(known: &[Card]) -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .filter(|c| !known.contains(c))
            .collect();
        Self { cards, next: 0 }
    }

    /// Cards not yet drawn.
    pub fn len(&self) -> usize {
        self.cards.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.remaining().contains(&card)
    }

    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle the undrawn cards using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    /// Put every drawn card back; order is left as it was.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Remove and return the first `n` undrawn cards.
    ///
    /// Asking for more than remain is an error rather than a short read.
    pub fn draw(&mut self, n: usize) -> Result<&[Card], DeckError> {
        let remaining = self.len();
        if n > remaining {
            return Err(DeckError::Underflow { requested: n, remaining });
        }
        let start = self.next;
        self.next += n;
        Ok(&self.cards[start..self.next])
    }
}
