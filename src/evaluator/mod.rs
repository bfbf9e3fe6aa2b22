pub mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;

pub use combinations::combinations;

use crate::cards::Card;
use std::fmt;

/// Poker hand tier from weakest (1) to strongest (10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// Language used for tier display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    Hebrew,
}

/// Display names indexed by `[locale][tier - 1]`.
const TIER_NAMES: [[&str; 10]; 2] = [
    [
        "High Card",
        "Pair",
        "Two Pair",
        "Three of a Kind",
        "Straight",
        "Flush",
        "Full House",
        "Four of a Kind",
        "Straight Flush",
        "Royal Flush",
    ],
    [
        "קלף גבוה",
        "זוג",
        "שני זוגות",
        "שלישייה",
        "רצף",
        "צבע",
        "בית מלא",
        "רביעייה",
        "רצף צבע",
        "רויאל פלאש",
    ],
];

impl Tier {
    /// Strongest first; the order tiers are checked in.
    pub const DESCENDING: [Tier; 10] = [
        Tier::RoyalFlush,
        Tier::StraightFlush,
        Tier::FourOfAKind,
        Tier::FullHouse,
        Tier::Flush,
        Tier::Straight,
        Tier::ThreeOfAKind,
        Tier::TwoPair,
        Tier::Pair,
        Tier::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        self.localized_name(Locale::English)
    }

    pub const fn localized_name(self, locale: Locale) -> &'static str {
        TIER_NAMES[locale as usize][self as usize - 1]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of ranking a card set.
///
/// Ordering is total: tier first, then `value`. Equal results tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandResult {
    pub tier: Tier,
    /// Tie-break within the tier; only comparable between equal tiers.
    pub value: u32,
}

impl HandResult {
    pub const fn new(tier: Tier, value: u32) -> Self {
        Self { tier, value }
    }

    pub const fn name(&self) -> &'static str {
        self.tier.name()
    }

    pub const fn localized_name(&self, locale: Locale) -> &'static str {
        self.tier.localized_name(locale)
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank any set of cards by its best five-card subset.
///
/// Fewer than five cards rank as HIGH_CARD valued at the highest card
/// present. Inputs are assumed free of duplicates; callers validate at the
/// boundary (see [`crate::hand`]).
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::{evaluate, Tier};
///
/// let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
/// let result = evaluate(&cards);
/// assert_eq!(result.tier, Tier::Pair);
/// assert_eq!(result.name(), "Pair");
/// ```
pub fn evaluate(cards: &[Card]) -> HandResult {
    if cards.len() < 5 {
        let high = cards.iter().map(|c| c.value()).max().unwrap_or(0);
        return HandResult::new(Tier::HighCard, u32::from(high));
    }

    // the first maximum wins; later equal subsets score the same anyway
    combinations(cards, 5)
        .iter()
        .filter_map(|combo| <&[Card; 5]>::try_from(combo.as_slice()).ok())
        .map(evaluate_five)
        .fold(None, |best: Option<HandResult>, r| match best {
            Some(b) if b >= r => Some(b),
            _ => Some(r),
        })
        .unwrap_or(HandResult::new(Tier::HighCard, 0))
}

/// Rank exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    detector::classify(&hand_analysis::HandAnalysis::new(cards))
}
