//! Monte Carlo win probability and single-pass hand analysis.

use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::draws::{detect_draws, DrawInfo};
use crate::evaluator::{evaluate, HandResult};
use crate::hand::{known_cards, HandError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Most opponents one deck can serve: 52 - 2 hole - 5 board leaves 45 cards.
pub const MAX_OPPONENTS: usize = 22;

/// Trials per parallel work unit. Fixed so seeded results do not depend on
/// the size of the thread pool.
#[cfg(feature = "parallel")]
const CHUNK_TRIALS: usize = 1024;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OddsError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("number of simulations must be positive")]
    NoSimulations,
    #[error("cannot deal {opponents} opponents, at most {max} fit in one deck")]
    TooManyOpponents { opponents: usize, max: usize },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Result of one trial from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

/// Running win/tie/loss counts; sums associatively across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.ties + self.losses
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

/// Aggregate outcome of a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    pub simulations: usize,
    /// Percent in [0, 100], ties counted as half a win, rounded to one decimal.
    pub win_rate: f64,
}

impl SimulationResult {
    fn from_tally(tally: Tally) -> Self {
        let simulations = tally.total();
        let raw = if simulations == 0 {
            0.0
        } else {
            (tally.wins as f64 + tally.ties as f64 / 2.0) / simulations as f64 * 100.0
        };
        Self {
            wins: tally.wins,
            ties: tally.ties,
            losses: tally.losses,
            simulations,
            win_rate: (raw * 10.0).round() / 10.0,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% ({} wins, {} ties, {} losses in {} trials)",
            self.win_rate, self.wins, self.ties, self.losses, self.simulations
        )
    }
}

/// The known cards' current standing, without sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandReport {
    pub current_hand: HandResult,
    pub draws: Vec<DrawInfo>,
}

/// Validated inputs plus the deck of unknown cards, reused across trials.
#[derive(Debug, Clone)]
struct Simulation {
    player: [Card; 2],
    community: Vec<Card>,
    opponents: usize,
    deck: Deck,
}

impl Simulation {
    fn new(player: &[Card], community: &[Card], opponents: usize) -> Result<Self, OddsError> {
        let known = known_cards(player, community)?;
        if opponents > MAX_OPPONENTS {
            return Err(OddsError::TooManyOpponents { opponents, max: MAX_OPPONENTS });
        }
        Ok(Self {
            player: [known[0], known[1]],
            community: community.to_vec(),
            opponents,
            deck: Deck::excluding(&known),
        })
    }

    /// Complete the board, deal every opponent, and compare the player's best
    /// hand against the single best opponent hand.
    fn trial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Outcome, DeckError> {
        self.deck.reset();
        self.deck.shuffle_with(rng);

        let mut board = Vec::with_capacity(5);
        board.extend_from_slice(&self.community);
        board.extend_from_slice(self.deck.draw(5 - self.community.len())?);

        let mut seven = Vec::with_capacity(7);
        seven.extend_from_slice(&self.player);
        seven.extend_from_slice(&board);
        let player = evaluate(&seven);

        let mut best: Option<HandResult> = None;
        for _ in 0..self.opponents {
            seven.clear();
            seven.extend_from_slice(self.deck.draw(2)?);
            seven.extend_from_slice(&board);
            let hand = evaluate(&seven);
            if best.map_or(true, |b| hand > b) {
                best = Some(hand);
            }
        }

        Ok(match best.map(|b| player.cmp(&b)) {
            None | Some(Ordering::Greater) => Outcome::Win,
            Some(Ordering::Equal) => Outcome::Tie,
            Some(Ordering::Less) => Outcome::Loss,
        })
    }

    fn run<R: Rng + ?Sized>(&mut self, trials: usize, rng: &mut R) -> Result<Tally, DeckError> {
        let mut tally = Tally::default();
        for _ in 0..trials {
            tally.record(self.trial(rng)?);
        }
        Ok(tally)
    }
}

fn prepare(
    player: &[Card],
    community: &[Card],
    num_opponents: usize,
    num_simulations: usize,
) -> Result<Simulation, OddsError> {
    let sim = Simulation::new(player, community, num_opponents)?;
    if num_simulations == 0 {
        return Err(OddsError::NoSimulations);
    }
    log::debug!(
        "simulating {} trials: {} opponents, {} community cards known",
        num_simulations,
        num_opponents,
        community.len()
    );
    Ok(sim)
}

fn finish(tally: Tally) -> SimulationResult {
    let result = SimulationResult::from_tally(tally);
    log::debug!("simulation finished: {}", result);
    result
}

/// Estimate the player's chance of winning by random completion of the
/// unknown cards, using the thread-local RNG.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::odds::calculate_odds;
///
/// let hole = parse_cards("As Ah").unwrap();
/// let result = calculate_odds(&hole, &[], 0, 100).unwrap();
/// assert_eq!(result.win_rate, 100.0);
/// ```
pub fn calculate_odds(
    player: &[Card],
    community: &[Card],
    num_opponents: usize,
    num_simulations: usize,
) -> Result<SimulationResult, OddsError> {
    calculate_odds_with(player, community, num_opponents, num_simulations, &mut rand::rng())
}

/// As [`calculate_odds`], reproducible for a given `seed`.
pub fn calculate_odds_seeded(
    player: &[Card],
    community: &[Card],
    num_opponents: usize,
    num_simulations: usize,
    seed: u64,
) -> Result<SimulationResult, OddsError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    calculate_odds_with(player, community, num_opponents, num_simulations, &mut rng)
}

/// As [`calculate_odds`], drawing randomness from `rng`.
pub fn calculate_odds_with<R: Rng + ?Sized>(
    player: &[Card],
    community: &[Card],
    num_opponents: usize,
    num_simulations: usize,
    rng: &mut R,
) -> Result<SimulationResult, OddsError> {
    let mut sim = prepare(player, community, num_opponents, num_simulations)?;
    let tally = sim.run(num_simulations, rng)?;
    Ok(finish(tally))
}

/// As [`calculate_odds_seeded`], spreading trials over the rayon pool.
///
/// Chunk `i` draws from stream `i` of a ChaCha8 generator seeded with
/// `seed`, so the result is the same however many threads run it.
#[cfg(feature = "parallel")]
pub fn calculate_odds_parallel(
    player: &[Card],
    community: &[Card],
    num_opponents: usize,
    num_simulations: usize,
    seed: u64,
) -> Result<SimulationResult, OddsError> {
    use rayon::prelude::*;

    let sim = prepare(player, community, num_opponents, num_simulations)?;
    let chunks = (num_simulations + CHUNK_TRIALS - 1) / CHUNK_TRIALS;
    let tally = (0..chunks)
        .into_par_iter()
        .map(|i| {
            let trials = CHUNK_TRIALS.min(num_simulations - i * CHUNK_TRIALS);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(i as u64);
            let result = sim.clone().run(trials, &mut rng);
            if let Ok(t) = &result {
                log::trace!("chunk {}: {:?}", i, t);
            }
            result
        })
        .try_reduce(Tally::default, |a, b| Ok(a + b))?;
    Ok(finish(tally))
}

/// Rank the known cards as they stand and list open draws.
///
/// ```
/// use holdem_odds::cards::parse_cards;
/// use holdem_odds::evaluator::Tier;
/// use holdem_odds::odds::analyze_hand;
///
/// let hole = parse_cards("9h 8h").unwrap();
/// let board = parse_cards("7h 6h Kc").unwrap();
/// let report = analyze_hand(&hole, &board).unwrap();
/// assert_eq!(report.current_hand.tier, Tier::HighCard);
/// assert_eq!(report.draws.len(), 2);
/// ```
pub fn analyze_hand(player: &[Card], community: &[Card]) -> Result<HandReport, OddsError> {
    let known = known_cards(player, community)?;
    let current_hand = evaluate(&known);
    let draws = detect_draws(&known, community.len());
    Ok(HandReport { current_hand, draws })
}
