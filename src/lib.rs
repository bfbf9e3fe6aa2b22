//! holdem-odds: Texas Hold'em hand ranking and win-probability estimation
//!
//! - [`evaluator::evaluate`] ranks any 5-7 card set into one of ten tiers
//!   with a tie-break value.
//! - [`odds::calculate_odds`] estimates win/tie/loss rates against random
//!   opponents by Monte Carlo completion of the unknown cards.
//! - [`odds::analyze_hand`] reports the current best hand and open draws
//!   without sampling.
//!
//! Card input is validated at the boundary ([`hand`]); the evaluator
//! itself trusts its input.
//!
//! ## Quick start
//! ```
//! use holdem_odds::cards::parse_cards;
//! use holdem_odds::evaluator::Tier;
//! use holdem_odds::odds::{analyze_hand, calculate_odds_seeded};
//!
//! let hole = parse_cards("As Ah").unwrap();
//! let board = parse_cards("Ad 7c 2h").unwrap();
//!
//! let report = analyze_hand(&hole, &board).unwrap();
//! assert_eq!(report.current_hand.tier, Tier::ThreeOfAKind);
//!
//! let odds = calculate_odds_seeded(&hole, &board, 1, 2_000, 7).unwrap();
//! assert!(odds.win_rate > 80.0);
//! assert_eq!(odds.wins + odds.ties + odds.losses, 2_000);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem-odds -- --hole "As Kd" --board "Qh Jc 2s" --opponents 2
//! ```

pub mod cards;
pub mod deck;
pub mod draws;
pub mod evaluator;
pub mod hand;
pub mod odds;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
