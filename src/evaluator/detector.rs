use super::hand_analysis::HandAnalysis;
use super::{HandResult, Tier};
use crate::cards::Rank;

/// Classify an analyzed 5-card hand.
///
/// Tiers are tried strongest first and the first match wins, so e.g. a
/// straight flush is never reported as a plain flush.
pub fn classify(analysis: &HandAnalysis) -> HandResult {
    let tier = Tier::DESCENDING
        .into_iter()
        .find(|&t| qualifies(t, analysis))
        .unwrap_or(Tier::HighCard);
    HandResult::new(tier, tie_break(tier, analysis))
}

fn qualifies(tier: Tier, a: &HandAnalysis) -> bool {
    let shape = a.rank_groups.shape();
    match tier {
        Tier::RoyalFlush => {
            a.is_flush()
                && a.is_straight()
                && a.sorted_cards[0].rank() == Rank::Ace
                && a.sorted_cards[1].rank() == Rank::King
        }
        Tier::StraightFlush => a.is_flush() && a.is_straight(),
        Tier::FourOfAKind => shape.0 == 4,
        Tier::FullHouse => shape == (3, 2),
        Tier::Flush => a.is_flush(),
        Tier::Straight => a.is_straight(),
        Tier::ThreeOfAKind => shape.0 == 3,
        Tier::TwoPair => shape == (2, 2),
        Tier::Pair => shape.0 == 2,
        Tier::HighCard => true,
    }
}

/// Straights score by their high card and flushes by their top card;
/// everything else packs its rank groups.
fn tie_break(tier: Tier, a: &HandAnalysis) -> u32 {
    match tier {
        Tier::RoyalFlush | Tier::StraightFlush | Tier::Straight => {
            a.straight_high.map_or(0, |r| u32::from(r.value()))
        }
        Tier::Flush => u32::from(a.top_rank().value()),
        _ => a.rank_groups.kicker_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Card};

    fn classify_str(s: &str) -> HandResult {
        let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
        classify(&HandAnalysis::new(&cards))
    }

    #[test]
    fn royal_needs_ace_king_on_top() {
        assert_eq!(classify_str("As Ks Qs Js Ts").tier, Tier::RoyalFlush);
        assert_eq!(classify_str("Ks Qs Js Ts 9s").tier, Tier::StraightFlush);
        // steel wheel sorts A,5,... so it is not royal
        let wheel = classify_str("As 2s 3s 4s 5s");
        assert_eq!(wheel, HandResult::new(Tier::StraightFlush, 5));
    }

    #[test]
    fn straight_flush_beats_its_component_checks() {
        let a = {
            let cards: [Card; 5] = parse_cards("9h 8h 7h 6h 5h").unwrap().try_into().unwrap();
            HandAnalysis::new(&cards)
        };
        assert!(qualifies(Tier::Flush, &a));
        assert!(qualifies(Tier::Straight, &a));
        assert_eq!(classify(&a), HandResult::new(Tier::StraightFlush, 9));
    }

    #[test]
    fn each_tier_is_detected() {
        let cases = [
            ("9c 9d 9h 9s Ac", Tier::FourOfAKind),
            ("3c 3d 3h Js Jc", Tier::FullHouse),
            ("Kh Th 8h 6h 3h", Tier::Flush),
            ("Ac 5c 4d 3h 2s", Tier::Straight),
            ("Qc Qd Qh Ts 2c", Tier::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", Tier::TwoPair),
            ("Ah Ad Ts 9c 2d", Tier::Pair),
            ("Ah Kd 7s 5c 2d", Tier::HighCard),
        ];
        for (hand, tier) in cases {
            assert_eq!(classify_str(hand).tier, tier, "{hand}");
        }
    }

    #[test]
    fn tie_break_values() {
        assert_eq!(classify_str("Ac 5c 4d 3h 2s").value, 5);
        assert_eq!(classify_str("Kh Th 8h 6h 3h").value, 13);
        // quads: 9 then the ace kicker
        assert_eq!(classify_str("9c 9d 9h 9s Ac").value, 9 * 15 + 14);
        // high card uses every rank
        let hi = classify_str("Ah Kd 7s 5c 2d").value;
        assert_eq!(hi, (((14 * 15 + 13) * 15 + 7) * 15 + 5) * 15 + 2);
    }

    #[test]
    fn kickers_decide_within_a_tier() {
        assert!(classify_str("Ah Ad Ks 9c 2d") > classify_str("As Ac Qs Jc Td"));
        assert!(classify_str("Jc Jd 9c 9h As") > classify_str("Js Jh 9s 9d Ks"));
        assert_eq!(classify_str("Jc Jd 9c 9h As"), classify_str("Js Jh 9s 9d Ad"));
    }
}
