use crate::cards::{Card, Rank};

/// Radix used to pack grouped ranks into one comparable integer.
/// Any base above the largest rank value (14) keeps digits from colliding.
const KICKER_BASE: u32 = 15;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: QQQ75 groups as [(Queen, 3), (Seven, 1), (Five, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&r| match counts[r.value() as usize] {
                0 => None,
                n => Some((r, n)),
            })
            .collect();
        // stable sort keeps the rank-descending order within equal counts
        groups.sort_by(|a, b| b.1.cmp(&a.1));

        Self { groups }
    }

    /// The two largest multiplicities, e.g. (3, 2) for a full house.
    pub fn shape(&self) -> (u8, u8) {
        let count = |i: usize| self.groups.get(i).map_or(0, |&(_, n)| n);
        (count(0), count(1))
    }

    /// Pack the grouped ranks into a single integer: `value = value * 15 + rank`
    /// for each group in order, so the most significant group decides first.
    pub fn kicker_value(&self) -> u32 {
        self.groups.iter().fold(0, |v, &(r, _)| v * KICKER_BASE + u32::from(r.value()))
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
