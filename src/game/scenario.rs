//! Card matchups.

use std::fmt;

use crate::game::rank::Rank;

/// The two players' cards in one deal. The ranks always differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scenario {
    first: Rank,
    second: Rank,
}

impl Scenario {
    /// Number of possible deals.
    pub const COUNT: usize = 6;

    /// `None` when both players would hold the same card.
    pub fn new(first: Rank, second: Rank) -> Option<Self> {
        (first != second).then_some(Self { first, second })
    }

    /// All deals in row-major A, K, Q order.
    pub fn all() -> impl Iterator<Item = Scenario> {
        Rank::ALL.into_iter().flat_map(|first| {
            Rank::ALL
                .into_iter()
                .filter_map(move |second| Scenario::new(first, second))
        })
    }

    /// First player's card.
    pub fn first(&self) -> Rank {
        self.first
    }

    /// Second player's card.
    pub fn second(&self) -> Rank {
        self.second
    }

    /// Whether the first player wins a showdown.
    pub fn first_wins(&self) -> bool {
        self.first.beats(self.second)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.first, self.second)
    }
}
