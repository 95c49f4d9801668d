//! Card ranks of the three-card deck.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three cards. Ace beats King beats Queen.
///
/// Variants are declared strongest first, which is also the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// The best hand.
    Ace,
    /// The middle hand.
    King,
    /// The worst hand.
    Queen,
}

impl Rank {
    /// All ranks in display order (A, K, Q).
    pub const ALL: [Rank; 3] = [Rank::Ace, Rank::King, Rank::Queen];

    /// Row/column index in display order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter label.
    pub fn label(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
        }
    }

    /// Full card name.
    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::King => "King",
            Rank::Queen => "Queen",
        }
    }

    /// Whether this card wins a showdown against `other`.
    pub fn beats(self, other: Rank) -> bool {
        self.index() < other.index()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Rank::Ace.beats(Rank::King));
        assert!(Rank::Ace.beats(Rank::Queen));
        assert!(Rank::King.beats(Rank::Queen));
        assert!(!Rank::Queen.beats(Rank::King));
        assert!(!Rank::King.beats(Rank::King));
    }

    #[test]
    fn test_labels() {
        let labels: String = Rank::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, "AKQ");
        assert_eq!(Rank::King.name(), "King");
        assert_eq!(Rank::Queen.index(), 2);
    }
}
