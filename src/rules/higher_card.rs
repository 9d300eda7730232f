use std::fmt;
use std::hash::{Hash, Hasher};

use crate::core::Rank;

/// The result of comparing two cards.
///
/// When both cards are worth the same either of them is
/// the answer, so a tie compares equal no matter which
/// order the two ranks are stored in.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HigherCard {
    /// One card is worth strictly more.
    One(Rank),
    /// Both cards have the same value.
    Tie(Rank, Rank),
}

impl HigherCard {
    pub fn is_tie(&self) -> bool {
        matches!(self, HigherCard::Tie(..))
    }

    /// Every card that is acceptable as the higher card.
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            HigherCard::One(r) => vec![r],
            HigherCard::Tie(a, b) => vec![a, b],
        }
    }

    /// Is `rank` an acceptable answer?
    pub fn accepts(&self, rank: Rank) -> bool {
        match *self {
            HigherCard::One(r) => r == rank,
            HigherCard::Tie(a, b) => a == rank || b == rank,
        }
    }

    fn ordered_tie(a: Rank, b: Rank) -> (Rank, Rank) {
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl PartialEq for HigherCard {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (HigherCard::One(a), HigherCard::One(b)) => a == b,
            (HigherCard::Tie(a, b), HigherCard::Tie(c, d)) => {
                Self::ordered_tie(a, b) == Self::ordered_tie(c, d)
            }
            _ => false,
        }
    }
}

impl Eq for HigherCard {}

impl Hash for HigherCard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match *self {
            HigherCard::One(r) => {
                0u8.hash(state);
                r.hash(state);
            }
            HigherCard::Tie(a, b) => {
                1u8.hash(state);
                Self::ordered_tie(a, b).hash(state);
            }
        }
    }
}

impl fmt::Display for HigherCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HigherCard::One(r) => write!(f, "{r}"),
            HigherCard::Tie(a, b) => write!(f, "({a}, {b})"),
        }
    }
}
