use std::fmt;
use std::str::FromStr;

use tracing::event;

use super::BlackjackError;

/// Card rank. Suit never matters when scoring a
/// blackjack hand so this is all of a card we keep.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// 10
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the ranks.
/// This is what `Rank::ranks()` returns
const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Get all of the `Rank`'s that are possible.
    ///
    /// ```
    /// use blackjack_rules::core::Rank;
    ///
    /// assert_eq!(13, Rank::ranks().len());
    /// assert_eq!(Rank::Ace, Rank::ranks()[12]);
    /// ```
    pub const fn ranks() -> [Rank; 13] {
        RANKS
    }

    /// The token this rank is written as. Numerals are
    /// their number, faces and the ace a single letter.
    pub const fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Value of the card with the ace counted as 1.
    ///
    /// ```
    /// use blackjack_rules::core::Rank;
    ///
    /// assert_eq!(1, Rank::Ace.hard_value());
    /// assert_eq!(10, Rank::Queen.hard_value());
    /// assert_eq!(7, Rank::Seven.hard_value());
    /// ```
    pub const fn hard_value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            _ => self.soft_value(),
        }
    }

    /// Value of the card with the ace counted as 11.
    ///
    /// ```
    /// use blackjack_rules::core::Rank;
    ///
    /// assert_eq!(11, Rank::Ace.soft_value());
    /// assert_eq!(10, Rank::Jack.soft_value());
    /// ```
    pub const fn soft_value(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            // Two is discriminant 0.
            _ => self as u8 + 2,
        }
    }

    /// 10, J, Q and K all count ten.
    pub const fn is_ten_valued(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace)
    }
}

impl FromStr for Rank {
    type Err = BlackjackError;

    /// Parse a rank token. Only the exact tokens are accepted, there's
    /// no trimming and no lower case.
    ///
    /// ```
    /// use blackjack_rules::core::{BlackjackError, Rank};
    ///
    /// assert_eq!(Ok(Rank::Ten), "10".parse::<Rank>());
    /// assert_eq!(
    ///     Err(BlackjackError::InvalidCard("T".to_string())),
    ///     "T".parse::<Rank>()
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Rank::Ace),
            "K" => Ok(Rank::King),
            "Q" => Ok(Rank::Queen),
            "J" => Ok(Rank::Jack),
            "10" => Ok(Rank::Ten),
            "9" => Ok(Rank::Nine),
            "8" => Ok(Rank::Eight),
            "7" => Ok(Rank::Seven),
            "6" => Ok(Rank::Six),
            "5" => Ok(Rank::Five),
            "4" => Ok(Rank::Four),
            "3" => Ok(Rank::Three),
            "2" => Ok(Rank::Two),
            _ => {
                event!(tracing::Level::TRACE, token = s, "Rejected card token");
                Err(BlackjackError::InvalidCard(s.to_string()))
            }
        }
    }
}

impl TryFrom<&str> for Rank {
    type Error = BlackjackError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
