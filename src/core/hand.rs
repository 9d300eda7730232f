use super::{BlackjackError, Rank};

/// The two cards a player is dealt.
///
/// Every scoring rule in this crate looks at exactly two cards so
/// there's no support for hitting more cards into the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[Rank; 2]", into = "[Rank; 2]"))]
pub struct TwoCardHand {
    /// The first card dealt.
    pub first: Rank,
    /// The second card dealt.
    pub second: Rank,
}

impl TwoCardHand {
    /// Create a new hand
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_rules::core::{Rank, TwoCardHand};
    ///
    /// let hand = TwoCardHand::new(Rank::Ace, Rank::King);
    /// assert_eq!(Rank::Ace, hand.first);
    /// assert_eq!(Rank::King, hand.second);
    /// ```
    pub const fn new(first: Rank, second: Rank) -> Self {
        Self { first, second }
    }

    /// Parse both card tokens. The first token that isn't a
    /// valid rank is the one reported in the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_rules::core::{BlackjackError, Rank, TwoCardHand};
    ///
    /// let hand = TwoCardHand::new_from_str("10", "J").unwrap();
    /// assert_eq!(TwoCardHand::new(Rank::Ten, Rank::Jack), hand);
    ///
    /// assert_eq!(
    ///     Err(BlackjackError::InvalidCard("Z".to_string())),
    ///     TwoCardHand::new_from_str("Z", "Y")
    /// );
    /// ```
    pub fn new_from_str(first: &str, second: &str) -> Result<Self, BlackjackError> {
        Ok(Self {
            first: first.parse()?,
            second: second.parse()?,
        })
    }

    /// Both cards in the order they were dealt.
    pub const fn cards(&self) -> [Rank; 2] {
        [self.first, self.second]
    }

    /// Is there a card of this rank in the hand?
    pub fn contains(&self, rank: Rank) -> bool {
        self.first == rank || self.second == rank
    }

    /// Are both cards exactly the same rank?
    pub fn is_pair(&self) -> bool {
        self.first == self.second
    }

    /// Total with every ace counted as 1.
    pub const fn hard_total(&self) -> u8 {
        self.first.hard_value() + self.second.hard_value()
    }

    /// Total with every ace counted as 11. Two aces make 22.
    pub const fn soft_total(&self) -> u8 {
        self.first.soft_value() + self.second.soft_value()
    }
}

impl From<[Rank; 2]> for TwoCardHand {
    fn from(cards: [Rank; 2]) -> Self {
        Self::new(cards[0], cards[1])
    }
}

impl From<TwoCardHand> for [Rank; 2] {
    fn from(hand: TwoCardHand) -> Self {
        hand.cards()
    }
}

impl From<(Rank, Rank)> for TwoCardHand {
    fn from((first, second): (Rank, Rank)) -> Self {
        Self::new(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_str() {
        let hand = TwoCardHand::new_from_str("A", "10").unwrap();
        assert_eq!(Rank::Ace, hand.first);
        assert_eq!(Rank::Ten, hand.second);
    }

    #[test]
    fn test_new_from_str_reports_bad_card() {
        assert_eq!(
            Err(BlackjackError::InvalidCard("1".to_string())),
            TwoCardHand::new_from_str("5", "1")
        );
        assert_eq!(
            Err(BlackjackError::InvalidCard("".to_string())),
            TwoCardHand::new_from_str("", "5")
        );
    }

    #[test]
    fn test_totals() {
        let hand = TwoCardHand::new(Rank::Ace, Rank::Six);
        assert_eq!(7, hand.hard_total());
        assert_eq!(17, hand.soft_total());

        let aces = TwoCardHand::new(Rank::Ace, Rank::Ace);
        assert_eq!(2, aces.hard_total());
        assert_eq!(22, aces.soft_total());

        let faces = TwoCardHand::new(Rank::Queen, Rank::King);
        assert_eq!(20, faces.hard_total());
        assert_eq!(20, faces.soft_total());
    }

    #[test]
    fn test_contains_and_pair() {
        let hand = TwoCardHand::new(Rank::Eight, Rank::Eight);
        assert!(hand.contains(Rank::Eight));
        assert!(!hand.contains(Rank::Ace));
        assert!(hand.is_pair());

        let hand = TwoCardHand::new(Rank::Jack, Rank::Queen);
        assert!(!hand.is_pair());
    }

    #[test]
    fn test_from_conversions() {
        let hand = TwoCardHand::from([Rank::Two, Rank::Nine]);
        assert_eq!(hand, TwoCardHand::from((Rank::Two, Rank::Nine)));
        assert_eq!([Rank::Two, Rank::Nine], <[Rank; 2]>::from(hand));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_tokens() {
        let hand = TwoCardHand::new(Rank::Ace, Rank::Ten);
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(r#"["A","10"]"#, json);

        let back: TwoCardHand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);

        assert!(serde_json::from_str::<TwoCardHand>(r#"["A"]"#).is_err());
        assert!(serde_json::from_str::<TwoCardHand>(r#"["A","1"]"#).is_err());
    }
}
