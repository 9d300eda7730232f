use crate::core::TwoCardHand;

use super::HigherCard;

/// Lowest two card total where doubling down is offered.
const DOUBLE_DOWN_MIN: u8 = 9;
/// Highest two card total where doubling down is offered.
const DOUBLE_DOWN_MAX: u8 = 11;
const BLACKJACK: u8 = 21;

impl TwoCardHand {
    /// Which of the two cards is worth more.
    ///
    /// This compares hard values so an ace loses to everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_rules::core::{Rank, TwoCardHand};
    /// use blackjack_rules::rules::HigherCard;
    ///
    /// let hand = TwoCardHand::new(Rank::Ace, Rank::Two);
    /// assert_eq!(HigherCard::One(Rank::Two), hand.higher_card());
    ///
    /// let hand = TwoCardHand::new(Rank::Jack, Rank::Ten);
    /// assert_eq!(HigherCard::Tie(Rank::Jack, Rank::Ten), hand.higher_card());
    /// ```
    pub fn higher_card(&self) -> HigherCard {
        let one = self.first.hard_value();
        let two = self.second.hard_value();

        if one > two {
            HigherCard::One(self.first)
        } else if two > one {
            HigherCard::One(self.second)
        } else {
            HigherCard::Tie(self.first, self.second)
        }
    }

    /// What an ace dealt next should count as, 11 if it can't
    /// bust the hand and 1 otherwise. Any ace already in the hand
    /// is counted as 11.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_rules::core::{Rank, TwoCardHand};
    ///
    /// assert_eq!(11, TwoCardHand::new(Rank::Two, Rank::Three).value_of_ace());
    /// assert_eq!(1, TwoCardHand::new(Rank::Ten, Rank::Nine).value_of_ace());
    /// ```
    pub fn value_of_ace(&self) -> u8 {
        if self.soft_total() <= 10 { 11 } else { 1 }
    }

    /// Is this a natural, an ace and a ten valued card?
    ///
    /// ```
    /// use blackjack_rules::core::{Rank, TwoCardHand};
    ///
    /// assert!(TwoCardHand::new(Rank::King, Rank::Ace).is_blackjack());
    /// assert!(!TwoCardHand::new(Rank::Ace, Rank::Ace).is_blackjack());
    /// ```
    pub fn is_blackjack(&self) -> bool {
        (self.first.is_ace() && self.second.is_ten_valued())
            || (self.first.is_ten_valued() && self.second.is_ace())
    }

    /// Both cards are worth the same, so the hand can be
    /// split into two. Any two ten valued cards can be split.
    pub fn can_split_pairs(&self) -> bool {
        self.first.soft_value() == self.second.soft_value()
    }

    /// Can the player double down on this hand?
    ///
    /// Totals of 9, 10 and 11 can always double. Any hand holding
    /// an ace can as well, except a pair of aces.
    ///
    /// ```
    /// use blackjack_rules::core::{Rank, TwoCardHand};
    ///
    /// assert!(TwoCardHand::new(Rank::Five, Rank::Six).can_double_down());
    /// assert!(TwoCardHand::new(Rank::Ace, Rank::Nine).can_double_down());
    /// assert!(!TwoCardHand::new(Rank::Ace, Rank::Ace).can_double_down());
    /// assert!(!TwoCardHand::new(Rank::King, Rank::Queen).can_double_down());
    /// ```
    pub fn can_double_down(&self) -> bool {
        let has_ace = self.first.is_ace() || self.second.is_ace();
        if has_ace && self.is_pair() {
            return false;
        }
        (DOUBLE_DOWN_MIN..=DOUBLE_DOWN_MAX).contains(&self.double_down_total()) || has_ace
    }

    /// Soft total, re-counting an ace as 1 if that's the
    /// only way to keep the hand from busting.
    fn double_down_total(&self) -> u8 {
        let total = self.soft_total();
        if total > BLACKJACK && (self.first.is_ace() || self.second.is_ace()) {
            total - 10
        } else {
            total
        }
    }
}
