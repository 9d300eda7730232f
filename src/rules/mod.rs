//! Blackjack scoring rules for a two card hand.
//!
//! The rules are available two ways. Methods on
//! [`TwoCardHand`](crate::core::TwoCardHand) work on parsed ranks and
//! can't fail. The free functions take the card tokens as strings,
//! parse them and then apply the same rule.
//!
//! Every rule counts an ace as 11 except `higher_card`, which
//! compares with the ace as 1.

/// The result type of `higher_card`.
mod higher_card;
pub use self::higher_card::HigherCard;

/// Rules implemented on the typed hand.
mod hand_rules;

/// Rules over string tokens.
mod token;
pub use self::token::{
    can_double_down, can_split_pairs, higher_card, is_blackjack, value_of_ace, value_of_card,
};
