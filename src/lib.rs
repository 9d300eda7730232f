//! blackjack_rules scores two card blackjack hands.
//! It answers the questions a player asks right after the deal:
//! what each card is worth, what an ace should count as, whether
//! the hand is a natural, and whether it can be split or doubled.
//!
//! ```
//! use blackjack_rules::rules::{can_double_down, is_blackjack, value_of_card};
//!
//! assert_eq!(Ok(10), value_of_card("Q"));
//! assert_eq!(Ok(true), is_blackjack("A", "K"));
//! assert!(can_double_down("5", "6"));
//! ```

/// Card ranks, the two card hand and the error type.
/// Everything else is written against these.
pub mod core;
/// The scoring rules.
pub mod rules;
/// Shopping cart helpers. These have nothing to do with cards.
pub mod cart;
