use tracing::event;

use crate::core::{BlackjackError, Rank, TwoCardHand};

use super::HigherCard;

/// Determine the scoring value of a card token.
///
/// Face cards are worth 10, the ace 1 and numerals their number.
///
/// # Examples
///
/// ```
/// use blackjack_rules::core::BlackjackError;
/// use blackjack_rules::rules::value_of_card;
///
/// assert_eq!(Ok(10), value_of_card("K"));
/// assert_eq!(Ok(1), value_of_card("A"));
/// assert_eq!(Ok(7), value_of_card("7"));
/// assert_eq!(
///     Err(BlackjackError::InvalidCard("X".to_string())),
///     value_of_card("X")
/// );
/// ```
pub fn value_of_card(card: &str) -> Result<u8, BlackjackError> {
    Ok(card.parse::<Rank>()?.hard_value())
}

/// Determine which of two card tokens is worth more, counting
/// the ace as 1. Equal cards come back as a tie.
pub fn higher_card(card_one: &str, card_two: &str) -> Result<HigherCard, BlackjackError> {
    Ok(TwoCardHand::new_from_str(card_one, card_two)?.higher_card())
}

/// The most advantageous value, 1 or 11, for an ace joining a
/// hand that holds these two cards.
pub fn value_of_ace(card_one: &str, card_two: &str) -> Result<u8, BlackjackError> {
    Ok(TwoCardHand::new_from_str(card_one, card_two)?.value_of_ace())
}

/// Is the hand a natural blackjack?
pub fn is_blackjack(card_one: &str, card_two: &str) -> Result<bool, BlackjackError> {
    Ok(TwoCardHand::new_from_str(card_one, card_two)?.is_blackjack())
}

/// Can the hand be split into two hands?
pub fn can_split_pairs(card_one: &str, card_two: &str) -> Result<bool, BlackjackError> {
    Ok(TwoCardHand::new_from_str(card_one, card_two)?.can_split_pairs())
}

/// Can the player double down on this hand?
///
/// Unlike the other checks this never fails. A hand with a
/// token that isn't a card simply can't be doubled.
///
/// ```
/// use blackjack_rules::rules::can_double_down;
///
/// assert!(can_double_down("5", "6"));
/// assert!(!can_double_down("A", "A"));
/// assert!(!can_double_down("X", "6"));
/// ```
pub fn can_double_down(card_one: &str, card_two: &str) -> bool {
    match TwoCardHand::new_from_str(card_one, card_two) {
        Ok(hand) => hand.can_double_down(),
        Err(error) => {
            event!(
                tracing::Level::DEBUG,
                card_one,
                card_two,
                %error,
                "Hand can't double down"
            );
            false
        }
    }
}
