#![no_main]

extern crate arbitrary;
extern crate blackjack_rules;
extern crate libfuzzer_sys;

use blackjack_rules::core::{Rank, TwoCardHand};
use blackjack_rules::rules::{
    can_double_down, can_split_pairs, higher_card, is_blackjack, value_of_ace, value_of_card,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub card_one: String,
    pub card_two: String,
}

fuzz_target!(|input: Input| {
    let one = input.card_one.as_str();
    let two = input.card_two.as_str();

    // A token either parses and prints back the same or is rejected.
    match one.parse::<Rank>() {
        Ok(rank) => {
            assert_eq!(one, rank.to_string());
            assert_eq!(Ok(rank.hard_value()), value_of_card(one));
        }
        Err(_) => assert!(value_of_card(one).is_err()),
    }

    match TwoCardHand::new_from_str(one, two) {
        Ok(hand) => {
            assert_eq!(Ok(hand.higher_card()), higher_card(one, two));
            assert_eq!(Ok(hand.value_of_ace()), value_of_ace(one, two));
            assert_eq!(Ok(hand.is_blackjack()), is_blackjack(one, two));
            assert_eq!(Ok(hand.can_split_pairs()), can_split_pairs(one, two));
            assert_eq!(hand.can_double_down(), can_double_down(one, two));
        }
        Err(_) => {
            assert!(higher_card(one, two).is_err());
            assert!(value_of_ace(one, two).is_err());
            assert!(is_blackjack(one, two).is_err());
            assert!(can_split_pairs(one, two).is_err());
            assert!(!can_double_down(one, two));
        }
    }
});
