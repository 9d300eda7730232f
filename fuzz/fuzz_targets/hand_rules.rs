#![no_main]

extern crate blackjack_rules;
extern crate libfuzzer_sys;

use blackjack_rules::core::TwoCardHand;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|hand: TwoCardHand| {
    let ace = hand.value_of_ace();
    assert!(ace == 1 || ace == 11);
    if ace == 11 {
        assert!(hand.soft_total() + 11 <= 21);
    }

    assert_eq!(hand.soft_total() == 21, hand.is_blackjack());

    let higher = hand.higher_card();
    assert!(higher.accepts(hand.first) || higher.accepts(hand.second));

    if hand.can_split_pairs() {
        assert_eq!(hand.first.soft_value(), hand.second.soft_value());
    }

    let flipped = TwoCardHand::new(hand.second, hand.first);
    assert_eq!(higher, flipped.higher_card());
    assert_eq!(hand.can_double_down(), flipped.can_double_down());
});
