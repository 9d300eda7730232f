//! This is the core module. It exports the types every
//! rule is written against.

/// rank.rs has the card rank and its values.
mod rank;
/// Re-export Rank
pub use self::rank::Rank;

/// The two card hand.
mod hand;
/// Export `TwoCardHand`
pub use self::hand::TwoCardHand;

mod error;
/// Export the error type.
pub use self::error::BlackjackError;
