use thiserror::Error;

/// This is the core error type for the
/// blackjack_rules library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlackjackError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),
}
