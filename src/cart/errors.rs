use thiserror::Error;

/// Errors from filling a cart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("No aisle information for item {0}")]
    UnknownItem(String),
}
