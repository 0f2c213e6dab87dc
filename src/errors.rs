//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the grocery platform can report.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Console I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("Input closed before the session finished")]
    InputClosed,

    /// A quantity outside the orderable range was supplied.
    #[error("Invalid quantity {quantity}: must be between {min} and {max}")]
    InvalidQuantity {
        /// The rejected value
        quantity: i64,
        /// Smallest accepted quantity
        min: u8,
        /// Largest accepted quantity
        max: u8,
    },

    /// A product price that is zero, negative, or not a finite number.
    #[error("Invalid price {price} for product '{name}'")]
    InvalidPrice {
        /// Product the price belongs to
        name: String,
        /// The rejected price
        price: f64,
    },

    /// A required text field was blank.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the blank field
        field: &'static str,
    },

    /// The order summary was already produced; no more lines may be added.
    #[error("Order is finalized; no further products can be added")]
    OrderFinalized,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
