use thiserror::Error;

/// Errors raised while interpreting statement tokens or output settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The token does not hold an exact two-place decimal amount.
    #[error("invalid amount '{raw}': {reason}")]
    InvalidAmount { raw: String, reason: String },

    #[error("output column '{column}' has an empty name")]
    EmptyField { column: &'static str },

    /// Two columns share a name, so a keyed row would lose one of them.
    #[error("output column name '{name}' is used more than once")]
    DuplicateField { name: String },
}
