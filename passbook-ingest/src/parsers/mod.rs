//! Bank-specific entry points built on the statement engine.

pub mod hdfc;

pub use hdfc::{parse_hdfc_statement, parse_hdfc_text};
