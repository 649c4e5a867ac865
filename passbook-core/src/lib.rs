//! passbook-core: record types, output schema and token patterns shared by
//! the statement engine and the CLI.

pub mod amount;
pub mod error;
pub mod patterns;
pub mod record;
pub mod schema;

pub use amount::{is_zero_amount, parse_amount};
pub use error::Error;
pub use patterns::{is_amount, is_short_date};
pub use record::{FinalRecord, InterimTransaction};
pub use schema::OutputSchema;
