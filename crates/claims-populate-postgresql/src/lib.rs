//! PostgreSQL persistence for the healthcare claims generator.
//!
//! Rows are inserted one at a time with `INSERT ... RETURNING id` so that the
//! generator can link policies to members and claims to policies. The
//! connection runs in autocommit mode; a failed insert leaves earlier rows in
//! place.

pub mod args;
pub mod ddl;
pub mod error;
pub mod gateway;

pub use args::{CommonGenerateArgs, PostgreSQLGenerateArgs};
pub use error::PostgreSQLPopulatorError;
pub use gateway::PostgreSQLGateway;
