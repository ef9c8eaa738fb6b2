//! Healthcare CDC demo tooling
//!
//! Two operational commands for a change-data-capture demo pipeline built on
//! PostgreSQL, Debezium and Kafka:
//!
//! - `generate` keeps a `members` / `policies` / `claims` schema busy with
//!   randomized but internally consistent rows, one pass every few seconds.
//! - `register-connector` registers the Debezium PostgreSQL source connector
//!   with a Kafka Connect worker.
//!
//! # Crates
//!
//! - `claims_generator` - value providers, consistency rules and the pass driver
//! - `claims_populate_postgresql` - PostgreSQL persistence gateway
//! - `debezium_connector` - Kafka Connect REST client
//!
//! # CLI Usage
//!
//! ```bash
//! # One pass against the database from POSTGRES_* variables
//! healthcare-cdc generate --once --create-tables
//!
//! # Continuous generation with a fixed seed
//! healthcare-cdc generate --seed 42 --max-iterations 500 --sleep-seconds 1
//!
//! # Register the connector
//! healthcare-cdc register-connector --connect-url http://localhost:8083
//! ```

pub mod connector;
pub mod dry_run;
pub mod generate;

pub use connector::run_register;
pub use dry_run::JsonLinesGateway;
pub use generate::{run_generate, run_loop, LoopExit, LoopSettings};
