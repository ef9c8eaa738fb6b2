//! Registers the Debezium PostgreSQL source connector with Kafka Connect.
//!
//! One `POST /connectors` with a fixed payload. HTTP 201 means the connector
//! was created and 409 that it already exists; both count as success. Any
//! other status is returned as [`ConnectorError::Rejected`] with the response
//! body. There is no retry and no health polling.

pub mod args;
pub mod client;
pub mod payload;

pub use args::ConnectorArgs;
pub use client::{
    classify_response, http_client, register_connector, ConnectorError, RegistrationOutcome,
};
pub use payload::{ConnectorRequest, PostgresConnectorSettings};
