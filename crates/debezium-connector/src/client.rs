//! Kafka Connect REST client for connector registration.

use crate::payload::ConnectorRequest;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Successful results of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// HTTP 201: the connector was created.
    Created,
    /// HTTP 409: a connector with this name is already registered.
    AlreadyExists,
}

impl std::fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::AlreadyExists => write!(f, "already exists"),
        }
    }
}

/// Errors from talking to Kafka Connect.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// The request could not be sent or the response could not be read.
    #[error("Kafka Connect request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Kafka Connect answered with a status other than 201 or 409.
    #[error("Failed to create connector ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Build an HTTP client with the given request timeout.
pub fn http_client(timeout: Duration) -> Result<Client, ConnectorError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// URL of the connector collection under a Kafka Connect base URL.
pub fn connectors_url(connect_url: &str) -> String {
    format!("{}/connectors", connect_url.trim_end_matches('/'))
}

/// Map a Kafka Connect response to an outcome.
pub fn classify_response(
    status: StatusCode,
    body: &str,
) -> Result<RegistrationOutcome, ConnectorError> {
    match status {
        StatusCode::CREATED => Ok(RegistrationOutcome::Created),
        StatusCode::CONFLICT => Ok(RegistrationOutcome::AlreadyExists),
        other => Err(ConnectorError::Rejected {
            status: other.as_u16(),
            body: body.to_string(),
        }),
    }
}

/// POST the connector definition once. No retries.
pub async fn register_connector(
    client: &Client,
    connect_url: &str,
    request: &ConnectorRequest,
) -> Result<RegistrationOutcome, ConnectorError> {
    let url = connectors_url(connect_url);
    tracing::debug!("Registering connector '{}' at {url}", request.name);

    let response = client.post(&url).json(request).send().await?;
    let status = response.status();
    let body = response.text().await?;

    classify_response(status, &body)
}
