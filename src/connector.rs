//! The `register-connector` command.

use anyhow::Context;
use debezium_connector::{http_client, register_connector, ConnectorArgs, RegistrationOutcome};
use std::time::Duration;
use tracing::info;

pub async fn run_register(args: ConnectorArgs) -> anyhow::Result<RegistrationOutcome> {
    let request = args.settings().to_request();
    let client = http_client(Duration::from_secs(args.timeout_seconds))
        .context("Failed to build HTTP client")?;

    info!(
        "Registering connector '{}' with Kafka Connect at {}",
        request.name, args.connect_url
    );

    let outcome = register_connector(&client, &args.connect_url, &request)
        .await
        .with_context(|| {
            format!(
                "Failed to register connector '{}' at {}",
                request.name, args.connect_url
            )
        })?;

    match outcome {
        RegistrationOutcome::Created => {
            info!("Connector '{}' created successfully", request.name)
        }
        RegistrationOutcome::AlreadyExists => {
            info!("Connector '{}' already exists", request.name)
        }
    }

    Ok(outcome)
}
