//! Debezium PostgreSQL connector payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully qualified class of the Debezium PostgreSQL source connector.
pub const POSTGRES_CONNECTOR_CLASS: &str = "io.debezium.connector.postgresql.PostgresConnector";

/// Body of `POST /connectors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorRequest {
    pub name: String,
    /// Kafka Connect expects every value as a string
    pub config: BTreeMap<String, String>,
}

/// Settings that vary between deployments of the demo pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgresConnectorSettings {
    pub name: String,
    /// Database host as seen from the Kafka Connect worker
    pub database_hostname: String,
    pub database_port: u16,
    pub database_user: String,
    pub database_password: String,
    pub database_dbname: String,
    pub topic_prefix: String,
    pub table_include_list: Vec<String>,
    pub plugin_name: String,
    pub slot_name: String,
}

impl Default for PostgresConnectorSettings {
    fn default() -> Self {
        Self {
            name: "postgres-connector".to_string(),
            database_hostname: "postgres".to_string(),
            database_port: 5432,
            database_user: "postgres".to_string(),
            database_password: String::new(),
            database_dbname: "postgres".to_string(),
            topic_prefix: "healthcare_server".to_string(),
            table_include_list: vec![
                "public.members".to_string(),
                "public.policies".to_string(),
                "public.claims".to_string(),
            ],
            plugin_name: "pgoutput".to_string(),
            slot_name: "healthcare_slot".to_string(),
        }
    }
}

impl PostgresConnectorSettings {
    pub fn to_request(&self) -> ConnectorRequest {
        let entries = [
            ("connector.class", POSTGRES_CONNECTOR_CLASS.to_string()),
            ("database.hostname", self.database_hostname.clone()),
            ("database.port", self.database_port.to_string()),
            ("database.user", self.database_user.clone()),
            ("database.password", self.database_password.clone()),
            ("database.dbname", self.database_dbname.clone()),
            ("topic.prefix", self.topic_prefix.clone()),
            ("table.include.list", self.table_include_list.join(",")),
            ("plugin.name", self.plugin_name.clone()),
            ("slot.name", self.slot_name.clone()),
            ("publication.autocreate.mode", "filtered".to_string()),
            ("tombstones.on.delete", "false".to_string()),
            ("decimal.handling.mode", "double".to_string()),
        ];

        ConnectorRequest {
            name: self.name.clone(),
            config: entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}
