//! CLI argument definitions for connector registration.

use crate::payload::PostgresConnectorSettings;
use clap::Args;

#[derive(Args, Clone, Debug)]
pub struct ConnectorArgs {
    /// Kafka Connect REST endpoint
    #[arg(long, env = "KAFKA_CONNECT_URL", default_value = "http://localhost:8083")]
    pub connect_url: String,

    /// Name to register the connector under
    #[arg(long, default_value = "postgres-connector")]
    pub connector_name: String,

    /// PostgreSQL host as reachable from the Kafka Connect worker
    #[arg(long, default_value = "postgres")]
    pub database_hostname: String,

    /// PostgreSQL port as reachable from the Kafka Connect worker
    #[arg(long, default_value = "5432")]
    pub database_port: u16,

    /// PostgreSQL user
    #[arg(long, env = "POSTGRES_USER", default_value = "postgres")]
    pub postgres_user: String,

    /// PostgreSQL password
    #[arg(long, env = "POSTGRES_PASSWORD", default_value = "", hide_env_values = true)]
    pub postgres_password: String,

    /// PostgreSQL database name
    #[arg(long, env = "POSTGRES_DB", default_value = "postgres")]
    pub postgres_db: String,

    /// Prefix for the change topics
    #[arg(long, default_value = "healthcare_server")]
    pub topic_prefix: String,

    /// Tables to capture (comma-separated, schema-qualified)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "public.members,public.policies,public.claims"
    )]
    pub tables: Vec<String>,

    /// Logical decoding output plugin
    #[arg(long, default_value = "pgoutput")]
    pub plugin_name: String,

    /// Replication slot name
    #[arg(long, default_value = "healthcare_slot")]
    pub slot_name: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,
}

impl ConnectorArgs {
    pub fn settings(&self) -> PostgresConnectorSettings {
        PostgresConnectorSettings {
            name: self.connector_name.clone(),
            database_hostname: self.database_hostname.clone(),
            database_port: self.database_port,
            database_user: self.postgres_user.clone(),
            database_password: self.postgres_password.clone(),
            database_dbname: self.postgres_db.clone(),
            topic_prefix: self.topic_prefix.clone(),
            table_include_list: self.tables.clone(),
            plugin_name: self.plugin_name.clone(),
            slot_name: self.slot_name.clone(),
        }
    }
}
