//! Command-line interface for healthcare-cdc
//!
//! # Usage Examples
//!
//! ## Data generation
//! ```bash
//! # Single pass, creating the tables first
//! POSTGRES_HOST=localhost POSTGRES_DB=healthcare POSTGRES_USER=postgres \
//!   healthcare-cdc generate --once --create-tables
//!
//! # Preview rows without a database
//! healthcare-cdc generate --once --dry-run --seed 7
//! ```
//!
//! ## Connector registration
//! ```bash
//! healthcare-cdc register-connector \
//!   --connect-url http://localhost:8083 \
//!   --postgres-db healthcare
//! ```

use claims_populate_postgresql::PostgreSQLGenerateArgs;
use clap::{Parser, Subcommand};
use debezium_connector::ConnectorArgs;
use healthcare_cdc::{run_generate, run_register};

#[derive(Parser)]
#[command(name = "healthcare-cdc")]
#[command(about = "Synthetic healthcare insurance data and Debezium setup for a CDC demo")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert randomized members, policies and claims into PostgreSQL on a timed loop
    Generate {
        #[command(flatten)]
        args: PostgreSQLGenerateArgs,
    },

    /// Register the Debezium PostgreSQL source connector with Kafka Connect
    RegisterConnector {
        #[command(flatten)]
        args: ConnectorArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Values from .env back the clap `env` fallbacks; real environment wins
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for dry-run rows
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args).await?;
        }
        Commands::RegisterConnector { args } => {
            run_register(args).await?;
        }
    }

    Ok(())
}
