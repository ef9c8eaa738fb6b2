//! The `generate` command: repeated generation passes with graceful shutdown.

use crate::dry_run::JsonLinesGateway;
use anyhow::Context;
use claims_generator::{GeneratorError, IterationDriver, PersistenceGateway};
use claims_populate_postgresql::{CommonGenerateArgs, PostgreSQLGateway, PostgreSQLGenerateArgs};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// How passes are repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSettings {
    /// Stop after the first pass
    pub once: bool,
    pub max_iterations: u32,
    pub sleep: Duration,
}

impl From<&CommonGenerateArgs> for LoopSettings {
    fn from(args: &CommonGenerateArgs) -> Self {
        Self {
            once: args.once,
            max_iterations: args.max_iterations,
            sleep: Duration::from_secs(args.sleep_seconds),
        }
    }
}

/// Why the loop stopped, with the number of completed passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Completed(u32),
    Interrupted(u32),
}

/// Cancel `token` on the first Ctrl+C.
pub fn setup_shutdown_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received interrupt signal (Ctrl+C), stopping after the current pass");
                trigger.cancel();
            }
            Err(e) => tracing::warn!("Failed to install Ctrl+C handler: {}", e),
        }
    });

    token
}

/// Run passes until `max_iterations`, `--once`, or cancellation.
///
/// Cancellation is honoured before a pass starts and while sleeping between
/// passes; a pass that has started always runs to completion or error.
pub async fn run_loop<R, G>(
    driver: &mut IterationDriver<R>,
    gateway: &mut G,
    settings: &LoopSettings,
    shutdown: &CancellationToken,
) -> Result<LoopExit, GeneratorError>
where
    R: Rng + Send,
    G: PersistenceGateway + ?Sized,
{
    let mut iteration = 0;

    while iteration < settings.max_iterations {
        if shutdown.is_cancelled() {
            return Ok(LoopExit::Interrupted(iteration));
        }

        iteration += 1;
        info!("Iteration {}/{} started", iteration, settings.max_iterations);
        let today = chrono::Local::now().date_naive();
        let report = driver.run_pass(gateway, today).await?;
        info!(
            "Iteration {}/{} finished: {} rows ({:.2} rows/sec)",
            iteration,
            settings.max_iterations,
            report.total_rows(),
            report.rows_per_second()
        );

        if settings.once || iteration >= settings.max_iterations {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(settings.sleep) => {}
            _ = shutdown.cancelled() => return Ok(LoopExit::Interrupted(iteration)),
        }
    }

    Ok(LoopExit::Completed(iteration))
}

fn log_exit(exit: LoopExit) {
    match exit {
        LoopExit::Completed(n) => info!("Completed {} iterations. Exiting...", n),
        LoopExit::Interrupted(n) => {
            info!("Interrupted by user after {} iterations. Exiting gracefully...", n)
        }
    }
}

pub async fn run_generate(args: PostgreSQLGenerateArgs) -> anyhow::Result<()> {
    let common = &args.common;
    let config = common.generation_config();
    let seed = common.seed.unwrap_or_else(rand::random);
    let settings = LoopSettings::from(common);

    info!(
        "Generating {} members, {} policies per member, {} claims per pass (seed={})",
        config.members, config.policies_per_member, config.claims, seed
    );

    let mut driver = IterationDriver::new(config, StdRng::seed_from_u64(seed))
        .context("Invalid generation settings")?;
    let shutdown = setup_shutdown_handler();

    if common.dry_run {
        info!("Dry-run mode: writing rows to stdout as JSON lines");
        let mut gateway = JsonLinesGateway::new(std::io::stdout());
        let exit = run_loop(&mut driver, &mut gateway, &settings, &shutdown).await?;
        log_exit(exit);
        return Ok(());
    }

    let connection_config = args
        .connection_config()
        .context("Invalid PostgreSQL settings")?;
    let mut gateway = PostgreSQLGateway::connect(&connection_config)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let result = async {
        if common.create_tables {
            gateway
                .create_tables()
                .await
                .context("Failed to create tables")?;
        }
        let exit = run_loop(&mut driver, &mut gateway, &settings, &shutdown)
            .await
            .context("Generation pass failed")?;
        log_exit(exit);
        anyhow::Ok(())
    }
    .await;

    gateway.close().await;
    result
}
