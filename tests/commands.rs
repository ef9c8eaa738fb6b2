//! Command-level tests that need no external services.

use claims_generator::{GenerationConfig, IterationDriver};
use clap::Parser;
use debezium_connector::ConnectorArgs;
use healthcare_cdc::{run_loop, run_register, JsonLinesGateway, LoopExit, LoopSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::process::Command;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
struct ConnectorCli {
    #[command(flatten)]
    args: ConnectorArgs,
}

#[tokio::test]
async fn test_dry_run_loop_emits_all_rows() {
    let mut driver =
        IterationDriver::new(GenerationConfig::default(), StdRng::seed_from_u64(42)).unwrap();
    let mut gateway = JsonLinesGateway::new(Vec::new());
    let settings = LoopSettings {
        once: false,
        max_iterations: 2,
        sleep: Duration::ZERO,
    };

    let exit = run_loop(&mut driver, &mut gateway, &settings, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(exit, LoopExit::Completed(2));

    let output = String::from_utf8(gateway.into_writer()).unwrap();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for line in output.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let table = value["table"].as_str().unwrap().to_string();
        *counts.entry(table).or_insert(0) += 1;
    }

    assert_eq!(counts["members"], 20);
    assert_eq!(counts["policies"], 20);
    assert_eq!(counts["claims"], 100);
}

#[tokio::test]
async fn test_register_connector_unreachable() {
    let cli = ConnectorCli::parse_from([
        "test",
        "--connect-url",
        "http://127.0.0.1:9",
        "--timeout-seconds",
        "2",
    ]);

    let err = run_register(cli.args).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to register connector 'postgres-connector'"));
    assert!(message.contains("http://127.0.0.1:9"));
}

fn healthcare_cdc() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_healthcare-cdc"));
    command
        .env_remove("RUST_LOG")
        .env_remove("KAFKA_CONNECT_URL")
        .env_remove("POSTGRESQL_CONNECTION_STRING");
    command
}

#[test]
fn test_dry_run_stdout_is_pure_json_lines() {
    let output = healthcare_cdc()
        .args(["generate", "--once", "--dry-run", "--seed", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10 + 10 + 50);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not a JSON row: {line:?} ({e})"));
        assert!(value["table"].is_string());
    }

    // Progress logging still happens, on stderr
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Iteration 1/"));
}

#[test]
fn test_dotenv_file_supplies_connect_url() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "KAFKA_CONNECT_URL=http://127.0.0.1:9\n",
    )
    .unwrap();

    let output = healthcare_cdc()
        .current_dir(dir.path())
        .args(["register-connector", "--timeout-seconds", "2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("at http://127.0.0.1:9"), "stderr: {stderr}");
}
