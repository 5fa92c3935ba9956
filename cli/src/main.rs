//! CLI entrypoint for SchemaShield CI
//!
//! This is the main binary that wires together all layers using
//! dependency injection and maps run outcomes to process exit codes.

use anyhow::{Context, Result};
use clap::Parser;
use shield_application::{PreparePayloadUseCase, RunCiError, RunCiUseCase};
use shield_infrastructure::{ConfigLoader, HttpCiGateway, LocalCaseSource};
use shield_presentation::{Cli, ConsoleFormatter};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = ConfigLoader::load(cli.config.as_deref()).context("Configuration error")?;

    if cli.show_config {
        print!("{}", ConsoleFormatter::format_config(&config));
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting SchemaShield CI");

    // === Dependency Injection ===
    let case_source = Arc::new(LocalCaseSource::new());

    if cli.dry_run {
        return match PreparePayloadUseCase::new(case_source).execute(&config) {
            Ok(payload) => {
                println!("{}", ConsoleFormatter::format_payload(&payload));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let gateway = Arc::new(HttpCiGateway::new(&config)?);
    let use_case = RunCiUseCase::new(case_source, gateway);

    match use_case.execute(&config).await {
        Ok(output) => {
            let line = ConsoleFormatter::format_verdict(&output.verdict);
            if output.verdict.is_passed() {
                println!("{}", line);
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{}", line);
                Ok(ExitCode::FAILURE)
            }
        }
        Err(RunCiError::Domain(e)) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(RunCiError::Gateway(e)) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
