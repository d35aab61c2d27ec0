// src/main.rs
use std::process::ExitCode;

use tracing::debug;

use health_probe::config::ProbeConfig;
use health_probe::probe::{HealthProber, ProbeOutcome};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries exactly the one probe line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ProbeConfig::default();
    debug!(
        target_url = %config.target_url,
        timeout_secs = config.timeout_secs,
        "Starting health probe"
    );

    let outcome = match HealthProber::new(config) {
        Ok(prober) => prober.probe().await,
        // Setup failures converge to the same unhealthy signal as transport
        // errors; the supervisor only reads the exit code.
        Err(e) => ProbeOutcome::TransportError(e.to_string()),
    };

    println!("{outcome}");
    ExitCode::from(outcome.exit_code())
}
