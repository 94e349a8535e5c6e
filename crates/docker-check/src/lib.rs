//! Docker Check
//!
//! One-shot monitoring probe for a Docker daemon. Connects to the daemon,
//! evaluates either one named container or the daemon-wide summary, and
//! produces a single [`Verdict`] for a monitoring scheduler.

pub mod cli;
pub mod config;
pub mod daemon;
pub mod error;
pub mod probe;
pub mod verdict;

pub use config::CheckPlan;
pub use verdict::{Severity, Verdict};

use daemon::DockerConnector;
use probe::TcpProbe;
use tracing::info;

/// Run one check end to end against the configured daemon
pub async fn run(plan: &CheckPlan) -> Verdict {
    let connector = match DockerConnector::connect(&plan.daemon) {
        Ok(connector) => connector,
        Err(e) => return Verdict::critical(format!("Failed to create docker client: {e}")),
    };
    let prober = TcpProbe::new(plan.probe.timeout());

    let verdict = verdict::evaluate(&connector, &prober, &plan.mode).await;
    info!("Check finished with {}", verdict.severity);
    verdict
}
