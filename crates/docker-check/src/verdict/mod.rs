//! Verdict engine
//!
//! Maps a daemon snapshot into exactly one [`Verdict`]. Nothing in here
//! exits the process; the binary translates the verdict into an exit code
//! once, at the top level.

pub mod container;
pub mod liveness;
pub mod resolve;
pub mod summary;

use crate::config::CheckMode;
use crate::daemon::DaemonClient;
use crate::probe::PortProbe;
use std::fmt;
use tracing::debug;

/// Plugin severity, ordered by escalation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    pub fn exit_code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one run: a severity and a single-line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        // Line breaks and other control characters would split the output line
        let message = message
            .into()
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        Self { severity, message }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Run the check for `mode` against an already constructed client
pub async fn evaluate(
    client: &dyn DaemonClient,
    prober: &dyn PortProbe,
    mode: &CheckMode,
) -> Verdict {
    let info = match client.info().await {
        Ok(info) => info,
        Err(e) => return Verdict::critical(format!("Docker is not running: {e}")),
    };

    match mode {
        CheckMode::Summary(thresholds) => summary::evaluate(&info, thresholds),
        CheckMode::Container(check) => {
            let records = match client.list_containers(true).await {
                Ok(records) => records,
                Err(e) => return Verdict::critical(format!("Failed to list containers: {e}")),
            };
            debug!("Daemon returned {} container records", records.len());

            container::evaluate(&records, check, prober).await
        }
    }
}
