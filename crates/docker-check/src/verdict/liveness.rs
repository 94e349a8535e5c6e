//! Liveness classification from the runtime's free-text status

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    Running,
    Ghost,
    NotRunning,
}

/// Ghost is checked first: a ghost record can still read "Up ..."
pub fn classify(status: &str) -> Liveness {
    if status.contains("Ghost") {
        Liveness::Ghost
    } else if status.contains("Up") {
        Liveness::Running
    } else {
        Liveness::NotRunning
    }
}
