//! TCP reachability probe for published container ports

use crate::error::ProbeError;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Checks whether something accepts connections on an address
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortProbe: Send + Sync {
    async fn probe(&self, addr: IpAddr, port: u16) -> Result<(), ProbeError>;
}

/// Plain TCP connect with an explicit timeout
#[derive(Debug, Clone)]
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl PortProbe for TcpProbe {
    async fn probe(&self, addr: IpAddr, port: u16) -> Result<(), ProbeError> {
        let target = SocketAddr::new(addr, port);
        debug!("Probing {} (timeout {:?})", target, self.timeout);

        match tokio::time::timeout(self.timeout, TcpStream::connect(target)).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(ProbeError::from(e)),
            Err(_) => Err(ProbeError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}
