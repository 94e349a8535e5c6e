//! Daemon snapshot types
//!
//! Every optional field the runtime may omit is an explicit `Option` here.
//! Presence checks against the raw API models happen once, in
//! [`super::translate`].

use std::fmt;
use std::net::IpAddr;

/// Daemon-wide information, fetched once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaemonInfo {
    pub name: String,
    pub container_count: i64,
    pub containers_running: i64,
    pub containers_paused: i64,
    pub containers_stopped: i64,
    pub server_version: Option<String>,
    pub operating_system: Option<String>,
    pub kernel_version: Option<String>,
}

/// One entry of the "list all containers" response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    /// Name aliases, each prefixed with `/`
    pub names: Vec<String>,
    pub image: String,
    /// Free-text status such as `Up 3 hours` or `Exited (0) 2 days ago`
    pub status: String,
    pub ports: Vec<PortMapping>,
}

/// A published or exposed container port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    pub private_port: Option<u16>,
    pub public_port: Option<u16>,
    pub ip: Option<IpAddr>,
    pub protocol: Protocol,
}

/// Transport protocol of a port mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
    Other(String),
}

impl Protocol {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "" | "tcp" => Protocol::Tcp,
            "udp" => Protocol::Udp,
            "sctp" => Protocol::Sctp,
            other => Protocol::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
            Protocol::Sctp => write!(f, "sctp"),
            Protocol::Other(name) => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parse() {
        assert_eq!(Protocol::parse("tcp"), Protocol::Tcp);
        assert_eq!(Protocol::parse("TCP"), Protocol::Tcp);
        assert_eq!(Protocol::parse(""), Protocol::Tcp);
        assert_eq!(Protocol::parse("udp"), Protocol::Udp);
        assert_eq!(Protocol::parse("sctp"), Protocol::Sctp);
        assert_eq!(Protocol::parse("quic"), Protocol::Other("quic".to_string()));
        assert_eq!(Protocol::Other("quic".to_string()).to_string(), "quic");
    }
}
