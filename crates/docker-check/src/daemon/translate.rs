//! Translation from raw Docker API models into daemon snapshot types

use super::types::{ContainerRecord, DaemonInfo, PortMapping, Protocol};
use bollard::models::{ContainerSummary, Port, SystemInfo};
use std::net::IpAddr;
use tracing::{debug, warn};

pub fn daemon_info(raw: SystemInfo) -> DaemonInfo {
    DaemonInfo {
        name: raw.name.unwrap_or_else(|| "unknown".to_string()),
        container_count: raw.containers.unwrap_or(0),
        containers_running: raw.containers_running.unwrap_or(0),
        containers_paused: raw.containers_paused.unwrap_or(0),
        containers_stopped: raw.containers_stopped.unwrap_or(0),
        server_version: non_empty(raw.server_version),
        operating_system: non_empty(raw.operating_system),
        kernel_version: non_empty(raw.kernel_version),
    }
}

pub fn container_record(raw: ContainerSummary) -> ContainerRecord {
    let ports = raw
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(port_mapping)
        .collect();

    ContainerRecord {
        names: raw.names.unwrap_or_default(),
        image: raw.image.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        ports,
    }
}

pub fn port_mapping(raw: Port) -> PortMapping {
    let ip = match raw.ip.as_deref() {
        None | Some("") => None,
        Some(text) => match text.parse::<IpAddr>() {
            Ok(addr) => Some(addr),
            Err(e) => {
                warn!("Ignoring unparseable bind address {:?}: {}", text, e);
                None
            }
        },
    };

    let protocol = raw
        .typ
        .map(|typ| Protocol::parse(&typ.to_string()))
        .unwrap_or(Protocol::Tcp);

    let mapping = PortMapping {
        private_port: Some(raw.private_port).filter(|port| *port != 0),
        public_port: raw.public_port.filter(|port| *port != 0),
        ip,
        protocol,
    };
    debug!("Translated port mapping: {:?}", mapping);
    mapping
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
