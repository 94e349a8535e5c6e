//! Single container check and port health probe

use super::liveness::{self, Liveness};
use super::{resolve, Verdict};
use crate::config::ContainerCheck;
use crate::daemon::{ContainerRecord, PortMapping, Protocol};
use crate::probe::PortProbe;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tracing::{debug, warn};

pub async fn evaluate(
    records: &[ContainerRecord],
    check: &ContainerCheck,
    prober: &dyn PortProbe,
) -> Verdict {
    let name = check.name.as_str();

    let Some(container) = resolve::by_name(records, name) else {
        return Verdict::critical(format!("Failed to find container with name {name}"));
    };

    match liveness::classify(&container.status) {
        Liveness::Ghost => return Verdict::critical(format!("Container {name} is a ghost")),
        Liveness::NotRunning => {
            return Verdict::critical(format!("Container {name} is not running"))
        }
        Liveness::Running => {}
    }

    if check.health {
        return probe_ports(name, container, &check.blacklist, prober).await;
    }

    Verdict::ok(format!(
        "Container {} is running with image {} and status {}",
        name, container.image, container.status
    ))
}

/// Probe every checkable port in order; the first failure ends the check
pub async fn probe_ports(
    name: &str,
    container: &ContainerRecord,
    blacklist: &[u16],
    prober: &dyn PortProbe,
) -> Verdict {
    let mut ok_ports = Vec::new();

    for mapping in &container.ports {
        let Some(port) = probe_port(mapping) else {
            debug!("Skipping mapping without a usable port: {:?}", mapping);
            continue;
        };
        let addr = probe_address(mapping.ip);

        if blacklist.contains(&port) {
            debug!("Skipping blacklisted port {}", port);
            continue;
        }

        if mapping.protocol != Protocol::Tcp {
            return Verdict::critical(format!("Does not support protocol {}", mapping.protocol));
        }

        if let Err(e) = prober.probe(addr, port).await {
            warn!("Probe of {}:{} for container {} failed: {}", addr, port, name, e);
            return Verdict::critical(format!(
                "Container {} health check on port {} {} against {} failed",
                name, mapping.protocol, port, addr
            ));
        }

        ok_ports.push(port);
    }

    if ok_ports.is_empty() {
        return Verdict::critical(format!(
            "Container {name} health check passed but no ok ports were reported"
        ));
    }

    let listed = ok_ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Verdict::ok(format!(
        "Container {name} passed all health checks on ports {listed}"
    ))
}

/// Published port if there is one, otherwise the container port
pub fn probe_port(mapping: &PortMapping) -> Option<u16> {
    mapping.public_port.or(mapping.private_port)
}

/// Wildcard binds are probed on loopback; unbound mappings default to IPv4 loopback
pub fn probe_address(ip: Option<IpAddr>) -> IpAddr {
    match ip {
        Some(IpAddr::V4(v4)) if v4.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        Some(IpAddr::V6(v6)) if v6.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        Some(addr) => addr,
        None => IpAddr::V4(Ipv4Addr::LOCALHOST),
    }
}
