use crate::error::IpmiError;
use std::net::IpAddr;

/// Last address octet of a VApp node mapped to the name the cloud API knows it by.
pub const VAPP_NODES: [(u8, &str); 15] = [
    (42, "ms-1"),
    (43, "sc-1"),
    (44, "sc-2"),
    (235, "sc-3"),
    (241, "sc-4"),
    (45, "pl-3"),
    (46, "pl-4"),
    (193, "topology"),
    (194, "pmstream"),
    (195, "csl-eps1"),
    (196, "csl-eps2"),
    (202, "svc1"),
    (203, "svc2"),
    (204, "db1"),
    (205, "db2"),
];

#[must_use]
pub fn vm_name_for(segment: u8) -> Option<&'static str> {
    VAPP_NODES
        .iter()
        .find(|(key, _)| *key == segment)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VAppNode {
    pub address: IpAddr,
    pub vm_name: String,
}

impl VAppNode {
    /// # Errors
    ///
    /// Will return `Err` if `host` is not an IP address or its last octet has no VApp node
    pub fn resolve(host: &str) -> Result<Self, IpmiError> {
        if host.is_empty() {
            return Err(IpmiError::InvalidAddress(
                "no host address given".to_string(),
            ));
        }
        let address = host
            .parse::<IpAddr>()
            .map_err(|e| IpmiError::InvalidAddress(format!("{}: {}", host, e)))?;
        match u8::try_from(last_segment(&address))
            .ok()
            .and_then(vm_name_for)
        {
            Some(name) => Ok(VAppNode {
                address,
                vm_name: name.to_string(),
            }),
            None => Err(IpmiError::UnmappedAddress(address.to_string())),
        }
    }
}

/// Last octet of an IPv4 address, last 16-bit group of an IPv6 address.
fn last_segment(address: &IpAddr) -> u16 {
    match address {
        IpAddr::V4(v4) => u16::from(v4.octets()[3]),
        IpAddr::V6(v6) => v6.segments()[7],
    }
}
