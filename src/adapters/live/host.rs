//! Live adapter for the `HostInfo` port.

use crate::ports::{HostInfo, NetworkAdapter};

/// Reads the host name and interface list from the operating system.
pub struct LiveHostInfo;

/// Formats a hardware address the way `ip link` prints it.
pub(crate) fn format_mac(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":")
}

/// What one `getifaddrs` entry contributes to an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AddressKind {
    /// Link-layer entry carrying the hardware address, if any.
    Link(Option<[u8; 6]>),
    /// An IPv4 or IPv6 address.
    Ip,
    /// Any other family.
    Other,
}

/// One `getifaddrs` entry, reduced to what adapter selection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IfAddrEntry {
    pub name: String,
    pub loopback: bool,
    pub kind: AddressKind,
}

/// Folds per-address entries into one adapter per interface.
///
/// Only interfaces holding at least one IP address are reported, in the
/// order their first address appears. The hardware address comes from the
/// interface's link-layer entry.
pub(crate) fn addressed_adapters(entries: &[IfAddrEntry]) -> Vec<NetworkAdapter> {
    let mut adapters: Vec<NetworkAdapter> = Vec::new();
    for entry in entries.iter().filter(|e| e.kind == AddressKind::Ip) {
        if let Some(adapter) = adapters.iter_mut().find(|a| a.name == entry.name) {
            adapter.loopback |= entry.loopback;
            continue;
        }
        let mac = entries.iter().find_map(|e| match &e.kind {
            AddressKind::Link(mac) if e.name == entry.name => *mac,
            _ => None,
        });
        adapters.push(NetworkAdapter {
            name: entry.name.clone(),
            mac: mac.map(|bytes| format_mac(&bytes)),
            loopback: entry.loopback,
        });
    }
    adapters
}

#[cfg(unix)]
impl HostInfo for LiveHostInfo {
    fn hostname(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let raw = nix::unistd::gethostname()?;
        raw.into_string().map_err(|raw| format!("host name is not valid UTF-8: {raw:?}").into())
    }

    fn adapters(&self) -> Result<Vec<NetworkAdapter>, Box<dyn std::error::Error + Send + Sync>> {
        use nix::net::if_::InterfaceFlags;

        let entries: Vec<IfAddrEntry> = nix::ifaddrs::getifaddrs()?
            .map(|ifaddr| {
                let kind = match ifaddr.address.as_ref() {
                    Some(addr)
                        if addr.as_sockaddr_in().is_some() || addr.as_sockaddr_in6().is_some() =>
                    {
                        AddressKind::Ip
                    }
                    Some(addr) => match addr.as_link_addr() {
                        Some(link) => AddressKind::Link(link.addr()),
                        None => AddressKind::Other,
                    },
                    None => AddressKind::Other,
                };
                IfAddrEntry {
                    loopback: ifaddr.flags.contains(InterfaceFlags::IFF_LOOPBACK),
                    name: ifaddr.interface_name,
                    kind,
                }
            })
            .collect();
        Ok(addressed_adapters(&entries))
    }
}

#[cfg(not(unix))]
impl HostInfo for LiveHostInfo {
    fn hostname(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Err("host introspection is not supported on this platform".into())
    }

    fn adapters(&self) -> Result<Vec<NetworkAdapter>, Box<dyn std::error::Error + Send + Sync>> {
        Err("host introspection is not supported on this platform".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, loopback: bool, kind: AddressKind) -> IfAddrEntry {
        IfAddrEntry {
            name: name.into(),
            loopback,
            kind,
        }
    }

    #[test]
    fn formats_mac_lowercase_with_colons() {
        assert_eq!(format_mac(&[0x00, 0x1A, 0x2b, 0xff, 0x01, 0x10]), "00:1a:2b:ff:01:10");
    }

    #[test]
    fn skips_interfaces_without_ip_addresses() {
        // Link entries come first, as Linux lists them.
        let entries = [
            entry("lo", true, AddressKind::Link(Some([0; 6]))),
            entry("ifb0", false, AddressKind::Link(Some([0xa2, 0xaa, 0xc2, 0x8b, 0xcd, 0xec]))),
            entry("ifb1", false, AddressKind::Link(None)),
            entry("eth0", false, AddressKind::Link(Some([0x02, 0xfc, 0, 0, 0, 0x01]))),
            entry("lo", true, AddressKind::Ip),
            entry("eth0", false, AddressKind::Ip),
            entry("lo", true, AddressKind::Ip),
            entry("eth0", false, AddressKind::Ip),
        ];

        let adapters = addressed_adapters(&entries);
        let names: Vec<&str> = adapters.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["lo", "eth0"]);
        assert!(adapters[0].loopback);
        assert_eq!(adapters[1].mac.as_deref(), Some("02:fc:00:00:00:01"));
        assert!(!adapters[1].loopback);
    }

    #[test]
    fn orders_by_first_ip_address() {
        let entries = [
            entry("wlan0", false, AddressKind::Link(Some([0x10, 0, 0, 0, 0, 0x01]))),
            entry("eth0", false, AddressKind::Link(Some([0x20, 0, 0, 0, 0, 0x02]))),
            entry("eth0", false, AddressKind::Ip),
            entry("wlan0", false, AddressKind::Ip),
        ];

        let adapters = addressed_adapters(&entries);
        assert_eq!(adapters[0].name, "eth0");
        assert_eq!(adapters[1].name, "wlan0");
        assert_eq!(adapters[1].mac.as_deref(), Some("10:00:00:00:00:01"));
    }

    #[test]
    fn ip_only_interfaces_have_no_mac() {
        let entries = [
            entry("tun0", false, AddressKind::Ip),
            entry("tun0", false, AddressKind::Other),
        ];
        let adapters = addressed_adapters(&entries);
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].mac, None);
    }

    #[cfg(unix)]
    #[test]
    fn adapters_never_report_empty_names() {
        // Sandboxed CI may forbid enumeration entirely; only inspect success.
        if let Ok(adapters) = LiveHostInfo.adapters() {
            assert!(adapters.iter().all(|a| !a.name.is_empty()));
        }
    }
}
