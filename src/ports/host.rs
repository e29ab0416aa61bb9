//! Host introspection port used for machine fingerprinting.

use serde::{Deserialize, Serialize};

/// A network interface as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAdapter {
    /// Interface name (e.g. `eth0`).
    pub name: String,
    /// Hardware address as lowercase colon-separated hex, when the
    /// interface has one.
    pub mac: Option<String>,
    /// Whether the interface is a loopback device.
    pub loopback: bool,
}

/// Reads identifying information about the current machine.
///
/// Both methods may fail on restricted platforms; callers are expected to
/// degrade rather than propagate.
pub trait HostInfo: Send + Sync {
    /// Returns the machine's host name.
    ///
    /// # Errors
    ///
    /// Returns an error if the host name cannot be read.
    fn hostname(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the machine's network interfaces in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the interfaces cannot be enumerated.
    fn adapters(&self) -> Result<Vec<NetworkAdapter>, Box<dyn std::error::Error + Send + Sync>>;
}
