//! Replaying adapter for the `HostInfo` port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{HostInfo, NetworkAdapter};

/// Replays recorded host introspection results from a cassette.
pub struct ReplayingHostInfo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHostInfo {
    /// Creates a new replaying host from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl HostInfo for ReplayingHostInfo {
    fn hostname(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "host", "hostname");
        extract_result(&output, "host::hostname")
    }

    fn adapters(&self) -> Result<Vec<NetworkAdapter>, Box<dyn std::error::Error + Send + Sync>> {
        let output = next_output(&self.replayer, "host", "adapters");
        extract_result(&output, "host::adapters")
    }
}
