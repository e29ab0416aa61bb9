//! Recording adapter for the `HostInfo` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{HostInfo, NetworkAdapter};

/// Records host introspection results, failures included.
pub struct RecordingHostInfo {
    inner: Box<dyn HostInfo>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHostInfo {
    /// Creates a new recording host wrapping the given implementation.
    pub fn new(inner: Box<dyn HostInfo>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HostInfo for RecordingHostInfo {
    fn hostname(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.hostname();
        record_result(&self.recorder, "host", "hostname", &(), &result);
        result
    }

    fn adapters(&self) -> Result<Vec<NetworkAdapter>, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.adapters();
        record_result(&self.recorder, "host", "adapters", &(), &result);
        result
    }
}
