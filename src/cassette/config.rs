//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// File name used for a port's cassette inside a recording directory.
#[must_use]
pub fn port_file_name(port: &str) -> String {
    format!("{port}.cassette.yaml")
}

/// Per-port cassette file paths. Ports left as `None` are served live
/// during replay, so a caller can pin only the capabilities it cares about.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the clock port cassette file.
    pub clock: Option<PathBuf>,
    /// Path to the host port cassette file.
    pub host: Option<PathBuf>,
    /// Path to the entropy port cassette file.
    pub entropy: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the host port.
    pub host: Option<CassetteReplayer>,
    /// Replayer for the entropy port.
    pub entropy: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Builds a config from a recording directory, picking up whichever
    /// per-port cassette files exist in it.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not a directory.
    pub fn from_dir(dir: &Path) -> Result<Self, String> {
        if !dir.is_dir() {
            return Err(format!("Cassette directory not found: {}", dir.display()));
        }
        let existing = |port: &str| {
            let path = dir.join(port_file_name(port));
            path.is_file().then_some(path)
        };
        Ok(Self {
            clock: existing("clock"),
            host: existing("host"),
            entropy: existing("entropy"),
        })
    }

    /// Load a single cassette file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Ok(CassetteReplayer::new(&Cassette::load(path)?))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        Ok(PortReplayers {
            clock: self.clock.as_deref().map(Self::load_port_cassette).transpose()?,
            host: self.host.as_deref().map(Self::load_port_cassette).transpose()?,
            entropy: self.entropy.as_deref().map(Self::load_port_cassette).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn from_dir_picks_up_existing_port_files() {
        let dir = std::env::temp_dir().join("forgeid_cassette_config_dir");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let mut clock = CassetteRecorder::new(dir.join(port_file_name("clock")), "clock");
        clock.record("clock", "now", json!(null), json!("2024-01-01T00:00:00Z"));
        clock.finish().unwrap();

        let config = CassetteConfig::from_dir(&dir).unwrap();
        assert!(config.clock.is_some());
        assert!(config.host.is_none());
        assert!(config.entropy.is_none());

        let mut replayers = config.load_all().unwrap();
        let clock = replayers.clock.as_mut().unwrap();
        assert_eq!(clock.next_interaction("clock", "now").output, json!("2024-01-01T00:00:00Z"));
        assert!(replayers.entropy.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_dir_rejects_missing_directory() {
        let missing = Path::new("/nonexistent/forgeid-cassettes");
        let err = CassetteConfig::from_dir(missing).unwrap_err();
        assert!(err.contains("not found"));
    }

    #[test]
    fn empty_config_loads_nothing() {
        let replayers = CassetteConfig::default().load_all().unwrap();
        assert!(replayers.clock.is_none());
        assert!(replayers.host.is_none());
        assert!(replayers.entropy.is_none());
    }
}
