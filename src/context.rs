//! Service context bundling the ambient capabilities a generator uses.

use std::path::Path;

use crate::adapters::live::{LiveClock, LiveEntropy, LiveHostInfo};
use crate::adapters::recording::{RecordingClock, RecordingEntropy, RecordingHostInfo};
use crate::adapters::replaying::{ReplayingClock, ReplayingEntropy, ReplayingHostInfo};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{Clock, Entropy, HostInfo};

/// Bundles one adapter per port.
///
/// Constructors wire up different adapter families (live, recording,
/// replaying); tests may also fill the fields directly with fakes.
pub struct ServiceContext {
    /// Wall clock for the length schedule and timestamp segment.
    pub clock: Box<dyn Clock>,
    /// Host introspection for the fingerprint.
    pub host: Box<dyn HostInfo>,
    /// Random bytes for the payload and fingerprint fallback.
    pub entropy: Box<dyn Entropy>,
}

impl ServiceContext {
    /// Creates a context backed by the real system.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            host: Box::new(LiveHostInfo),
            entropy: Box::new(LiveEntropy),
        }
    }

    /// Creates a live context whose calls are recorded into per-port
    /// cassettes under `dir`.
    ///
    /// The returned session must be finished after the context (and any
    /// generator owning it) has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be prepared.
    pub fn recording_at(dir: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(dir)?;
        let ctx = Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), session.clock.clone())),
            host: Box::new(RecordingHostInfo::new(Box::new(LiveHostInfo), session.host.clone())),
            entropy: Box::new(RecordingEntropy::new(
                Box::new(LiveEntropy),
                session.entropy.clone(),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a context where every port replays from one in-memory cassette.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        // Each port gets its own replayer so per-port cursors stay independent.
        Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(cassette))),
            host: Box::new(ReplayingHostInfo::new(CassetteReplayer::new(cassette))),
            entropy: Box::new(ReplayingEntropy::new(CassetteReplayer::new(cassette))),
        }
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        Ok(Self::from_cassette(&Cassette::load(path)?))
    }

    /// Creates a context from per-port cassette files.
    ///
    /// Ports without a configured cassette are served live, so a caller can
    /// pin the clock and host while still drawing fresh randomness.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(LiveClock),
            },
            host: match replayers.host {
                Some(r) => Box::new(ReplayingHostInfo::new(r)),
                None => Box::new(LiveHostInfo),
            },
            entropy: match replayers.entropy {
                Some(r) => Box::new(ReplayingEntropy::new(r)),
                None => Box::new(LiveEntropy),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    fn recorder_with_clock(path: &Path, at: &str) -> CassetteRecorder {
        let mut recorder = CassetteRecorder::new(path, "test");
        recorder.record("clock", "now", json!(null), json!(at));
        recorder
    }

    #[test]
    fn replaying_context_from_monolithic_cassette() {
        let dir = std::env::temp_dir().join("forgeid_ctx_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");

        let mut recorder = recorder_with_clock(&path, "2024-06-15T10:30:00Z");
        recorder.record("host", "hostname", json!(null), json!({"ok": "build-01"}));
        recorder.record("entropy", "fill_bytes", json!({"len": 2}), json!("abcd"));
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
        assert_eq!(ctx.host.hostname().unwrap(), "build-01");
        let mut block = [0u8; 2];
        ctx.entropy.fill_bytes(&mut block);
        assert_eq!(block, [0xab, 0xcd]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unconfigured_ports_fall_back_to_live() {
        let dir = std::env::temp_dir().join("forgeid_ctx_test_ports");
        std::fs::create_dir_all(&dir).unwrap();
        let clock_path = dir.join("clock.cassette.yaml");
        recorder_with_clock(&clock_path, "2024-01-01T00:00:00Z").finish().unwrap();

        let config = CassetteConfig {
            clock: Some(clock_path),
            ..CassetteConfig::default()
        };
        let ctx = ServiceContext::replaying_from(&config).unwrap();
        assert_eq!(ctx.clock.now().to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let (mut a, mut b) = ([0u8; 16], [0u8; 16]);
        ctx.entropy.fill_bytes(&mut a);
        ctx.entropy.fill_bytes(&mut b);
        assert_ne!(a, b);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn recording_context_writes_port_cassettes() {
        let dir = std::env::temp_dir().join("forgeid_ctx_test_recording");
        let _ = std::fs::remove_dir_all(&dir);

        let (ctx, session) = ServiceContext::recording_at(&dir).unwrap();
        let _ = ctx.clock.now();
        drop(ctx);
        session.finish().unwrap();

        let clock = Cassette::load(&dir.join("clock.cassette.yaml")).unwrap();
        assert_eq!(clock.interactions.len(), 1);
        let entropy = Cassette::load(&dir.join("entropy.cassette.yaml")).unwrap();
        assert!(entropy.interactions.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
