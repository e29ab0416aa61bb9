//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::config::port_file_name;
use super::recorder::CassetteRecorder;

/// Manages one `CassetteRecorder` per port for a recording session.
///
/// Each port writes its own cassette file into `output_dir`, which can later
/// be handed to `CassetteConfig::from_dir` for replay.
pub struct RecordingSession {
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for host interactions.
    pub host: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for entropy interactions.
    pub entropy: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a recording session writing into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already holds cassettes or cannot
    /// be created.
    pub fn new(output_dir: &Path) -> Result<Self, String> {
        if output_dir.join(port_file_name("clock")).exists() {
            return Err(format!("Cassettes already exist in {}", output_dir.display()));
        }
        std::fs::create_dir_all(output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let make_recorder = |port: &str| {
            let path = output_dir.join(port_file_name(port));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            clock: make_recorder("clock"),
            host: make_recorder("host"),
            entropy: make_recorder("entropy"),
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Every recording adapter must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, "clock")?;
        finish_one(self.host, "host")?;
        finish_one(self.entropy, "entropy")?;
        Ok(self.output_dir)
    }
}
