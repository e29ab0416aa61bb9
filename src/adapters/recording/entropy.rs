//! Recording adapter for the `Entropy` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::Entropy;

/// Records random blocks (hex encoded) while delegating to an inner source.
pub struct RecordingEntropy {
    inner: Box<dyn Entropy>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording entropy source wrapping the given implementation.
    pub fn new(inner: Box<dyn Entropy>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct FillInput {
    len: usize,
}

impl Entropy for RecordingEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
        let input = FillInput { len: dest.len() };
        record_interaction(&self.recorder, "entropy", "fill_bytes", &input, &hex::encode(&*dest));
    }
}
