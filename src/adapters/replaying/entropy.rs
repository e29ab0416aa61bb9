//! Replaying adapter for the `Entropy` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::Entropy;

/// Replays recorded random blocks from a cassette.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying entropy source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Entropy for ReplayingEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        let output = next_output(&self.replayer, "entropy", "fill_bytes");
        let encoded = output.as_str().expect("entropy::fill_bytes: expected hex string output");
        let bytes = hex::decode(encoded).expect("entropy::fill_bytes: invalid hex in cassette");
        assert_eq!(
            bytes.len(),
            dest.len(),
            "entropy::fill_bytes: recorded {} bytes but {} were requested",
            bytes.len(),
            dest.len()
        );
        dest.copy_from_slice(&bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[test]
    fn serves_recorded_block() {
        let entropy =
            ReplayingEntropy::new(replayer(&[("entropy", "fill_bytes", json!("00ff10"))]));
        let mut block = [0u8; 3];
        entropy.fill_bytes(&mut block);
        assert_eq!(block, [0x00, 0xff, 0x10]);
    }

    #[test]
    #[should_panic(expected = "were requested")]
    fn length_mismatch_panics() {
        let entropy = ReplayingEntropy::new(replayer(&[("entropy", "fill_bytes", json!("00ff"))]));
        let mut block = [0u8; 12];
        entropy.fill_bytes(&mut block);
    }
}
