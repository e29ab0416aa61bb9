//! Live adapter for the `Entropy` port.

use rand::RngCore;

use crate::ports::Entropy;

/// Live entropy source drawing from the thread-local CSPRNG.
pub struct LiveEntropy;

impl Entropy for LiveEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }
}
