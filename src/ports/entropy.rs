//! Entropy port for obtaining random bytes.

/// Fills buffers with cryptographically strong random bytes.
pub trait Entropy: Send + Sync {
    /// Overwrites every byte of `dest` with fresh randomness.
    fn fill_bytes(&self, dest: &mut [u8]);
}
