//! Live adapters backed by the real system.

pub mod clock;
pub mod entropy;
pub mod host;

pub use clock::LiveClock;
pub use entropy::LiveEntropy;
pub use host::LiveHostInfo;
