//! Port traits defining external boundaries.
//!
//! Each trait represents an ambient capability the identifier engine
//! depends on (wall clock, host introspection, random bytes).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod entropy;
pub mod host;

pub use clock::Clock;
pub use entropy::Entropy;
pub use host::{HostInfo, NetworkAdapter};
