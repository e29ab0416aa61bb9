//! Adapter implementations of the port traits.
//!
//! `live` talks to the real system, `recording` wraps another adapter and
//! captures every call to a cassette, `replaying` serves a cassette back.

pub mod live;
pub mod recording;
pub mod replaying;
