//! Cassettes: recorded port interactions used to replay generation
//! deterministically.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
