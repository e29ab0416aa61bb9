//! Stress diagnostic: bulk generation with duplicate and validity tallies.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::{Generator, Style};

/// Tallies observed after a number of generated identifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressCheckpoint {
    /// Identifiers generated so far.
    pub generated: u64,
    /// Identifiers seen more than once so far.
    pub duplicates: u64,
    /// Identifiers that failed their own verification so far.
    pub invalid: u64,
    /// Seconds since the run started.
    pub elapsed_secs: f64,
}

/// Outcome of a stress run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StressReport {
    /// Identifiers generated.
    pub total: u64,
    /// Distinct identifiers.
    pub unique: u64,
    /// Repeated identifiers.
    pub duplicates: u64,
    /// Identifiers that failed verification.
    pub invalid: u64,
    /// Wall time for the whole run.
    pub elapsed_secs: f64,
    /// Generation plus verification throughput.
    pub ids_per_sec: f64,
    /// One entry per completed `progress_step`.
    pub checkpoints: Vec<StressCheckpoint>,
}

impl StressReport {
    /// `true` when every identifier was unique and verified.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates == 0 && self.invalid == 0
    }
}

/// Generates `total` unformatted identifiers, verifying each one.
///
/// `on_progress` fires every `progress_step` identifiers; a step of zero
/// disables checkpoints.
pub fn run(
    generator: &Generator,
    total: u64,
    progress_step: u64,
    mut on_progress: impl FnMut(&StressCheckpoint),
) -> StressReport {
    let started = Instant::now();
    let mut seen = HashSet::new();
    let mut duplicates = 0;
    let mut invalid = 0;
    let mut checkpoints = Vec::new();

    for index in 1..=total {
        let id = generator.generate(None, Style::None);
        if !generator.verify(&id) {
            invalid += 1;
        }
        if !seen.insert(id) {
            duplicates += 1;
        }
        if progress_step > 0 && index % progress_step == 0 {
            let checkpoint = StressCheckpoint {
                generated: index,
                duplicates,
                invalid,
                elapsed_secs: started.elapsed().as_secs_f64(),
            };
            on_progress(&checkpoint);
            checkpoints.push(checkpoint);
        }
    }

    let elapsed = started.elapsed();
    StressReport {
        total,
        unique: seen.len() as u64,
        duplicates,
        invalid,
        elapsed_secs: elapsed.as_secs_f64(),
        ids_per_sec: throughput(total, elapsed),
        checkpoints,
    }
}

#[allow(clippy::cast_precision_loss)]
fn throughput(count: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        count as f64 / secs
    } else {
        0.0
    }
}
