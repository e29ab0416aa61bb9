//! `forgeid stress` command.

use tracing::info;

use crate::forge::stress::{self, StressReport};
use crate::forge::Generator;

/// Human-readable summary lines for a finished run.
#[must_use]
pub fn summary(report: &StressReport) -> Vec<String> {
    vec![
        format!("Done: {} keys", report.total),
        format!("Total time: {:.2}s ({:.0} ids/s)", report.elapsed_secs, report.ids_per_sec),
        format!("Unique: {}", report.unique),
        format!("Duplicates: {}", report.duplicates),
        format!("Invalid: {}", report.invalid),
    ]
}

/// Execute the `stress` command.
///
/// Progress goes to the log; the summary (or JSON report) to stdout.
///
/// # Errors
///
/// Returns an error string if the report cannot be serialized or the run
/// saw duplicates or verification failures.
pub fn run(generator: &Generator, total: u64, step: u64, json: bool) -> Result<(), String> {
    let report = stress::run(generator, total, step, |checkpoint| {
        info!(
            generated = checkpoint.generated,
            duplicates = checkpoint.duplicates,
            invalid = checkpoint.invalid,
            elapsed_secs = checkpoint.elapsed_secs,
            "stress progress"
        );
    });

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize stress report: {e}"))?;
        println!("{rendered}");
    } else {
        for line in summary(&report) {
            println!("{line}");
        }
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(format!(
            "stress run saw {} duplicates and {} invalid identifiers",
            report.duplicates, report.invalid
        ))
    }
}
