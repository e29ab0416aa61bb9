//! `forgeid verify` command.

use tracing::debug;

use crate::forge::Generator;

/// Check each identifier, pairing it with its verdict.
#[must_use]
pub fn check<'a>(generator: &Generator, ids: &'a [String]) -> Vec<(&'a str, bool)> {
    ids.iter().map(|id| (id.as_str(), generator.verify(id))).collect()
}

/// Execute the `verify` command.
///
/// Prints `valid` or `invalid` next to each identifier.
///
/// # Errors
///
/// Returns an error string naming how many identifiers failed.
pub fn run(generator: &Generator, ids: &[String]) -> Result<(), String> {
    let verdicts = check(generator, ids);
    for (id, valid) in &verdicts {
        println!("{}\t{id}", if *valid { "valid" } else { "invalid" });
    }

    let failed = verdicts.iter().filter(|(_, valid)| !valid).count();
    debug!(checked = verdicts.len(), failed, "verification finished");
    if failed > 0 {
        return Err(format!("{failed} of {} identifiers failed verification", verdicts.len()));
    }
    Ok(())
}
