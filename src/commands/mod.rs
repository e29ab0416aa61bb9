//! Command dispatch and handlers.

pub mod format;
pub mod generate;
pub mod stress;
pub mod verify;

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::forge::Generator;

/// Dispatch a parsed command to its handler.
///
/// When `FORGEID_RECORD` names a directory, every clock, host and entropy
/// call is recorded to per-port cassettes there. When `FORGEID_REPLAY`
/// names such a directory, the recorded values are served back instead.
///
/// # Errors
///
/// Returns an error string if the generator cannot be built or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let (ctx, session) = if let Ok(dir) = env::var("FORGEID_RECORD") {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(dir))?;
        (ctx, Some(session))
    } else if let Ok(dir) = env::var("FORGEID_REPLAY") {
        let config = CassetteConfig::from_dir(&PathBuf::from(dir))?;
        (ServiceContext::replaying_from(&config)?, None)
    } else {
        (ServiceContext::live(), None)
    };

    let generator = Generator::new(cli.generator.to_config(), ctx).map_err(|e| e.to_string())?;
    let result = dispatch_with_generator(&cli.command, &generator);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // The generator owns the recording adapters; release them first.
        drop(generator);
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given generator.
fn dispatch_with_generator(command: &Command, generator: &Generator) -> Result<(), String> {
    match command {
        Command::Generate { prefix, style, count } => {
            generate::run(generator, prefix.as_ref(), *style, *count)
        }
        Command::Verify { ids } => verify::run(generator, ids),
        Command::Format { id, style } => format::run(generator, id, *style),
        Command::Stress { total, step, json } => stress::run(generator, *total, *step, *json),
    }
}

/// Finish a recording session and log the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
