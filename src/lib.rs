//! Short, self-verifying identifiers.
//!
//! Each identifier carries a random block, a machine fingerprint and a
//! timestamp, truncated to a length that grows with the calendar, and ends
//! in a truncated HMAC so anyone holding the secret can check it offline.
//!
//! ```no_run
//! use forgeid::forge::{Generator, GeneratorConfig, Prefix, Style};
//!
//! let generator = Generator::live(GeneratorConfig::new("shared-secret")).unwrap();
//! let prefix = Prefix::new("TRX").unwrap();
//! let id = generator.generate(Some(&prefix), Style::Dash);
//! assert!(generator.verify(&id));
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod forge;
pub mod ports;

pub use context::ServiceContext;
pub use forge::{format, Generator, GeneratorConfig, Prefix, Style};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests print to stdout and succeed.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_format() {
        let result = run(["forgeid", "format", "TRX-abcdefghijkl", "--style", "dash"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["forgeid", "unknown"]);
        assert!(result.is_err());
    }
}
