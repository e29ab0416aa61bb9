//! Identifier engine: generation, verification and formatting.
//!
//! An identifier is `payload + signature`, optionally preceded by
//! `prefix-` and grouped by a [`Style`]. The payload carries random bytes,
//! a machine fingerprint and a timestamp; the signature is a truncated
//! HMAC over the payload, so any holder of the secret can check an
//! identifier without a lookup store.

pub mod config;
pub mod fingerprint;
pub mod layout;
pub mod payload;
pub mod radix;
pub mod schedule;
pub mod signature;
pub mod stress;

pub use config::{ConfigError, GeneratorConfig};
pub use fingerprint::machine_signature;
pub use layout::{format, LayoutError, Prefix, Style};
pub use schedule::scheduled_length;
pub use signature::{sign, SIGNATURE_LEN};

use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, Local, Utc};

use crate::context::ServiceContext;
use payload::{compose_payload, RANDOM_BLOCK_LEN};
use radix::strip_non_alphanumeric;

/// Generates and verifies signed identifiers for one configuration.
pub struct Generator {
    config: GeneratorConfig,
    growth_interval: NonZeroU32,
    ctx: ServiceContext,
}

impl Generator {
    /// Creates a generator drawing time, host details and randomness from `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot drive a schedule.
    pub fn new(config: GeneratorConfig, ctx: ServiceContext) -> Result<Self, ConfigError> {
        config.validate()?;
        let growth_interval = config.growth_interval()?;
        Ok(Self {
            config,
            growth_interval,
            ctx,
        })
    }

    /// Creates a generator backed by the real system.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot drive a schedule.
    pub fn live(config: GeneratorConfig) -> Result<Self, ConfigError> {
        Self::new(config, ServiceContext::live())
    }

    /// The configuration this generator was built with.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Payload length scheduled for the current local calendar year.
    #[must_use]
    pub fn scheduled_length(&self) -> usize {
        self.length_at(self.ctx.clock.now())
    }

    fn length_at(&self, now: DateTime<Utc>) -> usize {
        scheduled_length(
            now.with_timezone(&Local).year(),
            self.config.epoch_year(),
            self.config.base_length(),
            self.growth_interval,
        )
    }

    /// Generates a new identifier.
    ///
    /// The clock is read once, so the length schedule and the embedded
    /// timestamp always agree. The schedule follows the local calendar year;
    /// the timestamp is Unix milliseconds.
    #[must_use]
    pub fn generate(&self, prefix: Option<&Prefix>, style: Style) -> String {
        let now = self.ctx.clock.now();

        let mut block = [0u8; RANDOM_BLOCK_LEN];
        self.ctx.entropy.fill_bytes(&mut block);
        let fingerprint = machine_signature(self.ctx.host.as_ref(), self.ctx.entropy.as_ref());

        let payload = compose_payload(
            &block,
            &fingerprint,
            now.timestamp_millis(),
            self.length_at(now),
        );
        let signature = sign(&payload, self.config.secret());

        let id = match prefix {
            Some(prefix) => format!("{prefix}-{payload}{signature}"),
            None => format!("{payload}{signature}"),
        };
        format(&id, style)
    }

    /// Checks that `candidate` carries a valid signature for this secret.
    ///
    /// Accepts any style and an optional prefix. Malformed input (empty,
    /// too short, foreign characters) is simply `false`.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let secret = self.config.secret();
        // A dash may separate a prefix or just a group; try both readings.
        signature::verify_body(&strip_non_alphanumeric(candidate), secret)
            || layout::split_prefixed(candidate)
                .is_some_and(|(_, body)| signature::verify_body(&body, secret))
    }

    /// Like [`verify`](Self::verify) for raw bytes; non-UTF-8 input is `false`.
    #[must_use]
    pub fn verify_bytes(&self, candidate: &[u8]) -> bool {
        std::str::from_utf8(candidate).is_ok_and(|text| self.verify(text))
    }

    /// Re-renders an existing identifier in another style.
    #[must_use]
    pub fn format(&self, id: &str, style: Style) -> String {
        format(id, style)
    }
}
