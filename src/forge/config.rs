//! Generator configuration and its validation.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

/// Secret used when the caller supplies none.
pub const DEFAULT_SECRET: &str = "forgeid-secret";
/// Calendar year the length schedule counts from.
pub const DEFAULT_EPOCH_YEAR: i32 = 1970;
/// Payload length at the epoch year.
pub const DEFAULT_BASE_LENGTH: usize = 10;
/// Years between one-character payload growth steps.
pub const DEFAULT_GROWTH_INTERVAL_YEARS: u32 = 10;

/// Configuration errors detected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The payload would start out empty.
    #[error("base length must be at least 1")]
    ZeroBaseLength,

    /// The schedule would divide by zero.
    #[error("growth interval must be at least 1 year")]
    ZeroGrowthInterval,
}

/// Immutable settings for one [`Generator`](super::Generator).
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    secret: Vec<u8>,
    epoch_year: i32,
    base_length: usize,
    growth_interval_years: u32,
}

impl GeneratorConfig {
    /// Default schedule with the given signing secret.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    /// Sets the year the length schedule counts from.
    #[must_use]
    pub fn with_epoch_year(mut self, year: i32) -> Self {
        self.epoch_year = year;
        self
    }

    /// Sets the payload length at the epoch year.
    #[must_use]
    pub fn with_base_length(mut self, length: usize) -> Self {
        self.base_length = length;
        self
    }

    /// Sets how many years pass between growth steps.
    #[must_use]
    pub fn with_growth_interval_years(mut self, years: u32) -> Self {
        self.growth_interval_years = years;
        self
    }

    /// Checks the settings a generator cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero base length or growth interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_length == 0 {
            return Err(ConfigError::ZeroBaseLength);
        }
        self.growth_interval()?;
        Ok(())
    }

    /// Years per growth step, as the schedule consumes them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGrowthInterval`] for a zero interval.
    pub fn growth_interval(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.growth_interval_years).ok_or(ConfigError::ZeroGrowthInterval)
    }

    /// Signing key bytes.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Year the schedule counts from.
    #[must_use]
    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    /// Payload length at the epoch year.
    #[must_use]
    pub fn base_length(&self) -> usize {
        self.base_length
    }

    /// Years per growth step.
    #[must_use]
    pub fn growth_interval_years(&self) -> u32 {
        self.growth_interval_years
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.as_bytes().to_vec(),
            epoch_year: DEFAULT_EPOCH_YEAR,
            base_length: DEFAULT_BASE_LENGTH,
            growth_interval_years: DEFAULT_GROWTH_INTERVAL_YEARS,
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("secret", &"<redacted>")
            .field("epoch_year", &self.epoch_year)
            .field("base_length", &self.base_length)
            .field("growth_interval_years", &self.growth_interval_years)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.secret(), b"forgeid-secret");
        assert_eq!(config.epoch_year(), 1970);
        assert_eq!(config.base_length(), 10);
        assert_eq!(config.growth_interval_years(), 10);
        assert_eq!(config.growth_interval().map(NonZeroU32::get), Ok(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_interval_and_length() {
        let config = GeneratorConfig::default().with_growth_interval_years(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroGrowthInterval));
        assert_eq!(config.growth_interval(), Err(ConfigError::ZeroGrowthInterval));

        let config = GeneratorConfig::default().with_base_length(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaseLength));
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", GeneratorConfig::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
