//! Presentation layer: optional prefix and fixed-width grouping.
//!
//! Formatting only ever inserts separators, and prefixes are restricted to
//! ASCII alphanumerics, so removing the prefix segment and every
//! non-alphanumeric character always recovers `payload + signature`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::radix::strip_non_alphanumeric;

/// Characters per group in dash and space styles.
pub const GROUP_WIDTH: usize = 6;

/// Errors raised while parsing presentation options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A prefix must have at least one character.
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    /// A prefix containing separators would make the body ambiguous.
    #[error("prefix '{0}' must contain only ASCII letters and digits")]
    InvalidPrefix(String),

    /// The style name is not one of `none`, `dash` or `space`.
    #[error("unknown style '{0}': expected none, dash or space")]
    UnknownStyle(String),
}

/// How the `payload + signature` body is grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Emit the body as one run.
    #[default]
    None,
    /// Groups of six joined by `-`.
    Dash,
    /// Groups of six joined by a space.
    Space,
}

impl Style {
    fn separator(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Dash => Some("-"),
            Self::Space => Some(" "),
        }
    }
}

impl FromStr for Style {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "dash" => Ok(Self::Dash),
            "space" => Ok(Self::Space),
            _ => Err(LayoutError::UnknownStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Dash => "dash",
            Self::Space => "space",
        })
    }
}

/// A validated identifier prefix (non-empty, ASCII alphanumeric).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validates and wraps a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `value` is empty or contains anything other
    /// than ASCII letters and digits.
    pub fn new(value: impl Into<String>) -> Result<Self, LayoutError> {
        let value = value.into();
        if value.is_empty() {
            return Err(LayoutError::EmptyPrefix);
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LayoutError::InvalidPrefix(value));
        }
        Ok(Self(value))
    }

    /// The prefix text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Prefix {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Re-renders `id` in the given style.
///
/// `Style::None` returns the input untouched. Otherwise everything before
/// the first `-` is kept as the prefix and the rest is stripped to
/// alphanumerics and regrouped.
#[must_use]
pub fn format(id: &str, style: Style) -> String {
    let Some(separator) = style.separator() else {
        return id.to_string();
    };
    match id.split_once('-') {
        Some((prefix, body)) => format!("{prefix}-{}", group(body, separator)),
        None => group(id, separator),
    }
}

/// Splits a prefixed identifier into its prefix and bare body.
///
/// The inverse of [`format`] for identifiers that carry a prefix.
#[must_use]
pub fn split_prefixed(id: &str) -> Option<(&str, String)> {
    id.split_once('-').map(|(prefix, body)| (prefix, strip_non_alphanumeric(body)))
}

fn group(body: &str, separator: &str) -> String {
    let chars: Vec<char> = strip_non_alphanumeric(body).chars().collect();
    chars
        .chunks(GROUP_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}
