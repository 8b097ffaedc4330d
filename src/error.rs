//! Error types for the toolbelt engines.
//!
//! Text statistics are total over every input and have no error type.

use thiserror::Error;

/// Which textual color form a parse was attempted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb()",
            ColorFormat::Hsl => "hsl()",
        };
        f.write_str(name)
    }
}

/// Color parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input did not match the expected textual form.
    #[error("Invalid {kind} color: '{input}'")]
    InvalidFormat { kind: ColorFormat, input: String },
}

impl ColorError {
    pub(crate) fn invalid(kind: ColorFormat, input: &str) -> Self {
        Self::InvalidFormat {
            kind,
            input: input.to_string(),
        }
    }
}

/// D-Day calculator errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdayError {
    /// The date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Adding the offset left chrono's supported date range.
    #[error("Date offset of {0} days is out of range")]
    OutOfRange(u64),
}

/// Password generator errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// Every character class was disabled.
    #[error("Select at least one character class")]
    EmptyCharset,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}
