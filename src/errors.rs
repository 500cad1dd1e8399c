use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while binding a schema to a configuration source.
///
/// Per-field problems (a missing value, an unparseable integer, a field type
/// the binder does not understand) never show up here. They are recovered
/// locally and only reported through [`Diagnostics`](crate::Diagnostics).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The destination handed to the binder is not a struct-like record.
    ///
    /// Binding aborts before any field is touched. `shape` names what was
    /// received instead, e.g. `"integer"` or `"map"`.
    #[error("Invalid config variable: expected a record, got {shape}")]
    InvalidConfigVariable { shape: &'static str },

    /// Represents errors that occur while loading or parsing a .env file.
    ///
    /// This variant is automatically converted from `dotenvy::Error` through the
    /// `From` trait implementation. A missing .env file is not reported.
    #[error("DotEnv error: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

impl ConfigError {
    pub fn is_invalid_config_variable(&self) -> bool {
        matches!(self, ConfigError::InvalidConfigVariable { .. })
    }
}

/// A raw value could not be read as a base-10 integer.
///
/// Returned by [`ConfigSource::get_int`](crate::ConfigSource::get_int) both when
/// the key is absent (the raw value is then empty) and when it holds something
/// that is not an integer literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("value {value:?} for key {key} is not a valid integer: {source}")]
pub struct ConversionError {
    pub key: String,
    pub value: String,
    #[source]
    pub source: ParseIntError,
}

impl ConversionError {
    pub fn new(key: impl Into<String>, value: impl Into<String>, source: ParseIntError) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            source,
        }
    }

    /// True when the source had no value at all for the key.
    pub fn is_missing(&self) -> bool {
        self.value.is_empty()
    }
}
