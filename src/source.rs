//! Configuration sources the binder can read from.
//!
//! A source answers two questions for a key: what is the raw text, and what
//! is it as an integer. Sources are stateless from the binder's point of view,
//! every lookup is independent.

use std::collections::HashMap;
use std::env;

use tracing::debug;

use crate::errors::{ConfigError, ConversionError};

/// A key-value provider that schema fields are resolved against.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    /// Returns the raw value for `key`, or an empty string if there is none.
    fn get_string(&self, key: &str) -> String;

    /// Returns the value for `key` parsed as a base-10 integer.
    ///
    /// Fails when the value is absent or is not an integer literal.
    fn get_int(&self, key: &str) -> Result<i64, ConversionError> {
        let value = self.get_string(key);
        value
            .parse::<i64>()
            .map_err(|source| ConversionError::new(key, value, source))
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> Result<i64, ConversionError> {
        (**self).get_int(key)
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn get_string(&self, key: &str) -> String {
        (**self).get_string(key)
    }

    fn get_int(&self, key: &str) -> Result<i64, ConversionError> {
        (**self).get_int(key)
    }
}

/// Reads configuration from process environment variables.
///
/// Field names are upper-cased before lookup, so a field called `Port` or
/// `port` reads `PORT`. An optional prefix is prepended as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// `EnvSource::with_prefix("APP_")` reads `APP_PORT` for a field named `port`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Loads a `.env` file from the current directory (or its parents) into the
    /// process environment, then returns an unprefixed source.
    ///
    /// A missing `.env` file is fine. A malformed one is an error.
    pub fn from_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!(".env file not found, using process environment"),
            Err(e) => return Err(e.into()),
        }

        Ok(Self::new())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The environment variable name looked up for `name`.
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name.to_uppercase())
    }
}

impl ConfigSource for EnvSource {
    fn get_string(&self, key: &str) -> String {
        env::var_os(self.key(key))
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// An in-memory source. Keys are matched exactly, with no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get_string(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_upcases_key() {
        env::set_var("ENVBIND_SOURCE_UPCASE", "hello");
        let source = EnvSource::new();

        assert_eq!(source.get_string("envbind_source_upcase"), "hello");
        assert_eq!(source.get_string("EnvBind_Source_Upcase"), "hello");

        env::remove_var("ENVBIND_SOURCE_UPCASE");
    }

    #[test]
    fn test_env_source_absent_is_empty() {
        let source = EnvSource::new();
        assert_eq!(source.get_string("envbind_source_never_set"), "");

        let err = source.get_int("envbind_source_never_set").unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn test_env_source_get_int() {
        env::set_var("ENVBIND_SOURCE_INT", "9090");
        env::set_var("ENVBIND_SOURCE_NEG", "-12");
        env::set_var("ENVBIND_SOURCE_BAD", "notanumber");
        let source = EnvSource::new();

        assert_eq!(source.get_int("envbind_source_int").unwrap(), 9090);
        assert_eq!(source.get_int("envbind_source_neg").unwrap(), -12);

        let err = source.get_int("envbind_source_bad").unwrap_err();
        assert_eq!(err.value, "notanumber");
        assert!(!err.is_missing());

        env::remove_var("ENVBIND_SOURCE_INT");
        env::remove_var("ENVBIND_SOURCE_NEG");
        env::remove_var("ENVBIND_SOURCE_BAD");
    }

    #[test]
    fn test_env_source_prefix() {
        env::set_var("ENVBIND_PFX_PORT", "7000");
        let source = EnvSource::with_prefix("ENVBIND_PFX_");

        assert_eq!(source.key("port"), "ENVBIND_PFX_PORT");
        assert_eq!(source.get_int("Port").unwrap(), 7000);

        env::remove_var("ENVBIND_PFX_PORT");
    }

    #[test]
    fn test_get_int_rejects_whitespace_and_overflow() {
        let source = MapSource::new()
            .with("padded", " 42")
            .with("huge", "99999999999999999999")
            .with("plus", "+42");

        assert!(source.get_int("padded").is_err());
        assert!(source.get_int("huge").is_err());
        assert_eq!(source.get_int("plus").unwrap(), 42);
    }

    #[test]
    fn test_map_source_is_case_sensitive() {
        let source: MapSource = [("Host", "example.com")].into_iter().collect();

        assert_eq!(source.len(), 1);
        assert_eq!(source.get_string("Host"), "example.com");
        assert_eq!(source.get_string("HOST"), "");
    }

    #[test]
    fn test_reference_and_box_forward() {
        let source = MapSource::new().with("Port", "1");
        let boxed: Box<dyn ConfigSource> = Box::new(source.clone());

        assert_eq!((&source).get_int("Port").unwrap(), 1);
        assert_eq!(boxed.get_string("Port"), "1");
    }

    #[test]
    fn test_mock_source_overrides_get_int() {
        let mut mock = MockConfigSource::new();
        mock.expect_get_int()
            .withf(|key| key == "Port")
            .times(1)
            .returning(|_| Ok(1234));

        assert_eq!(mock.get_int("Port").unwrap(), 1234);
    }
}
