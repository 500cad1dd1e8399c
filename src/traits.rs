use crate::binder::parse;
use crate::errors::ConfigError;
use crate::schema::Schema;

/// A trait for types that can be constructed from environment variables.
///
/// Every [`Schema`] that also implements [`Default`] gets this for free: the
/// default instance is created first, then each field is bound from the
/// environment variable named after it in upper case. Fields without a
/// variable fall back to their declared default.
///
/// # Examples
/// ```
/// use envbind::{FromEnv, Schema, Shape};
///
/// #[derive(Debug, Default)]
/// struct DatabaseConfig {
///     host: String,
///     port: i64,
/// }
///
/// impl Schema for DatabaseConfig {
///     fn shape(&mut self) -> Shape<'_> {
///         Shape::record()
///             .field("db_host", &mut self.host)
///             .default("localhost")
///             .field("db_port", &mut self.port)
///             .default("5432")
///             .build()
///     }
/// }
///
/// let config = DatabaseConfig::from_env().unwrap();
/// assert!(!config.host.is_empty());
/// ```
pub trait FromEnv: Sized {
    /// Creates a new instance of the type from environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfigVariable`] if the type does not
    /// describe itself as a record.
    fn from_env() -> Result<Self, ConfigError>;
}

impl<T: Schema + Default> FromEnv for T {
    fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        parse(&mut config)?;
        Ok(config)
    }
}
