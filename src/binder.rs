//! Resolves a destination record against a configuration source.

use tracing::{debug, debug_span};

use crate::diagnostics::{Diagnostics, Silent};
use crate::errors::ConfigError;
use crate::schema::{Field, Schema, Shape, Slot};
use crate::source::{ConfigSource, EnvSource};

/// Binds schemas to a [`ConfigSource`], reporting per-field activity to a
/// [`Diagnostics`] sink.
///
/// Holds no mutable state, so one binder can serve any number of binds,
/// including concurrent ones against distinct destinations.
#[derive(Debug, Clone)]
pub struct Binder<S, D = Silent> {
    source: S,
    diagnostics: D,
}

impl<S: ConfigSource> Binder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            diagnostics: Silent,
        }
    }
}

impl<S: ConfigSource, D: Diagnostics> Binder<S, D> {
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> Binder<S, E> {
        Binder {
            source: self.source,
            diagnostics,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Writes every supported field of `destination` from the source, falling
    /// back to the field's default.
    ///
    /// Only a destination that is not a record fails the call, and then nothing
    /// is written. Missing values, bad integers and unsupported field types are
    /// handled per field and never abort the bind.
    pub fn bind(&self, destination: &mut dyn Schema) -> Result<(), ConfigError> {
        let fields = match destination.shape() {
            Shape::Record(fields) => fields,
            Shape::Other(shape) => return Err(ConfigError::InvalidConfigVariable { shape }),
        };

        let _span = debug_span!("bind", fields = fields.len()).entered();

        for field in fields {
            self.resolve(field);
        }

        Ok(())
    }

    fn resolve(&self, field: Field<'_>) {
        let name = field.name;
        let default = field.default.unwrap_or_default();

        match field.slot {
            Slot::Unassignable => self.diagnostics.field_skipped(name),
            Slot::Text(text) => {
                let mut value = self.source.get_string(name);
                if value.is_empty() {
                    debug!(field = name, default, "no value, using default");
                    value = default.to_string();
                }

                self.diagnostics.text_set(name, &value);
                *text = value;
            }
            Slot::Integer(integer) => {
                let value = self.source.get_int(name).unwrap_or_else(|e| {
                    debug!(field = name, default, error = %e, "using default");
                    // An unparseable default silently becomes zero.
                    default.parse().unwrap_or(0)
                });

                self.diagnostics.integer_set(name, value);
                *integer = value;
            }
            Slot::Unsupported(type_name) => self.diagnostics.field_unsupported(name, type_name),
        }
    }
}

/// Binds `destination` against `source` without diagnostics.
pub fn bind<S: ConfigSource>(destination: &mut dyn Schema, source: S) -> Result<(), ConfigError> {
    Binder::new(source).bind(destination)
}

/// Binds `destination` against the process environment.
pub fn parse(destination: &mut dyn Schema) -> Result<(), ConfigError> {
    bind(destination, EnvSource::new())
}
