use std::sync::Arc;

use tracing::{info, warn};

/// Receives per-field observations from the binder.
///
/// Diagnostics are observability output only. Nothing reported here changes
/// the outcome of a bind, and a sink may be shared between concurrent binds.
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    /// A text field was written.
    fn text_set(&self, name: &str, value: &str);

    /// An integer field was written.
    fn integer_set(&self, name: &str, value: i64);

    /// A field could not be written and was skipped.
    fn field_skipped(&self, name: &str);

    /// A field has a type the binder does not convert and was left untouched.
    fn field_unsupported(&self, name: &str, type_name: &str);
}

/// Discards every diagnostic. This is the binder's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn text_set(&self, _name: &str, _value: &str) {}

    fn integer_set(&self, _name: &str, _value: i64) {}

    fn field_skipped(&self, _name: &str) {}

    fn field_unsupported(&self, _name: &str, _type_name: &str) {}
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn text_set(&self, name: &str, value: &str) {
        info!(target: "envbind", field = name, value, "setting field");
    }

    fn integer_set(&self, name: &str, value: i64) {
        info!(target: "envbind", field = name, value, "setting field");
    }

    fn field_skipped(&self, name: &str) {
        warn!(target: "envbind", field = name, "skipping unassignable field");
    }

    fn field_unsupported(&self, name: &str, type_name: &str) {
        warn!(target: "envbind", field = name, type_name, "field type not supported");
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn text_set(&self, name: &str, value: &str) {
        (**self).text_set(name, value)
    }

    fn integer_set(&self, name: &str, value: i64) {
        (**self).integer_set(name, value)
    }

    fn field_skipped(&self, name: &str) {
        (**self).field_skipped(name)
    }

    fn field_unsupported(&self, name: &str, type_name: &str) {
        (**self).field_unsupported(name, type_name)
    }
}
