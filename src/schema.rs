//! Field descriptor tables for destination records.
//!
//! A destination describes itself through [`Schema::shape`], which hands the
//! binder one [`Field`] per declared field: its name, its optional default and
//! a [`Slot`] giving temporary write access to the value. The table is built
//! fresh on every call and borrows the destination for as long as it lives.
//!
//! ```
//! use envbind::{Schema, Shape};
//!
//! #[derive(Debug, Default)]
//! struct ServerConfig {
//!     host: String,
//!     port: i64,
//! }
//!
//! impl Schema for ServerConfig {
//!     fn shape(&mut self) -> Shape<'_> {
//!         Shape::record()
//!             .field("Host", &mut self.host)
//!             .default("localhost")
//!             .field("Port", &mut self.port)
//!             .default("8080")
//!             .build()
//!     }
//! }
//! ```

use std::any::{type_name, Any};
use std::collections::{BTreeMap, HashMap};

/// A type the binder can write configuration into.
pub trait Schema {
    fn shape(&mut self) -> Shape<'_>;
}

/// What a destination looks like to the binder.
#[derive(Debug)]
pub enum Shape<'a> {
    /// A struct-like record with named fields, in declaration order.
    Record(Vec<Field<'a>>),
    /// Anything else. The string names the shape for error reporting.
    Other(&'static str),
}

impl<'a> Shape<'a> {
    pub fn record() -> RecordBuilder<'a> {
        RecordBuilder { fields: Vec::new() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Record(_) => "record",
            Shape::Other(shape) => shape,
        }
    }
}

/// One field of a record.
#[derive(Debug)]
pub struct Field<'a> {
    /// Used verbatim as the lookup key. Case rules belong to the source.
    pub name: &'a str,
    /// The declared default, if any.
    pub default: Option<&'a str>,
    pub slot: Slot<'a>,
}

impl Field<'_> {
    /// The default as the binder sees it: empty when none was declared.
    pub fn default_value(&self) -> &str {
        self.default.unwrap_or_default()
    }
}

/// Write access to a single field, tagged by kind.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Integer(&'a mut i64),
    /// A field of a type the binder does not convert. No reference is held,
    /// so the value cannot change during a bind.
    Unsupported(&'static str),
    /// A field the binder is not allowed to write.
    Unassignable,
}

impl<'a> Slot<'a> {
    /// Picks the slot kind from the concrete type of `value`.
    pub fn of<T: Any>(value: &'a mut T) -> Self {
        let value: &'a mut dyn Any = value;

        if value.is::<String>() {
            match value.downcast_mut::<String>() {
                Some(text) => Slot::Text(text),
                None => Slot::Unsupported(type_name::<T>()),
            }
        } else if value.is::<i64>() {
            match value.downcast_mut::<i64>() {
                Some(integer) => Slot::Integer(integer),
                None => Slot::Unsupported(type_name::<T>()),
            }
        } else {
            Slot::Unsupported(type_name::<T>())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Text(_) => "text",
            Slot::Integer(_) => "integer",
            Slot::Unsupported(type_name) => type_name,
            Slot::Unassignable => "unassignable",
        }
    }
}

/// Builds the field table of a [`Shape::Record`].
#[derive(Debug)]
#[must_use = "call build() to produce a Shape"]
pub struct RecordBuilder<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> RecordBuilder<'a> {
    pub fn field<T: Any>(mut self, name: &'a str, value: &'a mut T) -> Self {
        self.fields.push(Field {
            name,
            default: None,
            slot: Slot::of(value),
        });
        self
    }

    /// Sets the default of the most recently added field. Does nothing if no
    /// field has been added yet.
    pub fn default(mut self, value: &'a str) -> Self {
        if let Some(field) = self.fields.last_mut() {
            field.default = Some(value);
        }
        self
    }

    /// Declares a field the binder must leave alone.
    pub fn private(mut self, name: &'a str) -> Self {
        self.fields.push(Field {
            name,
            default: None,
            slot: Slot::Unassignable,
        });
        self
    }

    pub fn build(self) -> Shape<'a> {
        Shape::Record(self.fields)
    }
}

impl<'a> From<RecordBuilder<'a>> for Shape<'a> {
    fn from(builder: RecordBuilder<'a>) -> Self {
        builder.build()
    }
}

impl<T: Schema + ?Sized> Schema for Box<T> {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! not_a_record {
    ($shape:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Schema for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Other($shape)
                }
            }
        )+
    };
}

not_a_record!("integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
not_a_record!("float" => f32, f64);
not_a_record!("bool" => bool);
not_a_record!("char" => char);
not_a_record!("string" => String);
not_a_record!("unit" => ());

impl<T> Schema for Vec<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Other("slice")
    }
}

impl<T> Schema for Option<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Other("option")
    }
}

impl<K, V, S> Schema for HashMap<K, V, S> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Other("map")
    }
}

impl<K, V> Schema for BTreeMap<K, V> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Other("map")
    }
}
