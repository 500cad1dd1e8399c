//! # envbind
//!
//! Binds flat configuration records to values from a key-value source, most
//! commonly the process environment.
//!
//! A record lists its fields through [`Schema`]. The [`Binder`] looks each
//! field up in a [`ConfigSource`] by name, converts the raw text to the
//! field's type and falls back to the declared default when the value is
//! missing or malformed. Text (`String`) and integer (`i64`) fields are
//! converted; fields of any other type are left as they are.
//!
//! ```
//! use envbind::{bind, MapSource, Schema, Shape};
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
//!
//! let mut config = ServerConfig::default();
//! bind(&mut config, MapSource::new().with("Port", "9090")).unwrap();
//!
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 9090);
//! ```

pub mod binder;
pub mod diagnostics;
pub mod errors;
pub mod schema;
pub mod source;
pub mod traits;

pub use binder::{bind, parse, Binder};
pub use diagnostics::{Diagnostics, Silent, TracingDiagnostics};
pub use errors::{ConfigError, ConversionError};
pub use schema::{Field, RecordBuilder, Schema, Shape, Slot};
pub use source::{ConfigSource, EnvSource, MapSource};
pub use traits::FromEnv;
