use envbind::{Schema, Shape};

/// Settings for the demonstration server, read from `HOST`, `PORT` and
/// `WORKERS` (with an optional prefix, see `ENVBIND_PREFIX`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: i64,
    pub workers: i64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Schema for ServerConfig {
    fn shape(&mut self) -> Shape<'_> {
        Shape::record()
            .field("host", &mut self.host)
            .default("localhost")
            .field("port", &mut self.port)
            .default("8080")
            .field("workers", &mut self.workers)
            .default("4")
            .build()
    }
}
