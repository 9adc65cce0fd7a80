//! Path redirect server.
//!
//! Loads a table of `path → url` redirects from JSON, YAML or CSV (inline or
//! from a file) and answers HTTP requests with `302 Found` for known paths,
//! handing every other request to a fallback service.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod source;

pub use config::schema::ServerConfig;
pub use http::{Dispatcher, RedirectServer};
pub use lifecycle::Shutdown;
pub use routing::RedirectTable;
pub use source::{Format, LoadError, RedirectSource, Record};
