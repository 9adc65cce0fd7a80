//! Redirect source decoding subsystem.
//!
//! # Data Flow
//! ```text
//! RedirectSource (inline payload | file path) + Format
//!     → json.rs / yaml.rs / csv.rs (format-specific decoder)
//!     → Vec<Record> (trimmed, in source order)
//!     → routing::RedirectTable (built once at startup)
//! ```
//!
//! # Design Decisions
//! - Inline and file input are separate enum variants, not a flag
//! - Any decode failure is fatal: no partial tables
//! - File handles live only for the duration of a single decode call

pub mod csv;
pub mod error;
pub mod json;
pub mod record;
pub mod yaml;

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use error::LoadError;
pub use record::Record;

/// Serialization format of a redirect source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Array of `{path, url}` objects.
    #[default]
    Json,
    /// Sequence of `{path, url}` mappings.
    Yaml,
    /// Two-column `path,url` rows.
    Csv,
}

impl Format {
    /// Select a format from a mode string.
    ///
    /// `"yaml"` and `"csv"` are recognized; everything else, including the
    /// empty string, selects JSON.
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "yaml" => Format::Yaml,
            "csv" => Format::Csv,
            _ => Format::Json,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the redirect payload comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectSource {
    /// The payload itself.
    Inline(String),
    /// A file containing the payload.
    File(PathBuf),
}

impl RedirectSource {
    /// Build a source from a command-line value and the raw-mode flag.
    pub fn from_flag(value: impl Into<String>, raw: bool) -> Self {
        let value = value.into();
        if raw {
            RedirectSource::Inline(value)
        } else {
            RedirectSource::File(PathBuf::from(value))
        }
    }

    /// True when there is nothing to decode from (empty payload or path).
    pub fn is_empty(&self) -> bool {
        match self {
            RedirectSource::Inline(payload) => payload.is_empty(),
            RedirectSource::File(path) => path.as_os_str().is_empty(),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, RedirectSource::Inline(_))
    }
}

impl Default for RedirectSource {
    fn default() -> Self {
        RedirectSource::Inline(String::new())
    }
}

impl fmt::Display for RedirectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectSource::Inline(payload) => write!(f, "inline ({} bytes)", payload.len()),
            RedirectSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// Decode a redirect source with the decoder selected by `format`.
pub fn decode(format: Format, source: &RedirectSource) -> Result<Vec<Record>, LoadError> {
    let records = match format {
        Format::Json => json::decode(source)?,
        Format::Yaml => yaml::decode(source)?,
        Format::Csv => csv::decode(source)?,
    };

    tracing::debug!(
        format = %format,
        source = %source,
        records = records.len(),
        "Redirect source decoded"
    );

    Ok(records)
}
