//! The unit of redirect configuration.

use serde::{Deserialize, Serialize};

/// One (path, destination) pair as read from a redirect source.
///
/// Both fields are trimmed of surrounding whitespace on construction.
/// Duplicated paths are legal here; the table resolves them later.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "WireRecord")]
pub struct Record {
    pub path: String,
    #[serde(rename = "url")]
    pub destination: String,
}

impl Record {
    pub fn new(path: impl AsRef<str>, destination: impl AsRef<str>) -> Self {
        Self {
            path: path.as_ref().trim().to_string(),
            destination: destination.as_ref().trim().to_string(),
        }
    }
}

/// Shape of a record in structured payloads. Missing fields read as empty.
#[derive(Deserialize)]
struct WireRecord {
    #[serde(default)]
    path: String,
    #[serde(default)]
    url: String,
}

impl From<WireRecord> for Record {
    fn from(wire: WireRecord) -> Self {
        Record::new(wire.path, wire.url)
    }
}

/// Strip one pair of enclosing double quotes, if both are present.
pub(crate) fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
