//! Errors raised while decoding a redirect source.

use std::path::PathBuf;
use thiserror::Error;

use super::Format;

/// Failure to turn a redirect source into records.
///
/// Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The payload is not valid for the selected format.
    #[error("malformed {format} payload: {reason}")]
    Decode { format: Format, reason: String },

    /// A tabular row does not have exactly two columns.
    #[error("malformed csv payload: line {line} has {found} column(s), expected 2 (path,url)")]
    MalformedRow { line: usize, found: usize },

    /// The file backing the source cannot be opened or read.
    #[error("redirect source {} is unavailable: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn decode(format: Format, reason: impl ToString) -> Self {
        LoadError::Decode {
            format,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the payload content rather than its availability.
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode { .. } | LoadError::MalformedRow { .. })
    }
}
