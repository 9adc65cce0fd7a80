//! YAML redirect sources.
//!
//! ```yaml
//! - path: /docs
//!   url: https://docs.example.com
//! ```

use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use super::{Format, LoadError, RedirectSource, Record};

/// Decode a YAML sequence of `{path, url}` mappings.
///
/// Only the first document of a stream is read. An empty stream or a
/// `null` document yields no records.
pub fn decode(source: &RedirectSource) -> Result<Vec<Record>, LoadError> {
    match source {
        RedirectSource::Inline(payload) => {
            if payload.trim().is_empty() {
                return Ok(Vec::new());
            }
            first_document(serde_yaml::Deserializer::from_str(payload))
        }
        RedirectSource::File(path) => {
            let file = File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
            first_document(serde_yaml::Deserializer::from_reader(BufReader::new(file)))
        }
    }
}

fn first_document(mut stream: serde_yaml::Deserializer<'_>) -> Result<Vec<Record>, LoadError> {
    let Some(document) = stream.next() else {
        return Ok(Vec::new());
    };

    let records = Option::<Vec<Record>>::deserialize(document)
        .map_err(|e| LoadError::decode(Format::Yaml, e))?;
    Ok(records.unwrap_or_default())
}
