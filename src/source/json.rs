//! JSON redirect sources.
//!
//! ```json
//! [{"path": "/docs", "url": "https://docs.example.com"}]
//! ```

use std::fs::File;
use std::io::BufReader;

use super::{Format, LoadError, RedirectSource, Record};

/// Decode a JSON array of `{path, url}` objects.
///
/// File sources are streamed through a buffered reader. A top-level `null`
/// yields no records.
pub fn decode(source: &RedirectSource) -> Result<Vec<Record>, LoadError> {
    let records: Option<Vec<Record>> = match source {
        RedirectSource::Inline(payload) => {
            serde_json::from_str(payload).map_err(|e| LoadError::decode(Format::Json, e))?
        }
        RedirectSource::File(path) => {
            let file = File::open(path).map_err(|e| LoadError::unavailable(path, e))?;
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                if e.is_io() {
                    LoadError::unavailable(path, e.into())
                } else {
                    LoadError::decode(Format::Json, e)
                }
            })?
        }
    };

    Ok(records.unwrap_or_default())
}
