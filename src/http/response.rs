//! Redirect response construction.
//!
//! # Responsibilities
//! - Build `302 Found` responses carrying the destination in `Location`
//! - Keep the header valid for any destination string
//!
//! # Design Decisions
//! - Control characters and non-ASCII bytes are percent-encoded, everything
//!   else is passed through untouched
//! - No body: clients follow `Location`

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, CONTROLS};

/// Encode a destination so it is always a valid header value.
pub fn location_value(destination: &str) -> String {
    utf8_percent_encode(destination, CONTROLS).to_string()
}

/// Build a `302 Found` redirect to `destination`.
pub fn found(destination: &str) -> Response {
    match HeaderValue::try_from(location_value(destination)) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        // location_value only emits visible ASCII and spaces.
        Err(e) => {
            tracing::error!(destination = %destination, error = %e, "Unencodable redirect destination");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
