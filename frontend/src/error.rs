//! Error classification for backend calls.
//!
//! Every view handles failures the same way: a request either came back with
//! a structured error payload, never came back at all, or failed in some way
//! we did not anticipate. [`ApiError`] is that three-way split, and its
//! `Display` output is the exact text the views render inline.

use std::fmt;

use sweetcrust_shared::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with an error payload; the message is shown to
    /// the user verbatim.
    Server(String),
    /// The request never produced a response (DNS, refused connection,
    /// offline).
    Connectivity,
    /// Anything else: malformed success body, request construction failure.
    Unexpected,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server(msg) => f.write_str(msg),
            ApiError::Connectivity => f.write_str("Network error: unable to reach the server."),
            ApiError::Unexpected => f.write_str("An unexpected error occurred."),
        }
    }
}

impl std::error::Error for ApiError {}

/// Classifies a non-2xx response from its status and raw body.
///
/// The backend reports errors as `{"error": "..."}`; when the body carries
/// that shape the message is surfaced untouched. Anything else (HTML error
/// pages, empty bodies) becomes a generic server message that still names
/// the status code.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(payload) if !payload.error.is_empty() => ApiError::Server(payload.error),
        _ => ApiError::Server(format!("The server rejected the request (HTTP {status}).")),
    }
}

/// Classifies a transport-level failure from `gloo-net`.
///
/// A rejected `fetch` surfaces as a JS error and means the request never
/// reached the backend; everything else (decode failures and request
/// construction problems) is unexpected.
pub fn classify_transport(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(_) => ApiError::Connectivity,
        _ => ApiError::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_surfaced_verbatim() {
        let err = classify_response(401, r#"{"error": "Invalid username or password."}"#);
        assert_eq!(err, ApiError::Server("Invalid username or password.".into()));
        assert_eq!(err.to_string(), "Invalid username or password.");
    }

    #[test]
    fn unstructured_body_falls_back_to_a_status_message() {
        let err = classify_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server("The server rejected the request (HTTP 502).".into())
        );
    }

    #[test]
    fn empty_error_message_is_not_shown_as_blank() {
        let err = classify_response(400, r#"{"error": ""}"#);
        assert!(matches!(&err, ApiError::Server(msg) if msg.contains("400")));
    }

    #[test]
    fn decode_failures_are_unexpected_not_connectivity() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(
            classify_transport(gloo_net::Error::SerdeError(serde_err)),
            ApiError::Unexpected
        );
        assert_eq!(
            classify_transport(gloo_net::Error::GlooError("bad request".into())),
            ApiError::Unexpected
        );
    }

    #[test]
    fn display_matches_the_inline_messages_views_render() {
        assert_eq!(
            ApiError::Connectivity.to_string(),
            "Network error: unable to reach the server."
        );
        assert_eq!(ApiError::Unexpected.to_string(), "An unexpected error occurred.");
    }
}
