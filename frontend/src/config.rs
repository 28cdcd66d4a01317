//! Backend endpoint configuration.

/// Address the dev backend listens on.
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the REST backend.
///
/// Baked in at build time from `SWEETCRUST_API_URL` so deployed bundles can
/// point at a real host; falls back to the local dev server when unset.
pub fn api_base_url() -> String {
    option_env!("SWEETCRUST_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
