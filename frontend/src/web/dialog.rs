//! Native dialog wrappers.

/// Blocking `window.confirm`. Returns `false` when the window is
/// unavailable, which fails safe for destructive actions.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
