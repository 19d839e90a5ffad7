//! Browser Dialogs
//!
//! Blocking `window.confirm` / `window.alert` wrappers.

use grocery_core::Confirm;
use tracing::warn;

/// Confirmation answered by `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(text = message, "no window to alert on");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        warn!(?err, "alert failed");
    }
}
