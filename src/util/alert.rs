//! Blocking user alert.

/// Show `message` in a blocking browser alert.
///
/// Outside the browser the message is only logged.
pub fn alert(message: &str) {
    log::warn!("alert: {message}");
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("window.alert failed: {err:?}");
        }
    }
}
