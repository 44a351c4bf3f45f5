//! Browser localStorage helpers for board list persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only read/write behavior so the app shell can
//! persist the board store without repeating web-sys glue. Native builds
//! (tests) read nothing and write nothing.

use serde::Serialize;

/// Load the raw JSON value stored under `key`, if any.
///
/// Returns `None` when storage is unavailable, the key is absent, or the
/// stored text is not JSON. Shape checks are left to the caller.
pub fn load_json(key: &str) -> Option<serde_json::Value> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let raw = match storage.get_item(key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("localStorage read failed for {key}: {err:?}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::error!("localStorage value for {key} is not JSON: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("storage unavailable outside the browser; skipping load of {key}");
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("failed to serialize {key}: {err}");
                return;
            }
        };
        if let Err(err) = storage.set_item(key, &raw) {
            log::warn!("localStorage write failed for {key}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("storage unavailable outside the browser; skipping save of {key}");
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}
