//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Storage (LocalStorage on web)

/// Install the logger for the current target
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialised: {e}").into());
    }
}

/// Install the logger for the current target (`RUST_LOG` controls the level)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    env_logger::init();
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read a LocalStorage value
#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a LocalStorage value, returning whether it stuck
#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) -> bool {
    match local_storage() {
        Some(storage) => storage.set_item(key, value).is_ok(),
        None => {
            log::warn!("LocalStorage unavailable, {} not saved", key);
            false
        }
    }
}
