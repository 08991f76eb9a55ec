//! Browser console logging.
//!
//! Off wasm32 these compile to no-ops so unit tests never touch browser
//! imports.

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}
