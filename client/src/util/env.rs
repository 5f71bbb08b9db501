//! Runtime environment detection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same bundle ships inside the desktop (Tauri) webview and behind the
//! Docker/web server. Only the network-served build is gated; the desktop
//! host is trusted and bypasses the credential prompt.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Window globals injected by the Tauri runtime.
pub const TAURI_GLOBALS: [&str; 2] = ["__TAURI_INTERNALS__", "__TAURI__"];

/// Where the application is currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEnvironment {
    /// Desktop webview owned by the native host.
    TrustedHost,
    /// Served over the network to an arbitrary browser.
    NetworkServed,
}

impl HostEnvironment {
    /// Classify from the set of window globals that are present.
    pub fn from_globals<'a>(present: impl IntoIterator<Item = &'a str>) -> Self {
        if present.into_iter().any(|name| TAURI_GLOBALS.contains(&name)) {
            Self::TrustedHost
        } else {
            Self::NetworkServed
        }
    }

    /// Detect the current environment.
    ///
    /// Server rendering always reports `NetworkServed` so the SSR output is
    /// the locked shell; hydration then re-evaluates in the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsValue;

            let Some(window) = web_sys::window() else {
                return Self::NetworkServed;
            };
            let present = TAURI_GLOBALS.iter().copied().filter(|name| {
                js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false)
            });
            Self::from_globals(present)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::NetworkServed
        }
    }

    pub fn is_trusted(self) -> bool {
        matches!(self, Self::TrustedHost)
    }
}
