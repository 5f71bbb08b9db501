//! Gate configuration with an optional runtime override.
//!
//! Defaults match the storage key and DOM event name the rest of the admin
//! console uses. Deployments can override them without rebuilding by defining
//! `window.ABV_GATE_CONFIG` before the bundle loads. Values are public; do
//! not put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use super::unauthorized::UNAUTHORIZED_EVENT;

pub const DEFAULT_STORAGE_KEY: &str = "abv_admin_api_key";

/// What a submit with an empty or whitespace-only credential does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptySubmitPolicy {
    /// Silently ignore the submission.
    #[default]
    Ignore,
    /// Stay locked and show a notice under the form.
    Notice,
}

impl EmptySubmitPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ignore" => Some(Self::Ignore),
            "notice" => Some(Self::Notice),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub storage_key: String,
    pub unauthorized_event: String,
    pub empty_submit: EmptySubmitPolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            unauthorized_event: UNAUTHORIZED_EVENT.to_owned(),
            empty_submit: EmptySubmitPolicy::default(),
        }
    }
}

impl GateConfig {
    /// Defaults with `window.ABV_GATE_CONFIG` applied on top.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    storage_key: Option<String>,
    unauthorized_event: Option<String>,
    empty_submit: Option<String>,
}

fn apply_runtime_overrides(config: &mut GateConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.storage_key.filter(|v| !v.trim().is_empty()) {
        config.storage_key = value;
    }
    if let Some(value) = runtime.unauthorized_event.filter(|v| !v.trim().is_empty()) {
        config.unauthorized_event = value;
    }
    if let Some(raw) = runtime.empty_submit {
        match EmptySubmitPolicy::parse(&raw) {
            Some(policy) => config.empty_submit = policy,
            None => log::warn!("ignoring unknown empty_submit policy {raw:?}"),
        }
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ABV_GATE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        storage_key: read_runtime_value(&object, "storage_key"),
        unauthorized_event: read_runtime_value(&object, "unauthorized_event"),
        empty_submit: read_runtime_value(&object, "empty_submit"),
    })
}

#[cfg(feature = "hydrate")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}
