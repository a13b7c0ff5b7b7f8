//! Runtime configuration, read from page globals.
//!
//! The hosting page may set `window.API_BASE` and `window.LOG_LEVEL` before the
//! module starts; anything missing or blank falls back to the defaults below.

use std::str::FromStr;

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

const API_BASE_GLOBAL: &str = "API_BASE";
const LOG_LEVEL_GLOBAL: &str = "LOG_LEVEL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the API, without a trailing slash.
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    /// Build a configuration from optional raw values.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .map(|base| base.trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_owned();
        let log_level = log_level
            .map(str::trim)
            .and_then(|level| log::Level::from_str(level).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_base,
            log_level,
        }
    }

    /// Read the configuration from the globals of the current window.
    pub fn from_window(window: &web_sys::Window) -> Self {
        let api_base = global_string(window, API_BASE_GLOBAL);
        let log_level = global_string(window, LOG_LEVEL_GLOBAL);
        Self::from_values(api_base.as_deref(), log_level.as_deref())
    }

    /// Full URL for an endpoint path such as `/api/re/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn global_string(window: &web_sys::Window, name: &str) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|val| val.as_string())
}
