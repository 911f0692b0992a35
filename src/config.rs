//! Runtime configuration for a `UiKit`.
//!
//! Every field has a default matching the server application's routes, so
//! page scripts only pass the values they want to change.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::loading::DEFAULT_LOADING_MESSAGE;
use crate::state::toast::{DEFAULT_TOAST_MS, TOAST_FADE_MS};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiKitConfig {
    /// Redirect target after a 401.
    pub login_path: String,
    /// Endpoint polled for the current user and quota warnings.
    pub current_user_endpoint: String,
    pub toast_ms: u32,
    pub warning_toast_ms: u32,
    pub copied_toast_ms: u32,
    pub toast_fade_ms: u32,
    pub debounce_ms: u32,
    pub loading_message: String,
    pub quota_exhausted_message: String,
}

impl Default for UiKitConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_owned(),
            current_user_endpoint: "/auth/me".to_owned(),
            toast_ms: DEFAULT_TOAST_MS,
            warning_toast_ms: 6000,
            copied_toast_ms: 2000,
            toast_fade_ms: TOAST_FADE_MS,
            debounce_ms: 300,
            loading_message: DEFAULT_LOADING_MESSAGE.to_owned(),
            quota_exhausted_message: "Quota exhausted. Please wait for refresh.".to_owned(),
        }
    }
}

impl UiKitConfig {
    /// Parse a (possibly partial) JSON config object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}
