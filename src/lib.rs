//! # pagekit
//!
//! Leptos + WASM helpers for the server-rendered study app: toast
//! notifications, a fetch wrapper with central auth/quota handling, a
//! loading overlay, and small DOM utilities (dates, escaping, clipboard,
//! debounce, confirm, nav highlighting).
//!
//! State lives in an explicit `UiKit` context object rather than in
//! page-global singletons. Browser-only code is gated behind the `hydrate`
//! feature; other builds compile the same API with no-op fallbacks.

#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod components;
pub mod config;
pub mod kit;
pub mod net;
pub mod state;
pub mod util;

pub use config::UiKitConfig;
pub use kit::{UiKit, use_ui_kit};
pub use net::api::{api_request, api_request_json, check_quota_warnings};
pub use net::request::RequestOptions;
pub use net::status::ApiOutcome;
pub use state::toast::ToastKind;
