//! JavaScript entry points for server-rendered pages.
//!
//! A page constructs one `PageKit`, which mounts the toast container and
//! loading overlay into `<body>`, wires the nav highlighter, and exposes the
//! helpers under the camelCase names page scripts already call.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::components::PageKitHost;
use crate::config::UiKitConfig;
use crate::kit::UiKit;
use crate::net::api;
use crate::net::request::{RequestBody, RequestOptions, ScriptOptions};
use crate::state::toast::ToastKind;
use crate::util::{clipboard, date, debounce, dialog, html, nav};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn json_to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    let raw = serde_json::to_string(value).map_err(js_error)?;
    js_sys::JSON::parse(&raw)
}

fn string_field(options: &JsValue, name: &str) -> Result<Option<String>, JsValue> {
    Ok(js_sys::Reflect::get(options, &JsValue::from_str(name))?.as_string())
}

/// Body shape follows the value: `FormData` is sent as multipart, a string
/// verbatim, and any other object as JSON.
fn script_body(body: JsValue) -> Result<RequestBody, JsValue> {
    if body.is_undefined() || body.is_null() {
        return Ok(RequestBody::Empty);
    }
    if let Some(form) = body.dyn_ref::<web_sys::FormData>() {
        return Ok(RequestBody::Form(form.clone()));
    }
    if let Some(raw) = body.as_string() {
        return Ok(RequestBody::Text(raw));
    }
    let raw = String::from(js_sys::JSON::stringify(&body)?);
    Ok(RequestBody::Json(serde_json::from_str(&raw).map_err(js_error)?))
}

/// Read `{method, headers, credentials, body}` from a page script's options.
fn script_options(options: &JsValue) -> Result<RequestOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(RequestOptions::default());
    }
    let mut script = ScriptOptions {
        method: string_field(options, "method")?,
        credentials: string_field(options, "credentials")?,
        ..ScriptOptions::default()
    };
    let headers = js_sys::Reflect::get(options, &JsValue::from_str("headers"))?;
    if headers.is_object() {
        for entry in js_sys::Object::entries(headers.unchecked_ref::<js_sys::Object>()).iter() {
            let pair = entry.unchecked_into::<js_sys::Array>();
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                script.headers.insert(name, value);
            }
        }
    }
    let body = script_body(js_sys::Reflect::get(options, &JsValue::from_str("body"))?)?;
    RequestOptions::from_script(script, body).map_err(js_error)
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second PageKit on the same page finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct PageKit {
    kit: UiKit,
}

#[wasm_bindgen]
impl PageKit {
    /// Build the kit from an optional JSON config and mount it.
    ///
    /// # Errors
    ///
    /// Rejects with a message if `config` is not a valid config object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<PageKit, JsValue> {
        init_logging();
        let config = match config {
            Some(raw) => UiKitConfig::from_json(&raw).map_err(js_error)?,
            None => UiKitConfig::default(),
        };
        let kit = UiKit::new(config);
        leptos::mount::mount_to_body(move || {
            kit.provide();
            view! { <PageKitHost/> }
        });
        nav::install_nav_highlight();
        log::info!("pagekit mounted");
        Ok(Self { kit })
    }

    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, kind: Option<String>, duration_ms: Option<u32>) {
        let kind = kind.as_deref().map_or(ToastKind::Info, ToastKind::parse);
        let duration_ms = duration_ms.unwrap_or_else(|| self.kit.config().toast_ms);
        self.kit.show_toast(message, kind, duration_ms);
    }

    #[wasm_bindgen(js_name = showLoading)]
    pub fn show_loading(&self, message: Option<String>) {
        match message {
            Some(message) => self.kit.show_loading(message),
            None => self.kit.show_default_loading(),
        }
    }

    #[wasm_bindgen(js_name = hideLoading)]
    pub fn hide_loading(&self) {
        self.kit.hide_loading();
    }

    /// Resolves to the `fetch` `Response`, or `null` after a 401 or 429.
    ///
    /// # Errors
    ///
    /// Throws if `options` names an unknown method or credentials mode.
    #[wasm_bindgen(js_name = apiRequest)]
    pub fn api_request(&self, url: String, options: JsValue) -> Result<js_sys::Promise, JsValue> {
        let options = script_options(&options)?;
        let kit = self.kit;
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            match api::api_request(kit, &url, options).await.map_err(js_error)? {
                crate::ApiOutcome::Response(resp) => Ok(resp.into_raw().into()),
                crate::ApiOutcome::Unauthorized | crate::ApiOutcome::QuotaExhausted => Ok(JsValue::NULL),
            }
        }))
    }

    /// Resolves to the parsed JSON body, or `null` after a 401 or 429.
    ///
    /// # Errors
    ///
    /// Throws if `options` names an unknown method or credentials mode.
    #[wasm_bindgen(js_name = apiRequestJson)]
    pub fn api_request_json(&self, url: String, options: JsValue) -> Result<js_sys::Promise, JsValue> {
        let options = script_options(&options)?;
        let kit = self.kit;
        Ok(wasm_bindgen_futures::future_to_promise(async move {
            let outcome = api::api_request_json::<serde_json::Value>(kit, &url, options)
                .await
                .map_err(js_error)?;
            match outcome.into_option() {
                Some(value) => json_to_js(&value),
                None => Ok(JsValue::NULL),
            }
        }))
    }

    /// Resolves to the raw `/auth/me` payload, or `null` when short-circuited.
    #[wasm_bindgen(js_name = checkQuotaWarnings)]
    pub fn check_quota_warnings(&self) -> js_sys::Promise {
        let kit = self.kit;
        wasm_bindgen_futures::future_to_promise(async move {
            match api::check_quota_warnings_raw(kit).await.map_err(js_error)? {
                Some(payload) => json_to_js(&payload),
                None => Ok(JsValue::NULL),
            }
        })
    }

    /// Wrap `callback` so it runs once, with the latest argument, after
    /// `delayMs` (default from config) of quiet.
    pub fn debounce(&self, callback: js_sys::Function, delay_ms: Option<u32>) -> JsValue {
        let delay_ms = delay_ms.unwrap_or_else(|| self.kit.config().debounce_ms);
        let debounced = debounce::debounce(delay_ms, move |arg: JsValue| {
            if let Err(e) = callback.call1(&JsValue::NULL, &arg) {
                log::warn!("debounced callback threw: {e:?}");
            }
        });
        Closure::<dyn Fn(JsValue)>::new(debounced).into_js_value()
    }

    /// Resolves to `true` once the text is on the clipboard.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, text: String) -> js_sys::Promise {
        let kit = self.kit;
        wasm_bindgen_futures::future_to_promise(async move {
            let copied = clipboard::copy_to_clipboard(kit, &text).await;
            Ok(JsValue::from_bool(copied))
        })
    }

    #[wasm_bindgen(js_name = confirmAction)]
    pub fn confirm_action(&self, message: &str) -> bool {
        dialog::confirm_action(message)
    }

    #[wasm_bindgen(js_name = escapeHtml)]
    pub fn escape_html(&self, text: Option<String>) -> String {
        html::escape_html(text.as_deref().unwrap_or_default())
    }

    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(&self, iso: Option<String>) -> String {
        date::format_date(iso.as_deref().unwrap_or_default())
    }

    #[wasm_bindgen(js_name = formatDateTime)]
    pub fn format_date_time(&self, iso: Option<String>) -> String {
        date::format_date_time(iso.as_deref().unwrap_or_default())
    }
}
