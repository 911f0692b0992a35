//! Fetch wrapper with centralized auth and quota handling.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native builds: stubs returning
//! `ApiError::Unavailable`, since these requests only make sense in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! 401 and 429 are consumed here and reported as `ApiOutcome` variants.
//! A request that never gets a response is returned as
//! `ApiError::Network` and logged; the wrapper does not toast it, so each
//! page decides how loud a transport failure should be.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::RequestOptions;
#[cfg(feature = "hydrate")]
use super::request::{HttpMethod, RequestBody};
use super::status::ApiOutcome;
use super::types::MeResponse;
use crate::kit::UiKit;

/// A response the wrapper did not consume, for the caller to interpret.
pub struct RawResponse {
    status: u16,
    #[cfg(feature = "hydrate")]
    inner: gloo_net::http::Response,
}

impl RawResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The underlying `fetch` response, for handing back to page scripts.
    #[cfg(feature = "hydrate")]
    pub fn into_raw(self) -> web_sys::Response {
        self.inner.as_raw().clone()
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Read the body as text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body cannot be read.
    pub async fn text(self) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn build_request(url: &str, options: &RequestOptions) -> Result<gloo_net::http::Request, ApiError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match options.method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    };
    let mut builder = RequestBuilder::new(url)
        .method(method)
        .credentials(options.credentials.to_web());
    for (name, value) in options.effective_headers() {
        builder = builder.header(&name, &value);
    }

    let request = match &options.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(_) | RequestBody::Text(_) => {
            let raw = options.encoded_body()?.unwrap_or_default();
            builder.body(raw)
        }
        RequestBody::Form(form) => builder.body(form.clone()),
    };
    request.map_err(|e| ApiError::Request(e.to_string()))
}

/// Send a request through the shared status policy.
///
/// 401 navigates to the login page and yields `Unauthorized`; 429 raises
/// the quota warning toast and yields `QuotaExhausted`. Any other status is
/// returned untouched.
///
/// # Errors
///
/// Returns an error if the body cannot be encoded or no response arrives.
pub async fn api_request(
    kit: UiKit,
    url: &str,
    options: RequestOptions,
) -> Result<ApiOutcome<RawResponse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = build_request(url, &options)?;
        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("{} {url} failed: {e}", options.method.as_str());
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        if let Some(short) = kit.intercept_status(status) {
            return Ok(short.into());
        }
        Ok(ApiOutcome::Response(RawResponse { status, inner: resp }))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kit, url);
        options.encoded_body()?;
        Err(ApiError::Unavailable)
    }
}

/// `api_request`, then parse the body as JSON.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not valid JSON.
pub async fn api_request_json<T: DeserializeOwned>(
    kit: UiKit,
    url: &str,
    options: RequestOptions,
) -> Result<ApiOutcome<T>, ApiError> {
    match api_request(kit, url, options).await? {
        ApiOutcome::Response(resp) => resp.json::<T>().await.map(ApiOutcome::Response),
        ApiOutcome::Unauthorized => Ok(ApiOutcome::Unauthorized),
        ApiOutcome::QuotaExhausted => Ok(ApiOutcome::QuotaExhausted),
    }
}

/// Warning strings from a raw `/auth/me` payload. Non-string entries are
/// rendered as JSON.
fn payload_warnings(payload: &serde_json::Value) -> Vec<String> {
    payload
        .get("warnings")
        .and_then(serde_json::Value::as_array)
        .map(|warnings| {
            warnings
                .iter()
                .map(|w| w.as_str().map_or_else(|| w.to_string(), str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// Load the current user as raw JSON and raise a warning toast per
/// low-quota warning.
///
/// Returns `None` when the request was short-circuited.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn check_quota_warnings_raw(kit: UiKit) -> Result<Option<serde_json::Value>, ApiError> {
    let endpoint = kit.config().current_user_endpoint;
    let payload = api_request_json::<serde_json::Value>(kit, &endpoint, RequestOptions::get())
        .await?
        .into_option();
    if let Some(payload) = &payload {
        kit.show_warnings(&payload_warnings(payload));
    }
    Ok(payload)
}

/// `check_quota_warnings_raw`, parsed into `MeResponse`.
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be parsed.
pub async fn check_quota_warnings(kit: UiKit) -> Result<Option<MeResponse>, ApiError> {
    check_quota_warnings_raw(kit)
        .await?
        .map(|payload| serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}
