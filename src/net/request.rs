//! Typed request options for the fetch wrapper.
//!
//! DESIGN
//! ======
//! Every request starts from `Content-Type: application/json` and
//! `same-origin` credentials. Caller headers are merged over those defaults
//! one name at a time, and multipart form bodies drop the content type so
//! the browser can write its own boundary.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Multipart payload handed to `fetch` as-is.
///
/// In the browser this is a real `FormData`; other builds have no `FormData`
/// and carry plain text fields instead.
#[cfg(feature = "hydrate")]
pub type FormBody = web_sys::FormData;
#[cfg(not(feature = "hydrate"))]
pub type FormBody = Vec<(String, String)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Parse a `fetch` method name. Unknown names are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// `fetch` credentials mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    SameOrigin,
    Include,
    Omit,
}

impl Credentials {
    /// Parse a `fetch` credentials mode (`same-origin`, `include`, `omit`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "same-origin" => Some(Self::SameOrigin),
            "include" => Some(Self::Include),
            "omit" => Some(Self::Omit),
            _ => None,
        }
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn to_web(self) -> web_sys::RequestCredentials {
        match self {
            Self::SameOrigin => web_sys::RequestCredentials::SameOrigin,
            Self::Include => web_sys::RequestCredentials::Include,
            Self::Omit => web_sys::RequestCredentials::Omit,
        }
    }
}

/// Shape of the request body, independent of its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Empty,
    Json,
    Text,
    Form,
}

#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Structured payload, serialized to JSON when the request is built.
    Json(serde_json::Value),
    /// Pre-encoded payload sent verbatim.
    Text(String),
    Form(FormBody),
}

impl RequestBody {
    pub fn kind(&self) -> BodyKind {
        match self {
            Self::Empty => BodyKind::Empty,
            Self::Json(_) => BodyKind::Json,
            Self::Text(_) => BodyKind::Text,
            Self::Form(_) => BodyKind::Form,
        }
    }
}

/// Option fields a page script passes to `apiRequest`, minus the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScriptOptions {
    pub method: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub credentials: Option<String>,
}

/// Options for a single `api_request` call.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Overrides merged over the default headers, in order.
    pub headers: Vec<(String, String)>,
    pub credentials: Credentials,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::default().method(HttpMethod::Post)
    }

    #[must_use]
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Attach a structured JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `value` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(value)?);
        Ok(self)
    }

    #[must_use]
    pub fn text(mut self, raw: impl Into<String>) -> Self {
        self.body = RequestBody::Text(raw.into());
        self
    }

    #[must_use]
    pub fn form(mut self, form: FormBody) -> Self {
        self.body = RequestBody::Form(form);
        self
    }

    /// Headers actually sent: defaults, then caller overrides, minus the
    /// content type for multipart bodies.
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned())];
        for (name, value) in &self.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        if self.body.kind() == BodyKind::Form {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(CONTENT_TYPE));
        }
        headers
    }

    /// Encoded string body, if the body is string-shaped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if JSON serialization fails.
    pub fn encoded_body(&self) -> Result<Option<String>, ApiError> {
        match &self.body {
            RequestBody::Json(value) => Ok(Some(serde_json::to_string(value)?)),
            RequestBody::Text(raw) => Ok(Some(raw.clone())),
            RequestBody::Empty | RequestBody::Form(_) => Ok(None),
        }
    }

    /// Build options from a page script's `fetch`-style fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` for an unknown method or credentials mode.
    pub fn from_script(script: ScriptOptions, body: RequestBody) -> Result<Self, ApiError> {
        let method = match script.method.as_deref() {
            Some(raw) => HttpMethod::parse(raw).ok_or_else(|| ApiError::Request(format!("unsupported method: {raw}")))?,
            None => HttpMethod::default(),
        };
        let credentials = match script.credentials.as_deref() {
            Some(raw) => {
                Credentials::parse(raw).ok_or_else(|| ApiError::Request(format!("unsupported credentials: {raw}")))?
            }
            None => Credentials::default(),
        };
        Ok(Self {
            method,
            headers: script.headers.into_iter().collect(),
            credentials,
            body,
        })
    }
}
