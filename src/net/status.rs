//! Central HTTP status policy for every request made through `api`.
//!
//! Auth and quota handling live here so call sites only ever see the
//! statuses they care about.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// A response the wrapper consumed instead of returning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortCircuit {
    /// 401: the browser is sent to the login page.
    Unauthorized,
    /// 429: the user is warned that their quota is spent.
    QuotaExhausted,
}

/// Decide whether `status` ends the request inside the wrapper.
pub fn classify_status(status: u16) -> Option<ShortCircuit> {
    match status {
        STATUS_UNAUTHORIZED => Some(ShortCircuit::Unauthorized),
        STATUS_TOO_MANY_REQUESTS => Some(ShortCircuit::QuotaExhausted),
        _ => None,
    }
}

/// Result of a request that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Response(T),
    Unauthorized,
    QuotaExhausted,
}

impl<T> ApiOutcome<T> {
    pub fn is_short_circuit(&self) -> bool {
        !matches!(self, Self::Response(_))
    }

    /// Collapse short-circuits to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Response(value) => Some(value),
            Self::Unauthorized | Self::QuotaExhausted => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Response(value) => ApiOutcome::Response(f(value)),
            Self::Unauthorized => ApiOutcome::Unauthorized,
            Self::QuotaExhausted => ApiOutcome::QuotaExhausted,
        }
    }
}

impl<T> From<ShortCircuit> for ApiOutcome<T> {
    fn from(short: ShortCircuit) -> Self {
        match short {
            ShortCircuit::Unauthorized => Self::Unauthorized,
            ShortCircuit::QuotaExhausted => Self::QuotaExhausted,
        }
    }
}
