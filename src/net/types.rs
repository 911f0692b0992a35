//! Wire DTOs for the endpoints the kit itself calls.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by `/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
    /// Whether the user supplied their own model API key.
    pub has_api_key: bool,
}

/// Remaining per-resource quota. Max values are hidden by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaRemaining {
    pub remaining_chat: i64,
    pub remaining_images: i64,
    pub remaining_quizzes: i64,
}

/// Payload of `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeResponse {
    pub user: Option<CurrentUser>,
    pub quota: Option<QuotaRemaining>,
    /// Human-readable low-quota warnings; one toast each.
    pub warnings: Vec<String>,
}
