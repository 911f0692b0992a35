//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Toasts are appended in call order and retired independently: each one
//! goes `visible -> leaving -> removed` on its own timers, so the queue never
//! reorders or batches removals.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use serde::{Deserialize, Serialize};

/// Default on-screen time for a toast, before the fade starts.
pub const DEFAULT_TOAST_MS: u32 = 4000;
/// Length of the fade-out transition between `leaving` and removal.
pub const TOAST_FADE_MS: u32 = 300;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier used by the stylesheet (`toast-info`, `toast-error`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Parse a kind name, falling back to `Info` for anything unknown.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "warning" => Self::Warning,
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// A single notification in the container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
    /// Set once the display time has elapsed; drives the fade styles.
    pub leaving: bool,
}

impl Toast {
    /// Class attribute for the toast node.
    pub fn class_name(&self) -> String {
        format!("toast toast-{}", self.kind.as_str())
    }

    /// Inline style for the toast node. Empty while visible.
    pub fn style(&self) -> &'static str {
        if self.leaving {
            "opacity: 0; transform: translateX(100%);"
        } else {
            ""
        }
    }

    /// Milliseconds from creation until the node leaves the tree.
    pub fn lifetime_ms(&self, fade_ms: u32) -> u32 {
        self.duration_ms.saturating_add(fade_ms)
    }
}

/// Append-only list of live toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            duration_ms,
            leaving: false,
        });
        id
    }

    /// Start the fade for `id`. Returns `false` if the toast is gone.
    pub fn begin_leaving(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    /// Drop `id` from the container. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn is_leaving(&self, id: u64) -> bool {
        self.toasts.iter().any(|t| t.id == id && t.leaving)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
