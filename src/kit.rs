//! The UI-utility context object.
//!
//! SYSTEM CONTEXT
//! ==============
//! `UiKit` owns the toast queue and the loading overlay for one page. The
//! application shell constructs it once, provides it through Leptos context,
//! and passes it to the request helpers; nothing here is process-global.
//!
//! TIMERS
//! ======
//! Toast dismissal runs on `gloo-timers` in hydrate builds. Other builds have
//! no event loop, so toasts stay queued until removed explicitly.

#[cfg(test)]
#[path = "kit_test.rs"]
mod kit_test;

use leptos::prelude::*;

use crate::config::UiKitConfig;
use crate::net::status::{ShortCircuit, classify_status};
use crate::state::loading::LoadingState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::debounce::Task;

#[derive(Clone, Copy)]
pub struct UiKit {
    pub toasts: RwSignal<ToastState>,
    pub loading: RwSignal<LoadingState>,
    /// Every full-page navigation this kit started, oldest first.
    pub redirects: RwSignal<Vec<String>>,
    config: StoredValue<UiKitConfig>,
}

impl Default for UiKit {
    fn default() -> Self {
        Self::new(UiKitConfig::default())
    }
}

impl UiKit {
    pub fn new(config: UiKitConfig) -> Self {
        Self {
            toasts: RwSignal::new(ToastState::default()),
            loading: RwSignal::new(LoadingState::default()),
            redirects: RwSignal::new(Vec::new()),
            config: StoredValue::new(config),
        }
    }

    /// Make this kit available to components via `expect_context::<UiKit>()`.
    pub fn provide(self) -> Self {
        provide_context(self);
        self
    }

    pub fn config(&self) -> UiKitConfig {
        self.config.get_value()
    }

    /// Queue a toast and schedule its fade and removal. Returns the toast id.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        let message = message.into();
        let mut id = 0;
        self.toasts.update(|t| id = t.push(message, kind, duration_ms));

        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::callback::Timeout;

            let toasts = self.toasts;
            let fade_ms = self.config.with_value(|c| c.toast_fade_ms);
            Timeout::new(duration_ms, move || {
                toasts.update(|t| {
                    t.begin_leaving(id);
                });
                Timeout::new(fade_ms, move || {
                    toasts.update(|t| {
                        t.remove(id);
                    });
                })
                .forget();
            })
            .forget();
        }

        id
    }

    /// Info toast with the configured default duration.
    pub fn toast(&self, message: impl Into<String>) -> u64 {
        let duration_ms = self.config.with_value(|c| c.toast_ms);
        self.show_toast(message, ToastKind::Info, duration_ms)
    }

    /// One long-lived warning toast per entry.
    pub fn show_warnings(&self, warnings: &[String]) -> usize {
        let duration_ms = self.config.with_value(|c| c.warning_toast_ms);
        for warning in warnings {
            self.show_toast(warning.clone(), ToastKind::Warning, duration_ms);
        }
        warnings.len()
    }

    /// Apply the shared status policy to a response status.
    ///
    /// Returns the short-circuit that consumed the response, if any.
    pub fn intercept_status(&self, status: u16) -> Option<ShortCircuit> {
        let short = classify_status(status)?;
        self.handle_short_circuit(short);
        Some(short)
    }

    /// React to a response the request wrapper swallowed.
    pub fn handle_short_circuit(&self, short: ShortCircuit) {
        match short {
            ShortCircuit::Unauthorized => {
                let login_path = self.config.with_value(|c| c.login_path.clone());
                self.navigate(login_path);
            }
            ShortCircuit::QuotaExhausted => {
                let (message, duration_ms) = self
                    .config
                    .with_value(|c| (c.quota_exhausted_message.clone(), c.toast_ms));
                self.show_toast(message, ToastKind::Warning, duration_ms);
            }
        }
    }

    /// Full-page navigation to `path`, recorded in `redirects`.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        crate::util::nav::navigate_to(&path);
        self.redirects.update(|r| r.push(path));
    }

    /// `util::debounce` with the configured delay.
    pub fn debounce<A, F>(&self, f: F) -> impl Fn(A) + use<A, F>
    where
        A: 'static,
        F: Fn(A) + 'static,
    {
        let delay_ms = self.config.with_value(|c| c.debounce_ms);
        crate::util::debounce::debounce(delay_ms, f)
    }

    /// `util::debounce_with` with the configured delay.
    pub fn debounce_with<A, F, S>(&self, schedule: S, f: F) -> impl Fn(A) + use<A, F, S>
    where
        A: 'static,
        F: Fn(A) + 'static,
        S: Fn(u32, Task) + 'static,
    {
        let delay_ms = self.config.with_value(|c| c.debounce_ms);
        crate::util::debounce::debounce_with(schedule, delay_ms, f)
    }

    pub fn show_loading(&self, message: impl Into<String>) {
        let message = message.into();
        self.loading.update(|l| l.show(message));
    }

    /// Show the overlay with the configured default message.
    pub fn show_default_loading(&self) {
        let message = self.config.with_value(|c| c.loading_message.clone());
        self.show_loading(message);
    }

    pub fn hide_loading(&self) {
        self.loading.update(LoadingState::hide);
    }
}

/// Fetch the kit provided by the application shell.
///
/// # Panics
///
/// Panics if no `UiKit` was provided higher in the component tree.
pub fn use_ui_kit() -> UiKit {
    expect_context::<UiKit>()
}
