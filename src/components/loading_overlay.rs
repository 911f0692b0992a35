//! Full-page loading overlay.

use leptos::prelude::*;

use crate::kit::UiKit;
use crate::state::loading::LoadingState;

/// Blocking overlay with a spinner and the latest loading message.
///
/// Nothing is rendered until the first `show_loading`; after that the node
/// stays mounted and only toggles its `hidden` class.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let kit = expect_context::<UiKit>();
    let loading = kit.loading;

    let class = move || loading.with(LoadingState::class_name);
    let message = move || loading.with(|l| l.message.clone());

    view! {
        <Show when=move || loading.with(|l| l.mounted)>
            <div id="loading-overlay" class=class>
                <div style="text-align: center;">
                    <div class="spinner" style="margin: 0 auto 16px;"></div>
                    <div id="loading-message" style="color: var(--text-secondary); font-size: 0.9rem;">
                        {message}
                    </div>
                </div>
            </div>
        </Show>
    }
}
