//! Page-level toast container.

use leptos::prelude::*;

use crate::kit::UiKit;
use crate::state::toast::Toast;

/// Renders every queued toast in call order.
///
/// Toast nodes are keyed by id, so a toast keeps its node while it fades and
/// its siblings are untouched when it is removed.
#[component]
pub fn ToastHost() -> impl IntoView {
    let kit = expect_context::<UiKit>();
    let toasts = kit.toasts;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = toast.class_name();
                    let message = toast.message;
                    let style = move || {
                        toasts.with(|t| t.toasts.iter().find(|x| x.id == id).map_or("", Toast::style))
                    };
                    view! {
                        <div class=class style=style>
                            {message}
                        </div>
                    }
                }
            />
        </div>
    }
}
