//! Leptos components that render the kit's state.

pub mod loading_overlay;
pub mod toast_host;

use leptos::prelude::*;

use loading_overlay::LoadingOverlay;
use toast_host::ToastHost;

/// Everything the kit draws on a page. Expects a provided `UiKit`.
#[component]
pub fn PageKitHost() -> impl IntoView {
    view! {
        <ToastHost/>
        <LoadingOverlay/>
    }
}
