//! Clipboard copy with toast feedback.
//!
//! Failures are reported to the user and swallowed; callers only get a
//! `bool` back.

use crate::kit::UiKit;
use crate::state::toast::ToastKind;

/// Copy `text` and confirm with a toast. Returns whether the copy succeeded.
pub async fn copy_to_clipboard(kit: UiKit, text: &str) -> bool {
    let config = kit.config();
    match write_text(text).await {
        Ok(()) => {
            kit.show_toast("Copied!", ToastKind::Success, config.copied_toast_ms);
            true
        }
        Err(e) => {
            leptos::logging::warn!("clipboard write failed: {e}");
            kit.show_toast("Copy failed", ToastKind::Error, config.toast_ms);
            false
        }
    }
}

#[allow(clippy::unused_async)]
async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        if clipboard.is_undefined() {
            return Err("clipboard unavailable".to_owned());
        }
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
