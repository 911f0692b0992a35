//! Browser navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are server-rendered, so navigation is a full `location.href`
//! change and the active nav link is marked directly in the DOM rather
//! than through a client router.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Links inside the top navigation bar.
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav a";
pub const ACTIVE_CLASS: &str = "active";

/// A nav link is active when its raw `href` attribute equals the path.
pub fn is_active_link(href: Option<&str>, pathname: &str) -> bool {
    href.is_some_and(|href| href == pathname)
}

/// Send the browser to `path` with a full page load.
pub fn navigate_to(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                leptos::logging::warn!("navigation to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Add `active` to every nav link pointing at the current path.
/// Returns how many links were marked.
pub fn highlight_active_nav() -> usize {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return 0;
        };
        let Some(document) = window.document() else {
            return 0;
        };
        let pathname = window.location().pathname().unwrap_or_default();
        let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) else {
            return 0;
        };

        let mut marked = 0;
        for index in 0..links.length() {
            let Some(link) = links.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if is_active_link(link.get_attribute("href").as_deref(), &pathname) {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
                marked += 1;
            }
        }
        marked
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Run `highlight_active_nav` once the DOM is parsed.
pub fn install_nav_highlight() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if document.ready_state() != "loading" {
            highlight_active_nav();
            return;
        }
        let on_ready = Closure::once_into_js(move || {
            highlight_active_nav();
        });
        let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    }
}
