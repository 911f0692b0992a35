//! Full-page loading overlay state.
//!
//! The overlay is mounted lazily on the first `show` and then reused; there
//! is no request counting, so the most recent message wins.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

pub const DEFAULT_LOADING_MESSAGE: &str = "Processing...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    /// Whether the overlay node has been created. Never reset.
    pub mounted: bool,
    pub visible: bool,
    pub message: String,
}

impl LoadingState {
    pub fn show(&mut self, message: impl Into<String>) {
        self.mounted = true;
        self.visible = true;
        self.message = message.into();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Class attribute for the overlay root.
    pub fn class_name(&self) -> &'static str {
        if self.visible {
            "loading-overlay"
        } else {
            "loading-overlay hidden"
        }
    }
}
