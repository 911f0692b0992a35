//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data so the queue/overlay rules can be tested natively;
//! `UiKit` wraps each model in an `RwSignal` for the components.

pub mod loading;
pub mod toast;
