//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns so page scripts get
//! one small call per task and native builds still compile and test them.

pub mod clipboard;
pub mod date;
pub mod debounce;
pub mod dialog;
pub mod html;
pub mod nav;
