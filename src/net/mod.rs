//! Networking modules for the fetch wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` describes outgoing requests, `status` decides which responses
//! the wrapper consumes, `api` performs the calls, and `types` holds the
//! payloads the kit itself reads.

pub mod api;
pub mod error;
pub mod request;
pub mod status;
pub mod types;
