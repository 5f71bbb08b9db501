//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, window
//! events, globals, reload) from page and component logic so the gate can be
//! tested natively.

pub mod config;
pub mod credential_store;
pub mod env;
pub mod reload;
pub mod unauthorized;
