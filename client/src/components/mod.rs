//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_gate` wraps the router and decides whether anything below it renders.

pub mod auth_gate;
