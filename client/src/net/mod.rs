//! Networking modules for the admin backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` attaches the stored credential to requests and reports 401s to the
//! unauthorized hub; `types` defines the wire schema.

pub mod api;
pub mod types;
