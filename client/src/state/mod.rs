//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The gate's state machine lives here, apart from the component, so every
//! transition can be exercised without a browser.

pub mod auth;
