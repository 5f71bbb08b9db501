//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render inside `AuthGate`; none of them repeat the credential check.

pub mod admin_home;
