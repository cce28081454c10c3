//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns screen-scoped orchestration and delegates rendering
//! details to `components`.

pub mod login;
