//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, gateway calls,
//! store transitions) and delegates shared rendering to `components`.

pub mod feed;
pub mod login;
pub mod register;
