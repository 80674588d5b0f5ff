//! Networking modules for the auth HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/register/logout REST calls and `types` defines
//! the request/response schema shared with the server.

pub mod api;
pub mod types;
