//! Reusable UI components shared across pages.

pub mod error_notice;
pub mod require_auth;
