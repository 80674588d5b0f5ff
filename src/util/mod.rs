//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision logic lives here so pages and components stay thin and the
//! interesting branches are testable without a browser runtime.

pub mod guard;
