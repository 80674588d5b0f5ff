//! Client-side stores shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is a plain state struct held in an `RwSignal` provided via
//! context by `app::App`. The transition methods on the structs are the only
//! writer path; pages and guards are read-only observers.

pub mod errors;
pub mod session;
