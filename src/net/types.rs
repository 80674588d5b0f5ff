//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's auth payloads exactly so serde round-trips
//! stay lossless; the rest of the client treats `SessionUser` as opaque
//! identity data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Session payload returned by `POST /api/login` and `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Server-assigned numeric user id.
    pub id: i64,
    pub email: String,
    pub username: String,
    /// Bearer token for authenticated API calls.
    pub access_token: String,
}

/// Request body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
