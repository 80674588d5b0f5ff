//! REST calls for the auth gateway (`/api/login`, `/api/register`,
//! `/api/logout`).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`GatewayError`] and handed back to the call
//! site; nothing here panics or retries. Callers route errors into the error
//! store rather than propagating them further.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::SessionUser;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, RegisterRequest};

/// A failed gateway call. The only error kind the client models: network
/// trouble, a rejection from the server, or a malformed response body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never completed (network failure, serialization error).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-OK status.
    #[error("{0}")]
    Rejected(String),
    /// The response arrived but its body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("register failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Exchange credentials for a session via `POST /api/login`.
///
/// # Errors
///
/// Returns a [`GatewayError`] if the request fails, the server rejects the
/// credentials, or the response body cannot be decoded.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&body)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("login rejected with status {}", resp.status());
            return Err(GatewayError::Rejected(login_failed_message(resp.status())));
        }
        resp.json::<SessionUser>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}

/// Create an account and establish a session via `POST /api/register`.
///
/// The response shape is identical to [`login`]; a successful registration
/// immediately signs the user in.
///
/// # Errors
///
/// Returns a [`GatewayError`] if the request fails, the server rejects the
/// registration, or the response body cannot be decoded.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<SessionUser, GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/register")
            .json(&body)
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("register rejected with status {}", resp.status());
            return Err(GatewayError::Rejected(register_failed_message(resp.status())));
        }
        resp.json::<SessionUser>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}

/// Terminate the server-side session via `POST /api/logout`.
///
/// # Errors
///
/// Returns a [`GatewayError`] if the request fails or the server answers with
/// a non-OK status.
pub async fn logout() -> Result<(), GatewayError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/logout")
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("logout rejected with status {}", resp.status());
            return Err(GatewayError::Rejected(logout_failed_message(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(GatewayError::Transport("not available on server".to_owned()))
    }
}
