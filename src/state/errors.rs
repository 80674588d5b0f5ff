//! Transient error state with timed auto-dismissal.
//!
//! DESIGN
//! ======
//! At most one error is tracked at a time; a newer error overwrites the
//! previous one. Each `set_error` bumps an epoch counter and the auto-clear
//! timer only fires through [`ErrorsState::clear_if_current`], so a timer
//! scheduled for a superseded error observes a newer epoch and leaves the
//! current error alone.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use leptos::prelude::*;

use crate::net::api::GatewayError;

/// How long an error stays visible before it is auto-dismissed.
pub const ERROR_DISMISS_MS: u32 = 3000;

/// Error-store state: the current error, if any, plus the epoch used to
/// invalidate stale auto-clear timers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorsState {
    pub error: Option<GatewayError>,
    epoch: u64,
}

impl ErrorsState {
    /// Overwrite the current error. Returns the epoch of this error, to be
    /// passed back through [`ErrorsState::clear_if_current`] by its timer.
    pub fn set_error(&mut self, error: GatewayError) -> u64 {
        self.error = Some(error);
        self.epoch += 1;
        self.epoch
    }

    /// Clear the current error unconditionally.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clear the current error only if `epoch` is still the latest one.
    /// Timers for superseded errors end up here as no-ops.
    pub fn clear_if_current(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.error = None;
        }
    }
}

/// Record a gateway failure and schedule its auto-dismissal after
/// [`ERROR_DISMISS_MS`] on the browser event loop.
pub fn push_error(errors: RwSignal<ErrorsState>, error: GatewayError) {
    let mut epoch = 0;
    errors.update(|s| epoch = s.set_error(error));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ERROR_DISMISS_MS).await;
        errors.update(|s| s.clear_if_current(epoch));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = epoch;
}
