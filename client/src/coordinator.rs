//! Single-flight coordination for session renewal.
//!
//! Access tokens are short-lived and refresh tokens are single-use, so two
//! concurrent renewal calls would race to redeem an already-rotated token
//! and one would fail, killing the session. The coordinator guarantees at
//! most one renewal is in flight per client instance: the first caller to
//! acquire the slot becomes the leader, everyone else parks on a channel
//! and replays with whatever the leader publishes.

use std::sync::Mutex;
use tokio::sync::oneshot;

use crate::error::ClientError;

/// Outcome of asking for the refresh slot
pub enum RefreshSlot {
    /// This caller performs the renewal and must call
    /// `release_refresh_slot` exactly once with the result
    Leader,
    /// A renewal is already in flight; await the shared result
    Follower(oneshot::Receiver<Result<String, ClientError>>),
}

#[derive(Default)]
struct Inner {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Result<String, ClientError>>>,
}

/// Session renewal coordinator
#[derive(Default)]
pub struct RefreshCoordinator {
    inner: Mutex<Inner>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the renewal slot, or queue behind the holder.
    ///
    /// Synchronous on purpose: the in-flight flag must be set before the
    /// caller reaches any await point, otherwise two near-simultaneous 401
    /// handlers could both observe "no refresh in flight" and both lead.
    pub fn acquire_refresh_slot(&self) -> RefreshSlot {
        let mut inner = self.inner.lock().expect("coordinator lock poisoned");

        if inner.in_flight {
            let (tx, rx) = oneshot::channel();
            inner.waiters.push(tx);
            return RefreshSlot::Follower(rx);
        }

        inner.in_flight = true;
        RefreshSlot::Leader
    }

    /// Publish the renewal outcome to every queued waiter and free the slot.
    ///
    /// All followers receive the same result: the fresh access token, or
    /// the single renewal error that dooms them uniformly.
    pub fn release_refresh_slot(&self, result: Result<String, ClientError>) {
        let waiters = {
            let mut inner = self.inner.lock().expect("coordinator lock poisoned");
            inner.in_flight = false;
            std::mem::take(&mut inner.waiters)
        };

        for waiter in waiters {
            // A dropped receiver means that request was abandoned; fine.
            let _ = waiter.send(result.clone());
        }
    }

    /// Whether a renewal is currently in flight
    pub fn is_refresh_in_flight(&self) -> bool {
        self.inner.lock().expect("coordinator lock poisoned").in_flight
    }
}
