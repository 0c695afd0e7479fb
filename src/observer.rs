//! Conflict broadcast: fan-out notification of schedule conflicts.
//!
//! A [`ConflictBroadcaster`] holds a dynamic registry of
//! [`ConflictObserver`]s and delivers conflict messages to all of them in
//! registration order. Delivery is best-effort and exhaustive: one
//! observer failing never stops delivery to the rest, and the aggregate
//! outcome is only ever advisory.
//!
//! # Concurrency
//! The registry is snapshotted at the start of every broadcast, so a
//! subscribe or unsubscribe racing a `notify` can never make that
//! broadcast fail, skip an observer, or deliver twice. Registry handles
//! are `Arc`s — the broadcaster does not own its observers and they may
//! be shared with other components.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::ValidationError;

/// Failure reported by a single observer during delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DeliveryError {
    message: String,
}

impl DeliveryError {
    /// Creates a delivery error with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Advisory outcome of a broadcast in which some deliveries failed.
///
/// Per-observer failures are already logged by the broadcaster; this
/// aggregate is reported to the caller but never escalated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{failed} of {attempted} conflict deliveries failed")]
pub struct PartialDeliveryFailure {
    /// Number of observers whose delivery failed.
    pub failed: usize,
    /// Total number of delivery attempts.
    pub attempted: usize,
}

/// A party interested in schedule conflicts.
///
/// Implementations must be `Send + Sync`: the broadcaster may be shared
/// across threads and observers are invoked outside any registry lock.
pub trait ConflictObserver: Send + Sync {
    /// Unique identifier, used for registration and diagnostics.
    fn observer_id(&self) -> &str;

    /// Called with the conflict description when an insertion is rejected.
    fn on_conflict(&self, message: &str) -> Result<(), DeliveryError>;
}

/// Fan-out notifier with an idempotent, id-keyed registry.
#[derive(Default)]
pub struct ConflictBroadcaster {
    observers: RwLock<Vec<Arc<dyn ConflictObserver>>>,
}

impl ConflictBroadcaster {
    /// Creates a broadcaster with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer.
    ///
    /// Re-subscribing an id that is already registered is a no-op, not an
    /// error.
    pub fn subscribe(&self, observer: Arc<dyn ConflictObserver>) {
        let mut observers = self.observers.write();
        let id = observer.observer_id();
        if observers.iter().any(|o| o.observer_id() == id) {
            debug!(observer = id, "observer already registered, ignoring");
            return;
        }
        info!(
            observer = id,
            total = observers.len() + 1,
            "observer registered"
        );
        observers.push(observer);
    }

    /// Removes an observer by id. Returns whether anything was removed.
    pub fn unsubscribe(&self, observer_id: &str) -> bool {
        let mut observers = self.observers.write();
        let before = observers.len();
        observers.retain(|o| o.observer_id() != observer_id);
        let removed = observers.len() < before;
        if removed {
            info!(
                observer = observer_id,
                remaining = observers.len(),
                "observer removed"
            );
        } else {
            debug!(observer = observer_id, "observer not found for removal");
        }
        removed
    }

    /// Delivers `message` to every registered observer in registration
    /// order.
    ///
    /// Works on a snapshot of the registry taken under a short read lock,
    /// then invokes observers with no lock held. Per-observer failures are
    /// logged and do not stop delivery.
    ///
    /// Returns `Ok(attempted)` when every delivery succeeded (an empty
    /// registry is a silent `Ok(0)`), or a [`PartialDeliveryFailure`]
    /// counting the failures out of the total.
    pub fn notify(&self, message: &str) -> Result<usize, PartialDeliveryFailure> {
        let snapshot: Vec<Arc<dyn ConflictObserver>> = self.observers.read().clone();
        if snapshot.is_empty() {
            debug!("no observers to notify");
            return Ok(0);
        }

        let attempted = snapshot.len();
        let mut failed = 0;
        for observer in &snapshot {
            if let Err(err) = observer.on_conflict(message) {
                failed += 1;
                warn!(
                    observer = observer.observer_id(),
                    error = %err,
                    "conflict delivery failed"
                );
            }
        }

        if failed > 0 {
            Err(PartialDeliveryFailure { failed, attempted })
        } else {
            Ok(attempted)
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }
}

/// Built-in observer that records conflicts in the log.
#[derive(Debug)]
pub struct LogNotifier {
    id: String,
}

impl LogNotifier {
    /// Creates a notifier with the given id.
    ///
    /// # Errors
    /// [`ValidationError::EmptyObserverId`] if `id` trims to nothing.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::EmptyObserverId);
        }
        Ok(Self { id })
    }
}

impl ConflictObserver for LogNotifier {
    fn observer_id(&self) -> &str {
        &self.id
    }

    fn on_conflict(&self, message: &str) -> Result<(), DeliveryError> {
        warn!(notifier = %self.id, "schedule conflict detected: {message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Test double recording every delivery, optionally failing each one.
    struct RecordingObserver {
        id: String,
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingObserver {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing(id: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().len()
        }
    }

    impl ConflictObserver for RecordingObserver {
        fn observer_id(&self) -> &str {
            &self.id
        }

        fn on_conflict(&self, message: &str) -> Result<(), DeliveryError> {
            self.calls.lock().push(message.to_string());
            if self.fail {
                Err(DeliveryError::new("simulated failure"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_subscribe_and_count() {
        let broadcaster = ConflictBroadcaster::new();
        broadcaster.subscribe(RecordingObserver::new("alpha"));
        broadcaster.subscribe(RecordingObserver::new("beta"));
        assert_eq!(broadcaster.observer_count(), 2);
    }

    #[test]
    fn test_resubscribe_same_id_is_noop() {
        let broadcaster = ConflictBroadcaster::new();
        let first = RecordingObserver::new("alpha");
        broadcaster.subscribe(first.clone());
        broadcaster.subscribe(RecordingObserver::new("alpha"));
        assert_eq!(broadcaster.observer_count(), 1);

        // The original registration is the one that receives deliveries.
        let _ = broadcaster.notify("msg");
        assert_eq!(first.call_count(), 1);
    }

    #[test]
    fn test_unsubscribe_reports_removal() {
        let broadcaster = ConflictBroadcaster::new();
        broadcaster.subscribe(RecordingObserver::new("alpha"));

        assert!(broadcaster.unsubscribe("alpha"));
        assert_eq!(broadcaster.observer_count(), 0);
        assert!(!broadcaster.unsubscribe("alpha"));
    }

    #[test]
    fn test_notify_empty_registry_is_silent() {
        let broadcaster = ConflictBroadcaster::new();
        assert_eq!(broadcaster.notify("nobody listening"), Ok(0));
    }

    #[test]
    fn test_notify_reaches_all_in_registration_order() {
        let broadcaster = ConflictBroadcaster::new();
        let a = RecordingObserver::new("a");
        let b = RecordingObserver::new("b");
        let c = RecordingObserver::new("c");
        broadcaster.subscribe(a.clone());
        broadcaster.subscribe(b.clone());
        broadcaster.subscribe(c.clone());

        assert_eq!(broadcaster.notify("overlap at 09:00"), Ok(3));
        for obs in [&a, &b, &c] {
            assert_eq!(obs.calls.lock().as_slice(), ["overlap at 09:00"]);
        }
    }

    #[test]
    fn test_failure_does_not_stop_delivery() {
        let broadcaster = ConflictBroadcaster::new();
        let first = RecordingObserver::new("first");
        let bad = RecordingObserver::failing("bad");
        let last = RecordingObserver::new("last");
        broadcaster.subscribe(first.clone());
        broadcaster.subscribe(bad.clone());
        broadcaster.subscribe(last.clone());

        let err = broadcaster.notify("msg").unwrap_err();
        assert_eq!(
            err,
            PartialDeliveryFailure {
                failed: 1,
                attempted: 3
            }
        );
        // All three saw the message despite the failure in the middle.
        assert_eq!(first.call_count(), 1);
        assert_eq!(bad.call_count(), 1);
        assert_eq!(last.call_count(), 1);
    }

    #[test]
    fn test_all_failing() {
        let broadcaster = ConflictBroadcaster::new();
        broadcaster.subscribe(RecordingObserver::failing("x"));
        broadcaster.subscribe(RecordingObserver::failing("y"));

        let err = broadcaster.notify("msg").unwrap_err();
        assert_eq!(err.failed, 2);
        assert_eq!(err.attempted, 2);
        assert_eq!(err.to_string(), "2 of 2 conflict deliveries failed");
    }

    #[test]
    fn test_log_notifier_id_validation() {
        assert!(LogNotifier::new("mission-control").is_ok());
        assert_eq!(
            LogNotifier::new("   ").unwrap_err(),
            ValidationError::EmptyObserverId
        );
    }

    #[test]
    fn test_log_notifier_trims_id() {
        let notifier = LogNotifier::new("  ops  ").unwrap();
        assert_eq!(notifier.observer_id(), "ops");
        assert!(notifier.on_conflict("msg").is_ok());
    }
}
