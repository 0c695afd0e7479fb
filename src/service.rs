//! Schedule service: orchestration over the index and the broadcaster.
//!
//! [`ScheduleService`] wires the [`IntervalIndex`] and the
//! [`ConflictBroadcaster`] together behind a small validated API, and
//! provides the process-wide shared instance ([`ScheduleService::global`]).
//!
//! On a rejected insertion the service builds the human-readable conflict
//! description, broadcasts it, and surfaces the same description as a
//! typed failure. Broadcast problems never escalate past the broadcast —
//! an observer failing cannot make `add_task` fail for a different reason
//! than the conflict itself.
//!
//! # Locking
//! The index sits behind an `RwLock`: reads (`list_tasks`, `has_task`,
//! `task_count`) run concurrently, writes are exclusive. Observer
//! callbacks always run after the index lock is released.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::ScheduleError;
use crate::index::{InsertOutcome, IntervalIndex};
use crate::models::Task;
use crate::observer::{ConflictBroadcaster, ConflictObserver};

static GLOBAL: OnceCell<ScheduleService> = OnceCell::new();

/// Single-resource schedule with conflict notification.
#[derive(Default)]
pub struct ScheduleService {
    index: RwLock<IntervalIndex>,
    broadcaster: ConflictBroadcaster,
}

impl ScheduleService {
    /// Creates an isolated service instance.
    ///
    /// Embedders and tests that do not want process-wide state use this;
    /// everyone else goes through [`ScheduleService::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared instance.
    ///
    /// Initialized lazily and exactly once, race-free under concurrent
    /// first access. There is no teardown: once initialized, the instance
    /// lives for the rest of the process.
    pub fn global() -> &'static ScheduleService {
        GLOBAL.get_or_init(|| {
            info!("schedule service initialized");
            ScheduleService::new()
        })
    }

    /// Adds a validated task to the schedule.
    ///
    /// On an interval conflict, all registered observers are notified with
    /// a description naming both tasks and their ranges, and the same
    /// description is returned in [`ScheduleError::Conflict`]. No
    /// broadcast happens on success or on a duplicate-name rejection.
    pub fn add_task(&self, task: Task) -> Result<(), ScheduleError> {
        debug!(task = task.name(), "attempting to add task");

        // Scope the write lock: observers must never run under it.
        let outcome = self.index.write().insert(task);

        match outcome {
            InsertOutcome::Inserted => {
                info!(total = self.task_count(), "task added");
                Ok(())
            }
            InsertOutcome::Conflict { rejected, existing } => {
                let description = format!(
                    "Task '{}' ({}) conflicts with existing task '{}' ({})",
                    rejected.name(),
                    rejected.time_range(),
                    existing.name(),
                    existing.time_range()
                );
                if let Err(partial) = self.broadcaster.notify(&description) {
                    // Advisory only; the caller still sees the conflict.
                    warn!(%partial, "conflict broadcast incomplete");
                }
                Err(ScheduleError::Conflict { description })
            }
            InsertOutcome::DuplicateName { rejected, .. } => Err(ScheduleError::DuplicateName {
                name: rejected.name().to_string(),
            }),
        }
    }

    /// Removes a task by case-insensitive name.
    ///
    /// # Errors
    /// [`ScheduleError::TaskNotFound`] if no stored task matched.
    pub fn remove_task(&self, name: &str) -> Result<(), ScheduleError> {
        debug!(task = name, "attempting to remove task");
        if self.index.write().remove(name) {
            info!(task = name, remaining = self.task_count(), "task removed");
            Ok(())
        } else {
            Err(ScheduleError::TaskNotFound {
                name: name.trim().to_string(),
            })
        }
    }

    /// Snapshot of all tasks in start-time order.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.index.read().tasks().to_vec()
    }

    /// Case-insensitive existence check.
    pub fn has_task(&self, name: &str) -> bool {
        self.index.read().has(name)
    }

    /// Number of scheduled tasks.
    pub fn task_count(&self) -> usize {
        self.index.read().len()
    }

    /// Registers a conflict observer (idempotent by id).
    pub fn add_observer(&self, observer: Arc<dyn ConflictObserver>) {
        self.broadcaster.subscribe(observer);
    }

    /// Removes a conflict observer by id. Returns whether one was removed.
    pub fn remove_observer(&self, observer_id: &str) -> bool {
        self.broadcaster.unsubscribe(observer_id)
    }

    /// Number of registered conflict observers.
    pub fn observer_count(&self) -> usize {
        self.broadcaster.observer_count()
    }
}
