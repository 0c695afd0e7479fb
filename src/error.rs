//! Error taxonomy for schedule operations.
//!
//! Two layers:
//! - [`ValidationError`]: malformed construction input, detected
//!   synchronously, never stored.
//! - [`ScheduleError`]: rejected schedule mutations (conflict, duplicate
//!   name, not found). All recoverable — the caller may adjust and retry;
//!   a rejected task is never partially applied.
//!
//! Observer delivery failures are deliberately not here: they stay inside
//! the broadcast layer (see [`crate::observer::PartialDeliveryFailure`])
//! and are never escalated to schedule callers.

use chrono::NaiveTime;
use thiserror::Error;

/// Malformed task-construction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Task name is empty or whitespace-only.
    #[error("task name cannot be empty")]
    EmptyName,

    /// Interval is zero-length or backward (`start >= end`).
    #[error("start time {start} must be before end time {end}")]
    NonPositiveDuration {
        /// Offending start time.
        start: NaiveTime,
        /// Offending end time.
        end: NaiveTime,
    },

    /// Observer id is empty or whitespace-only.
    #[error("observer id cannot be empty")]
    EmptyObserverId,

    /// A raw time string failed to parse as `HH:MM`.
    #[error("invalid time '{input}' (expected HH:MM)")]
    InvalidTime {
        /// The rejected input.
        input: String,
    },

    /// A raw category string matched no known category.
    #[error("unknown category '{input}' (valid: Research, Exercise, Maintenance)")]
    UnknownCategory {
        /// The rejected input.
        input: String,
    },
}

/// A rejected schedule mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Insertion overlapped an existing task. Carries the full
    /// human-readable description naming both tasks and their ranges —
    /// the same text that was broadcast to conflict observers.
    #[error("schedule conflict detected: {description}")]
    Conflict {
        /// Both tasks' names and formatted time ranges.
        description: String,
    },

    /// A task with the same (case-insensitive) name is already stored,
    /// even though the intervals do not overlap.
    #[error("a task named '{name}' already exists")]
    DuplicateName {
        /// The duplicated name, as submitted.
        name: String,
    },

    /// Removal referenced a name not present in the schedule.
    #[error("task not found: {name}")]
    TaskNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Construction input was rejected before reaching the index.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
