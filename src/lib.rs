//! Single-resource daily interval scheduler.
//!
//! Accepts named, time-bounded tasks, guarantees that no two accepted
//! tasks overlap in time, and broadcasts a conflict report to registered
//! observers whenever an insertion is rejected. One schedule covers one
//! resource for one day — no persistence, recurrence, or timezones.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Category`
//! - **`index`**: Ordered non-overlapping interval store (`IntervalIndex`)
//! - **`observer`**: Conflict fan-out (`ConflictBroadcaster`, `ConflictObserver`)
//! - **`service`**: Orchestration and the process-wide instance (`ScheduleService`)
//! - **`factory`**: Validated task construction from raw strings
//! - **`error`**: `ValidationError` / `ScheduleError` taxonomy
//!
//! # Example
//!
//! ```
//! use dayplan::factory::build_task;
//! use dayplan::service::ScheduleService;
//!
//! let service = ScheduleService::new();
//! service
//!     .add_task(build_task("Exercise", "Morning Run", "06:30", "07:15").unwrap())
//!     .unwrap();
//!
//! // Overlapping insertion is rejected; the schedule is unchanged.
//! let rejected = build_task("Research", "Lab Work", "07:00", "08:00").unwrap();
//! assert!(service.add_task(rejected).is_err());
//! assert_eq!(service.task_count(), 1);
//! ```
//!
//! # Reference
//!
//! - Allen (1983), "Maintaining Knowledge about Temporal Intervals"

pub mod error;
pub mod factory;
pub mod index;
pub mod models;
pub mod observer;
pub mod service;
