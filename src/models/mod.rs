//! Schedule domain models.
//!
//! Defines the task entity and its category tag. The scheduling core
//! ([`crate::index`]) stores these; everything here is plain data with
//! construction-time validation.

mod task;

pub use task::{Category, Task};
