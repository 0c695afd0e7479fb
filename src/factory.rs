//! Validated task construction from raw user input.
//!
//! Presentation layers hand this module strings (category label, name,
//! `HH:MM` times); it either produces a fully validated [`Task`] or one of
//! the [`ValidationError`] variants. Nothing malformed ever reaches the
//! index.

use chrono::NaiveTime;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Category, Task};

/// Parses a wall-clock time of day in `HH:MM` form.
///
/// # Errors
/// [`ValidationError::InvalidTime`] carrying the rejected input.
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| ValidationError::InvalidTime {
        input: trimmed.to_string(),
    })
}

/// Builds a validated task from raw strings.
///
/// Category lookup is case-insensitive (see [`Category::ALL`] for the
/// valid labels). Times must parse as `HH:MM`; all interval and name
/// rules of [`Task::new`] apply.
pub fn build_task(
    category: &str,
    name: &str,
    start: &str,
    end: &str,
) -> Result<Task, ValidationError> {
    debug!(category, name, "building task from raw input");
    let category: Category = category.parse()?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    Task::new(name, start, end, category)
}
