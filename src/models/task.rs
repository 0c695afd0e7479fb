//! Task (scheduled interval) model.
//!
//! A task is an immutable, named wall-clock interval `[start, end)` with a
//! category tag. Validation happens once, at construction; an accepted task
//! can never be mutated into an invalid state.
//!
//! # Time Representation
//! Times are `chrono::NaiveTime` — time-of-day within a single schedule day.
//! Intervals are half-open: a task ending at 10:00 does not overlap one
//! starting at 10:00.
//!
//! # Reference
//! Allen (1983), "Maintaining Knowledge about Temporal Intervals"

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::Serialize;

use crate::error::ValidationError;

/// Time-of-day formatting used everywhere tasks are rendered.
const TIME_FORMAT: &str = "%H:%M";

/// Classification of a task.
///
/// A flat tag plus a small formatting table — categories differ only in
/// display text, not behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Scientific research and experimentation.
    Research,
    /// Physical fitness and health maintenance.
    Exercise,
    /// Equipment and facility maintenance.
    Maintenance,
}

impl Category {
    /// All known categories, in canonical order.
    pub const ALL: [Category; 3] = [Category::Research, Category::Exercise, Category::Maintenance];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Research => "Research",
            Category::Exercise => "Exercise",
            Category::Maintenance => "Maintenance",
        }
    }

    /// One-line description for detailed views.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Research => "Scientific research and experimentation",
            Category::Exercise => "Physical fitness and health maintenance",
            Category::Maintenance => "Equipment and facility maintenance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "research" => Ok(Category::Research),
            "exercise" => Ok(Category::Exercise),
            "maintenance" => Ok(Category::Maintenance),
            _ => Err(ValidationError::UnknownCategory {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// An immutable scheduled task.
///
/// Fields are private: the only way to obtain a `Task` is through
/// [`Task::new`], which enforces a non-empty name and a strictly positive
/// duration. Once accepted by an index, a task is owned there until
/// explicitly removed.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    name: String,
    start: NaiveTime,
    end: NaiveTime,
    category: Category,
}

impl Task {
    /// Creates a validated task.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyName`] if `name` trims to nothing.
    /// - [`ValidationError::NonPositiveDuration`] unless `start < end`
    ///   strictly (zero-length and backward intervals are both rejected).
    pub fn new(
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        category: Category,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if start >= end {
            return Err(ValidationError::NonPositiveDuration { start, end });
        }
        Ok(Self {
            name,
            start,
            end,
            category,
        })
    }

    /// Task name (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interval start (inclusive).
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Interval end (exclusive).
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Category tag.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Formatted `"HH:MM - HH:MM"` range.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }

    /// Half-open interval overlap test.
    ///
    /// True iff `self.start < other.end && other.start < self.end`.
    /// Boundary-adjacent tasks (one ending exactly when the other starts)
    /// do not overlap.
    pub fn overlaps_with(&self, other: &Task) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `name` matches this task's name, ignoring case and
    /// surrounding whitespace.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Equality by `(name, start, end)`; category is display metadata only.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.start == other.start && self.end == other.end
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}) [{} min]",
            self.category,
            self.name,
            self.time_range(),
            self.duration_minutes()
        )
    }
}
