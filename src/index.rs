//! Interval index: the scheduling core.
//!
//! An ordered collection of non-overlapping tasks for a single resource.
//! The index owns two invariants:
//!
//! 1. No two stored tasks overlap (half-open interval semantics).
//! 2. No two stored tasks share a case-insensitive name.
//!
//! Both are enforced at [`IntervalIndex::insert`]; a rejected insertion
//! never mutates the index. Rejections are normal return values, not
//! errors — the orchestration layer decides which become user-facing
//! failures.
//!
//! # Complexity
//! O(n) scan per insertion. The sequence is kept sorted by start time, so
//! the first overlap found in iteration order is deterministically the
//! conflicting task with the lowest start time.

use crate::models::Task;

/// Result of an insertion attempt.
///
/// The rejected variants hand the submitted task back to the caller
/// together with a clone of the stored task that blocked it (the
/// "witness"), so conflict reports can name both sides.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    /// Task was accepted and stored.
    Inserted,
    /// Task overlaps a stored task. `existing` is the stored task with the
    /// lowest start time among all overlapping candidates.
    Conflict {
        /// The task that was not inserted.
        rejected: Task,
        /// The stored task it collided with.
        existing: Task,
    },
    /// A stored task already uses this name (case-insensitive), even
    /// though the intervals do not overlap.
    DuplicateName {
        /// The task that was not inserted.
        rejected: Task,
        /// The stored task holding the name.
        existing: Task,
    },
}

impl InsertOutcome {
    /// Whether the insertion succeeded.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Ordered set of non-overlapping tasks, sorted by start time ascending
/// (ties keep insertion order).
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    tasks: Vec<Task>,
}

impl IntervalIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to insert a task.
    ///
    /// Checks the name-uniqueness invariant first, then scans the stored
    /// sequence (start-time order) for the first overlap. On success the
    /// task is placed at its sorted position.
    pub fn insert(&mut self, task: Task) -> InsertOutcome {
        if let Some(existing) = self.find(task.name()) {
            return InsertOutcome::DuplicateName {
                existing: existing.clone(),
                rejected: task,
            };
        }

        if let Some(existing) = self.tasks.iter().find(|t| t.overlaps_with(&task)) {
            return InsertOutcome::Conflict {
                existing: existing.clone(),
                rejected: task,
            };
        }

        // Insert after all tasks with start <= new start, preserving
        // insertion order among equal starts.
        let pos = self.tasks.partition_point(|t| t.start() <= task.start());
        self.tasks.insert(pos, task);
        InsertOutcome::Inserted
    }

    /// Removes at most one task by case-insensitive name match.
    ///
    /// Returns whether a removal occurred. Absence is a boolean status,
    /// not an error.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.tasks.iter().position(|t| t.name_matches(name)) {
            Some(pos) => {
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive existence check.
    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Finds a stored task by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name_matches(name))
    }

    /// Stored tasks in start-time order.
    ///
    /// A borrowed view; iterate freely without affecting the index.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
