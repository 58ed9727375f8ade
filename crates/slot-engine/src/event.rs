//! Named, immutable same-day events.
//!
//! An [`Event`] is validated once at construction: a non-blank name and an end
//! time strictly after the start time. Its duration is derived from the two
//! times and never changes afterwards.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SchedulerError};
use crate::time::TimeOfDay;

/// One scheduled interval `[start, end)` on the reference day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    name: String,
    start: TimeOfDay,
    end: TimeOfDay,
    duration_minutes: u16,
}

impl Event {
    /// Create an event from already-parsed times.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidInput` if `name` is blank, and
    /// `SchedulerError::InvalidRange` if `end <= start`.
    pub fn new(name: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchedulerError::InvalidInput(
                "event name must not be empty".to_string(),
            ));
        }
        if end <= start {
            return Err(SchedulerError::InvalidRange { start, end });
        }

        Ok(Self {
            name,
            start,
            end,
            duration_minutes: end.minutes() - start.minutes(),
        })
    }

    /// Create an event from `HH:MM` strings, as supplied by a form or CLI.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidInput` for a malformed time or blank
    /// name, and `SchedulerError::InvalidRange` if `end <= start`.
    pub fn parse(name: impl Into<String>, start: &str, end: &str) -> Result<Self> {
        let start = TimeOfDay::parse(start)?;
        let end = TimeOfDay::parse(end)?;
        Self::new(name, start, end)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the event in minutes. Always positive.
    pub fn duration_minutes(&self) -> u16 {
        self.duration_minutes
    }

    /// Whether the two half-open intervals share at least one minute.
    ///
    /// Back-to-back events (one ends exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Minutes shared by the two intervals, `0` when they do not overlap.
    pub fn overlap_minutes(&self, other: &Event) -> u16 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.minutes().saturating_sub(start.minutes())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({} - {})", self.name, self.start, self.end)
    }
}
