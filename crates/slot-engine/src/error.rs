//! Error types for slot-engine operations.

use thiserror::Error;

use crate::time::TimeOfDay;

/// Errors raised at the boundary of the scheduler.
///
/// Conflict detection and slot search never fail; only construction of
/// times, events and configuration can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// A malformed `HH:MM` string or an empty event name.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An event whose end time is not after its start time.
    #[error("Invalid range: end time {end} must be after start time {start}")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    /// A working-hours window or slot step that cannot produce any slot.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SchedulerError>;
