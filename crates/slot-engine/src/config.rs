//! Scheduler configuration: the working-hours window and the suggestion grid.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};
use crate::time::TimeOfDay;

/// Default start of the working day (08:00).
pub const DEFAULT_WORKING_HOUR_START: TimeOfDay = TimeOfDay::at(8, 0);

/// Default end of the working day (18:00).
pub const DEFAULT_WORKING_HOUR_END: TimeOfDay = TimeOfDay::at(18, 0);

/// Default spacing of candidate start times when searching for alternatives.
pub const DEFAULT_SLOT_STEP_MINUTES: u16 = 30;

/// Configuration fixed for the lifetime of a [`Scheduler`](crate::Scheduler).
///
/// Deserializes from partial JSON: missing fields take their defaults, so
/// `{"working_hour_end": "17:00"}` yields 08:00-17:00 with a 30-minute step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// First candidate start time for suggestions (inclusive).
    pub working_hour_start: TimeOfDay,
    /// No suggestion may end after this time.
    pub working_hour_end: TimeOfDay,
    /// Grid spacing between candidate start times.
    pub slot_step_minutes: u16,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            working_hour_start: DEFAULT_WORKING_HOUR_START,
            working_hour_end: DEFAULT_WORKING_HOUR_END,
            slot_step_minutes: DEFAULT_SLOT_STEP_MINUTES,
        }
    }
}

impl SchedulerConfig {
    /// A validated configuration with the given working hours and the default step.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidConfig` if `end <= start`.
    pub fn new(working_hour_start: TimeOfDay, working_hour_end: TimeOfDay) -> Result<Self> {
        let config = Self {
            working_hour_start,
            working_hour_end,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the suggestion grid step.
    pub fn with_slot_step(mut self, minutes: u16) -> Self {
        self.slot_step_minutes = minutes;
        self
    }

    /// Check that the window is non-empty and the step is positive.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidConfig` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.working_hour_end <= self.working_hour_start {
            return Err(SchedulerError::InvalidConfig(format!(
                "working hours end {} must be after start {}",
                self.working_hour_end, self.working_hour_start
            )));
        }
        if self.slot_step_minutes == 0 {
            return Err(SchedulerError::InvalidConfig(
                "slot step must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }

    /// Length of the working-hours window in minutes.
    pub fn working_minutes(&self) -> u16 {
        self.working_hour_end
            .minutes()
            .saturating_sub(self.working_hour_start.minutes())
    }
}
