//! Alternative slot search on a fixed grid inside working hours.
//!
//! Candidate start times begin at the working-hours start and advance by the
//! configured step. A candidate `[t, t + duration)` is accepted when it ends no
//! later than the working-hours end and overlaps none of the given events.
//! The search stops after [`MAX_SUGGESTIONS`] hits.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::config::SchedulerConfig;
use crate::event::Event;
use crate::time::TimeOfDay;

/// Upper bound on suggestions returned for one event.
pub const MAX_SUGGESTIONS: usize = 3;

/// A free slot proposed in place of a conflicting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Suggestion {
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Find up to [`MAX_SUGGESTIONS`] slots of `duration_minutes` that avoid every
/// event in `events`.
///
/// `events` need not be sorted. Every event counts as busy, including the one
/// being rescheduled. Returns an empty list when the working day has no gap
/// large enough on the grid.
pub fn find_alternative_slots(
    events: &[Event],
    config: &SchedulerConfig,
    duration_minutes: u16,
) -> Vec<Suggestion> {
    let work_start = config.working_hour_start.minutes();
    let work_end = config.working_hour_end.minutes();
    let step = config.slot_step_minutes.max(1);

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    let mut candidate_start = work_start;

    while candidate_start < work_end && suggestions.len() < MAX_SUGGESTIONS {
        let candidate_end = match candidate_start.checked_add(duration_minutes) {
            Some(end) if end <= work_end => end,
            // Later grid points only end later.
            _ => break,
        };

        let busy = events.iter().find(|event| {
            candidate_start < event.end().minutes() && candidate_end > event.start().minutes()
        });

        match busy {
            Some(event) => trace!(
                candidate = %TimeOfDay::from_minutes_unchecked(candidate_start),
                blocked_by = event.name(),
                "candidate rejected"
            ),
            None => suggestions.push(Suggestion {
                start: TimeOfDay::from_minutes_unchecked(candidate_start),
                end: TimeOfDay::from_minutes_unchecked(candidate_end),
            }),
        }

        candidate_start = match candidate_start.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    suggestions
}
