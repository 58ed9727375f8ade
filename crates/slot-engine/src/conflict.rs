//! Detect overlapping neighbours in a start-sorted event list.
//!
//! Only adjacent pairs are compared: `events[i]` conflicts with `events[i + 1]`
//! when `events[i].end > events[i + 1].start`. An event that overlaps a
//! non-adjacent one (a long event spanning two short, mutually disjoint events)
//! is reported against its immediate neighbour only.
//! Back-to-back events (one ends exactly when the next starts) are NOT conflicts.

use serde::Serialize;

use crate::config::SchedulerConfig;
use crate::event::Event;
use crate::suggest::{self, Suggestion};

/// Two neighbouring events whose intervals overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// The event that starts first (or was inserted first on a tie).
    pub earlier: Event,
    /// The event that starts second; suggestions are computed for it.
    pub later: Event,
    pub overlap_minutes: u16,
    /// At most [`MAX_SUGGESTIONS`](crate::suggest::MAX_SUGGESTIONS) alternative slots for `later`.
    pub suggestions: Vec<Suggestion>,
}

/// Iterate over adjacent pairs `(events[i], events[i + 1])` that overlap.
///
/// `events` must already be sorted by start time.
pub fn adjacent_overlaps(events: &[Event]) -> impl Iterator<Item = (&Event, &Event)> {
    events.windows(2).filter_map(|pair| match pair {
        [earlier, later] if earlier.end() > later.start() => Some((earlier, later)),
        _ => None,
    })
}

/// Find every adjacent conflict in a start-sorted list and attach suggestions
/// for the later event of each pair.
///
/// Suggestions avoid all of `events`, not just the conflicting pair.
pub fn find_conflicts(events: &[Event], config: &SchedulerConfig) -> Vec<Conflict> {
    adjacent_overlaps(events)
        .map(|(earlier, later)| Conflict {
            earlier: earlier.clone(),
            later: later.clone(),
            overlap_minutes: earlier.overlap_minutes(later),
            suggestions: suggest::find_alternative_slots(events, config, later.duration_minutes()),
        })
        .collect()
}
