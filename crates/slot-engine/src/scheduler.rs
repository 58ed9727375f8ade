//! The event collection and its insertion operation.
//!
//! A [`Scheduler`] owns its events and keeps them sorted by start time. Every
//! insertion re-sorts the whole list and rescans it from scratch; nothing is
//! cached between calls and events are never removed.

use tracing::debug;

use crate::config::SchedulerConfig;
use crate::conflict::{self, Conflict};
use crate::error::Result;
use crate::event::Event;
use crate::suggest::{self, Suggestion};

/// An in-memory, single-day schedule.
///
/// `add_event` takes `&mut self`, so append, sort and scan always run as one
/// exclusive step. Wrap the scheduler in a `Mutex` to share it across threads.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
    events: Vec<Event>,
}

impl Scheduler {
    /// An empty scheduler with the default 08:00-18:00 working hours.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty scheduler with custom working hours and slot step.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidConfig` if `config` fails validation.
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// All events, ascending by start time; ties keep insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Insert `event`, re-sort, and return every conflict in the schedule.
    ///
    /// The returned list covers the whole schedule, not only conflicts that
    /// involve `event`. Identical events are both kept.
    pub fn add_event(&mut self, event: Event) -> Vec<Conflict> {
        debug!(
            name = event.name(),
            start = %event.start(),
            end = %event.end(),
            "adding event"
        );
        self.events.push(event);
        // `sort_by_key` is stable, so equal start times keep insertion order.
        self.events.sort_by_key(Event::start);
        self.conflicts()
    }

    /// Parse and validate `HH:MM` input, then insert it.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidInput` or `SchedulerError::InvalidRange`
    /// without touching the schedule.
    pub fn add(&mut self, name: &str, start: &str, end: &str) -> Result<Vec<Conflict>> {
        let event = Event::parse(name, start, end)?;
        Ok(self.add_event(event))
    }

    /// Conflicts among the current events, with suggestions.
    pub fn conflicts(&self) -> Vec<Conflict> {
        let conflicts = conflict::find_conflicts(&self.events, &self.config);
        debug!(
            events = self.events.len(),
            conflicts = conflicts.len(),
            "scanned schedule"
        );
        conflicts
    }

    /// Up to three slots with the duration of `event` that avoid every
    /// scheduled event and fit inside working hours.
    ///
    /// `event` itself is not required to be in the schedule.
    pub fn find_alternative_slots(&self, event: &Event) -> Vec<Suggestion> {
        let suggestions =
            suggest::find_alternative_slots(&self.events, &self.config, event.duration_minutes());
        debug!(
            name = event.name(),
            duration_minutes = event.duration_minutes(),
            found = suggestions.len(),
            "searched alternative slots"
        );
        suggestions
    }
}
