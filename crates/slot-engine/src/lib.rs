//! # slot-engine
//!
//! Conflict detection and alternative slot suggestions for a single day of
//! named events.
//!
//! Events are added one at a time to a [`Scheduler`]. Each insertion re-sorts
//! the schedule by start time, reports every pair of neighbouring events that
//! overlap, and proposes up to three free slots inside working hours for the
//! later event of each pair. Everything is plain data: rendering is left to the
//! caller.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! assert!(scheduler.add("Standup", "09:00", "10:00").unwrap().is_empty());
//!
//! let conflicts = scheduler.add("Review", "09:30", "10:30").unwrap();
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].later.name(), "Review");
//! assert_eq!(conflicts[0].suggestions[0].to_string(), "08:00 - 09:00");
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` wall-clock times as minutes since midnight
//! - [`event`] — Validated, immutable events with derived duration
//! - [`config`] — Working hours and suggestion grid step
//! - [`conflict`] — Adjacent-pair overlap detection
//! - [`suggest`] — Alternative slot search within working hours
//! - [`scheduler`] — The sorted event collection tying it all together
//! - [`error`] — Error types

pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod scheduler;
pub mod suggest;
pub mod time;

pub use config::SchedulerConfig;
pub use conflict::{find_conflicts, Conflict};
pub use error::SchedulerError;
pub use event::Event;
pub use scheduler::Scheduler;
pub use suggest::{find_alternative_slots, Suggestion, MAX_SUGGESTIONS};
pub use time::TimeOfDay;
