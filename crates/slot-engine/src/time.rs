//! Minute-resolution wall-clock time within a single reference day.
//!
//! Times are stored as minutes since midnight and exchanged as fixed-width,
//! zero-padded `HH:MM` strings, so the derived ordering, the chronological
//! ordering and the lexicographic ordering of the string form all agree.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SchedulerError};

/// Number of minutes in one day. Valid times are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from an hour/minute pair known to be in range.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Build from minutes since midnight, already bounded by the caller.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Build from minutes since midnight. Returns `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Build from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| Self::at(hour, minute))
    }

    /// Parse a fixed-width `HH:MM` string.
    ///
    /// # Errors
    /// Returns `SchedulerError::InvalidInput` for anything other than two
    /// digits, a colon and two digits, or for hours past 23 / minutes past 59.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || b.is_ascii_digit());
        if !well_formed {
            return Err(SchedulerError::InvalidInput(format!(
                "malformed time '{}', expected HH:MM",
                s
            )));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::from)
            .map_err(|e| SchedulerError::InvalidInput(format!("invalid time '{}': {}", s, e)))
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Signed number of minutes from `self` to `later`.
    pub fn minutes_until(self, later: TimeOfDay) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }

    /// Add minutes, returning `None` if the result would cross midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        // hour() <= 23 and minute() <= 59, so the cast cannot truncate.
        Self::at(time.hour() as u16, time.minute() as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
