//! Caller-supplied day items: fixed appointments and to-dos.
//!
//! Both are immutable once read. Fixed appointments occupy a declared
//! time range; to-dos only declare a duration and are placed by the
//! packer.

use serde::{Deserialize, Serialize};

use super::time_range::TimeRange;
use super::ClockTime;
use crate::error::Result;

/// An appointment pinned to a time range.
///
/// The range may wrap past midnight. Overlapping appointments are not
/// reconciled; the later one wins on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAppointment {
    /// Start time (inclusive).
    pub start: ClockTime,
    /// End time (exclusive).
    pub end: ClockTime,
    /// Display title.
    pub title: String,
}

impl FixedAppointment {
    /// Creates a new appointment.
    pub fn new(start: ClockTime, end: ClockTime, title: impl Into<String>) -> Self {
        Self {
            start,
            end,
            title: title.into(),
        }
    }

    /// Parses an appointment from `"HH:MM"` start/end strings.
    pub fn parse(start: &str, end: &str, title: impl Into<String>) -> Result<Self> {
        let range = TimeRange::parse(start, end)?;
        Ok(Self::new(range.start, range.end, title))
    }

    /// The occupied range.
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Occupied minutes.
    pub fn duration(&self) -> u32 {
        self.range().duration()
    }
}

/// A to-do item that needs `duration` contiguous free minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Display title.
    pub title: String,
    /// Required contiguous minutes.
    pub duration: u32,
}

impl TodoItem {
    /// Creates a new to-do.
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
        }
    }
}
