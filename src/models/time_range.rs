//! Time-of-day ranges.
//!
//! # Time Model
//! All values are minutes from midnight on a single day. A range is
//! half-open, `[start, end)`. When `start > end` the range wraps past
//! midnight and covers `[start, 1440)` followed by `[0, end)`.
//!
//! A range with `start == end` is empty.

use serde::{Deserialize, Serialize};

use super::clock::{ClockTime, MINUTES_PER_DAY};
use crate::error::Result;

/// A half-open time-of-day interval that may wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeRange {
    /// Creates a new range.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Whether the range crosses midnight.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Length in minutes: `(end - start + 1440) mod 1440`.
    #[inline]
    pub fn duration(&self) -> u32 {
        (self.end.minutes() + MINUTES_PER_DAY - self.start.minutes()) % MINUTES_PER_DAY
    }

    /// Whether a minute of day falls within this range.
    pub fn contains(&self, minute: u32) -> bool {
        let (s, e) = (self.start.minutes(), self.end.minutes());
        if self.wraps() {
            minute >= s || minute < e
        } else {
            minute >= s && minute < e
        }
    }

    /// The range as at most two non-wrapping `[start, end)` minute spans.
    ///
    /// A wrapping range splits at midnight into `[start, 1440)` and `[0, end)`.
    pub fn spans(&self) -> Vec<(u32, u32)> {
        let (s, e) = (self.start.minutes(), self.end.minutes());
        if self.wraps() {
            let mut spans = vec![(s, MINUTES_PER_DAY)];
            if e > 0 {
                spans.push((0, e));
            }
            spans
        } else if s < e {
            vec![(s, e)]
        } else {
            Vec::new()
        }
    }

    /// Whether two ranges share at least one minute.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.spans().iter().any(|&(a0, a1)| {
            other
                .spans()
                .iter()
                .any(|&(b0, b1)| a0 < b1 && b0 < a1)
        })
    }
}
