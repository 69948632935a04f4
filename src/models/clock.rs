//! Minute-of-day clock values.
//!
//! The planner works on a single calendar day at one-minute resolution.
//! A [`ClockTime`] is an offset in `[0, 1440)` minutes from midnight and
//! crosses the caller boundary as an `"HH:MM"` string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minutes in one day (length of the planning grid).
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day at minute resolution.
///
/// # Examples
///
/// ```
/// use u_dayplan::models::ClockTime;
///
/// let t: ClockTime = "07:30".parse().unwrap();
/// assert_eq!(t.minutes(), 450);
/// assert_eq!(t.to_string(), "07:30");
/// assert_eq!(ClockTime::wrapping(1440 + 5).to_string(), "00:05");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a clock time from a minute-of-day offset.
    ///
    /// Fails with [`Error::InvalidInput`] if `minutes >= 1440`.
    pub fn from_minutes(minutes: u32) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(Error::InvalidInput(format!(
                "minute {minutes} is outside the day (0..{MINUTES_PER_DAY})"
            )));
        }
        Ok(Self(minutes))
    }

    /// Creates a clock time from hours and minutes.
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self> {
        if hours >= 24 || minutes >= 60 {
            return Err(Error::InvalidTime(format!("{hours:02}:{minutes:02}")));
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Folds any minute offset into the day, e.g. `1440 → 00:00`, `-30 → 23:30`.
    pub fn wrapping(minutes: i64) -> Self {
        Self(minutes.rem_euclid(i64::from(MINUTES_PER_DAY)) as u32)
    }

    /// Minute-of-day offset in `[0, 1440)`.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        if h.is_empty() || m.len() != 2 {
            return Err(invalid());
        }
        let hours: u32 = h.parse().map_err(|_| invalid())?;
        let minutes: u32 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hours, minutes).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
