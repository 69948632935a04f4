//! Day planning domain models.
//!
//! Provides the data types shared by every allocation stage: clock
//! values, time ranges, the minute grid, the caller's items, and the
//! resulting schedule.
//!
//! # Domain Mappings
//!
//! | u-dayplan | Meaning |
//! |-----------|---------|
//! | ClockTime | Minute of day, `"HH:MM"` at the boundary |
//! | TimeRange | Half-open range, may wrap past midnight |
//! | TimeGrid | 1440 per-minute occupancy markers |
//! | FixedAppointment / TodoItem | Caller input |
//! | DaySchedule | Sorted entries + grid + warnings |

mod category;
mod clock;
mod grid;
mod item;
mod schedule;
mod time_range;

pub use category::Category;
pub use clock::{ClockTime, MINUTES_PER_DAY};
pub use grid::TimeGrid;
pub use item::{FixedAppointment, TodoItem};
pub use schedule::{DaySchedule, ScheduleEntry, Warning, WarningKind};
pub use time_range::TimeRange;
