//! Single-day time-slot allocation for the U-Engine ecosystem.
//!
//! Builds a conflict-free 24-hour plan on a minute-resolution grid: a
//! sleep window and fixed appointments are marked first, then meals and
//! to-dos are greedily placed into the remaining free minutes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ClockTime`, `TimeRange`, `TimeGrid`,
//!   `FixedAppointment`, `TodoItem`, `ScheduleEntry`, `DaySchedule`
//! - **`scheduler`**: `ScheduleBuilder`, `MealPlacer`, `TodoPacker`, `DaySummary`
//! - **`encoding`**: Run-length ring segments for clock-face rendering
//! - **`validation`**: Request checks run before any allocation
//! - **`config`**: TOML-loadable meal windows and default sleep window
//!
//! # Example
//!
//! ```
//! use u_dayplan::models::{FixedAppointment, TimeRange, TodoItem};
//! use u_dayplan::scheduler::{DayRequest, ScheduleBuilder};
//!
//! let request = DayRequest::new()
//!     .with_sleep(TimeRange::parse("23:00", "07:00").unwrap())
//!     .with_fixed(FixedAppointment::parse("09:00", "12:00", "lecture").unwrap())
//!     .with_todo(TodoItem::new("laundry", 45));
//!
//! let schedule = ScheduleBuilder::new().build(&request).unwrap();
//! assert_eq!(schedule.entries().len(), 5);
//! assert!(schedule.is_complete());
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
