//! Greedy day allocation and schedule metrics.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` marks sleep and fixed appointments, then greedily
//! places meals (`MealPlacer`, preferred-then-fallback window scan) and
//! to-dos (`TodoPacker`, largest-first first-fit). It is not optimal, but
//! it is fast, simple, and deterministic.
//!
//! # Summary
//!
//! `DaySummary` reports minutes per category, occupancy, and placement
//! counts.

mod builder;
mod meals;
mod summary;
mod todos;

pub use builder::{DayRequest, ScheduleBuilder, SLEEP_TITLE};
pub use meals::{MealPlacer, MealWindow, MEAL_DURATION};
pub use summary::DaySummary;
pub use todos::{PackOutcome, TodoPacker};
