//! Day schedule builder.
//!
//! # Algorithm
//!
//! Stages run in a fixed order; each stage's marks constrain the next.
//!
//! 1. Mark the sleep window (wrap-aware).
//! 2. Mark fixed appointments in input order (wrap-aware, last write wins).
//! 3. Place meals.
//! 4. Pack to-dos.
//! 5. Sort entries by start time of day.
//!
//! The sort compares the literal clock value of each start. An entry that
//! begins after midnight (e.g. a 00:30 appointment following a 23:00 sleep
//! start) therefore lists before the sleep entry.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{MealPlacer, TodoPacker};
use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::models::{
    Category, DaySchedule, FixedAppointment, ScheduleEntry, TimeGrid, TimeRange, TodoItem,
};
use crate::validation::validate_request;

/// Title of the sleep entry.
pub const SLEEP_TITLE: &str = "sleep";

/// Input container for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRequest {
    /// Confirmed sleep window. `None` = use the configured default.
    #[serde(default)]
    pub sleep: Option<TimeRange>,
    /// Fixed appointments, marked in order.
    #[serde(default)]
    pub fixed: Vec<FixedAppointment>,
    /// To-dos to pack.
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

impl DayRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the confirmed sleep window.
    pub fn with_sleep(mut self, sleep: TimeRange) -> Self {
        self.sleep = Some(sleep);
        self
    }

    /// Adds a fixed appointment.
    pub fn with_fixed(mut self, appointment: FixedAppointment) -> Self {
        self.fixed.push(appointment);
        self
    }

    /// Adds a to-do.
    pub fn with_todo(mut self, todo: TodoItem) -> Self {
        self.todos.push(todo);
        self
    }
}

/// Orchestrates the allocation stages for a single day.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{TimeRange, TodoItem};
/// use u_dayplan::scheduler::{DayRequest, ScheduleBuilder};
///
/// let request = DayRequest::new()
///     .with_sleep(TimeRange::parse("23:00", "07:00").unwrap())
///     .with_todo(TodoItem::new("Study", 120));
///
/// let schedule = ScheduleBuilder::new().build(&request).unwrap();
/// let study = schedule.entry("Study").unwrap();
/// assert_eq!(study.start.to_string(), "07:00");
/// assert_eq!(study.end.to_string(), "09:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    config: PlannerConfig,
}

impl ScheduleBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Validates the request, then allocates the day.
    ///
    /// Fails with [`Error::Validation`] before touching any grid if the
    /// request is incomplete or malformed. Unplaceable to-dos do not fail
    /// the build; they are reported in [`DaySchedule::warnings`].
    pub fn build(&self, request: &DayRequest) -> Result<DaySchedule> {
        validate_request(request).map_err(Error::Validation)?;
        Ok(self.allocate(request))
    }

    /// Allocates the day without validation.
    pub fn allocate(&self, request: &DayRequest) -> DaySchedule {
        let mut grid = TimeGrid::new();
        let mut entries = Vec::with_capacity(3 + request.fixed.len() + request.todos.len());

        // 1. Sleep
        let sleep = request.sleep.unwrap_or(self.config.default_sleep);
        grid.mark(&sleep, Category::Sleep);
        entries.push(ScheduleEntry::spanning(
            sleep.start,
            sleep.end,
            sleep.duration(),
            SLEEP_TITLE,
            Category::Sleep,
        ));

        // 2. Fixed appointments
        for appt in &request.fixed {
            let range = appt.range();
            grid.mark(&range, Category::Fixed);
            entries.push(ScheduleEntry::spanning(
                range.start,
                range.end,
                range.duration(),
                appt.title.as_str(),
                Category::Fixed,
            ));
        }

        // 3. Meals
        let meals = MealPlacer::with_windows(self.config.meal_windows());
        entries.extend(meals.place(&mut grid));

        // 4. To-dos
        let packed = TodoPacker::new().pack(&mut grid, &request.todos);
        entries.extend(packed.entries);

        // 5. Literal start-of-day order (stable)
        entries.sort_by_key(|e| e.start);

        info!(
            entries = entries.len(),
            unplaced = packed.warnings.len(),
            free_minutes = grid.free_minutes(),
            "built day schedule"
        );

        DaySchedule::new(entries, packed.warnings, grid)
    }
}
