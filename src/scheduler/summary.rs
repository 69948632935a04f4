//! Day schedule metrics.
//!
//! Computes occupancy indicators from a built day schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Minutes by category | Grid minutes holding each category |
//! | Occupancy | Non-free minutes / 1440 |
//! | Placed / unplaced to-dos | Entry and warning counts |
//! | First start | Earliest entry start (clock-face center label) |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Category, ClockTime, DaySchedule, MINUTES_PER_DAY};

/// Occupancy summary of a day schedule.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// Grid minutes per category (every category present, possibly 0).
    pub minutes_by_category: HashMap<Category, usize>,
    /// Unallocated minutes.
    pub free_minutes: usize,
    /// Fraction of the day that is allocated (0.0..=1.0).
    pub occupancy: f64,
    /// Number of to-dos placed.
    pub placed_todos: usize,
    /// Number of to-dos that could not be placed.
    pub unplaced_todos: usize,
    /// Earliest entry start, `None` for an empty schedule.
    pub first_start: Option<ClockTime>,
}

impl DaySummary {
    /// Computes the summary of a schedule.
    pub fn calculate(schedule: &DaySchedule) -> Self {
        let grid = schedule.grid();
        let minutes_by_category: HashMap<Category, usize> = Category::ALL
            .iter()
            .map(|&c| (c, grid.count(c)))
            .collect();

        let free_minutes = minutes_by_category[&Category::Free];
        let busy = MINUTES_PER_DAY as usize - free_minutes;

        Self {
            minutes_by_category,
            free_minutes,
            occupancy: busy as f64 / f64::from(MINUTES_PER_DAY),
            placed_todos: schedule.entries_of(Category::Todo).len(),
            unplaced_todos: schedule.warnings().len(),
            first_start: schedule.first_start(),
        }
    }

    /// Minutes allocated to `category`.
    pub fn minutes(&self, category: Category) -> usize {
        self.minutes_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    /// Whether at least `min_free` minutes remain unallocated.
    pub fn has_slack(&self, min_free: usize) -> bool {
        self.free_minutes >= min_free
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeRange, TodoItem};
    use crate::scheduler::{DayRequest, ScheduleBuilder};

    fn study_day() -> DaySchedule {
        let request = DayRequest::new()
            .with_sleep(TimeRange::parse("23:00", "07:00").unwrap())
            .with_todo(TodoItem::new("Study", 120))
            .with_todo(TodoItem::new("marathon", 1440));
        ScheduleBuilder::new().build(&request).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let summary = DaySummary::calculate(&study_day());
        assert_eq!(summary.minutes(Category::Sleep), 480);
        assert_eq!(summary.minutes(Category::Meal), 60);
        assert_eq!(summary.minutes(Category::Todo), 120);
        assert_eq!(summary.minutes(Category::Fixed), 0);
        assert_eq!(summary.free_minutes, 1440 - 660);
        assert_eq!(summary.placed_todos, 1);
        assert_eq!(summary.unplaced_todos, 1);
        assert_eq!(summary.first_start.unwrap().to_string(), "07:00");
    }

    #[test]
    fn test_occupancy() {
        let summary = DaySummary::calculate(&study_day());
        assert!((summary.occupancy - 660.0 / 1440.0).abs() < 1e-10);
        assert!(summary.has_slack(780));
        assert!(!summary.has_slack(781));
    }

    #[test]
    fn test_minutes_sum_to_day() {
        let summary = DaySummary::calculate(&study_day());
        let total: usize = summary.minutes_by_category.values().sum();
        assert_eq!(total, 1440);
    }
}
