//! Meal placement within daily windows.
//!
//! # Algorithm
//!
//! For each meal, given an outer window `[W_start, W_end)` and a preferred
//! inner window `[P_start, P_end]`:
//!
//! 1. Scan starts `P_start..=P_end` ascending, keeping only those inside
//!    `[W_start, W_end - duration]`; take the first free run.
//! 2. Otherwise scan `W_start..=W_end - duration` ascending.
//! 3. Otherwise omit the meal. No warning is raised.
//!
//! # Complexity
//! O(w × d) per meal, where w = window minutes and d = meal duration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Category, ClockTime, ScheduleEntry, TimeGrid, TimeRange};

/// Minutes reserved for each meal by default.
pub const MEAL_DURATION: u32 = 30;

/// Where and how long a meal may be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWindow {
    /// Entry title (e.g. "lunch").
    pub title: String,
    /// Full permitted range, searched as fallback. Must not wrap midnight.
    pub outer: TimeRange,
    /// Ideal range of start times, searched first.
    pub preferred: TimeRange,
    /// Meal length in minutes.
    pub duration: u32,
}

impl MealWindow {
    /// Creates a meal window.
    pub fn new(
        title: impl Into<String>,
        outer: TimeRange,
        preferred: TimeRange,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            outer,
            preferred,
            duration,
        }
    }

    /// Lunch: 11:00–14:00, preferably starting 12:00–13:00.
    pub fn lunch() -> Self {
        Self::new(
            "lunch",
            TimeRange::new(hm(11, 0), hm(14, 0)),
            TimeRange::new(hm(12, 0), hm(13, 0)),
            MEAL_DURATION,
        )
    }

    /// Dinner: 17:00–20:00, preferably starting 18:00–19:00.
    pub fn dinner() -> Self {
        Self::new(
            "dinner",
            TimeRange::new(hm(17, 0), hm(20, 0)),
            TimeRange::new(hm(18, 0), hm(19, 0)),
            MEAL_DURATION,
        )
    }

    /// Latest permitted start, `None` if the meal does not fit the window.
    pub fn latest_start(&self) -> Option<u32> {
        let latest = self.outer.end.minutes().checked_sub(self.duration)?;
        (latest >= self.outer.start.minutes()).then_some(latest)
    }

    /// Checks that the window can hold the meal at all.
    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 {
            return Err(Error::Config(format!(
                "meal '{}' has zero duration",
                self.title
            )));
        }
        if self.outer.wraps() {
            return Err(Error::Config(format!(
                "meal '{}' outer window {}-{} crosses midnight",
                self.title, self.outer.start, self.outer.end
            )));
        }
        if self.latest_start().is_none() {
            return Err(Error::Config(format!(
                "meal '{}' ({} min) does not fit in {}-{}",
                self.title, self.duration, self.outer.start, self.outer.end
            )));
        }
        Ok(())
    }

    /// Finds the start minute for this meal on `grid`, if any.
    pub fn find_start(&self, grid: &TimeGrid) -> Option<u32> {
        let earliest = self.outer.start.minutes();
        let latest = self.latest_start()?;

        let preferred = (self.preferred.start.minutes()..=self.preferred.end.minutes())
            .filter(|&c| c >= earliest && c <= latest)
            .find(|&c| grid.is_free(c, self.duration));

        preferred.or_else(|| grid.first_free(earliest..=latest, self.duration))
    }
}

/// Places meals onto a grid.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{TimeGrid, Category};
/// use u_dayplan::scheduler::MealPlacer;
///
/// let mut grid = TimeGrid::new();
/// let entries = MealPlacer::new().place(&mut grid);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].start.to_string(), "12:00");
/// assert_eq!(entries[1].start.to_string(), "18:00");
/// assert_eq!(grid.count(Category::Meal), 60);
/// ```
#[derive(Debug, Clone)]
pub struct MealPlacer {
    windows: Vec<MealWindow>,
}

impl MealPlacer {
    /// Creates a placer with default lunch and dinner windows.
    pub fn new() -> Self {
        Self::with_windows(vec![MealWindow::lunch(), MealWindow::dinner()])
    }

    /// Creates a placer for the given windows, placed in order.
    pub fn with_windows(windows: Vec<MealWindow>) -> Self {
        Self { windows }
    }

    /// Configured windows.
    pub fn windows(&self) -> &[MealWindow] {
        &self.windows
    }

    /// Places each meal, marking the grid and returning one entry per
    /// placed meal. Meals with no free slot are skipped.
    pub fn place(&self, grid: &mut TimeGrid) -> Vec<ScheduleEntry> {
        let mut entries = Vec::with_capacity(self.windows.len());

        for window in &self.windows {
            match window.find_start(grid) {
                Some(start) => {
                    grid.mark_run(start, window.duration, Category::Meal);
                    let entry = ScheduleEntry::new(
                        ClockTime::wrapping(i64::from(start)),
                        window.duration,
                        window.title.as_str(),
                        Category::Meal,
                    );
                    debug!(meal = %window.title, start = %entry.start, "placed meal");
                    entries.push(entry);
                }
                None => {
                    debug!(meal = %window.title, "no free slot in meal window, skipping");
                }
            }
        }

        entries
    }
}

impl Default for MealPlacer {
    fn default() -> Self {
        Self::new()
    }
}

fn hm(hours: u32, minutes: u32) -> ClockTime {
    ClockTime::wrapping(i64::from(hours * 60 + minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_windows() {
        let lunch = MealWindow::lunch();
        assert_eq!(lunch.outer.start.minutes(), 660);
        assert_eq!(lunch.outer.end.minutes(), 840);
        assert_eq!(lunch.preferred.start.minutes(), 720);
        assert_eq!(lunch.preferred.end.minutes(), 780);
        assert_eq!(lunch.latest_start(), Some(810));

        let dinner = MealWindow::dinner();
        assert_eq!(dinner.outer.start.minutes(), 1020);
        assert_eq!(dinner.outer.end.minutes(), 1200);
        assert_eq!(dinner.preferred.start.minutes(), 1080);
        assert_eq!(dinner.preferred.end.minutes(), 1140);
    }

    #[test]
    fn test_free_day_places_at_preferred_start() {
        let mut grid = TimeGrid::new();
        let entries = MealPlacer::new().place(&mut grid);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "lunch");
        assert_eq!(entries[0].start.minutes(), 720);
        assert_eq!(entries[0].end.to_string(), "12:30");
        assert_eq!(entries[1].title, "dinner");
        assert_eq!(entries[1].start.minutes(), 1080);
        assert_eq!(entries[1].end.to_string(), "18:30");
        assert_eq!(grid.count(Category::Meal), 60);
    }

    #[test]
    fn test_preferred_scan_skips_busy_minutes() {
        let mut grid = TimeGrid::new();
        grid.mark_range(t("12:00"), t("12:20"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries[0].start.to_string(), "12:20");
    }

    #[test]
    fn test_fallback_to_outer_window() {
        // 12:00-13:30 busy: every preferred start overlaps it
        let mut grid = TimeGrid::new();
        grid.mark_range(t("12:00"), t("13:30"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries[0].title, "lunch");
        assert_eq!(entries[0].start.to_string(), "11:00");
    }

    #[test]
    fn test_appointment_covering_preferred_hour() {
        // 13:00 is still a preferred candidate and is free
        let mut grid = TimeGrid::new();
        grid.mark_range(t("12:00"), t("13:00"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries[0].start.to_string(), "13:00");
    }

    #[test]
    fn test_preferred_end_is_inclusive() {
        // Only 13:00-13:30 remains free in the preferred range
        let mut grid = TimeGrid::new();
        grid.mark_range(t("11:00"), t("13:00"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries[0].start.to_string(), "13:00");
    }

    #[test]
    fn test_fallback_after_preferred_window() {
        // 11:00-13:25 busy; preferred starts up to 13:00 all collide
        let mut grid = TimeGrid::new();
        grid.mark_range(t("11:00"), t("13:25"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries[0].start.to_string(), "13:25");
    }

    #[test]
    fn test_meal_omitted_when_window_full() {
        let mut grid = TimeGrid::new();
        grid.mark_range(t("11:00"), t("14:00"), Category::Fixed);
        let entries = MealPlacer::new().place(&mut grid);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "dinner");
        assert_eq!(grid.count(Category::Meal), 30);
    }

    #[test]
    fn test_meal_does_not_overrun_window() {
        // Only 13:45-14:00 free: 15 minutes is too short
        let mut grid = TimeGrid::new();
        grid.mark_range(t("11:00"), t("13:45"), Category::Fixed);
        let placer = MealPlacer::with_windows(vec![MealWindow::lunch()]);
        assert!(placer.place(&mut grid).is_empty());
    }

    #[test]
    fn test_validate_window() {
        assert!(MealWindow::lunch().validate().is_ok());

        let wrapping = MealWindow::new(
            "midnight snack",
            TimeRange::new(t("23:00"), t("01:00")),
            TimeRange::new(t("23:30"), t("23:30")),
            15,
        );
        assert!(matches!(wrapping.validate(), Err(Error::Config(_))));

        let too_long = MealWindow::new(
            "brunch",
            TimeRange::new(t("10:00"), t("10:20")),
            TimeRange::new(t("10:00"), t("10:00")),
            30,
        );
        assert!(too_long.latest_start().is_none());
        assert!(too_long.validate().is_err());

        let mut zero = MealWindow::lunch();
        zero.duration = 0;
        assert!(zero.validate().is_err());
    }
}
