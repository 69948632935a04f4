//! Day schedule (allocation result) model.
//!
//! A day schedule is the chronological list of placed entries, the
//! final occupancy grid they were marked on, and any non-fatal warnings
//! raised while placing to-dos.

use serde::{Deserialize, Serialize};

use super::{Category, ClockTime, TimeGrid};

/// One placed interval of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Start time of day.
    pub start: ClockTime,
    /// End time of day (wrapped, so a run ending at midnight shows `00:00`).
    pub end: ClockTime,
    /// Display title.
    pub title: String,
    /// What kind of occupant this is.
    pub category: Category,
    /// Occupied minutes.
    pub duration: u32,
}

/// A non-fatal issue raised during allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Type of warning.
    pub kind: WarningKind,
    /// Title of the affected item.
    pub title: String,
    /// Requested minutes of the affected item.
    pub duration: u32,
    /// Human-readable description.
    pub message: String,
}

/// Classification of allocation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// No free run long enough for a to-do existed anywhere in the day.
    UnplacedTodo,
}

impl ScheduleEntry {
    /// Creates an entry from a start time and a length; the end wraps.
    pub fn new(
        start: ClockTime,
        duration: u32,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            start,
            end: ClockTime::wrapping(i64::from(start.minutes()) + i64::from(duration)),
            title: title.into(),
            category,
            duration,
        }
    }

    /// Creates an entry with explicit endpoints (used for declared ranges).
    pub fn spanning(
        start: ClockTime,
        end: ClockTime,
        duration: u32,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            start,
            end,
            title: title.into(),
            category,
            duration,
        }
    }
}

impl Warning {
    /// Creates an unplaced to-do warning.
    pub fn unplaced_todo(title: impl Into<String>, duration: u32) -> Self {
        let title = title.into();
        let message = format!("not enough free time to place '{title}' ({duration} min)");
        Self {
            kind: WarningKind::UnplacedTodo,
            title,
            duration,
            message,
        }
    }
}

/// A complete single-day schedule.
///
/// Entries are sorted by start time of day. The grid and entries are
/// produced together and exposed read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    entries: Vec<ScheduleEntry>,
    warnings: Vec<Warning>,
    grid: TimeGrid,
}

impl DaySchedule {
    pub(crate) fn new(entries: Vec<ScheduleEntry>, warnings: Vec<Warning>, grid: TimeGrid) -> Self {
        Self {
            entries,
            warnings,
            grid,
        }
    }

    /// Placed entries, ascending by start time of day.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Non-fatal warnings raised during allocation.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Final occupancy grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Whether allocation placed everything it was asked to.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Finds the first entry with the given title.
    pub fn entry(&self, title: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Returns all entries of a category.
    pub fn entries_of(&self, category: Category) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Earliest entry start, the label shown at the center of the clock face.
    pub fn first_start(&self) -> Option<ClockTime> {
        self.entries.iter().map(|e| e.start).min()
    }

    /// Splits into owned parts.
    pub fn into_parts(self) -> (Vec<ScheduleEntry>, Vec<Warning>, TimeGrid) {
        (self.entries, self.warnings, self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn sample_schedule() -> DaySchedule {
        let entries = vec![
            ScheduleEntry::new(t("07:00"), 120, "study", Category::Todo),
            ScheduleEntry::new(t("12:00"), 30, "lunch", Category::Meal),
            ScheduleEntry::spanning(t("23:00"), t("07:00"), 480, "sleep", Category::Sleep),
        ];
        DaySchedule::new(entries, vec![Warning::unplaced_todo("marathon", 600)], TimeGrid::new())
    }

    #[test]
    fn test_entry_end_wraps() {
        let e = ScheduleEntry::new(t("23:30"), 30, "late", Category::Todo);
        assert_eq!(e.end.to_string(), "00:00");
        assert_eq!(e.duration, 30);
    }

    #[test]
    fn test_warning_factory() {
        let w = Warning::unplaced_todo("marathon", 600);
        assert_eq!(w.kind, WarningKind::UnplacedTodo);
        assert_eq!(w.title, "marathon");
        assert_eq!(w.duration, 600);
        assert!(w.message.contains("marathon"));
        assert!(w.message.contains("600"));
    }

    #[test]
    fn test_queries() {
        let s = sample_schedule();
        assert!(!s.is_complete());
        assert_eq!(s.entry("lunch").unwrap().start, t("12:00"));
        assert!(s.entry("dinner").is_none());
        assert_eq!(s.entries_of(Category::Todo).len(), 1);
        assert_eq!(s.first_start(), Some(t("07:00")));
    }

    #[test]
    fn test_empty_schedule() {
        let s = DaySchedule::new(Vec::new(), Vec::new(), TimeGrid::new());
        assert!(s.is_complete());
        assert_eq!(s.first_start(), None);
    }
}
