//! First-fit to-do packing.
//!
//! # Algorithm
//!
//! 1. Stable-sort items by descending duration (largest first).
//! 2. For each item, scan start minutes `0..=1440 - d` ascending.
//! 3. Take the first start whose run is entirely free; mark it `Todo`.
//! 4. If no run fits, record a warning and continue with the next item.
//!
//! This is a greedy bin-packing heuristic. It is deterministic but not
//! optimal: a different order could sometimes fit more items.
//!
//! # Complexity
//! O(n log n + n × 1440 × d) where n = items, d = item duration.

use std::cmp::Reverse;

use tracing::{debug, warn};

use crate::models::{
    Category, ClockTime, ScheduleEntry, TimeGrid, TodoItem, Warning, MINUTES_PER_DAY,
};

/// Entries and warnings produced by one packing pass.
#[derive(Debug, Clone, Default)]
pub struct PackOutcome {
    /// Placed to-dos, in packing order.
    pub entries: Vec<ScheduleEntry>,
    /// One warning per unplaced to-do.
    pub warnings: Vec<Warning>,
}

/// Largest-duration-first, first-fit to-do packer.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{TimeGrid, TodoItem};
/// use u_dayplan::scheduler::TodoPacker;
///
/// let mut grid = TimeGrid::new();
/// let items = vec![TodoItem::new("A", 20), TodoItem::new("B", 90)];
/// let outcome = TodoPacker::new().pack(&mut grid, &items);
/// assert_eq!(outcome.entries[0].title, "B");
/// assert_eq!(outcome.entries[1].start.minutes(), 90);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TodoPacker;

impl TodoPacker {
    /// Creates a new packer.
    pub fn new() -> Self {
        Self
    }

    /// Packs `items` onto `grid`.
    pub fn pack(&self, grid: &mut TimeGrid, items: &[TodoItem]) -> PackOutcome {
        let mut outcome = PackOutcome::default();

        for &idx in &self.packing_order(items) {
            let item = &items[idx];
            match find_start(grid, item.duration) {
                Some(start) => {
                    grid.mark_run(start, item.duration, Category::Todo);
                    let entry = ScheduleEntry::new(
                        ClockTime::wrapping(i64::from(start)),
                        item.duration,
                        item.title.as_str(),
                        Category::Todo,
                    );
                    debug!(todo = %item.title, start = %entry.start, end = %entry.end, "placed to-do");
                    outcome.entries.push(entry);
                }
                None => {
                    warn!(
                        todo = %item.title,
                        duration = item.duration,
                        "not enough free time to place to-do"
                    );
                    outcome
                        .warnings
                        .push(Warning::unplaced_todo(item.title.as_str(), item.duration));
                }
            }
        }

        outcome
    }

    /// Indices into `items`, longest first; ties keep input order.
    pub fn packing_order(&self, items: &[TodoItem]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by_key(|&i| Reverse(items[i].duration));
        indices
    }
}

/// First start where `duration` free minutes fit before the end of the day.
fn find_start(grid: &TimeGrid, duration: u32) -> Option<u32> {
    if duration == 0 {
        return None;
    }
    let latest = MINUTES_PER_DAY.checked_sub(duration)?;
    grid.first_free(0..=latest, duration)
}
