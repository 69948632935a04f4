//! Minute-resolution occupancy grid for one day.
//!
//! The grid is a flat, owned buffer of [`MINUTES_PER_DAY`] categories;
//! index `i` is the minute starting at `i` minutes after midnight. It is
//! the substrate every placement stage reads and writes.
//!
//! # Invariants
//! - Exactly 1440 slots, each holding one [`Category`].
//! - Marking overwrites unconditionally (last write wins, no stacking).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::clock::{ClockTime, MINUTES_PER_DAY};
use super::time_range::TimeRange;
use crate::error::Error;

const DAY_LEN: usize = MINUTES_PER_DAY as usize;

/// Per-minute occupancy of a single day.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{Category, TimeGrid, TimeRange};
///
/// let mut grid = TimeGrid::new();
/// grid.mark(&TimeRange::parse("23:00", "01:00").unwrap(), Category::Sleep);
/// assert_eq!(grid.count(Category::Sleep), 120);
/// assert!(!grid.is_free(0, 30));
/// assert!(grid.is_free(60, 30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct TimeGrid {
    slots: Vec<Category>,
}

impl TimeGrid {
    /// Creates an all-free grid.
    pub fn new() -> Self {
        Self {
            slots: vec![Category::Free; DAY_LEN],
        }
    }

    /// Marks `[start, end)` with `category`, wrapping past midnight when
    /// `start > end`. `start == end` marks nothing.
    pub fn mark_range(&mut self, start: ClockTime, end: ClockTime, category: Category) {
        self.mark(&TimeRange::new(start, end), category);
    }

    /// Marks every minute of `range` with `category`.
    pub fn mark(&mut self, range: &TimeRange, category: Category) {
        for (s, e) in range.spans() {
            self.slots[s as usize..e as usize].fill(category);
        }
    }

    /// Marks a non-wrapping run of `duration` minutes from `start`,
    /// clipped at the end of the day.
    pub fn mark_run(&mut self, start: u32, duration: u32, category: Category) {
        let (s, e) = self.clip(start, duration);
        self.slots[s..e].fill(category);
    }

    /// Whether every minute of `[start, start + duration)` is free.
    ///
    /// Does not wrap: the part of the run past minute 1439 is ignored.
    /// An empty run is always free.
    pub fn is_free(&self, start: u32, duration: u32) -> bool {
        let (s, e) = self.clip(start, duration);
        self.slots[s..e].iter().all(|c| c.is_free())
    }

    /// First start in `candidates` (ascending) where a run of `duration`
    /// minutes is free.
    ///
    /// Linear first-fit scan, O(|candidates| × duration).
    pub fn first_free(&self, candidates: RangeInclusive<u32>, duration: u32) -> Option<u32> {
        candidates.into_iter().find(|&start| self.is_free(start, duration))
    }

    /// Category at a minute of day, `None` past 23:59.
    pub fn get(&self, minute: u32) -> Option<Category> {
        self.slots.get(minute as usize).copied()
    }

    /// Number of minutes holding `category`.
    pub fn count(&self, category: Category) -> usize {
        self.slots.iter().filter(|&&c| c == category).count()
    }

    /// Number of unallocated minutes.
    pub fn free_minutes(&self) -> usize {
        self.count(Category::Free)
    }

    /// Raw slot view, index = minute of day.
    pub fn slots(&self) -> &[Category] {
        &self.slots
    }

    fn clip(&self, start: u32, duration: u32) -> (usize, usize) {
        let s = (start as usize).min(DAY_LEN);
        let e = (start as usize).saturating_add(duration as usize).min(DAY_LEN);
        (s, e)
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Category>> for TimeGrid {
    type Error = Error;

    fn try_from(slots: Vec<Category>) -> Result<Self, Error> {
        if slots.len() != DAY_LEN {
            return Err(Error::InvalidInput(format!(
                "grid must have {DAY_LEN} slots, got {}",
                slots.len()
            )));
        }
        Ok(Self { slots })
    }
}

impl From<TimeGrid> for Vec<Category> {
    fn from(grid: TimeGrid) -> Self {
        grid.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn at(minutes: u32) -> ClockTime {
        ClockTime::from_minutes(minutes).unwrap()
    }

    #[test]
    fn test_new_grid_is_free() {
        let grid = TimeGrid::new();
        assert_eq!(grid.slots().len(), 1440);
        assert_eq!(grid.free_minutes(), 1440);
        assert!(grid.is_free(0, 1440));
    }

    #[test]
    fn test_mark_plain_range() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(540), at(600), Category::Fixed);
        assert_eq!(grid.count(Category::Fixed), 60);
        assert_eq!(grid.get(539), Some(Category::Free));
        assert_eq!(grid.get(540), Some(Category::Fixed));
        assert_eq!(grid.get(599), Some(Category::Fixed));
        assert_eq!(grid.get(600), Some(Category::Free));
    }

    #[test]
    fn test_mark_wrapping_range() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(1380), at(60), Category::Sleep);
        assert_eq!(grid.count(Category::Sleep), 120);
        assert!((1380..1440).all(|m| grid.get(m) == Some(Category::Sleep)));
        assert!((0..60).all(|m| grid.get(m) == Some(Category::Sleep)));
        assert_eq!(grid.get(60), Some(Category::Free));
        assert_eq!(grid.get(1379), Some(Category::Free));
    }

    #[test]
    fn test_mark_empty_range() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(600), at(600), Category::Fixed);
        assert_eq!(grid.free_minutes(), 1440);
    }

    #[test]
    fn test_mark_overwrites() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(600), at(700), Category::Fixed);
        grid.mark_range(at(650), at(750), Category::Meal);
        assert_eq!(grid.count(Category::Fixed), 50);
        assert_eq!(grid.count(Category::Meal), 100);
        assert_eq!(grid.free_minutes(), 1440 - 150);
    }

    #[test]
    fn test_mark_run_clips_at_day_end() {
        let mut grid = TimeGrid::new();
        grid.mark_run(1430, 30, Category::Todo);
        assert_eq!(grid.count(Category::Todo), 10);
        assert_eq!(grid.get(0), Some(Category::Free));
    }

    #[test]
    fn test_is_free() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(100), at(101), Category::Fixed);
        assert!(grid.is_free(0, 100));
        assert!(!grid.is_free(0, 101));
        assert!(!grid.is_free(100, 1));
        assert!(grid.is_free(101, 500));
        assert!(grid.is_free(100, 0)); // empty run
        assert!(grid.is_free(1440, 10)); // past the day
    }

    #[test]
    fn test_is_free_clips_tail() {
        let grid = TimeGrid::new();
        assert!(grid.is_free(1430, 60));
    }

    #[test]
    fn test_first_free() {
        let mut grid = TimeGrid::new();
        grid.mark_range(at(0), at(420), Category::Sleep);
        assert_eq!(grid.first_free(0..=1440, 120), Some(420));
        assert_eq!(grid.first_free(0..=300, 120), None);
        assert_eq!(grid.first_free(500..=400, 10), None);
    }

    #[test]
    fn test_random_ranges_mark_exact_durations() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let start = rng.random_range(0..1440);
            let end = rng.random_range(0..1440);
            let range = TimeRange::new(at(start), at(end));

            let mut grid = TimeGrid::new();
            grid.mark(&range, Category::Fixed);

            assert_eq!(grid.count(Category::Fixed), range.duration() as usize);
            for m in 0..1440 {
                let marked = grid.get(m) == Some(Category::Fixed);
                assert_eq!(marked, range.contains(m), "minute {m} of {range:?}");
            }
        }
    }

    #[test]
    fn test_serde_rejects_wrong_length() {
        let grid = TimeGrid::new();
        let json = serde_json::to_string(&grid).unwrap();
        let back: TimeGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<TimeGrid>("[\"free\"]").is_err());
    }
}
