//! Run-length encoding of a day grid for clock-ring rendering.
//!
//! Adjacent minutes with the same category merge into one segment. Each
//! segment maps to an arc of a 360° ring, `angle = minute × 360 / len`.
//!
//! The segment starting at minute 0 and the one ending at the last minute
//! are never merged across midnight, even when they share a category.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::{Category, TimeGrid};

/// A maximal run of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSegment {
    /// Occupant of every minute in the run.
    pub category: Category,
    /// First minute (inclusive).
    pub start_minute: u32,
    /// Last minute (exclusive).
    pub end_minute: u32,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
}

impl GridSegment {
    /// Minutes in the run.
    #[inline]
    pub fn minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Angular span in degrees.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Encodes a grid into ring segments.
///
/// # Example
///
/// ```
/// use u_dayplan::encoding::encode;
/// use u_dayplan::models::{Category, TimeGrid, TimeRange};
///
/// let mut grid = TimeGrid::new();
/// grid.mark(&TimeRange::parse("06:00", "12:00").unwrap(), Category::Fixed);
///
/// let segments = encode(&grid);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[1].category, Category::Fixed);
/// assert_eq!(segments[1].start_angle, 90.0);
/// assert_eq!(segments[1].end_angle, 180.0);
/// ```
pub fn encode(grid: &TimeGrid) -> Vec<GridSegment> {
    encode_slots(grid.slots())
}

/// Encodes a raw slot sequence into ring segments.
///
/// An empty sequence encodes to a single free segment spanning 0°–360°.
pub fn encode_slots(slots: &[Category]) -> Vec<GridSegment> {
    let Some(&first) = slots.first() else {
        return vec![GridSegment {
            category: Category::Free,
            start_minute: 0,
            end_minute: 0,
            start_angle: 0.0,
            end_angle: 360.0,
        }];
    };

    let len = slots.len();
    let angle = |i: usize| i as f64 * 360.0 / len as f64;

    let mut segments = Vec::new();
    let mut current = first;
    let mut run_start = 0usize;

    for i in 1..=len {
        if i == len || slots[i] != current {
            segments.push(GridSegment {
                category: current,
                start_minute: run_start as u32,
                end_minute: i as u32,
                start_angle: angle(run_start),
                end_angle: angle(i),
            });
            if i < len {
                current = slots[i];
                run_start = i;
            }
        }
    }

    segments
}

/// Renders segments as a CSS `conic-gradient(...)` value.
///
/// Colors are `var(--<category>-color)` custom properties.
pub fn conic_gradient(segments: &[GridSegment]) -> String {
    let mut css = String::from("conic-gradient(");
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            css.push_str(", ");
        }
        let _ = write!(
            css,
            "var(--{}-color) {}deg {}deg",
            seg.category.tag(),
            seg.start_angle,
            seg.end_angle
        );
    }
    css.push(')');
    css
}
