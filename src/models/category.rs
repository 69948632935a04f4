//! Occupancy categories for grid minutes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What occupies a minute of the day.
///
/// Categories are mutually exclusive; a later mark on the grid replaces an
/// earlier one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Unallocated time.
    #[default]
    Free,
    /// The sleep window.
    Sleep,
    /// A user-declared fixed appointment.
    Fixed,
    /// Lunch or dinner.
    Meal,
    /// A packed to-do item.
    Todo,
}

impl Category {
    /// All categories in code order.
    pub const ALL: [Category; 5] = [
        Category::Free,
        Category::Sleep,
        Category::Fixed,
        Category::Meal,
        Category::Todo,
    ];

    /// Dense numeric tag (0 = free ... 4 = todo).
    pub fn code(self) -> u8 {
        match self {
            Category::Free => 0,
            Category::Sleep => 1,
            Category::Fixed => 2,
            Category::Meal => 3,
            Category::Todo => 4,
        }
    }

    /// Lowercase tag used in serialized output and CSS variable names.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Free => "free",
            Category::Sleep => "sleep",
            Category::Fixed => "fixed",
            Category::Meal => "meal",
            Category::Todo => "todo",
        }
    }

    /// Whether the minute is unallocated.
    #[inline]
    pub fn is_free(self) -> bool {
        self == Category::Free
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
