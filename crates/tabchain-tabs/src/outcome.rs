//! Results reported by tab list operations.
//!
//! Nothing on a tab list can fail; every edge case is one of these
//! variants, left to the caller to present.

use crate::bookmark::Bookmark;
use crate::tab::TabSummary;
use std::fmt;

/// Direction of travel along the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the head
    Prev,
    /// Towards the tail
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prev => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

/// Result of moving the cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// The cursor moved to this tab
    Switched(TabSummary),
    /// The current tab has no neighbour that way
    NoSuchTab(Direction),
    /// No tabs are open
    Empty,
}

/// Result of closing the current tab.
#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    Closed {
        closed: TabSummary,
        /// The tab now under the cursor, if any remain
        current: Option<TabSummary>,
    },
    Empty,
}

/// Result of bookmarking the current tab.
#[derive(Debug, Clone, PartialEq)]
pub enum BookmarkOutcome {
    Added(Bookmark),
    AlreadyBookmarked(Bookmark),
    NoCurrentTab,
}

/// Result of moving the current tab to the front.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved(TabSummary),
    AlreadyFirst(TabSummary),
    Empty,
}

/// Result of evicting the heaviest tab.
#[derive(Debug, Clone, PartialEq)]
pub enum EvictOutcome {
    Evicted {
        evicted: TabSummary,
        /// The tab under the cursor after eviction
        current: Option<TabSummary>,
    },
    Empty,
}
