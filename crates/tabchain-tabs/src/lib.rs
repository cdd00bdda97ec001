//! tabchain Tab List
//!
//! Implements the browser's tab list as a doubly linked chain with:
//! - An arena of tabs addressed by generational handles
//! - A movable "current" cursor for navigation
//! - Memory-based eviction of the heaviest tab
//! - A deduplicated bookmark collection

mod bookmark;
mod list;
mod outcome;
mod tab;

pub use bookmark::{Bookmark, Bookmarks};
pub use list::{Iter, TabList, TabListDisplay};
pub use outcome::{
    BookmarkOutcome, CloseOutcome, Direction, EvictOutcome, MoveOutcome, SwitchOutcome,
};
pub use tab::{Tab, TabId, TabSummary};

pub use tabchain_memory::{MemoryStats, MemoryUsage};
