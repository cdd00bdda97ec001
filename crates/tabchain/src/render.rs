//! Text rendering of tab list outcomes.
//!
//! Each function returns the status lines for one operation, without a
//! trailing newline.

use crate::config::ShellConfig;
use tabchain_memory::{MemoryPressureLevel, MemoryStats, MemoryUsage};
use tabchain_tabs::{
    Bookmark, BookmarkOutcome, CloseOutcome, EvictOutcome, MoveOutcome, SwitchOutcome, Tab, TabList,
    TabSummary,
};

const NO_TABS: &str = "No tabs open";

/// Formats outcomes for the console.
#[derive(Debug, Clone)]
pub struct Renderer {
    precision: usize,
    budget: Option<MemoryUsage>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&ShellConfig::default())
    }
}

impl Renderer {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            precision: config.memory_precision,
            budget: config.memory_budget(),
        }
    }

    fn memory(&self, memory: MemoryUsage) -> String {
        format!("{:.*}", self.precision, memory)
    }

    fn tab_line(&self, name: &str, url: &str, memory: MemoryUsage) -> String {
        format!("{name} ({url}) - memory: {}", self.memory(memory))
    }

    fn summary_line(&self, tab: &TabSummary) -> String {
        self.tab_line(&tab.name, &tab.url, tab.memory)
    }

    pub fn opened(&self, tab: &Tab) -> String {
        format!("New tab opened: {}", self.tab_line(tab.name(), tab.url(), tab.memory()))
    }

    pub fn switched(&self, outcome: &SwitchOutcome) -> String {
        match outcome {
            SwitchOutcome::Switched(tab) => format!("Current tab: {}", self.summary_line(tab)),
            SwitchOutcome::NoSuchTab(direction) => format!("No {direction} tab"),
            SwitchOutcome::Empty => NO_TABS.to_string(),
        }
    }

    pub fn closed(&self, outcome: &CloseOutcome) -> String {
        match outcome {
            CloseOutcome::Closed { closed, current } => {
                format!("Closed tab: {}\n{}", closed.name, self.now_current(current.as_ref()))
            }
            CloseOutcome::Empty => NO_TABS.to_string(),
        }
    }

    fn now_current(&self, current: Option<&TabSummary>) -> String {
        match current {
            Some(tab) => format!("Now the current tab = {}", tab.name),
            None => NO_TABS.to_string(),
        }
    }

    pub fn bookmarked(&self, outcome: &BookmarkOutcome) -> String {
        match outcome {
            BookmarkOutcome::Added(bookmark) => format!("Bookmark added: {bookmark}"),
            BookmarkOutcome::AlreadyBookmarked(bookmark) => {
                format!("The bookmark is already added: {bookmark}")
            }
            BookmarkOutcome::NoCurrentTab => "No current tab to bookmark".to_string(),
        }
    }

    pub fn bookmarks(&self, bookmarks: &[Bookmark]) -> String {
        if bookmarks.is_empty() {
            return "Bookmarks: (none)".to_string();
        }

        let mut out = String::from("Bookmarks:");
        for bookmark in bookmarks {
            out.push_str(&format!("\n  {bookmark}"));
        }
        out
    }

    pub fn moved(&self, outcome: &MoveOutcome) -> String {
        match outcome {
            MoveOutcome::Moved(tab) => format!("Moved current tab to first position: {}", tab.name),
            MoveOutcome::AlreadyFirst(tab) => format!("{} is already the first tab", tab.name),
            MoveOutcome::Empty => NO_TABS.to_string(),
        }
    }

    pub fn total_memory(&self, total: MemoryUsage) -> String {
        let mut out = format!("Total memory consumption = {}", self.memory(total));
        if let Some(budget) = self.budget {
            let level = MemoryPressureLevel::from_usage(total, budget);
            out.push_str(&format!(
                "\nMemory pressure: {level} of {} budget",
                self.memory(budget)
            ));
        }
        out
    }

    pub fn evicted(&self, outcome: &EvictOutcome) -> String {
        match outcome {
            EvictOutcome::Evicted { evicted, .. } => format!(
                "Deleting tab with highest memory consumption: {} ({})",
                evicted.name,
                self.memory(evicted.memory)
            ),
            EvictOutcome::Empty => NO_TABS.to_string(),
        }
    }

    pub fn tabs(&self, list: &TabList) -> String {
        format!("Browser tab list:\n{}", list.display())
    }

    pub fn current(&self, list: &TabList) -> String {
        match list.current() {
            Some(tab) => format!(
                "Current tab: {}",
                self.tab_line(tab.name(), tab.url(), tab.memory())
            ),
            None => NO_TABS.to_string(),
        }
    }

    pub fn stats(&self, stats: &MemoryStats) -> String {
        format!(
            "Open tabs: {} (opened {}, closed {}, evicted {})\nMemory: {} now, {} peak",
            stats.open(),
            stats.opened(),
            stats.closed(),
            stats.evicted(),
            self.memory(stats.total()),
            self.memory(stats.peak()),
        )
    }
}
