//! Tab records and handles.

use serde::Serialize;
use std::fmt;
use tabchain_memory::MemoryUsage;

/// Handle to a tab in a [`TabList`](crate::TabList).
///
/// A handle stays valid until its tab is removed. Slots are reused, but each
/// reuse bumps the generation so an old handle never finds the new tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TabId {
    slot: usize,
    generation: u32,
}

impl TabId {
    pub(crate) fn new(slot: usize, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub(crate) fn slot(self) -> usize {
        self.slot
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tab({}v{})", self.slot, self.generation)
    }
}

/// A single browsing-session record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Page URL
    url: String,
    /// Display name
    name: String,
    /// Memory held by the tab
    memory: MemoryUsage,
}

impl Tab {
    /// Create a new tab.
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        memory: impl Into<MemoryUsage>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            memory: memory.into(),
        }
    }

    /// Get the URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the memory usage.
    pub fn memory(&self) -> MemoryUsage {
        self.memory
    }
}

/// Owned copy of a tab, detached from the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSummary {
    pub id: TabId,
    pub name: String,
    pub url: String,
    #[serde(rename = "memory_mb")]
    pub memory: MemoryUsage,
}

impl TabSummary {
    pub(crate) fn of(id: TabId, tab: &Tab) -> Self {
        Self {
            id,
            name: tab.name.clone(),
            url: tab.url.clone(),
            memory: tab.memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_accessors() {
        let tab = Tab::new("https://github.com", "Github", 110u32);
        assert_eq!(tab.url(), "https://github.com");
        assert_eq!(tab.name(), "Github");
        assert_eq!(tab.memory(), MemoryUsage::from(110u32));
    }

    #[test]
    fn test_summary_json() {
        let tab = Tab::new("https://kaggle.com", "Kaggle", 310.5);
        let summary = TabSummary::of(TabId::new(3, 1), &tab);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["name"], "Kaggle");
        assert_eq!(json["url"], "https://kaggle.com");
        assert_eq!(json["memory_mb"], 310.5);
        assert_eq!(json["id"]["slot"], 3);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(TabId::new(4, 2).to_string(), "Tab(4v2)");
    }
}
