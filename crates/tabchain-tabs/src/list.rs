//! The tab list: an arena-backed doubly linked chain with a cursor.
//!
//! Tabs live in a slot arena. `prev`/`next` links, `head`, `tail` and
//! `current` are slot indices, so the chain never owns itself and a
//! removed tab is simply taken out of its slot.
//!
//! ```text
//!   head                          tail
//!    |                             |
//!    v                             v
//!   [A] <-> [B] <-> [C] <-> ... <-> [N]
//!            ^
//!            |
//!         current
//! ```

use crate::bookmark::{Bookmark, Bookmarks};
use crate::outcome::{
    BookmarkOutcome, CloseOutcome, Direction, EvictOutcome, MoveOutcome, SwitchOutcome,
};
use crate::tab::{Tab, TabId, TabSummary};
use std::fmt;
use tabchain_memory::{MemoryStats, MemoryUsage};
use tracing::{debug, info};

/// A linked tab plus its neighbours' slots.
#[derive(Debug)]
struct Node {
    tab: Tab,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The browser's open tabs, in chain order, plus bookmarks.
#[derive(Debug, Default)]
pub struct TabList {
    /// Arena of tab slots
    slots: Vec<Slot>,
    /// Vacant slots ready for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    current: Option<usize>,
    len: usize,
    bookmarks: Bookmarks,
    stats: MemoryStats,
}

impl TabList {
    /// Create an empty tab list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a tab at the end of the chain and make it current.
    pub fn add_new_tab(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        memory: impl Into<MemoryUsage>,
    ) -> TabId {
        self.push(Tab::new(url, name, memory))
    }

    /// Link an already built tab at the end of the chain and make it current.
    pub fn push(&mut self, tab: Tab) -> TabId {
        let memory = tab.memory();
        let slot = self.allocate(Node {
            tab,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.current = Some(slot);
        self.len += 1;
        self.stats.record_open(self.total_memory());

        let id = self.id_of(slot);
        debug!(
            tab_id = %id,
            name = self.node(slot).tab.name(),
            memory = memory.as_megabytes(),
            "Opened tab"
        );
        id
    }

    /// Move the cursor one tab towards the head.
    pub fn switch_to_prev_tab(&mut self) -> SwitchOutcome {
        self.switch(Direction::Prev)
    }

    /// Move the cursor one tab towards the tail.
    pub fn switch_to_next_tab(&mut self) -> SwitchOutcome {
        self.switch(Direction::Next)
    }

    fn switch(&mut self, direction: Direction) -> SwitchOutcome {
        let Some(current) = self.current else {
            return SwitchOutcome::Empty;
        };

        let node = self.node(current);
        let neighbour = match direction {
            Direction::Prev => node.prev,
            Direction::Next => node.next,
        };

        match neighbour {
            Some(slot) => {
                self.current = Some(slot);
                debug!(tab_id = %self.id_of(slot), %direction, "Switched tab");
                SwitchOutcome::Switched(self.summary(slot))
            }
            None => SwitchOutcome::NoSuchTab(direction),
        }
    }

    /// Close the current tab.
    ///
    /// The cursor lands on the closed tab's successor, or its predecessor
    /// if it was the last tab.
    pub fn close_current_tab(&mut self) -> CloseOutcome {
        let Some(slot) = self.current else {
            return CloseOutcome::Empty;
        };

        let closed = self.summary(slot);
        let (prev, next) = self.detach(slot);
        self.current = next.or(prev);
        self.remove(slot);
        self.stats.record_close(self.total_memory());

        debug!(tab_id = %closed.id, name = %closed.name, "Closed tab");
        CloseOutcome::Closed {
            closed,
            current: self.current.map(|slot| self.summary(slot)),
        }
    }

    /// Save the current tab's (name, url) unless it is already saved.
    pub fn bookmark_current(&mut self) -> BookmarkOutcome {
        let Some(slot) = self.current else {
            return BookmarkOutcome::NoCurrentTab;
        };

        let tab = &self.node(slot).tab;
        let bookmark = Bookmark::new(tab.name(), tab.url());

        if self.bookmarks.insert(bookmark.clone()) {
            debug!(name = %bookmark.name, url = %bookmark.url, "Bookmark added");
            BookmarkOutcome::Added(bookmark)
        } else {
            BookmarkOutcome::AlreadyBookmarked(bookmark)
        }
    }

    /// All bookmarks in the order they were saved.
    pub fn show_bookmark_tab(&self) -> &[Bookmark] {
        self.bookmarks.as_slice()
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// Relink the current tab as the head, keeping everything else in order.
    pub fn move_current_to_first(&mut self) -> MoveOutcome {
        let Some(slot) = self.current else {
            return MoveOutcome::Empty;
        };
        if self.head == Some(slot) {
            return MoveOutcome::AlreadyFirst(self.summary(slot));
        }

        self.detach(slot);

        let old_head = self.head;
        {
            let node = self.node_mut(slot);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head) => self.node_mut(head).prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);

        debug!(tab_id = %self.id_of(slot), "Moved tab to first position");
        MoveOutcome::Moved(self.summary(slot))
    }

    /// Sum of memory over the whole chain.
    pub fn total_memory(&self) -> MemoryUsage {
        self.iter().map(|(_, tab)| tab.memory()).sum()
    }

    /// Evict the tab holding the most memory.
    ///
    /// Ties go to the tab nearest the head. If the evicted tab was current,
    /// the cursor moves as it does for [`close_current_tab`](Self::close_current_tab).
    pub fn delete_tab(&mut self) -> EvictOutcome {
        let mut heaviest: Option<(TabId, MemoryUsage)> = None;
        for (id, tab) in self.iter() {
            let heavier = match heaviest {
                Some((_, max)) => tab.memory() > max,
                None => true,
            };
            if heavier {
                heaviest = Some((id, tab.memory()));
            }
        }

        let Some((id, _)) = heaviest else {
            return EvictOutcome::Empty;
        };

        let slot = id.slot();
        let evicted = self.summary(slot);
        let (prev, next) = self.detach(slot);
        if self.current == Some(slot) {
            self.current = next.or(prev);
        }
        self.remove(slot);
        self.stats.record_eviction(self.total_memory());

        info!(
            tab_id = %evicted.id,
            name = %evicted.name,
            memory = evicted.memory.as_megabytes(),
            "Evicted tab with highest memory consumption"
        );
        EvictOutcome::Evicted {
            evicted,
            current: self.current.map(|slot| self.summary(slot)),
        }
    }

    /// Render tab names from head to tail.
    pub fn display(&self) -> TabListDisplay<'_> {
        TabListDisplay { list: self }
    }

    /// Get the number of open tabs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<TabId> {
        self.head.map(|slot| self.id_of(slot))
    }

    pub fn tail(&self) -> Option<TabId> {
        self.tail.map(|slot| self.id_of(slot))
    }

    /// Get the tab under the cursor.
    pub fn current(&self) -> Option<&Tab> {
        self.current.map(|slot| &self.node(slot).tab)
    }

    pub fn current_id(&self) -> Option<TabId> {
        self.current.map(|slot| self.id_of(slot))
    }

    /// Look up a tab by handle. Handles of removed tabs resolve to `None`.
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.slots
            .get(id.slot())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .map(|node| &node.tab)
    }

    /// Iterate tabs from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Iterate tab names from head to tail.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(_, tab)| tab.name())
    }

    /// Owned copies of all tabs, head to tail.
    pub fn summaries(&self) -> Vec<TabSummary> {
        self.iter().map(|(id, tab)| TabSummary::of(id, tab)).collect()
    }

    /// Get running memory statistics.
    pub fn stats(&self) -> &MemoryStats {
        &self.stats
    }

    fn allocate(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot].node = Some(node);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    /// Unlink `slot` from its neighbours, patching `head`/`tail`.
    ///
    /// Returns the former `(prev, next)`; the node's own links are cleared.
    fn detach(&mut self, slot: usize) -> (Option<usize>, Option<usize>) {
        let node = self.node_mut(slot);
        let prev = node.prev.take();
        let next = node.next.take();

        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        (prev, next)
    }

    /// Drop a detached tab and retire its handle.
    fn remove(&mut self, slot: usize) {
        let entry = &mut self.slots[slot];
        if entry.node.take().is_some() {
            entry.generation = entry.generation.wrapping_add(1);
            self.free.push(slot);
            self.len -= 1;
        }
    }

    fn id_of(&self, slot: usize) -> TabId {
        TabId::new(slot, self.slots[slot].generation)
    }

    fn summary(&self, slot: usize) -> TabSummary {
        TabSummary::of(self.id_of(slot), &self.node(slot).tab)
    }

    fn node(&self, slot: usize) -> &Node {
        self.slots[slot]
            .node
            .as_ref()
            .expect("linked slot holds a tab")
    }

    fn node_mut(&mut self, slot: usize) -> &mut Node {
        self.slots[slot]
            .node
            .as_mut()
            .expect("linked slot holds a tab")
    }
}

/// Head-to-tail iterator over a [`TabList`].
pub struct Iter<'a> {
    list: &'a TabList,
    next: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (TabId, &'a Tab);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        let node = self.list.node(slot);
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((self.list.id_of(slot), &node.tab))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TabList {
    type Item = (TabId, &'a Tab);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Text rendering of the chain, ending with `END`.
pub struct TabListDisplay<'a> {
    list: &'a TabList,
}

impl fmt::Display for TabListDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.list.names() {
            write!(f, "| {name} |--> ")?;
        }
        f.write_str("END")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk the chain both ways and check every link invariant.
    fn assert_consistent(list: &TabList) {
        let mut forward = Vec::new();
        let mut prev = None;
        let mut cursor = list.head;
        while let Some(slot) = cursor {
            let node = list.node(slot);
            assert_eq!(node.prev, prev, "prev link of slot {slot} is broken");
            assert!(forward.len() <= list.slots.len(), "chain has a cycle");
            forward.push(slot);
            prev = Some(slot);
            cursor = node.next;
        }
        assert_eq!(list.tail, prev);
        assert_eq!(forward.len(), list.len());

        let mut backward = Vec::new();
        let mut cursor = list.tail;
        while let Some(slot) = cursor {
            backward.push(slot);
            cursor = list.node(slot).prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);

        match list.current {
            Some(slot) => assert!(forward.contains(&slot), "current is not in the chain"),
            None => assert!(list.is_empty()),
        }

        for (i, a) in list.bookmarks().iter().enumerate() {
            assert!(list.bookmarks().iter().skip(i + 1).all(|b| b != a));
        }
    }

    fn names(list: &TabList) -> Vec<&str> {
        list.names().collect()
    }

    fn current_name(list: &TabList) -> Option<&str> {
        list.current().map(Tab::name)
    }

    fn list_of(tabs: &[(&str, f64)]) -> TabList {
        let mut list = TabList::new();
        for (name, memory) in tabs {
            let url = format!("https://{}.example", name.to_lowercase());
            list.add_new_tab(url, *name, *memory);
            assert_consistent(&list);
        }
        list
    }

    #[test]
    fn test_first_tab_is_head_tail_and_current() {
        let mut list = TabList::new();
        let id = list.add_new_tab("https://www.google.com", "Google", 23.45);

        assert_eq!(list.len(), 1);
        assert_eq!(list.head(), Some(id));
        assert_eq!(list.tail(), Some(id));
        assert_eq!(list.current_id(), Some(id));
        assert_consistent(&list);
    }

    #[test]
    fn test_add_appends_and_moves_cursor() {
        let list = list_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);

        assert_eq!(names(&list), ["A", "B", "C"]);
        assert_eq!(current_name(&list), Some("C"));
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn test_switch_at_edges() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0)]);

        assert_eq!(list.switch_to_next_tab(), SwitchOutcome::NoSuchTab(Direction::Next));
        assert_eq!(current_name(&list), Some("B"));

        match list.switch_to_prev_tab() {
            SwitchOutcome::Switched(summary) => assert_eq!(summary.name, "A"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(list.switch_to_prev_tab(), SwitchOutcome::NoSuchTab(Direction::Prev));
        assert_eq!(current_name(&list), Some("A"));
        assert_consistent(&list);
    }

    #[test]
    fn test_next_then_prev_restores_current() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        list.switch_to_prev_tab();
        let before = list.current_id();

        list.switch_to_next_tab();
        list.switch_to_prev_tab();
        assert_eq!(list.current_id(), before);

        list.switch_to_prev_tab();
        list.switch_to_next_tab();
        assert_eq!(list.current_id(), before);
    }

    #[test]
    fn test_empty_list_signals() {
        let mut list = TabList::new();

        assert_eq!(list.close_current_tab(), CloseOutcome::Empty);
        assert_eq!(list.delete_tab(), EvictOutcome::Empty);
        assert_eq!(list.switch_to_next_tab(), SwitchOutcome::Empty);
        assert_eq!(list.switch_to_prev_tab(), SwitchOutcome::Empty);
        assert_eq!(list.move_current_to_first(), MoveOutcome::Empty);
        assert_eq!(list.bookmark_current(), BookmarkOutcome::NoCurrentTab);
        assert_eq!(list.total_memory(), MemoryUsage::ZERO);
        assert_eq!(list.display().to_string(), "END");
        assert_consistent(&list);
    }

    #[test]
    fn test_close_middle_moves_to_next() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        list.switch_to_prev_tab();

        match list.close_current_tab() {
            CloseOutcome::Closed { closed, current } => {
                assert_eq!(closed.name, "B");
                assert_eq!(current.map(|t| t.name), Some("C".to_string()));
            }
            CloseOutcome::Empty => panic!("list was not empty"),
        }
        assert_eq!(names(&list), ["A", "C"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_close_tail_moves_to_prev() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0)]);
        list.close_current_tab();

        assert_eq!(names(&list), ["A"]);
        assert_eq!(current_name(&list), Some("A"));
        assert_eq!(list.tail(), list.head());
        assert_consistent(&list);
    }

    #[test]
    fn test_close_head_updates_head() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0)]);
        list.switch_to_prev_tab();
        list.close_current_tab();

        assert_eq!(names(&list), ["B"]);
        assert_eq!(current_name(&list), Some("B"));
        assert_consistent(&list);
    }

    #[test]
    fn test_close_only_tab_empties_list() {
        let mut list = list_of(&[("A", 1.0)]);

        match list.close_current_tab() {
            CloseOutcome::Closed { current, .. } => assert!(current.is_none()),
            CloseOutcome::Empty => panic!("list was not empty"),
        }
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.current_id(), None);
        assert_consistent(&list);
    }

    #[test]
    fn test_bookmark_twice_keeps_one_entry() {
        let mut list = list_of(&[("YouTube", 56.0)]);

        assert!(matches!(list.bookmark_current(), BookmarkOutcome::Added(_)));
        assert!(matches!(list.bookmark_current(), BookmarkOutcome::AlreadyBookmarked(_)));
        assert_eq!(list.show_bookmark_tab().len(), 1);
        assert_eq!(list.show_bookmark_tab()[0].name, "YouTube");
        assert_consistent(&list);
    }

    #[test]
    fn test_bookmarks_survive_tab_close() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0)]);
        list.bookmark_current();
        list.close_current_tab();
        list.bookmark_current();

        let saved: Vec<_> = list.show_bookmark_tab().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(saved, ["B", "A"]);
    }

    #[test]
    fn test_move_tail_to_first() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0)]);
        let moved = list.current_id();

        assert!(matches!(list.move_current_to_first(), MoveOutcome::Moved(_)));
        assert_eq!(names(&list), ["C", "A", "B"]);
        assert_eq!(list.current_id(), moved);
        assert_eq!(list.head(), moved);
        assert_eq!(list.tail().and_then(|id| list.get(id)).map(Tab::name), Some("B"));
        assert_consistent(&list);
    }

    #[test]
    fn test_move_middle_to_first() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0)]);
        list.switch_to_prev_tab();
        list.switch_to_prev_tab();
        list.move_current_to_first();

        assert_eq!(names(&list), ["B", "A", "C", "D"]);
        assert_eq!(current_name(&list), Some("B"));
        assert_consistent(&list);
    }

    #[test]
    fn test_move_head_is_noop() {
        let mut list = list_of(&[("A", 1.0), ("B", 2.0)]);
        list.switch_to_prev_tab();

        assert!(matches!(list.move_current_to_first(), MoveOutcome::AlreadyFirst(_)));
        assert_eq!(names(&list), ["A", "B"]);
        assert_consistent(&list);
    }

    #[test]
    fn test_total_memory_tracks_removals() {
        let mut list = list_of(&[("A", 10.0), ("B", 20.5), ("C", 30.0)]);
        assert_eq!(list.total_memory().as_megabytes(), 60.5);

        list.close_current_tab();
        assert_eq!(list.total_memory().as_megabytes(), 30.5);

        list.delete_tab();
        assert_eq!(list.total_memory().as_megabytes(), 10.0);
        assert_eq!(list.stats().total(), list.total_memory());
    }

    #[test]
    fn test_delete_first_of_tied_maximum() {
        let mut list = list_of(&[("A", 10.0), ("B", 20.0), ("C", 20.0)]);

        match list.delete_tab() {
            EvictOutcome::Evicted { evicted, current } => {
                assert_eq!(evicted.name, "B");
                assert_eq!(current.map(|t| t.name), Some("C".to_string()));
            }
            EvictOutcome::Empty => panic!("list was not empty"),
        }
        assert_eq!(names(&list), ["A", "C"]);
        assert_eq!(list.total_memory().as_megabytes(), 30.0);
        assert_consistent(&list);
    }

    #[test]
    fn test_delete_current_moves_cursor() {
        let mut list = list_of(&[("A", 10.0), ("B", 50.0), ("C", 20.0)]);
        list.switch_to_prev_tab();
        list.delete_tab();

        assert_eq!(names(&list), ["A", "C"]);
        assert_eq!(current_name(&list), Some("C"));

        let mut list = list_of(&[("A", 10.0), ("B", 50.0)]);
        list.delete_tab();
        assert_eq!(current_name(&list), Some("A"));
        assert_consistent(&list);
    }

    #[test]
    fn test_delete_other_keeps_cursor() {
        let mut list = list_of(&[("A", 99.0), ("B", 1.0), ("C", 2.0)]);
        list.delete_tab();

        assert_eq!(names(&list), ["B", "C"]);
        assert_eq!(current_name(&list), Some("C"));
        assert_consistent(&list);
    }

    #[test]
    fn test_delete_leaves_nothing_heavier() {
        let mut list =
            list_of(&[("A", 5.0), ("B", 40.0), ("C", 12.0), ("D", 40.0), ("E", 7.0)]);
        while !list.is_empty() {
            let EvictOutcome::Evicted { evicted, .. } = list.delete_tab() else {
                panic!("list was not empty");
            };
            assert!(list.iter().all(|(_, tab)| tab.memory() <= evicted.memory));
            assert_consistent(&list);
        }
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut list = TabList::new();
        let old = list.add_new_tab("https://a.example", "A", 1.0);
        list.close_current_tab();
        let new = list.add_new_tab("https://b.example", "B", 2.0);

        assert_ne!(old, new);
        assert!(list.get(old).is_none());
        assert_eq!(list.get(new).map(Tab::name), Some("B"));
    }

    #[test]
    fn test_stats_total_with_negative_memory() {
        let mut list = list_of(&[("A", -5.0), ("B", 10.0)]);
        list.close_current_tab();

        assert_eq!(list.total_memory(), MemoryUsage::from(-5.0));
        assert_eq!(list.stats().total(), list.total_memory());
        assert_eq!(list.stats().peak(), MemoryUsage::from(5.0));
    }

    #[test]
    fn test_stats_total_recovers_after_nan_tab_leaves() {
        let mut list = list_of(&[("A", f64::NAN), ("B", 10.0)]);
        assert!(list.stats().total().as_megabytes().is_nan());

        // Nothing compares greater than NaN, so the first tab is evicted
        list.delete_tab();
        assert_eq!(names(&list), ["B"]);
        assert_eq!(list.total_memory(), MemoryUsage::from(10.0));
        assert_eq!(list.stats().total(), list.total_memory());
    }

    #[test]
    fn test_push_prebuilt_tab() {
        let mut list = list_of(&[("A", 1.0)]);
        let id = list.push(Tab::new("https://b.example", "B", 2.0));

        assert_eq!(list.current_id(), Some(id));
        assert_eq!(list.tail(), Some(id));
        assert_eq!(names(&list), ["A", "B"]);
        assert_eq!(list.stats().opened(), 2);
        assert_consistent(&list);
    }

    #[test]
    fn test_display() {
        let list = list_of(&[("Google", 23.45), ("YouTube", 56.0)]);
        assert_eq!(list.display().to_string(), "| Google |--> | YouTube |--> END");
    }

    #[test]
    fn test_mixed_operations_keep_chain_consistent() {
        let mut list =
            list_of(&[("A", 3.0), ("B", 9.0), ("C", 4.0), ("D", 1.0), ("E", 6.0)]);
        let mut removed = MemoryUsage::ZERO;

        list.switch_to_prev_tab();
        list.move_current_to_first();
        assert_consistent(&list);
        list.switch_to_next_tab();
        list.switch_to_next_tab();
        if let CloseOutcome::Closed { closed, .. } = list.close_current_tab() {
            removed += closed.memory;
        }
        assert_consistent(&list);
        if let EvictOutcome::Evicted { evicted, .. } = list.delete_tab() {
            removed += evicted.memory;
        }
        assert_consistent(&list);
        list.add_new_tab("https://f.example", "F", 2.0);
        list.move_current_to_first();
        assert_consistent(&list);

        let added = MemoryUsage::from(3.0 + 9.0 + 4.0 + 1.0 + 6.0 + 2.0);
        assert_eq!(list.total_memory(), added - removed);
        assert_eq!(list.stats().total(), list.total_memory());
        assert_eq!(list.stats().open(), list.len());
    }
}
