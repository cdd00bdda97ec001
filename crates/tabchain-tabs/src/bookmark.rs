//! Saved (name, url) pairs.

use std::fmt;

/// A saved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

/// Bookmarks in insertion order, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `bookmark` unless an equal one is already saved.
    ///
    /// Returns `true` if it was added.
    pub fn insert(&mut self, bookmark: Bookmark) -> bool {
        if self.contains(&bookmark) {
            return false;
        }
        self.entries.push(bookmark);
        true
    }

    pub fn contains(&self, bookmark: &Bookmark) -> bool {
        self.entries.iter().any(|b| b == bookmark)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Bookmarks {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
