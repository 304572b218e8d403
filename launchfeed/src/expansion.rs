use crate::ItemKey;
use crate::key::{FeedKey, KeySet};

/// Tracks which items are showing their extended details.
///
/// Purely local UI state: it never triggers fetches and is never cleared by them. Keys of
/// items that disappear after a `reset` stay in the set; they are harmless and come back
/// into effect if the item reappears.
#[derive(Clone, Debug)]
pub struct ExpansionTracker<K = ItemKey> {
    expanded: KeySet<K>,
}

impl<K: FeedKey> ExpansionTracker<K> {
    pub fn new() -> Self {
        Self {
            expanded: KeySet::new(),
        }
    }

    /// Flips membership of `key` and returns whether it is now expanded.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.expanded.remove(&key) {
            flog!(trace, "collapsed item");
            false
        } else {
            self.expanded.insert(key);
            flog!(trace, "expanded item");
            true
        }
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.contains(key)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.expanded.iter()
    }
}

impl<K: FeedKey> Default for ExpansionTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
