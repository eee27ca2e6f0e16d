use super::item::SelectionItem;

/// Result of [`SelectionList::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,

    /// An entry with the same key already exists; the list is unchanged.
    AlreadyPresent,

    /// The list is at capacity; the list is unchanged. There is no eviction.
    Full,
}

/// Result of [`SelectionList::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,

    /// The add half of the toggle hit the capacity guard. Only reachable on a
    /// bounded list; favorites lists are unbounded.
    Rejected,
}

/// Ordered, duplicate-free collection of selection entries.
///
/// Entries keep insertion order. An optional capacity turns over-cap inserts
/// into no-ops; nothing is ever evicted. Each entry is either absent or
/// present, with no intermediate state.
#[derive(Debug, Clone)]
pub struct SelectionList<T: SelectionItem> {
    entries: Vec<T>,
    capacity: Option<usize>,
}

impl<T: SelectionItem> SelectionList<T> {
    pub fn unbounded() -> Self {
        Self {
            entries: Vec::new(),
            capacity: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Replace the contents wholesale, re-applying the duplicate and capacity
    /// guards. Used when rehydrating from the backing store, so a tampered or
    /// stale snapshot cannot smuggle in duplicates or an over-cap list.
    pub fn replace(&mut self, entries: Vec<T>) {
        self.entries.clear();
        for entry in entries {
            let _ = self.insert(entry);
        }
    }

    /// Add an entry unless its key is already present or the list is full.
    pub fn insert(&mut self, entry: T) -> InsertOutcome {
        if self.contains(&entry.key()) {
            return InsertOutcome::AlreadyPresent;
        }
        if self.is_full() {
            return InsertOutcome::Full;
        }
        self.entries.push(entry);
        InsertOutcome::Inserted
    }

    /// Add the entry if absent, remove it if present.
    pub fn toggle(&mut self, entry: T) -> ToggleOutcome {
        let key = entry.key();
        if self.remove(&key) {
            return ToggleOutcome::Removed;
        }
        match self.insert(entry) {
            InsertOutcome::Inserted => ToggleOutcome::Added,
            // The remove above guarantees the key is absent, so the only
            // other outcome is the capacity guard.
            InsertOutcome::AlreadyPresent | InsertOutcome::Full => ToggleOutcome::Rejected,
        }
    }

    /// Remove the entry with the given key. Idempotent.
    pub fn remove(&mut self, key: &T::Key) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key() != *key);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.entries.iter().any(|entry| entry.key() == *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        match self.capacity {
            Some(capacity) => self.entries.len() >= capacity,
            None => false,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pick {
        group: &'static str,
        entity: &'static str,
    }

    impl Pick {
        fn new(group: &'static str, entity: &'static str) -> Self {
            Self { group, entity }
        }
    }

    impl SelectionItem for Pick {
        type Key = (&'static str, &'static str);

        fn key(&self) -> Self::Key {
            (self.group, self.entity)
        }
    }

    #[test]
    fn insert_keeps_insertion_order() {
        let mut list = SelectionList::unbounded();
        list.insert(Pick::new("h1", "b"));
        list.insert(Pick::new("h1", "a"));
        list.insert(Pick::new("h2", "c"));

        let order: Vec<_> = list.iter().map(|p| p.entity).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut list = SelectionList::unbounded();
        assert_eq!(list.insert(Pick::new("h1", "a")), InsertOutcome::Inserted);
        assert_eq!(list.insert(Pick::new("h1", "b")), InsertOutcome::Inserted);
        assert_eq!(
            list.insert(Pick::new("h1", "a")),
            InsertOutcome::AlreadyPresent
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn same_entity_under_different_groups_is_distinct() {
        let mut list = SelectionList::unbounded();
        assert_eq!(list.insert(Pick::new("h1", "a")), InsertOutcome::Inserted);
        assert_eq!(list.insert(Pick::new("h2", "a")), InsertOutcome::Inserted);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn bounded_list_rejects_fifth_insert_without_evicting() {
        let mut list = SelectionList::with_capacity(4);
        for entity in ["a", "b", "c", "d"] {
            assert_eq!(list.insert(Pick::new("h1", entity)), InsertOutcome::Inserted);
        }
        assert!(list.is_full());
        assert_eq!(list.insert(Pick::new("h1", "e")), InsertOutcome::Full);
        assert_eq!(list.len(), 4);
        // The first entry is still there: no LRU.
        assert!(list.contains(&("h1", "a")));
    }

    #[test]
    fn duplicate_check_wins_over_capacity_check() {
        let mut list = SelectionList::with_capacity(2);
        list.insert(Pick::new("h1", "a"));
        list.insert(Pick::new("h1", "b"));
        assert_eq!(
            list.insert(Pick::new("h1", "a")),
            InsertOutcome::AlreadyPresent
        );
    }

    #[test]
    fn remove_is_idempotent_and_inverse_of_insert() {
        let mut list = SelectionList::unbounded();
        list.insert(Pick::new("h1", "a"));
        let before: Vec<_> = list.entries().to_vec();

        list.insert(Pick::new("h1", "b"));
        assert!(list.remove(&("h1", "b")));
        assert_eq!(list.entries(), before.as_slice());

        assert!(!list.remove(&("h1", "b")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut list = SelectionList::unbounded();
        assert_eq!(list.toggle(Pick::new("h1", "a")), ToggleOutcome::Added);
        assert!(list.contains(&("h1", "a")));
        assert_eq!(list.toggle(Pick::new("h1", "a")), ToggleOutcome::Removed);
        assert!(!list.contains(&("h1", "a")));
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_into_full_bounded_list_is_rejected() {
        let mut list = SelectionList::with_capacity(1);
        list.insert(Pick::new("h1", "a"));
        assert_eq!(list.toggle(Pick::new("h1", "b")), ToggleOutcome::Rejected);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let mut list = SelectionList::with_capacity(4);
        for entity in ["a", "b", "c"] {
            list.insert(Pick::new("h1", entity));
        }
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(!list.is_full());
    }

    #[test]
    fn replace_reapplies_duplicate_and_capacity_guards() {
        let mut list = SelectionList::with_capacity(2);
        list.replace(vec![
            Pick::new("h1", "a"),
            Pick::new("h1", "a"),
            Pick::new("h1", "b"),
            Pick::new("h1", "c"),
        ]);
        assert_eq!(list.len(), 2);
        let order: Vec<_> = list.iter().map(|p| p.entity).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn no_duplicates_after_arbitrary_mutation_sequence() {
        let mut list = SelectionList::unbounded();
        list.insert(Pick::new("h1", "a"));
        list.insert(Pick::new("h2", "a"));
        list.remove(&("h1", "a"));
        list.insert(Pick::new("h1", "a"));
        list.insert(Pick::new("h1", "a"));
        list.toggle(Pick::new("h3", "z"));
        list.toggle(Pick::new("h3", "z"));
        list.insert(Pick::new("h2", "a"));

        let mut keys: Vec<_> = list.iter().map(|p| p.key()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
