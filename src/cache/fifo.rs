//! Insertion Order Module
//!
//! Tracks the order in which keys were inserted for FIFO eviction.

use std::collections::BTreeMap;

// == Insertion Order ==
/// Tracks insertion order for FIFO eviction.
///
/// Every insertion is stamped with a strictly increasing sequence number, so
/// the first entry of the map is always the oldest resident key. Reads never
/// touch this structure.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Sequence number -> key, oldest first
    order: BTreeMap<u64, String>,
    /// Next sequence number to hand out
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push ==
    /// Records `key` as the newest insertion and returns its sequence number.
    ///
    /// The caller is responsible for removing any previous sequence number
    /// held by the same key.
    pub fn push(&mut self, key: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key.to_string());
        seq
    }

    // == Remove ==
    /// Forgets the insertion stamped `seq`.
    pub fn remove(&mut self, seq: u64) -> Option<String> {
        self.order.remove(&seq)
    }

    // == Pop Oldest ==
    /// Returns and removes the earliest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Peek Oldest ==
    /// Returns the earliest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.first_key_value().map(|(_, key)| key.as_str())
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.values().map(String::as_str)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertionOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.peek_oldest(), None);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut order = InsertionOrder::new();

        order.push("key1");
        order.push("key2");
        order.push("key3");

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some("key1"));
        assert_eq!(order.keys().collect::<Vec<_>>(), vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_sequence_numbers_increase() {
        let mut order = InsertionOrder::new();

        let a = order.push("a");
        let b = order.push("b");

        assert!(b > a);
    }

    #[test]
    fn test_reinsert_moves_to_back() {
        let mut order = InsertionOrder::new();

        let seq1 = order.push("key1");
        order.push("key2");

        // Re-inserting key1 drops its old stamp and takes a fresh one
        order.remove(seq1);
        order.push("key1");

        assert_eq!(order.peek_oldest(), Some("key2"));
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_pop_oldest() {
        let mut order = InsertionOrder::new();

        order.push("key1");
        order.push("key2");

        assert_eq!(order.pop_oldest(), Some("key1".to_string()));
        assert_eq!(order.pop_oldest(), Some("key2".to_string()));
        assert_eq!(order.pop_oldest(), None);
    }

    #[test]
    fn test_remove_unknown_sequence() {
        let mut order = InsertionOrder::new();
        order.push("key1");

        assert_eq!(order.remove(42), None);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut order = InsertionOrder::new();
        order.push("key1");
        order.push("key2");

        order.clear();
        assert!(order.is_empty());
    }
}
