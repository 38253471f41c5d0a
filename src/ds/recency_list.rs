//! Recency-ordered key list backed by [`SlotArena`].
//!
//! Stores one node per cached key and links them by [`SlotId`], giving the
//! cache engine stable handles and O(1) repositioning without pointer
//! chasing.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<K>>)
//!   ┌────────┬────────────────────────────────────────────┐
//!   │ SlotId │ Node { key, prev, next }                   │
//!   ├────────┼────────────────────────────────────────────┤
//!   │ id_1   │ { key: A, prev: None, next: Some(id_2) }   │
//!   │ id_2   │ { key: B, prev: Some(id_1), next: id_3 }   │
//!   │ id_3   │ { key: C, prev: Some(id_2), next: None }   │
//!   └────────┴────────────────────────────────────────────┘
//!
//!   front ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── back
//!            (MRU)                   (LRU)
//! ```
//!
//! ## Operations
//! - `push_front(key)`: new node at the MRU end, returns its handle
//! - `move_to_front(id)`: detach + attach to front
//! - `pop_back()`: remove the LRU node, yielding its key
//! - `remove(id)`: detach + free an arbitrary node
//!
//! All of the above are O(1); `iter` is O(n).
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list of keys ordered from most to least recently used.
#[derive(Debug)]
pub struct RecencyList<K> {
    arena: SlotArena<Node<K>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
}

impl<K> RecencyList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            front: None,
            back: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` currently names a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the key at the front (most recently used).
    pub fn front(&self) -> Option<&K> {
        self.front
            .and_then(|id| self.arena.get(id).map(|node| &node.key))
    }

    /// Returns the key at the back (least recently used, next eviction
    /// candidate).
    pub fn back(&self) -> Option<&K> {
        self.back
            .and_then(|id| self.arena.get(id).map(|node| &node.key))
    }

    /// Returns the key for a node handle, if the handle is live.
    pub fn get(&self, id: SlotId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    /// Inserts a new node at the front and returns its handle.
    pub fn push_front(&mut self, key: K) -> SlotId {
        let id = self.arena.insert(Node {
            key,
            prev: None,
            next: self.front,
        });
        if let Some(front) = self.front {
            if let Some(node) = self.arena.get_mut(front) {
                node.prev = Some(id);
            }
        } else {
            self.back = Some(id);
        }
        self.front = Some(id);
        id
    }

    /// Removes and returns the key at the back.
    pub fn pop_back(&mut self) -> Option<K> {
        let id = self.back?;
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.key)
    }

    /// Removes the node `id` from the list and returns its key.
    pub fn remove(&mut self, id: SlotId) -> Option<K> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.key)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not
    /// live.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.front {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    /// Returns an iterator over keys from front (MRU) to back (LRU).
    pub fn iter(&self) -> RecencyListIter<'_, K> {
        RecencyListIter {
            list: self,
            current: self.front,
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.arena.get_mut(prev_id) {
                prev_node.next = next;
            }
        } else {
            self.front = next;
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.arena.get_mut(next_id) {
                next_node.prev = prev;
            }
        } else {
            self.back = prev;
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_front = self.front;
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = old_front;
        } else {
            return None;
        }
        if let Some(old_front) = old_front {
            if let Some(front_node) = self.arena.get_mut(old_front) {
                front_node.prev = Some(id);
            }
        } else {
            self.back = Some(id);
        }
        self.front = Some(id);
        Some(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.front.is_none() || self.back.is_none() {
            assert!(self.front.is_none());
            assert!(self.back.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.front;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let node = self.arena.get(id).expect("node missing");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.back, Some(id));
            }

            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len());
        }

        assert_eq!(count, self.len());
    }
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecencyListIter<'a, K> {
    list: &'a RecencyList<K>,
    current: Option<SlotId>,
}

impl<'a, K> Iterator for RecencyListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(list: &'a RecencyList<&'a str>) -> Vec<&'a str> {
        list.iter().copied().collect()
    }

    #[test]
    fn push_front_orders_mru_first() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(keys(&list), vec!["c", "b", "a"]);
        assert_eq!(list.front(), Some(&"c"));
        assert_eq!(list.back(), Some(&"a"));
        list.debug_validate_invariants();
    }

    #[test]
    fn move_to_front_repositions() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert!(list.move_to_front(a));
        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        list.debug_validate_invariants();

        // Moving the current front is a no-op.
        assert!(list.move_to_front(a));
        assert_eq!(keys(&list), vec!["a", "c", "b"]);
    }

    #[test]
    fn pop_back_returns_lru() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");

        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("b"));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_middle_node() {
        let mut list = RecencyList::new();
        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(keys(&list), vec!["c", "a"]);
        assert!(!list.contains(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn remove_front_and_back_nodes() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.remove(c), Some("c"));
        assert_eq!(list.front(), Some(&"b"));
        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.back(), Some(&"b"));
        assert_eq!(list.len(), 1);
        list.debug_validate_invariants();
    }

    #[test]
    fn stale_handle_after_pop_back() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        assert_eq!(list.pop_back(), Some("a"));

        // Slot gets reused by the next push; the old handle must stay dead.
        let b = list.push_front("b");
        assert!(!list.contains(a));
        assert!(!list.move_to_front(a));
        assert_eq!(list.remove(a), None);
        assert_eq!(list.get(b), Some(&"b"));
        list.debug_validate_invariants();
    }

    #[test]
    fn single_node_list() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");

        assert_eq!(list.front(), list.back());
        assert!(list.move_to_front(a));
        assert_eq!(list.remove(a), Some("a"));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn clear_resets_ends() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert!(!list.contains(a));
        list.debug_validate_invariants();
    }
}
