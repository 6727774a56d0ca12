//! Doubly linked recency list stored in a slab.
//!
//! Nodes live in a `Vec` and link to each other by slot index rather than by
//! pointer. A slot index stays valid from `push_back` until the node is
//! removed, which is what lets the indexed cache keep `key -> slot` in its
//! hash map. Freed slots are recycled before the vector grows.
//!
//! The front of the list is the least recently used node and the back is the
//! most recently used one.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

struct Node<T> {
    val: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Slab-backed doubly linked list with stable slot indices.
pub(crate) struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        List {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value stored at `slot`, if the slot is occupied.
    #[inline]
    pub(crate) fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot)?.as_ref().map(|n| &n.val)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots.get_mut(slot)?.as_mut().map(|n| &mut n.val)
    }

    /// Returns the front (least recently used) value.
    pub(crate) fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    /// Appends `val` at the back and returns its slot.
    pub(crate) fn push_back(&mut self, val: T) -> usize {
        let node = Node {
            val,
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        slot
    }

    /// Removes and returns the front value.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.remove(head)
    }

    /// Removes the node at `slot`, returning its value.
    ///
    /// Returns `None` if the slot is vacant.
    pub(crate) fn remove(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        self.link(node.prev, node.next);
        self.free.push(slot);
        self.len -= 1;
        Some(node.val)
    }

    /// Relinks the node at `slot` as the back of the list.
    pub(crate) fn move_to_back(&mut self, slot: usize) {
        if self.tail == Some(slot) {
            return;
        }
        let Some((prev, next)) = self.links(slot) else {
            return;
        };
        self.link(prev, next);

        let old_tail = self.tail;
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail) => self.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Drops every node and releases the slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn links(&self, slot: usize) -> Option<(Option<usize>, Option<usize>)> {
        self.slots
            .get(slot)?
            .as_ref()
            .map(|n| (n.prev, n.next))
    }

    fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, slot: usize, prev: Option<usize>) {
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.prev = prev;
        }
    }

    /// Joins `prev` and `next` around a node being unlinked.
    fn link(&mut self, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.slots.get(self.front?)?.as_ref()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.slots.get(self.back?)?.as_ref()?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
