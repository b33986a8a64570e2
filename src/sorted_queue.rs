use crate::compare::{Compare, Natural};
use crate::error::Error;
use crate::handle::Handle;
use crate::slots::SlotTable;
use core::cmp::Ordering;
use core::fmt::{Debug, Formatter};
use log::{debug, trace};
use std::sync::atomic::{self, AtomicU64};
use std::sync::Arc;

// Handles remember which queue issued them, so that one queue never acts on
// another queue's slot keys.
static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(0);

fn left(parent: usize) -> usize {
    parent * 2 + 1
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

struct Node<T> {
    /// Key of this element's slot in `SortedQueue::slots`.
    key: usize,
    value: Arc<T>,
}

/// A binary min-heap whose elements can be removed from any position.
///
/// `push` returns a [`Handle`] for the new element. The handle can later remove
/// the element in O(log n), wherever it has moved to in the heap. `peek` and
/// `pop` give the smallest element under the queue's comparator.
///
/// The heap is a dense `Vec`. Each element also owns a slot in a side table
/// which records the element's current index in that `Vec`; every move of an
/// element updates its slot in the same step.
pub struct SortedQueue<T, C = Natural> {
    id: u64,
    cmp: C,
    heap: Vec<Node<T>>,
    slots: SlotTable,
}

impl<T: PartialOrd> SortedQueue<T> {
    /// Creates an empty queue ordered by [`Natural`].
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T: PartialOrd> Default for SortedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> SortedQueue<T, C> {
    /// Creates an empty queue ordered by `cmp`.
    ///
    /// Closures must annotate their argument types, e.g.
    /// `|a: &i32, b: &i32| b.cmp(a)`.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            id: NEXT_QUEUE_ID.fetch_add(1, atomic::Ordering::Relaxed),
            cmp,
            heap: Vec::with_capacity(capacity),
            slots: SlotTable::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `value` and returns a handle to it.
    pub fn push(&mut self, value: T) -> Handle<T> {
        let position = self.heap.len();
        let slot = self.slots.insert(position);
        let value = Arc::new(value);
        self.heap.push(Node {
            key: slot.key(),
            value: Arc::clone(&value),
        });
        let position = self.sift_up(position);
        trace!("push: slot {} settled at {} of {}", slot.key(), position, self.heap.len());
        Handle::new(self.id, slot, value)
    }

    /// Returns a handle to the smallest element, leaving it queued.
    pub fn peek(&self) -> Option<Handle<T>> {
        let node = self.heap.first()?;
        Some(Handle::new(
            self.id,
            self.slots.id_of_key(node.key),
            Arc::clone(&node.value),
        ))
    }

    /// Returns the smallest value, leaving it queued.
    pub fn peek_value(&self) -> Option<&T> {
        self.heap.first().map(|node| &*node.value)
    }

    /// Removes the smallest element. The returned handle is already retired,
    /// but its value can still be read.
    pub fn pop(&mut self) -> Option<Handle<T>> {
        if self.heap.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes `handle`'s element. Returns `false` if the element was already
    /// removed or `handle` came from another queue.
    pub fn remove(&mut self, handle: &Handle<T>) -> bool {
        self.try_remove(handle).is_ok()
    }

    /// Removes `handle`'s element, reporting why it could not be removed.
    pub fn try_remove(&mut self, handle: &Handle<T>) -> Result<(), Error> {
        if handle.queue_id() != self.id {
            return Err(Error::ForeignQueue);
        }
        let position = self.slots.position(handle.slot()).ok_or(Error::Retired)?;
        self.remove_at(position);
        Ok(())
    }

    /// Returns `true` if `handle`'s element is queued here.
    pub fn contains(&self, handle: &Handle<T>) -> bool {
        handle.queue_id() == self.id && self.slots.position(handle.slot()).is_some()
    }

    /// Removes every element, retiring all outstanding handles.
    pub fn clear(&mut self) {
        debug!("clear: retiring {} elements", self.heap.len());
        self.heap.clear();
        self.slots.release_all();
    }

    /// Asserts the heap order and that every slot records its element's
    /// actual index.
    ///
    /// This walks the whole heap. Mutations only assert the slots they touch.
    pub fn check(&self) {
        assert_eq!(self.slots.num_occupied(), self.heap.len());
        for (i, node) in self.heap.iter().enumerate() {
            assert_eq!(
                self.slots.position_of_key(node.key),
                i,
                "slot {} records a stale position",
                node.key
            );
        }
        for i in 1..self.heap.len() {
            let p = parent(i);
            assert!(
                self.cmp.compare(&self.heap[p].value, &self.heap[i].value) != Ordering::Greater,
                "heap order violated between {} and its child {}",
                p,
                i
            );
        }
    }

    /// Removes the element at `position` and returns its (retired) handle.
    ///
    /// The last leaf takes over the vacated index and is then sifted up and
    /// down; at most one of the two moves it, since the rest of the heap was
    /// already in order.
    fn remove_at(&mut self, position: usize) -> Handle<T> {
        let removed = self.heap.swap_remove(position);
        let slot = self.slots.id_of_key(removed.key);
        if position < self.heap.len() {
            self.slots.set_position(self.heap[position].key, position);
            debug_assert_eq!(self.slots.position_of_key(self.heap[position].key), position);
            let moved = self.sift_up(position);
            self.sift_down(moved);
        }
        self.slots.release(removed.key);
        trace!("remove: slot {} left from {}, {} remain", removed.key, position, self.heap.len());
        debug_assert_eq!(self.slots.num_occupied(), self.heap.len());
        Handle::new(self.id, slot, removed.value)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.heap[a].value, &self.heap[b].value) == Ordering::Less
    }

    /// Moves the element at `pos` toward the root. Returns its final index.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = parent(pos);
            let order = self.cmp.compare(&self.heap[parent].value, &self.heap[pos].value);
            if order != Ordering::Greater {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    /// Moves the element at `pos` toward the leaves. Returns its final index.
    ///
    /// Ties go to the left child, and a child only displaces its parent when
    /// it is strictly smaller.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = left(pos);
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.swap(child, pos);
            pos = child;
        }
        pos
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.set_position(self.heap[a].key, a);
        self.slots.set_position(self.heap[b].key, b);
        debug_assert_eq!(self.slots.position_of_key(self.heap[a].key), a);
        debug_assert_eq!(self.slots.position_of_key(self.heap[b].key), b);
    }
}

impl<T: Debug, C> Debug for SortedQueue<T, C> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q: ")?;
        for node in self.heap.iter() {
            write!(fmt, "{:?} ", node.value)?;
        }
        Ok(())
    }
}
