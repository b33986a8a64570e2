use crate::compare::Compare;
use crate::slots::SlotId;
use crate::sorted_queue::SortedQueue;
use core::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Names one element pushed into a [`SortedQueue`].
///
/// A handle is returned by [`SortedQueue::push`] (and by `peek` and `pop`). It
/// lets the caller read the element's value and remove the element from the
/// queue, wherever it currently sits in the heap. Dropping a handle leaves the
/// element in the queue.
///
/// Once the element leaves the queue (through `remove`, `pop` or `clear`) the
/// handle is *retired*. Its value stays readable, but removal through it
/// reports `false` from then on. Retirement is permanent.
///
/// Handles cannot be constructed outside this crate.
pub struct Handle<T> {
    queue: u64,
    slot: SlotId,
    value: Arc<T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(queue: u64, slot: SlotId, value: Arc<T>) -> Self {
        Self { queue, slot, value }
    }

    pub(crate) fn queue_id(&self) -> u64 {
        self.queue
    }

    pub(crate) fn slot(&self) -> SlotId {
        self.slot
    }

    /// The value this handle was pushed with. Valid even after retirement.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Removes this handle's element from `queue`.
    ///
    /// Returns `false` if the element was already removed, or if `queue` is not
    /// the queue that issued this handle.
    pub fn remove<C: Compare<T>>(&self, queue: &mut SortedQueue<T, C>) -> bool {
        queue.remove(self)
    }

    /// Returns `true` if the element is still queued in `queue`.
    pub fn is_live<C: Compare<T>>(&self, queue: &SortedQueue<T, C>) -> bool {
        queue.contains(self)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            slot: self.slot,
            value: Arc::clone(&self.value),
        }
    }
}

/// Two handles are equal when they name the same pushed element.
impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue && self.slot == other.slot
    }
}

impl<T> Eq for Handle<T> {}

impl<T: Debug> Debug for Handle<T> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("Handle")
            .field("queue", &self.queue)
            .field("slot", &self.slot.key())
            .field("value", &*self.value)
            .finish()
    }
}
