//! A priority queue whose elements can be removed from anywhere.
//!
//! [`SortedQueue`] is a binary min-heap. Every [`SortedQueue::push`] returns a
//! [`Handle`]; the handle reads the pushed value and can remove that element in
//! O(log n), wherever the element has since moved to in the heap.
//!
//! ```
//! use sorted_queue::SortedQueue;
//!
//! let mut q = SortedQueue::new();
//! q.push(1);
//! let zero = q.push(0);
//! q.push(2);
//!
//! assert!(zero.remove(&mut q));
//! assert!(!zero.remove(&mut q));
//! assert_eq!(q.pop().map(|h| *h.value()), Some(1));
//! assert_eq!(q.pop().map(|h| *h.value()), Some(2));
//! assert!(q.pop().is_none());
//! ```
//!
//! Ordering comes from a [`Compare`] implementation, which may be any
//! `Fn(&T, &T) -> Ordering`:
//!
//! ```
//! use sorted_queue::SortedQueue;
//!
//! let mut q = SortedQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! q.push(-1);
//! q.push(1);
//! q.push(0);
//! assert_eq!(q.pop().map(|h| *h.value()), Some(1));
//! ```
//!
//! The queue does no locking of its own. Wrap it in a `Mutex` to share it
//! between threads.

pub mod compare;
pub mod error;
pub mod handle;
mod slots;
pub mod sorted_queue;

#[cfg(test)]
mod testing;

pub use crate::compare::{Compare, Natural};
pub use crate::error::Error;
pub use crate::handle::Handle;
pub use crate::sorted_queue::SortedQueue;
