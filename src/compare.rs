use core::cmp::Ordering;

/// Defines the order in which a `SortedQueue` yields its values.
///
/// `compare(a, b)` returns `Less` when `a` should come out of the queue before `b`.
/// Implementations must be a total order: equal values compare `Equal`, swapping
/// the arguments reverses the result, and the order is transitive. A comparator
/// that breaks these rules produces an arbitrary pop order, but never corrupts
/// the queue.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The default order: ascending by `PartialOrd`.
///
/// Values that are unordered even with themselves (floating-point NaN) sort
/// after every other value, and compare `Equal` to each other.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: PartialOrd + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let a_unordered = a.partial_cmp(a).is_none();
        let b_unordered = b.partial_cmp(b).is_none();
        match (a_unordered, b_unordered) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Incomparable but self-consistent values; treat as ties.
            (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        }
    }
}
