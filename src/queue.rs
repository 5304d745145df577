use core::fmt;

use crate::list::List;

/// A first-in-first-out queue adapter over [`List`].
///
/// Elements are pushed at the back and popped from the front; only the two
/// ends are accessible.
///
/// # Examples
///
/// ```
/// use rubra::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&2));
/// assert_eq!(queue.pop(), Some(1));
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the oldest element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns a mutable reference to the oldest element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut()
    }

    /// Returns a reference to the newest element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a mutable reference to the newest element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Pushes an element at the back.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Swaps the contents of two queues.
    pub fn swap(&mut self, other: &mut Self) {
        self.list.swap(&mut other.list);
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}
