use core::fmt;

use crate::list::List;

/// A last-in-first-out stack adapter over [`List`].
///
/// Only the top of the stack is accessible; there is no iteration over the
/// interior elements.
///
/// # Examples
///
/// ```
/// use rubra::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone)]
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the most recently pushed element, or `None` if
    /// empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns a mutable reference to the most recently pushed element, or
    /// `None` if empty.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut()
    }

    /// Pushes an element onto the top.
    pub fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Swaps the contents of two stacks.
    pub fn swap(&mut self, other: &mut Self) {
        self.list.swap(&mut other.list);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}
