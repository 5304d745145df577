use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::raw::{Arena, NodeId};

#[derive(Clone)]
struct ListNode<T> {
    value: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A doubly-linked list with nodes stored in an [`Arena`].
///
/// Links are arena ids rather than pointers, so the list is safe code
/// throughout and `Clone` is a straightforward deep copy of the arena.
/// `push`/`pop` at either end are `O(1)`; position-based `insert`, `remove`,
/// and `splice` walk to the position first.
///
/// # Examples
///
/// ```
/// use rubra::List;
///
/// let mut list = List::from([3, 1, 2]);
/// list.push_front(0);
/// list.sort();
///
/// assert!(list.iter().copied().eq([0, 1, 2, 3]));
/// assert_eq!(list.pop_back(), Some(3));
/// ```
#[derive(Clone)]
pub struct List<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Theoretical upper bound on the element count, for interface parity.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        let by_memory = usize::MAX / size_of::<ListNode<T>>();
        if by_memory < NodeId::MAX { by_memory } else { NodeId::MAX }
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Swaps the contents of two lists.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes.get(id).value)
    }

    /// Returns a mutable reference to the first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|id| &mut self.nodes.get_mut(id).value)
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes.get(id).value)
    }

    /// Returns a mutable reference to the last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|id| &mut self.nodes.get_mut(id).value)
    }

    /// Adds an element to the front.
    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.alloc(ListNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.nodes.get_mut(old).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Adds an element to the back.
    pub fn push_back(&mut self, value: T) {
        let id = self.nodes.alloc(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.nodes.get_mut(old).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.unlink(id);
        Some(self.nodes.take(id).value)
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.unlink(id);
        Some(self.nodes.take(id).value)
    }

    /// Inserts `value` at position `index` (everything from `index` on shifts
    /// one place toward the back).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "`List::insert()` - `index` ({index}) > `len` ({})!", self.len);
        match self.id_at(index) {
            None => self.push_back(value),
            Some(at) => {
                let prev = self.nodes.get(at).prev;
                let id = self.nodes.alloc(ListNode {
                    value,
                    prev,
                    next: Some(at),
                });
                self.nodes.get_mut(at).prev = Some(id);
                match prev {
                    Some(p) => self.nodes.get_mut(p).next = Some(id),
                    None => self.head = Some(id),
                }
                self.len += 1;
            }
        }
    }

    /// Removes and returns the element at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "`List::remove()` - `index` ({index}) >= `len` ({})!", self.len);
        let id = self.id_at(index).expect("`List::remove()` - `index` has no node!");
        self.unlink(id);
        self.nodes.take(id).value
    }

    /// Moves every element of `other` into `self` before position `index`,
    /// leaving `other` empty.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::List;
    ///
    /// let mut a = List::from([1, 4]);
    /// let mut b = List::from([2, 3]);
    ///
    /// a.splice(1, &mut b);
    ///
    /// assert!(a.iter().copied().eq([1, 2, 3, 4]));
    /// assert!(b.is_empty());
    /// ```
    pub fn splice(&mut self, index: usize, other: &mut Self) {
        assert!(index <= self.len, "`List::splice()` - `index` ({index}) > `len` ({})!", self.len);
        let mut at = index;
        while let Some(value) = other.pop_front() {
            self.insert(at, value);
            at += 1;
        }
    }

    /// Moves every element of `other` to the back of `self`.
    pub fn append(&mut self, other: &mut Self) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let node = self.nodes.get_mut(id);
            core::mem::swap(&mut node.prev, &mut node.next);
            current = node.prev; // the old `next`
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    /// An iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Detaches `id` from its neighbors without freeing it.
    fn unlink(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = self.nodes.get(id);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.nodes.get_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes.get_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Walks to the node at `index`; `None` when `index == len`.
    fn id_at(&self, index: usize) -> Option<NodeId> {
        if index == self.len {
            return None;
        }
        // Walk from the nearer end.
        if index <= self.len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.nodes.get(current?).next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..(self.len - 1 - index) {
                current = self.nodes.get(current?).prev;
            }
            current
        }
    }

    /// Rebuilds the prev/next links to follow `order`.
    fn relink(&mut self, order: &[NodeId]) {
        self.head = order.first().copied();
        self.tail = order.last().copied();
        for (position, &id) in order.iter().enumerate() {
            let node = self.nodes.get_mut(id);
            node.prev = position.checked_sub(1).map(|p| order[p]);
            node.next = order.get(position + 1).copied();
        }
    }
}

impl<T: PartialEq> List<T> {
    /// Removes consecutive equal elements, keeping the first of each run.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::List;
    ///
    /// let mut list = List::from([1, 1, 2, 2, 2, 1]);
    /// list.unique();
    /// assert!(list.iter().copied().eq([1, 2, 1]));
    /// ```
    pub fn unique(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.nodes.get(id).next;
            if let Some(next_id) = next {
                if self.nodes.get(id).value == self.nodes.get(next_id).value {
                    self.unlink(next_id);
                    self.nodes.take(next_id);
                    // Stay on `id`: the new neighbor may be equal too.
                    continue;
                }
            }
            current = next;
        }
    }
}

impl<T: Ord> List<T> {
    /// Sorts the elements in place. The sort is stable: equal elements keep
    /// their relative order.
    pub fn sort(&mut self) {
        let mut order: Vec<NodeId> = Vec::with_capacity(self.len);
        let mut current = self.head;
        while let Some(id) = current {
            order.push(id);
            current = self.nodes.get(id).next;
        }

        let nodes = &self.nodes;
        order.sort_by(|&a, &b| nodes.get(a).value.cmp(&nodes.get(b).value));
        self.relink(&order);
    }

    /// Merges the sorted list `other` into the sorted `self`, leaving `other`
    /// empty. Stable: on ties, elements of `self` come first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::List;
    ///
    /// let mut a = List::from([1, 3, 5]);
    /// let mut b = List::from([2, 3, 4]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert!(a.iter().copied().eq([1, 2, 3, 3, 4, 5]));
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let mut merged = Self::new();
        loop {
            let take_other = match (self.front(), other.front()) {
                (None, None) => break,
                (None, Some(_)) => true,
                (Some(_), None) => false,
                (Some(ours), Some(theirs)) => theirs < ours,
            };
            let value = if take_other {
                other.pop_front()
            } else {
                self.pop_front()
            };
            merged.push_back(value.expect("`List::merge()` - a non-empty list has no front!"));
        }
        *self = merged;
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// An iterator over the elements of a `List` from front to back.
///
/// Created by [`List::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.front?;
        if self.back == Some(id) {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.list.nodes.get(id).next;
        }
        self.remaining -= 1;
        Some(&self.list.nodes.get(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.back?;
        if self.front == Some(id) {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.list.nodes.get(id).prev;
        }
        self.remaining -= 1;
        Some(&self.list.nodes.get(id).value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `List` from front to back.
///
/// Created by [`List::into_iter`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
