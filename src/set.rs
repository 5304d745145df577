use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::raw::{RawIter, RbTree};

/// An ordered set of unique values, backed by the red-black tree engine.
///
/// Values must implement [`Ord`]; iteration yields them in ascending order.
/// Inserting a value that compares equal to one already present leaves the set
/// unchanged and reports failure, which is what distinguishes `Set` from
/// [`Multiset`](crate::Multiset).
///
/// It is a logic error for a value to be modified in such a way that its
/// ordering relative to any other value changes while it is in the set.
///
/// # Examples
///
/// ```
/// use rubra::Set;
///
/// let mut books = Set::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
///
/// assert!(!books.contains(&"The Winds of Winter"));
/// assert!(!books.insert("The Odyssey")); // already present
///
/// // Iterate in ascending order.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
#[derive(Clone)]
pub struct Set<T> {
    tree: RbTree<T, ()>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    /// Returns the number of values in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Set;
    ///
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Theoretical upper bound on the number of values the set could hold,
    /// provided for interface parity with the other containers.
    #[must_use]
    pub fn max_size(&self) -> usize {
        RbTree::<T, ()>::max_size()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Swaps the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.tree, &mut other.tree);
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: self.tree.iter(),
            remaining: self.tree.len(),
        }
    }
}

impl<T: Ord> Set<T> {
    /// Adds a value. Returns `false`, leaving the set unchanged, if an equal
    /// value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.tree.find(&value).is_some() {
            return false;
        }
        self.tree.insert(value, ());
        true
    }

    /// Adds every value from `values`, returning one `inserted?` flag per
    /// value in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Set;
    ///
    /// let mut set = Set::new();
    /// let results = set.insert_many([3, 1, 3]);
    /// assert_eq!(results, [true, true, false]);
    /// ```
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> Vec<bool> {
        values.into_iter().map(|value| self.insert(value)).collect()
    }

    /// Removes the value equal to `value`, if present. Returns whether a value
    /// was removed. Tolerant of values that were never inserted: a miss is a
    /// no-op.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.tree.find(value) {
            Some(id) => {
                self.tree.remove(id);
                true
            }
            None => false,
        }
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(value).map(|id| self.tree.key(id))
    }

    /// Returns `true` if the set contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(value).is_some()
    }

    /// Returns the smallest value, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|id| self.tree.key(id))
    }

    /// Returns the largest value, or `None` if the set is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|id| self.tree.key(id))
    }

    /// Moves into `self` every value of `other` that is not already present.
    /// Values that fail to move (duplicates) are left in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Set;
    ///
    /// let mut a = Set::from([2, 3, 4]);
    /// let mut b = Set::from([1, 2, 3]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert!(a.iter().copied().eq([1, 2, 3, 4]));
    /// assert!(b.iter().copied().eq([2, 3]));
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let moving: Vec<_> = other
            .tree
            .in_order_ids()
            .into_iter()
            .filter(|&id| self.tree.find(other.tree.key(id)).is_none())
            .collect();
        for id in moving {
            let (value, ()) = other.tree.remove(id);
            self.tree.insert(value, ());
        }
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            entries: self.tree.drain_in_order().into_iter(),
        }
    }
}

/// An iterator over the values of a `Set` in ascending order.
///
/// Created by [`Set::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    raw: RawIter<'a, T, ()>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let (value, _) = self.raw.next()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (value, _) = self.raw.next_back()?;
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the values of a `Set` in ascending order.
///
/// Created by [`Set::into_iter`].
pub struct IntoIter<T> {
    entries: alloc::vec::IntoIter<(T, ())>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.entries.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.entries.next_back().map(|(value, ())| value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
