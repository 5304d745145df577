use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec::Vec;

use crate::raw::{RawIter, RbTree};

/// An ordered multiset: like [`Set`](crate::Set), but duplicate values are
/// allowed.
///
/// Every insertion succeeds. A value equal to ones already present is placed
/// *after* its equals in the in-order sequence, so iteration over equal values
/// sees them oldest first.
///
/// # Examples
///
/// ```
/// use rubra::Multiset;
///
/// let mut bag = Multiset::from([1, 1, 2, 2, 3]);
///
/// assert_eq!(bag.count(&1), 2);
/// assert_eq!(bag.count(&3), 1);
/// assert_eq!(bag.count(&99), 0);
///
/// bag.remove_one(&1);
/// assert_eq!(bag.count(&1), 1);
/// ```
#[derive(Clone)]
pub struct Multiset<T> {
    tree: RbTree<T, ()>,
}

impl<T> Multiset<T> {
    /// Creates an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    /// Returns the number of values, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the multiset contains no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Theoretical upper bound on the number of values, for interface parity.
    #[must_use]
    pub fn max_size(&self) -> usize {
        RbTree::<T, ()>::max_size()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Swaps the contents of two multisets.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.tree, &mut other.tree);
    }

    /// An iterator over the values in ascending order; equal values appear
    /// oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: self.tree.iter(),
            remaining: self.tree.len(),
        }
    }
}

impl<T: Ord> Multiset<T> {
    /// Adds a value unconditionally.
    pub fn insert(&mut self, value: T) {
        self.tree.insert(value, ());
    }

    /// Adds every value from `values`. For parity with the other containers
    /// this returns one flag per value; for a multiset they are all `true`.
    pub fn insert_many<I: IntoIterator<Item = T>>(&mut self, values: I) -> Vec<bool> {
        values
            .into_iter()
            .map(|value| {
                self.insert(value);
                true
            })
            .collect()
    }

    /// Removes one value equal to `value` (the first in ascending order), if
    /// present. Returns whether a value was removed; a miss is a no-op.
    pub fn remove_one<Q>(&mut self, value: &Q) -> bool
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

    /// Returns how many values compare equal to `value`.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.equal_range(value).count()
    }

    /// Returns `true` if the multiset contains a value equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(value).is_some()
    }

    /// Returns the smallest value, or `None` if the multiset is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|id| self.tree.key(id))
    }

    /// Returns the largest value, or `None` if the multiset is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|id| self.tree.key(id))
    }

    /// An iterator starting at the first value not less than `value` and
    /// running to the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Multiset;
    ///
    /// let bag = Multiset::from([1, 3, 3, 5]);
    /// assert!(bag.lower_bound(&3).copied().eq([3, 3, 5]));
    /// assert!(bag.lower_bound(&4).copied().eq([5]));
    /// ```
    pub fn lower_bound<Q>(&self, value: &Q) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let front = self.tree.lower_bound(value);
        let back = front.map(|_| self.tree.last().expect("`Multiset::lower_bound()` - bound in an empty tree!"));
        Range {
            raw: self.tree.iter_between(front, back),
        }
    }

    /// An iterator starting at the first value strictly greater than `value`
    /// and running to the end.
    pub fn upper_bound<Q>(&self, value: &Q) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let front = self.tree.upper_bound(value);
        let back = front.map(|_| self.tree.last().expect("`Multiset::upper_bound()` - bound in an empty tree!"));
        Range {
            raw: self.tree.iter_between(front, back),
        }
    }

    /// An iterator over exactly the values equal to `value`, oldest first.
    pub fn equal_range<Q>(&self, value: &Q) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let front = self.tree.find(value);
        let back = front.map(|_| match self.tree.upper_bound(value) {
            // The last equal value sits immediately before the upper bound.
            Some(up) => self
                .tree
                .predecessor(up)
                .expect("`Multiset::equal_range()` - an upper bound with nothing before it!"),
            None => self.tree.last().expect("`Multiset::equal_range()` - a match in an empty tree!"),
        });
        Range {
            raw: self.tree.iter_between(front, back),
        }
    }

    /// Moves every value of `other` into `self`, leaving `other` empty. Unlike
    /// [`Set::merge`](crate::Set::merge), nothing can fail to move.
    pub fn merge(&mut self, other: &mut Self) {
        for (value, ()) in other.tree.drain_in_order() {
            self.tree.insert(value, ());
        }
    }
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Multiset<T> {}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(iter);
        multiset
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Multiset<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            entries: self.tree.drain_in_order().into_iter(),
        }
    }
}

/// An iterator over the values of a `Multiset` in ascending order.
///
/// Created by [`Multiset::iter`].
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

/// An iterator over a sub-range of a `Multiset`, created by
/// [`Multiset::lower_bound`], [`Multiset::upper_bound`], or
/// [`Multiset::equal_range`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, T: 'a> {
    raw: RawIter<'a, T, ()>,
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.raw.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.raw.next_back().map(|(value, _)| value)
    }
}

impl<T> FusedIterator for Range<'_, T> {}

/// An owning iterator over the values of a `Multiset` in ascending order.
///
/// Created by [`Multiset::into_iter`].
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
