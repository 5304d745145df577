use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec::Vec;

use crate::raw::{RawIter, RbTree};

mod entry;

pub use entry::{Entry, OccupiedEntry, VacantEntry};

/// An ordered map from unique keys to values, backed by the red-black tree
/// engine.
///
/// Keys must implement [`Ord`]; iteration yields entries in ascending key
/// order. Plain [`insert`](Map::insert) never overwrites: inserting under an
/// existing key reports failure and leaves the stored value untouched. Use
/// [`insert_or_assign`](Map::insert_or_assign) or the [`Entry`] API to update
/// in place.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use rubra::Map;
///
/// let mut reviews = Map::new();
///
/// reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// reviews.insert("Pulp Fiction", "Masterpiece.");
///
/// // A second insert under the same key is rejected...
/// assert!(!reviews.insert("Pulp Fiction", "Overrated."));
/// assert_eq!(reviews["Pulp Fiction"], "Masterpiece.");
///
/// // ...but insert_or_assign overwrites.
/// reviews.insert_or_assign("Pulp Fiction", "Still a masterpiece.");
/// assert_eq!(reviews["Pulp Fiction"], "Still a masterpiece.");
/// ```
#[derive(Clone)]
pub struct Map<K, V> {
    tree: RbTree<K, V>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Theoretical upper bound on the number of entries, for interface parity.
    #[must_use]
    pub fn max_size(&self) -> usize {
        RbTree::<K, V>::max_size()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Swaps the contents of two maps.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.tree, &mut other.tree);
    }

    /// An iterator over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: self.tree.iter(),
            remaining: self.tree.len(),
        }
    }

    /// An iterator over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// An iterator over the values, in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> Map<K, V> {
    /// Inserts `value` under `key` if the key is not already present. Returns
    /// `false`, leaving the stored value untouched, if it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Map;
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert(5, "a"));
    /// assert!(!map.insert(5, "b"));
    /// assert_eq!(map[5], "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.tree.find(&key).is_some() {
            return false;
        }
        self.tree.insert(key, value);
        true
    }

    /// Inserts `value` under `key`, overwriting any existing value. Returns
    /// `true` if the key was newly inserted.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> bool {
        match self.tree.find(&key) {
            Some(id) => {
                *self.tree.value_mut(id) = value;
                false
            }
            None => {
                self.tree.insert(key, value);
                true
            }
        }
    }

    /// Inserts every `(key, value)` pair from `entries`, returning one
    /// `inserted?` flag per pair in order. Existing keys keep their values.
    pub fn insert_many<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) -> Vec<bool> {
        entries.into_iter().map(|(key, value)| self.insert(key, value)).collect()
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// `entry(key).or_default()` is the lookup-or-insert-default idiom:
    ///
    /// ```
    /// use rubra::Map;
    ///
    /// let mut tally: Map<&str, u32> = Map::new();
    /// for word in ["a", "b", "a"] {
    ///     *tally.entry(word).or_default() += 1;
    /// }
    /// assert_eq!(tally["a"], 2);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.tree.find(&key) {
            Some(id) => Entry::Occupied(OccupiedEntry { tree: &mut self.tree, id }),
            None => Entry::Vacant(VacantEntry { tree: &mut self.tree, key }),
        }
    }

    /// Returns a reference to the value under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(key).map(|id| self.tree.value(id))
    }

    /// Returns a mutable reference to the value under `key`, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(key).map(|id| self.tree.value_mut(id))
    }

    /// Returns the stored key/value pair for `key`, if any.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(key).map(|id| (self.tree.key(id), self.tree.value(id)))
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.tree.find(key).is_some()
    }

    /// Removes the entry under `key`, returning its value. A miss is a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let id = self.tree.find(key)?;
        let (_, value) = self.tree.remove(id);
        Some(value)
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|id| (self.tree.key(id), self.tree.value(id)))
    }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|id| (self.tree.key(id), self.tree.value(id)))
    }

    /// Moves into `self` every entry of `other` whose key is not already
    /// present. Entries that fail to move are left in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        let moving: Vec<_> = other
            .tree
            .in_order_ids()
            .into_iter()
            .filter(|&id| self.tree.find(other.tree.key(id)).is_none())
            .collect();
        for id in moving {
            let (key, value) = other.tree.remove(id);
            self.tree.insert(key, value);
        }
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for Map<K, V> {}

impl<K: Ord, V, Q> Index<Q> for Map<K, V>
where
    K: Borrow<Q>,
    Q: Ord,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: Q) -> &V {
        self.get(&key).expect("no entry found for key")
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Ord, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            entries: self.tree.drain_in_order().into_iter(),
        }
    }
}

/// An iterator over the entries of a `Map` in ascending key order.
///
/// Created by [`Map::iter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K: 'a, V: 'a> {
    raw: RawIter<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.raw.next()?;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.raw.next_back()?;
        self.remaining -= 1;
        Some(entry)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `Map` in ascending order.
///
/// Created by [`Map::keys`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K: 'a, V: 'a> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `Map` in ascending order of their keys.
///
/// Created by [`Map::values`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K: 'a, V: 'a> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of a `Map` in ascending key order.
///
/// Created by [`Map::into_iter`].
pub struct IntoIter<K, V> {
    entries: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
