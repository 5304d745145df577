use crate::raw::{NodeId, RbTree};

/// A view into a single entry of a [`Map`](crate::Map), which may be vacant or
/// occupied.
///
/// Created by [`Map::entry`](crate::Map::entry). This is the in-place
/// counterpart of lookup-then-insert: `entry(key).or_default()` reads an
/// existing value or inserts a default one, touching the tree only once per
/// policy decision.
///
/// # Examples
///
/// ```
/// use rubra::Map;
///
/// let mut map: Map<&str, u32> = Map::new();
///
/// map.entry("poneyland").or_insert(3);
/// assert_eq!(map["poneyland"], 3);
///
/// *map.entry("poneyland").or_insert(10) *= 2;
/// assert_eq!(map["poneyland"], 6);
/// ```
pub enum Entry<'a, K: 'a, V: 'a> {
    /// The key is present; wraps access to its value.
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is absent; holds the key for a possible insertion.
    Vacant(VacantEntry<'a, K, V>),
}

/// A view into an occupied entry of a [`Map`](crate::Map).
pub struct OccupiedEntry<'a, K: 'a, V: 'a> {
    pub(super) tree: &'a mut RbTree<K, V>,
    pub(super) id: NodeId,
}

/// A view into a vacant entry of a [`Map`](crate::Map).
pub struct VacantEntry<'a, K: 'a, V: 'a> {
    pub(super) tree: &'a mut RbTree<K, V>,
    pub(super) key: K,
}

impl<'a, K: Ord, V> Entry<'a, K, V> {
    /// Returns a mutable reference to the value, inserting `default` first if
    /// the entry is vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(default),
        }
    }

    /// Like [`Entry::or_insert`], but the default is computed only when
    /// needed.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(default()),
        }
    }

    /// Returns a reference to the entry's key.
    #[must_use]
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(occupied) => occupied.key(),
            Entry::Vacant(vacant) => vacant.key(),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    #[must_use]
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let Entry::Occupied(occupied) = &mut self {
            f(occupied.get_mut());
        }
        self
    }
}

impl<'a, K: Ord, V: Default> Entry<'a, K, V> {
    /// Returns a mutable reference to the value, inserting `V::default()`
    /// first if the entry is vacant.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns a reference to the entry's key.
    #[must_use]
    pub fn key(&self) -> &K {
        self.tree.key(self.id)
    }

    /// Returns a reference to the value.
    #[must_use]
    pub fn get(&self) -> &V {
        self.tree.value(self.id)
    }

    /// Returns a mutable reference to the value, bounded by the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.tree.value_mut(self.id)
    }

    /// Converts the entry into a mutable reference bounded by the map.
    #[must_use]
    pub fn into_mut(self) -> &'a mut V {
        self.tree.value_mut(self.id)
    }

    /// Replaces the value, returning the previous one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }
}

impl<K: Ord, V> OccupiedEntry<'_, K, V> {
    /// Removes the entry from the map, returning its value.
    #[must_use]
    pub fn remove(self) -> V {
        let (_, value) = self.tree.remove(self.id);
        value
    }

    /// Removes the entry from the map, returning the key and value.
    #[must_use]
    pub fn remove_entry(self) -> (K, V) {
        self.tree.remove(self.id)
    }
}

impl<'a, K: Ord, V> VacantEntry<'a, K, V> {
    /// Returns a reference to the key that would be inserted.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key back out of the entry.
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts `value` under the entry's key and returns a mutable reference
    /// to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let id = self.tree.insert(self.key, value);
        self.tree.value_mut(id)
    }
}
