use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

/// A fixed-size array with a container interface.
///
/// The length `N` is part of the type; there is no insertion or removal, only
/// element access and whole-array operations like [`fill`](Array::fill) and
/// [`swap`](Array::swap).
///
/// # Examples
///
/// ```
/// use rubra::Array;
///
/// let mut array = Array::from([1, 2, 3, 4]);
/// array[0] = 10;
///
/// assert_eq!(array.front(), Some(&10));
/// assert_eq!(array.back(), Some(&4));
/// assert_eq!(array.len(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Array<T, const N: usize> {
    values: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Returns the number of elements, always `N`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Maximum element count, always `N`, for interface parity.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.values.get_mut(index)
    }

    /// Returns a reference to the first element, or `None` if `N == 0`.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns a reference to the last element, or `None` if `N == 0`.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.values.last()
    }

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_elements(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Swaps the contents of two arrays of the same length.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns a slice of the whole array.
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns a mutable slice of the whole array.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// An iterator over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }

    /// A mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.values.iter_mut()
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Assigns `value` to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rubra::Array;
    ///
    /// let mut array = Array::from([1, 2, 3]);
    /// array.fill(0);
    /// assert_eq!(array.as_slice(), [0, 0, 0]);
    /// ```
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self {
            values: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(values: [T; N]) -> Self {
        Self { values }
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Array<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
