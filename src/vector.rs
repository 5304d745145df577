use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr::{self, NonNull};
use core::slice;

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error, realloc};

/// A growable contiguous buffer, the crate's dynamic array.
///
/// Elements are stored in one allocation that doubles as it fills. Removal and
/// insertion at arbitrary positions shift the tail, so they are `O(n)`; `push`
/// and `pop` at the back are amortized `O(1)`.
///
/// `Vector<T>` dereferences to `[T]`, so the whole slice API (iteration,
/// sorting, `first`/`last`, subslicing) is available on it.
///
/// # Examples
///
/// ```
/// use rubra::Vector;
///
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
///
/// v.insert(1, 9);
/// assert_eq!(v.as_slice(), [1, 9, 2, 3]);
///
/// assert_eq!(v.remove(0), 1);
/// assert_eq!(v.pop(), Some(3));
/// assert_eq!(v.as_slice(), [9, 2]);
/// ```
pub struct Vector<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

// SAFETY: Vector owns its elements; sending or sharing it is sending or
// sharing them.
unsafe impl<T: Send> Send for Vector<T> {}
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T> Vector<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            // Zero-sized elements never allocate; the capacity is unbounded.
            cap: if size_of::<T>() == 0 { usize::MAX } else { 0 },
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vector = Self::new();
        vector.reserve(capacity);
        vector
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Theoretical upper bound on the element count, limited by how many
    /// elements fit in half the address space.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / size_of::<T>()
        }
    }

    /// Ensures capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        if size_of::<T>() == 0 {
            return;
        }
        let required = self.len.checked_add(additional).expect("`Vector::reserve()` - capacity overflow!");
        if required > self.cap {
            self.grow_to(required);
        }
    }

    /// Shrinks the allocation to exactly `len` elements, freeing it entirely
    /// when the vector is empty.
    pub fn shrink_to_fit(&mut self) {
        if size_of::<T>() == 0 || self.cap == self.len {
            return;
        }
        let old_layout = Self::layout_for(self.cap);
        if self.len == 0 {
            // SAFETY: cap != len == 0 means a live allocation of `old_layout`.
            unsafe { dealloc(self.ptr.as_ptr().cast(), old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
        } else {
            let new_layout = Self::layout_for(self.len);
            // SAFETY: the buffer was allocated with `old_layout` and the new
            // size is non-zero.
            let new_ptr = unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) };
            self.ptr = NonNull::new(new_ptr.cast()).unwrap_or_else(|| handle_alloc_error(new_layout));
            self.cap = self.len;
        }
    }

    /// Appends an element to the back.
    pub fn push(&mut self, value: T) {
        self.reserve(1);
        assert!(self.len < self.cap, "`Vector::push()` - length exceeds maximum capacity!");
        // SAFETY: `len < cap`, so the slot one past the last element is
        // allocated and unoccupied.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` holds an initialized element
        // that is no longer tracked by `len`.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting everything after it right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "`Vector::insert()` - `index` ({index}) > `len` ({})!", self.len);
        self.reserve(1);
        assert!(self.len < self.cap, "`Vector::insert()` - length exceeds maximum capacity!");
        // SAFETY: `index <= len < cap`; the copy moves the initialized tail
        // one slot right inside the allocation, then the gap is written.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "`Vector::remove()` - `index` ({index}) >= `len` ({})!", self.len);
        // SAFETY: `index < len`; the element is read out before the
        // initialized tail is shifted over it.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        // Set `len` first so a panicking `Drop` cannot re-drop elements.
        self.len = 0;
        // SAFETY: these `len` elements are initialized and now untracked.
        unsafe { ptr::drop_in_place(elements) };
    }

    /// Swaps the contents of two vectors.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns a reference to the element at `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, or `None` if empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// The elements as a shared slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `len` initialized elements (dangling but
        // aligned when `len == 0`).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn layout_for(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("`Vector` - capacity overflow!")
    }

    /// Grows the allocation to hold at least `min_cap` elements, at least
    /// doubling to keep `push` amortized constant.
    fn grow_to(&mut self, min_cap: usize) {
        debug_assert!(size_of::<T>() != 0);
        let new_cap = self.cap.saturating_mul(2).max(min_cap).max(4);
        let new_layout = Self::layout_for(new_cap);
        assert!(
            new_layout.size() <= isize::MAX as usize,
            "`Vector::reserve()` - capacity overflow!"
        );

        let new_ptr = if self.cap == 0 {
            // SAFETY: the layout has non-zero size (cap >= 4, T not a ZST).
            unsafe { alloc(new_layout) }
        } else {
            let old_layout = Self::layout_for(self.cap);
            // SAFETY: the buffer was allocated with `old_layout`.
            unsafe { realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) }
        };

        self.ptr = NonNull::new(new_ptr.cast()).unwrap_or_else(|| handle_alloc_error(new_layout));
        self.cap = new_cap;
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        if size_of::<T>() != 0 && self.cap != 0 {
            let layout = Self::layout_for(self.cap);
            // SAFETY: the buffer is a live allocation of `layout` and all
            // elements were dropped by `clear`.
            unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.len);
        clone.extend(self.iter().cloned());
        clone
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let this = core::mem::ManuallyDrop::new(self);
        IntoIter {
            buf: this.ptr,
            cap: this.cap,
            front: 0,
            back: this.len,
            _marker: PhantomData,
        }
    }
}

/// An owning iterator over the elements of a `Vector`.
///
/// Created by [`Vector::into_iter`].
pub struct IntoIter<T> {
    buf: NonNull<T>,
    cap: usize,
    front: usize,
    back: usize,
    _marker: PhantomData<T>,
}

// SAFETY: as for `Vector` - the iterator owns the remaining elements.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: slots in `front..back` hold initialized, unconsumed
        // elements.
        let value = unsafe { self.buf.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: as `next`, from the other end.
        Some(unsafe { self.buf.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> core::iter::FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Drop the unconsumed elements, then free the buffer.
        // SAFETY: `front..back` are initialized and owned by the iterator.
        unsafe {
            let remaining = slice::from_raw_parts_mut(self.buf.as_ptr().add(self.front), self.back - self.front);
            ptr::drop_in_place(remaining);
        }
        if size_of::<T>() != 0 && self.cap != 0 {
            let layout = Layout::array::<T>(self.cap).expect("`Vector` - capacity overflow!");
            // SAFETY: the buffer was allocated by the originating `Vector`.
            unsafe { dealloc(self.buf.as_ptr().cast(), layout) };
        }
    }
}
