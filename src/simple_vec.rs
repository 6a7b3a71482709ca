use crate::{Error, IntoIter, RawBuf};
use std::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

/// A growable array whose elements are stored contiguously in a single
/// [`RawBuf`].
///
/// Elements `[0, len)` are live. The remaining slots up to [`capacity`] are
/// allocated but uninitialized. When a [`push`] or [`insert`] finds the buffer
/// full, the capacity grows to one if it was zero and doubles otherwise.
///
/// [`capacity`]: SimpleVec::capacity
/// [`push`]: SimpleVec::push
/// [`insert`]: SimpleVec::insert
pub struct SimpleVec<T> {
    len: usize,
    buf: RawBuf<T>,
}

/// A request for an empty [`SimpleVec`] with preallocated capacity.
///
/// # Examples
///
/// ```
/// # use simple_vec::{Reserve, SimpleVec};
/// let v = SimpleVec::<u8>::from(Reserve(10));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reserve(pub usize);

impl<T> SimpleVec<T> {
    /// Constructs a new, empty `SimpleVec<T>`.
    ///
    /// The container will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::SimpleVec;
    /// let v = SimpleVec::<u32>::new();
    /// assert_eq!(v.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            len: 0,
            buf: RawBuf::new(),
        }
    }

    /// Constructs an empty `SimpleVec<T>` with room for exactly `capacity`
    /// elements.
    ///
    /// # Errors
    ///
    /// Fails if the allocation cannot be made. See [`RawBuf::try_with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            len: 0,
            buf: RawBuf::try_with_capacity(capacity)?,
        })
    }

    /// Constructs an empty `SimpleVec<T>` with room for exactly `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::SimpleVec;
    /// let mut v = SimpleVec::with_capacity(10);
    /// assert_eq!(v.capacity(), 10);
    /// for i in 0..10 {
    ///     v.push(i);
    /// }
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.handle())
    }

    /// Fallible version of [`SimpleVec::with_size`].
    pub fn try_with_size(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut out = Self::try_with_capacity(len)?;
        out.try_resize_with(len, T::default)?;
        Ok(out)
    }

    /// Constructs a `SimpleVec<T>` of `len` default values, with a capacity of
    /// exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::SimpleVec;
    /// let v = SimpleVec::<i32>::with_size(3);
    /// assert_eq!(v, [0, 0, 0]);
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn with_size(len: usize) -> Self
    where
        T: Default,
    {
        Self::try_with_size(len).unwrap_or_else(|e| e.handle())
    }

    /// Fallible version of [`SimpleVec::with_size_and_value`].
    pub fn try_with_size_and_value(len: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut out = Self::try_with_capacity(len)?;
        if len > 0 {
            out.try_resize_with(len - 1, || value.clone())?;
            // SAFETY: The capacity is `len` and the first `len - 1` slots are
            // filled.
            unsafe {
                out.buf.set(len - 1, value);
            }
            out.len = len;
        }
        Ok(out)
    }

    /// Constructs a `SimpleVec<T>` of `len` clones of `value`, with a capacity
    /// of exactly `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::SimpleVec;
    /// let v = SimpleVec::with_size_and_value(2, "hi");
    /// assert_eq!(v, ["hi", "hi"]);
    /// ```
    pub fn with_size_and_value(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::try_with_size_and_value(len, value).unwrap_or_else(|e| e.handle())
    }

    /// Returns the number of elements in the vector, also referred to as its
    /// length.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns true if the vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots [0, len) are live.
        unsafe { self.buf.slice(0, self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Slots [0, len) are live.
        unsafe { self.buf.slice_mut(0, self.len) }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::{Error, simple_vec};
    /// let v = simple_vec![10, 20, 30];
    /// assert_eq!(v.at(1), Ok(&20));
    /// assert_eq!(v.at(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        if index < self.len {
            // SAFETY: Bounds checked above.
            Ok(unsafe { self.buf.get_ref(index) })
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index < self.len {
            // SAFETY: Bounds checked above.
            Ok(unsafe { self.buf.get_mut(index) })
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Fallible version of [`SimpleVec::push`]. On failure, `element` is
    /// dropped and the vector is unchanged.
    pub fn try_push(&mut self, element: T) -> Result<(), Error> {
        if self.len == self.capacity() {
            self.try_realloc(self.grown_capacity()?)?;
        }
        // SAFETY: len < capacity after growing.
        unsafe {
            self.buf.set(self.len, element);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends an element to the back of the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::SimpleVec;
    /// let mut v = SimpleVec::new();
    /// let mut capacities = vec![];
    /// for i in 0..5 {
    ///     v.push(i);
    ///     capacities.push(v.capacity());
    /// }
    /// assert_eq!(v, [0, 1, 2, 3, 4]);
    /// assert_eq!(capacities, [1, 2, 4, 4, 8]);
    /// ```
    pub fn push(&mut self, element: T) {
        if let Err(e) = self.try_push(element) {
            e.handle()
        }
    }

    /// Removes the last element from a vector and returns it, or [`None`] if
    /// it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1, 2];
    /// assert_eq!(v.pop(), Some(2));
    /// assert_eq!(v.pop(), Some(1));
    /// assert_eq!(v.pop(), None);
    /// assert_eq!(v.capacity(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: The old last slot is initialized and is now past `len`.
            Some(unsafe { self.buf.get(self.len) })
        }
    }

    /// Fallible version of [`SimpleVec::insert`]. On failure, `element` is
    /// dropped and the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<usize, Error> {
        assert!(index <= self.len, "index out of bounds");
        let tail = self.len - index;
        if self.len < self.capacity() {
            // SAFETY: len < capacity, so the shifted tail ends in bounds.
            unsafe {
                self.buf.copy(index, index + 1, tail);
                self.buf.set(index, element);
            }
        } else {
            let mut buf = RawBuf::try_with_capacity(self.grown_capacity()?)?;
            // SAFETY: The new buffer holds more than `len` slots.
            unsafe {
                self.buf.copy_to(0, &mut buf, 0, index);
                self.buf.copy_to(index, &mut buf, index + 1, tail);
                buf.set(index, element);
            }
            self.buf.swap(&mut buf);
        }
        self.len += 1;
        Ok(index)
    }

    /// Inserts an element at position `index`, shifting all elements after it
    /// to the right. Returns the index of the inserted element.
    ///
    /// A full vector grows by the same rule as [`push`](SimpleVec::push).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1, 2, 3];
    /// assert_eq!(v.insert(1, 9), 1);
    /// assert_eq!(v, [1, 9, 2, 3]);
    /// assert_eq!(v.capacity(), 6);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> usize {
        self.try_insert(index, element).unwrap_or_else(|e| e.handle())
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left. The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec!['a', 'b', 'c'];
    /// assert_eq!(v.remove(0), 'a');
    /// assert_eq!(v, ['b', 'c']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "index out of bounds");
        self.len -= 1;
        // SAFETY: index <= len after the decrement, and the slot at the old
        // end is moved down, not dropped.
        unsafe {
            let out = self.buf.get(index);
            self.buf.copy(index + 1, index, self.len - index);
            out
        }
    }

    /// Drops the element at position `index`, shifting all elements after it
    /// to the left.
    ///
    /// Returns the index of the element that now occupies the erased slot,
    /// which equals the new length if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1, 9, 2, 3];
    /// assert_eq!(v.erase(2), 2);
    /// assert_eq!(v, [1, 9, 3]);
    /// assert_eq!(v.erase(2), v.len());
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the
    /// rest. Does nothing if `len` is not less than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: len < self.len <= capacity
        let start = unsafe { self.buf.as_mut_ptr().add(len) };
        let tail = ptr::slice_from_raw_parts_mut(start, self.len - len);
        self.len = len;
        // SAFETY: The tail was live and is no longer reachable through `self`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Fallible version of [`SimpleVec::resize_with`]. On failure, the vector
    /// is unchanged.
    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), Error>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > self.capacity() {
            self.try_realloc(new_len)?;
        }
        while self.len < new_len {
            // SAFETY: new_len <= capacity
            unsafe {
                self.buf.set(self.len, f());
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Resizes the vector to `new_len`, filling new slots with the results of
    /// calling `f`.
    ///
    /// Shrinking never reallocates. Growing past the capacity reallocates to
    /// exactly `new_len`.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        if let Err(e) = self.try_resize_with(new_len, f) {
            e.handle()
        }
    }

    /// Fallible version of [`SimpleVec::resize`].
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Resizes the vector to `new_len`, filling new slots with
    /// [`Default::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1, 9];
    /// v.resize(4);
    /// assert_eq!(v, [1, 9, 0, 0]);
    /// assert_eq!(v.capacity(), 4);
    /// v.resize(1);
    /// assert_eq!(v, [1]);
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Fallible version of [`SimpleVec::reserve`].
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), Error> {
        if capacity > self.capacity() {
            self.try_realloc(capacity)?;
        }
        Ok(())
    }

    /// Ensures room for exactly `capacity` elements in total. Does nothing if
    /// the current capacity is already sufficient.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut v = simple_vec![1];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(5);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(e) = self.try_reserve(capacity) {
            e.handle()
        }
    }

    /// Fallible version of [`Clone::clone`]. The copy has the same capacity as
    /// `self`.
    ///
    /// # Errors
    ///
    /// Fails if the allocation for the copy cannot be made. `self` is never
    /// modified.
    pub fn try_clone(&self) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut out = Self::try_with_capacity(self.capacity())?;
        for element in self.as_slice() {
            // SAFETY: The copy has the same capacity as `self`, and `len`
            // tracks the initialized prefix if `clone` panics.
            unsafe {
                out.buf.set(out.len, element.clone());
            }
            out.len += 1;
        }
        Ok(out)
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut a = simple_vec![1, 2];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2]);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the contents of two vectors without touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vec::simple_vec;
    /// let mut a = simple_vec![1, 2];
    /// let mut b = simple_vec![3];
    /// a.swap_with(&mut b);
    /// assert_eq!(a, [3]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    fn grown_capacity(&self) -> Result<usize, Error> {
        match self.capacity() {
            0 => Ok(1),
            cap => cap.checked_mul(2).ok_or(Error::CapacityOverflow),
        }
    }

    /// Moves the live elements into a new buffer of exactly `capacity` slots.
    fn try_realloc(&mut self, capacity: usize) -> Result<(), Error> {
        debug_assert!(capacity >= self.len);
        let mut buf = RawBuf::try_with_capacity(capacity)?;
        // SAFETY: Both buffers hold at least `len` slots. The old buffer only
        // deallocates when dropped, so the moved elements are not dropped twice.
        unsafe {
            self.buf.copy_to(0, &mut buf, 0, self.len);
        }
        self.buf.swap(&mut buf);
        Ok(())
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        // SAFETY: Slots [0, len) are live. The buffer deallocates afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut me = ManuallyDrop::new(self);
        IntoIter {
            buf: mem::take(&mut me.buf),
            start: 0,
            end: me.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T> Extend<&'a T> for SimpleVec<T>
where
    T: 'a + Copy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &element in iter {
            self.push(element);
        }
    }
}

impl<T> Clone for SimpleVec<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| e.handle())
    }

    fn clone_from(&mut self, source: &Self) {
        if source.len > self.capacity() {
            *self = source.clone();
            return;
        }
        self.clear();
        for element in source.as_slice() {
            // SAFETY: source.len <= capacity
            unsafe {
                self.buf.set(self.len, element.clone());
            }
            self.len += 1;
        }
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Reserve> for SimpleVec<T> {
    fn from(value: Reserve) -> Self {
        Self::with_capacity(value.0)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(value: [T; N]) -> Self {
        let mut out = Self::with_capacity(N);
        out.extend(value);
        out
    }
}

impl<T> From<&[T]> for SimpleVec<T>
where
    T: Clone,
{
    fn from(value: &[T]) -> Self {
        let mut out = Self::with_capacity(value.len());
        out.extend(value.iter().cloned());
        out
    }
}

impl<T> From<&mut [T]> for SimpleVec<T>
where
    T: Clone,
{
    fn from(value: &mut [T]) -> Self {
        Self::from(&*value)
    }
}

impl<T, const N: usize> From<&[T; N]> for SimpleVec<T>
where
    T: Clone,
{
    fn from(value: &[T; N]) -> Self {
        Self::from(value.as_slice())
    }
}

impl<T, const N: usize> From<&mut [T; N]> for SimpleVec<T>
where
    T: Clone,
{
    fn from(value: &mut [T; N]) -> Self {
        Self::from(value.as_slice())
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> {
    fn from(value: Vec<T>) -> Self {
        let mut out = Self::with_capacity(value.len());
        out.extend(value);
        out
    }
}

impl<T> From<SimpleVec<T>> for Vec<T> {
    fn from(value: SimpleVec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I> Index<I> for SimpleVec<T>
where
    I: SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        self.as_slice().index(index)
    }
}

impl<T, I> IndexMut<I> for SimpleVec<T>
where
    I: SliceIndex<[T]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.as_mut_slice().index_mut(index)
    }
}

impl<T> PartialEq for SimpleVec<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for SimpleVec<T> where T: Eq {}

impl<T> PartialOrd for SimpleVec<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for SimpleVec<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for SimpleVec<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Debug for SimpleVec<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
