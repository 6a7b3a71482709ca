use crate::Error;
use std::{
    alloc::{self, Layout},
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    mem::{self, size_of},
    ptr::{self, NonNull},
    slice,
};

/// A single-owner handle to one heap allocation of `T` slots.
///
/// `RawBuf` is the storage layer under [`SimpleVec`]. It owns at most one
/// allocation at a time and deallocates it when dropped, but it knows nothing
/// about which slots hold live values. In particular, it will **never** drop
/// the contents of its slots: that is the owner's job. All indexed access is
/// unchecked.
///
/// In the method documentation, `CAP` is the value returned by
/// [`RawBuf::capacity`] at the time of the call.
///
/// For zero-sized `T`, no memory is ever allocated, but the requested slot
/// count is still recorded as the capacity.
///
/// [`SimpleVec`]: crate::SimpleVec
pub struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T> Send for RawBuf<T> where T: Send {}
unsafe impl<T> Sync for RawBuf<T> where T: Sync {}

impl<T> RawBuf<T> {
    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for `capacity` elements.
    ///
    /// A `capacity` of zero yields the empty state without allocating. The
    /// slots of the new buffer are uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityOverflow`] if `capacity` elements would exceed
    /// `isize::MAX` bytes and [`Error::AllocFailed`] if the allocator returns
    /// null. No buffer is produced in either case.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        if size_of::<T>() == 0 {
            return Ok(Self {
                cap: capacity,
                ..Self::new()
            });
        }

        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
        // SAFETY: The layout has a nonzero size since both the element size and
        // the capacity are nonzero.
        let ptr = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(ptr.cast::<T>()).ok_or(Error::AllocFailed { layout })?;
        Ok(Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Allocates room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure aborts through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| e.handle())
    }

    /// Takes ownership of an allocation produced elsewhere.
    ///
    /// # Safety
    ///
    /// The pair `(ptr, capacity)` should come from a previous call to
    /// [`RawBuf::release`] or [`RawBuf::into_raw_parts`], and no other owner
    /// may release it afterwards.
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    /// Gives up ownership of the allocation, leaving this buffer empty.
    ///
    /// Returns the pointer and the capacity. The caller becomes responsible for
    /// the memory. The only way to free it is to hand both values back to
    /// [`RawBuf::from_raw_parts`] and drop the result.
    #[must_use]
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.cap);
        self.ptr = NonNull::dangling();
        self.cap = 0;
        parts
    }

    /// Consuming version of [`RawBuf::release`].
    #[must_use]
    pub fn into_raw_parts(mut self) -> (NonNull<T>, usize) {
        self.release()
    }

    /// The number of slots in the allocation.
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the buffer currently owns heap memory.
    pub const fn is_allocated(&self) -> bool {
        size_of::<T>() > 0 && self.cap > 0
    }

    /// Exchanges allocations with `other` without touching any slot.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// # Safety
    ///
    /// `index <= CAP`
    const unsafe fn slot(&self, index: usize) -> *mut T {
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Writes `element` to the slot at `index` without reading or dropping the
    /// previous contents.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `index < CAP`
    pub unsafe fn set(&mut self, index: usize, element: T) {
        unsafe { self.slot(index).write(element) }
    }

    /// Moves the element out of the slot at `index`.
    ///
    /// # Safety
    ///
    /// After calling this method, the slot at `index` should be treated as
    /// uninitialized. The caller must ensure that
    ///
    /// - `index < CAP`
    /// - the slot at `index` is initialized
    pub unsafe fn get(&self, index: usize) -> T {
        unsafe { self.slot(index).read() }
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `index < CAP`
    /// - the slot at `index` is initialized
    pub unsafe fn get_ref(&self, index: usize) -> &T {
        unsafe { &*self.slot(index) }
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `index < CAP`
    /// - the slot at `index` is initialized
    pub unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        unsafe { &mut *self.slot(index) }
    }

    /// Moves `count` elements from `src` index to `dst` index. The ranges may
    /// overlap.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `src + count <= CAP`
    /// - `dst + count <= CAP`
    ///
    /// Slots in the source range that are not also in the destination range
    /// should afterwards be treated as uninitialized.
    pub unsafe fn copy(&mut self, src: usize, dst: usize, count: usize) {
        unsafe { ptr::copy(self.slot(src), self.slot(dst), count) }
    }

    /// Moves `count` elements starting at `src` into `dst_buf` starting at
    /// `dst`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `src + count <= CAP`
    /// - `dst + count <= dst_buf.capacity()`
    ///
    /// The source slots should afterwards be treated as uninitialized.
    pub unsafe fn copy_to(&self, src: usize, dst_buf: &mut Self, dst: usize, count: usize) {
        unsafe { ptr::copy_nonoverlapping(self.slot(src), dst_buf.slot(dst), count) }
    }

    /// Views `len` slots starting at `start` as a slice.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `start + len <= CAP`
    /// - every slot in the range is initialized
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        unsafe { slice::from_raw_parts(self.slot(start), len) }
    }

    /// Views `len` slots starting at `start` as a mutable slice.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `start + len <= CAP`
    /// - every slot in the range is initialized
    pub unsafe fn slice_mut(&mut self, start: usize, len: usize) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.slot(start), len) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }
        // SAFETY: The same layout was accepted by `Layout::array` when the
        // allocation was made.
        unsafe {
            let layout =
                Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>());
            alloc::dealloc(self.ptr.as_ptr().cast(), layout);
        }
    }
}

impl<T> Default for RawBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for RawBuf<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuf")
            .field("ptr", &self.ptr)
            .field("cap", &self.cap)
            .finish()
    }
}
