use crate::RawBuf;
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
};

/// An iterator that moves out of a [`SimpleVec`].
///
/// This struct is created by the [`into_iter`] method, provided by the
/// [`IntoIterator`] trait.
///
/// [`SimpleVec`]: crate::SimpleVec
/// [`into_iter`]: crate::SimpleVec::into_iter
pub struct IntoIter<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Slots [start, end) have not been yielded yet.
        unsafe { self.buf.slice(self.start, self.end - self.start) }
    }

    /// Returns the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Slots [start, end) have not been yielded yet.
        unsafe { self.buf.slice_mut(self.start, self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            // SAFETY: `start < end`, so the slot has not been yielded.
            let out = Some(unsafe { self.buf.get(self.start) });
            self.start += 1;
            out
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            self.end -= 1;
            // SAFETY: The slot was inside [start, end) before the decrement.
            Some(unsafe { self.buf.get(self.end) })
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T> Debug for IntoIter<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}
