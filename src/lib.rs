//! A growable, contiguous array built on a single-owner raw buffer.
//!
//! [`SimpleVec`] tracks a length and a capacity over one [`RawBuf`]. Pushing
//! or inserting into a full vector reallocates to one slot if the capacity was
//! zero and to twice the capacity otherwise, giving amortized constant time
//! appends. Every operation that allocates has a `try_` form that reports
//! [`Error`] instead of aborting.
//!
//! ```
//! use simple_vec::simple_vec;
//!
//! let mut v = simple_vec![1, 2, 3];
//! v.insert(1, 9);
//! v.erase(2);
//! assert_eq!(v, [1, 9, 3]);
//! assert!(v.at(3).is_err());
//! ```

mod error;
mod eq_impl;
mod into_iter;
mod macros;
mod raw_buf;
mod simple_vec;

#[cfg(feature = "serde")]
mod serde;

pub use error::Error;
pub use into_iter::IntoIter;
pub use raw_buf::RawBuf;
pub use simple_vec::{Reserve, SimpleVec};

#[cfg(test)]
mod tests {
    use crate::{simple_vec, Error, Reserve, SimpleVec};
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct El {
        foo: u64,
        bar: u8,
    }

    const A: El = El { foo: 0, bar: 1 };
    const B: El = El { foo: 4, bar: 5 };
    const C: El = El { foo: 8, bar: 9 };
    const D: El = El { foo: 12, bar: 13 };
    const E: El = El { foo: 16, bar: 17 };

    const ELEMENTS: [El; 5] = [A, B, C, D, E];
    const ALL_A: [El; 3] = [A, A, A];

    #[test]
    pub fn push_and_pop() {
        let mut v = SimpleVec::new();
        for element in ELEMENTS.into_iter() {
            v.push(element);
        }
        for element in ELEMENTS.into_iter().rev() {
            assert_eq!(Some(element), v.pop());
        }
        assert_eq!(None, v.pop());
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    pub fn growth_doubles() {
        let mut v = SimpleVec::new();
        let mut capacities = vec![];
        for i in 0..17u32 {
            v.push(i);
            capacities.push(v.capacity());
        }
        assert_eq!(v.len(), 17);
        assert_eq!(
            capacities,
            [1, 2, 4, 4, 8, 8, 8, 8, 16, 16, 16, 16, 16, 16, 16, 16, 32]
        );
    }

    #[test]
    pub fn insert() {
        // Spare capacity: three pushes leave room for a fourth.
        test_insert(pushed(ALL_A), 0, [B, A, A, A]);
        test_insert(pushed(ALL_A), 1, [A, B, A, A]);
        test_insert(pushed(ALL_A), 2, [A, A, B, A]);
        test_insert(pushed(ALL_A), 3, [A, A, A, B]);

        // Full: the literal form has capacity equal to its length.
        test_insert(SimpleVec::from(ALL_A), 0, [B, A, A, A]);
        test_insert(SimpleVec::from(ALL_A), 2, [A, A, B, A]);
        test_insert(SimpleVec::from(ALL_A), 3, [A, A, A, B]);
    }

    fn pushed(elements: [El; 3]) -> SimpleVec<El> {
        let mut v = SimpleVec::new();
        for element in elements {
            v.push(element);
        }
        v
    }

    fn test_insert(mut v: SimpleVec<El>, index: usize, expected: [El; 4]) {
        let full = v.len() == v.capacity();
        let capacity = v.capacity();
        assert_eq!(v.insert(index, B), index);
        assert_eq!(v, expected);
        if full {
            assert_eq!(v.capacity(), capacity * 2);
        } else {
            assert_eq!(v.capacity(), capacity);
        }
        for element in expected.into_iter().rev() {
            assert_eq!(Some(element), v.pop());
        }
    }

    #[test]
    pub fn insert_into_empty() {
        let mut v = SimpleVec::new();
        assert_eq!(v.insert(0, C), 0);
        assert_eq!(v, [C]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    pub fn insert_past_end() {
        let mut v = simple_vec![A];
        v.insert(2, B);
    }

    #[test]
    pub fn remove() {
        test_remove(0, A, [B, C, D, E]);
        test_remove(1, B, [A, C, D, E]);
        test_remove(2, C, [A, B, D, E]);
        test_remove(3, D, [A, B, C, E]);
        test_remove(4, E, [A, B, C, D]);
    }

    fn test_remove(index: usize, expected_return: El, expected_contents: [El; 4]) {
        let mut v = SimpleVec::new();
        for element in ELEMENTS.into_iter() {
            v.push(element);
        }
        assert_eq!(expected_return, v.remove(index));
        assert_eq!(v.capacity(), 8);
        for element in expected_contents.into_iter().rev() {
            assert_eq!(Some(element), v.pop());
        }
    }

    #[test]
    pub fn erase_returns_following_index() {
        let mut v = SimpleVec::from(ELEMENTS);
        assert_eq!(v.erase(1), 1);
        assert_eq!(v[1], C);
        assert_eq!(v.erase(3), 3);
        assert_eq!(v.len(), 3);
        assert_eq!(v, [A, C, D]);
    }

    #[test]
    pub fn insert_then_erase_round_trip() {
        let original = SimpleVec::from(ELEMENTS);
        for index in 0..=original.len() {
            let mut v = original.clone();
            let at = v.insert(index, El { foo: 99, bar: 99 });
            v.erase(at);
            assert_eq!(v, original);
        }
    }

    #[test]
    pub fn scenario() {
        let mut v = SimpleVec::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 4);
        assert_eq!(v, [1, 2, 3]);

        v.insert(1, 9);
        assert_eq!(v, [1, 9, 2, 3]);
        assert_eq!(v.len(), 4);

        v.erase(2);
        assert_eq!(v, [1, 9, 3]);
        assert_eq!(v.len(), 3);

        v.pop();
        assert_eq!(v, [1, 9]);
        assert_eq!(v.len(), 2);

        v.resize(4);
        assert_eq!(v, [1, 9, 0, 0]);
        assert_eq!(v.len(), 4);
    }

    #[test]
    pub fn reserve_then_push() {
        let mut v = SimpleVec::<i32>::new();
        v.reserve(10);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 10);
        let ptr = v.as_ptr();
        for i in 0..10 {
            v.push(i);
        }
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test]
    pub fn reserve_keeps_contents() {
        let mut v = simple_vec![A, B];
        v.reserve(1);
        assert_eq!(v.capacity(), 2);
        v.reserve(7);
        assert_eq!(v.capacity(), 7);
        assert_eq!(v, [A, B]);
    }

    #[test]
    pub fn with_reserved_capacity() {
        let v = SimpleVec::<El>::from(Reserve(5));
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    pub fn checked_and_unchecked_access_agree() {
        let v = SimpleVec::from(ELEMENTS);
        for i in 0..v.len() {
            assert_eq!(v.at(i), Ok(&v[i]));
            assert_eq!(v.at(i), Ok(unsafe { v.get_unchecked(i) }));
        }
        for i in v.len()..v.len() + 3 {
            assert_eq!(v.at(i), Err(Error::OutOfRange { index: i, len: 5 }));
        }
    }

    #[test]
    pub fn at_mut() {
        let mut v = simple_vec![A, B];
        *v.at_mut(1).unwrap() = C;
        assert_eq!(v, [A, C]);
        assert!(v.at_mut(2).is_err());
    }

    #[test]
    #[should_panic]
    pub fn index_out_of_range() {
        let v = simple_vec![A];
        assert_eq!(v[1], A);
    }

    #[test]
    pub fn resize() {
        let mut v = SimpleVec::from(ELEMENTS);
        v.resize(3);
        assert_eq!(v, [A, B, C]);
        assert_eq!(v.capacity(), 5);
        v.resize(2);
        assert_eq!(v, [A, B]);
        assert_eq!(v.capacity(), 5);

        // In place: the spare slots are reused.
        v.resize(4);
        assert_eq!(v, [A, B, El::default(), El::default()]);
        assert_eq!(v.capacity(), 5);

        // Past the capacity: reallocates to exactly the new length.
        v.resize(9);
        assert_eq!(v.len(), 9);
        assert_eq!(v.capacity(), 9);
        assert_eq!(v[..2], [A, B]);
    }

    #[test]
    pub fn resize_with() {
        let mut v = SimpleVec::new();
        let mut next = 0;
        v.resize_with(3, || {
            next += 1;
            next
        });
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    pub fn clear_keeps_capacity() {
        let mut v = SimpleVec::from(ELEMENTS);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 5);
        v.push(E);
        assert_eq!(v, [E]);
    }

    #[test]
    pub fn construction() {
        let v = SimpleVec::<El>::with_size(3);
        assert_eq!(v, [El::default(); 3]);
        assert_eq!(v.capacity(), 3);

        let v = SimpleVec::with_size_and_value(4, B);
        assert_eq!(v, [B; 4]);
        assert_eq!(v.capacity(), 4);

        let v = simple_vec![C; 0];
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);

        let v: SimpleVec<El> = ELEMENTS.iter().copied().collect();
        assert_eq!(v, ELEMENTS);

        let v = SimpleVec::from(&ELEMENTS[1..3]);
        assert_eq!(v, [B, C]);
        assert_eq!(v.capacity(), 2);

        let v = SimpleVec::from(vec![D, E]);
        assert_eq!(v, [D, E]);
        assert_eq!(Vec::from(v), vec![D, E]);
    }

    #[test]
    pub fn repeat_evaluates_element_first() {
        let mut order = Vec::new();
        let v = simple_vec![{ order.push("elem"); A }; { order.push("n"); 2 }];
        assert_eq!(order, ["elem", "n"]);
        assert_eq!(v, [A, A]);
    }

    #[test]
    pub fn extend() {
        let mut v = simple_vec![A];
        v.extend([B, C]);
        v.extend(&[D, E]);
        assert_eq!(v, ELEMENTS);
    }

    #[test]
    pub fn clone_is_deep() {
        let mut original = SimpleVec::with_capacity(8);
        original.extend(ALL_A);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 8);

        copy[0] = E;
        copy.push(D);
        assert_eq!(original, ALL_A);
        assert_eq!(copy, [E, A, A, D]);
    }

    #[test]
    pub fn clone_from_reuses_allocation() {
        let source = simple_vec![A, B];
        let mut target = SimpleVec::with_capacity(4);
        target.push(E);
        let ptr = target.as_ptr();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.as_ptr(), ptr);

        let mut small = simple_vec![E];
        small.clone_from(&SimpleVec::from(ELEMENTS));
        assert_eq!(small, ELEMENTS);
    }

    #[test]
    pub fn take_leaves_source_empty() {
        let mut a = SimpleVec::from(ELEMENTS);
        let b = a.take();
        assert_eq!(b, ELEMENTS);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    pub fn swap_with() {
        let mut a = simple_vec![A, B, C];
        let mut b = SimpleVec::with_capacity(10);
        b.push(D);
        a.swap_with(&mut b);
        assert_eq!(a, [D]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b, [A, B, C]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    pub fn equality() {
        assert_eq!(simple_vec![A, B], simple_vec![A, B]);
        assert_ne!(simple_vec![A, B], simple_vec![A]);
        assert_ne!(simple_vec![A, B], simple_vec![A, C]);

        // Capacity does not take part in equality.
        let mut reserved = SimpleVec::with_capacity(10);
        reserved.extend([A, B]);
        assert_eq!(reserved, simple_vec![A, B]);
    }

    #[test]
    pub fn ordering() {
        let ab = simple_vec![A, B];
        let abc = simple_vec![A, B, C];
        let ac = simple_vec![A, C];
        let empty = SimpleVec::<El>::new();

        assert!(ab < abc);
        assert!(abc < ac);
        assert!(ab < ac);
        assert!(empty < ab);
        assert!(ac > abc);
        assert!(ab <= ab.clone());
        assert!(ab >= ab.clone());
        assert!(!(ab < ab.clone()));
        assert_eq!(abc.cmp(&ac), ab.as_slice().cmp(ac.as_slice()));
    }

    #[test]
    pub fn hash_matches_slice() {
        let v = SimpleVec::from(ELEMENTS);
        assert_eq!(hash_of(&v), hash_of(ELEMENTS.as_slice()));
        assert_ne!(hash_of(&v), hash_of(&ELEMENTS[..4]));
    }

    fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    pub fn debug() {
        assert_eq!(format!("{:?}", simple_vec![1, 2, 3]), "[1, 2, 3]");
    }

    #[test]
    pub fn iterate() {
        let mut v = SimpleVec::from(ELEMENTS);
        for el in &mut v {
            el.bar += 1;
        }
        let bars: Vec<u8> = (&v).into_iter().map(|el| el.bar).collect();
        assert_eq!(bars, [2, 6, 10, 14, 18]);
        let foos: Vec<u64> = v.into_iter().rev().map(|el| el.foo).collect();
        assert_eq!(foos, [16, 12, 8, 4, 0]);
    }

    #[test]
    pub fn zero_sized() {
        let mut v = SimpleVec::new();
        for _ in 0..5 {
            v.push(());
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        v.insert(2, ());
        v.remove(0);
        v.resize(10);
        assert_eq!(v.len(), 10);
        assert_eq!(v.clone().into_iter().count(), 10);
        for _ in 0..10 {
            assert_eq!(v.pop(), Some(()));
        }
        assert_eq!(v.pop(), None);
    }

    #[test]
    pub fn allocation_failure_is_reported() {
        assert_eq!(
            SimpleVec::<u64>::try_with_capacity(usize::MAX).unwrap_err(),
            Error::CapacityOverflow
        );
        assert_eq!(
            SimpleVec::<u64>::try_with_size(usize::MAX).unwrap_err(),
            Error::CapacityOverflow
        );

        let mut v = simple_vec![1u64, 2, 3];
        assert_eq!(v.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(v.try_resize(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.try_clone(), Ok(simple_vec![1, 2, 3]));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    pub fn reserve_overflow_panics() {
        let mut v = SimpleVec::<u32>::new();
        v.reserve(usize::MAX);
    }

    #[test]
    pub fn try_push_and_try_insert() {
        let mut v = SimpleVec::new();
        assert_eq!(v.try_push(A), Ok(()));
        assert_eq!(v.try_insert(0, B), Ok(0));
        assert_eq!(v, [B, A]);
    }
}
