#![cfg(test)]

mod drops;
mod model;
mod serde_round_trip;

use simple_vec::{SimpleVec, simple_vec};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct El {
    foo: u64,
    bar: u8,
    baz: [u32; 2],
}

const A: El = El {
    foo: 0,
    bar: 1,
    baz: [2, 3],
};

const B: El = El {
    foo: 4,
    bar: 5,
    baz: [6, 7],
};

const C: El = El {
    foo: 8,
    bar: 9,
    baz: [10, 11],
};

const D: El = El {
    foo: 12,
    bar: 13,
    baz: [14, 15],
};

const E: El = El {
    foo: 16,
    bar: 17,
    baz: [18, 19],
};

const ABCDE: [El; 5] = [A, B, C, D, E];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Unit;

#[test]
pub fn with_capacity() {
    let mut v = SimpleVec::<El>::with_capacity(5);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.len(), 0);
    for element in ABCDE.into_iter() {
        v.push(element);
    }
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.len(), 5);
    v.push(A);
    assert_eq!(v.capacity(), 10);
}

#[test]
pub fn from_iter() {
    let v: SimpleVec<_> = ABCDE.into_iter().collect();
    assert!(v.into_iter().eq(ABCDE.into_iter()));
}

#[test]
pub fn from_impls() {
    let expected: SimpleVec<_> = ABCDE.into_iter().collect();
    let array: [El; 5] = ABCDE;
    let array_ref: &[El; 5] = &ABCDE;
    let mut tmp = ABCDE;
    let array_ref_mut: &mut [El; 5] = &mut tmp;
    assert_eq!(expected, SimpleVec::from(array));
    assert_eq!(expected, SimpleVec::from(array_ref));
    assert_eq!(expected, SimpleVec::from(array_ref_mut));
    assert_eq!(expected, SimpleVec::from(ABCDE.to_vec()));
    assert_eq!(expected, simple_vec![A, B, C, D, E]);
}

#[test]
pub fn iter_mut() {
    let mut v: SimpleVec<_> = ABCDE.into();
    for el in v.iter_mut() {
        el.foo += 1;
        el.bar += 2;
    }
    for (borrowed, owned) in v.iter().zip(ABCDE.into_iter()) {
        assert_eq!(borrowed.foo, owned.foo + 1);
        assert_eq!(borrowed.bar, owned.bar + 2);
        assert_eq!(borrowed.baz, owned.baz);
    }
}

#[test]
pub fn slice_methods_through_deref() {
    let mut v: SimpleVec<_> = ABCDE.into();
    assert_eq!(v.first(), Some(&A));
    assert_eq!(v.last(), Some(&E));
    assert!(v.contains(&C));
    v.swap(0, 4);
    v.reverse();
    assert_eq!(v, [A, D, C, B, E]);
    v.sort();
    assert_eq!(v, ABCDE);
    assert_eq!(v.binary_search(&D), Ok(3));
}

#[test]
pub fn boundary_inserts() {
    for full in [true, false] {
        for index in [0, 2, 3] {
            let mut v = if full {
                SimpleVec::from([A, B, C])
            } else {
                let mut v = SimpleVec::with_capacity(4);
                v.extend([A, B, C]);
                v
            };
            let capacity = v.capacity();
            v.insert(index, E);

            let mut expected = vec![A, B, C];
            expected.insert(index, E);
            assert_eq!(v, expected);
            assert_eq!(v.capacity(), if full { capacity * 2 } else { capacity });
        }
    }
}

#[test]
pub fn unit_struct() {
    let mut v = SimpleVec::<Unit>::new();
    for _ in 0..5 {
        v.push(Unit);
    }
    v.insert(0, Unit);
    assert_eq!(v.len(), 6);
    assert_eq!(v.capacity(), 8);
    for _ in 0..6 {
        assert_eq!(v.pop(), Some(Unit));
    }
    assert_eq!(v.pop(), None);
}

#[test]
pub fn vec_of_vecs() {
    let mut outer = SimpleVec::new();
    for i in 0..4 {
        outer.push(simple_vec![i; i]);
    }
    let copy = outer.clone();
    outer[3].push(100);
    assert_eq!(copy[3], [3, 3, 3]);
    assert_eq!(outer[3], [3, 3, 3, 100]);
    assert_eq!(outer.remove(0), SimpleVec::<usize>::new());
}
