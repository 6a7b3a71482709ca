//! Property tests that run random operation sequences against both a
//! [`SimpleVec`] and a std [`Vec`] and compare the results.

use proptest::{collection::vec, prelude::*, sample::Index};
use simple_vec::SimpleVec;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Insert(Index, i32),
    Remove(Index),
    Resize(usize),
    Reserve(usize),
    Truncate(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        3 => (any::<Index>(), any::<i32>()).prop_map(|(at, value)| Op::Insert(at, value)),
        2 => any::<Index>().prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..64).prop_map(Op::Truncate),
        1 => Just(Op::Clear),
    ]
}

fn grown(capacity: usize) -> usize {
    if capacity == 0 { 1 } else { capacity * 2 }
}

proptest! {
    #[test]
    fn matches_vec(ops in vec(op(), 0..200)) {
        let mut actual = SimpleVec::new();
        let mut model = Vec::new();
        for op in ops {
            let len = actual.len();
            let capacity = actual.capacity();
            match op {
                Op::Push(value) => {
                    actual.push(value);
                    model.push(value);
                    let expected = if len == capacity { grown(capacity) } else { capacity };
                    prop_assert_eq!(actual.capacity(), expected);
                }
                Op::Pop => {
                    prop_assert_eq!(actual.pop(), model.pop());
                    prop_assert_eq!(actual.capacity(), capacity);
                }
                Op::Insert(at, value) => {
                    let index = at.index(len + 1);
                    prop_assert_eq!(actual.insert(index, value), index);
                    model.insert(index, value);
                    let expected = if len == capacity { grown(capacity) } else { capacity };
                    prop_assert_eq!(actual.capacity(), expected);
                }
                Op::Remove(at) => {
                    if len > 0 {
                        let index = at.index(len);
                        prop_assert_eq!(actual.remove(index), model.remove(index));
                        prop_assert_eq!(actual.capacity(), capacity);
                    }
                }
                Op::Resize(new_len) => {
                    actual.resize(new_len);
                    model.resize(new_len, 0);
                    prop_assert_eq!(actual.capacity(), capacity.max(new_len));
                }
                Op::Reserve(new_capacity) => {
                    actual.reserve(new_capacity);
                    prop_assert_eq!(actual.capacity(), capacity.max(new_capacity));
                }
                Op::Truncate(new_len) => {
                    actual.truncate(new_len);
                    model.truncate(new_len);
                    prop_assert_eq!(actual.capacity(), capacity);
                }
                Op::Clear => {
                    actual.clear();
                    model.clear();
                    prop_assert_eq!(actual.capacity(), capacity);
                }
            }
            prop_assert_eq!(actual.as_slice(), model.as_slice());
            prop_assert!(actual.len() <= actual.capacity());
        }
    }

    #[test]
    fn checked_access_agrees_with_indexing(
        items in vec(any::<i32>(), 0..32),
        extra in 0usize..8,
    ) {
        let v = SimpleVec::from(items.clone());
        for i in 0..items.len() {
            prop_assert_eq!(v.at(i), Ok(&v[i]));
            prop_assert_eq!(v.at(i), Ok(&items[i]));
        }
        prop_assert!(v.at(items.len() + extra).is_err());
    }

    #[test]
    fn insert_then_erase_restores(
        items in vec(any::<i32>(), 0..32),
        at in any::<Index>(),
        value in any::<i32>(),
    ) {
        let original = SimpleVec::from(items);
        let mut v = original.clone();
        let index = v.insert(at.index(original.len() + 1), value);
        prop_assert_eq!(v[index], value);
        prop_assert_eq!(v.erase(index), index);
        prop_assert_eq!(v, original);
    }

    #[test]
    fn shrinking_resize_keeps_prefix(
        items in vec(any::<i32>(), 0..32),
        grow in 0usize..16,
        keep in any::<Index>(),
    ) {
        let mut v = SimpleVec::from(items.clone());
        let n = items.len() + grow;
        v.resize(n);
        let capacity = v.capacity();
        let m = keep.index(n + 1);
        v.resize(m);
        prop_assert_eq!(v.capacity(), capacity);
        prop_assert_eq!(&v[..m.min(items.len())], &items[..m.min(items.len())]);
    }

    #[test]
    fn clone_is_isolated(items in vec(any::<i32>(), 1..32), value in any::<i32>()) {
        let original = SimpleVec::from(items.clone());
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), original.capacity());
        copy[0] = copy[0].wrapping_add(1);
        copy.push(value);
        copy.remove(0);
        prop_assert_eq!(original, items);
    }

    #[test]
    fn ordering_matches_vec(
        a in vec(0u8..4, 0..6),
        b in vec(0u8..4, 0..6),
    ) {
        let sa = SimpleVec::from(a.clone());
        let sb = SimpleVec::from(b.clone());
        prop_assert_eq!(sa.cmp(&sb), a.cmp(&b));
        prop_assert_eq!(sa.partial_cmp(&sb), a.partial_cmp(&b));
        prop_assert_eq!(sa == sb, a == b);
        prop_assert_eq!(sa < sb, a < b);
        prop_assert_eq!(sa >= sb, a >= b);
    }
}
