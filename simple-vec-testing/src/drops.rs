use simple_vec::{SimpleVec, simple_vec};
use std::{
    cell::Cell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

/// Counts drops in a shared cell and panics if the same value is dropped
/// twice.
#[derive(Debug)]
struct Tracked {
    value: u32,
    dropped: bool,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(value: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            dropped: false,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        assert!(!self.dropped);
        self.dropped = true;
        self.drops.set(self.drops.get() + 1);
    }
}

fn tracked(count: u32, drops: &Rc<Cell<usize>>) -> SimpleVec<Tracked> {
    (0..count).map(|i| Tracked::new(i, drops)).collect()
}

fn values(v: &SimpleVec<Tracked>) -> Vec<u32> {
    v.iter().map(|t| t.value).collect()
}

#[test]
pub fn drop_drops_every_element() {
    let drops = Rc::new(Cell::new(0));
    let v = tracked(10, &drops);
    assert_eq!(v.capacity(), 16);
    drop(v);
    assert_eq!(drops.get(), 10);
}

#[test]
pub fn growth_moves_without_dropping() {
    let drops = Rc::new(Cell::new(0));
    let mut v = SimpleVec::new();
    for i in 0..33 {
        v.push(Tracked::new(i, &drops));
        v.insert(0, Tracked::new(100 + i, &drops));
    }
    assert_eq!(drops.get(), 0);
    assert_eq!(v.len(), 66);
    drop(v);
    assert_eq!(drops.get(), 66);
}

#[test]
pub fn remove_and_erase() {
    let drops = Rc::new(Cell::new(0));
    let mut v = tracked(5, &drops);

    let removed = v.remove(1);
    assert_eq!(drops.get(), 0);
    assert_eq!(removed.value, 1);
    drop(removed);
    assert_eq!(drops.get(), 1);

    assert_eq!(v.erase(0), 0);
    assert_eq!(drops.get(), 2);
    assert_eq!(values(&v), [2, 3, 4]);

    assert_eq!(v.pop().map(|t| t.value), Some(4));
    assert_eq!(drops.get(), 3);

    drop(v);
    assert_eq!(drops.get(), 5);
}

#[test]
pub fn clear_truncate_and_resize() {
    let drops = Rc::new(Cell::new(0));
    let mut v = tracked(8, &drops);

    v.truncate(6);
    assert_eq!(drops.get(), 2);
    v.truncate(7);
    assert_eq!(drops.get(), 2);

    let filler = Tracked::new(99, &drops);
    v.resize_with(3, || filler.clone());
    assert_eq!(drops.get(), 5);
    v.resize_with(12, || filler.clone());
    assert_eq!(drops.get(), 5);
    assert_eq!(v.len(), 12);
    assert_eq!(v.capacity(), 12);

    v.clear();
    assert_eq!(drops.get(), 17);
    assert_eq!(v.capacity(), 12);

    drop(filler);
    drop(v);
    assert_eq!(drops.get(), 18);
}

#[test]
pub fn fill_moves_value_into_last_slot() {
    let drops = Rc::new(Cell::new(0));
    let v = SimpleVec::with_size_and_value(3, Tracked::new(5, &drops));
    assert_eq!(drops.get(), 0);
    assert_eq!(values(&v), [5, 5, 5]);
    drop(v);
    assert_eq!(drops.get(), 3);

    let v = SimpleVec::with_size_and_value(0, Tracked::new(6, &drops));
    assert!(v.is_empty());
    assert_eq!(drops.get(), 4);
}

#[test]
pub fn clone_and_clone_from() {
    let drops = Rc::new(Cell::new(0));
    let v = tracked(4, &drops);
    let mut copy = v.clone();
    assert_eq!(values(&copy), [0, 1, 2, 3]);

    copy.clone_from(&simple_vec![Tracked::new(7, &drops)]);
    // Four old elements of `copy` plus the temporary source element.
    assert_eq!(drops.get(), 5);
    assert_eq!(values(&copy), [7]);

    drop(copy);
    drop(v);
    assert_eq!(drops.get(), 10);
}

#[test]
pub fn partially_consumed_into_iter() {
    let drops = Rc::new(Cell::new(0));
    let mut iter = tracked(6, &drops).into_iter();
    assert_eq!(iter.next().map(|t| t.value), Some(0));
    assert_eq!(iter.next_back().map(|t| t.value), Some(5));
    assert_eq!(drops.get(), 2);
    drop(iter);
    assert_eq!(drops.get(), 6);
}

#[test]
pub fn swap_with_and_take() {
    let drops = Rc::new(Cell::new(0));
    let mut a = tracked(3, &drops);
    let mut b = tracked(2, &drops);
    a.swap_with(&mut b);
    assert_eq!(values(&a), [0, 1]);
    assert_eq!(values(&b), [0, 1, 2]);

    let c = b.take();
    assert_eq!(b.len(), 0);
    drop(b);
    assert_eq!(drops.get(), 0);

    drop(c);
    drop(a);
    assert_eq!(drops.get(), 5);
}

/// Panics on the clone of the element with value `3`.
#[derive(Debug)]
struct FragileClone(Tracked);

impl Clone for FragileClone {
    fn clone(&self) -> Self {
        assert_ne!(self.0.value, 3, "clone failed");
        Self(self.0.clone())
    }
}

#[test]
pub fn panicking_clone_leaks_nothing() {
    let drops = Rc::new(Cell::new(0));
    let v: SimpleVec<_> = (0..6)
        .map(|i| FragileClone(Tracked::new(i, &drops)))
        .collect();

    let result = panic::catch_unwind(AssertUnwindSafe(|| v.clone()));
    assert!(result.is_err());
    // The three clones made before the panic are dropped during unwinding.
    assert_eq!(drops.get(), 3);

    assert_eq!(v.len(), 6);
    drop(v);
    assert_eq!(drops.get(), 9);
}
