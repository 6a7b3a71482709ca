use simple_vec::{SimpleVec, simple_vec};

fn main() {
    let mut v: SimpleVec<u32> = simple_vec![1, 2, 3];
    v.insert(1, 9);
    v.erase(2);
    println!("{v:?} len={} capacity={}", v.len(), v.capacity());
}
