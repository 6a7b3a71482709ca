/// Creates a [`SimpleVec`] containing the arguments.
///
/// Like [`vec!`], `simple_vec!` comes in two forms:
///
/// - A list of elements, giving a vector whose length and capacity equal the
///   number of elements.
/// - An element and a length, giving `len` clones of the element.
///
/// # Examples
///
/// ```
/// # use simple_vec::{SimpleVec, simple_vec};
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let v = simple_vec![7; 2];
/// assert_eq!(v, [7, 7]);
///
/// let v: SimpleVec<u8> = simple_vec![];
/// assert!(v.is_empty());
/// ```
///
/// [`SimpleVec`]: crate::SimpleVec
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };

    ($elem:expr; $n:expr) => {
        {
            let elem = $elem;
            $crate::SimpleVec::with_size_and_value($n, elem)
        }
    };

    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($x),+])
    };
}
