use crate::SimpleVec;

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T, U $(,$($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$u) -> bool {
                let me: &[T] = self.as_ref();
                let other: &[U] = other.as_ref();
                me == other
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        uni!($t, $u $(, $($b)+)?);

        impl<T, U $(,$($b)+)?> PartialEq<$t> for $u
        where
            U: PartialEq<T>,
        {
            fn eq(&self, other: &$t) -> bool {
                let me: &[U] = self.as_ref();
                let other: &[T] = other.as_ref();
                me == other
            }
        }
    };
}

macro_rules! impl_for {
    ($t:ty) => {
        bi!($t, Vec<U>);
        bi!($t, [U]);
        bi!($t, &[U]);
        bi!($t, &mut [U]);
        bi!($t, [U; N], const N: usize);
        bi!($t, &[U; N], const N: usize);
    };
}

impl_for!(SimpleVec<T>);
