//! Capabilities the generic guards are written against.

use crate::types::alloc_type::{BTreeMap, BTreeSet, Cow, String, Vec, VecDeque};

/// Primitive numbers whose zero is their `Default` value.
///
/// `is_zero`, `is_negative` and `is_negative_or_zero` compare against
/// [`Numeric::zero`].
pub trait Numeric: PartialOrd + Copy {
    fn zero() -> Self;
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn zero() -> Self {
                    <$ty as Default>::default()
                }
            }
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Containers that can be empty.
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl Emptiness for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for Cow<'_, str> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiness for Vec<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<K, V, H> Emptiness for std::collections::HashMap<K, V, H> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "std")]
impl<T, H> Emptiness for std::collections::HashSet<T, H> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}
