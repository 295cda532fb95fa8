//! Integer domains the permutation can operate on.
//!
//! The core works on offsets into the interval, computed in `i128`. That type is
//! at least one bit wider than every domain below, so neither `max - min + 1`
//! nor `min + offset` can overflow, including for the full `i64` and `u64` ranges.

use std::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}
}

/// A primitive integer type usable as the domain of a permutation.
///
/// This trait is sealed and implemented for the signed and unsigned integers up to 64 bits.
pub trait Integer: private::Sealed + Copy + Ord + Debug + Display + Send + Sync + 'static {
    /// Smallest value of the type.
    const MIN: Self;
    /// Largest value of the type.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;

    /// Losslessly widens the value.
    fn widen(self) -> i128;

    /// Narrows a widened value, returning `None` if it does not fit.
    fn narrow(wide: i128) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}

            impl Integer for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn narrow(wide: i128) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
