//! Bit-mask helpers.
//!
//! All helpers take their inputs by value and return a new value.

use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Integer types the bit-mask helpers accept.
pub trait Bits:
    Copy
    + PartialEq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const ZERO: Self;
}

macro_rules! impl_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Bits for $ty {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_bits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Returns true if every bit of `mask` is set in `value`.
#[inline]
pub fn is_set_all<T: Bits>(value: T, mask: T) -> bool {
    value & mask == mask
}

/// Returns true if at least one bit of `mask` is set in `value`.
#[inline]
pub fn is_set_any<T: Bits>(value: T, mask: T) -> bool {
    value & mask != T::ZERO
}

/// `value` with the bits of `mask` set.
#[inline]
#[must_use]
pub fn set<T: Bits>(value: T, mask: T) -> T {
    value | mask
}

/// `value` with the bits of `mask` cleared.
#[inline]
#[must_use]
pub fn clear<T: Bits>(value: T, mask: T) -> T {
    value & !mask
}

/// `value` with the bits of `mask` flipped.
#[inline]
#[must_use]
pub fn toggle<T: Bits>(value: T, mask: T) -> T {
    value ^ mask
}
