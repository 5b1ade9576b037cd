use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer used as the packed storage of a [`FlagSet`].
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The trait is sealed, so the
/// supported widths cannot be extended outside this crate.
///
/// [`FlagSet`]: crate::FlagSet
pub trait FlagBits:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Number of bits in the integer.
    const BITS: u32;
    /// All bits unset.
    const ZERO: Self;
    /// Only the lowest bit set.
    const ONE: Self;

    /// Truncates `value` to this width.
    fn from_u64(value: u64) -> Self;

    /// Zero-extends `self` to 64 bits.
    fn to_u64(self) -> u64;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Returns `true` if the bit at `idx` is set.
    #[inline]
    fn bit(self, idx: u32) -> bool {
        idx < Self::BITS && self & (Self::ONE << idx) != Self::ZERO
    }
}

macro_rules! impl_flag_bits {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagBits for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }
            }
        )*
    };
}

impl_flag_bits!(u8, u16, u32, u64);
