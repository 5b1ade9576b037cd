//! Contract between a flag enumeration and [`FlagSet`](crate::FlagSet).

use crate::bits::FlagBits;
use core::marker::PhantomData;

/// A closed enumeration whose members can be stored in a [`FlagSet`].
///
/// Usually implemented through [`flag_enum!`], which also validates every
/// member at compile time. Hand-written implementations are checked the
/// first time a [`FlagSet`] of the type is constructed.
///
/// Member values are bit *indices*: a member whose value is `k` occupies bit
/// `k` of the packed storage.
///
/// # Contract
/// - `COUNT` is at most 64 and at most `Bits::BITS`.
/// - If `ALL` is given, it has exactly `COUNT` bits set and fits into `Bits`.
/// - If `NONE` is given, it only sets bits inside the domain mask.
/// - `bit_index` returns a value inside the domain mask for every member and
///   `from_bit_index` is its inverse.
///
/// Violations of the first three rules are reported as compile errors during
/// constant evaluation.
///
/// [`FlagSet`]: crate::FlagSet
/// [`flag_enum!`]: crate::flag_enum
pub trait FlagEnum: Copy + Eq + 'static {
    /// Packed storage, the unsigned integer of the enumeration's width.
    type Bits: FlagBits;

    /// Number of members in the enumeration.
    const COUNT: usize;

    /// Explicit pattern of every legal bit. Required for sparse enumerations
    /// whose members are not `0..COUNT`.
    const ALL: Option<u64> = None;

    /// Explicit pattern of an empty set.
    const NONE: Option<u64> = None;

    /// The bit position of this member.
    fn bit_index(self) -> u32;

    /// The member occupying bit `index`, if any.
    fn from_bit_index(index: u32) -> Option<Self>;
}

/// Returns the mask of every legal bit position for an enumeration with
/// `count` members and an optional explicit `all` pattern.
///
/// # Examples
/// ```
/// use light_flagset::domain_mask;
///
/// assert_eq!(domain_mask(0, None), 0);
/// assert_eq!(domain_mask(4, None), 0b1111);
/// assert_eq!(domain_mask(64, None), u64::MAX);
/// assert_eq!(domain_mask(3, Some(0b10101)), 0b10101);
/// ```
pub const fn domain_mask(count: usize, all: Option<u64>) -> u64 {
    match all {
        Some(all) => all,
        None if count >= 64 => u64::MAX,
        None => (1 << count) - 1,
    }
}

/// Validates the enumeration-wide part of the [`FlagEnum`] contract.
///
/// Panics with a descriptive message, which turns into a compile error when
/// evaluated in a const context.
#[doc(hidden)]
pub const fn assert_contract(count: usize, bits: u32, all: Option<u64>, none: Option<u64>) {
    assert!(count <= 64, "FlagEnum::COUNT must not exceed 64.");
    assert!(
        count <= bits as usize,
        "FlagEnum::COUNT exceeds the width of FlagEnum::Bits."
    );
    if let Some(all) = all {
        assert!(
            all.count_ones() as usize == count,
            "FlagEnum::ALL does not match the number of flags in FlagEnum::COUNT."
        );
        assert!(
            bits >= 64 || all >> bits == 0,
            "FlagEnum::ALL does not fit into FlagEnum::Bits."
        );
    }
    if let Some(none) = none {
        assert!(
            none & !domain_mask(count, all) == 0,
            "FlagEnum::NONE sets bits outside of the flag domain."
        );
    }
}

/// Validates a single member value against the storage width and the
/// domain mask.
#[doc(hidden)]
pub const fn assert_member(value: i128, bits: u32, mask: u64) {
    assert!(
        value >= 0 && value < 64,
        "Flag member values must be bit indices in 0..64."
    );
    assert!(
        value < bits as i128,
        "Flag member value exceeds the width of FlagEnum::Bits."
    );
    assert!(
        mask & (1 << value as u32) != 0,
        "Flag member value lies outside of the flag domain."
    );
}

/// Compile-time constants derived from a [`FlagEnum`].
///
/// Reading any of them evaluates the contract checks, so an invalid
/// enumeration fails to compile as soon as a [`FlagSet`] of it is built.
///
/// [`FlagSet`]: crate::FlagSet
pub struct Domain<E>(PhantomData<E>);

impl<E: FlagEnum> Domain<E> {
    /// Every legal bit position.
    pub const MASK: u64 = {
        assert_contract(E::COUNT, <E::Bits as FlagBits>::BITS, E::ALL, E::NONE);
        domain_mask(E::COUNT, E::ALL)
    };

    /// Pattern of an empty set.
    pub const NONE: u64 = match E::NONE {
        Some(none) => none & Self::MASK,
        None => 0,
    };

    /// One past the highest legal bit position; the end sentinel of a
    /// [`Cursor`](crate::Cursor).
    pub const END: u32 = u64::BITS - Self::MASK.leading_zeros();
}
