use crate::bits::FlagBits;
use crate::contract::{Domain, FlagEnum};
use crate::iter::{Cursor, Iter};
use core::fmt::{Binary, Debug, Display, Formatter, Write};
use core::hash::{Hash, Hasher};
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign,
};

/// The main type that stores a set of flags.
///
/// `E` is the flag enumeration, see [`FlagEnum`] and [`flag_enum!`].
///
/// Internally stores one bit per member in a single `E::Bits` integer, so a
/// `FlagSet` is as large as the enumeration's storage width and is `Copy`.
///
/// [`flag_enum!`]: crate::flag_enum
pub struct FlagSet<E: FlagEnum>(pub(crate) E::Bits);

impl<E: FlagEnum> FlagSet<E> {
    /// Creates a set containing only `member`.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let green = FlagSet::new(Color::Green);
    /// assert_eq!(green.raw_value(), 0b010);
    /// assert_eq!(green.len(), 1);
    /// ```
    #[inline]
    pub fn new(member: E) -> Self {
        let mask = const { Domain::<E>::MASK };
        let idx = member.bit_index();
        debug_assert!(
            idx < u64::BITS && mask & 1 << idx != 0,
            "Bit index {idx} out of the flag domain"
        );
        Self(E::Bits::ONE << idx)
    }

    /// Creates an empty set, or the enumeration's explicit `NONE` pattern if
    /// it declares one. Same as [`Default::default`].
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let none = FlagSet::<Color>::none();
    /// assert!(none.is_empty());
    /// assert_eq!(none, FlagSet::default());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Self(E::Bits::from_u64(const { Domain::<E>::NONE }))
    }

    /// Creates a set with every member of the enumeration.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let all = FlagSet::<Color>::all();
    /// assert_eq!(all.raw_value(), 0b111);
    /// assert_eq!(all.len(), all.max_len());
    /// ```
    #[inline]
    pub fn all() -> Self {
        Self(Self::mask())
    }

    /// Wraps a packed value verbatim.
    ///
    /// The enumeration contract is still checked at compile time, but the
    /// value itself is not validated: bits outside of the flag domain are
    /// kept and the caller is responsible for not passing any. Use
    /// [`try_from_raw`] or [`from_raw_truncate`] for untrusted input.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let stored = (FlagSet::new(Color::Red) | Color::Blue).raw_value();
    /// let loaded = FlagSet::<Color>::from_raw(stored);
    /// assert!(loaded.contains(Color::Blue));
    /// ```
    ///
    /// [`try_from_raw`]: FlagSet::try_from_raw
    /// [`from_raw_truncate`]: FlagSet::from_raw_truncate
    #[inline]
    pub fn from_raw(bits: E::Bits) -> Self {
        let _ = const { Domain::<E>::MASK };
        Self(bits)
    }

    /// Wraps a packed value if it only sets bits inside the flag domain.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// assert!(FlagSet::<Color>::try_from_raw(0b101).is_some());
    /// assert_eq!(FlagSet::<Color>::try_from_raw(0b1000), None);
    /// ```
    pub fn try_from_raw(bits: E::Bits) -> Option<Self> {
        if bits.to_u64() & !Domain::<E>::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Wraps a packed value, dropping every bit outside of the flag domain.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::<Color>::from_raw_truncate(0b1111_1001);
    /// assert_eq!(flags.raw_value(), 0b001);
    /// ```
    #[inline]
    pub fn from_raw_truncate(bits: E::Bits) -> Self {
        Self(bits & Self::mask())
    }

    /// Returns the packed value, bit `k` being set if the member with value
    /// `k` is present. This is the only persistable representation.
    #[inline]
    pub fn raw_value(&self) -> E::Bits {
        self.0
    }

    /// Removes every member.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let mut flags = FlagSet::<Color>::all();
    /// flags.clear();
    /// assert!(flags.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.0 = E::Bits::ZERO;
    }

    /// Returns `true` if no member is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == E::Bits::ZERO
    }

    /// Returns `true` if every member is present.
    #[inline]
    pub fn is_all(&self) -> bool {
        self.0 == Self::mask()
    }

    /// Returns the number of members present.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Red) | Color::Blue;
    /// assert_eq!(flags.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the number of members in the enumeration, i.e. the capacity
    /// and not the current cardinality.
    #[inline]
    pub fn max_len(&self) -> usize {
        let _ = const { Domain::<E>::MASK };
        E::COUNT
    }

    /// Returns the number of members present. Same as [`len`].
    ///
    /// [`len`]: FlagSet::len
    #[inline]
    pub fn num_set(&self) -> usize {
        self.len()
    }

    /// Returns the number of members absent.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Red);
    /// assert_eq!(flags.num_unset(), 2);
    /// assert_eq!(flags.num_set() + flags.num_unset(), flags.max_len());
    /// ```
    #[inline]
    pub fn num_unset(&self) -> usize {
        self.max_len().saturating_sub(self.len())
    }

    /// Adds a member or every member of another set.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let mut flags = FlagSet::<Color>::none();
    /// flags.set(Color::Green);
    /// flags.set(FlagSet::new(Color::Red) | Color::Blue);
    /// assert!(flags.is_all());
    /// ```
    #[inline]
    pub fn set(&mut self, other: impl Into<Self>) {
        self.in_place_union(other.into());
    }

    /// Removes a member or every member of another set.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let mut flags = FlagSet::<Color>::all();
    /// flags.unset(Color::Green);
    /// assert_eq!(flags, FlagSet::new(Color::Red) | Color::Blue);
    /// ```
    #[inline]
    pub fn unset(&mut self, other: impl Into<Self>) {
        self.in_place_difference(other.into());
    }

    /// Flips a member.
    ///
    /// Returns whether the member was present before the toggle.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let mut flags = FlagSet::<Color>::none();
    /// assert_eq!(flags.toggle(Color::Blue), false); // added
    /// assert_eq!(flags.toggle(Color::Blue), true); // removed
    /// assert!(flags.is_empty());
    /// ```
    #[inline]
    pub fn toggle(&mut self, member: E) -> bool {
        let was_set = self.contains(member);
        self.0 = self.0 ^ Self::new(member).0;
        was_set
    }

    /// Returns `true` if `member` is present.
    #[inline]
    pub fn contains(&self, member: E) -> bool {
        self.0 & Self::new(member).0 != E::Bits::ZERO
    }

    /// Returns `true` if every member of `other` is present in `self`.
    ///
    /// `other` is the candidate subset, so pass the required members as the
    /// argument.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Red) | Color::Blue;
    /// assert!(flags.all_of(Color::Red));
    /// assert!(!flags.all_of(FlagSet::new(Color::Red) | Color::Green));
    /// assert!(flags.all_of(FlagSet::<Color>::none()));
    /// ```
    #[inline]
    pub fn all_of(&self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no member of `other` is present in `self`.
    #[inline]
    pub fn none_of(&self, other: impl Into<Self>) -> bool {
        self.0 & other.into().0 == E::Bits::ZERO
    }

    /// Returns `true` if at least one member of `other` is present in `self`.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Red) | Color::Blue;
    /// assert!(flags.any_of(FlagSet::new(Color::Red) | Color::Green));
    /// assert!(!flags.any_of(Color::Green));
    /// assert!(flags.none_of(Color::Green));
    /// ```
    #[inline]
    pub fn any_of(&self, other: impl Into<Self>) -> bool {
        !self.none_of(other)
    }

    /// Returns the member with the lowest value.
    ///
    /// # Panics
    /// Panics if the set is empty. Use [`first`] for a non-panicking variant.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Green) | Color::Blue;
    /// assert_eq!(flags.front(), Color::Green);
    /// ```
    ///
    /// [`first`]: FlagSet::first
    pub fn front(&self) -> E {
        match self.first() {
            Some(member) => member,
            None => panic!("front() called on an empty FlagSet"),
        }
    }

    /// Returns the member with the highest value.
    ///
    /// # Panics
    /// Panics if the set is empty. Use [`last`] for a non-panicking variant.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Red) | Color::Green;
    /// assert_eq!(flags.back(), Color::Green);
    /// ```
    ///
    /// [`last`]: FlagSet::last
    pub fn back(&self) -> E {
        match self.last() {
            Some(member) => member,
            None => panic!("back() called on an empty FlagSet"),
        }
    }

    /// Returns the member with the lowest value or `None` if the set is
    /// empty.
    #[inline]
    pub fn first(&self) -> Option<E> {
        self.iter().next()
    }

    /// Returns the member with the highest value or `None` if the set is
    /// empty.
    #[inline]
    pub fn last(&self) -> Option<E> {
        self.iter().next_back()
    }

    /// Returns an iterator over the present members in ascending order.
    ///
    /// The iterator is double-ended, so `.rev()` walks them in descending
    /// order.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Blue) | Color::Red;
    /// let mut iter = flags.iter();
    /// assert_eq!(iter.next(), Some(Color::Red));
    /// assert_eq!(iter.next(), Some(Color::Blue));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self)
    }

    /// Returns a cursor parked on the lowest present member, or on the end
    /// sentinel if the set is empty.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let flags = FlagSet::new(Color::Green) | Color::Blue;
    /// let mut cursor = flags.cursor_front();
    /// assert_eq!(cursor.current(), Some(Color::Green));
    /// cursor.move_next();
    /// assert_eq!(cursor.current(), Some(Color::Blue));
    /// cursor.move_next();
    /// assert_eq!(cursor, flags.cursor_back());
    /// ```
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, E> {
        let mut cursor = Cursor::before_front(self);
        cursor.move_next();
        cursor
    }

    /// Returns a cursor parked on the end sentinel. Moving it backwards
    /// reaches the highest present member.
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, E> {
        Cursor::at_end(self)
    }

    /// Returns a new set with the members present in `self` or `other`.
    #[inline]
    pub fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Adds every member of `other` to `self`.
    #[inline]
    pub fn in_place_union(&mut self, other: Self) {
        self.0 = self.0 | other.0;
    }

    /// Returns a new set with the members present in both `self` and
    /// `other`.
    #[inline]
    pub fn intersection(&self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Keeps only the members of `self` that are also in `other`.
    #[inline]
    pub fn in_place_intersection(&mut self, other: Self) {
        self.0 = self.0 & other.0;
    }

    /// Returns a new set with the members present in exactly one of `self`
    /// and `other`.
    ///
    /// The result is masked to the flag domain.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let a = FlagSet::new(Color::Red) | Color::Green;
    /// let b = FlagSet::new(Color::Green) | Color::Blue;
    /// assert_eq!(a.symmetric_difference(b), FlagSet::new(Color::Red) | Color::Blue);
    /// ```
    #[inline]
    pub fn symmetric_difference(&self, other: Self) -> Self {
        Self((self.0 ^ other.0) & Self::mask())
    }

    /// Replaces `self` with the symmetric difference of `self` and `other`.
    #[inline]
    pub fn in_place_symmetric_difference(&mut self, other: Self) {
        *self = self.symmetric_difference(other);
    }

    /// Returns a new set with the members of `self` that are not in `other`.
    #[inline]
    pub fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Removes every member of `other` from `self`.
    #[inline]
    pub fn in_place_difference(&mut self, other: Self) {
        self.0 = self.0 & !other.0;
    }

    /// Returns a new set with exactly the members absent from `self`.
    ///
    /// The result is masked to the flag domain.
    ///
    /// # Examples
    /// ```
    /// # use light_flagset::{FlagSet, flag_enum};
    /// # flag_enum! { #[derive(Debug)] enum Color: u8 { Red, Green, Blue } }
    /// let red = FlagSet::new(Color::Red);
    /// assert_eq!(red.complement().raw_value(), 0b110);
    /// assert_eq!(red.complement().complement(), red);
    /// ```
    #[inline]
    pub fn complement(&self) -> Self {
        Self(!self.0 & Self::mask())
    }

    /// Replaces `self` with its complement.
    #[inline]
    pub fn in_place_complement(&mut self) {
        *self = self.complement();
    }

    #[inline]
    fn mask() -> E::Bits {
        E::Bits::from_u64(const { Domain::<E>::MASK })
    }
}

impl<E: FlagEnum> Clone for FlagSet<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FlagEnum> Copy for FlagSet<E> {}

impl<E: FlagEnum> PartialEq for FlagSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<E: FlagEnum> Eq for FlagSet<E> {}

impl<E: FlagEnum> Hash for FlagSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<E: FlagEnum> Default for FlagSet<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E: FlagEnum> From<E> for FlagSet<E> {
    fn from(member: E) -> Self {
        Self::new(member)
    }
}

impl<'flags, E: FlagEnum> IntoIterator for &'flags FlagSet<E> {
    type Item = E;
    type IntoIter = Iter<'flags, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Constructs a set from an iterator over members. Duplicates are allowed.
impl<E: FlagEnum> FromIterator<E> for FlagSet<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut flags = Self::from_raw(E::Bits::ZERO);
        flags.extend(iter);
        flags
    }
}

impl<E: FlagEnum> Extend<E> for FlagSet<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for member in iter {
            self.set(member);
        }
    }
}

/// Renders the present members as `{A, B}` using their `Debug` output.
impl<E: FlagEnum + Debug> Debug for FlagSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the present members as `[A, B]` in ascending order using their
/// `Display` output. An empty set renders as `[]`.
impl<E: FlagEnum + Display> Display for FlagSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_char('[')?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_char(']')
    }
}

/// Formats the packed value.
impl<E: FlagEnum> Binary for FlagSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitAnd<R> for FlagSet<E> {
    type Output = Self;

    fn bitand(self, rhs: R) -> Self::Output {
        self.intersection(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitAndAssign<R> for FlagSet<E> {
    fn bitand_assign(&mut self, rhs: R) {
        self.in_place_intersection(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitOr<R> for FlagSet<E> {
    type Output = Self;

    fn bitor(self, rhs: R) -> Self::Output {
        self.union(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitOrAssign<R> for FlagSet<E> {
    fn bitor_assign(&mut self, rhs: R) {
        self.in_place_union(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitXor<R> for FlagSet<E> {
    type Output = Self;

    fn bitxor(self, rhs: R) -> Self::Output {
        self.symmetric_difference(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> BitXorAssign<R> for FlagSet<E> {
    fn bitxor_assign(&mut self, rhs: R) {
        self.in_place_symmetric_difference(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> Sub<R> for FlagSet<E> {
    type Output = Self;

    fn sub(self, rhs: R) -> Self::Output {
        self.difference(rhs.into())
    }
}

impl<E: FlagEnum, R: Into<FlagSet<E>>> SubAssign<R> for FlagSet<E> {
    fn sub_assign(&mut self, rhs: R) {
        self.in_place_difference(rhs.into())
    }
}

impl<E: FlagEnum> Not for FlagSet<E> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}
