use crate::bits::FlagBits;
use crate::contract::{Domain, FlagEnum};
use crate::flag_set::FlagSet;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// Bidirectional cursor over the present members of a [`FlagSet`].
///
/// The position ranges from `-1` (before the first bit) to the end sentinel
/// (one past the highest legal bit). Outside of the sentinels the cursor only
/// ever rests on positions whose bit is set and inside the flag domain.
///
/// Two cursors compare equal if their positions are equal, regardless of the
/// set they borrow.
///
/// Returned by [`FlagSet::cursor_front()`] and [`FlagSet::cursor_back()`].
pub struct Cursor<'flags, E: FlagEnum> {
    flags: &'flags FlagSet<E>,
    pos: isize,
}

impl<'flags, E: FlagEnum> Cursor<'flags, E> {
    pub(crate) fn before_front(flags: &'flags FlagSet<E>) -> Self {
        Self { flags, pos: -1 }
    }

    pub(crate) fn at_end(flags: &'flags FlagSet<E>) -> Self {
        Self {
            flags,
            pos: Self::end(),
        }
    }

    #[inline]
    fn end() -> isize {
        Domain::<E>::END as isize
    }

    #[inline]
    fn is_set_at(&self, pos: isize) -> bool {
        Domain::<E>::MASK & 1 << pos != 0 && self.flags.0.bit(pos as u32)
    }

    /// Moves to the next present member, or to the end sentinel if there is
    /// none. Stays put once the end sentinel is reached.
    pub fn move_next(&mut self) {
        let end = Self::end();
        while self.pos < end {
            self.pos += 1;
            if self.pos < end && self.is_set_at(self.pos) {
                break;
            }
        }
    }

    /// Moves to the previous present member, or to position `-1` if there is
    /// none. Stays put once `-1` is reached.
    pub fn move_prev(&mut self) {
        while self.pos > -1 {
            self.pos -= 1;
            if self.pos > -1 && self.is_set_at(self.pos) {
                break;
            }
        }
    }

    /// Returns the member at the current position, or `None` on either
    /// sentinel.
    pub fn current(&self) -> Option<E> {
        if self.pos < 0 || self.pos >= Self::end() || !self.is_set_at(self.pos) {
            return None;
        }
        E::from_bit_index(self.pos as u32)
    }

    /// Returns the current bit position.
    #[inline]
    pub fn position(&self) -> isize {
        self.pos
    }
}

impl<E: FlagEnum> Clone for Cursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FlagEnum> Copy for Cursor<'_, E> {}

impl<E: FlagEnum> PartialEq for Cursor<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<E: FlagEnum> Eq for Cursor<'_, E> {}

impl<E: FlagEnum> Debug for Cursor<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

/// Iterator over the present members of a [`FlagSet`].
///
/// Yields members in ascending bit order from the front and in descending
/// order from the back.
///
/// Returned by [`FlagSet::iter()`].
pub struct Iter<'flags, E: FlagEnum> {
    front: Cursor<'flags, E>,
    back: Cursor<'flags, E>,
}

impl<'flags, E: FlagEnum> Iter<'flags, E> {
    pub(crate) fn new(flags: &'flags FlagSet<E>) -> Self {
        Self {
            front: flags.cursor_front(),
            back: flags.cursor_back(),
        }
    }

    fn remaining(&self) -> usize {
        // front rests on a set bit or the end, back one past the last unvisited
        let lo = self.front.pos.max(0) as u32;
        let hi = self.back.pos.max(0) as u32;
        if lo >= hi {
            return 0;
        }
        let below_hi = if hi >= u64::BITS {
            u64::MAX
        } else {
            (1 << hi) - 1
        };
        let below_lo = (1u64 << lo) - 1;
        let present = self.front.flags.0.to_u64() & Domain::<E>::MASK;
        (present & below_hi & !below_lo).count_ones() as usize
    }
}

impl<E: FlagEnum> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<E: FlagEnum> Iterator for Iter<'_, E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        while self.front != self.back {
            let member = self.front.current();
            self.front.move_next();
            if member.is_some() {
                return member;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<E: FlagEnum> DoubleEndedIterator for Iter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.front != self.back {
            self.back.move_prev();
            let member = self.back.current();
            if member.is_some() {
                return member;
            }
        }
        None
    }
}

impl<E: FlagEnum> ExactSizeIterator for Iter<'_, E> {}

impl<E: FlagEnum> FusedIterator for Iter<'_, E> {}
