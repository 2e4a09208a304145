use core::fmt;
use core::ptr;

use crate::raw::{Handle, RawBimap};

/// A read-only position in the left ordering of a [`Bimap`](crate::Bimap).
///
/// A cursor either points at one pair or sits at the *end position*, one
/// past the pair with the largest left key. The end position is where
/// [`find_left`](crate::Bimap::find_left) lands on a miss and where
/// [`move_next`](LeftCursor::move_next) stops.
///
/// A cursor stays valid until the pair it points at is removed from the map;
/// positions over other pairs are unaffected by removals elsewhere.
///
/// # Examples
///
/// ```
/// use bitreap::Bimap;
///
/// let mut map = Bimap::new();
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// let mut cursor = map.front_left();
/// assert_eq!(cursor.pair(), Some((&1, &"a")));
/// cursor.move_next();
/// assert_eq!(cursor.pair(), Some((&2, &"b")));
/// cursor.move_next();
/// assert!(cursor.is_end());
/// ```
#[must_use]
pub struct LeftCursor<'a, L, R> {
    pub(super) raw: &'a RawBimap<L, R>,
    pub(super) node: Option<Handle>,
}

/// A read-only position in the right ordering of a [`Bimap`](crate::Bimap).
///
/// Identical to [`LeftCursor`] except that it traverses pairs in right-key
/// order and its end position is one past the largest right key.
#[must_use]
pub struct RightCursor<'a, L, R> {
    pub(super) raw: &'a RawBimap<L, R>,
    pub(super) node: Option<Handle>,
}

impl<'a, L, R> LeftCursor<'a, L, R> {
    /// Returns `true` when the cursor sits at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The left key of the current pair, or `None` at the end position.
    pub fn left(&self) -> Option<&'a L> {
        let raw = self.raw;
        self.node.map(|handle| raw.left_key(handle))
    }

    /// The right key of the current pair, or `None` at the end position.
    pub fn right(&self) -> Option<&'a R> {
        let raw = self.raw;
        self.node.map(|handle| raw.right_key(handle))
    }

    /// Both keys of the current pair, or `None` at the end position.
    pub fn pair(&self) -> Option<(&'a L, &'a R)> {
        let raw = self.raw;
        self.node.map(|handle| (raw.left_key(handle), raw.right_key(handle)))
    }

    /// Moves to the pair with the next larger left key. At the end position
    /// this is a no-op.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.raw.next_left(handle);
        }
    }

    /// Moves to the pair with the next smaller left key. From the end
    /// position this lands on the last pair; from the first pair it lands on
    /// the end position.
    pub fn move_prev(&mut self) {
        self.node = self.raw.prev_left(self.node);
    }

    /// The same pair's position in the right ordering, in O(1).
    ///
    /// Both orderings index the same records, so flipping is a rewrap of the
    /// position, not a search. The end position flips to the end position,
    /// and flipping twice returns to the starting cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::new();
    /// map.insert(1, "z");
    /// map.insert(2, "a");
    ///
    /// let cursor = map.find_left(&1);
    /// let flipped = cursor.flip();
    /// assert_eq!(flipped.pair(), Some((&1, &"z")));
    /// assert!(flipped.flip() == cursor);
    /// ```
    pub fn flip(self) -> RightCursor<'a, L, R> {
        RightCursor {
            raw: self.raw,
            node: self.node,
        }
    }
}

impl<'a, L, R> RightCursor<'a, L, R> {
    /// Returns `true` when the cursor sits at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The left key of the current pair, or `None` at the end position.
    pub fn left(&self) -> Option<&'a L> {
        let raw = self.raw;
        self.node.map(|handle| raw.left_key(handle))
    }

    /// The right key of the current pair, or `None` at the end position.
    pub fn right(&self) -> Option<&'a R> {
        let raw = self.raw;
        self.node.map(|handle| raw.right_key(handle))
    }

    /// Both keys of the current pair, or `None` at the end position.
    pub fn pair(&self) -> Option<(&'a L, &'a R)> {
        let raw = self.raw;
        self.node.map(|handle| (raw.left_key(handle), raw.right_key(handle)))
    }

    /// Moves to the pair with the next larger right key. At the end position
    /// this is a no-op.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.raw.next_right(handle);
        }
    }

    /// Moves to the pair with the next smaller right key. From the end
    /// position this lands on the last pair; from the first pair it lands on
    /// the end position.
    pub fn move_prev(&mut self) {
        self.node = self.raw.prev_right(self.node);
    }

    /// The same pair's position in the left ordering, in O(1).
    ///
    /// See [`LeftCursor::flip`].
    pub fn flip(self) -> LeftCursor<'a, L, R> {
        LeftCursor {
            raw: self.raw,
            node: self.node,
        }
    }
}

impl<L, R> Clone for LeftCursor<'_, L, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, R> Copy for LeftCursor<'_, L, R> {}

impl<L, R> PartialEq for LeftCursor<'_, L, R> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.raw, other.raw) && self.node == other.node
    }
}

impl<L, R> Eq for LeftCursor<'_, L, R> {}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for LeftCursor<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair() {
            Some(pair) => f.debug_tuple("LeftCursor").field(&pair).finish(),
            None => f.write_str("LeftCursor(end)"),
        }
    }
}

impl<L, R> Clone for RightCursor<'_, L, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, R> Copy for RightCursor<'_, L, R> {}

impl<L, R> PartialEq for RightCursor<'_, L, R> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.raw, other.raw) && self.node == other.node
    }
}

impl<L, R> Eq for RightCursor<'_, L, R> {}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RightCursor<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair() {
            Some(pair) => f.debug_tuple("RightCursor").field(&pair).finish(),
            None => f.write_str("RightCursor(end)"),
        }
    }
}

/// A mutating position in the left ordering of a [`Bimap`](crate::Bimap).
///
/// Traverses like [`LeftCursor`] and can additionally remove the pair it
/// points at, after which it sits on the removed pair's in-order successor.
///
/// # Examples
///
/// ```
/// use bitreap::Bimap;
///
/// let mut map = Bimap::from([(1, "a"), (2, "b"), (3, "c")]);
///
/// let mut cursor = map.find_left_mut(&2);
/// assert_eq!(cursor.remove_current(), Some((2, "b")));
/// // The cursor moved on to the successor of the removed pair.
/// assert_eq!(cursor.left(), Some(&3));
/// drop(cursor);
/// assert_eq!(map.len(), 2);
/// ```
#[must_use]
pub struct LeftCursorMut<'a, L, R> {
    pub(super) raw: &'a mut RawBimap<L, R>,
    pub(super) node: Option<Handle>,
}

/// A mutating position in the right ordering of a [`Bimap`](crate::Bimap).
///
/// See [`LeftCursorMut`]; removal advances along the right ordering instead.
#[must_use]
pub struct RightCursorMut<'a, L, R> {
    pub(super) raw: &'a mut RawBimap<L, R>,
    pub(super) node: Option<Handle>,
}

impl<'a, L, R> LeftCursorMut<'a, L, R> {
    /// Returns `true` when the cursor sits at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The left key of the current pair, or `None` at the end position.
    pub fn left(&self) -> Option<&L> {
        self.node.map(|handle| self.raw.left_key(handle))
    }

    /// The right key of the current pair, or `None` at the end position.
    pub fn right(&self) -> Option<&R> {
        self.node.map(|handle| self.raw.right_key(handle))
    }

    /// Both keys of the current pair, or `None` at the end position.
    pub fn pair(&self) -> Option<(&L, &R)> {
        self.node.map(|handle| (self.raw.left_key(handle), self.raw.right_key(handle)))
    }

    /// Moves to the pair with the next larger left key. At the end position
    /// this is a no-op.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.raw.next_left(handle);
        }
    }

    /// Moves to the pair with the next smaller left key. From the end
    /// position this lands on the last pair; from the first pair it lands on
    /// the end position.
    pub fn move_prev(&mut self) {
        self.node = self.raw.prev_left(self.node);
    }

    /// A read-only view of this position.
    pub fn as_cursor(&self) -> LeftCursor<'_, L, R> {
        LeftCursor {
            raw: &*self.raw,
            node: self.node,
        }
    }

    /// The same pair's position in the right ordering, in O(1).
    pub fn flip(self) -> RightCursorMut<'a, L, R> {
        RightCursorMut {
            raw: self.raw,
            node: self.node,
        }
    }
}

impl<L: Ord, R: Ord> LeftCursorMut<'_, L, R> {
    /// Removes the current pair from both orderings and returns it, leaving
    /// the cursor on the removed pair's successor in the left ordering.
    /// Returns `None` at the end position.
    ///
    /// Only positions that referenced the removed pair are invalidated.
    pub fn remove_current(&mut self) -> Option<(L, R)> {
        let target = self.node?;
        let (successor, pair) = self.raw.erase_via_left(target);
        self.node = successor;
        Some(pair)
    }
}

impl<'a, L, R> RightCursorMut<'a, L, R> {
    /// Returns `true` when the cursor sits at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The left key of the current pair, or `None` at the end position.
    pub fn left(&self) -> Option<&L> {
        self.node.map(|handle| self.raw.left_key(handle))
    }

    /// The right key of the current pair, or `None` at the end position.
    pub fn right(&self) -> Option<&R> {
        self.node.map(|handle| self.raw.right_key(handle))
    }

    /// Both keys of the current pair, or `None` at the end position.
    pub fn pair(&self) -> Option<(&L, &R)> {
        self.node.map(|handle| (self.raw.left_key(handle), self.raw.right_key(handle)))
    }

    /// Moves to the pair with the next larger right key. At the end position
    /// this is a no-op.
    pub fn move_next(&mut self) {
        if let Some(handle) = self.node {
            self.node = self.raw.next_right(handle);
        }
    }

    /// Moves to the pair with the next smaller right key. From the end
    /// position this lands on the last pair; from the first pair it lands on
    /// the end position.
    pub fn move_prev(&mut self) {
        self.node = self.raw.prev_right(self.node);
    }

    /// A read-only view of this position.
    pub fn as_cursor(&self) -> RightCursor<'_, L, R> {
        RightCursor {
            raw: &*self.raw,
            node: self.node,
        }
    }

    /// The same pair's position in the left ordering, in O(1).
    pub fn flip(self) -> LeftCursorMut<'a, L, R> {
        LeftCursorMut {
            raw: self.raw,
            node: self.node,
        }
    }
}

impl<L: Ord, R: Ord> RightCursorMut<'_, L, R> {
    /// Removes the current pair from both orderings and returns it, leaving
    /// the cursor on the removed pair's successor in the right ordering.
    /// Returns `None` at the end position.
    ///
    /// Only positions that referenced the removed pair are invalidated.
    pub fn remove_current(&mut self) -> Option<(L, R)> {
        let target = self.node?;
        let (successor, pair) = self.raw.erase_via_right(target);
        self.node = successor;
        Some(pair)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for LeftCursorMut<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair() {
            Some(pair) => f.debug_tuple("LeftCursorMut").field(&pair).finish(),
            None => f.write_str("LeftCursorMut(end)"),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for RightCursorMut<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pair() {
            Some(pair) => f.debug_tuple("RightCursorMut").field(&pair).finish(),
            None => f.write_str("RightCursorMut(end)"),
        }
    }
}
