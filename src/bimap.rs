//! An ordered bidirectional map and its cursors and iterators.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::raw::{Handle, RawBimap};

mod capacity;
mod cursor;

pub use cursor::{LeftCursor, LeftCursorMut, RightCursor, RightCursorMut};

/// An ordered one-to-one map between a left key type and a right key type.
///
/// Every stored pair `(L, R)` is unique on both sides: no two pairs share a
/// left key and no two pairs share a right key. Lookups, insertions and
/// removals are O(log n) expected from either side, and the pairs can be
/// traversed in sorted order by left key or by right key.
///
/// Both orderings are kept by treaps over one shared arena of pair records,
/// which is what makes [`LeftCursor::flip`] - jumping from a pair's position
/// in one ordering to its position in the other - a constant-time operation.
///
/// Keys must implement [`Ord`] and their ordering must not change while they
/// are in the map (see the caveat on `std::collections::BTreeMap`); keys are
/// never handed out mutably, so this is only possible through interior
/// mutability. Replacing a key means removing the pair and inserting a new
/// one.
///
/// # Examples
///
/// ```
/// use bitreap::Bimap;
///
/// let mut elements = Bimap::new();
/// elements.insert(1, "hydrogen");
/// elements.insert(2, "helium");
/// elements.insert(3, "lithium");
///
/// assert_eq!(elements.get_by_left(&2), Some(&"helium"));
/// assert_eq!(elements.get_by_right(&"lithium"), Some(&3));
///
/// // Either collision rejects the whole pair.
/// assert!(elements.insert(3, "boron").is_none());
/// assert!(elements.insert(4, "helium").is_none());
///
/// elements.remove_by_right(&"hydrogen");
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements.get_by_left(&1), None);
/// ```
pub struct Bimap<L, R> {
    raw: RawBimap<L, R>,
}

/// An iterator over the pairs of a [`Bimap`] in left-key order.
///
/// Created by [`Bimap::iter_left`]. Yields `(&L, &R)`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterLeft<'a, L, R> {
    raw: &'a RawBimap<L, R>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An iterator over the pairs of a [`Bimap`] in right-key order.
///
/// Created by [`Bimap::iter_right`]. Yields `(&R, &L)`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterRight<'a, L, R> {
    raw: &'a RawBimap<L, R>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An iterator over the left keys of a [`Bimap`] in sorted order.
///
/// Created by [`Bimap::left_keys`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LeftKeys<'a, L, R> {
    inner: IterLeft<'a, L, R>,
}

/// An iterator over the right keys of a [`Bimap`] in sorted order.
///
/// Created by [`Bimap::right_keys`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RightKeys<'a, L, R> {
    inner: IterRight<'a, L, R>,
}

/// An owning iterator over the pairs of a [`Bimap`] in left-key order.
///
/// Created by consuming a [`Bimap`] through [`IntoIterator`].
pub struct IntoIter<L, R> {
    inner: alloc::vec::IntoIter<(L, R)>,
}

impl<L, R> Bimap<L, R> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map: Bimap<i32, &str> = Bimap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Bimap { raw: RawBimap::new() }
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::from([(1, "a")]);
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// An iterator over the pairs in ascending left-key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(2, "b"), (1, "c"), (3, "a")]);
    /// let pairs: Vec<_> = map.iter_left().collect();
    /// assert_eq!(pairs, [(&1, &"c"), (&2, &"b"), (&3, &"a")]);
    /// ```
    pub fn iter_left(&self) -> IterLeft<'_, L, R> {
        IterLeft {
            raw: &self.raw,
            front: self.raw.first_left(),
            back: self.raw.last_left(),
            remaining: self.len(),
        }
    }

    /// An iterator over the pairs in ascending right-key order, yielding
    /// `(right, left)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(2, "b"), (1, "c"), (3, "a")]);
    /// let pairs: Vec<_> = map.iter_right().collect();
    /// assert_eq!(pairs, [(&"a", &3), (&"b", &2), (&"c", &1)]);
    /// ```
    pub fn iter_right(&self) -> IterRight<'_, L, R> {
        IterRight {
            raw: &self.raw,
            front: self.raw.first_right(),
            back: self.raw.last_right(),
            remaining: self.len(),
        }
    }

    /// An iterator over the left keys in ascending order.
    pub fn left_keys(&self) -> LeftKeys<'_, L, R> {
        LeftKeys { inner: self.iter_left() }
    }

    /// An iterator over the right keys in ascending order.
    pub fn right_keys(&self) -> RightKeys<'_, L, R> {
        RightKeys { inner: self.iter_right() }
    }

    /// A cursor at the pair with the smallest left key, or at the end
    /// position if the map is empty.
    pub fn front_left(&self) -> LeftCursor<'_, L, R> {
        LeftCursor {
            raw: &self.raw,
            node: self.raw.first_left(),
        }
    }

    /// The end position of the left ordering.
    pub fn end_left(&self) -> LeftCursor<'_, L, R> {
        LeftCursor { raw: &self.raw, node: None }
    }

    /// A cursor at the pair with the smallest right key, or at the end
    /// position if the map is empty.
    pub fn front_right(&self) -> RightCursor<'_, L, R> {
        RightCursor {
            raw: &self.raw,
            node: self.raw.first_right(),
        }
    }

    /// The end position of the right ordering.
    pub fn end_right(&self) -> RightCursor<'_, L, R> {
        RightCursor { raw: &self.raw, node: None }
    }

    /// A mutating cursor at the pair with the smallest left key.
    pub fn front_left_mut(&mut self) -> LeftCursorMut<'_, L, R> {
        let node = self.raw.first_left();
        LeftCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the pair with the smallest right key.
    pub fn front_right_mut(&mut self) -> RightCursorMut<'_, L, R> {
        let node = self.raw.first_right();
        RightCursorMut { raw: &mut self.raw, node }
    }
}

impl<L: Ord, R: Ord> Bimap<L, R> {
    /// Inserts the pair `(left, right)` and returns a cursor at its position
    /// in the left ordering.
    ///
    /// The pair is rejected - and the map left untouched - when `left` is
    /// already present on the left side *or* `right` is already present on
    /// the right side; rejection is signaled by `None`, so the return value
    /// must be checked to learn whether the insertion happened. A rejected
    /// pair is never merged into an existing one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::new();
    /// assert!(map.insert(1, "one").is_some());
    /// assert!(map.insert(1, "uno").is_none());
    /// assert!(map.insert(2, "one").is_none());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, left: L, right: R) -> Option<LeftCursor<'_, L, R>> {
        let handle = self.raw.insert(left, right)?;
        Some(LeftCursor {
            raw: &self.raw,
            node: Some(handle),
        })
    }

    /// Returns the right key paired with `left`, or `None` when `left` is
    /// absent.
    ///
    /// The key may be any borrowed form of `L`, as with the standard ordered
    /// collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(1, "one")]);
    /// assert_eq!(map.get_by_left(&1), Some(&"one"));
    /// assert_eq!(map.get_by_left(&2), None);
    /// ```
    pub fn get_by_left<Q>(&self, left: &Q) -> Option<&R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_left(left)?;
        Some(self.raw.right_key(handle))
    }

    /// Returns the left key paired with `right`, or `None` when `right` is
    /// absent.
    pub fn get_by_right<Q>(&self, right: &Q) -> Option<&L>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.raw.find_right(right)?;
        Some(self.raw.left_key(handle))
    }

    /// Returns `true` if `left` is present on the left side.
    pub fn contains_left<Q>(&self, left: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_left(left).is_some()
    }

    /// Returns `true` if `right` is present on the right side.
    pub fn contains_right<Q>(&self, right: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find_right(right).is_some()
    }

    /// Removes the pair whose left key is `left` and returns it; `None` when
    /// `left` is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::from([(1, "one"), (2, "two")]);
    /// assert_eq!(map.remove_by_left(&1), Some((1, "one")));
    /// assert_eq!(map.remove_by_left(&1), None);
    /// assert_eq!(map.get_by_right(&"one"), None);
    /// ```
    pub fn remove_by_left<Q>(&mut self, left: &Q) -> Option<(L, R)>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_by_left(left)
    }

    /// Removes the pair whose right key is `right` and returns it; `None`
    /// when `right` is absent.
    pub fn remove_by_right<Q>(&mut self, right: &Q) -> Option<(L, R)>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_by_right(right)
    }

    /// Removes every pair whose left key falls in `range`, in ascending
    /// order, and returns how many pairs were removed. The cursor advances
    /// past each pair before erasing it, so removal elsewhere never disturbs
    /// the walk. An inverted range removes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    /// assert_eq!(map.remove_left_range(2..4), 2);
    /// let keys: Vec<_> = map.left_keys().copied().collect();
    /// assert_eq!(keys, [1, 4]);
    /// ```
    pub fn remove_left_range<Q, B>(&mut self, range: B) -> usize
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
        B: RangeBounds<Q>,
    {
        let mut current = match range.start_bound() {
            Bound::Included(key) => self.raw.lower_bound_left(key),
            Bound::Excluded(key) => self.raw.upper_bound_left(key),
            Bound::Unbounded => self.raw.first_left(),
        };

        let mut removed = 0;
        while let Some(handle) = current {
            let inside = match range.end_bound() {
                Bound::Included(key) => self.raw.left_key(handle).borrow() <= key,
                Bound::Excluded(key) => self.raw.left_key(handle).borrow() < key,
                Bound::Unbounded => true,
            };
            if !inside {
                break;
            }
            let (successor, _) = self.raw.erase_via_left(handle);
            current = successor;
            removed += 1;
        }
        removed
    }

    /// Removes every pair whose right key falls in `range`, in ascending
    /// order, and returns how many pairs were removed.
    ///
    /// See [`Bimap::remove_left_range`].
    pub fn remove_right_range<Q, B>(&mut self, range: B) -> usize
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
        B: RangeBounds<Q>,
    {
        let mut current = match range.start_bound() {
            Bound::Included(key) => self.raw.lower_bound_right(key),
            Bound::Excluded(key) => self.raw.upper_bound_right(key),
            Bound::Unbounded => self.raw.first_right(),
        };

        let mut removed = 0;
        while let Some(handle) = current {
            let inside = match range.end_bound() {
                Bound::Included(key) => self.raw.right_key(handle).borrow() <= key,
                Bound::Excluded(key) => self.raw.right_key(handle).borrow() < key,
                Bound::Unbounded => true,
            };
            if !inside {
                break;
            }
            let (successor, _) = self.raw.erase_via_right(handle);
            current = successor;
            removed += 1;
        }
        removed
    }

    /// Returns the right key paired with `left`, inserting `(left, R::default())`
    /// first when `left` is absent.
    ///
    /// Because right keys are unique, an absent `left` first *evicts* any
    /// pair currently holding the default right key, then inserts the new
    /// pair; the eviction must come first or the insertion would be
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map: Bimap<i32, String> = Bimap::new();
    /// assert_eq!(map.left_or_default(1), "");
    /// // The default right key moves over to the new pair.
    /// assert_eq!(map.left_or_default(2), "");
    /// assert_eq!(map.len(), 1);
    /// assert!(!map.contains_left(&1));
    /// ```
    pub fn left_or_default(&mut self, left: L) -> &R
    where
        R: Default,
    {
        let handle = match self.raw.find_left(&left) {
            Some(handle) => handle,
            None => {
                let right = R::default();
                let _ = self.raw.remove_by_right(&right);
                self.raw.insert_unchecked(left, right)
            }
        };
        self.raw.right_key(handle)
    }

    /// Returns the left key paired with `right`, inserting
    /// `(L::default(), right)` first when `right` is absent - evicting any
    /// pair currently holding the default left key.
    ///
    /// See [`Bimap::left_or_default`].
    pub fn right_or_default(&mut self, right: R) -> &L
    where
        L: Default,
    {
        let handle = match self.raw.find_right(&right) {
            Some(handle) => handle,
            None => {
                let left = L::default();
                let _ = self.raw.remove_by_left(&left);
                self.raw.insert_unchecked(left, right)
            }
        };
        self.raw.left_key(handle)
    }

    /// A cursor at the pair whose left key equals `left`, or at the end
    /// position when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.find_left(&2).right(), Some(&"b"));
    /// assert!(map.find_left(&9) == map.end_left());
    /// ```
    pub fn find_left<Q>(&self, left: &Q) -> LeftCursor<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        LeftCursor {
            raw: &self.raw,
            node: self.raw.find_left(left),
        }
    }

    /// A cursor at the pair whose right key equals `right`, or at the end
    /// position when absent.
    pub fn find_right<Q>(&self, right: &Q) -> RightCursor<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        RightCursor {
            raw: &self.raw,
            node: self.raw.find_right(right),
        }
    }

    /// A cursor at the first pair whose left key is not less than `left`,
    /// or at the end position when no key qualifies.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(1, "a"), (3, "b"), (5, "c")]);
    /// assert_eq!(map.lower_bound_left(&2).left(), Some(&3));
    /// assert_eq!(map.upper_bound_left(&3).left(), Some(&5));
    /// ```
    pub fn lower_bound_left<Q>(&self, left: &Q) -> LeftCursor<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        LeftCursor {
            raw: &self.raw,
            node: self.raw.lower_bound_left(left),
        }
    }

    /// A cursor at the first pair whose left key is strictly greater than
    /// `left`, or at the end position when no key qualifies.
    pub fn upper_bound_left<Q>(&self, left: &Q) -> LeftCursor<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        LeftCursor {
            raw: &self.raw,
            node: self.raw.upper_bound_left(left),
        }
    }

    /// A cursor at the first pair whose right key is not less than `right`,
    /// or at the end position when no key qualifies.
    pub fn lower_bound_right<Q>(&self, right: &Q) -> RightCursor<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        RightCursor {
            raw: &self.raw,
            node: self.raw.lower_bound_right(right),
        }
    }

    /// A cursor at the first pair whose right key is strictly greater than
    /// `right`, or at the end position when no key qualifies.
    pub fn upper_bound_right<Q>(&self, right: &Q) -> RightCursor<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        RightCursor {
            raw: &self.raw,
            node: self.raw.upper_bound_right(right),
        }
    }

    /// A mutating cursor at the pair whose left key equals `left`, or at the
    /// end position when absent.
    pub fn find_left_mut<Q>(&mut self, left: &Q) -> LeftCursorMut<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.find_left(left);
        LeftCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the pair whose right key equals `right`, or at
    /// the end position when absent.
    pub fn find_right_mut<Q>(&mut self, right: &Q) -> RightCursorMut<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.find_right(right);
        RightCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the first pair whose left key is not less than
    /// `left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let mut map = Bimap::from([(1, "a"), (2, "b"), (3, "c")]);
    ///
    /// // Remove every pair with a left key of 2 or more.
    /// let mut cursor = map.lower_bound_left_mut(&2);
    /// while cursor.remove_current().is_some() {}
    /// drop(cursor);
    ///
    /// assert_eq!(map.len(), 1);
    /// assert!(map.contains_left(&1));
    /// ```
    pub fn lower_bound_left_mut<Q>(&mut self, left: &Q) -> LeftCursorMut<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.lower_bound_left(left);
        LeftCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the first pair whose left key is strictly
    /// greater than `left`.
    pub fn upper_bound_left_mut<Q>(&mut self, left: &Q) -> LeftCursorMut<'_, L, R>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.upper_bound_left(left);
        LeftCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the first pair whose right key is not less than
    /// `right`.
    pub fn lower_bound_right_mut<Q>(&mut self, right: &Q) -> RightCursorMut<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.lower_bound_right(right);
        RightCursorMut { raw: &mut self.raw, node }
    }

    /// A mutating cursor at the first pair whose right key is strictly
    /// greater than `right`.
    pub fn upper_bound_right_mut<Q>(&mut self, right: &Q) -> RightCursorMut<'_, L, R>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.raw.upper_bound_right(right);
        RightCursorMut { raw: &mut self.raw, node }
    }
}

impl<L, R> Default for Bimap<L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Bimap<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L: Ord + Clone, R: Ord + Clone> Clone for Bimap<L, R> {
    /// Deep-copies the map by reinserting every pair in left-key order.
    /// Since the source pairs are already unique on both sides, no
    /// reinsertion can be rejected. The clone redraws its balancing
    /// priorities, so the internal tree shapes may differ; the observable
    /// contents and orderings do not.
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity(self.len());
        for (left, right) in self.iter_left() {
            clone.raw.insert_unchecked(left.clone(), right.clone());
        }
        clone
    }
}

/// Positional equality: two maps are equal when they have the same length
/// and, walking both in left-key order in lockstep, every position agrees on
/// both keys.
///
/// This is *not* permutation-invariant set equality - it only coincides with
/// "same set of pairs" because left keys are unique and both walks are
/// sorted by the same `Ord`. Two maps over keys whose `Ord` disagrees with
/// their `PartialEq` (an unusual but legal combination) can hold the same
/// pairs yet compare unequal; this order sensitivity is intentional and kept
/// for compatibility.
impl<L: PartialEq, R: PartialEq> PartialEq for Bimap<L, R> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_left().eq(other.iter_left())
    }
}

impl<L: Eq, R: Eq> Eq for Bimap<L, R> {}

impl<L: Hash, R: Hash> Hash for Bimap<L, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for pair in self.iter_left() {
            pair.hash(state);
        }
    }
}

impl<L: Ord, R: Ord> FromIterator<(L, R)> for Bimap<L, R> {
    /// Builds a map by inserting each pair in turn; pairs rejected by
    /// [`Bimap::insert`] are silently skipped, so earlier pairs win.
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Bimap::new();
        map.extend(iter);
        map
    }
}

impl<L: Ord, R: Ord> Extend<(L, R)> for Bimap<L, R> {
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            let _ = self.insert(left, right);
        }
    }
}

impl<L: Ord, R: Ord, const N: usize> From<[(L, R); N]> for Bimap<L, R> {
    /// # Examples
    ///
    /// ```
    /// use bitreap::Bimap;
    ///
    /// let map = Bimap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.len(), 2);
    /// ```
    fn from(pairs: [(L, R); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<L, R> IntoIterator for Bimap<L, R> {
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    /// Consumes the map, yielding the owned pairs in left-key order.
    fn into_iter(mut self) -> IntoIter<L, R> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, L, R> IntoIterator for &'a Bimap<L, R> {
    type Item = (&'a L, &'a R);
    type IntoIter = IterLeft<'a, L, R>;

    fn into_iter(self) -> IterLeft<'a, L, R> {
        self.iter_left()
    }
}

impl<'a, L, R> Iterator for IterLeft<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.raw.next_left(handle);
        self.remaining -= 1;
        Some((self.raw.left_key(handle), self.raw.right_key(handle)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R> DoubleEndedIterator for IterLeft<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.raw.prev_left(Some(handle));
        self.remaining -= 1;
        Some((self.raw.left_key(handle), self.raw.right_key(handle)))
    }
}

impl<L, R> ExactSizeIterator for IterLeft<'_, L, R> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<L, R> FusedIterator for IterLeft<'_, L, R> {}

impl<L, R> Clone for IterLeft<'_, L, R> {
    fn clone(&self) -> Self {
        IterLeft {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, L, R> Iterator for IterRight<'a, L, R> {
    type Item = (&'a R, &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.raw.next_right(handle);
        self.remaining -= 1;
        Some((self.raw.right_key(handle), self.raw.left_key(handle)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L, R> DoubleEndedIterator for IterRight<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.raw.prev_right(Some(handle));
        self.remaining -= 1;
        Some((self.raw.right_key(handle), self.raw.left_key(handle)))
    }
}

impl<L, R> ExactSizeIterator for IterRight<'_, L, R> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<L, R> FusedIterator for IterRight<'_, L, R> {}

impl<L, R> Clone for IterRight<'_, L, R> {
    fn clone(&self) -> Self {
        IterRight {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, L, R> Iterator for LeftKeys<'a, L, R> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(left, _)| left)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for LeftKeys<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(left, _)| left)
    }
}

impl<L, R> ExactSizeIterator for LeftKeys<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for LeftKeys<'_, L, R> {}

impl<'a, L, R> Iterator for RightKeys<'a, L, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(right, _)| right)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for RightKeys<'_, L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(right, _)| right)
    }
}

impl<L, R> ExactSizeIterator for RightKeys<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for RightKeys<'_, L, R> {}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> DoubleEndedIterator for IntoIter<L, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<L, R> FusedIterator for IntoIter<L, R> {}
