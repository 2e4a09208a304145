use core::borrow::Borrow;
use core::cmp::Ordering;
use core::marker::PhantomData;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{PairRecord, Side};

/// One ordered index over the records of an arena.
///
/// A treap: a binary search tree on the side's key order that is
/// simultaneously a max-heap on the per-node random priorities, which keeps
/// the expected height logarithmic without rotation bookkeeping. The engine
/// stores no records of its own; it links the side-`S` node embedded in each
/// [`PairRecord`], so two engines can index the same records at once.
///
/// The absent handle (`None`) doubles as the one-past-the-end position: the
/// root's parent is `None`, and walking off the last element yields `None`.
///
/// Preconditions (duplicate keys, erasing a handle that is not a member of
/// this tree) are the caller's to uphold; the engine has no error paths.
pub(crate) struct Treap<S> {
    root: Option<Handle>,
    _side: PhantomData<S>,
}

impl<S> Treap<S> {
    pub(crate) const fn new() -> Self {
        Self {
            root: None,
            _side: PhantomData,
        }
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) const fn clear(&mut self) {
        self.root = None;
    }

    #[cfg(test)]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns the handle whose key compares equal to `key`, if any.
    pub(crate) fn find<L, R, Q>(&self, arena: &Arena<PairRecord<L, R>>, key: &Q) -> Option<Handle>
    where
        S: Side<L, R>,
        S::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let record = arena.get(handle);
            current = match key.cmp(S::key(record).borrow()) {
                Ordering::Less => S::node(record).left(),
                Ordering::Greater => S::node(record).right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Returns the first handle whose key is not less than `key`.
    pub(crate) fn lower_bound<L, R, Q>(&self, arena: &Arena<PairRecord<L, R>>, key: &Q) -> Option<Handle>
    where
        S: Side<L, R>,
        S::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(handle) = current {
            let record = arena.get(handle);
            if S::key(record).borrow() < key {
                current = S::node(record).right();
            } else {
                candidate = Some(handle);
                current = S::node(record).left();
            }
        }
        candidate
    }

    /// Returns the first handle whose key is strictly greater than `key`.
    pub(crate) fn upper_bound<L, R, Q>(&self, arena: &Arena<PairRecord<L, R>>, key: &Q) -> Option<Handle>
    where
        S: Side<L, R>,
        S::Key: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        let mut candidate = None;
        while let Some(handle) = current {
            let record = arena.get(handle);
            if key < S::key(record).borrow() {
                candidate = Some(handle);
                current = S::node(record).left();
            } else {
                current = S::node(record).right();
            }
        }
        candidate
    }

    /// Links `new` into the tree. The caller guarantees `new` is unlinked on
    /// this side and that its key is not already present.
    ///
    /// Descends by key while the existing priorities dominate; at the first
    /// node with a lower priority than `new`, that subtree is split by the
    /// new key and the two parts become `new`'s children.
    pub(crate) fn insert<L, R>(&mut self, arena: &mut Arena<PairRecord<L, R>>, new: Handle)
    where
        S: Side<L, R>,
        S::Key: Ord,
    {
        let root = Self::insert_at(arena, self.root, new);
        S::node_mut(arena.get_mut(root)).set_parent(None);
        self.root = Some(root);
    }

    fn insert_at<L, R>(arena: &mut Arena<PairRecord<L, R>>, tree: Option<Handle>, new: Handle) -> Handle
    where
        S: Side<L, R>,
        S::Key: Ord,
    {
        let Some(top) = tree else { return new };

        if Self::priority(arena, new) > Self::priority(arena, top) {
            let (lo, hi) = Self::split(arena, Some(top), new);
            let node = S::node_mut(arena.get_mut(new));
            node.set_left(lo);
            node.set_right(hi);
            Self::reparent(arena, lo, Some(new));
            Self::reparent(arena, hi, Some(new));
            return new;
        }

        let goes_left = S::key(arena.get(new)) < S::key(arena.get(top));
        if goes_left {
            let child = S::node(arena.get(top)).left();
            let subtree = Self::insert_at(arena, child, new);
            S::node_mut(arena.get_mut(top)).set_left(Some(subtree));
            Self::reparent(arena, Some(subtree), Some(top));
        } else {
            let child = S::node(arena.get(top)).right();
            let subtree = Self::insert_at(arena, child, new);
            S::node_mut(arena.get_mut(top)).set_right(Some(subtree));
            Self::reparent(arena, Some(subtree), Some(top));
        }
        top
    }

    /// Partitions `tree` into the handles ordered before `pivot`'s key and
    /// those ordered after it. The parents of the two returned part roots
    /// are left for the caller to fix.
    fn split<L, R>(
        arena: &mut Arena<PairRecord<L, R>>,
        tree: Option<Handle>,
        pivot: Handle,
    ) -> (Option<Handle>, Option<Handle>)
    where
        S: Side<L, R>,
        S::Key: Ord,
    {
        let Some(top) = tree else { return (None, None) };

        if S::key(arena.get(pivot)) < S::key(arena.get(top)) {
            let child = S::node(arena.get(top)).left();
            let (lo, hi) = Self::split(arena, child, pivot);
            S::node_mut(arena.get_mut(top)).set_left(hi);
            Self::reparent(arena, hi, Some(top));
            (lo, Some(top))
        } else {
            let child = S::node(arena.get(top)).right();
            let (lo, hi) = Self::split(arena, child, pivot);
            S::node_mut(arena.get_mut(top)).set_right(lo);
            Self::reparent(arena, lo, Some(top));
            (Some(top), hi)
        }
    }

    /// Unlinks `target` and returns its in-order successor (`None` for the
    /// end position). The successor is determined before any restructuring,
    /// so it stays valid afterwards.
    ///
    /// `target`'s children are merged - higher priority on top - and the
    /// merged subtree is spliced into `target`'s former slot.
    pub(crate) fn erase<L, R>(&mut self, arena: &mut Arena<PairRecord<L, R>>, target: Handle) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        let successor = Self::successor(arena, target);

        let node = S::node(arena.get(target));
        let parent = node.parent();
        let (left, right) = (node.left(), node.right());

        let merged = Self::merge(arena, left, right);
        Self::reparent(arena, merged, parent);
        match parent {
            None => self.root = merged,
            Some(parent) => {
                let slot = S::node_mut(arena.get_mut(parent));
                if slot.left() == Some(target) {
                    slot.set_left(merged);
                } else {
                    debug_assert_eq!(slot.right(), Some(target));
                    slot.set_right(merged);
                }
            }
        }

        successor
    }

    /// Joins two subtrees where every key in `left` orders before every key
    /// in `right`.
    fn merge<L, R>(
        arena: &mut Arena<PairRecord<L, R>>,
        left: Option<Handle>,
        right: Option<Handle>,
    ) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        let (Some(left_top), Some(right_top)) = (left, right) else {
            return left.or(right);
        };

        if Self::priority(arena, left_top) > Self::priority(arena, right_top) {
            let child = S::node(arena.get(left_top)).right();
            let merged = Self::merge(arena, child, right);
            S::node_mut(arena.get_mut(left_top)).set_right(merged);
            Self::reparent(arena, merged, Some(left_top));
            Some(left_top)
        } else {
            let child = S::node(arena.get(right_top)).left();
            let merged = Self::merge(arena, left, child);
            S::node_mut(arena.get_mut(right_top)).set_left(merged);
            Self::reparent(arena, merged, Some(right_top));
            Some(right_top)
        }
    }

    /// The leftmost handle, or `None` when the tree is empty.
    pub(crate) fn first<L, R>(&self, arena: &Arena<PairRecord<L, R>>) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        let mut current = self.root?;
        while let Some(left) = S::node(arena.get(current)).left() {
            current = left;
        }
        Some(current)
    }

    /// The rightmost handle, or `None` when the tree is empty.
    pub(crate) fn last<L, R>(&self, arena: &Arena<PairRecord<L, R>>) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        let mut current = self.root?;
        while let Some(right) = S::node(arena.get(current)).right() {
            current = right;
        }
        Some(current)
    }

    /// In-order successor: the leftmost handle of the right subtree, or the
    /// nearest ancestor reached from a left child.
    pub(crate) fn successor<L, R>(arena: &Arena<PairRecord<L, R>>, handle: Handle) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        if let Some(mut current) = S::node(arena.get(handle)).right() {
            while let Some(left) = S::node(arena.get(current)).left() {
                current = left;
            }
            return Some(current);
        }

        let mut current = handle;
        loop {
            let parent = S::node(arena.get(current)).parent()?;
            if S::node(arena.get(parent)).left() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
    }

    /// In-order predecessor of `position`, where `None` names the end
    /// position (whose predecessor is the last element). Stepping before the
    /// first element lands back on the end position.
    pub(crate) fn predecessor<L, R>(
        &self,
        arena: &Arena<PairRecord<L, R>>,
        position: Option<Handle>,
    ) -> Option<Handle>
    where
        S: Side<L, R>,
    {
        let Some(handle) = position else { return self.last(arena) };

        if let Some(mut current) = S::node(arena.get(handle)).left() {
            while let Some(right) = S::node(arena.get(current)).right() {
                current = right;
            }
            return Some(current);
        }

        let mut current = handle;
        loop {
            let parent = S::node(arena.get(current)).parent()?;
            if S::node(arena.get(parent)).right() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
    }

    #[inline]
    fn priority<L, R>(arena: &Arena<PairRecord<L, R>>, handle: Handle) -> u32
    where
        S: Side<L, R>,
    {
        S::node(arena.get(handle)).priority()
    }

    #[inline]
    fn reparent<L, R>(arena: &mut Arena<PairRecord<L, R>>, node: Option<Handle>, parent: Option<Handle>)
    where
        S: Side<L, R>,
    {
        if let Some(handle) = node {
            S::node_mut(arena.get_mut(handle)).set_parent(parent);
        }
    }
}
