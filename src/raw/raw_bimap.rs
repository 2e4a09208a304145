use core::borrow::Borrow;
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::vec::Vec;

use rand_xoshiro::Xoshiro128PlusPlus;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{LeftSide, PairRecord, RightSide};
use super::treap::Treap;

// Every container draws its priorities from its own generator, seeded from a
// process-wide counter; the Weyl increment keeps the streams distinct.
static NEXT_SEED: AtomicU64 = AtomicU64::new(0x9E37_79B9_7F4A_7C15);

fn next_seed() -> u64 {
    NEXT_SEED.fetch_add(0xA076_1D64_78BD_642F, Ordering::Relaxed)
}

/// The core dual-index store backing `Bimap`.
///
/// One arena of pair records, indexed twice: the left treap orders records by
/// `L`, the right treap orders the same records by `R`. Every mutation that
/// touches one tree on behalf of a pair touches the other before returning,
/// so no caller ever observes a record that is a member of only one tree.
pub(crate) struct RawBimap<L, R> {
    records: Arena<PairRecord<L, R>>,
    left: Treap<LeftSide>,
    right: Treap<RightSide>,
    rng: Xoshiro128PlusPlus,
    len: usize,
}

impl<L, R> RawBimap<L, R> {
    pub(crate) fn new() -> Self {
        Self {
            records: Arena::new(),
            left: Treap::new(),
            right: Treap::new(),
            rng: Xoshiro128PlusPlus::seed_from_u64(next_seed()),
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arena::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        debug_assert_eq!(self.left.is_empty(), self.right.is_empty());
        debug_assert_eq!(self.left.is_empty(), self.len == 0);
        debug_assert_eq!(self.records.len(), self.len);
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.records.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.left.clear();
        self.right.clear();
        self.len = 0;
    }

    #[inline]
    pub(crate) fn left_key(&self, handle: Handle) -> &L {
        self.records.get(handle).left_key()
    }

    #[inline]
    pub(crate) fn right_key(&self, handle: Handle) -> &R {
        self.records.get(handle).right_key()
    }

    pub(crate) fn first_left(&self) -> Option<Handle> {
        self.left.first(&self.records)
    }

    pub(crate) fn last_left(&self) -> Option<Handle> {
        self.left.last(&self.records)
    }

    pub(crate) fn first_right(&self) -> Option<Handle> {
        self.right.first(&self.records)
    }

    pub(crate) fn last_right(&self) -> Option<Handle> {
        self.right.last(&self.records)
    }

    pub(crate) fn next_left(&self, handle: Handle) -> Option<Handle> {
        Treap::<LeftSide>::successor(&self.records, handle)
    }

    pub(crate) fn prev_left(&self, position: Option<Handle>) -> Option<Handle> {
        self.left.predecessor(&self.records, position)
    }

    pub(crate) fn next_right(&self, handle: Handle) -> Option<Handle> {
        Treap::<RightSide>::successor(&self.records, handle)
    }

    pub(crate) fn prev_right(&self, position: Option<Handle>) -> Option<Handle> {
        self.right.predecessor(&self.records, position)
    }

    /// Empties the store, returning the pairs in left-key order.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(L, R)> {
        let mut handles = Vec::with_capacity(self.len);
        let mut current = self.first_left();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.next_left(handle);
        }

        let mut pairs = Vec::with_capacity(handles.len());
        for handle in handles {
            pairs.push(self.records.take(handle).into_pair());
        }

        self.records.clear();
        self.left.clear();
        self.right.clear();
        self.len = 0;
        pairs
    }
}

impl<L: Ord, R: Ord> RawBimap<L, R> {
    pub(crate) fn find_left<Q>(&self, key: &Q) -> Option<Handle>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.left.find(&self.records, key)
    }

    pub(crate) fn find_right<Q>(&self, key: &Q) -> Option<Handle>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.right.find(&self.records, key)
    }

    pub(crate) fn lower_bound_left<Q>(&self, key: &Q) -> Option<Handle>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.left.lower_bound(&self.records, key)
    }

    pub(crate) fn upper_bound_left<Q>(&self, key: &Q) -> Option<Handle>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.left.upper_bound(&self.records, key)
    }

    pub(crate) fn lower_bound_right<Q>(&self, key: &Q) -> Option<Handle>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.right.lower_bound(&self.records, key)
    }

    pub(crate) fn upper_bound_right<Q>(&self, key: &Q) -> Option<Handle>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.right.upper_bound(&self.records, key)
    }

    /// Inserts `(left, right)` unless either key is already present; `None`
    /// signals the rejected, mutation-free case.
    pub(crate) fn insert(&mut self, left: L, right: R) -> Option<Handle> {
        if self.find_left(&left).is_some() || self.find_right(&right).is_some() {
            return None;
        }
        Some(self.insert_unchecked(left, right))
    }

    /// Inserts without the duplicate pre-check. The caller guarantees both
    /// keys are absent, which makes both tree insertions infallible and the
    /// whole linkage one logical action.
    pub(crate) fn insert_unchecked(&mut self, left: L, right: R) -> Handle {
        let record = PairRecord::new(left, right, self.rng.next_u32(), self.rng.next_u32());
        let handle = self.records.alloc(record);
        self.right.insert(&mut self.records, handle);
        self.left.insert(&mut self.records, handle);
        self.len += 1;
        handle
    }

    /// Unlinks the pair from both trees and frees its record, returning the
    /// in-order successor on the *left* tree plus the owned pair.
    pub(crate) fn erase_via_left(&mut self, target: Handle) -> (Option<Handle>, (L, R)) {
        let successor = self.left.erase(&mut self.records, target);
        let _ = self.right.erase(&mut self.records, target);
        self.len -= 1;
        (successor, self.records.take(target).into_pair())
    }

    /// Mirror of [`RawBimap::erase_via_left`], returning the successor on
    /// the *right* tree.
    pub(crate) fn erase_via_right(&mut self, target: Handle) -> (Option<Handle>, (L, R)) {
        let successor = self.right.erase(&mut self.records, target);
        let _ = self.left.erase(&mut self.records, target);
        self.len -= 1;
        (successor, self.records.take(target).into_pair())
    }

    pub(crate) fn remove_by_left<Q>(&mut self, key: &Q) -> Option<(L, R)>
    where
        L: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.find_left(key)?;
        Some(self.erase_via_left(target).1)
    }

    pub(crate) fn remove_by_right<Q>(&mut self, key: &Q) -> Option<(L, R)>
    where
        R: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.find_right(key)?;
        Some(self.erase_via_right(target).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::node::Side;
    use alloc::format;
    use alloc::string::String;
    use proptest::prelude::*;

    impl<L: Ord, R: Ord> RawBimap<L, R> {
        /// Walks both trees and panics on any violated structural invariant:
        /// treeness, key order, the priority heap, and the requirement that
        /// both trees hold exactly the same `len` records.
        pub(crate) fn validate_invariants(&self) {
            let left_count = self.validate_side::<LeftSide>(self.left.root());
            let right_count = self.validate_side::<RightSide>(self.right.root());
            assert_eq!(left_count, self.len, "left tree node count disagrees with len");
            assert_eq!(right_count, self.len, "right tree node count disagrees with len");

            // Bijection: walking the left tree must visit exactly the records
            // the right tree holds.
            let mut via_left: Vec<Handle> = Vec::new();
            let mut current = self.first_left();
            while let Some(handle) = current {
                via_left.push(handle);
                current = self.next_left(handle);
            }
            let mut via_right: Vec<Handle> = Vec::new();
            let mut current = self.first_right();
            while let Some(handle) = current {
                via_right.push(handle);
                current = self.next_right(handle);
            }
            via_left.sort_by_key(|h| h.to_index());
            via_right.sort_by_key(|h| h.to_index());
            assert_eq!(via_left, via_right, "left and right trees hold different records");
        }

        fn validate_side<S>(&self, root: Option<Handle>) -> usize
        where
            S: Side<L, R>,
            S::Key: Ord,
        {
            let Some(root) = root else { return 0 };
            assert_eq!(S::node(self.records.get(root)).parent(), None, "root has a parent");
            self.validate_subtree::<S>(root)
        }

        fn validate_subtree<S>(&self, handle: Handle) -> usize
        where
            S: Side<L, R>,
            S::Key: Ord,
        {
            let node = S::node(self.records.get(handle));
            let mut count = 1;

            for (child, is_left) in [(node.left(), true), (node.right(), false)] {
                let Some(child) = child else { continue };
                let child_node = S::node(self.records.get(child));
                assert_eq!(child_node.parent(), Some(handle), "child parent link is wrong");
                assert!(
                    child_node.priority() <= node.priority(),
                    "heap order violated between parent and child"
                );
                let ordered = if is_left {
                    S::key(self.records.get(child)) < S::key(self.records.get(handle))
                } else {
                    S::key(self.records.get(handle)) < S::key(self.records.get(child))
                };
                assert!(ordered, "key order violated between parent and child");
                count += self.validate_subtree::<S>(child);
            }

            count
        }
    }

    fn collect_left(raw: &RawBimap<i32, String>) -> Vec<(i32, String)> {
        let mut pairs = Vec::new();
        let mut current = raw.first_left();
        while let Some(handle) = current {
            pairs.push((*raw.left_key(handle), raw.right_key(handle).clone()));
            current = raw.next_left(handle);
        }
        pairs
    }

    #[test]
    fn insert_links_both_trees() {
        let mut raw: RawBimap<i32, String> = RawBimap::new();
        for (l, r) in [(3, "c"), (1, "a"), (2, "b")] {
            assert!(raw.insert(l, String::from(r)).is_some());
        }
        raw.validate_invariants();

        assert_eq!(collect_left(&raw), [
            (1, String::from("a")),
            (2, String::from("b")),
            (3, String::from("c"))
        ]);

        // Right-tree order is independent of left-tree order.
        let mut rights = Vec::new();
        let mut current = raw.first_right();
        while let Some(handle) = current {
            rights.push(raw.right_key(handle).clone());
            current = raw.next_right(handle);
        }
        assert_eq!(rights, ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_on_either_side_is_rejected_without_mutation() {
        let mut raw: RawBimap<i32, String> = RawBimap::new();
        raw.insert(1, String::from("one"));

        assert!(raw.insert(1, String::from("uno")).is_none());
        assert!(raw.insert(2, String::from("one")).is_none());
        assert_eq!(raw.len(), 1);
        raw.validate_invariants();
        assert!(raw.find_left(&2).is_none());
        assert!(raw.find_right("uno").is_none());
    }

    #[test]
    fn erase_returns_the_in_order_successor() {
        let mut raw: RawBimap<i32, String> = RawBimap::new();
        for l in [5, 1, 3, 4, 2] {
            raw.insert(l, format!("v{l}"));
        }

        let target = raw.find_left(&3).unwrap();
        let (successor, pair) = raw.erase_via_left(target);
        assert_eq!(pair, (3, String::from("v3")));
        assert_eq!(*raw.left_key(successor.unwrap()), 4);
        assert_eq!(raw.len(), 4);
        raw.validate_invariants();

        // Erasing the largest element yields the end position.
        let target = raw.find_left(&5).unwrap();
        let (successor, _) = raw.erase_via_left(target);
        assert_eq!(successor, None);
        raw.validate_invariants();
    }

    proptest! {
        /// Random insert/remove interleavings must preserve every structural
        /// invariant and agree with a naive sorted model.
        #[test]
        fn random_ops_preserve_invariants(ops in prop::collection::vec((0i32..64, 0i32..64, any::<bool>()), 0..256)) {
            let mut raw: RawBimap<i32, String> = RawBimap::new();
            let mut model: Vec<(i32, String)> = Vec::new();

            for (l, r, remove) in ops {
                let r = format!("r{r}");
                if remove {
                    let removed = raw.remove_by_left(&l);
                    let index = model.iter().position(|(ml, _)| *ml == l);
                    prop_assert_eq!(removed.is_some(), index.is_some());
                    if let Some(index) = index {
                        model.remove(index);
                    }
                } else {
                    let inserted = raw.insert(l, r.clone());
                    let collides = model.iter().any(|(ml, mr)| *ml == l || *mr == r);
                    prop_assert_eq!(inserted.is_some(), !collides);
                    if !collides {
                        model.push((l, r));
                    }
                }

                raw.validate_invariants();
                prop_assert_eq!(raw.len(), model.len());
            }

            model.sort();
            prop_assert_eq!(collect_left(&raw), model);
        }
    }
}
