//! Disjoint Set (Union-Find) over arbitrary hashable items, token-gated.
//!
//! Items are registered once with `make_set` and mapped to dense slots. Each
//! slot stores a parent link and a rank, so the forest lives in two parallel
//! vectors instead of one signed rank-or-link array.
//!
//! # Performance
//!
//! - Parent links are `Cell<usize>`, so `find_set` compresses paths through a
//!   shared `&GhostToken` without `RefCell` bookkeeping.
//! - Union by rank keeps every tree at logarithmic depth even before
//!   compression kicks in.

use crate::error::DisjointSetError;
use crate::token::InvariantLifetime;
use crate::GhostToken;
use core::borrow::Borrow;
use core::hash::Hash;
use std::cell::Cell;
use std::collections::HashMap;

/// Result alias for disjoint-set operations.
pub type Result<T> = core::result::Result<T, DisjointSetError>;

/// A Disjoint Set (Union-Find) data structure keyed by items of type `T`.
pub struct BrandedDisjointSet<'brand, T> {
    /// Item to slot.
    slots: HashMap<T, usize>,
    /// Parent pointers. A slot that points at itself is a representative.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank; only meaningful on roots.
    rank: Vec<u8>,
    /// Number of disjoint sets currently tracked.
    sets: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand, T: Eq + Hash> BrandedDisjointSet<'brand, T> {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new disjoint set with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
            _brand: InvariantLifetime::new(),
        }
    }

    /// Registers `item` as a singleton set and returns its slot.
    ///
    /// Registering the same item twice is a caller error.
    pub fn make_set(&mut self, _token: &mut GhostToken<'brand>, item: T) -> Result<usize> {
        if self.slots.contains_key(&item) {
            return Err(DisjointSetError::AlreadyRegistered);
        }
        let id = self.parent.len();
        self.slots.insert(item, id);
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        self.sets += 1;
        Ok(id)
    }

    /// Returns the representative slot of the set containing `item`.
    ///
    /// Two items are in the same set exactly when their representatives are
    /// equal. Performs path compression as a side effect.
    pub fn find_set<Q>(&self, token: &GhostToken<'brand>, item: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id = self.slot(item)?;
        Ok(self.find_root(token, id))
    }

    /// Merges the sets containing `a` and `b` and returns the new representative.
    ///
    /// Fails if either item is unregistered, or if both already share a
    /// representative: callers are expected to check with `find_set` first.
    pub fn union<Q>(&mut self, token: &mut GhostToken<'brand>, a: &Q, b: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id_a = self.slot(a)?;
        let id_b = self.slot(b)?;
        let root_a = self.find_root(token, id_a);
        let root_b = self.find_root(token, id_b);

        if root_a == root_b {
            return Err(DisjointSetError::AlreadyJoined);
        }

        let rank_a = self.rank[root_a];
        let rank_b = self.rank[root_b];
        let root = if rank_a < rank_b {
            self.parent[root_a].set(root_b);
            root_b
        } else if rank_a > rank_b {
            self.parent[root_b].set(root_a);
            root_a
        } else {
            self.parent[root_b].set(root_a);
            self.rank[root_a] = rank_a.saturating_add(1);
            root_a
        };

        self.sets -= 1;
        Ok(root)
    }

    /// Returns `true` if `a` and `b` currently share a representative.
    pub fn same_set<Q>(&self, token: &GhostToken<'brand>, a: &Q, b: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        Ok(self.find_set(token, a)? == self.find_set(token, b)?)
    }

    /// Returns `true` if `item` has been registered.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots.contains_key(item)
    }

    /// Returns the number of registered items.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no item has been registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn slot<Q>(&self, item: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.slots
            .get(item)
            .copied()
            .ok_or(DisjointSetError::Unregistered)
    }

    fn find_root(&self, _token: &GhostToken<'brand>, id: usize) -> usize {
        // Slots handed out by `make_set` are always in bounds.
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let cell = &self.parent[curr];
            let next = cell.get();
            cell.set(root);
            curr = next;
        }

        root
    }
}

impl<'brand, T: Eq + Hash> Default for BrandedDisjointSet<'brand, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'brand, T> core::fmt::Debug for BrandedDisjointSet<'brand, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BrandedDisjointSet")
            .field("len", &self.parent.len())
            .field("sets", &self.sets)
            .finish()
    }
}

/// A wrapper around `BrandedDisjointSet` that bundles the token for convenience.
pub struct ActiveDisjointSet<'a, 'brand, T> {
    inner: &'a mut BrandedDisjointSet<'brand, T>,
    token: &'a mut GhostToken<'brand>,
}

impl<'a, 'brand, T: Eq + Hash> ActiveDisjointSet<'a, 'brand, T> {
    /// Creates a new active disjoint set.
    pub fn new(
        inner: &'a mut BrandedDisjointSet<'brand, T>,
        token: &'a mut GhostToken<'brand>,
    ) -> Self {
        Self { inner, token }
    }

    /// Registers a singleton set.
    pub fn make_set(&mut self, item: T) -> Result<usize> {
        self.inner.make_set(self.token, item)
    }

    /// Finds the representative.
    pub fn find_set<Q>(&self, item: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.find_set(self.token, item)
    }

    /// Unites two sets.
    pub fn union<Q>(&mut self, a: &Q, b: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.union(self.token, a, b)
    }

    /// Returns `true` if both items share a set.
    pub fn same_set<Q>(&self, a: &Q, b: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.same_set(self.token, a, b)
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.inner.set_count()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        GhostToken::new(|mut token| {
            let mut ds = BrandedDisjointSet::new();

            ds.make_set(&mut token, "a").unwrap();
            ds.make_set(&mut token, "b").unwrap();
            ds.make_set(&mut token, "c").unwrap();
            assert_eq!(ds.set_count(), 3);

            assert_ne!(ds.find_set(&token, "a"), ds.find_set(&token, "b"));

            ds.union(&mut token, "a", "b").unwrap();
            assert_eq!(ds.find_set(&token, "a"), ds.find_set(&token, "b"));
            assert_ne!(ds.find_set(&token, "a"), ds.find_set(&token, "c"));

            ds.union(&mut token, "b", "c").unwrap();
            assert_eq!(ds.find_set(&token, "a"), ds.find_set(&token, "c"));
            assert_eq!(ds.set_count(), 1);

            // Already united
            assert_eq!(
                ds.union(&mut token, "a", "c"),
                Err(DisjointSetError::AlreadyJoined)
            );
            assert_eq!(ds.set_count(), 1);
        });
    }

    #[test]
    fn test_duplicate_and_unregistered() {
        GhostToken::new(|mut token| {
            let mut ds = BrandedDisjointSet::new();
            ds.make_set(&mut token, 1).unwrap();

            assert_eq!(
                ds.make_set(&mut token, 1),
                Err(DisjointSetError::AlreadyRegistered)
            );
            assert_eq!(ds.len(), 1);

            assert_eq!(ds.find_set(&token, &2), Err(DisjointSetError::Unregistered));
            assert_eq!(
                ds.union(&mut token, &1, &2),
                Err(DisjointSetError::Unregistered)
            );
            assert!(!ds.contains(&2));
        });
    }

    #[test]
    fn test_union_by_rank_keeps_larger_tree_root() {
        GhostToken::new(|mut token| {
            let mut ds = BrandedDisjointSet::new();
            for i in 0..4 {
                ds.make_set(&mut token, i).unwrap();
            }

            // {0,1} has rank 1; 2 is a rank-0 singleton.
            let pair_root = ds.union(&mut token, &0, &1).unwrap();
            let merged = ds.union(&mut token, &2, &0).unwrap();
            assert_eq!(merged, pair_root);
            assert_eq!(ds.find_set(&token, &2), Ok(pair_root));
        });
    }

    #[test]
    fn test_borrowed_lookup() {
        GhostToken::new(|mut token| {
            let mut ds = BrandedDisjointSet::new();
            ds.make_set(&mut token, String::from("left")).unwrap();
            ds.make_set(&mut token, String::from("right")).unwrap();

            assert_eq!(ds.same_set(&token, "left", "right"), Ok(false));
            ds.union(&mut token, "left", "right").unwrap();
            assert_eq!(ds.same_set(&token, "left", "right"), Ok(true));
        });
    }

    #[test]
    fn test_active_disjoint_set() {
        GhostToken::new(|mut token| {
            let mut ds = BrandedDisjointSet::new();
            let mut active = ActiveDisjointSet::new(&mut ds, &mut token);

            active.make_set('a').unwrap();
            active.make_set('b').unwrap();

            active.union(&'a', &'b').unwrap();
            assert_eq!(active.find_set(&'a'), active.find_set(&'b'));
            assert_eq!(active.set_count(), 1);
            assert_eq!(active.len(), 2);
        });
    }
}
