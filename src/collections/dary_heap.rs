//! `BrandedDaryHeap` - a min-priority queue on a d-ary heap.
//!
//! The heap is a complete `D`-ary tree stored in a `Vec`. A fan-out above two
//! halves the tree height relative to a binary heap, so `insert` (sift up)
//! touches fewer levels, while `remove_min` (sift down) pays up to `D`
//! comparisons per level. Relaxation-heavy workloads insert far more often than
//! they remove, which is the trade this layout is tuned for.
//!
//! There is no decrease-key. Callers that need it insert a fresh entry and
//! discard the superseded one when it surfaces.

use crate::error::HeapError;
use crate::token::InvariantLifetime;
use crate::GhostToken;
use core::fmt;

/// Fan-out used when none is given.
pub const DEFAULT_ARITY: usize = 4;

/// Result alias for heap operations.
pub type Result<T> = core::result::Result<T, HeapError>;

/// A min-heap with fan-out `D`, gated by a `GhostToken`.
///
/// The root is always an element that no other element compares less than.
pub struct BrandedDaryHeap<'brand, T, const D: usize = DEFAULT_ARITY> {
    data: Vec<T>,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand, T: PartialOrd, const D: usize> BrandedDaryHeap<'brand, T, D> {
    const ARITY_CHECK: () = assert!(D >= 2, "a d-ary heap needs a fan-out of at least 2");

    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY_CHECK;
        Self {
            data: Vec::with_capacity(capacity),
            _brand: InvariantLifetime::new(),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts `item`, rejecting items that cannot be ordered.
    ///
    /// An item is rejected when it does not compare equal to itself (a NaN
    /// key, for instance); the heap is left unchanged in that case.
    pub fn insert(&mut self, token: &mut GhostToken<'brand>, item: T) -> Result<()> {
        if item.partial_cmp(&item).is_none() {
            return Err(HeapError::InvalidItem);
        }
        self.data.push(item);
        self.sift_up(token, self.data.len() - 1);
        Ok(())
    }

    /// Inserts every item of `iter`, stopping at the first invalid one.
    pub fn extend<I>(&mut self, token: &mut GhostToken<'brand>, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(token, item)?;
        }
        Ok(())
    }

    /// Returns a reference to the smallest element.
    pub fn peek_min<'a>(&'a self, _token: &'a GhostToken<'brand>) -> Result<&'a T> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the smallest element.
    pub fn remove_min(&mut self, token: &mut GhostToken<'brand>) -> Result<T> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        // Moves the last element into the root slot.
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(token, 0);
        }
        Ok(min)
    }

    /// Drains the heap into a vector in ascending order.
    pub fn into_sorted_vec(mut self, token: &mut GhostToken<'brand>) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.remove_min(token) {
            out.push(item);
        }
        out
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self, _token: &mut GhostToken<'brand>) {
        self.data.clear();
    }

    #[inline]
    const fn parent_of(index: usize) -> usize {
        (index - 1) / D
    }

    #[inline]
    const fn child_of(index: usize, k: usize) -> usize {
        D * index + k + 1
    }

    fn sift_up(&mut self, _token: &mut GhostToken<'brand>, mut node: usize) {
        while node > 0 {
            let parent = Self::parent_of(node);
            if self.data[node] < self.data[parent] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, _token: &mut GhostToken<'brand>, mut node: usize) {
        let len = self.data.len();
        loop {
            let first = Self::child_of(node, 0);
            if first >= len {
                break;
            }
            let last = (first + D).min(len);
            let mut smallest = first;
            for child in first + 1..last {
                if self.data[child] < self.data[smallest] {
                    smallest = child;
                }
            }

            if self.data[smallest] < self.data[node] {
                self.data.swap(node, smallest);
                node = smallest;
            } else {
                break;
            }
        }
    }
}

impl<'brand, T, const D: usize> BrandedDaryHeap<'brand, T, D> {
    /// Iterates over all elements in the heap in arbitrary order.
    pub fn iter<'a>(&'a self, _token: &'a GhostToken<'brand>) -> core::slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<'brand, T: PartialOrd, const D: usize> Default for BrandedDaryHeap<'brand, T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'brand, T, const D: usize> fmt::Debug for BrandedDaryHeap<'brand, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandedDaryHeap")
            .field("arity", &D)
            .field("len", &self.data.len())
            .finish()
    }
}

/// A wrapper around `BrandedDaryHeap` that bundles the token for convenience.
pub struct ActiveDaryHeap<'a, 'brand, T, const D: usize = DEFAULT_ARITY> {
    heap: &'a mut BrandedDaryHeap<'brand, T, D>,
    token: &'a mut GhostToken<'brand>,
}

impl<'a, 'brand, T: PartialOrd, const D: usize> ActiveDaryHeap<'a, 'brand, T, D> {
    /// Creates a new active heap handle.
    pub fn new(heap: &'a mut BrandedDaryHeap<'brand, T, D>, token: &'a mut GhostToken<'brand>) -> Self {
        Self { heap, token }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an item.
    pub fn insert(&mut self, item: T) -> Result<()> {
        self.heap.insert(self.token, item)
    }

    /// Returns the smallest item.
    pub fn peek_min(&self) -> Result<&T> {
        self.heap.peek_min(self.token)
    }

    /// Removes the smallest item.
    pub fn remove_min(&mut self) -> Result<T> {
        self.heap.remove_min(self.token)
    }
}
