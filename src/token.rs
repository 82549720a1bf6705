//! `GhostToken` - the capability that gates every per-query scratch structure.
//!
//! Graph queries allocate their union-find and priority queue inside a fresh
//! `GhostToken::new` scope. The `'brand` lifetime produced by that scope is
//! unnameable outside the closure, so the scratch state cannot leak out of the
//! query that created it, and two queries can never mix their structures.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Mutating a branded
//! structure requires `&mut GhostToken<'brand>`; reading requires
//! `&GhostToken<'brand>`. The borrow checker therefore rules out a read racing
//! a write inside one scope.

use core::marker::PhantomData;

/// Brand marker, invariant in `'id`.
///
/// Subtyping can neither shrink nor widen the lifetime, so structures opened
/// in different scopes never unify under one brand.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// A zero-sized token that authorizes access to branded collections.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and runs `f` with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spanpath::collections::BrandedDaryHeap;
    /// use spanpath::GhostToken;
    ///
    /// let smallest = GhostToken::new(|mut token| {
    ///     let mut heap: BrandedDaryHeap<'_, u32> = BrandedDaryHeap::new();
    ///     heap.insert(&mut token, 7).unwrap();
    ///     heap.insert(&mut token, 3).unwrap();
    ///     heap.remove_min(&mut token).unwrap()
    /// });
    /// assert_eq!(smallest, 3);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }
}

