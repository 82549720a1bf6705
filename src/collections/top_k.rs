//! Bounded selection of the `k` largest items.

use super::dary_heap::{ActiveDaryHeap, BrandedDaryHeap, Result};
use crate::GhostToken;

/// Returns the `k` largest items of `input` in ascending order.
///
/// Keeps at most `k` items in a min-heap: the root is the smallest survivor,
/// and a new item only displaces it when strictly greater. If `input` holds
/// fewer than `k` items, all of them come back sorted. Pass `slice.iter()` to
/// select over borrowed items without consuming the source.
///
/// Fails only if an item cannot be ordered (see [`BrandedDaryHeap::insert`]).
///
/// ```rust
/// use spanpath::collections::top_k_sort;
///
/// let scores = [4, 9, 1, 7, 3];
/// assert_eq!(top_k_sort(3, scores.iter()).unwrap(), vec![&4, &7, &9]);
/// assert_eq!(top_k_sort(10, scores).unwrap(), vec![1, 3, 4, 7, 9]);
/// ```
pub fn top_k_sort<T, I>(k: usize, input: I) -> Result<Vec<T>>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    if k == 0 {
        return Ok(Vec::new());
    }
    let input = input.into_iter();
    let capacity = k.min(input.size_hint().0);

    GhostToken::new(|mut token| -> Result<Vec<T>> {
        let mut heap: BrandedDaryHeap<'_, T> = BrandedDaryHeap::with_capacity(capacity);
        {
            let mut active = ActiveDaryHeap::new(&mut heap, &mut token);
            for item in input {
                if active.len() < k {
                    active.insert(item)?;
                } else if *active.peek_min()? < item {
                    active.remove_min()?;
                    active.insert(item)?;
                }
            }
        }
        Ok(heap.into_sorted_vec(&mut token))
    })
}
