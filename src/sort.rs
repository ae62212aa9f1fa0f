//! In place comparison sorts over a [BidStore], keyed by bid title.
//!
//! Titles are compared byte wise, so the order is case sensitive and uppercase letters sort
//! before lowercase ones. Neither sort is stable.

use anyhow::anyhow;

use crate::store::BidStore;

/// Sort the store by title using selection sort.
///
/// Performs Θ(n²) comparisons whatever the input order and at most `n - 1` exchanges.
/// Returns the number of exchanges performed.
///
/// # Examples
/// ```
/// use bid_sort::bid::Bid;
/// use bid_sort::sort::selection_sort;
/// use bid_sort::store::BidStore;
///
/// let mut store = BidStore::from(vec![
///     Bid::new("1", "Wrench", "General", 1.0),
///     Bid::new("2", "Drill", "General", 2.0),
/// ]);
/// assert_eq!(selection_sort(&mut store), 1);
/// assert_eq!(store.titles(), vec!["Drill", "Wrench"]);
/// ```
pub fn selection_sort(store: &mut BidStore) -> usize {
    let size = store.len();
    let mut swaps = 0;
    if size < 2 {
        return swaps;
    }

    for i in 0..size - 1 {
        let mut min = i;
        for j in i + 1..size {
            if store.title(j) < store.title(min) {
                min = j;
            }
        }
        if min != i {
            store.swap(i, min);
            swaps += 1;
        }
    }
    swaps
}

/// Hoare partition of the inclusive range `[begin, end]`.
///
/// The pivot is the title found at the middle index when the call starts. Returns the
/// boundary `p` such that every title in `[begin, p]` is less than or equal to every title in
/// `[p + 1, end]`. Requires `begin < end < store.len()`, in which case `begin <= p < end`.
///
/// # Panics
/// Panics if `end` is out of bounds. [quick_sort] checks the range before partitioning.
pub fn partition(store: &mut BidStore, begin: usize, end: usize) -> usize {
    let pivot = store.title(begin + (end - begin) / 2).to_string();
    let mut i = begin;
    let mut j = end;
    loop {
        while store.title(i) < pivot.as_str() {
            i += 1;
        }
        while store.title(j) > pivot.as_str() {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        store.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Sort the inclusive range `[begin, end]` of the store by title using quicksort.
///
/// A range with `begin >= end` is already sorted and is left untouched, even when it lies
/// outside the store. Any other range must end inside the store.
///
/// Pending ranges are kept on an explicit stack rather than the call stack. The smaller side
/// of each partition is sorted first, so the stack never holds more than `log2(n)` ranges.
pub fn quick_sort(store: &mut BidStore, begin: usize, end: usize) -> Result<(), anyhow::Error> {
    if begin >= end {
        return Ok(());
    }

    if end >= store.len() {
        return Err(
            anyhow!(
                "Requested quick sort of range [{}, {}] but the store holds only {} bids",
                begin,
                end,
                store.len(),
            )
        );
    }

    let mut pending = vec![(begin, end)];
    while let Some((mut low, mut high)) = pending.pop() {
        while low < high {
            let boundary = partition(store, low, high);
            // the left range keeps the boundary
            if boundary - low + 1 < high - boundary {
                pending.push((boundary + 1, high));
                high = boundary;
            } else {
                pending.push((low, boundary));
                low = boundary + 1;
            }
        }
    }
    Ok(())
}

/// Sort the whole store by title using quicksort.
pub fn quick_sort_all(store: &mut BidStore) {
    if store.len() > 1 {
        let end = store.len() - 1;
        // the range is inside the store by construction
        if let Err(e) = quick_sort(store, 0, end) {
            log::error!("{}", e);
        }
    }
}
