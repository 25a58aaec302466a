//! Index lookups over slices.

use std::cmp::Ordering;

/// Index of the first element equal to `target`. Works on unsorted input.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|item| item == target)
}

/// Halving search over an ascending slice. With duplicates, any matching
/// index may be returned.
pub fn binary_search<T: PartialOrd>(arr: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = arr.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].partial_cmp(target)? {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }

    None
}
