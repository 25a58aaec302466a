//! In-place comparison sorts, ascending.
//!
//! All three are quadratic. [`insertion_sort`] and [`bubble_sort`] are
//! stable; [`selection_sort`] is not.

/// Grows a sorted prefix by shifting each new element left past every
/// larger one. O(n) on already sorted input.
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Swaps the minimum of the unsorted suffix into place on each pass.
pub fn selection_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        arr.swap(i, min_index);
    }
}

/// Bubbles the largest remaining element to the end on each pass and stops
/// early once a pass makes no swaps.
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
