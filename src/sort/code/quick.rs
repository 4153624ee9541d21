//! Quicksort with middle-element pivot and Hoare-style partitioning.

/// Sort in place by recursive partitioning around the middle element.
///
/// Recursion only descends into the smaller partition, the larger one is
/// handled by the loop, so stack depth stays logarithmic.
pub fn quick_sort(a: &mut [i32]) {
    let mut rest: &mut [i32] = a;

    while rest.len() > 1 {
        let current = std::mem::take(&mut rest);
        let (left_end, right_start) = partition(current);
        let (left, right) = current.split_at_mut(right_start);
        let left = &mut left[..left_end];

        if left.len() < right.len() {
            quick_sort(left);
            rest = right;
        } else {
            quick_sort(right);
            rest = left;
        }
    }
}

/// Partition `a` (length >= 2) around its middle element.
///
/// Returns `(left_end, right_start)` such that `a[..left_end]` holds values
/// `<= pivot`, `a[right_start..]` holds values `>= pivot`, and anything in
/// between already equals the pivot.
fn partition(a: &mut [i32]) -> (usize, usize) {
    let pivot = a[(a.len() - 1) / 2];
    let mut i: isize = 0;
    let mut j: isize = a.len() as isize - 1;

    while i <= j {
        while a[i as usize] < pivot {
            i += 1;
        }
        while a[j as usize] > pivot {
            j -= 1;
        }
        if i <= j {
            a.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    // Loop exit guarantees j < i, both within [-1, len]
    ((j + 1) as usize, i as usize)
}
