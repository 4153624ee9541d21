//! Bubble sort.

/// Sort with repeated adjacent swaps, stopping after the first pass with no swap.
///
/// # Example
/// ```
/// use power_sort::sort::code::bubble_sort;
///
/// let mut a = [4, 3, 2, 1, 0];
/// bubble_sort(&mut a);
/// assert_eq!(a, [0, 1, 2, 3, 4]);
/// ```
pub fn bubble_sort(a: &mut [i32]) {
    let mut swapped = true;

    while swapped {
        swapped = false;
        for j in 1..a.len() {
            if a[j - 1] > a[j] {
                a.swap(j - 1, j);
                swapped = true;
            }
        }
    }
}
