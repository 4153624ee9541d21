//! Counting sort for non-negative integers.

use crate::error::SortError;

/// Stable counting sort.
///
/// Allocates a histogram of `max + 1` counters, so it only accepts
/// non-negative values.
///
/// # Errors
/// [`SortError::NegativeValue`] with the smallest value when the input
/// contains a negative number. The slice is left untouched in that case.
pub fn counting_sort(a: &mut [i32]) -> Result<(), SortError> {
    let Some(&max) = a.iter().max() else {
        return Ok(());
    };
    if let Some(&min) = a.iter().min().filter(|&&m| m < 0) {
        return Err(SortError::NegativeValue(min));
    }

    let mut counts = vec![0usize; max as usize + 1];
    for &v in a.iter() {
        counts[v as usize] += 1;
    }

    // Prefix sums: counts[v] becomes the end position of value v
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output = vec![0i32; a.len()];
    for &v in a.iter().rev() {
        let slot = &mut counts[v as usize];
        *slot -= 1;
        output[*slot] = v;
    }

    a.copy_from_slice(&output);
    Ok(())
}
