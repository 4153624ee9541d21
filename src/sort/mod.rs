//! # Sorting Strategies
//!
//! The experiment engine sorts through the [`IntSorter`] capability and
//! never looks at which implementation it holds. Any conforming sorter must:
//!
//! - leave the slice in non-decreasing order
//! - only permute the values (no creation, loss or resize)
//! - keep no state between calls
//!
//! The reference strategies are thin wrappers over the functions in [`code`].

pub mod code;
#[cfg(test)]
mod test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SortError;

/// Capability that sorts an `i32` slice ascending, in place.
pub trait IntSorter: Send + Sync {
    /// Short name (e.g., "quick")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    fn sort(&self, data: &mut [i32]) -> Result<(), SortError>;

    /// Check this sorter against the standard library sort.
    ///
    /// Covers empty, single-element, sorted, reversed, duplicate-heavy and
    /// seeded random non-negative inputs.
    fn verify(&self) -> Result<(), String> {
        let mut rng = StdRng::seed_from_u64(0x5eed_5027);

        let mut inputs: Vec<Vec<i32>> = vec![
            vec![],
            vec![7],
            (0..257).collect(),
            (0..257).rev().collect(),
            vec![3; 64],
        ];
        for size in [2, 17, 1000] {
            inputs.push((0..size).map(|_| rng.random_range(0..size)).collect());
        }
        inputs.push((0..500).map(|_| rng.random_range(0..8)).collect());

        for input in inputs {
            let mut expected = input.clone();
            expected.sort_unstable();

            let mut actual = input.clone();
            self.sort(&mut actual)
                .map_err(|e| format!("Sorter '{}' failed: {}", self.name(), e))?;

            if actual != expected {
                return Err(format!(
                    "Sorter '{}' produced a wrong result for an input of length {}",
                    self.name(),
                    input.len()
                ));
            }
        }

        Ok(())
    }
}

/// Check that a slice is in non-decreasing order.
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check that `candidate` holds exactly the values of `original`, in any order.
pub fn is_permutation(original: &[i32], candidate: &[i32]) -> bool {
    if original.len() != candidate.len() {
        return false;
    }
    let mut a = original.to_vec();
    let mut b = candidate.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Bubble sort strategy
pub struct BubbleSort;

impl IntSorter for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn description(&self) -> &'static str {
        "Adjacent swaps until a pass makes no change"
    }

    fn sort(&self, data: &mut [i32]) -> Result<(), SortError> {
        code::bubble_sort(data);
        Ok(())
    }
}

/// Quicksort strategy
pub struct QuickSort;

impl IntSorter for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn description(&self) -> &'static str {
        "Middle pivot with in-place Hoare partitioning"
    }

    fn sort(&self, data: &mut [i32]) -> Result<(), SortError> {
        code::quick_sort(data);
        Ok(())
    }
}

/// Merge sort strategy
pub struct MergeSort;

impl IntSorter for MergeSort {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn description(&self) -> &'static str {
        "Top-down stable merge sort with one auxiliary buffer"
    }

    fn sort(&self, data: &mut [i32]) -> Result<(), SortError> {
        code::merge_sort(data);
        Ok(())
    }
}

/// Counting sort strategy, non-negative inputs only
pub struct CountingSort;

impl IntSorter for CountingSort {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn description(&self) -> &'static str {
        "Histogram counting sort (rejects negative values)"
    }

    fn sort(&self, data: &mut [i32]) -> Result<(), SortError> {
        code::counting_sort(data)
    }
}
