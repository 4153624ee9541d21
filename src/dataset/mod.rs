//! # Dataset Generation
//!
//! Builds the integer array sorted by every run of an experiment. The
//! arrangement is selected by an [`OrderingMode`]:
//!
//! - `Sorted`: `0, 1, ..., n-1`
//! - `Reverse`: `n-1, ..., 1, 0`
//! - `Random1`/`Random2`/`Random3`: `n` draws in `[0, n)` from a
//!   [`JavaLcg`] seeded with 13, 51 and 97
//!
//! Every mode is deterministic, so two experiments with the same
//! `(mode, size)` sort bit-identical inputs.

#[cfg(test)]
mod test;

use std::fmt;
use std::str::FromStr;

use crate::error::ExperimentError;
use crate::random::JavaLcg;

/// Largest size whose values `[0, size)` all fit in an `i32`.
pub const MAX_DATASET_SIZE: usize = i32::MAX as usize;

/// Initial arrangement of a generated dataset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OrderingMode {
    /// Increasing from 0 to size-1
    Sorted,
    /// Decreasing from size-1 to 0
    Reverse,
    /// Random values, seed 13
    #[default]
    Random1,
    /// Random values, seed 51
    Random2,
    /// Random values, seed 97
    Random3,
}

impl OrderingMode {
    /// All modes in index order.
    pub const ALL: [OrderingMode; 5] = [
        OrderingMode::Sorted,
        OrderingMode::Reverse,
        OrderingMode::Random1,
        OrderingMode::Random2,
        OrderingMode::Random3,
    ];

    /// Look up a mode by its position in [`OrderingMode::ALL`].
    pub fn from_index(index: usize) -> Result<Self, ExperimentError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ExperimentError::InvalidOrderingIndex {
                index,
                max: Self::ALL.len() - 1,
            })
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Seed of the pseudo-random modes, `None` for the deterministic ones.
    pub fn seed(self) -> Option<u64> {
        match self {
            OrderingMode::Sorted | OrderingMode::Reverse => None,
            OrderingMode::Random1 => Some(13),
            OrderingMode::Random2 => Some(51),
            OrderingMode::Random3 => Some(97),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OrderingMode::Sorted => "sorted",
            OrderingMode::Reverse => "reverse",
            OrderingMode::Random1 => "random1",
            OrderingMode::Random2 => "random2",
            OrderingMode::Random3 => "random3",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

impl FromStr for OrderingMode {
    type Err = ExperimentError;

    /// Accepts a mode name (`"reverse"`, `"Random2"`, `"random-b"`) or its index (`"1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Ok(index) = key.parse::<usize>() {
            return Self::from_index(index);
        }
        match key.as_str() {
            "sorted" => Ok(OrderingMode::Sorted),
            "reverse" => Ok(OrderingMode::Reverse),
            "random1" | "random-a" => Ok(OrderingMode::Random1),
            "random2" | "random-b" => Ok(OrderingMode::Random2),
            "random3" | "random-c" => Ok(OrderingMode::Random3),
            _ => Err(ExperimentError::UnknownOrderingMode(s.to_string())),
        }
    }
}

impl serde::Serialize for OrderingMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for OrderingMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Immutable input array of an experiment.
///
/// There is no mutable accessor: runs sort copies made by [`Dataset::replicate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    values: Box<[i32]>,
    mode: OrderingMode,
}

impl Dataset {
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mode(&self) -> OrderingMode {
        self.mode
    }

    /// Fresh private copy for one run.
    pub fn replicate(&self) -> Vec<i32> {
        self.values.to_vec()
    }
}

/// Generate the dataset for `(mode, size)`.
///
/// # Errors
/// [`ExperimentError::DatasetTooLarge`] when `size` exceeds [`MAX_DATASET_SIZE`].
///
/// # Example
/// ```
/// use power_sort::dataset::{generate, OrderingMode};
///
/// let data = generate(OrderingMode::Reverse, 4).unwrap();
/// assert_eq!(data.as_slice(), &[3, 2, 1, 0]);
/// ```
pub fn generate(mode: OrderingMode, size: usize) -> Result<Dataset, ExperimentError> {
    if size > MAX_DATASET_SIZE {
        return Err(ExperimentError::DatasetTooLarge {
            size,
            max: MAX_DATASET_SIZE,
        });
    }
    // Fits: checked above
    let bound = size as i32;

    let values: Vec<i32> = match mode {
        OrderingMode::Sorted => (0..bound).collect(),
        OrderingMode::Reverse => (0..bound).rev().collect(),
        OrderingMode::Random1 | OrderingMode::Random2 | OrderingMode::Random3 => {
            let seed = mode.seed().unwrap_or_default();
            let mut rng = JavaLcg::new(seed);
            // Draw order is element order; `next_int` only fails for bound <= 0,
            // which cannot happen inside this loop
            (0..size)
                .map(|_| rng.next_int(bound).unwrap_or(0))
                .collect()
        }
    };

    Ok(Dataset {
        values: values.into_boxed_slice(),
        mode,
    })
}
