//! Sorter registry for name-based algorithm lookup.
//!
//! The registry is an owned table built explicitly with [`build_registry`]
//! (or [`SorterRegistry::new`] plus [`SorterRegistry::register`]) and passed
//! to whatever needs to resolve names. Nothing is global.

use std::sync::Arc;

use crate::error::ExperimentError;
use crate::sort::{BubbleSort, CountingSort, IntSorter, MergeSort, QuickSort};

/// Canonical form of an algorithm name.
///
/// Trims and lowercases, then strips a trailing `sort` together with any
/// whitespace before it: `"Quick Sort"`, `"QUICKSORT"` and `"quick"` all
/// become `"quick"`.
pub fn normalize_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    match lower.strip_suffix("sort") {
        Some(stem) => stem.trim_end().to_string(),
        None => lower,
    }
}

struct Entry {
    key: String,
    sorter: Arc<dyn IntSorter>,
}

/// Table of named sorting strategies
pub struct SorterRegistry {
    entries: Vec<Entry>,
}

impl SorterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a sorter under `name`, replacing any entry with the same normalized name
    pub fn register<S: IntSorter + 'static>(&mut self, name: &str, sorter: S) {
        self.register_shared(name, Arc::new(sorter));
    }

    /// Register an already shared sorter
    pub fn register_shared(&mut self, name: &str, sorter: Arc<dyn IntSorter>) {
        let key = normalize_name(name);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.sorter = sorter,
            None => self.entries.push(Entry { key, sorter }),
        }
    }

    /// Resolve a name to a shareable sorter.
    ///
    /// # Errors
    /// [`ExperimentError::UnknownAlgorithm`] carrying the normalized name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn IntSorter>, ExperimentError> {
        let key = normalize_name(name);
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| Arc::clone(&e.sorter))
            .ok_or(ExperimentError::UnknownAlgorithm(key))
    }

    /// Find sorter by name
    pub fn find(&self, name: &str) -> Option<&dyn IntSorter> {
        let key = normalize_name(name);
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.sorter.as_ref())
    }

    /// Registered names, in registration order
    pub fn list_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    /// Get all registered sorters with their names
    pub fn all(&self) -> impl Iterator<Item = (&str, &dyn IntSorter)> {
        self.entries
            .iter()
            .map(|e| (e.key.as_str(), e.sorter.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SorterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh registry with the reference sorters
pub fn build_registry() -> SorterRegistry {
    let mut registry = SorterRegistry::new();

    registry.register("bubble", BubbleSort);
    registry.register("quick", QuickSort);
    registry.register("merge", MergeSort);
    registry.register("counting", CountingSort);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    struct StdSort;

    impl IntSorter for StdSort {
        fn name(&self) -> &'static str {
            "std"
        }
        fn description(&self) -> &'static str {
            "Standard library unstable sort"
        }
        fn sort(&self, data: &mut [i32]) -> Result<(), SortError> {
            data.sort_unstable();
            Ok(())
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("quick"), "quick");
        assert_eq!(normalize_name("Quick Sort"), "quick");
        assert_eq!(normalize_name("QUICKSORT"), "quick");
        assert_eq!(normalize_name("  MergeSort "), "merge");
        assert_eq!(normalize_name("counting\tsort"), "counting");
        assert_eq!(normalize_name("sortable"), "sortable");
    }

    #[test]
    fn test_resolve_variants_of_a_name() {
        let registry = build_registry();
        for name in ["quick", "Quick Sort", "QUICKSORT", "quicksort"] {
            let sorter = registry.resolve(name).unwrap();
            assert_eq!(sorter.name(), "quick", "{}", name);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let registry = build_registry();
        match registry.resolve("bogosort") {
            Err(ExperimentError::UnknownAlgorithm(name)) => assert_eq!(name, "bogo"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("bogosort should not resolve"),
        }
        assert!(registry.find("bogosort").is_none());
    }

    #[test]
    fn test_default_names() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), vec!["bubble", "quick", "merge", "counting"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_register_custom_and_replace() {
        let mut registry = SorterRegistry::new();
        assert!(registry.is_empty());

        registry.register("Std Sort", StdSort);
        assert_eq!(registry.list_names(), vec!["std"]);
        assert_eq!(registry.resolve("std").unwrap().name(), "std");

        registry.register("STD", QuickSort);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("std").unwrap().name(), "quick");
    }

    #[test]
    fn test_registries_are_independent() {
        let mut a = build_registry();
        let b = build_registry();
        a.register("std", StdSort);
        assert!(a.find("std").is_some());
        assert!(b.find("std").is_none());
    }
}
