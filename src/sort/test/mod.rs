use super::code::*;
use super::*;
use crate::error::SortError;

fn reference_sorters() -> Vec<Box<dyn IntSorter>> {
    vec![
        Box::new(BubbleSort),
        Box::new(QuickSort),
        Box::new(MergeSort),
        Box::new(CountingSort),
    ]
}

#[test]
fn test_reverse_five_becomes_ascending() {
    for sorter in reference_sorters() {
        let mut a = [4, 3, 2, 1, 0];
        sorter.sort(&mut a).unwrap();
        assert_eq!(a, [0, 1, 2, 3, 4], "{}", sorter.name());
    }
}

#[test]
fn test_empty_and_single() {
    for sorter in reference_sorters() {
        let mut empty: [i32; 0] = [];
        sorter.sort(&mut empty).unwrap();

        let mut one = [9];
        sorter.sort(&mut one).unwrap();
        assert_eq!(one, [9], "{}", sorter.name());
    }
}

#[test]
fn test_duplicates_are_kept() {
    let input = [5, 1, 5, 0, 1, 5, 0, 2];
    for sorter in reference_sorters() {
        let mut a = input;
        sorter.sort(&mut a).unwrap();
        assert_eq!(a, [0, 0, 1, 1, 2, 5, 5, 5], "{}", sorter.name());
    }
}

#[test]
fn test_quick_sort_handles_negative_and_extreme_values() {
    let mut a = [i32::MAX, -3, 0, i32::MIN, 7, -3];
    quick_sort(&mut a);
    assert_eq!(a, [i32::MIN, -3, -3, 0, 7, i32::MAX]);
}

#[test]
fn test_merge_sort_handles_negative_values() {
    let mut a = [2, -1, -8, 4, 0];
    merge_sort(&mut a);
    assert_eq!(a, [-8, -1, 0, 2, 4]);
}

#[test]
fn test_quick_sort_on_sorted_input() {
    let mut a: Vec<i32> = (0..10_000).collect();
    quick_sort(&mut a);
    assert!(is_sorted(&a));
}

#[test]
fn test_counting_sort_rejects_negative_values() {
    let mut a = [3, -2, 1, -5];
    let err = counting_sort(&mut a).unwrap_err();
    assert_eq!(err, SortError::NegativeValue(-5));
    assert_eq!(a, [3, -2, 1, -5], "input must be left untouched");
}

#[test]
fn test_counting_sort_all_zero() {
    let mut a = [0; 10];
    counting_sort(&mut a).unwrap();
    assert_eq!(a, [0; 10]);
}

#[test]
fn test_reference_sorters_verify() {
    for sorter in reference_sorters() {
        if let Err(e) = sorter.verify() {
            panic!("{}", e);
        }
    }
}

#[test]
fn test_verify_catches_broken_sorter() {
    struct Identity;

    impl IntSorter for Identity {
        fn name(&self) -> &'static str {
            "identity"
        }
        fn description(&self) -> &'static str {
            "Leaves the input as is"
        }
        fn sort(&self, _data: &mut [i32]) -> Result<(), SortError> {
            Ok(())
        }
    }

    let err = Identity.verify().unwrap_err();
    assert!(err.contains("identity"));
}

#[test]
fn test_is_sorted() {
    assert!(is_sorted(&[]));
    assert!(is_sorted(&[1]));
    assert!(is_sorted(&[1, 1, 2, 3]));
    assert!(!is_sorted(&[1, 3, 2]));
}

#[test]
fn test_is_permutation() {
    assert!(is_permutation(&[3, 1, 2], &[1, 2, 3]));
    assert!(!is_permutation(&[3, 1, 2], &[1, 2, 2]));
    assert!(!is_permutation(&[1, 2], &[1, 2, 3]));
}
