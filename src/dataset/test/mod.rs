use super::*;

#[test]
fn test_sorted_is_identity() {
    let data = generate(OrderingMode::Sorted, 5).unwrap();
    assert_eq!(data.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_reverse_is_descending() {
    let data = generate(OrderingMode::Reverse, 5).unwrap();
    assert_eq!(data.as_slice(), &[4, 3, 2, 1, 0]);

    let n = 1000;
    let data = generate(OrderingMode::Reverse, n).unwrap();
    for (i, &v) in data.as_slice().iter().enumerate() {
        assert_eq!(v as usize, n - 1 - i);
    }
}

#[test]
fn test_empty_dataset() {
    for mode in OrderingMode::ALL {
        let data = generate(mode, 0).unwrap();
        assert!(data.is_empty(), "{} should be empty", mode);
    }
}

#[test]
fn test_random_matches_reference_sequences() {
    let data = generate(OrderingMode::Random1, 10).unwrap();
    assert_eq!(data.as_slice(), &[2, 0, 5, 8, 3, 0, 3, 3, 6, 4]);

    let data = generate(OrderingMode::Random2, 10).unwrap();
    assert_eq!(data.as_slice(), &[3, 6, 2, 8, 0, 2, 9, 5, 8, 1]);

    let data = generate(OrderingMode::Random3, 16).unwrap();
    assert_eq!(&data.as_slice()[..6], &[11, 14, 10, 5, 15, 13]);
}

#[test]
fn test_random_is_deterministic() {
    for mode in [
        OrderingMode::Random1,
        OrderingMode::Random2,
        OrderingMode::Random3,
    ] {
        let a = generate(mode, 100).unwrap();
        let b = generate(mode, 100).unwrap();
        assert_eq!(a, b, "{} should be reproducible", mode);
    }
}

#[test]
fn test_random_values_are_in_range() {
    let data = generate(OrderingMode::Random2, 5000).unwrap();
    assert_eq!(data.len(), 5000);
    assert!(data.as_slice().iter().all(|&v| (0..5000).contains(&v)));
}

#[test]
fn test_random_modes_differ() {
    let a = generate(OrderingMode::Random1, 64).unwrap();
    let b = generate(OrderingMode::Random2, 64).unwrap();
    let c = generate(OrderingMode::Random3, 64).unwrap();
    assert_ne!(a.as_slice(), b.as_slice());
    assert_ne!(b.as_slice(), c.as_slice());
}

#[test]
fn test_oversized_dataset_is_rejected() {
    let err = generate(OrderingMode::Sorted, MAX_DATASET_SIZE + 1).unwrap_err();
    assert!(matches!(err, ExperimentError::DatasetTooLarge { .. }));
}

#[test]
fn test_replicate_is_independent_copy() {
    let data = generate(OrderingMode::Sorted, 3).unwrap();
    let mut copy = data.replicate();
    copy[0] = 42;
    assert_eq!(data.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_mode_from_index() {
    for (i, mode) in OrderingMode::ALL.iter().enumerate() {
        assert_eq!(OrderingMode::from_index(i).unwrap(), *mode);
        assert_eq!(mode.index(), i);
    }
    let err = OrderingMode::from_index(5).unwrap_err();
    assert!(matches!(
        err,
        ExperimentError::InvalidOrderingIndex { index: 5, max: 4 }
    ));
}

#[test]
fn test_mode_from_str() {
    assert_eq!("sorted".parse::<OrderingMode>().unwrap(), OrderingMode::Sorted);
    assert_eq!(" Reverse ".parse::<OrderingMode>().unwrap(), OrderingMode::Reverse);
    assert_eq!("RANDOM2".parse::<OrderingMode>().unwrap(), OrderingMode::Random2);
    assert_eq!("random-c".parse::<OrderingMode>().unwrap(), OrderingMode::Random3);
    assert_eq!("2".parse::<OrderingMode>().unwrap(), OrderingMode::Random1);
    assert!("shuffled".parse::<OrderingMode>().is_err());
    assert!("9".parse::<OrderingMode>().is_err());
}

#[test]
fn test_mode_display() {
    assert_eq!(OrderingMode::Random1.to_string(), "RANDOM1");
    assert_eq!(OrderingMode::Sorted.to_string(), "SORTED");
}
