//! `SortedVec` construction and validation.

use mergesort::{SortedVec, VerifyError};

#[test]
fn new_sorts_input() {
    let sorted = SortedVec::new(vec![38, 27, 43, 3, 9, 82, 10]);
    assert_eq!(sorted.as_slice(), &[3, 9, 10, 27, 38, 43, 82]);
}

#[test]
fn from_vec_sorts() {
    let sorted: SortedVec<i32> = vec![2, 1].into();
    assert_eq!(sorted.into_inner(), vec![1, 2]);
}

#[test]
fn from_sorted_reports_first_descent() {
    let err = SortedVec::from_sorted(vec![1, 2, 3, 2, 1]).unwrap_err();
    assert_eq!(err, VerifyError::Unsorted { position: 3 });
}

#[test]
fn deref_exposes_slice_methods() {
    let sorted = SortedVec::new(vec![9, 1, 5]);
    assert_eq!(sorted.first(), Some(&1));
    assert_eq!(sorted.last(), Some(&9));
    assert!(sorted.binary_search(&5).is_ok());
}

#[test]
fn error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(VerifyError::Unsorted { position: 1 });
    assert_eq!(err.to_string(), "sequence not sorted at position 1");
}
