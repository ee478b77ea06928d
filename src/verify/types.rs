// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make unsorted states unrepresentable.
//!
//! Wrap a vector in [`SortedVec`] and its order is checked (or established)
//! once at construction and guaranteed forever after.
//!
//! # Example
//!
//! ```
//! use mergesort::verify::{SortedVec, VerifyError};
//!
//! let sorted = SortedVec::new(vec![3, 1, 2]);
//! assert_eq!(sorted.as_slice(), &[1, 2, 3]);
//!
//! let err = SortedVec::from_sorted(vec![1, 3, 2]).unwrap_err();
//! assert_eq!(err, VerifyError::Unsorted { position: 2 });
//! ```

use std::fmt;
use std::ops::Deref;

use super::first_unsorted;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// `seq[position - 1] > seq[position]`.
    Unsorted { position: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Unsorted { position } => {
                write!(f, "sequence not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// A vector whose elements are ascending.
///
/// # Invariants (enforced at construction)
/// - `v[i] <= v[i + 1]` for every adjacent pair
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortedVec<T> {
    inner: Vec<T>,
}

impl<T: Ord + Clone> SortedVec<T> {
    /// Take ownership of `values` and merge sort them.
    pub fn new(mut values: Vec<T>) -> Self {
        crate::sort(&mut values);
        Self { inner: values }
    }

    /// Wrap `values` if they are already ascending.
    pub fn from_sorted(values: Vec<T>) -> Result<Self, VerifyError> {
        match first_unsorted(&values) {
            Some(position) => Err(VerifyError::Unsorted { position }),
            None => Ok(Self { inner: values }),
        }
    }
}

impl<T> SortedVec<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn into_inner(self) -> Vec<T> {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.inner
    }
}

impl<T: Ord + Clone> From<Vec<T>> for SortedVec<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}
