//! The three benchmarked sorting algorithms.
//!
//! Every [`Sorter`] is pure: it borrows its input and returns a new, sorted
//! `Vec`. The only mutating entry point is [`bubble_sort_in_place`], which is
//! kept for callers that want to sort a buffer they own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::BenchError;

/// A sorting algorithm that can be timed and plotted.
pub trait Sorter<T> {
    /// Name used for the chart legend and tabular output.
    fn label(&self) -> &str;

    /// Return the elements of `values` in non-decreasing order.
    fn sort(&self, values: &[T]) -> Vec<T>;
}

/// The registered algorithms, each with a fixed label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Algorithm {
    Quicksort,
    Bubblesort,
    Mergesort,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        (*self).into()
    }

    /// All algorithms in registration order.
    pub fn all() -> Vec<Algorithm> {
        use strum::IntoEnumIterator;
        Algorithm::iter().collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quicksort" | "quick" => Ok(Algorithm::Quicksort),
            "bubblesort" | "bubble" => Ok(Algorithm::Bubblesort),
            "mergesort" | "merge" => Ok(Algorithm::Mergesort),
            _ => Err(BenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = BenchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl<T: PartialOrd + Clone> Sorter<T> for Algorithm {
    fn label(&self) -> &str {
        Algorithm::label(self)
    }

    fn sort(&self, values: &[T]) -> Vec<T> {
        match self {
            Algorithm::Quicksort => quicksort(values),
            Algorithm::Bubblesort => bubble_sort(values),
            Algorithm::Mergesort => merge_sort(values),
        }
    }
}

// ---------------------------------------------------------------------------
// Quicksort
// ---------------------------------------------------------------------------

/// First-element-pivot quicksort. Elements equal to the pivot land in the
/// lower partition.
///
/// Recursion depth is linear on already-sorted input.
pub fn quicksort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let Some((pivot, rest)) = values.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![pivot.clone()];
    }

    let (less, greater): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|v| v <= pivot);

    let mut sorted = quicksort(&less);
    sorted.reserve(greater.len() + 1);
    sorted.push(pivot.clone());
    sorted.extend(quicksort(&greater));
    sorted
}

// ---------------------------------------------------------------------------
// Bubble sort
// ---------------------------------------------------------------------------

/// Bubble sort a copy of `values`.
pub fn bubble_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    bubble_sort_in_place(&mut sorted);
    sorted
}

/// Sort `values` in place with exactly `len` full passes.
///
/// Mutates its argument. There is no early exit when a pass makes no swaps,
/// so the cost is always quadratic.
pub fn bubble_sort_in_place<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();
    for _ in 0..n {
        for j in 0..n - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Merge sort
// ---------------------------------------------------------------------------

/// Top-down merge sort.
pub fn merge_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let (left, right) = values.split_at(values.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merge two sorted slices. On ties the left element is taken first.
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
