//! Property checks shared by every registered sorter.
//!
//! Inputs come from a seeded RNG so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortbench_core::sort::{bubble_sort, merge_sort, quicksort};
use sortbench_core::{Algorithm, Sorter};

// =============================================================================
// Helpers
// =============================================================================

fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Same multiset: compare against the standard library's sort.
fn is_permutation_of(sorted: &[i64], original: &[i64]) -> bool {
    let mut expected = original.to_vec();
    expected.sort();
    sorted == expected.as_slice()
}

fn random_ints(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-50..50)).collect()
}

fn random_cases() -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut cases = Vec::new();
    for len in [0, 1, 2, 3, 7, 16, 33, 100, 257] {
        for _ in 0..4 {
            cases.push(random_ints(&mut rng, len));
        }
    }
    cases
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn output_is_sorted_permutation() {
    for algo in Algorithm::all() {
        for case in random_cases() {
            let sorted = algo.sort(&case);
            assert!(is_sorted(&sorted), "{} left {:?} unsorted", algo, case);
            assert!(
                is_permutation_of(&sorted, &case),
                "{} lost elements of {:?}",
                algo,
                case
            );
        }
    }
}

#[test]
fn sorting_sorted_input_is_identity() {
    for algo in Algorithm::all() {
        for case in random_cases() {
            let once = algo.sort(&case);
            let twice = algo.sort(&once);
            assert_eq!(once, twice, "{}", algo);
        }
    }
}

#[test]
fn reverse_input_sorts_the_same() {
    for algo in Algorithm::all() {
        for case in random_cases() {
            let mut reversed = case.clone();
            reversed.reverse();
            assert_eq!(algo.sort(&case), algo.sort(&reversed), "{}", algo);
        }
    }
}

#[test]
fn trivial_inputs_are_unchanged() {
    for algo in Algorithm::all() {
        let empty: Vec<f64> = vec![];
        assert_eq!(algo.sort(&empty), empty);
        assert_eq!(algo.sort(&[0.5_f64]), vec![0.5]);
    }
}

#[test]
fn all_sorters_agree_on_floats() {
    let mut rng = StdRng::seed_from_u64(99);
    let values: Vec<f64> = (0..300).map(|_| rng.gen::<f64>()).collect();
    let q = quicksort(&values);
    let b = bubble_sort(&values);
    let m = merge_sort(&values);
    assert!(is_sorted(&q));
    assert_eq!(q, b);
    assert_eq!(q, m);
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn scenario_four_values() {
    for algo in Algorithm::all() {
        assert_eq!(algo.sort(&[5, 3, 8, 1]), vec![1, 3, 5, 8], "{}", algo);
    }
}

#[test]
fn scenario_empty() {
    for algo in Algorithm::all() {
        let empty: [i32; 0] = [];
        assert_eq!(algo.sort(&empty), Vec::<i32>::new(), "{}", algo);
    }
}

#[test]
fn scenario_duplicates() {
    for algo in Algorithm::all() {
        assert_eq!(algo.sort(&[2, 2, 1]), vec![1, 2, 2], "{}", algo);
    }
}

#[test]
fn sorters_work_through_trait_objects() {
    let sorters: Vec<Box<dyn Sorter<i64>>> = Algorithm::all()
        .into_iter()
        .map(|a| Box::new(a) as Box<dyn Sorter<i64>>)
        .collect();
    let labels: Vec<&str> = sorters.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["quicksort", "bubblesort", "mergesort"]);
    for s in &sorters {
        assert_eq!(s.sort(&[3, -1, 2]), vec![-1, 2, 3]);
    }
}
