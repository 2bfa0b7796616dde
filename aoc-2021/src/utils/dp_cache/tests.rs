//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) needs B(1) and C(2), both need D(3): D must be computed once
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_vec_backend_grows_sparse() {
    let mut backend: VecBackend<i32> = VecBackend::with_capacity(4);
    assert_eq!(backend.get(&5), None);

    backend.insert(5, 42);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&2), None);
    assert_eq!(backend.get(&10), None);
}

#[test]
fn test_hashmap_backend_keeps_first_value() {
    let mut backend: HashMapBackend<(u8, u8), u64> = HashMapBackend::new();
    assert!(backend.is_empty());

    backend.insert((1, 2), 7);
    backend.insert((1, 2), 99);
    assert_eq!(backend.get(&(1, 2)), Some(&7));
    assert_eq!(backend.get(&(2, 1)), None);
    assert_eq!(backend.len(), 1);
}

#[test]
fn test_closure_cache_with_tuple_keys() {
    // Lattice paths to (r, c) moving only down or right
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(r, c): &(usize, usize)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(usize, usize), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
    );

    assert_eq!(cache.get(&(2, 2)), 6);
    assert_eq!(cache.get(&(16, 16)), 601_080_390);

    let backend = cache.into_backend();
    assert_eq!(backend.len(), 17 * 17);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Memoized values match a straightforward iterative computation.
    #[test]
    fn prop_fibonacci_matches_iterative(n in 0usize..90) {
        let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);

        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        prop_assert_eq!(cache.get(&n), a);
    }
}
