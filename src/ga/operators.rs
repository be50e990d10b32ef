//! Permutation-based genetic operators.
//!
//! Crossover and mutation for permutation-encoded chromosomes whose genes
//! are the values `0..n` (any `Copy` type convertible to `usize`). Both
//! operators preserve the permutation property.
//!
//! # Crossover
//!
//! - [`one_point_order_crossover`]: prefix of parent1, remainder in
//!   parent2's relative order
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions — O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point order crossover with a random cut.
///
/// The cut is drawn uniformly from `1..=n-2`, so the child always takes at
/// least one gene from parent1 and leaves at least two positions to be
/// filled from parent2. For a 9-gene chromosome this is `[1, 7]`.
///
/// # Panics
/// Panics if the parents have different lengths or fewer than 3 genes.
pub fn one_point_order_crossover<T, R>(parent1: &[T], parent2: &[T], rng: &mut R) -> Vec<T>
where
    T: Copy + Into<usize>,
    R: Rng + ?Sized,
{
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 3, "order crossover needs at least 3 genes");

    let cut = rng.random_range(1..=n - 2);
    order_crossover_at(parent1, parent2, cut)
}

/// Order crossover at a fixed cut point.
///
/// The child's first `cut` genes are `parent1[..cut]` verbatim; the rest are
/// the genes of `parent2` not yet present, in `parent2`'s order.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths, `cut > n`, or a gene value
/// is `>= n`.
pub fn order_crossover_at<T>(parent1: &[T], parent2: &[T], cut: usize) -> Vec<T>
where
    T: Copy + Into<usize>,
{
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(cut <= n, "cut point out of range");

    let mut child = Vec::with_capacity(n);
    let mut present = vec![false; n];

    for &gene in &parent1[..cut] {
        let value: usize = gene.into();
        present[value] = true;
        child.push(gene);
    }

    for &gene in parent2 {
        let value: usize = gene.into();
        if !present[value] {
            present[value] = true;
            child.push(gene);
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng + ?Sized>(perm: &mut [T], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let picks = index::sample(rng, n, 2);
    perm.swap(picks.index(0), picks.index(1));
}

// ============================================================================
// Helpers
// ============================================================================

/// Checks that `perm` contains every value of `0..perm.len()` exactly once.
pub fn is_permutation<T: Copy + Into<usize>>(perm: &[T]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        let v: usize = v.into();
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
