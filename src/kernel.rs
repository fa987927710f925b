//! Kernel/co-kernel extraction (§4.B)
//!
//! A kernel of `F` is a cube-free expression `K = F / d` for some co-kernel
//! cube `d`. `kernels(f)` enumerates every kernel of `f`, each paired with
//! one co-kernel, deduplicated by kernel value. The classical
//! duplication-avoidance rule ("skip if an earlier literal divides the
//! quotient more than once") is enforced during the recursive descent rather
//! than via post-hoc dedup, so each kernel is discovered by exactly one
//! literal path (§9).

use crate::cube::Cube;
use crate::expr::Expr;
use crate::literal::Literal;
use std::collections::BTreeSet;

/// Literals that appear in at least two cubes of `expr`, in canonical
/// (lexicographic) order.
fn literals_in_multiple_cubes(expr: &Expr) -> BTreeSet<Literal> {
    let mut counts: std::collections::BTreeMap<Literal, usize> = Default::default();
    for cube in expr.cubes() {
        for lit in cube.literals() {
            *counts.entry(lit.clone()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(lit, _)| lit)
        .collect()
}

/// The intersection of all cubes of `expr` that contain `lit`.
fn co_kernel_for_literal(expr: &Expr, lit: &Literal) -> Cube {
    let mut containing = expr.cubes().filter(|c| c.contains(lit));
    let first = containing
        .next()
        .cloned()
        .expect("literal was reported present in expr");
    containing.fold(first, |acc, c| acc.intersection(c))
}

/// Recursive step of §4.B. Returns every (co-kernel, kernel) pair reachable
/// from `expr`, in canonical discovery order, without deduplication — the
/// caller (`kernels`) deduplicates once at the top.
///
/// Terminates because each recursive call's quotient `expr / co_kernel` both
/// drops every cube not containing the chosen literal and strips that
/// literal from the cubes that remain, so the total literal count strictly
/// decreases; recursion depth is bounded by the number of distinct literals
/// in the original expression.
fn kernels_rec(expr: &Expr) -> Vec<(Cube, Expr)> {
    if expr.len() < 2 {
        return Vec::new();
    }

    let mut result = Vec::new();
    let candidates = literals_in_multiple_cubes(expr);

    for lit in &candidates {
        let co_kernel = co_kernel_for_literal(expr, lit);
        let quotient = expr.divide_by_cube(&co_kernel);

        let quotient_repeats = literals_in_multiple_cubes(&quotient);
        let shadowed_by_earlier_literal = quotient_repeats.iter().any(|earlier| earlier < lit);
        if shadowed_by_earlier_literal {
            continue;
        }

        for (sub_co_kernel, kernel) in kernels_rec(&quotient) {
            result.push((co_kernel.union(&sub_co_kernel), kernel));
        }
    }

    if expr.is_cube_free() {
        result.push((Cube::one(), expr.clone()));
    }

    result
}

/// Every kernel of `expr`, each paired with one co-kernel, deduplicated by
/// kernel value — the co-kernel recorded is the first discovered in
/// canonical traversal order (§4.B). This is the public contract used for
/// inspection and the "no duplicate kernel values" property.
pub fn kernels(expr: &Expr) -> Vec<(Cube, Expr)> {
    dedup_by_kernel(kernels_rec(expr))
}

fn dedup_by_kernel(pairs: Vec<(Cube, Expr)>) -> Vec<(Cube, Expr)> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for (co_kernel, kernel) in pairs {
        if seen.insert(kernel.clone_for_dedup()) {
            out.push((co_kernel, kernel));
        }
    }
    out
}

/// Level-0-only kernel enumeration: each candidate literal's quotient is
/// emitted as a kernel only when it is *directly* cube-free, without
/// recursing further into it (§9 open question: the source leaves level-0
/// vs. all-level ambiguous; this spec resolves it to all-level by default,
/// but carries this variant for `SynthesisConfig { all_kernels: false, .. }`).
pub fn kernels_level0(expr: &Expr) -> Vec<(Cube, Expr)> {
    dedup_by_kernel(raw_kernel_pairs_level0(expr))
}

/// Un-deduplicated level-0 pairs, for the matrix builder (mirrors
/// `raw_kernel_pairs`'s role for the all-level case).
pub fn raw_kernel_pairs_level0(expr: &Expr) -> Vec<(Cube, Expr)> {
    if expr.len() < 2 {
        return Vec::new();
    }
    let mut result = Vec::new();
    for lit in &literals_in_multiple_cubes(expr) {
        let co_kernel = co_kernel_for_literal(expr, lit);
        let quotient = expr.divide_by_cube(&co_kernel);
        if quotient.is_cube_free() {
            result.push((co_kernel, quotient));
        }
    }
    if expr.is_cube_free() {
        result.push((Cube::one(), expr.clone()));
    }
    result
}

/// Every (co-kernel, kernel) pair reachable from `expr`, **without**
/// collapsing co-kernels that happen to produce the same kernel value.
///
/// `kernels()` dedups by kernel value, which is the right contract for
/// inspection but throws away exactly the row multiplicity the kernel
/// matrix (§4.C) needs: two distinct co-kernels that divide into the same
/// kernel are two distinct matrix rows, and a rectangle can only be found
/// across them if both rows survive. The matrix builder uses this instead.
pub fn raw_kernel_pairs(expr: &Expr) -> Vec<(Cube, Expr)> {
    kernels_rec(expr)
}

// `Expr` doesn't implement `Ord`/`Hash` (cubes are unordered sets of cubes,
// and deriving those on a `BTreeSet<Cube>` wrapper is trivial but would leak
// into the public API where it isn't otherwise needed). Kernel dedup only
// needs equality keyed on the sorted cube list, so we borrow that
// representation locally rather than widen `Expr`'s trait surface.
impl Expr {
    fn clone_for_dedup(&self) -> Vec<Cube> {
        self.cubes().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    fn cube(lits: &[&str]) -> Cube {
        Cube::from_literals(lits.iter().map(|s| Literal::new(*s)))
    }

    fn expr(cubes: &[&[&str]]) -> Expr {
        Expr::from_cubes(cubes.iter().map(|c| cube(c)))
    }

    #[test]
    fn no_kernel_for_single_cube() {
        let e = expr(&[&["a", "b"]]);
        assert!(kernels(&e).is_empty());
    }

    #[test]
    fn level0_kernels_are_a_subset_of_all_kernels() {
        let e = expr(&[
            &["b", "f", "g"],
            &["d", "f", "a"],
            &["d", "f", "b"],
            &["d", "f", "c"],
            &["e", "f", "a"],
            &["e", "f", "b"],
            &["e", "f", "c"],
            &["d", "g"],
            &["g", "e"],
        ]);
        let all: BTreeSet<Vec<Cube>> = kernels(&e).into_iter().map(|(_, k)| k.clone_for_dedup()).collect();
        let level0: BTreeSet<Vec<Cube>> = kernels_level0(&e)
            .into_iter()
            .map(|(_, k)| k.clone_for_dedup())
            .collect();
        assert!(level0.is_subset(&all));
        assert!(!level0.is_empty());
    }

    #[test]
    fn simple_common_factor_has_one_kernel() {
        // ab + ac + ad: kernel is (b + c + d) with co-kernel a.
        let e = expr(&[&["a", "b"], &["a", "c"], &["a", "d"]]);
        let ks = kernels(&e);
        assert_eq!(ks.len(), 1);
        let (co_kernel, kernel) = &ks[0];
        assert_eq!(*co_kernel, cube(&["a"]));
        assert_eq!(*kernel, expr(&[&["b"], &["c"], &["d"]]));
    }

    #[test]
    fn kernels_contain_no_duplicate_values() {
        let e = expr(&[
            &["a", "b"],
            &["a", "c"],
            &["b", "d"],
            &["c", "d"],
        ]);
        let ks = kernels(&e);
        let mut seen = BTreeSet::new();
        for (_, k) in &ks {
            assert!(seen.insert(k.clone_for_dedup()), "duplicate kernel {:?}", k);
        }
    }

    #[test]
    fn cube_free_expression_is_its_own_kernel() {
        let e = expr(&[&["a"], &["b"]]);
        let ks = kernels(&e);
        assert!(ks
            .iter()
            .any(|(d, k)| d.is_empty() && *k == e));
    }

    #[test]
    fn every_returned_kernel_is_cube_free() {
        let e = expr(&[
            &["b", "f", "g"],
            &["d", "f", "a"],
            &["d", "f", "b"],
            &["d", "f", "c"],
            &["e", "f", "a"],
            &["e", "f", "b"],
            &["e", "f", "c"],
            &["d", "g"],
            &["g", "e"],
        ]);
        for (_, kernel) in kernels(&e) {
            assert!(kernel.is_cube_free(), "kernel {:?} not cube-free", kernel);
        }
    }
}
