//! Extraction: turning a selected rectangle or single-row pattern into a new
//! definition (§4.E)
//!
//! Two extraction variants share one dispatch point, modeled as the `Step`
//! tagged union, the way the teacher's expression minimizer dispatches over
//! its reduction-rule variants.

use crate::cube::Cube;
use crate::error::SynthesisError;
use crate::expr::Expr;
use crate::literal::Literal;
use crate::matrix::KernelMatrix;
use crate::rectangle::Rectangle;
use std::collections::{BTreeMap, BTreeSet};

/// A candidate single-row extraction: literal `ℓ`, its shared cube `d`, and
/// the cubes of `F` it was derived from (§4.E).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleRowCandidate {
    pub literal: Literal,
    pub shared: Cube,
    pub occurrences: BTreeSet<Cube>,
    pub profit: i64,
}

/// One accepted extraction, ready for `apply_step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Rectangle(Rectangle),
    SingleRow(SingleRowCandidate),
}

/// Apply a rectangle extraction (§4.E `apply_rectangle_once`).
///
/// Returns the updated `F` and the new definition's body. Fails with
/// `RectangleNotRealized` if any cube the rectangle implies is missing from
/// `F` — a consistency bug in matrix construction, never expected in
/// practice, but checked rather than assumed.
pub fn apply_rectangle_once(
    f: &Expr,
    matrix: &KernelMatrix,
    rect: &Rectangle,
    name: Literal,
) -> Result<(Expr, Expr), SynthesisError> {
    let new_expr = Expr::from_cubes(rect.cols.iter().map(|&c| matrix.col_label(c).clone()));

    let mut updated = f.clone();
    for &row in &rect.rows {
        let co_kernel = matrix.row_label(row);
        for k in new_expr.cubes() {
            let cube_to_remove = co_kernel.union(k);
            if !updated.remove(&cube_to_remove) {
                return Err(SynthesisError::RectangleNotRealized {
                    co_kernel: co_kernel.to_string(),
                });
            }
        }
        updated.insert(co_kernel.with_literal(name.clone()));
    }

    Ok((updated, new_expr))
}

/// §4.E single-row extraction: find the literal `ℓ` appearing in at least
/// two cubes of `f` whose occurrence set yields the most profitable shared
/// cube `d`, tie-broken by larger `|d|`, then larger `|S_ℓ|`, then
/// lexicographically smallest `d`. Returns `None` when no candidate clears
/// the `profit ≥ 1` bar.
pub fn find_single_row_candidate(f: &Expr) -> Option<SingleRowCandidate> {
    let mut occurrences: BTreeMap<Literal, BTreeSet<Cube>> = BTreeMap::new();
    for cube in f.cubes() {
        for lit in cube.literals() {
            occurrences.entry(lit.clone()).or_default().insert(cube.clone());
        }
    }

    let mut best: Option<SingleRowCandidate> = None;
    for (literal, cubes) in occurrences {
        if cubes.len() < 2 {
            continue;
        }
        let mut iter = cubes.iter();
        let first = iter.next().expect("checked len >= 2").clone();
        let shared = iter.fold(first, |acc, c| acc.intersection(c));
        if shared.is_empty() {
            continue;
        }
        let s = cubes.len() as i64;
        let d_len = shared.len() as i64;
        let profit = s * (d_len - 1) - 1;
        if profit < 1 {
            continue;
        }
        let candidate = SingleRowCandidate {
            literal,
            shared,
            occurrences: cubes,
            profit,
        };
        best = match best {
            None => Some(candidate),
            Some(current) if prefer_single_row(&candidate, &current) => Some(candidate),
            Some(current) => Some(current),
        };
    }
    best
}

fn prefer_single_row(a: &SingleRowCandidate, b: &SingleRowCandidate) -> bool {
    if a.profit != b.profit {
        return a.profit > b.profit;
    }
    if a.shared.len() != b.shared.len() {
        return a.shared.len() > b.shared.len();
    }
    if a.occurrences.len() != b.occurrences.len() {
        return a.occurrences.len() > b.occurrences.len();
    }
    a.shared < b.shared
}

/// Apply a single-row extraction: replace every cube of `candidate.occurrences`
/// with its residual plus `name`, and hand back `name`'s body (the shared
/// cube `d` itself, a one-cube expression).
pub fn apply_single_row_once(
    f: &Expr,
    candidate: &SingleRowCandidate,
    name: Literal,
) -> Result<(Expr, Expr), SynthesisError> {
    let mut updated = f.clone();
    for cube in &candidate.occurrences {
        if !updated.remove(cube) {
            return Err(SynthesisError::SingleRowNotRealized {
                literal: candidate.literal.to_string(),
            });
        }
        updated.insert(cube.difference(&candidate.shared).with_literal(name.clone()));
    }
    let body = Expr::from_cubes([candidate.shared.clone()]);
    Ok((updated, body))
}

/// Dispatch a `Step` to the matching apply function (§9 "Polymorphism").
/// `matrix` is required for `Step::Rectangle` and ignored otherwise.
pub fn apply_step(
    f: &Expr,
    matrix: Option<&KernelMatrix>,
    step: &Step,
    name: Literal,
) -> Result<(Expr, Expr), SynthesisError> {
    match step {
        Step::Rectangle(rect) => {
            let matrix = matrix.expect("rectangle step requires its originating matrix");
            apply_rectangle_once(f, matrix, rect, name)
        }
        Step::SingleRow(candidate) => apply_single_row_once(f, candidate, name),
    }
}
