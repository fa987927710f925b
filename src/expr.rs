//! Sum-of-products expressions and the algebra of §4.A
//!
//! An expression is an unordered set of distinct cubes, interpreted as their
//! logical OR (§3). All operations here are pure: inputs are never mutated,
//! outputs are freshly built, normalized expressions (`Expr` never contains a
//! duplicate cube by construction, since it is backed by a `BTreeSet`).

use crate::cube::Cube;
use crate::literal::Literal;
use std::collections::BTreeSet;
use std::fmt;

/// A disjunction (OR) of distinct cubes.
///
/// The empty expression denotes the logical constant `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expr(BTreeSet<Cube>);

impl Expr {
    /// The empty expression (`0`).
    pub fn zero() -> Self {
        Expr(BTreeSet::new())
    }

    pub fn from_cubes(cubes: impl IntoIterator<Item = Cube>) -> Self {
        Expr(cubes.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.0.iter()
    }

    /// Membership check by set-of-literals equality (§4.A).
    pub fn contains_cube(&self, c: &Cube) -> bool {
        self.0.contains(c)
    }

    pub fn insert(&mut self, c: Cube) -> bool {
        self.0.insert(c)
    }

    pub fn remove(&mut self, c: &Cube) -> bool {
        self.0.remove(c)
    }

    /// The intersection of literals across all cubes of `self`; empty if no
    /// literal is shared by every cube. The empty expression yields the
    /// empty set (§4.A).
    pub fn common_literals(&self) -> Cube {
        let mut iter = self.0.iter();
        match iter.next() {
            None => Cube::one(),
            Some(first) => iter.fold(first.clone(), |acc, c| acc.intersection(c)),
        }
    }

    /// True iff `|self| ≥ 2` and no literal is shared by every cube (§4.A).
    /// The single-cube expression is never cube-free.
    pub fn is_cube_free(&self) -> bool {
        self.0.len() >= 2 && self.common_literals().is_empty()
    }

    /// Algebraic quotient `self / d`: `{ c \ d : c ∈ self, d ⊆ c }` (§4.A).
    /// `d = ∅` returns `self` unchanged.
    pub fn divide_by_cube(&self, d: &Cube) -> Expr {
        if d.is_empty() {
            return self.clone();
        }
        Expr(
            self.0
                .iter()
                .filter(|c| d.divides(c))
                .map(|c| c.difference(d))
                .collect(),
        )
    }

    /// `remainder(self, d) = { c ∈ self : d ⊄ c }`: cubes not divisible by
    /// `d` (§4.A). Disjoint complement of the cubes consumed by division.
    pub fn remainder(&self, d: &Cube) -> Expr {
        if d.is_empty() {
            return Expr::zero();
        }
        Expr(self.0.iter().filter(|c| !d.divides(c)).cloned().collect())
    }

    /// Sum over cubes of `|cube|` (§4.A). Each literal occurrence counts once.
    pub fn literal_count(&self) -> usize {
        self.0.iter().map(Cube::len).sum()
    }

    /// All distinct literals appearing anywhere in `self`, in canonical order.
    pub fn distinct_literals(&self) -> BTreeSet<Literal> {
        self.0.iter().flat_map(|c| c.literals().cloned()).collect()
    }

    /// Distinct cubes appearing anywhere in `self`, in canonical order.
    pub fn distinct_cubes(&self) -> &BTreeSet<Cube> {
        &self.0
    }
}

/// `multiply_cube_expr(d, expr) = { d ∪ c : c ∈ expr }`, deduplicated (§4.A).
pub fn multiply_cube_expr(d: &Cube, expr: &Expr) -> Expr {
    Expr(expr.0.iter().map(|c| d.union(c)).collect())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "0");
        }
        let mut first = true;
        for cube in &self.0 {
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "{}", cube)?;
        }
        Ok(())
    }
}

impl FromIterator<Cube> for Expr {
    fn from_iter<T: IntoIterator<Item = Cube>>(iter: T) -> Self {
        Expr::from_cubes(iter)
    }
}
