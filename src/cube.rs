//! Cubes: conjunctions of positive literals
//!
//! A cube is an unordered set of distinct literals, interpreted as their
//! logical AND (§3). It is value-typed and canonical: two cubes with the
//! same literals compare and hash equal, so cubes can serve as map keys
//! directly (the kernel matrix's column labels are cubes).

use crate::literal::Literal;
use std::collections::BTreeSet;
use std::fmt;

/// A conjunction of distinct positive literals.
///
/// The empty cube denotes the logical constant `1`. Backed by `BTreeSet` so
/// that equal cubes are indistinguishable and the natural `Ord` derived from
/// sorted-literal-tuple order matches §5's canonical cube ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cube(BTreeSet<Literal>);

impl Cube {
    /// The empty cube (`1`).
    pub fn one() -> Self {
        Cube(BTreeSet::new())
    }

    /// Build a cube from an iterator of literals, deduplicating.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        Cube(literals.into_iter().collect())
    }

    /// Number of literals in this cube.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the cube's literals in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter()
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.0.contains(lit)
    }

    /// True iff `self` divides `other`, i.e. every literal of `self` appears
    /// in `other`. The empty cube divides everything.
    pub fn divides(&self, other: &Cube) -> bool {
        self.0.is_subset(&other.0)
    }

    /// `self \ other`: literals in `self` but not in `other`.
    pub fn difference(&self, other: &Cube) -> Cube {
        Cube(self.0.difference(&other.0).cloned().collect())
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &Cube) -> Cube {
        Cube(self.0.union(&other.0).cloned().collect())
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &Cube) -> Cube {
        Cube(self.0.intersection(&other.0).cloned().collect())
    }

    /// Build a cube containing a single literal.
    pub fn singleton(lit: Literal) -> Cube {
        let mut s = BTreeSet::new();
        s.insert(lit);
        Cube(s)
    }

    /// Insert one literal, returning a new cube.
    pub fn with_literal(&self, lit: Literal) -> Cube {
        let mut s = self.0.clone();
        s.insert(lit);
        Cube(s)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "1");
        }
        for lit in &self.0 {
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

impl FromIterator<Literal> for Cube {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Cube::from_literals(iter)
    }
}
