//! Networks: a root expression plus a DAG of named definitions (§3, §9)
//!
//! Grounded on the teacher's `cover` module: a container type plus an
//! explicit invariant validator the caller runs when it wants the guarantee,
//! rather than paying for it on every mutation.

use crate::cube::Cube;
use crate::error::NetworkError;
use crate::expr::{multiply_cube_expr, Expr};
use crate::literal::Literal;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// A root expression `F` plus an insertion-ordered `name → Expr` map (§3, §6:
/// "ordered map of name → Expr ... in the sequence names were generated").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub root: Expr,
    pub defs: IndexMap<Literal, Expr>,
}

impl Network {
    /// A network with no definitions: `root` factors to itself.
    pub fn trivial(root: Expr) -> Self {
        Network {
            root,
            defs: IndexMap::new(),
        }
    }

    /// Total literal count across `root` and every definition body (§8
    /// invariant 2 compares this before and after synthesis).
    pub fn total_literals(&self) -> usize {
        self.root.literal_count()
            + self
                .defs
                .values()
                .map(Expr::literal_count)
                .sum::<usize>()
    }

    /// §9's acyclicity validator: the references-relation induced by a
    /// definition name appearing in another definition's body (or in `root`)
    /// must be a DAG. Duplicate cubes and dangling references cannot occur —
    /// `Expr` is set-backed and names are recorded in `defs` before use — so
    /// this is the validator's only checkable failure mode.
    pub fn validate(&self) -> Result<(), NetworkError> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Color {
            Gray,
            Black,
        }

        fn visit(
            name: &Literal,
            defs: &IndexMap<Literal, Expr>,
            colors: &mut HashMap<Literal, Color>,
        ) -> Result<(), NetworkError> {
            colors.insert(name.clone(), Color::Gray);
            if let Some(body) = defs.get(name) {
                for referenced in body.distinct_literals() {
                    if !defs.contains_key(&referenced) {
                        continue;
                    }
                    match colors.get(&referenced) {
                        Some(Color::Gray) => {
                            return Err(NetworkError::CyclicReference {
                                name: referenced.to_string(),
                            })
                        }
                        Some(Color::Black) => continue,
                        None => visit(&referenced, defs, colors)?,
                    }
                }
            }
            colors.insert(name.clone(), Color::Black);
            Ok(())
        }

        let mut colors = HashMap::new();
        for name in self.defs.keys() {
            if colors.get(name) != Some(&Color::Black) {
                visit(name, &self.defs, &mut colors)?;
            }
        }
        Ok(())
    }

    /// Substitute every definition into `root`, transitively, yielding the
    /// flat expression the network is equivalent to (§3 invariant 4, §8
    /// invariant 1). Used by equivalence tests, never by the synthesis
    /// engine itself.
    pub fn expand(&self) -> Expr {
        let mut memo = HashMap::new();
        expand_expr(&self.root, &self.defs, &mut memo)
    }
}

/// Expand a single name: if it is a definition, its fully expanded body;
/// otherwise it is an atomic input literal, which expands to itself.
fn expand_name(
    name: &Literal,
    defs: &IndexMap<Literal, Expr>,
    memo: &mut HashMap<Literal, Expr>,
) -> Expr {
    if let Some(cached) = memo.get(name) {
        return cached.clone();
    }
    let expanded = match defs.get(name) {
        Some(body) => expand_expr(body, defs, memo),
        None => Expr::from_cubes([Cube::singleton(name.clone())]),
    };
    memo.insert(name.clone(), expanded.clone());
    expanded
}

/// Expand every literal of every cube of `expr` and re-distribute the
/// products, i.e. algebraic substitution of names by their bodies.
fn expand_expr(
    expr: &Expr,
    defs: &IndexMap<Literal, Expr>,
    memo: &mut HashMap<Literal, Expr>,
) -> Expr {
    let mut cubes: BTreeSet<Cube> = BTreeSet::new();
    for cube in expr.cubes() {
        let mut term = Expr::from_cubes([Cube::one()]);
        for lit in cube.literals() {
            let factor = expand_name(lit, defs, memo);
            term = distribute(&term, &factor);
        }
        cubes.extend(term.cubes().cloned());
    }
    Expr::from_cubes(cubes)
}

/// `{ c ∪ d : c ∈ a, d ∈ b }`, the distribution step of multiplying two
/// sum-of-products expressions together.
fn distribute(a: &Expr, b: &Expr) -> Expr {
    let mut cubes = BTreeSet::new();
    for c in a.cubes() {
        cubes.extend(multiply_cube_expr(c, b).cubes().cloned());
    }
    Expr::from_cubes(cubes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    fn lit(s: &str) -> Literal {
        Literal::new(s)
    }

    fn cube(lits: &[&str]) -> Cube {
        Cube::from_literals(lits.iter().map(|s| Literal::new(*s)))
    }

    fn expr(cubes: &[&[&str]]) -> Expr {
        Expr::from_cubes(cubes.iter().map(|c| cube(c)))
    }

    #[test]
    fn trivial_network_has_no_definitions() {
        let net = Network::trivial(expr(&[&["a"]]));
        assert!(net.defs.is_empty());
        assert_eq!(net.expand(), expr(&[&["a"]]));
    }

    #[test]
    fn expand_substitutes_one_definition() {
        // F = a . t1, t1 = b + c + d  =>  expand = ab + ac + ad
        let mut net = Network::trivial(expr(&[&["a", "t1"]]));
        net.defs.insert(lit("t1"), expr(&[&["b"], &["c"], &["d"]]));
        let expanded = net.expand();
        assert_eq!(expanded, expr(&[&["a", "b"], &["a", "c"], &["a", "d"]]));
    }

    #[test]
    fn expand_substitutes_nested_definitions() {
        // F = t1 . t2, t1 = g + f.t3, t2 = d + e, t3 = a + b + c
        let mut net = Network::trivial(expr(&[&["t1", "t2"]]));
        net.defs.insert(lit("t1"), expr(&[&["g"], &["f", "t3"]]));
        net.defs.insert(lit("t2"), expr(&[&["d"], &["e"]]));
        net.defs.insert(lit("t3"), expr(&[&["a"], &["b"], &["c"]]));
        let expanded = net.expand();
        let expected = expr(&[
            &["g", "d"],
            &["g", "e"],
            &["f", "a", "d"],
            &["f", "b", "d"],
            &["f", "c", "d"],
            &["f", "a", "e"],
            &["f", "b", "e"],
            &["f", "c", "e"],
        ]);
        assert_eq!(expanded, expected);
    }

    #[test]
    fn validate_accepts_acyclic_network() {
        let mut net = Network::trivial(expr(&[&["t1"]]));
        net.defs.insert(lit("t1"), expr(&[&["a"], &["b"]]));
        assert!(net.validate().is_ok());
    }

    #[test]
    fn validate_rejects_cycle() {
        let mut net = Network::trivial(expr(&[&["t1"]]));
        net.defs.insert(lit("t1"), expr(&[&["t2"]]));
        net.defs.insert(lit("t2"), expr(&[&["t1"]]));
        assert!(matches!(
            net.validate(),
            Err(NetworkError::CyclicReference { .. })
        ));
    }

}
