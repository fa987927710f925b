//! Pretty-printing of networks (§6 "Printed form")
//!
//! An external collaborator per §1's scope note, kept alongside the core the
//! same way the teacher ships `Display` for `BoolExpr` beside its BDD engine
//! (`src/expression/display.rs`). `Cube` and `Expr` already implement
//! `Display` per §6's cube/term rendering rules (concatenated literals,
//! `" + "`-joined terms); this module adds the network-level framing: one
//! `name = expr` line per definition in generation order, then `F = expr`.

use crate::network::Network;
use std::fmt;

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, body) in &self.defs {
            writeln!(f, "{name} = {body}")?;
        }
        write!(f, "F = {}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use crate::cube::Cube;
    use crate::expr::Expr;
    use crate::literal::Literal;
    use crate::network::Network;

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
    fn prints_definitions_in_generation_order_then_root() {
        let mut net = Network::trivial(expr(&[&["a", "t1"]]));
        net.defs.insert(lit("t1"), expr(&[&["b"], &["c"]]));
        assert_eq!(net.to_string(), "t1 = b + c\nF = at1");
    }

    #[test]
    fn prints_a_network_with_no_definitions() {
        let net = Network::trivial(expr(&[&["a", "b"], &["c", "d"]]));
        assert_eq!(net.to_string(), "F = ab + cd");
    }

    #[test]
    fn prints_multiple_definitions_in_insertion_order() {
        let mut net = Network::trivial(expr(&[&["t1", "t2"]]));
        net.defs.insert(lit("t1"), expr(&[&["g"], &["f"]]));
        net.defs.insert(lit("t2"), expr(&[&["d"], &["e"]]));
        assert_eq!(net.to_string(), "t1 = f + g\nt2 = d + e\nF = t1t2");
    }
}
