//! # Algebraic multi-level factorization
//!
//! This crate performs algebraic multi-level factorization of Boolean
//! sum-of-products (SOP) expressions. Given a two-level SOP over positive
//! literals, [`synthesize`] produces a functionally equivalent
//! [`Network`] — a DAG of definitions — that reduces total literal count by
//! discovering common algebraic sub-expressions.
//!
//! ## Pipeline
//!
//! The core synthesis pipeline, leaves first:
//!
//! - [`cube`] / [`expr`] — the algebra: cubes, sum-of-products expressions,
//!   division, multiplication, cube-freeness.
//! - [`kernel`] — enumeration of every kernel/co-kernel pair of an
//!   expression.
//! - [`matrix`] — the kernel–cube matrix built from kernel output.
//! - [`rectangle`] — enumeration of maximal all-ones submatrices and their
//!   profit.
//! - [`extract`] — applying a rectangle or a single-row pattern to produce a
//!   new definition.
//! - [`driver`] — the iterative loop that drives extraction to a fixed
//!   point and recursively factors every definition it introduces.
//!
//! Parsing and pretty-printing ([`parser`], [`printer`]) sit outside this
//! pipeline as external collaborators — the core never calls them.
//!
//! ## Example
//!
//! ```
//! use algebraic_factor::{synthesize, parser::parse_sop};
//!
//! let input = parse_sop("ab + ac + ad").unwrap();
//! let network = synthesize(&input);
//!
//! assert_eq!(network.expand(), input);
//! assert!(network.total_literals() < input.literal_count());
//! println!("{network}");
//! // t1 = b + c + d
//! // F = at1
//! ```
//!
//! ## Scope
//!
//! Only positive literals are supported. The algorithm is heuristic: it
//! guarantees termination and functional equivalence, not a
//! minimum-literal-count result. Boolean (non-algebraic) minimization,
//! don't-care handling, negated literals, and technology mapping are out of
//! scope.

pub mod cube;
pub mod driver;
pub mod error;
pub mod extract;
pub mod expr;
pub mod kernel;
pub mod matrix;
pub mod network;
pub mod parser;
pub mod printer;
pub mod rectangle;
pub mod literal;

pub use cube::Cube;
pub use driver::{synthesize, synthesize_with_config, HistoryEntry, HistoryLog, SynthesisConfig};
pub use error::{NetworkError, ParseError, SynthesisError};
pub use expr::Expr;
pub use literal::Literal;
pub use network::Network;
