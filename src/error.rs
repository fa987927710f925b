//! Error types for the synthesis engine
//!
//! One enum per error source, a hand-written `Display`, `std::error::Error`,
//! and `From` conversions into `std::io::Error` for CLI-boundary use. No
//! `thiserror`/`anyhow` dependency — none of this crate's errors need it.

use std::fmt;
use std::io;

/// Malformed textual SOP input (§7: external, raised by the parser, never
/// by the core synthesis engine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer or grammar rejected the input.
    InvalidSyntax {
        /// Message surfaced by the generated parser.
        message: String,
        /// The original input string that failed to parse.
        input: String,
    },
    /// A literal name collides with a name the synthesizer reserves for
    /// fresh definitions (`t` followed by digits) in a position where that
    /// would be ambiguous. The parser itself never rejects this — §8
    /// scenario 5 shows `t1` is a legal *input* literal — but callers that
    /// build a `Network` incrementally can hit it when wiring parsed input
    /// into an existing `defs` map.
    ReservedNameCollision {
        /// The colliding identifier.
        name: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSyntax { message, input } => {
                write!(f, "failed to parse SOP expression: {message}. Input: {input:?}")
            }
            ParseError::ReservedNameCollision { name } => {
                write!(f, "literal '{name}' collides with an existing definition name")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Internal consistency errors raised while applying an extraction step
/// (§7). The driver treats both variants as recoverable: it logs a
/// diagnostic and skips to the next candidate rather than propagating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// A selected rectangle named a cube `d_i ∪ k` that is not present in
    /// `F`. Should never occur if kernel/matrix construction is correct;
    /// signals a bug in the caller or the matrix builder.
    RectangleNotRealized {
        /// The co-kernel of the row that could not be realized.
        co_kernel: String,
    },
    /// A candidate single-row extraction's shared cube was not actually
    /// present in every cube of the claimed literal's occurrence set.
    SingleRowNotRealized {
        /// The literal whose occurrence set drove the candidate.
        literal: String,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::RectangleNotRealized { co_kernel } => write!(
                f,
                "rectangle extraction not realized: co-kernel '{co_kernel}' cube missing from F"
            ),
            SynthesisError::SingleRowNotRealized { literal } => write!(
                f,
                "single-row extraction not realized: shared cube for literal '{literal}' missing from F"
            ),
        }
    }
}

impl std::error::Error for SynthesisError {}

/// Raised by the post-synthesis validator (§9: "A validator should
/// nonetheless check [acyclicity] on `synthesize`'s output"). Duplicate
/// cubes and dangling name references are ruled out by construction — `Expr`
/// is backed by a set, and every name the driver mints is recorded in `defs`
/// before it is referenced — so the validator's only reachable failure mode
/// is a reference cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The references-relation induced by definitions is not a DAG.
    CyclicReference {
        /// One name on the discovered cycle.
        name: String,
    },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::CyclicReference { name } => {
                write!(f, "definition cycle detected through '{name}'")
            }
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<NetworkError> for io::Error {
    fn from(err: NetworkError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}
