//! Textual SOP parsing (§6 external interface)
//!
//! Grounded on `src/expression/parser.rs`: the grammar itself is generated
//! by `lalrpop` (the `lalrpop-util` `lexer` feature, same as the teacher) at
//! build time from `src/sop.lalrpop`, and this module just wraps the
//! generated parser behind a `Result<Expr, ParseError>` API.

use crate::error::ParseError;
use crate::expr::Expr;

#[allow(clippy::all)]
mod generated {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/sop.rs"));
}

/// Parse a flat SOP expression such as `"ab + ac + ad"` (§6: "a set of
/// cubes, each a set of literals"). Literals are lowercase single letters or
/// synthesizer-style names (`t` followed by digits) — see `src/sop.lalrpop`.
pub fn parse_sop(input: &str) -> Result<Expr, ParseError> {
    generated::SopParser::new()
        .parse(input)
        .map_err(|err| ParseError::InvalidSyntax {
            message: err.to_string(),
            input: input.to_string(),
        })
}
