//! Synthesis driver (§4.F)
//!
//! Iterates extraction to a fixed point on each worklist node, recursively
//! factoring every definition it generates. Owns the fresh-name counter,
//! the `defs` map, and the history log for the duration of one `synthesize`
//! call (§5: none of this is global state).

use crate::expr::Expr;
use crate::extract::{apply_rectangle_once, apply_single_row_once, find_single_row_candidate};
use crate::kernel::{raw_kernel_pairs, raw_kernel_pairs_level0};
use crate::literal::{Literal, NameSource};
use crate::matrix::KernelMatrix;
use crate::network::Network;
use crate::rectangle::rank_rectangles;
use indexmap::IndexMap;
use std::collections::{BTreeSet, VecDeque};

/// Tuning knobs for one synthesis run. Grounded on the teacher's
/// `EspressoConfig`: a plain `Copy` struct with `Default`, passed by value,
/// not a config-file loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Upper bound on the number of rectangles `enumerate_closed_rectangles`
    /// will emit before giving up and proceeding with the best found so far
    /// (§5 resource bound; default 10000).
    pub rectangle_cap: usize,
    /// `true` enumerates kernels at every recursion level (§4.B, §9's
    /// resolved open question and this spec's default); `false` restricts
    /// enumeration to level-0 kernels only.
    pub all_kernels: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig {
            rectangle_cap: 10_000,
            all_kernels: true,
        }
    }
}

/// One step of the history log §4.F asks the driver to maintain, "for
/// inspection and testing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A rectangle extraction was applied.
    Rectangle {
        node: Literal,
        name: Literal,
        rows: usize,
        cols: usize,
        profit: i64,
    },
    /// A single-row extraction was applied.
    SingleRow {
        node: Literal,
        name: Literal,
        literal: Literal,
        shared_len: usize,
        profit: i64,
    },
    /// Rectangle enumeration hit its cap while factoring this node (§7
    /// `EnumerationCapped`).
    EnumerationCapped { node: Literal, cap: usize },
    /// A candidate extraction could not be realized against the current
    /// expression and was skipped (§7 `RectangleNotRealized` and its
    /// single-row counterpart).
    Skip { node: Literal, reason: String },
}

/// The accumulated record of every step taken during a `synthesize` call.
pub type HistoryLog = Vec<HistoryEntry>;

/// §4.F `synthesize`: factor `input` into a `Network` using the default
/// configuration.
pub fn synthesize(input: &Expr) -> Network {
    synthesize_with_config(input, SynthesisConfig::default()).0
}

/// §4.F `synthesize`, with an explicit `SynthesisConfig` and the full
/// history log of every step taken.
pub fn synthesize_with_config(input: &Expr, config: SynthesisConfig) -> (Network, HistoryLog) {
    let root_name = Literal::new("F");
    let input_literals: BTreeSet<Literal> = input.distinct_literals();

    let mut defs: IndexMap<Literal, Expr> = IndexMap::new();
    let mut history = HistoryLog::new();
    let mut names = NameSource::new();
    let mut worklist: VecDeque<(Literal, Expr)> = VecDeque::new();
    worklist.push_back((root_name.clone(), input.clone()));

    while let Some((node_name, expr)) = worklist.pop_front() {
        let (factored, new_defs) = factor_to_fixed_point(
            &expr,
            &node_name,
            &config,
            &input_literals,
            &mut names,
            &defs,
            &mut history,
        );
        defs.insert(node_name, factored);
        for (name, body) in new_defs {
            worklist.push_back((name, body));
        }
    }

    let root = defs
        .shift_remove(&root_name)
        .expect("root node is always processed first");
    (Network { root, defs }, history)
}

/// §4.F `factor_to_fixed_point`: repeatedly extract a rectangle or a
/// single-row pattern from `expr` until neither is profitable, recording
/// every accepted (or skipped) step in `history`. Returns the fully factored
/// expression and the list of definitions it produced, in generation order.
fn factor_to_fixed_point(
    expr: &Expr,
    node_name: &Literal,
    config: &SynthesisConfig,
    input_literals: &BTreeSet<Literal>,
    names: &mut NameSource,
    defs: &IndexMap<Literal, Expr>,
    history: &mut HistoryLog,
) -> (Expr, Vec<(Literal, Expr)>) {
    let mut current = expr.clone();
    let mut new_defs: Vec<(Literal, Expr)> = Vec::new();

    loop {
        let pairs = if config.all_kernels {
            raw_kernel_pairs(&current)
        } else {
            raw_kernel_pairs_level0(&current)
        };
        let matrix = KernelMatrix::build(&pairs);

        if let Some(body) = try_rectangle_step(
            &mut current,
            &matrix,
            config,
            node_name,
            input_literals,
            names,
            defs,
            &new_defs,
            history,
        ) {
            new_defs.push(body);
            continue;
        }

        if let Some(body) = try_single_row_step(
            &mut current,
            node_name,
            input_literals,
            names,
            defs,
            &new_defs,
            history,
        ) {
            new_defs.push(body);
            continue;
        }

        break;
    }

    (current, new_defs)
}

/// Try every profitable rectangle best-first until one applies cleanly,
/// mutating `current` and logging the accepted step. Returns the new
/// definition on success.
#[allow(clippy::too_many_arguments)]
fn try_rectangle_step(
    current: &mut Expr,
    matrix: &KernelMatrix,
    config: &SynthesisConfig,
    node_name: &Literal,
    input_literals: &BTreeSet<Literal>,
    names: &mut NameSource,
    defs: &IndexMap<Literal, Expr>,
    new_defs: &[(Literal, Expr)],
    history: &mut HistoryLog,
) -> Option<(Literal, Expr)> {
    let (ranked, capped) = rank_rectangles(matrix, config.rectangle_cap);
    if capped {
        history.push(HistoryEntry::EnumerationCapped {
            node: node_name.clone(),
            cap: config.rectangle_cap,
        });
    }

    for (rect, profit) in ranked {
        let name = fresh_name(names, input_literals, defs, new_defs);
        match apply_rectangle_once(current, matrix, &rect, name.clone()) {
            Ok((updated, body)) => {
                history.push(HistoryEntry::Rectangle {
                    node: node_name.clone(),
                    name: name.clone(),
                    rows: rect.rows.len(),
                    cols: rect.cols.len(),
                    profit,
                });
                *current = updated;
                return Some((name, body));
            }
            Err(err) => {
                history.push(HistoryEntry::Skip {
                    node: node_name.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    None
}

fn try_single_row_step(
    current: &mut Expr,
    node_name: &Literal,
    input_literals: &BTreeSet<Literal>,
    names: &mut NameSource,
    defs: &IndexMap<Literal, Expr>,
    new_defs: &[(Literal, Expr)],
    history: &mut HistoryLog,
) -> Option<(Literal, Expr)> {
    let candidate = find_single_row_candidate(current)?;
    let name = fresh_name(names, input_literals, defs, new_defs);
    match apply_single_row_once(current, &candidate, name.clone()) {
        Ok((updated, body)) => {
            history.push(HistoryEntry::SingleRow {
                node: node_name.clone(),
                name: name.clone(),
                literal: candidate.literal.clone(),
                shared_len: candidate.shared.len(),
                profit: candidate.profit,
            });
            *current = updated;
            Some((name, body))
        }
        Err(err) => {
            history.push(HistoryEntry::Skip {
                node: node_name.clone(),
                reason: err.to_string(),
            });
            None
        }
    }
}

/// §4.E fresh-name policy: the next `t{n}` not already present among input
/// literals, committed definitions, or definitions generated earlier in this
/// same `factor_to_fixed_point` call.
fn fresh_name(
    names: &mut NameSource,
    input_literals: &BTreeSet<Literal>,
    defs: &IndexMap<Literal, Expr>,
    new_defs: &[(Literal, Expr)],
) -> Literal {
    names.fresh(&|candidate: &Literal| {
        input_literals.contains(candidate)
            || defs.contains_key(candidate)
            || new_defs.iter().any(|(n, _)| n == candidate)
    })
}
