//! Command-line demo for algebraic multi-level factorization (§6)
//!
//! Reads a SOP expression from the command line or stdin, runs the
//! synthesizer, and prints the resulting network. No persistent state.
//! Grounded on the teacher's `src/bin/espresso.rs` CLI shape, trimmed to the
//! flags this domain needs.

use algebraic_factor::driver::{synthesize_with_config, HistoryEntry, SynthesisConfig};
use algebraic_factor::parser::parse_sop;
use clap::Parser;
use std::io::{self, Read};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "factor")]
#[command(about = "Algebraic multi-level factorization of a SOP expression", long_about = None)]
struct Args {
    /// SOP expression to factor, e.g. "ab + ac + ad". Reads stdin if omitted.
    expression: Option<String>,

    /// Print the synthesis history log (every accepted or skipped step) to
    /// stderr.
    #[arg(short = 't', long = "trace")]
    trace: bool,

    /// Cap on the number of rectangles enumerated per factoring step.
    #[arg(long = "rectangle-cap", default_value_t = 10_000)]
    rectangle_cap: usize,

    /// Restrict kernel enumeration to level-0 kernels only.
    #[arg(long = "level0-only")]
    level0_only: bool,
}

fn main() {
    let args = Args::parse();

    let input_text = match args.expression {
        Some(expr) => expr,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error reading stdin: {e}");
                process::exit(1);
            }
            buf
        }
    };

    let input = match parse_sop(input_text.trim()) {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("error parsing expression: {e}");
            process::exit(1);
        }
    };

    let config = SynthesisConfig {
        rectangle_cap: args.rectangle_cap,
        all_kernels: !args.level0_only,
    };
    let (network, history) = synthesize_with_config(&input, config);

    if let Err(e) = network.validate() {
        eprintln!("internal error: synthesized network failed validation: {e}");
        process::exit(1);
    }

    if args.trace {
        for entry in &history {
            print_history_entry(entry);
        }
    }

    println!("{network}");
}

fn print_history_entry(entry: &HistoryEntry) {
    match entry {
        HistoryEntry::Rectangle {
            node,
            name,
            rows,
            cols,
            profit,
        } => eprintln!(
            "[{node}] rectangle {rows}x{cols} -> {name} (profit {profit})"
        ),
        HistoryEntry::SingleRow {
            node,
            name,
            literal,
            shared_len,
            profit,
        } => eprintln!(
            "[{node}] single-row via '{literal}' (|d|={shared_len}) -> {name} (profit {profit})"
        ),
        HistoryEntry::EnumerationCapped { node, cap } => {
            eprintln!("[{node}] rectangle enumeration capped at {cap}")
        }
        HistoryEntry::Skip { node, reason } => eprintln!("[{node}] skipped: {reason}"),
    }
}
