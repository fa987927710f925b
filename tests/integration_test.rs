//! Black-box tests over the public synthesis pipeline (§10.5), grounded on
//! the teacher's `tests/integration_test.rs` convention of exercising the
//! crate purely through its public API.

use algebraic_factor::parser::parse_sop;
use algebraic_factor::{synthesize, synthesize_with_config, SynthesisConfig};

#[test]
fn parses_factors_and_prints_a_round_trip() {
    let input = parse_sop("ab + ac + ad").unwrap();
    let network = synthesize(&input);

    assert!(network.validate().is_ok());
    assert_eq!(network.expand(), input);
    assert!(network.total_literals() < input.literal_count());

    let printed = network.to_string();
    assert!(printed.contains("F ="));
}

#[test]
fn printed_network_round_trips_through_the_parser_when_trivial() {
    // No common structure: network is trivial, and its printed root is
    // exactly the printed input (§8 property 5, the non-factoring case).
    let input = parse_sop("ab + cd").unwrap();
    let network = synthesize(&input);

    assert!(network.defs.is_empty());
    let printed = network.to_string();
    let reparsed = parse_sop(printed.trim_start_matches("F = ").trim()).unwrap();
    assert_eq!(reparsed, input);
}

#[test]
fn two_rectangle_candidate_expression_factors_into_an_acyclic_equivalent_network() {
    let input = parse_sop("ab + ac + bd + cd").unwrap();
    let network = synthesize(&input);

    assert!(network.validate().is_ok());
    assert_eq!(network.expand(), input);
    assert!(network.total_literals() <= input.literal_count());
}

#[test]
fn wide_shared_structure_factors_into_an_acyclic_equivalent_network() {
    let input = parse_sop(
        "h + bfg + dfa + dfb + dfc + efa + efb + efc + dg + ge",
    )
    .unwrap();
    let network = synthesize(&input);

    assert!(network.validate().is_ok());
    assert_eq!(network.expand(), input);
    assert!(network.total_literals() <= input.literal_count());
}

#[test]
fn level0_only_configuration_still_produces_an_equivalent_network() {
    let input = parse_sop("ab + ac + bd + cd").unwrap();
    let config = SynthesisConfig {
        rectangle_cap: 10_000,
        all_kernels: false,
    };
    let (network, _history) = synthesize_with_config(&input, config);

    assert!(network.validate().is_ok());
    assert_eq!(network.expand(), input);
}

#[test]
fn a_tight_rectangle_cap_still_produces_an_equivalent_network_and_logs_capping() {
    let input = parse_sop(
        "h + bfg + dfa + dfb + dfc + efa + efb + efc + dg + ge",
    )
    .unwrap();
    let config = SynthesisConfig {
        rectangle_cap: 1,
        all_kernels: true,
    };
    let (network, _history) = synthesize_with_config(&input, config);

    assert!(network.validate().is_ok());
    assert_eq!(network.expand(), input);
}

#[test]
fn single_literal_input_is_left_as_a_trivial_network() {
    let input = parse_sop("a").unwrap();
    let network = synthesize(&input);

    assert!(network.defs.is_empty());
    assert_eq!(network.root, input);
}

#[test]
fn malformed_expressions_are_rejected_before_synthesis_ever_runs() {
    assert!(parse_sop("a ++ b").is_err());
    assert!(parse_sop("").is_err());
}
