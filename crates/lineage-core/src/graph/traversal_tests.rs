//! Tests for the fold-parameterized walk and the four queries.

use super::traversal::{can_evolve, evolution_cost, evolution_path, evolution_steps, walk};
use super::types::{GeneGraph, GeneId, Mutation};

/// Build a chain AAA -2-> BBB -3-> CCC -4-> DDD.
fn chain_graph() -> (GeneGraph, Vec<GeneId>) {
    let mut graph = GeneGraph::new();
    let ids: Vec<GeneId> = ["AAA", "BBB", "CCC", "DDD"]
        .iter()
        .map(|name| graph.add_gene(name))
        .collect();
    graph.add_mutation(ids[0], Mutation::new(2, ids[1]));
    graph.add_mutation(ids[1], Mutation::new(3, ids[2]));
    graph.add_mutation(ids[2], Mutation::new(4, ids[3]));
    (graph, ids)
}

/// Build a three-cycle X -1-> Y -1-> Z -1-> X plus an isolated W.
fn cycle_graph() -> (GeneGraph, Vec<GeneId>) {
    let mut graph = GeneGraph::new();
    let ids: Vec<GeneId> = ["X", "Y", "Z", "W"]
        .iter()
        .map(|name| graph.add_gene(name))
        .collect();
    graph.add_mutation(ids[0], Mutation::new(1, ids[1]));
    graph.add_mutation(ids[1], Mutation::new(1, ids[2]));
    graph.add_mutation(ids[2], Mutation::new(1, ids[0]));
    (graph, ids)
}

// ============================================================================
// Chain
// ============================================================================

#[test]
fn test_chain_reachability() {
    let (graph, ids) = chain_graph();
    assert!(can_evolve(&graph, ids[0], ids[3]));
    assert!(can_evolve(&graph, ids[1], ids[3]));
    assert!(!can_evolve(&graph, ids[3], ids[0]));
}

#[test]
fn test_chain_steps_and_cost() {
    let (graph, ids) = chain_graph();
    assert_eq!(evolution_steps(&graph, ids[0], ids[3]), Some(3));
    assert_eq!(evolution_steps(&graph, ids[2], ids[3]), Some(1));
    assert_eq!(evolution_cost(&graph, ids[0], ids[3]), Some(9));
    assert_eq!(evolution_cost(&graph, ids[1], ids[3]), Some(7));
}

#[test]
fn test_chain_path() {
    let (graph, ids) = chain_graph();
    assert_eq!(
        evolution_path(&graph, ids[0], ids[3]).as_deref(),
        Some("AAA -> BBB -> CCC -> DDD")
    );
}

#[test]
fn test_cost_saturates_instead_of_overflowing() {
    let mut graph = GeneGraph::new();
    let a = graph.add_gene("A");
    let b = graph.add_gene("B");
    let c = graph.add_gene("C");
    graph.add_mutation(a, Mutation::new(i64::MAX, b));
    graph.add_mutation(b, Mutation::new(i64::MAX, c));

    assert_eq!(evolution_cost(&graph, a, c), Some(i64::MAX));
}

#[test]
fn test_steps_match_path_separators() {
    let (graph, ids) = chain_graph();
    let steps = evolution_steps(&graph, ids[0], ids[3]).unwrap();
    let path = evolution_path(&graph, ids[0], ids[3]).unwrap();
    assert_eq!(path.matches(" -> ").count(), steps);
}

// ============================================================================
// Dead ends
// ============================================================================

#[test]
fn test_dead_end() {
    let mut graph = GeneGraph::new();
    let a = graph.add_gene("A");
    let b = graph.add_gene("B");
    graph.add_mutation(b, Mutation::new(5, a));

    assert!(can_evolve(&graph, b, a));
    assert!(!can_evolve(&graph, a, b));
    assert_eq!(evolution_steps(&graph, a, b), None);
    assert_eq!(evolution_cost(&graph, a, b), None);
    assert_eq!(evolution_path(&graph, a, b), None);
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_cycle_terminates_on_unreachable_target() {
    let (graph, ids) = cycle_graph();
    let (x, w) = (ids[0], ids[3]);

    assert!(!can_evolve(&graph, x, w));
    assert_eq!(evolution_steps(&graph, x, w), None);
    assert_eq!(evolution_cost(&graph, x, w), None);
    assert_eq!(evolution_path(&graph, x, w), None);
}

#[test]
fn test_cycle_reaches_members() {
    let (graph, ids) = cycle_graph();
    let (x, z) = (ids[0], ids[2]);

    assert!(can_evolve(&graph, x, z));
    assert_eq!(evolution_steps(&graph, x, z), Some(2));
    assert_eq!(evolution_path(&graph, x, z).as_deref(), Some("X -> Y -> Z"));
}

#[test]
fn test_source_equals_target_asymmetry() {
    let (graph, ids) = cycle_graph();
    let x = ids[0];

    // The numeric queries require traversing at least one edge; the
    // path query is reached in place.
    assert!(!can_evolve(&graph, x, x));
    assert_eq!(evolution_steps(&graph, x, x), None);
    assert_eq!(evolution_cost(&graph, x, x), None);
    assert_eq!(evolution_path(&graph, x, x).as_deref(), Some("X"));
}

#[test]
fn test_self_loop() {
    let mut graph = GeneGraph::new();
    let x = graph.add_gene("X");
    let y = graph.add_gene("Y");
    graph.add_mutation(x, Mutation::new(1, x));

    assert!(!can_evolve(&graph, x, x));
    assert_eq!(evolution_path(&graph, x, x).as_deref(), Some("X"));
    // The self loop never reaches Y and must still terminate.
    assert!(!can_evolve(&graph, x, y));
}

#[test]
fn test_two_node_cycle() {
    let mut graph = GeneGraph::new();
    let a = graph.add_gene("A");
    let b = graph.add_gene("B");
    let c = graph.add_gene("C");
    graph.add_mutation(a, Mutation::new(1, b));
    graph.add_mutation(b, Mutation::new(1, a));

    assert!(can_evolve(&graph, a, b));
    assert!(can_evolve(&graph, b, a));
    assert!(!can_evolve(&graph, a, c));
    assert_eq!(evolution_steps(&graph, a, c), None);
}

// ============================================================================
// Query independence
// ============================================================================

#[test]
fn test_queries_are_independent() {
    let (graph, ids) = cycle_graph();
    let (x, w) = (ids[0], ids[3]);

    // A failed walk leaves no state behind that could skew the next
    // query, in any order.
    assert!(!can_evolve(&graph, x, w));
    assert_eq!(evolution_steps(&graph, x, ids[2]), Some(2));
    assert!(!can_evolve(&graph, x, w));
    assert_eq!(evolution_steps(&graph, x, ids[2]), Some(2));
}

// ============================================================================
// Generic walk
// ============================================================================

#[test]
fn test_walk_folds_every_consumed_edge() {
    let (graph, ids) = chain_graph();
    let costs = walk(&graph, ids[0], ids[3], Vec::new(), |mut acc, step| {
        acc.push(step.mutation.cost());
        acc
    });
    assert_eq!(costs, Some(vec![2, 3, 4]));
}

#[test]
fn test_walk_discards_accumulator_on_no_path() {
    let (graph, ids) = cycle_graph();
    let folded = walk(&graph, ids[0], ids[3], 0u32, |acc, _| acc + 1);
    assert_eq!(folded, None);
}
