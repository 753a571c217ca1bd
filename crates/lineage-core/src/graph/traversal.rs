//! Fold-parameterized traversal over the functional mutation graph.
//!
//! Every gene has at most one successor the walk follows, so a walk
//! from a source either reaches the target, runs into a dead end, or
//! re-enters a node it has already left, which is a cycle. The generic
//! [`walk`] handles all three; the four query functions differ only in
//! the fold they accumulate along the way.
//!
//! Cycle detection uses a visited set local to each call, so queries
//! are independent by construction and no per-node state survives a
//! query.

use std::collections::HashSet;

use super::types::{Gene, GeneGraph, GeneId, Mutation};

/// One consumed edge during a walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkStep<'a> {
    /// Gene the edge leaves from.
    pub from: &'a Gene,
    /// The mutation being followed.
    pub mutation: &'a Mutation,
    /// Gene the edge arrives at.
    pub to: &'a Gene,
}

/// Walks from `src` toward `tgt`, folding every consumed edge into the
/// accumulator. Returns `Some(acc)` when the walk reaches `tgt`
/// (inclusive of the final edge), `None` on a dead end or cycle.
///
/// Target identity is compared by name. The walk follows only each
/// gene's primary mutation and always consumes at least one edge; the
/// `src == tgt` special cases live in the query functions.
pub fn walk<A, F>(graph: &GeneGraph, src: GeneId, tgt: GeneId, init: A, mut fold: F) -> Option<A>
where
    F: FnMut(A, WalkStep<'_>) -> A,
{
    let target_name = graph.gene(tgt).name();
    let mut visited: HashSet<GeneId> = HashSet::new();
    let mut acc = init;
    let mut current = src;

    loop {
        let gene = graph.gene(current);
        let Some(mutation) = gene.primary_mutation() else {
            return None; // dead end
        };
        let next = graph.gene(mutation.target());

        acc = fold(
            acc,
            WalkStep {
                from: gene,
                mutation,
                to: next,
            },
        );
        if next.name() == target_name {
            return Some(acc);
        }
        if !visited.insert(current) {
            return None; // cycle
        }
        current = mutation.target();
    }
}

/// True when `tgt` is reachable from `src` over at least one edge.
///
/// `src == tgt` is not reached: reachability requires traversing an
/// edge, even when the graph loops back to the source.
#[must_use]
pub fn can_evolve(graph: &GeneGraph, src: GeneId, tgt: GeneId) -> bool {
    if graph.gene(src).name() == graph.gene(tgt).name() {
        return false;
    }
    walk(graph, src, tgt, (), |(), _| ()).is_some()
}

/// Number of edges on the walk from `src` to `tgt`, or `None` when no
/// path exists. `src == tgt` counts as no path.
#[must_use]
pub fn evolution_steps(graph: &GeneGraph, src: GeneId, tgt: GeneId) -> Option<usize> {
    if graph.gene(src).name() == graph.gene(tgt).name() {
        return None;
    }
    walk(graph, src, tgt, 0, |acc, _| acc + 1)
}

/// Sum of mutation costs along the walk from `src` to `tgt`, or `None`
/// when no path exists. `src == tgt` counts as no path. The sum
/// saturates at the `i64` bounds; loose-mode files may carry arbitrary
/// costs.
#[must_use]
pub fn evolution_cost(graph: &GeneGraph, src: GeneId, tgt: GeneId) -> Option<i64> {
    if graph.gene(src).name() == graph.gene(tgt).name() {
        return None;
    }
    walk(graph, src, tgt, 0i64, |acc, step| {
        acc.saturating_add(step.mutation.cost())
    })
}

/// Gene names along the walk joined by ` -> `, or `None` when no path
/// exists. Unlike the numeric queries, `src == tgt` is reached in
/// place and yields just the gene's name.
#[must_use]
pub fn evolution_path(graph: &GeneGraph, src: GeneId, tgt: GeneId) -> Option<String> {
    let source = graph.gene(src);
    if source.name() == graph.gene(tgt).name() {
        return Some(source.name().to_string());
    }
    walk(graph, src, tgt, source.name().to_string(), |mut acc, step| {
        acc.push_str(" -> ");
        acc.push_str(step.to.name());
        acc
    })
}
