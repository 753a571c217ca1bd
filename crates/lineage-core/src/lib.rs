//! # lineage-core
//!
//! Engine for the `lineage` gene-mutation query tool: an in-memory
//! functional graph of gene sequences (out-degree at most one on the
//! walked edge), a two-pass file loader with loose and strict
//! validation modes, and a fold-parameterized traversal answering
//! reachability, step-count, cumulative-cost and path queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use lineage_core::{GeneGraph, Mutation};
//! use lineage_core::{can_evolve, evolution_cost, evolution_steps};
//!
//! let mut graph = GeneGraph::new();
//! let a = graph.add_gene("AAA");
//! let b = graph.add_gene("BBB");
//! let c = graph.add_gene("CCC");
//! graph.add_mutation(a, Mutation::new(2, b));
//! graph.add_mutation(b, Mutation::new(3, c));
//!
//! assert!(can_evolve(&graph, a, c));
//! assert_eq!(evolution_steps(&graph, a, c), Some(2));
//! assert_eq!(evolution_cost(&graph, a, c), Some(5));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::traversal::{can_evolve, evolution_cost, evolution_path, evolution_steps};
pub use graph::{load_graph, Gene, GeneGraph, GeneId, LoadOptions, Mutation, ValidationMode};
