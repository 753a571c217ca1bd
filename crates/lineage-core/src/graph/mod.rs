//! In-memory gene mutation graph: store, two-pass loader, traversal.
//!
//! # Example
//!
//! ```rust
//! use lineage_core::graph::{GeneGraph, Mutation};
//! use lineage_core::graph::traversal::{can_evolve, evolution_path};
//!
//! let mut graph = GeneGraph::new();
//! let a = graph.add_gene("AAA");
//! let b = graph.add_gene("BBB");
//! graph.add_mutation(a, Mutation::new(2, b));
//!
//! assert!(can_evolve(&graph, a, b));
//! assert_eq!(evolution_path(&graph, a, b).as_deref(), Some("AAA -> BBB"));
//! ```

pub mod loader;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use loader::{load_graph, LoadOptions, ValidationMode};
pub use types::{Gene, GeneGraph, GeneId, Mutation};
