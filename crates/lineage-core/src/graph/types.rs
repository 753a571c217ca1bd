//! Graph types for the in-memory gene mutation graph.
//!
//! Genes live in a single load-ordered array owned by [`GeneGraph`];
//! mutations reference their target by stable index ([`GeneId`]) into
//! that array, never by pointer. Nothing in the store mutates after
//! loading, so traversal state lives entirely outside these types.

use crate::error::{Error, Result};

/// Stable index of a gene within its [`GeneGraph`].
///
/// Only the graph that produced a `GeneId` can resolve it; ids are
/// assigned densely in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneId(pub(crate) usize);

impl GeneId {
    /// Returns the position of this gene in load order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed mutation edge with an integer cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    cost: i64,
    target: GeneId,
}

impl Mutation {
    /// Creates a mutation with the given cost and target gene.
    #[must_use]
    pub fn new(cost: i64, target: GeneId) -> Self {
        Self { cost, target }
    }

    /// Returns the cost of following this mutation.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Returns the id of the gene this mutation produces.
    #[must_use]
    pub fn target(&self) -> GeneId {
        self.target
    }
}

/// A named node in the mutation graph.
///
/// Holds between zero and `K` outgoing mutations in file order; the
/// primary variant uses `K = 1` and traversal follows only the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    name: String,
    mutations: Vec<Mutation>,
}

impl Gene {
    /// Creates a gene with no mutations.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mutations: Vec::new(),
        }
    }

    /// Returns the sequence name of this gene.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all outgoing mutations in declaration order.
    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Returns the first outgoing mutation, the one a walk follows.
    #[must_use]
    pub fn primary_mutation(&self) -> Option<&Mutation> {
        self.mutations.first()
    }
}

/// The collection of all genes loaded from one file.
///
/// Owns every [`Gene`] exclusively; lookup is a linear scan, adequate
/// for the small graphs this tool handles.
#[derive(Debug, Default, Clone)]
pub struct GeneGraph {
    genes: Vec<Gene>,
}

impl GeneGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a gene and returns its stable id.
    ///
    /// Name uniqueness is a loader concern; the store does not check it.
    pub fn add_gene(&mut self, name: &str) -> GeneId {
        let id = GeneId(self.genes.len());
        self.genes.push(Gene::new(name));
        id
    }

    /// Attaches an outgoing mutation to `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` was not issued by this graph.
    pub fn add_mutation(&mut self, source: GeneId, mutation: Mutation) {
        self.genes[source.0].mutations.push(mutation);
    }

    /// Finds a gene by exact name, scanning in load order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<GeneId> {
        self.genes.iter().position(|g| g.name() == name).map(GeneId)
    }

    /// Finds a gene by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeneNotFound`] when no gene has that name.
    pub fn require(&self, name: &str) -> Result<GeneId> {
        self.find(name)
            .ok_or_else(|| Error::GeneNotFound(name.to_string()))
    }

    /// Returns the gene with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    #[must_use]
    pub fn gene(&self, id: GeneId) -> &Gene {
        &self.genes[id.0]
    }

    /// Returns the number of genes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true when the graph holds no genes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iterates genes in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Gene> {
        self.genes.iter()
    }
}
