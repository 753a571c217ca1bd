//! Error types for lineage-core.

use thiserror::Error;

/// Errors raised while loading or querying a gene graph.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (file open, read, rewind).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended while more tokens were expected.
    #[error("unexpected end of file: expected {0}")]
    UnexpectedEof(&'static str),

    /// A token could not be parsed as the expected kind of value.
    #[error("invalid token '{token}': expected {expected}")]
    InvalidToken {
        /// The offending token as read from the file.
        token: String,
        /// What the loader was trying to read.
        expected: &'static str,
    },

    /// A gene name violates the strict naming rule (1-4 chars over {A,G,C,T}).
    #[error("invalid gene name '{0}': expected 1-4 characters from {{A, G, C, T}}")]
    InvalidGeneName(String),

    /// A gene declares more mutations than the variant allows.
    #[error("gene '{gene}' declares {count} mutations, at most {max} allowed")]
    MutationCountOutOfRange {
        /// Name of the offending gene.
        gene: String,
        /// Declared mutation count.
        count: usize,
        /// Maximum allowed by the active variant.
        max: usize,
    },

    /// A mutation carries a negative cost.
    #[error("gene '{gene}' has a mutation with negative cost {cost}")]
    NegativeCost {
        /// Name of the source gene.
        gene: String,
        /// The offending cost value.
        cost: i64,
    },

    /// The same gene name is declared twice.
    #[error("duplicate gene name '{0}'")]
    DuplicateGene(String),

    /// The number of node lines does not match the declared count.
    #[error("declared {declared} gene lines but found {actual}")]
    LineCountMismatch {
        /// Count from the first line of the file.
        declared: usize,
        /// Newline-terminated node lines actually present.
        actual: usize,
    },

    /// A mutation targets a name not declared anywhere in the file.
    #[error("gene '{gene}' mutates into unknown gene '{target}'")]
    UnknownTarget {
        /// Name of the source gene.
        gene: String,
        /// The unresolved target name.
        target: String,
    },

    /// A queried gene name is not present in the graph.
    #[error("gene '{0}' not found")]
    GeneNotFound(String),
}

impl Error {
    /// True for errors that mean the file content is malformed, as
    /// opposed to IO failures or query-time lookups. The strict CLI
    /// variant maps these onto its fixed-message exit path.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::GeneNotFound(_))
    }
}

/// Result type alias for lineage operations.
pub type Result<T> = std::result::Result<T, Error>;
