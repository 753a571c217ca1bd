//! Two-pass file loader for gene mutation graphs.
//!
//! The file format declares the node count on line 1 and one node per
//! line thereafter: `<name> <k> [<target> <cost>]*k`. An edge may
//! target a gene declared on a later line, so a single pass cannot
//! resolve references. Pass 1 materializes every gene by name, fixing
//! the name-to-id mapping; pass 2 rewinds the file and resolves each
//! `(target, cost)` pair against it.
//!
//! One loader serves both variants of the tool. [`ValidationMode::Loose`]
//! assumes well-formed input beyond what parsing itself requires;
//! [`ValidationMode::Strict`] additionally enforces the naming alphabet,
//! cost sign, duplicate and line-count rules.

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};

use super::types::{GeneGraph, GeneId, Mutation};

/// How much of the file format the loader enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Parse only; trust the file to satisfy the format invariants.
    Loose,
    /// Reject any violation of the strict format rules.
    Strict,
}

/// Loader configuration: validation mode and per-gene mutation bound.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    mode: ValidationMode,
    max_mutations: usize,
}

impl LoadOptions {
    /// Options for the primary variant: loose validation, one mutation
    /// per gene.
    #[must_use]
    pub fn loose() -> Self {
        Self {
            mode: ValidationMode::Loose,
            max_mutations: 1,
        }
    }

    /// Options for the strict variant: full validation, up to five
    /// mutations per gene.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            max_mutations: 5,
        }
    }

    /// Returns the active validation mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Returns the maximum number of mutations a gene may declare.
    #[must_use]
    pub fn max_mutations(&self) -> usize {
        self.max_mutations
    }
}

/// Loads a gene graph from `path` with the given options.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be opened or read, and a
/// malformed-file error (see [`Error::is_malformed`]) when the content
/// violates the rules the active [`ValidationMode`] enforces.
pub fn load_graph<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<GeneGraph> {
    let path = path.as_ref();

    if options.mode == ValidationMode::Strict {
        check_line_count(path)?;
    }

    let mut file = File::open(path)?;

    let mut graph = read_nodes(Tokens::new(BufReader::new(&file)), options)?;
    file.seek(SeekFrom::Start(0))?;
    read_edges(&mut graph, Tokens::new(BufReader::new(&file)), options)?;

    tracing::debug!(
        genes = graph.len(),
        mode = ?options.mode,
        "gene graph loaded"
    );
    Ok(graph)
}

/// Pass 1: read the declared count and every gene name, consuming and
/// discarding the edge fields of each line.
fn read_nodes<R: BufRead>(mut tokens: Tokens<R>, options: LoadOptions) -> Result<GeneGraph> {
    let count = tokens.expect_usize("gene count")?;
    let mut graph = GeneGraph::new();

    for _ in 0..count {
        let name = tokens.expect("gene name")?;
        if options.mode == ValidationMode::Strict && !is_valid_name(&name) {
            return Err(Error::InvalidGeneName(name));
        }

        let mutation_count = tokens.expect_usize("mutation count")?;
        if mutation_count > options.max_mutations {
            return Err(Error::MutationCountOutOfRange {
                gene: name,
                count: mutation_count,
                max: options.max_mutations,
            });
        }
        for _ in 0..mutation_count {
            tokens.expect("mutation target")?;
            tokens.expect("mutation cost")?;
        }

        graph.add_gene(&name);
    }

    if options.mode == ValidationMode::Strict {
        check_duplicates(&graph)?;
    }

    Ok(graph)
}

/// Pass 2: re-read the file and resolve every `(target, cost)` pair by
/// name against the graph built in pass 1.
fn read_edges<R: BufRead>(
    graph: &mut GeneGraph,
    mut tokens: Tokens<R>,
    options: LoadOptions,
) -> Result<()> {
    let count = tokens.expect_usize("gene count")?;

    for index in 0..count {
        let name = tokens.expect("gene name")?;
        let mutation_count = tokens.expect_usize("mutation count")?;

        for _ in 0..mutation_count {
            let target_name = tokens.expect("mutation target")?;
            let cost = tokens.expect_i64("mutation cost")?;
            if options.mode == ValidationMode::Strict && cost < 0 {
                return Err(Error::NegativeCost { gene: name, cost });
            }

            let Some(target) = graph.find(&target_name) else {
                return Err(Error::UnknownTarget {
                    gene: name,
                    target: target_name,
                });
            };
            graph.add_mutation(GeneId(index), Mutation::new(cost, target));
        }
    }

    Ok(())
}

/// Strict rule: the number of newline-terminated lines after the first
/// must equal the declared gene count.
fn check_line_count(path: &Path) -> Result<()> {
    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;

    // Stream extraction reads one token for the count; anything else
    // on the first line belongs to the first node.
    let first_token = content.split_whitespace().next().unwrap_or("");
    let declared: usize = first_token.parse().map_err(|_| Error::InvalidToken {
        token: first_token.to_string(),
        expected: "gene count",
    })?;

    let body = content.find('\n').map_or("", |i| &content[i + 1..]);
    let actual = body.matches('\n').count();
    if actual != declared {
        return Err(Error::LineCountMismatch { declared, actual });
    }
    Ok(())
}

/// Strict rule: 1-4 characters, all from the {A, G, C, T} alphabet.
fn is_valid_name(name: &str) -> bool {
    (1..=4).contains(&name.len()) && name.chars().all(|c| matches!(c, 'A' | 'G' | 'C' | 'T'))
}

/// Strict rule: no gene name appears twice. Quadratic scan, adequate
/// for the small graphs this format carries.
fn check_duplicates(graph: &GeneGraph) -> Result<()> {
    for (i, gene) in graph.iter().enumerate() {
        if graph
            .iter()
            .skip(i + 1)
            .any(|other| other.name() == gene.name())
        {
            return Err(Error::DuplicateGene(gene.name().to_string()));
        }
    }
    Ok(())
}

/// Whitespace-delimited token reader over a buffered stream. Tokens
/// may span line boundaries, matching stream extraction in the file
/// format definition.
struct Tokens<R> {
    reader: R,
    buffered: Vec<String>,
    next: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffered: Vec::new(),
            next: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if self.next < self.buffered.len() {
                let token = std::mem::take(&mut self.buffered[self.next]);
                self.next += 1;
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.buffered = line.split_whitespace().map(str::to_string).collect();
            self.next = 0;
        }
    }

    fn expect(&mut self, what: &'static str) -> Result<String> {
        self.next_token()?.ok_or(Error::UnexpectedEof(what))
    }

    fn expect_usize(&mut self, what: &'static str) -> Result<usize> {
        let token = self.expect(what)?;
        token.parse().map_err(|_| Error::InvalidToken {
            token,
            expected: what,
        })
    }

    fn expect_i64(&mut self, what: &'static str) -> Result<i64> {
        let token = self.expect(what)?;
        token.parse().map_err(|_| Error::InvalidToken {
            token,
            expected: what,
        })
    }
}
