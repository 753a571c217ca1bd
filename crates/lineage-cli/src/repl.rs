//! Interactive query loop over a loaded gene graph.
//!
//! The protocol is token-oriented: the prompt is printed once per
//! command, the command itself is one whitespace-delimited token, and
//! each command reads its remaining arguments as further tokens from
//! the same stream, so arguments may span line boundaries. Every
//! command's output ends with a blank line before the next prompt.

use std::io::{self, BufRead, Write};

use lineage_core::GeneGraph;

use crate::commands::{self, CommandResult};

/// Which command set the dispatcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Traversal queries: `e`, `es`, `ene`, `path`.
    Primary,
    /// Print/explore and direct-mutation queries: `p`, `m`, `me`.
    Strict,
}

/// Whitespace-delimited token reader over a buffered input stream.
pub struct Tokens<R> {
    reader: R,
    buffered: Vec<String>,
    next: usize,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffered: Vec::new(),
            next: 0,
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
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
}

/// Runs the prompt/dispatch loop until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    graph: &GeneGraph,
    variant: Variant,
    input: R,
    mut out: W,
) -> io::Result<()> {
    let mut tokens = Tokens::new(input);

    loop {
        write!(out, "Enter a query: ")?;
        out.flush()?;

        let Some(command) = tokens.next_token()? else {
            break;
        };
        if command == "q" {
            break;
        }

        tracing::debug!(command = %command, "dispatching query");
        match commands::dispatch(graph, variant, &command, &mut tokens, &mut out)? {
            CommandResult::Continue => {}
            CommandResult::Quit => break,
        }
    }

    Ok(())
}
