//! REPL command handlers.
//!
//! Each command is a separate function; `dispatch` routes the command
//! token for the active variant. Handlers read their arguments from
//! the shared token stream, write the exact response templates to the
//! output, and terminate every response with a blank line.

use std::io::{self, BufRead, Write};

use lineage_core::{
    can_evolve, evolution_cost, evolution_path, evolution_steps, GeneGraph, GeneId,
};

use crate::repl::{Tokens, Variant};

/// Result of a command execution.
pub enum CommandResult {
    /// Keep prompting.
    Continue,
    /// End the loop (end of input while reading arguments).
    Quit,
}

/// Routes one command token to its handler.
///
/// Unknown tokens are reported and consume no further input.
pub fn dispatch<R: BufRead, W: Write>(
    graph: &GeneGraph,
    variant: Variant,
    command: &str,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    match (variant, command) {
        (Variant::Primary, "e") => cmd_evolve(graph, tokens, out),
        (Variant::Primary, "es") => cmd_steps(graph, tokens, out),
        (Variant::Primary, "ene") => cmd_cost(graph, tokens, out),
        (Variant::Primary, "path") => cmd_path(graph, tokens, out),
        (Variant::Strict, "p") => cmd_print(graph, out),
        (Variant::Strict, "m") => cmd_mutate(graph, tokens, out),
        (Variant::Strict, "me") => cmd_mutate_energy(graph, tokens, out),
        _ => {
            writeln!(out, "{command} not recognized.")?;
            writeln!(out)?;
            Ok(CommandResult::Continue)
        }
    }
}

/// Looks up a gene by name, reporting a not-found message on miss.
fn resolve<W: Write>(graph: &GeneGraph, name: &str, out: &mut W) -> io::Result<Option<GeneId>> {
    match graph.require(name) {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(out, "Gene '{name}' not found.")?;
            writeln!(out)?;
            Ok(None)
        }
    }
}

fn cmd_evolve<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    if can_evolve(graph, src, tgt) {
        writeln!(out, "{src_name} can evolve into {tgt_name}")?;
    } else {
        writeln!(out, "{src_name} cannot evolve into {tgt_name}")?;
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

fn cmd_steps<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    // No path projects to -1; the walk never returns a sentinel.
    let steps = evolution_steps(graph, src, tgt)
        .map_or_else(|| "-1".to_string(), |n| n.to_string());
    writeln!(
        out,
        "It will take {steps} evolutionary steps to get from {src_name} to {tgt_name}"
    )?;
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

fn cmd_cost<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(budget_token) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };

    let Ok(budget) = budget_token.parse::<i64>() else {
        writeln!(out, "'{budget_token}' is not a valid cost.")?;
        writeln!(out)?;
        return Ok(CommandResult::Continue);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    // Equality passes; no path exceeds any finite budget.
    let within = evolution_cost(graph, src, tgt).is_some_and(|total| total <= budget);
    if within {
        writeln!(
            out,
            "{src_name} can evolve into {tgt_name} with at most {budget} evolutionary cost"
        )?;
    } else {
        writeln!(
            out,
            "{src_name} cannot evolve into {tgt_name} with at most {budget} evolutionary cost"
        )?;
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

fn cmd_path<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    match evolution_path(graph, src, tgt) {
        Some(path) => writeln!(out, "{path}")?,
        None => writeln!(out, "There is no path from {src_name} to {tgt_name}")?,
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

/// Dumps every gene and its mutations in load order.
fn cmd_print<W: Write>(graph: &GeneGraph, out: &mut W) -> io::Result<CommandResult> {
    for gene in graph.iter() {
        writeln!(out, "== {} ==", gene.name())?;
        writeln!(out, "Mutations:")?;
        if gene.mutations().is_empty() {
            writeln!(out, "None")?;
            continue;
        }
        for mutation in gene.mutations() {
            writeln!(
                out,
                "{} - Cost: {}",
                graph.gene(mutation.target()).name(),
                mutation.cost()
            )?;
        }
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

fn cmd_mutate<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    if direct_mutation(graph, src, tgt).is_some() {
        writeln!(out, "{src_name} can mutate into {tgt_name}")?;
    } else {
        writeln!(out, "{src_name} cannot mutate into {tgt_name}")?;
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

fn cmd_mutate_energy<R: BufRead, W: Write>(
    graph: &GeneGraph,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<CommandResult> {
    let Some(src_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(tgt_name) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };
    let Some(resources_token) = tokens.next_token()? else {
        return Ok(CommandResult::Quit);
    };

    let Ok(resources) = resources_token.parse::<i64>() else {
        writeln!(out, "'{resources_token}' is not a valid cost.")?;
        writeln!(out)?;
        return Ok(CommandResult::Continue);
    };
    let Some(src) = resolve(graph, &src_name, out)? else {
        return Ok(CommandResult::Continue);
    };
    let Some(tgt) = resolve(graph, &tgt_name, out)? else {
        return Ok(CommandResult::Continue);
    };

    // The echoed number is the user-supplied resource amount, not the
    // mutation's own cost.
    match direct_mutation(graph, src, tgt) {
        Some(cost) if cost <= resources => {
            writeln!(
                out,
                "{src_name} can mutate into {tgt_name} with evolutionary cost {resources}"
            )?;
        }
        Some(_) => {
            writeln!(
                out,
                "{src_name} can mutate into {tgt_name} but not with evolutionary cost {resources}"
            )?;
        }
        None => {
            writeln!(out, "{src_name} cannot mutate into {tgt_name}")?;
        }
    }
    writeln!(out)?;
    Ok(CommandResult::Continue)
}

/// Cost of the first mutation of `src` that produces `tgt`, if one
/// exists.
fn direct_mutation(graph: &GeneGraph, src: GeneId, tgt: GeneId) -> Option<i64> {
    graph
        .gene(src)
        .mutations()
        .iter()
        .find(|m| m.target() == tgt)
        .map(lineage_core::Mutation::cost)
}
