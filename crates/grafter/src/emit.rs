//! Serialization bridge for mutated modules.
//!
//! Statements that came from the parser are copied out of the original
//! source text byte-for-byte, comments and blank lines included. Synthetic
//! statements inserted by the injector are rendered as single lines and
//! spliced in right after the line of the parsed statement they follow, so
//! trivia ahead of the next statement stays attached to it.

use ruff_python_ast::{Alias, ModModule, Stmt};
use ruff_text_size::Ranged;

use crate::ast_builder;

/// Re-serialize a mutated module against the source text it was parsed
/// from. With no synthetic statements in the body this returns the source
/// unchanged.
pub fn write_module(source: &str, module: &ModModule) -> String {
    // Splice offsets into `source`, ascending, paired with rendered lines
    // in body order.
    let mut edits: Vec<(usize, String)> = Vec::new();
    let mut insert_at = 0;

    for stmt in &module.body {
        if ast_builder::is_synthetic(stmt) {
            edits.push((insert_at, render_import(stmt)));
        } else {
            insert_at = next_line_start(source, usize::from(stmt.range().end()));
        }
    }

    let mut out = String::with_capacity(source.len() + 64);
    let mut cursor = 0;
    for (offset, line) in edits {
        out.push_str(&source[cursor..offset]);
        // A splice at end of file may need to finish the last line first.
        if offset == source.len() && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');
        cursor = offset;
    }
    out.push_str(&source[cursor..]);
    out
}

/// Offset of the first character after the line containing `end`. Skips
/// past any trailing comment on that line.
fn next_line_start(source: &str, end: usize) -> usize {
    source[end..]
        .find('\n')
        .map_or(source.len(), |pos| end + pos + 1)
}

/// Render a synthetic import statement as one line of Python.
///
/// # Panics
///
/// Panics when handed a synthetic statement of any other shape; the
/// injector only ever creates the two import forms.
fn render_import(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Import(import) => {
            let names: Vec<String> = import.names.iter().map(render_alias).collect();
            format!("import {}", names.join(", "))
        }
        Stmt::ImportFrom(import_from) => {
            let names: Vec<String> = import_from.names.iter().map(render_alias).collect();
            let dots = ".".repeat(import_from.level as usize);
            let module = import_from.module.as_ref().map_or("", |m| m.as_str());
            format!("from {dots}{module} import {}", names.join(", "))
        }
        _ => panic!("synthetic statement is not an import"),
    }
}

fn render_alias(alias: &Alias) -> String {
    match &alias.asname {
        Some(asname) => format!("{} as {}", alias.name.as_str(), asname.as_str()),
        None => alias.name.as_str().to_owned(),
    }
}
