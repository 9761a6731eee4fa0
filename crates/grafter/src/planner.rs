//! Insertion planning over a module's top-level statement sequence.
//!
//! Both planners walk `ModModule::body` exactly once and either report the
//! request as already satisfied or name a single splice index. They never
//! mutate the tree themselves.

use log::debug;
use ruff_python_ast::ModModule;

use crate::{
    classifier::{self, StatementKind},
    future,
    matcher::{self, ImportRequest},
};

/// Outcome of a planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// The binding is already present; nothing to insert.
    AlreadySatisfied,
    /// Splice one new statement into the body at this index.
    InsertAt(usize),
}

/// Plan insertion of an ordinary import.
///
/// Only the leading contiguous run of import statements participates in
/// duplicate detection and placement. Imports buried after other code are
/// not an extension of that block: they neither suppress the insertion nor
/// pull it downward. New imports land just past the run, which also keeps
/// them after any `__future__` pragmas the run starts with.
pub fn plan_import(module: &ModModule, request: &ImportRequest) -> Plan {
    let body = &module.body;

    if let Some(run_start) = body.iter().position(classifier::is_import_stmt) {
        let mut run_len = 0;
        for stmt in body[run_start..]
            .iter()
            .take_while(|stmt| classifier::is_import_stmt(stmt))
        {
            if matcher::provides(stmt, request) {
                debug!("import already satisfied: {request:?}");
                return Plan::AlreadySatisfied;
            }
            run_len += 1;
        }
        return Plan::InsertAt(run_start + run_len);
    }

    // No imports at all: stay below a module docstring when present.
    if !body.is_empty() && classifier::classify(body, 0) == StatementKind::Docstring {
        return Plan::InsertAt(1);
    }
    Plan::InsertAt(0)
}

/// Plan insertion of a `from __future__ import symbol` pragma.
///
/// Pragmas live between the module docstring and the first ordinary
/// statement. The scan skips one leading docstring, then walks the pragma
/// run: a pragma already naming `symbol` ends the call as satisfied, and
/// the first non-pragma statement (or the end of the module) is the
/// insertion index.
pub fn plan_future(module: &ModModule, symbol: &str) -> Plan {
    let body = &module.body;

    let mut index = 0;
    if !body.is_empty() && classifier::classify(body, 0) == StatementKind::Docstring {
        index = 1;
    }
    while index < body.len() {
        match future::future_symbols(&body[index]) {
            Some(symbols) if symbols.contains(symbol) => {
                debug!("__future__ import of {symbol} already present");
                return Plan::AlreadySatisfied;
            }
            Some(_) => index += 1,
            None => break,
        }
    }
    Plan::InsertAt(index)
}
