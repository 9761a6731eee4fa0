//! Classification of top-level statements.
//!
//! The planner only needs to tell four shapes apart: the module docstring,
//! the two import forms, and everything else. Classification is a pure
//! query; no statement is ever modified here.

use ruff_python_ast::{Stmt, helpers::is_docstring_stmt};

/// The reserved compatibility package whose imports act as pragmas.
pub const FUTURE_MODULE: &str = "__future__";

/// Closed classification of one top-level statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// A string-literal expression statement in the module's first slot.
    Docstring,
    /// `import a`, `import a.b as c`, possibly comma-separated.
    Import,
    /// `from pkg import name`, including star and `as` forms.
    FromImport,
    /// Anything else.
    Other,
}

/// Classify the statement at `index` within a module body.
///
/// A string literal only counts as a docstring in the first slot; the same
/// statement anywhere else is [`StatementKind::Other`].
pub fn classify(body: &[Stmt], index: usize) -> StatementKind {
    match &body[index] {
        Stmt::Import(_) => StatementKind::Import,
        Stmt::ImportFrom(_) => StatementKind::FromImport,
        stmt if index == 0 && is_docstring_stmt(stmt) => StatementKind::Docstring,
        _ => StatementKind::Other,
    }
}

/// Whether a statement is an import of either shape.
pub fn is_import_stmt(stmt: &Stmt) -> bool {
    matches!(stmt, Stmt::Import(_) | Stmt::ImportFrom(_))
}

/// Whether a statement is a `__future__` pragma import.
///
/// Relative forms (`from .__future__ import ...`) name a different module
/// and are never pragmas.
pub fn is_future_import(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::ImportFrom(import_from) => {
            import_from.level == 0
                && import_from
                    .module
                    .as_ref()
                    .is_some_and(|module| module.as_str() == FUTURE_MODULE)
        }
        _ => false,
    }
}
