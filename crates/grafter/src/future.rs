//! Extraction of `__future__` feature names from pragma imports.

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use ruff_python_ast::Stmt;
use rustc_hash::FxHasher;

use crate::classifier;

/// Type alias for IndexSet with FxHasher for better performance
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// If `stmt` is a `__future__` import, the feature names it introduces.
///
/// The original feature name is what counts: `division as d` still turns on
/// `division`. Returns `None` for anything that is not a pragma import.
///
/// # Panics
///
/// Panics on a star form inside a recognized pragma. `from __future__
/// import *` cannot introduce nameable features and is rejected by the
/// Python compiler, so encountering one is a caller contract violation
/// rather than a recoverable state.
pub fn future_symbols(stmt: &Stmt) -> Option<FxIndexSet<String>> {
    match stmt {
        Stmt::ImportFrom(import_from) if classifier::is_future_import(stmt) => {
            let mut symbols = FxIndexSet::default();
            for alias in &import_from.names {
                let name = alias.name.as_str();
                assert!(name != "*", "malformed __future__ import: star form");
                symbols.insert(name.to_owned());
            }
            Some(symbols)
        }
        _ => None,
    }
}
