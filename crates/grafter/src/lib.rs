//! Import injection and `__future__` normalization for Python syntax trees.
//!
//! Given a module tree produced by an external parser, this crate decides
//! whether a requested import binding already exists among the module's
//! top-level statements, computes the correct insertion point for a new
//! import statement, and keeps `__future__` pragma imports deduplicated and
//! ordered before ordinary imports. Every entry point is a single
//! synchronous pass over the top-level statement list and is idempotent:
//! repeating a call with the same arguments leaves the tree unchanged.
//!
//! Parsing and file I/O stay with the caller; the engine consumes and
//! mutates an already-built [`ruff_python_ast::ModModule`] in place.

pub mod ast_builder;
pub mod classifier;
pub mod emit;
pub mod future;
pub mod injector;
pub mod matcher;
pub mod planner;

pub use emit::write_module;
pub use injector::{ensure_future_symbol, ensure_import, ensure_import_with_compat};
pub use matcher::ImportRequest;

/// Crate version, re-exported for embedding tools.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
