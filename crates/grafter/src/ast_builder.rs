//! Factory functions for synthetic import statements.
//!
//! Nodes created here never originate from source text; they carry default
//! ranges and dummy node indices so later passes can tell them apart from
//! parsed statements.

use ruff_python_ast::{Alias, AtomicNodeIndex, Identifier, Stmt, StmtImport, StmtImportFrom};
use ruff_text_size::{Ranged, TextRange};

use crate::classifier::FUTURE_MODULE;

/// Create a synthetic range for generated nodes
fn synthetic_range() -> TextRange {
    TextRange::default()
}

fn alias(name: &str) -> Alias {
    Alias {
        name: Identifier::new(name, synthetic_range()),
        asname: None,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    }
}

/// Create an import statement: `import module_name`
pub fn import(module_name: &str) -> Stmt {
    Stmt::Import(StmtImport {
        names: vec![alias(module_name)],
        is_lazy: false,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    })
}

/// Create a from import statement: `from module import name`
pub fn from_import(module: &str, name: &str) -> Stmt {
    Stmt::ImportFrom(StmtImportFrom {
        module: Some(Identifier::new(module, synthetic_range())),
        names: vec![alias(name)],
        level: 0,
        is_lazy: false,
        range: synthetic_range(),
        node_index: AtomicNodeIndex::NONE,
    })
}

/// Create a pragma import: `from __future__ import symbol`
pub fn future_import(symbol: &str) -> Stmt {
    from_import(FUTURE_MODULE, symbol)
}

/// Whether a statement was produced by this factory rather than the parser.
pub fn is_synthetic(stmt: &Stmt) -> bool {
    stmt.range() == TextRange::default()
}
