//! Public entry points: ensure an import or pragma exists in a module.
//!
//! Each entry point runs one planning pass and, when the plan calls for it,
//! splices one synthetic statement into the body. Existing statements are
//! never modified or reordered, so a second identical call always plans
//! out to a no-op.

use log::debug;
use ruff_python_ast::{ModModule, Stmt};

use crate::{
    ast_builder,
    matcher::ImportRequest,
    planner::{self, Plan},
};

/// The pragma that guards injected imports in `ensure_import_with_compat`.
const COMPAT_SYMBOL: &str = "absolute_import";

/// Insert `import name` (or `from package import name` when `package` is
/// given) unless an equivalent binding already exists in the module's
/// leading import block.
pub fn ensure_import(module: &mut ModModule, package: Option<&str>, name: &str) {
    let request = match package {
        Some(package) => ImportRequest::qualified(package, name),
        None => ImportRequest::plain(name),
    };
    match planner::plan_import(module, &request) {
        Plan::AlreadySatisfied => {}
        Plan::InsertAt(index) => {
            let stmt = match package {
                Some(package) => ast_builder::from_import(package, name),
                None => ast_builder::import(name),
            };
            splice(module, index, stmt);
        }
    }
}

/// Insert `from __future__ import symbol` after the module docstring and
/// before the first non-pragma statement, deduplicated against pragmas
/// already present.
pub fn ensure_future_symbol(module: &mut ModModule, symbol: &str) {
    match planner::plan_future(module, symbol) {
        Plan::AlreadySatisfied => {}
        Plan::InsertAt(index) => splice(module, index, ast_builder::future_import(symbol)),
    }
}

/// Ensure the `absolute_import` compatibility pragma, then the requested
/// import. The pragma is established first so it always precedes the
/// import it guards.
pub fn ensure_import_with_compat(module: &mut ModModule, package: Option<&str>, name: &str) {
    ensure_future_symbol(module, COMPAT_SYMBOL);
    ensure_import(module, package, name);
}

/// Splice a new top-level statement into the body; `index == body.len()`
/// appends.
fn splice(module: &mut ModModule, index: usize, stmt: Stmt) {
    debug_assert!(index <= module.body.len());
    debug!("inserting synthetic import at index {index}");
    module.body.insert(index, stmt);
}
