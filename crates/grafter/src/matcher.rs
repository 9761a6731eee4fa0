//! Binding matcher: does an existing import statement already provide a
//! requested binding?
//!
//! The matcher is deliberately conservative. An import shape it does not
//! recognize never satisfies a request, so the worst outcome of a miss is a
//! redundant-looking extra import line, never a silently absent one.

use ruff_python_ast::{Alias, Stmt, StmtImport, StmtImportFrom};

/// What the caller wants imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// Source package for a `from package import name` request; `None`
    /// requests a plain `import name`.
    pub package: Option<String>,
    /// The name the import must bind.
    pub name: String,
}

impl ImportRequest {
    /// Request a plain `import name`.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            package: None,
            name: name.into(),
        }
    }

    /// Request `from package import name`.
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            name: name.into(),
        }
    }
}

/// Whether `stmt` already provides the requested binding.
pub fn provides(stmt: &Stmt, request: &ImportRequest) -> bool {
    match (stmt, request.package.as_deref()) {
        (Stmt::Import(import), None) => plain_import_binds(import, &request.name),
        (Stmt::ImportFrom(import_from), Some(package)) => {
            from_import_binds(import_from, package, &request.name)
        }
        // A from-import never answers an unqualified request and a plain
        // import never answers a qualified one.
        _ => false,
    }
}

fn plain_import_binds(import: &StmtImport, name: &str) -> bool {
    import.names.iter().any(|alias| bound_name(alias) == name)
}

/// The name an alias introduces, as written: the `as` target when present,
/// otherwise the (possibly dotted) module path itself.
fn bound_name(alias: &Alias) -> &str {
    alias
        .asname
        .as_ref()
        .unwrap_or(&alias.name)
        .as_str()
}

fn from_import_binds(import_from: &StmtImportFrom, package: &str, name: &str) -> bool {
    if import_from.level != 0 {
        return false;
    }
    let Some(module) = import_from.module.as_ref() else {
        return false;
    };
    if module.as_str() != package {
        return false;
    }
    match import_from.names.as_slice() {
        // A star import is assumed to cover any requested name.
        [single] if single.name.as_str() == "*" => true,
        // A lone `x as y` never satisfies a qualified request, even when
        // `y` equals the requested name: the alias may stand for a
        // different object than the caller expects.
        [single] => single.asname.is_none() && single.name.as_str() == name,
        // In a comma-separated list, a name counts whether it appears bare
        // or as the bound target of an `as` form.
        names => names.iter().any(|alias| bound_name(alias) == name),
    }
}
