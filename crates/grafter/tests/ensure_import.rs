//! End-to-end tests: parse a fixture, run the entry points, and check the
//! re-serialized output.

use grafter::{ensure_future_symbol, ensure_import, ensure_import_with_compat, write_module};
use pretty_assertions::assert_eq;
use ruff_python_ast::ModModule;
use ruff_python_parser::parse_module;

fn module(code: &str) -> ModModule {
    parse_module(code).unwrap().into_syntax()
}

#[test]
fn ensure_import_is_idempotent() {
    let source = "\"\"\"doc\"\"\"\nimport sys\n\ndef main():\n    pass\n";

    let mut once = module(source);
    ensure_import(&mut once, Some("os"), "path");
    let after_once = write_module(source, &once);

    let mut twice = module(source);
    ensure_import(&mut twice, Some("os"), "path");
    ensure_import(&mut twice, Some("os"), "path");
    let after_twice = write_module(source, &twice);

    assert_eq!(after_once, after_twice);
    assert_eq!(once.body.len(), twice.body.len());
}

#[test]
fn existing_binding_suppresses_insertion() {
    let source = "from os import path\nx = 1\n";
    let mut module = module(source);
    ensure_import(&mut module, Some("os"), "path");
    assert_eq!(module.body.len(), 2);
    assert_eq!(write_module(source, &module), source);
}

#[test]
fn docstring_stays_first() {
    let source = "\"\"\"Module docstring.\"\"\"\n\ndef main():\n    pass\n";
    let mut module = module(source);
    ensure_import(&mut module, None, "os");
    assert_eq!(
        write_module(source, &module),
        "\"\"\"Module docstring.\"\"\"\nimport os\n\ndef main():\n    pass\n"
    );
}

#[test]
fn compat_pragma_precedes_injected_import() {
    let source = "\"\"\"doc\"\"\"\nx = 1\n";
    let mut module = module(source);
    ensure_import_with_compat(&mut module, Some("pkg"), "name");
    assert_eq!(
        write_module(source, &module),
        "\"\"\"doc\"\"\"\nfrom __future__ import absolute_import\nfrom pkg import name\nx = 1\n"
    );
}

#[test]
fn compat_pragma_with_plain_import() {
    let source = "x = 1\n";
    let mut module = module(source);
    ensure_import_with_compat(&mut module, None, "collections");
    assert_eq!(
        write_module(source, &module),
        "from __future__ import absolute_import\nimport collections\nx = 1\n"
    );
}

#[test]
fn star_import_satisfies_any_name() {
    let source = "from pkg import *\nx = 1\n";
    let mut module = module(source);
    ensure_import(&mut module, Some("pkg"), "anything");
    assert_eq!(write_module(source, &module), source);
}

#[test]
fn single_aliased_name_does_not_satisfy_bare_request() {
    let source = "from pkg import real_name as other_name\nx = 1\n";
    let mut module = module(source);
    ensure_import(&mut module, Some("pkg"), "real_name");
    // The alias is not trusted to stand in for the bare name, so a second
    // from-import is added after the existing one.
    assert_eq!(
        write_module(source, &module),
        "from pkg import real_name as other_name\nfrom pkg import real_name\nx = 1\n"
    );
}

#[test]
fn future_symbol_is_deduplicated() {
    let source = "import os\n";
    let mut module = module(source);
    ensure_future_symbol(&mut module, "division");
    ensure_future_symbol(&mut module, "division");
    let out = write_module(source, &module);
    assert_eq!(out.matches("from __future__ import division").count(), 1);
    assert_eq!(out, "from __future__ import division\nimport os\n");
}

#[test]
fn future_symbol_joins_existing_pragma_block() {
    let source = "\"\"\"doc\"\"\"\nfrom __future__ import division\nimport os\n";
    let mut module = module(source);
    ensure_future_symbol(&mut module, "print_function");
    assert_eq!(
        write_module(source, &module),
        "\"\"\"doc\"\"\"\nfrom __future__ import division\nfrom __future__ import print_function\nimport os\n"
    );
}

#[test]
fn insertion_into_empty_module() {
    let source = "";
    let mut module = module(source);
    ensure_import_with_compat(&mut module, None, "os");
    assert_eq!(
        write_module(source, &module),
        "from __future__ import absolute_import\nimport os\n"
    );
}

#[test]
fn repeated_compat_calls_are_stable() {
    let source = "\"\"\"doc\"\"\"\nimport sys\nx = 1\n";

    let mut module = module(source);
    ensure_import_with_compat(&mut module, Some("io"), "open");
    let first = write_module(source, &module);
    ensure_import_with_compat(&mut module, Some("io"), "open");
    let second = write_module(source, &module);

    assert_eq!(first, second);
    assert_eq!(
        first,
        "\"\"\"doc\"\"\"\nfrom __future__ import absolute_import\nimport sys\nfrom io import open\nx = 1\n"
    );
}
