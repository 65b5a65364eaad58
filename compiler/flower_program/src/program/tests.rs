use super::*;
use crate::ProgramBuilder;
use pretty_assertions::assert_eq;

fn sample() -> Program {
    let result = ProgramBuilder::new()
        .add_default_library("lib.es5.d.ts", "interface Array<T> {}")
        .add_file("a.d.ts", "export interface A {}")
        .build();
    match result {
        Ok(program) => program,
        Err(e) => panic!("build failed: {e}"),
    }
}

#[test]
fn files_keep_insertion_order() {
    let program = sample();
    let paths: Vec<_> = program
        .source_files()
        .iter()
        .map(|f| f.path.display().to_string())
        .collect();
    assert_eq!(paths, vec!["lib.es5.d.ts", "a.d.ts"]);
    assert_eq!(program.file_id("a.d.ts"), Some(FileId::from_raw(1)));
    assert_eq!(program.file_id("missing.d.ts"), None);
}

#[test]
fn default_library_classification() {
    let program = sample();
    assert!(program.is_default_library(FileId::from_raw(0)));
    assert!(!program.is_default_library(FileId::from_raw(1)));
    assert!(!program.is_default_library(FileId::from_raw(9)));
}

#[test]
fn declaration_names_resolve_to_their_symbol() {
    let program = sample();
    let file = program.source_file(FileId::from_raw(1));
    let name = file
        .and_then(|f| f.statements.first())
        .and_then(|s| s.kind.declared_name());
    let symbol = name.and_then(|n| program.symbol_at(n));
    assert_eq!(symbol, program.export("./a", "A"));
    assert_eq!(symbol.map(|s| program.symbol_name(s)), Some("A"));
}

#[test]
fn module_symbols_are_named_by_specifier() {
    let program = sample();
    let module = program.module("./a");
    assert_eq!(module.map(|m| program.symbol_name(m)), Some("./a"));
    assert_eq!(
        module.map(|m| program.symbol_flags(m)),
        Some(SymbolFlags::MODULE)
    );
}

#[test]
fn unknown_symbols_degrade_gracefully() {
    let program = sample();
    let bogus = SymbolId::from_raw(10_000);
    assert_eq!(program.symbol_name(bogus), "");
    assert!(program.declarations(bogus).is_empty());
    assert_eq!(program.symbol_flags(bogus), SymbolFlags::empty());
    assert_eq!(program.immediate_aliased_symbol(bogus), None);
    assert!(program.symbol_count() >= 3);
}
