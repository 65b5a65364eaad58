//! Shared helpers for mapper integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use flower_ir::visitor::Visitor;
use flower_ir::{EntityName, Ident, ProgramModel, SymbolId};
use flower_mapper::{build, init_tracing, MapperOutput};
use flower_program::{Program, ProgramBuilder};
use flower_rewrite::RewriteRule;

pub fn program(builder: ProgramBuilder) -> Program {
    init_tracing();
    builder.build().expect("program should build")
}

pub fn mapped(program: &Program, targets: &[&str]) -> MapperOutput<'static> {
    build(program, targets).expect("mapper should build")
}

#[derive(Default)]
struct Names<'ast> {
    declarations: Vec<&'ast Ident>,
    references: Vec<&'ast EntityName>,
}

impl<'ast> Visitor<'ast> for Names<'ast> {
    fn visit_declaration_name(&mut self, name: &'ast Ident) {
        self.declarations.push(name);
    }

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        self.references.push(name);
    }
}

fn names<'p>(program: &'p Program, path: &str) -> Names<'p> {
    let file = program
        .file_id(path)
        .and_then(|id| program.source_file(id))
        .unwrap_or_else(|| panic!("no file {path}"));
    let mut names = Names::default();
    names.visit_source_file(file);
    names
}

pub fn declaration<'p>(program: &'p Program, path: &str, name: &str) -> &'p Ident {
    names(program, path)
        .declarations
        .into_iter()
        .find(|ident| ident.as_str() == name)
        .unwrap_or_else(|| panic!("no declaration of {name} in {path}"))
}

pub fn declared(program: &Program, path: &str, name: &str) -> SymbolId {
    program
        .symbol_at(declaration(program, path, name))
        .unwrap_or_else(|| panic!("declaration of {name} in {path} has no symbol"))
}

pub fn reference<'p>(program: &'p Program, path: &str, text: &str) -> &'p EntityName {
    names(program, path)
        .references
        .into_iter()
        .find(|name| name.to_string() == text)
        .unwrap_or_else(|| panic!("no reference to {text} in {path}"))
}

/// Every name occurrence in the target files with the rule it gets,
/// as `path:start name -> rule`. Independent of symbol numbering.
pub fn listing(program: &Program, output: &MapperOutput<'_>, targets: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    for path in targets {
        let names = names(program, path);
        for ident in names.declarations {
            if let Some(rule) = program
                .symbol_at(ident)
                .and_then(|symbol| output.table.rule_for_symbol(symbol))
            {
                lines.push(format!("{path}:{} {} -> {rule}", ident.span.start, ident.as_str()));
            }
        }
        for name in names.references {
            if let Some(rule) = output.table.rule_for_type_reference(program, name) {
                lines.push(format!("{path}:{} {name} -> {rule}", name.span().start));
            }
        }
    }
    lines.sort();
    lines
}

pub fn rename(name: &str) -> RewriteRule {
    RewriteRule::rename_type(name)
}
