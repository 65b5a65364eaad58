//! Helpers shared by unit tests.

use flower_ir::visitor::Visitor;
use flower_ir::{EntityName, Ident, ProgramModel, SymbolId};
use flower_program::{Program, ProgramBuilder};

pub(crate) fn built(builder: ProgramBuilder) -> Program {
    match builder.build() {
        Ok(program) => program,
        Err(e) => panic!("program failed to build: {e}"),
    }
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
    let Some(file) = program.file_id(path).and_then(|id| program.source_file(id)) else {
        panic!("no file {path}");
    };
    let mut names = Names::default();
    names.visit_source_file(file);
    names
}

/// The first name declared as `name` in the file at `path`.
pub(crate) fn declaration<'p>(program: &'p Program, path: &str, name: &str) -> &'p Ident {
    names(program, path)
        .declarations
        .into_iter()
        .find(|ident| ident.as_str() == name)
        .unwrap_or_else(|| panic!("no declaration of {name} in {path}"))
}

/// The symbol of the first declaration of `name` in `path`.
pub(crate) fn declared(program: &Program, path: &str, name: &str) -> SymbolId {
    let ident = declaration(program, path, name);
    program
        .symbol_at(ident)
        .unwrap_or_else(|| panic!("declaration of {name} in {path} has no symbol"))
}

/// The first type-position name in `path` spelled `text`.
pub(crate) fn reference<'p>(program: &'p Program, path: &str, text: &str) -> &'p EntityName {
    names(program, path)
        .references
        .into_iter()
        .find(|name| name.to_string() == text)
        .unwrap_or_else(|| panic!("no reference to {text} in {path}"))
}
