use super::*;
use crate::test_support::{built, reference};
use crate::build;
use flower_program::{Program, ProgramBuilder};
use pretty_assertions::assert_eq;

fn converted(program: &Program, table: &SymbolTable<'_>, path: &str, text: &str) -> String {
    let name = reference(program, path, text);
    let Some(file) = program.file_id(path).and_then(|id| program.source_file(id)) else {
        panic!("missing {path}");
    };
    // Find the type alias whose body starts with this reference.
    let reference = file
        .statements
        .iter()
        .find_map(|stmt| match &stmt.kind {
            flower_ir::StmtKind::TypeAlias(decl) => match &decl.ty.kind {
                flower_ir::TypeKind::Reference(r) if &r.name == name => Some(r),
                _ => None,
            },
            _ => None,
        })
        .unwrap_or_else(|| panic!("no alias of {text}"));
    TableConverter::new(program, table)
        .convert_reference(reference)
        .to_string()
}

fn react_app(source: &str) -> Program {
    built(ProgramBuilder::new().add_file("app.d.ts", source))
}

#[test]
fn macro_expansion_through_the_table() {
    let program = react_app(
        "import { Component, ReactElement } from 'react';\n\
         export type A = Component<Props>;\n\
         export type B = ReactElement<Props>;\n\
         interface Props { }",
    );
    let output = match build(&program, &["app.d.ts"]) {
        Ok(output) => output,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        converted(&program, &output.table, "app.d.ts", "Component"),
        "Component<Props, {...}>"
    );
    assert_eq!(
        converted(&program, &output.table, "app.d.ts", "ReactElement"),
        "React$Element<React$ComponentType<Props>>"
    );
}

#[test]
fn failed_macro_becomes_a_marker() {
    let program = react_app(
        "import { Component } from 'react';\n\
         export type A = Component<X, Y, Z>;",
    );
    let output = match build(&program, &["app.d.ts"]) {
        Ok(output) => output,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        converted(&program, &output.table, "app.d.ts", "Component"),
        "$FlowFixMe /* tsflower-error: Component: expected 0-2 arguments, got 3 */"
    );
}

#[test]
fn fixed_names_and_pass_through() {
    let program = react_app(
        "import * as React from 'react';\n\
         import { Unknown } from 'react';\n\
         export type A = React.ReactNode;\n\
         export type B = Unknown<React.ReactNode>;",
    );
    let output = match build(&program, &["app.d.ts"]) {
        Ok(output) => output,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(
        converted(&program, &output.table, "app.d.ts", "React.ReactNode"),
        "React$Node"
    );
    assert_eq!(
        converted(&program, &output.table, "app.d.ts", "Unknown"),
        "Unknown<React$Node>"
    );
}
