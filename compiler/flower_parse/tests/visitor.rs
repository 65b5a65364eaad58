//! Walk parsed files with the IR visitor.

use std::path::Path;

use flower_ir::visitor::{self, Visitor};
use flower_ir::{EntityName, FileId, Ident, SourceFile, TypeReference};
use flower_parse::parse_file;
use pretty_assertions::assert_eq;

fn parse(source: &str) -> SourceFile {
    match parse_file(FileId::from_raw(3), Path::new("test.d.ts"), source) {
        Ok(file) => file,
        Err(e) => panic!("parse failed: {e}"),
    }
}

#[derive(Default)]
struct Collector {
    declared: Vec<String>,
    references: Vec<String>,
    entity_names: Vec<String>,
}

impl<'ast> Visitor<'ast> for Collector {
    fn visit_declaration_name(&mut self, name: &'ast Ident) {
        self.declared.push(name.as_str().to_string());
    }

    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        self.references.push(reference.name.to_string());
        visitor::walk_type_reference(self, reference);
    }

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        self.entity_names.push(name.to_string());
    }
}

#[test]
fn collects_declarations_and_references() {
    let file = parse(
        "import { Component as C } from 'react';\n\
         export interface Props extends Base { child: React.ReactNode; }\n\
         export declare class View<T> extends C<Props, T> {}\n\
         declare namespace NS { type Inner = Array<Props>; }\n\
         export type Q = typeof value;",
    );
    let mut collector = Collector::default();
    collector.visit_source_file(&file);

    assert_eq!(
        collector.declared,
        vec!["C", "Props", "View", "T", "NS", "Inner", "Q"]
    );
    assert_eq!(
        collector.references,
        vec!["Base", "React.ReactNode", "C", "Props", "T", "Array", "Props"]
    );
    assert!(collector.entity_names.contains(&"value".to_string()));
}

#[test]
fn global_augmentations_are_walked() {
    let file = parse("export {};\ndeclare global { interface Window { ref: Ref } }");
    let mut collector = Collector::default();
    collector.visit_source_file(&file);
    assert_eq!(collector.declared, vec!["Window"]);
    assert_eq!(collector.references, vec!["Ref"]);
}

#[test]
fn node_ids_belong_to_their_file() {
    let file = parse("type A = B;");
    let mut collector = IdCollector::default();
    collector.visit_source_file(&file);
    assert!(collector.files.iter().all(|f| *f == FileId::from_raw(3)));
    assert_eq!(collector.files.len(), 1);
}

#[derive(Default)]
struct IdCollector {
    files: Vec<FileId>,
}

impl<'ast> Visitor<'ast> for IdCollector {
    fn visit_declaration_name(&mut self, name: &'ast Ident) {
        self.files.push(name.id.file());
    }
}

#[test]
fn module_detection() {
    assert!(!parse("declare type A = string;").is_module());
    assert!(parse("export type A = string;").is_module());
    assert!(parse("import 'side-effect';").is_module());
}
