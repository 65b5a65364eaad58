//! Rename propagation through import and re-export chains.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{declared, listing, mapped, program, reference, rename};
use flower_mapper::{build_with_config, MapperConfig};
use flower_program::{Program, ProgramBuilder};
use pretty_assertions::assert_eq;

const ORIGIN: &str = "export type Foo = number;\nexport declare const Foo: number;";

fn chain() -> Program {
    program(
        ProgramBuilder::new()
            .add_file("a.d.ts", ORIGIN)
            .add_file("b.d.ts", "export { Foo } from './a';")
            .add_file("c.d.ts", "export { Foo as Baz } from './b';")
            .add_file("d.d.ts", "import { Baz } from './c';\nexport type Uses = Baz;"),
    )
}

#[test]
fn renames_follow_reexport_chains() {
    let program = chain();
    let output = mapped(&program, &["a.d.ts", "b.d.ts", "c.d.ts", "d.d.ts"]);

    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "b.d.ts", "Foo")),
        Some(&rename("FooT"))
    );
    // Each alias is renamed after its own local name.
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "c.d.ts", "Baz")),
        Some(&rename("BazT"))
    );
    let use_site = reference(&program, "d.d.ts", "Baz");
    assert_eq!(
        output.table.rule_for_type_reference(&program, use_site),
        Some(&rename("BazT"))
    );
    assert_eq!(output.table.rename_count(), 4);
}

#[test]
fn propagation_stops_at_non_target_files() {
    let program = chain();
    let output = mapped(&program, &["a.d.ts", "d.d.ts"]);

    // b and c are not targets, so nothing links d's alias to the rename.
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "d.d.ts", "Baz")),
        None
    );
    assert_eq!(output.table.rename_count(), 1);
}

#[test]
fn origin_outside_the_targets_is_not_renamed() {
    let program = chain();
    let output = mapped(&program, &["b.d.ts"]);
    assert_eq!(output.table.rename_count(), 0);
}

#[test]
fn aliases_of_plain_types_are_left_alone() {
    let program = program(
        ProgramBuilder::new()
            .add_file("a.d.ts", "export type Plain = number;")
            .add_file("b.d.ts", "import { Plain } from './a';\nexport type X = Plain;"),
    );
    let output = mapped(&program, &["a.d.ts", "b.d.ts"]);
    assert!(output.table.is_empty());
}

#[test]
fn import_cycles_terminate() {
    let program = program(
        ProgramBuilder::new()
            .add_file("a.d.ts", "export { X } from './b';")
            .add_file("b.d.ts", "export { X } from './a';")
            .add_file(
                "c.d.ts",
                "import { X } from './a';\nexport type Y = X;\n\
                 export type Z = number;\nexport declare const Z: number;",
            ),
    );
    let output = mapped(&program, &["a.d.ts", "b.d.ts", "c.d.ts"]);
    // Z's rename forces the propagation pass to walk the cycle.
    assert_eq!(output.table.rename_count(), 1);
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "c.d.ts", "X")),
        None
    );
}

#[test]
fn custom_suffix_applies_to_every_rename() {
    let program = chain();
    let config = MapperConfig::default().with_rename_suffix("_t");
    let output = build_with_config(&program, &["a.d.ts", "b.d.ts", "c.d.ts", "d.d.ts"], &config)
        .unwrap();
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "a.d.ts", "Foo")),
        Some(&rename("Foo_t"))
    );
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "c.d.ts", "Baz")),
        Some(&rename("Baz_t"))
    );
}

#[test]
fn build_is_idempotent() {
    let program = chain();
    let targets = ["a.d.ts", "b.d.ts", "c.d.ts", "d.d.ts"];
    let first = mapped(&program, &targets);
    let second = mapped(&program, &targets);
    assert_eq!(first.table, second.table);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(
        listing(&program, &first, &targets),
        listing(&program, &second, &targets)
    );
}

#[test]
fn rename_replaces_the_library_rule_of_the_same_symbol() {
    let program = program(
        ProgramBuilder::new()
            .add_default_library(
                "lib.d.ts",
                "type Readonly<T> = T;\ndeclare const Readonly: number;",
            )
            .add_file("app.d.ts", "export type R = Readonly<string>;"),
    );
    let output = mapped(&program, &["app.d.ts"]);
    let readonly = declared(&program, "lib.d.ts", "Readonly");

    let rules: Vec<_> = output
        .table
        .iter()
        .filter(|&(symbol, _)| symbol == readonly)
        .map(|(_, rule)| rule.clone())
        .collect();
    assert_eq!(rules, vec![rename("ReadonlyT")]);
    assert_eq!(output.table.len(), 1);
    assert_eq!(output.table.rename_count(), 1);
    assert_eq!(
        output
            .table
            .rule_for_type_reference(&program, reference(&program, "app.d.ts", "Readonly")),
        Some(&rename("ReadonlyT"))
    );
}
