//! Advisory diagnostics and configuration errors.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use common::{declared, mapped, program};
use flower_diagnostic::{DiagnosticCode, Severity};
use flower_mapper::{build_with_config, build_with_registry, MapperConfig, MapperError};
use flower_program::ProgramBuilder;
use flower_rewrite::{NamespaceRewrite, RewriteRegistry, RewriteRule};
use pretty_assertions::assert_eq;

fn codes(output: &flower_mapper::MapperOutput<'_>) -> Vec<DiagnosticCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn targeting_the_default_library_warns() {
    let program = program(
        ProgramBuilder::new()
            .add_default_library("lib.d.ts", "interface Array<T> {}")
            .add_file("app.d.ts", "export type A = string;"),
    );
    let output = mapped(&program, &["lib.d.ts", "app.d.ts"]);
    assert_eq!(codes(&output), vec![DiagnosticCode::W1001]);
    assert_eq!(
        output.diagnostics[0].to_string(),
        "warning[W1001]: attempted to target default library (lib.d.ts:0..0)"
    );
}

#[test]
fn unknown_target_warns() {
    let program = program(ProgramBuilder::new().add_file("app.d.ts", "export type A = string;"));
    let output = mapped(&program, &["missing.d.ts", "app.d.ts"]);
    assert_eq!(codes(&output), vec![DiagnosticCode::W1006]);
    assert!(output.diagnostics[0].message.contains("missing.d.ts"));
}

#[test]
fn default_library_namespaces_are_noted() {
    let program = program(
        ProgramBuilder::new()
            .add_default_library("lib.d.ts", "declare namespace Intl { interface Collator {} }")
            .add_file("app.d.ts", "export type A = string;"),
    );
    let output = mapped(&program, &["app.d.ts"]);
    assert_eq!(codes(&output), vec![DiagnosticCode::W1005]);
    assert_eq!(output.diagnostics[0].severity, Severity::Note);
}

#[test]
fn unsupported_augmentation_declarations_warn() {
    let program = program(ProgramBuilder::new().add_file(
        "types.d.ts",
        "export declare const v: number;\n\
         declare global { namespace JSX { type Element = number; } }",
    ));
    let output = mapped(&program, &["types.d.ts"]);
    assert_eq!(codes(&output), vec![DiagnosticCode::W1004]);
    assert!(output.diagnostics[0].message.contains("type alias `Element`"));
}

#[test]
fn unmatched_augmentation_namespaces_are_skipped() {
    let program = program(ProgramBuilder::new().add_file(
        "types.d.ts",
        "export declare const v: number;\n\
         declare global { namespace Other { interface Element {} } interface Element {} }",
    ));
    let output = mapped(&program, &["types.d.ts"]);
    assert!(output.diagnostics.is_empty());
    assert!(output.table.is_empty());
}

fn conflicting_program() -> flower_program::Program {
    program(
        ProgramBuilder::new()
            .add_default_library(
                "lib.d.ts",
                "type Readonly<T> = T;\ndeclare const Readonly: number;",
            )
            .add_file("app.d.ts", "export type R = Readonly<string>;"),
    )
}

#[test]
fn rename_overrides_a_library_rule_with_a_warning() {
    let program = conflicting_program();
    let output = mapped(&program, &["app.d.ts"]);
    assert_eq!(codes(&output), vec![DiagnosticCode::W1003]);
    assert_eq!(
        output
            .table
            .rule_for_symbol(declared(&program, "lib.d.ts", "Readonly")),
        Some(&RewriteRule::rename_type("ReadonlyT"))
    );
}

#[test]
fn strict_config_rejects_conflicts() {
    let program = conflicting_program();
    let result = build_with_config(&program, &["app.d.ts"], &MapperConfig::strict());
    assert_eq!(
        result.map(|output| output.table.len()),
        Err(MapperError::ConflictingRules {
            name: "Readonly".to_string(),
            rename: "ReadonlyT".to_string(),
            existing: "FixedName $ReadOnly".to_string(),
        })
    );
}

#[test]
fn invalid_config_is_rejected_before_scanning() {
    let program = conflicting_program();
    let config = MapperConfig::default().with_rename_suffix("");
    assert!(matches!(
        build_with_config(&program, &["app.d.ts"], &config),
        Err(MapperError::InvalidConfig { .. })
    ));
}

#[test]
fn rules_are_scoped_to_their_module() {
    let registry = RewriteRegistry::new().with_library(
        "ui",
        NamespaceRewrite::new().with_type("Button", RewriteRule::fixed_name("UIButton")),
    );
    let program = program(
        ProgramBuilder::new()
            .add_file("local.d.ts", "export interface Button {}")
            .add_file(
                "app.d.ts",
                "import { Button } from 'ui';\n\
                 import { Button as Mine } from './local';\n\
                 export type A = Button;\n\
                 export type B = Mine;",
            ),
    );
    let output = build_with_registry(
        &program,
        &["local.d.ts", "app.d.ts"],
        &registry,
        &MapperConfig::default(),
    )
    .unwrap();

    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "app.d.ts", "Button")),
        Some(&RewriteRule::fixed_name("UIButton"))
    );
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "app.d.ts", "Mine")),
        None
    );
    assert_eq!(
        output.table.rule_for_symbol(declared(&program, "local.d.ts", "Button")),
        None
    );
}
