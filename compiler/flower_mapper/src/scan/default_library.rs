//! Phase 2: top-level type aliases and interfaces of the standard library.
//!
//! Namespaces are not entered, so standard-library rules can only target
//! top-level names. Each skipped namespace is noted.

use flower_diagnostic::{Diagnostic, DiagnosticCode};
use flower_ir::{ProgramModel, StmtKind};

use crate::build::Builder;

#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn run<P: ProgramModel + ?Sized>(builder: &mut Builder<'_, '_, P>) {
    let registry = builder.registry;
    let rewrites = registry.default_library();
    let program = builder.program;
    let before = builder.table.len();

    let library_files = program
        .source_files()
        .iter()
        .filter(|file| program.is_default_library(file.id));
    for file in library_files {
        for stmt in &file.statements {
            let name = match &stmt.kind {
                StmtKind::TypeAlias(decl) => &decl.name,
                StmtKind::Interface(decl) => &decl.name,
                StmtKind::Namespace(namespace) => {
                    builder.report(
                        Diagnostic::note(DiagnosticCode::W1005)
                            .with_message(format!(
                                "namespace {} in the default library is not scanned for rewrites",
                                namespace.name.as_str()
                            ))
                            .with_location(&file.path, namespace.name.span),
                    );
                    continue;
                }
                _ => continue,
            };
            let Some(rule) = rewrites.type_rule(name.as_str()) else {
                continue;
            };
            let Some(symbol) = program.symbol_at(name) else {
                builder.report(
                    Diagnostic::warning(DiagnosticCode::W1002)
                        .with_message(format!(
                            "missing symbol at declaration of {} in {}",
                            name.as_str(),
                            file.path.display()
                        ))
                        .with_location(&file.path, name.span),
                );
                continue;
            };
            builder.table.assign(symbol, rule.clone());
        }
    }
    tracing::debug!(assigned = builder.table.len() - before, "default library scanned");
}
