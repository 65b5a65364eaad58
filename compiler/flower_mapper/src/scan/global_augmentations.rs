//! Phase 1: `declare global { ... }` blocks.
//!
//! Augmentations only appear at the top level of a file, so only top-level
//! statements are examined. Namespaces inside one are entered only when the
//! global rules have a namespace of that name.

use flower_diagnostic::{Diagnostic, DiagnosticCode};
use flower_ir::{FileId, NamespaceBody, NamespaceDecl, ProgramModel, Stmt, StmtKind};
use flower_rewrite::NamespaceRewrite;

use crate::build::Builder;

#[tracing::instrument(level = "debug", skip_all)]
pub(crate) fn run<P: ProgramModel + ?Sized>(builder: &mut Builder<'_, '_, P>) {
    let registry = builder.registry;
    let rewrites = registry.global();
    if rewrites.is_empty() {
        return;
    }
    let before = builder.table.len();
    let program = builder.program;
    for file in program.source_files() {
        for stmt in &file.statements {
            if let StmtKind::GlobalAugmentation(body) = &stmt.kind {
                scan_block(builder, file.id, body, rewrites);
            }
        }
    }
    tracing::debug!(assigned = builder.table.len() - before, "global augmentations scanned");
}

fn scan_block<'a, P: ProgramModel + ?Sized>(
    builder: &mut Builder<'a, '_, P>,
    file: FileId,
    statements: &'a [Stmt],
    rewrites: &NamespaceRewrite,
) {
    for stmt in statements {
        match &stmt.kind {
            StmtKind::Namespace(namespace) => scan_namespace(builder, file, namespace, rewrites),
            StmtKind::Interface(decl) => {
                let Some(rule) = rewrites.type_rule(decl.name.as_str()) else {
                    continue;
                };
                let Some(symbol) = builder.program.symbol_at(&decl.name) else {
                    let path = builder.path(file);
                    builder.report(
                        Diagnostic::warning(DiagnosticCode::W1002)
                            .with_message(format!(
                                "missing symbol at declaration of {} in global augmentation",
                                decl.name.as_str()
                            ))
                            .with_location(path, decl.name.span),
                    );
                    continue;
                };
                builder.table.assign(symbol, rule.clone());
            }
            StmtKind::TypeAlias(_) | StmtKind::Class(_) | StmtKind::Enum(_) => {
                let Some(name) = stmt.kind.declared_name() else {
                    continue;
                };
                if rewrites.type_rule(name.as_str()).is_none() {
                    continue;
                }
                let path = builder.path(file);
                builder.report(
                    Diagnostic::warning(DiagnosticCode::W1004)
                        .with_message(format!(
                            "unsupported: {} `{}` in global augmentation",
                            stmt.kind.describe(),
                            name.as_str()
                        ))
                        .with_location(path, name.span)
                        .with_note("only interfaces in global augmentations are rewritten"),
                );
            }
            _ => {}
        }
    }
}

fn scan_namespace<'a, P: ProgramModel + ?Sized>(
    builder: &mut Builder<'a, '_, P>,
    file: FileId,
    namespace: &'a NamespaceDecl,
    rewrites: &NamespaceRewrite,
) {
    let Some(inner) = rewrites.namespace(namespace.name.as_str()) else {
        return;
    };
    match &namespace.body {
        NamespaceBody::Block(statements) => scan_block(builder, file, statements, inner),
        NamespaceBody::Nested(nested) => scan_namespace(builder, file, nested, inner),
    }
}
