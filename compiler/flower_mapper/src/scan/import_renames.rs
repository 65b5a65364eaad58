//! Phase 4: carry renames from a definition to its import aliases.
//!
//! Candidates are the import specifiers and `export { .. } from`
//! specifiers of the target files whose symbol is still unclassified. Each
//! candidate is an edge to the symbol it immediately aliases; following the
//! edges from every candidate until a classified symbol is reached, and
//! renaming the whole path when that symbol is renamed, visits each
//! candidate once.

use flower_ir::{
    FileId, ImportBindings, NamespaceBody, NamespaceDecl, ProgramModel, Stmt, StmtKind, SymbolId,
};
use flower_rewrite::RewriteRule;
use rustc_hash::FxHashSet;

use crate::build::Builder;

#[tracing::instrument(level = "debug", skip_all, fields(files = targets.len()))]
pub(crate) fn run<P: ProgramModel + ?Sized>(builder: &mut Builder<'_, '_, P>, targets: &[FileId]) {
    let program = builder.program;
    let mut candidates = Vec::new();
    for &file in targets {
        if let Some(source) = program.source_file(file) {
            collect_aliases(program, &source.statements, &mut candidates);
        }
    }
    let candidate_set: FxHashSet<SymbolId> = candidates.iter().copied().collect();

    let mut visited = FxHashSet::default();
    let mut propagated = 0usize;
    for &start in &candidates {
        let mut path = Vec::new();
        let mut current = start;
        let renamed = loop {
            if let Some(rule) = builder.table.rule_for_symbol(current) {
                break rule.is_rename();
            }
            if !candidate_set.contains(&current) || !visited.insert(current) {
                break false;
            }
            path.push(current);
            match program.immediate_aliased_symbol(current) {
                Some(next) => current = next,
                None => break false,
            }
        };
        if !renamed {
            continue;
        }
        for alias in path {
            let name = builder.config.renamed(program.symbol_name(alias));
            tracing::trace!(alias = program.symbol_name(alias), %name, "propagated rename");
            builder.table.assign(alias, RewriteRule::rename_type(name));
            propagated += 1;
        }
    }
    tracing::debug!(
        candidates = candidates.len(),
        propagated,
        "import renames propagated"
    );
}

/// Symbols of import specifiers and re-export specifiers, including those
/// inside namespaces and global augmentations.
fn collect_aliases<P: ProgramModel + ?Sized>(
    program: &P,
    statements: &[Stmt],
    out: &mut Vec<SymbolId>,
) {
    for stmt in statements {
        match &stmt.kind {
            StmtKind::Import(import) => {
                if let Some(ImportBindings::Named(specifiers)) = &import.bindings {
                    out.extend(
                        specifiers
                            .iter()
                            .filter_map(|specifier| program.symbol_at(&specifier.name)),
                    );
                }
            }
            StmtKind::Export(export) if export.module.is_some() => {
                out.extend(
                    export
                        .specifiers
                        .iter()
                        .filter_map(|specifier| program.symbol_at(&specifier.name)),
                );
            }
            StmtKind::Namespace(namespace) => collect_namespace(program, namespace, out),
            StmtKind::GlobalAugmentation(body) => collect_aliases(program, body, out),
            _ => {}
        }
    }
}

fn collect_namespace<P: ProgramModel + ?Sized>(
    program: &P,
    namespace: &NamespaceDecl,
    out: &mut Vec<SymbolId>,
) {
    match &namespace.body {
        NamespaceBody::Block(statements) => collect_aliases(program, statements, out),
        NamespaceBody::Nested(inner) => collect_namespace(program, inner, out),
    }
}
