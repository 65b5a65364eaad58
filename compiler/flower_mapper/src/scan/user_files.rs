//! Phase 3: every declaration and type-level name in the target files.
//!
//! Each symbol reached is classified once, in order of precedence:
//!
//! 1. a type alias that shares its name with a value is renamed
//! 2. an import specifier gets the imported module's rule for the
//!    imported name, on the local alias symbol
//! 3. a default or namespace import gets the module's whole rule tree as
//!    its namespace classification
//!
//! Anything else stays unclassified and passes through unchanged.

use flower_diagnostic::{Diagnostic, DiagnosticCode};
use flower_ir::visitor::Visitor;
use flower_ir::{DeclarationKind, EntityName, FileId, Ident, ProgramModel, SymbolId};
use flower_rewrite::{RewriteRule, RuleKind};

use crate::build::Builder;
use crate::{ConflictPolicy, MapperError};

#[tracing::instrument(level = "debug", skip_all, fields(files = targets.len()))]
pub(crate) fn run<P: ProgramModel + ?Sized>(
    builder: &mut Builder<'_, '_, P>,
    targets: &[FileId],
) -> Result<(), MapperError> {
    let program = builder.program;
    for &file in targets {
        let Some(source) = program.source_file(file) else {
            continue;
        };
        let mut scanner = Scanner {
            builder: &mut *builder,
            file,
            failure: None,
        };
        scanner.visit_source_file(source);
        if let Some(error) = scanner.failure {
            return Err(error);
        }
    }
    tracing::debug!(
        seen = builder.seen.len(),
        renames = builder.table.rename_count(),
        "target files scanned"
    );
    Ok(())
}

struct Scanner<'b, 'a, 'r, P: ?Sized> {
    builder: &'b mut Builder<'a, 'r, P>,
    file: FileId,
    /// First conflict rejected by the configuration.
    failure: Option<MapperError>,
}

impl<'r, P: ProgramModel + ?Sized> Scanner<'_, '_, 'r, P> {
    fn visit_name(&mut self, name: &Ident) {
        if let Some(symbol) = self.builder.program.symbol_at(name) {
            self.classify(symbol, name);
        }
    }

    fn classify(&mut self, symbol: SymbolId, site: &Ident) {
        if self.failure.is_some() || !self.builder.seen.insert(symbol) {
            return;
        }
        let program = self.builder.program;

        if program.symbol_flags(symbol).is_type_value_collision() {
            let name = self.builder.config.renamed(program.symbol_name(symbol));
            let existing = self
                .builder
                .table
                .rule_for_symbol(symbol)
                .cloned()
                .or_else(|| self.import_rule(symbol).cloned());
            if let Some(existing) = existing {
                self.conflict(symbol, site, &name, &existing);
                if self.failure.is_some() {
                    return;
                }
            }
            tracing::trace!(symbol = program.symbol_name(symbol), %name, "type/value rename");
            self.builder
                .table
                .assign(symbol, RewriteRule::rename_type(name));
            self.builder.had_renames = true;
            return;
        }

        if let Some(rule) = self.import_rule(symbol) {
            self.builder.table.assign(symbol, rule.clone());
            return;
        }

        let registry = self.builder.registry;
        for declaration in program.declarations(symbol) {
            if let DeclarationKind::ImportClause { module_specifier }
            | DeclarationKind::NamespaceImport { module_specifier } = &declaration.kind
            {
                if let Some(rewrites) = registry.library(module_specifier) {
                    self.builder.table.assign_namespace(symbol, rewrites);
                }
                return;
            }
        }
    }

    /// The library rule for an import specifier declaration of `symbol`.
    fn import_rule(&self, symbol: SymbolId) -> Option<&'r RewriteRule> {
        let registry = self.builder.registry;
        self.builder
            .program
            .declarations(symbol)
            .iter()
            .find_map(|declaration| match &declaration.kind {
                DeclarationKind::ImportSpecifier {
                    module_specifier,
                    imported_name,
                } => Some((module_specifier, imported_name)),
                _ => None,
            })
            .and_then(|(module, name)| registry.library(module)?.type_rule(name))
    }

    fn conflict(&mut self, symbol: SymbolId, site: &Ident, rename: &str, existing: &RewriteRule) {
        let symbol_name = self.builder.program.symbol_name(symbol).to_string();
        match self.builder.config.conflict_policy {
            ConflictPolicy::PreferRename => {
                let path = self.builder.path(self.file);
                let mut diagnostic = Diagnostic::warning(DiagnosticCode::W1003)
                    .with_message(format!(
                        "type `{symbol_name}` is renamed to `{rename}`, overriding {existing}"
                    ))
                    .with_location(path, site.span);
                if existing.kind() == RuleKind::TypeReferenceMacro {
                    diagnostic = diagnostic.with_note("the macro will not run for this type");
                }
                self.builder.report(diagnostic);
            }
            ConflictPolicy::Reject => {
                self.failure = Some(MapperError::ConflictingRules {
                    name: symbol_name,
                    rename: rename.to_string(),
                    existing: existing.to_string(),
                });
            }
        }
    }
}

impl<'ast, P: ProgramModel + ?Sized> Visitor<'ast> for Scanner<'_, '_, '_, P> {
    fn visit_declaration_name(&mut self, name: &'ast Ident) {
        self.visit_name(name);
    }

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        for segment in name.segments() {
            self.visit_name(segment);
        }
    }
}
