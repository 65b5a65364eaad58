//! Binding passes.
//!
//! 1. Declare: walk every file's statements, creating or merging symbols
//!    and recording the symbol for each declaration name.
//! 2. Exports: fill module export tables from `export { X }`,
//!    `export default X` and `export = X`.
//! 3. Link: point each alias at the export it names.
//! 4. Resolve: walk every reference and record what it resolves to
//!    (see [`resolve`]).

mod resolve;

use flower_ir::{
    Declaration, DeclarationKind, EntityName, FileId, Ident, ImportBindings, ImportDecl, Modifiers,
    NamespaceBody, NamespaceDecl, NodeId, SourceFile, Span, Stmt, StmtKind, SymbolFlags, SymbolId,
};
use rustc_hash::FxHashMap;

use crate::symbols::{NameTable, SymbolArena};

/// Where a declaration lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Table {
    Global,
    Locals(FileId),
    Members(SymbolId),
}

/// How an alias finds its target once every module is known.
enum AliasTarget {
    /// A named export.
    Export(Box<str>),
    /// The default export, or the module itself.
    Default,
    /// The module itself.
    Module,
}

struct PendingAlias {
    alias: SymbolId,
    module_specifier: Box<str>,
    target: AliasTarget,
}

#[derive(Copy, Clone)]
struct ModuleContext {
    symbol: SymbolId,
    /// Without any explicit export statement, every top-level declaration
    /// of a declaration file is exported.
    implicit_exports: bool,
}

/// Per-file inputs to binding.
pub(crate) struct FileMeta {
    pub specifier: Option<Box<str>>,
    pub default_library: bool,
}

/// Output of binding, owned by [`crate::Program`].
pub(crate) struct Bindings {
    pub symbols: SymbolArena,
    pub globals: NameTable,
    pub modules: NameTable,
    pub resolutions: FxHashMap<NodeId, SymbolId>,
}

#[derive(Default)]
struct Binder {
    symbols: SymbolArena,
    globals: NameTable,
    locals: Vec<NameTable>,
    modules: NameTable,
    file_modules: Vec<Option<SymbolId>>,
    resolutions: FxHashMap<NodeId, SymbolId>,
    pending: Vec<PendingAlias>,
}

pub(crate) fn bind(files: &[SourceFile], meta: &[FileMeta]) -> Bindings {
    let mut binder = Binder {
        locals: vec![NameTable::default(); files.len()],
        file_modules: vec![None; files.len()],
        ..Binder::default()
    };

    for (file, meta) in files.iter().zip(meta) {
        binder.declare_file(file, meta);
    }
    tracing::debug!(symbols = binder.symbols.len(), "declared");

    for file in files {
        if let Some(module) = binder.file_modules[file.id.index()] {
            binder.bind_local_exports(file, module);
        }
    }

    binder.link_aliases();

    for file in files {
        resolve::resolve_file(&mut binder, file);
    }
    tracing::debug!(
        symbols = binder.symbols.len(),
        resolutions = binder.resolutions.len(),
        "resolved"
    );

    Bindings {
        symbols: binder.symbols,
        globals: binder.globals,
        modules: binder.modules,
        resolutions: binder.resolutions,
    }
}

impl Binder {
    fn table(&self, table: Table) -> &NameTable {
        match table {
            Table::Global => &self.globals,
            Table::Locals(file) => &self.locals[file.index()],
            Table::Members(symbol) => &self.symbols[symbol].members,
        }
    }

    fn table_mut(&mut self, table: Table) -> &mut NameTable {
        match table {
            Table::Global => &mut self.globals,
            Table::Locals(file) => &mut self.locals[file.index()],
            Table::Members(symbol) => &mut self.symbols[symbol].members,
        }
    }

    /// Declare `name` in `table`, merging with an existing non-alias symbol
    /// of the same name.
    fn declare(
        &mut self,
        table: Table,
        name: &Ident,
        flags: SymbolFlags,
        declaration: Declaration,
    ) -> SymbolId {
        let existing = self
            .table(table)
            .get(&name.name)
            .copied()
            .filter(|&id| {
                !flags.contains(SymbolFlags::ALIAS)
                    && !self.symbols[id].flags.contains(SymbolFlags::ALIAS)
            });

        let id = if let Some(id) = existing {
            let symbol = &mut self.symbols[id];
            symbol.flags |= flags;
            symbol.declarations.push(declaration);
            id
        } else {
            let id = self.symbols.alloc(name.name.clone(), flags, declaration);
            self.table_mut(table).insert(name.name.clone(), id);
            id
        };

        self.resolutions.insert(name.id, id);
        id
    }

    fn declare_file(&mut self, file: &SourceFile, meta: &FileMeta) {
        if meta.default_library || !file.is_module() {
            self.bind_statements(file.id, &file.statements, Table::Global, None);
            return;
        }

        let name: Box<str> = match &meta.specifier {
            Some(specifier) => specifier.clone(),
            None => file.path.display().to_string().into(),
        };
        let span = file
            .statements
            .iter()
            .map(|stmt| stmt.span)
            .reduce(Span::merge)
            .unwrap_or(Span::DUMMY);
        let symbol = self.symbols.alloc(
            name,
            SymbolFlags::MODULE,
            Declaration {
                file: file.id,
                span,
                kind: DeclarationKind::Module,
            },
        );
        if let Some(specifier) = &meta.specifier {
            self.modules.insert(specifier.clone(), symbol);
        }
        self.file_modules[file.id.index()] = Some(symbol);

        let implicit_exports = !file.statements.iter().any(|stmt| {
            matches!(
                stmt.kind,
                StmtKind::Export(_) | StmtKind::ExportAssignment(_)
            )
        });
        self.bind_statements(
            file.id,
            &file.statements,
            Table::Locals(file.id),
            Some(ModuleContext {
                symbol,
                implicit_exports,
            }),
        );
    }

    fn bind_statements(
        &mut self,
        file: FileId,
        statements: &[Stmt],
        table: Table,
        module: Option<ModuleContext>,
    ) {
        for stmt in statements {
            let declaration = |kind| Declaration {
                file,
                span: stmt.span,
                kind,
            };
            let declared = match &stmt.kind {
                StmtKind::Import(import) => {
                    self.bind_import(file, import, table);
                    None
                }
                StmtKind::Export(export) => {
                    if let (Some(module), Some(from)) = (module, &export.module) {
                        for specifier in &export.specifiers {
                            let kind = DeclarationKind::ExportSpecifier {
                                module_specifier: Some(from.value.clone()),
                                local_name: specifier.local_name().into(),
                            };
                            let alias = self.symbols.alloc(
                                specifier.name.name.clone(),
                                SymbolFlags::ALIAS,
                                Declaration {
                                    file,
                                    span: specifier.name.span,
                                    kind,
                                },
                            );
                            self.resolutions.insert(specifier.name.id, alias);
                            self.symbols[module.symbol]
                                .members
                                .insert(specifier.name.name.clone(), alias);
                            self.pending.push(PendingAlias {
                                alias,
                                module_specifier: from.value.clone(),
                                target: AliasTarget::Export(specifier.local_name().into()),
                            });
                        }
                    }
                    None
                }
                StmtKind::ExportAssignment(_) => None,
                StmtKind::TypeAlias(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::TYPE_ALIAS,
                    declaration(DeclarationKind::TypeAlias),
                )),
                StmtKind::Interface(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::INTERFACE,
                    declaration(DeclarationKind::Interface),
                )),
                StmtKind::Class(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::CLASS,
                    declaration(DeclarationKind::Class),
                )),
                StmtKind::Enum(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::ENUM,
                    declaration(DeclarationKind::Enum),
                )),
                StmtKind::Variable(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::VARIABLE,
                    declaration(DeclarationKind::Variable),
                )),
                StmtKind::Function(decl) => Some(self.declare(
                    table,
                    &decl.name,
                    SymbolFlags::FUNCTION,
                    declaration(DeclarationKind::Function),
                )),
                StmtKind::Namespace(decl) => Some(self.bind_namespace(file, decl, table, stmt.span)),
                StmtKind::GlobalAugmentation(body) => {
                    self.bind_statements(file, body, Table::Global, None);
                    None
                }
            };

            if let (Some(symbol), Some(module)) = (declared, module) {
                self.export_declaration(stmt, symbol, module);
            }
        }
    }

    fn export_declaration(&mut self, stmt: &Stmt, symbol: SymbolId, module: ModuleContext) {
        let name = self.symbols[symbol].name.clone();
        let exports = &mut self.symbols[module.symbol].members;
        if stmt.modifiers.contains(Modifiers::DEFAULT) {
            exports.insert("default".into(), symbol);
        } else if module.implicit_exports || stmt.modifiers.contains(Modifiers::EXPORT) {
            exports.insert(name, symbol);
        }
    }

    fn bind_namespace(
        &mut self,
        file: FileId,
        namespace: &NamespaceDecl,
        table: Table,
        span: Span,
    ) -> SymbolId {
        let symbol = self.declare(
            table,
            &namespace.name,
            SymbolFlags::NAMESPACE,
            Declaration {
                file,
                span,
                kind: DeclarationKind::Namespace,
            },
        );
        match &namespace.body {
            NamespaceBody::Block(statements) => {
                self.bind_statements(file, statements, Table::Members(symbol), None);
            }
            NamespaceBody::Nested(inner) => {
                self.bind_namespace(file, inner, Table::Members(symbol), span);
            }
        }
        symbol
    }

    fn bind_import(&mut self, file: FileId, import: &ImportDecl, table: Table) {
        let module_specifier = &import.module.value;

        if let Some(default) = &import.default {
            let kind = DeclarationKind::ImportClause {
                module_specifier: module_specifier.clone(),
            };
            self.declare_alias(file, table, default, kind, module_specifier, AliasTarget::Default);
        }

        match &import.bindings {
            Some(ImportBindings::Named(specifiers)) => {
                for specifier in specifiers {
                    let kind = DeclarationKind::ImportSpecifier {
                        module_specifier: module_specifier.clone(),
                        imported_name: specifier.imported_name().into(),
                    };
                    let target = AliasTarget::Export(specifier.imported_name().into());
                    self.declare_alias(file, table, &specifier.name, kind, module_specifier, target);
                }
            }
            Some(ImportBindings::Namespace(name)) => {
                let kind = DeclarationKind::NamespaceImport {
                    module_specifier: module_specifier.clone(),
                };
                self.declare_alias(file, table, name, kind, module_specifier, AliasTarget::Module);
            }
            None => {}
        }
    }

    fn declare_alias(
        &mut self,
        file: FileId,
        table: Table,
        name: &Ident,
        kind: DeclarationKind,
        module_specifier: &str,
        target: AliasTarget,
    ) {
        let alias = self.declare(
            table,
            name,
            SymbolFlags::ALIAS,
            Declaration {
                file,
                span: name.span,
                kind,
            },
        );
        self.pending.push(PendingAlias {
            alias,
            module_specifier: module_specifier.into(),
            target,
        });
    }

    /// `export { X }`, `export default X` and `export = X` in a module.
    ///
    /// Runs after every file is declared; qualified names only see through
    /// namespaces here, since aliases are not linked yet.
    fn bind_local_exports(&mut self, file: &SourceFile, module: SymbolId) {
        let locals = Table::Locals(file.id);
        for stmt in &file.statements {
            match &stmt.kind {
                StmtKind::Export(export) if export.module.is_none() => {
                    for specifier in &export.specifiers {
                        let local = specifier.property_name.as_ref().unwrap_or(&specifier.name);
                        let Some(symbol) = self.lookup_top_level(locals, &local.name) else {
                            tracing::debug!(name = %local.name, "export of unknown local");
                            continue;
                        };
                        self.resolutions.insert(local.id, symbol);
                        self.resolutions.insert(specifier.name.id, symbol);
                        self.symbols[module]
                            .members
                            .insert(specifier.name.name.clone(), symbol);
                    }
                }
                StmtKind::ExportAssignment(assignment) => {
                    let key = if assignment.is_export_equals {
                        "export="
                    } else {
                        "default"
                    };
                    if let Some(symbol) = self.lookup_entity_unlinked(locals, &assignment.expression)
                    {
                        self.symbols[module].members.insert(key.into(), symbol);
                    }
                }
                _ => {}
            }
        }
    }

    fn lookup_top_level(&self, locals: Table, name: &str) -> Option<SymbolId> {
        self.table(locals)
            .get(name)
            .or_else(|| self.globals.get(name))
            .copied()
    }

    fn lookup_entity_unlinked(&self, locals: Table, name: &EntityName) -> Option<SymbolId> {
        match name {
            EntityName::Ident(ident) => self.lookup_top_level(locals, &ident.name),
            EntityName::Qualified(left, right) => {
                let container = self.lookup_entity_unlinked(locals, left)?;
                self.symbols[container].members.get(&right.name).copied()
            }
        }
    }

    fn link_aliases(&mut self) {
        let mut unlinked = 0usize;
        for pending in std::mem::take(&mut self.pending) {
            let Some(&module) = self.modules.get(&pending.module_specifier) else {
                unlinked += 1;
                continue;
            };
            let exports = &self.symbols[module].members;
            let target = match &pending.target {
                AliasTarget::Export(name) => exports.get(name).copied(),
                AliasTarget::Default => exports
                    .get("default")
                    .or_else(|| exports.get("export="))
                    .copied()
                    .or(Some(module)),
                AliasTarget::Module => exports.get("export=").copied().or(Some(module)),
            };
            if target.is_none() {
                unlinked += 1;
            }
            self.symbols[pending.alias].alias_target = target;
        }
        tracing::debug!(unlinked, "linked aliases");
    }
}
