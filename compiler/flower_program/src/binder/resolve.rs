//! Reference resolution.
//!
//! Walks each file with a scope stack and records, for every name in a
//! type position, the symbol it refers to. Lookup goes innermost scope
//! first (type parameters, enclosing namespaces), then the file's locals,
//! then the global scope. Aliases are not followed for the name itself;
//! only the qualifier of a qualified name is resolved through aliases.
//!
//! A scope entry only answers a lookup when it carries the meaning the
//! position asks for: a type reference skips a value-only local and keeps
//! searching outward, and `typeof x` skips a type-only one.

use flower_ir::visitor::{self, Visitor};
use flower_ir::{
    Declaration, DeclarationKind, EntityName, FileId, NamespaceBody, NamespaceDecl, Signature,
    SourceFile, Stmt, StmtKind, SymbolFlags, SymbolId, TypeKind, TypeNode, TypeParam,
};

use super::{Binder, Table};
use crate::symbols::NameTable;

/// Names in type position.
const TYPE_MEANING: SymbolFlags = SymbolFlags::TYPE
    .union(SymbolFlags::NAMESPACE)
    .union(SymbolFlags::ALIAS);

/// Names in `typeof` position.
const VALUE_MEANING: SymbolFlags = SymbolFlags::VALUE
    .union(SymbolFlags::NAMESPACE)
    .union(SymbolFlags::ALIAS);

/// The left side of a qualified name.
const QUALIFIER_MEANING: SymbolFlags = SymbolFlags::NAMESPACE
    .union(SymbolFlags::ENUM)
    .union(SymbolFlags::ALIAS)
    .union(SymbolFlags::MODULE);

enum Frame {
    Table(Table),
    TypeParams(NameTable),
}

struct Resolver<'b> {
    binder: &'b mut Binder,
    file: FileId,
    scopes: Vec<Frame>,
}

pub(super) fn resolve_file(binder: &mut Binder, file: &SourceFile) {
    let mut scopes = Vec::new();
    if binder.file_modules[file.id.index()].is_some() {
        scopes.push(Frame::Table(Table::Locals(file.id)));
    }
    let mut resolver = Resolver {
        binder,
        file: file.id,
        scopes,
    };
    resolver.visit_source_file(file);
}

impl Resolver<'_> {
    fn has_meaning(&self, symbol: SymbolId, meaning: SymbolFlags) -> bool {
        self.binder.symbols[symbol].flags.intersects(meaning)
    }

    fn lookup(&self, name: &str, meaning: SymbolFlags) -> Option<SymbolId> {
        let fits = |symbol: &SymbolId| self.has_meaning(*symbol, meaning);
        self.scopes
            .iter()
            .rev()
            .find_map(|frame| {
                match frame {
                    Frame::Table(table) => self.binder.table(*table).get(name).copied(),
                    Frame::TypeParams(params) => params.get(name).copied(),
                }
                .filter(fits)
            })
            .or_else(|| self.binder.globals.get(name).copied().filter(fits))
    }

    fn resolve(&mut self, name: &EntityName, meaning: SymbolFlags) -> Option<SymbolId> {
        let symbol = match name {
            EntityName::Ident(ident) => self.lookup(&ident.name, meaning)?,
            EntityName::Qualified(left, right) => {
                let container = self.resolve(left, QUALIFIER_MEANING)?;
                let container = self.binder.symbols.resolve_alias(container);
                let member = self.binder.symbols[container]
                    .members
                    .get(&right.name)
                    .copied()?;
                if !self.has_meaning(member, meaning) {
                    return None;
                }
                member
            }
        };
        self.binder.resolutions.insert(name.rightmost().id, symbol);
        Some(symbol)
    }

    /// Push a scope for `params`, if there are any.
    fn enter_type_params(&mut self, params: &[TypeParam]) -> bool {
        if params.is_empty() {
            return false;
        }
        let mut table = NameTable::default();
        for param in params {
            let symbol = self.binder.symbols.alloc(
                param.name.name.clone(),
                SymbolFlags::TYPE_PARAMETER,
                Declaration {
                    file: self.file,
                    span: param.name.span,
                    kind: DeclarationKind::TypeParameter,
                },
            );
            self.binder.resolutions.insert(param.name.id, symbol);
            table.insert(param.name.name.clone(), symbol);
        }
        self.scopes.push(Frame::TypeParams(table));
        true
    }
}

impl<'ast> Visitor<'ast> for Resolver<'_> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        if let StmtKind::ExportAssignment(assignment) = &stmt.kind {
            self.resolve(&assignment.expression, SymbolFlags::all());
            return;
        }
        let params: &[TypeParam] = match &stmt.kind {
            StmtKind::TypeAlias(decl) => &decl.type_params,
            StmtKind::Interface(decl) => &decl.type_params,
            StmtKind::Class(decl) => &decl.type_params,
            _ => &[],
        };
        let entered = self.enter_type_params(params);
        visitor::walk_stmt(self, stmt);
        if entered {
            self.scopes.pop();
        }
    }

    fn visit_type(&mut self, ty: &'ast TypeNode) {
        if let TypeKind::Query(name) = &ty.kind {
            self.resolve(name, VALUE_MEANING);
        } else {
            visitor::walk_type(self, ty);
        }
    }

    fn visit_namespace(&mut self, namespace: &'ast NamespaceDecl) {
        let Some(&symbol) = self.binder.resolutions.get(&namespace.name.id) else {
            return;
        };
        self.scopes.push(Frame::Table(Table::Members(symbol)));
        match &namespace.body {
            NamespaceBody::Block(statements) => {
                for stmt in statements {
                    self.visit_stmt(stmt);
                }
            }
            NamespaceBody::Nested(inner) => self.visit_namespace(inner),
        }
        self.scopes.pop();
    }

    fn visit_signature(&mut self, signature: &'ast Signature) {
        let entered = self.enter_type_params(&signature.type_params);
        visitor::walk_signature(self, signature);
        if entered {
            self.scopes.pop();
        }
    }

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        self.resolve(name, TYPE_MEANING);
    }
}
