//! AST visitor.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to act at specific nodes; call the matching
//! `walk_*` from an override to keep descending.
//!
//! Two hooks see every name that can carry a symbol:
//! - `visit_declaration_name` for names introduced by a declaration,
//!   import binding, export specifier or type parameter
//! - `visit_entity_name` for names used in type position, heritage clauses,
//!   `typeof` queries and export assignments
//!
//! # Example
//!
//! ```text
//! struct CountReferences {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountReferences {
//!     fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
//!         self.count += 1;
//!         walk_type_reference(self, reference);
//!     }
//! }
//! ```

use crate::ast::{
    EntityName, Ident, ImportBindings, Member, NamespaceBody, NamespaceDecl, Signature,
    SourceFile, Stmt, StmtKind, TypeKind, TypeNode, TypeParam, TypeReference,
};

pub trait Visitor<'ast> {
    fn visit_source_file(&mut self, file: &'ast SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_namespace(&mut self, namespace: &'ast NamespaceDecl) {
        walk_namespace(self, namespace);
    }

    fn visit_declaration_name(&mut self, name: &'ast Ident) {
        let _ = name;
    }

    fn visit_type_param(&mut self, param: &'ast TypeParam) {
        walk_type_param(self, param);
    }

    fn visit_type(&mut self, ty: &'ast TypeNode) {
        walk_type(self, ty);
    }

    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        walk_type_reference(self, reference);
    }

    fn visit_entity_name(&mut self, name: &'ast EntityName) {
        let _ = name;
    }

    fn visit_member(&mut self, member: &'ast Member) {
        walk_member(self, member);
    }

    fn visit_signature(&mut self, signature: &'ast Signature) {
        walk_signature(self, signature);
    }
}

pub fn walk_source_file<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, file: &'ast SourceFile) {
    for stmt in &file.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Import(import) => {
            if let Some(default) = &import.default {
                visitor.visit_declaration_name(default);
            }
            match &import.bindings {
                Some(ImportBindings::Named(specifiers)) => {
                    for specifier in specifiers {
                        visitor.visit_declaration_name(&specifier.name);
                    }
                }
                Some(ImportBindings::Namespace(name)) => visitor.visit_declaration_name(name),
                None => {}
            }
        }
        StmtKind::Export(export) => {
            for specifier in &export.specifiers {
                visitor.visit_declaration_name(&specifier.name);
            }
        }
        StmtKind::ExportAssignment(assignment) => {
            visitor.visit_entity_name(&assignment.expression);
        }
        StmtKind::TypeAlias(decl) => {
            visitor.visit_declaration_name(&decl.name);
            walk_type_params(visitor, &decl.type_params);
            visitor.visit_type(&decl.ty);
        }
        StmtKind::Interface(decl) => {
            visitor.visit_declaration_name(&decl.name);
            walk_type_params(visitor, &decl.type_params);
            for heritage in &decl.extends {
                visitor.visit_type_reference(heritage);
            }
            for member in &decl.members {
                visitor.visit_member(member);
            }
        }
        StmtKind::Class(decl) => {
            visitor.visit_declaration_name(&decl.name);
            walk_type_params(visitor, &decl.type_params);
            if let Some(heritage) = &decl.extends {
                visitor.visit_type_reference(heritage);
            }
            for heritage in &decl.implements {
                visitor.visit_type_reference(heritage);
            }
            for member in &decl.members {
                visitor.visit_member(member);
            }
        }
        StmtKind::Enum(decl) => visitor.visit_declaration_name(&decl.name),
        StmtKind::Namespace(decl) => visitor.visit_namespace(decl),
        StmtKind::GlobalAugmentation(statements) => {
            for stmt in statements {
                visitor.visit_stmt(stmt);
            }
        }
        StmtKind::Variable(decl) => {
            visitor.visit_declaration_name(&decl.name);
            if let Some(ty) = &decl.ty {
                visitor.visit_type(ty);
            }
        }
        StmtKind::Function(decl) => {
            visitor.visit_declaration_name(&decl.name);
            visitor.visit_signature(&decl.signature);
        }
    }
}

pub fn walk_namespace<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    namespace: &'ast NamespaceDecl,
) {
    visitor.visit_declaration_name(&namespace.name);
    match &namespace.body {
        NamespaceBody::Block(statements) => {
            for stmt in statements {
                visitor.visit_stmt(stmt);
            }
        }
        NamespaceBody::Nested(inner) => visitor.visit_namespace(inner),
    }
}

fn walk_type_params<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, params: &'ast [TypeParam]) {
    for param in params {
        visitor.visit_type_param(param);
    }
}

pub fn walk_type_param<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, param: &'ast TypeParam) {
    visitor.visit_declaration_name(&param.name);
    if let Some(constraint) = &param.constraint {
        visitor.visit_type(constraint);
    }
    if let Some(default) = &param.default {
        visitor.visit_type(default);
    }
}

pub fn walk_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast TypeNode) {
    match &ty.kind {
        TypeKind::Keyword(_) | TypeKind::Literal(_) => {}
        TypeKind::Reference(reference) => visitor.visit_type_reference(reference),
        TypeKind::Union(types) | TypeKind::Intersection(types) | TypeKind::Tuple(types) => {
            for ty in types {
                visitor.visit_type(ty);
            }
        }
        TypeKind::Array(element) | TypeKind::Operator(_, element) => visitor.visit_type(element),
        TypeKind::Object(members) => {
            for member in members {
                visitor.visit_member(member);
            }
        }
        TypeKind::Function(signature) => visitor.visit_signature(signature),
        TypeKind::Query(name) => visitor.visit_entity_name(name),
        TypeKind::IndexedAccess(object, index) => {
            visitor.visit_type(object);
            visitor.visit_type(index);
        }
    }
}

pub fn walk_type_reference<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    reference: &'ast TypeReference,
) {
    visitor.visit_entity_name(&reference.name);
    for arg in reference.type_args.iter().flatten() {
        visitor.visit_type(arg);
    }
}

pub fn walk_member<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, member: &'ast Member) {
    match member {
        Member::Property(property) => {
            if let Some(ty) = &property.ty {
                visitor.visit_type(ty);
            }
        }
        Member::Method(method) => visitor.visit_signature(&method.signature),
        Member::Index(index) => {
            visitor.visit_type(&index.key);
            visitor.visit_type(&index.value);
        }
        Member::Call(signature) | Member::Construct(signature) => {
            visitor.visit_signature(signature);
        }
    }
}

pub fn walk_signature<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    signature: &'ast Signature,
) {
    walk_type_params(visitor, &signature.type_params);
    for param in &signature.params {
        if let Some(ty) = &param.ty {
            visitor.visit_type(ty);
        }
    }
    if let Some(ret) = &signature.return_type {
        visitor.visit_type(ret);
    }
}
