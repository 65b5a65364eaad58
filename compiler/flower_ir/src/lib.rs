//! Flower IR - shared types for the declaration-file rewriter.
//!
//! - Spans for source locations
//! - Dense indices for files, name nodes and symbols
//! - The declaration-file AST and its visitor
//! - The [`ProgramModel`] contract the rewrite engine consumes
//!
//! # Design Philosophy
//!
//! - **Index, don't point**: symbols are `SymbolId(u32)` handles owned by a
//!   program model; nothing in this crate holds a reference into a binder.
//! - **Names carry identity**: every symbol-bearing name is an [`Ident`]
//!   with a [`NodeId`], so resolution is a lookup, not a re-walk.

mod ast;
mod ids;
mod program;
mod span;
pub mod visitor;

pub use ast::{
    ClassDecl, EntityName, EnumDecl, EnumMember, ExportAssignment, ExportDecl, ExportSpecifier,
    FunctionDecl, Ident, ImportBindings, ImportDecl, ImportSpecifier, IndexSignature,
    InterfaceDecl, KeywordType, LiteralType, Member, MethodSignature, Modifiers, NamespaceBody,
    NamespaceDecl, Param, PropertyName, PropertySignature, Signature, SourceFile, Stmt, StmtKind,
    StringLit, TypeAliasDecl, TypeKind, TypeNode, TypeOperator, TypeParam, TypeReference,
    VariableDecl, VariableKind,
};
pub use ids::{FileId, NodeId, SymbolId};
pub use program::{Declaration, DeclarationKind, ProgramModel, SymbolFlags};
pub use span::{Span, SpanError};
