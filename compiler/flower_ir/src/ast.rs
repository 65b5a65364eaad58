//! Declaration-file AST.
//!
//! Covers the subset of type-definition syntax that carries type-level
//! names: imports and exports, type aliases, interfaces, classes, enums,
//! namespaces, global augmentations, and ambient variable and function
//! signatures. Every name that can bind or reference a symbol is an
//! [`Ident`] carrying a [`NodeId`]; everything else (property keys,
//! parameter names) is plain text.

use std::fmt;
use std::path::PathBuf;

use bitflags::bitflags;

use crate::{FileId, NodeId, Span};

/// A name occurrence that participates in symbol resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: Box<str>,
    pub span: Span,
    pub id: NodeId,
}

impl Ident {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// A string literal, such as a module specifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringLit {
    pub value: Box<str>,
    pub span: Span,
}

/// A possibly-qualified name: `Foo`, `React.Component`, `a.b.C`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityName {
    Ident(Ident),
    Qualified(Box<EntityName>, Ident),
}

impl EntityName {
    /// The last segment; the name the whole reference resolves to.
    pub fn rightmost(&self) -> &Ident {
        match self {
            EntityName::Ident(ident) | EntityName::Qualified(_, ident) => ident,
        }
    }

    /// The first segment; resolved through ordinary scope lookup.
    pub fn leftmost(&self) -> &Ident {
        match self {
            EntityName::Ident(ident) => ident,
            EntityName::Qualified(left, _) => left.leftmost(),
        }
    }

    /// Everything before the last dot, if qualified.
    pub fn qualifier(&self) -> Option<&EntityName> {
        match self {
            EntityName::Ident(_) => None,
            EntityName::Qualified(left, _) => Some(left),
        }
    }

    /// All segments, left to right.
    pub fn segments(&self) -> Vec<&Ident> {
        let mut segments = match self {
            EntityName::Ident(_) => Vec::new(),
            EntityName::Qualified(left, _) => left.segments(),
        };
        segments.push(self.rightmost());
        segments
    }

    pub fn span(&self) -> Span {
        self.leftmost().span.merge(self.rightmost().span)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityName::Ident(ident) => f.write_str(ident.as_str()),
            EntityName::Qualified(left, right) => write!(f, "{left}.{}", right.as_str()),
        }
    }
}

/// One parsed declaration file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub id: FileId,
    pub path: PathBuf,
    pub statements: Vec<Stmt>,
}

impl SourceFile {
    /// Whether the file is an external module (has any import or export).
    ///
    /// Files that are not modules contribute their top-level declarations
    /// to the global scope.
    pub fn is_module(&self) -> bool {
        self.statements.iter().any(|stmt| {
            stmt.modifiers.contains(Modifiers::EXPORT)
                || matches!(
                    stmt.kind,
                    StmtKind::Import(_) | StmtKind::Export(_) | StmtKind::ExportAssignment(_)
                )
        })
    }
}

bitflags! {
    /// Modifiers written before a declaration.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const EXPORT = 1;
        const DECLARE = 1 << 1;
        const DEFAULT = 1 << 2;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub modifiers: Modifiers,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StmtKind {
    Import(ImportDecl),
    /// `export { a, b as c }` or `export { a } from 'm'`.
    Export(ExportDecl),
    /// `export default x;` or `export = x;`.
    ExportAssignment(ExportAssignment),
    TypeAlias(TypeAliasDecl),
    Interface(InterfaceDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Namespace(NamespaceDecl),
    /// `declare global { ... }`; only legal at the top level of a file.
    GlobalAugmentation(Vec<Stmt>),
    Variable(VariableDecl),
    Function(FunctionDecl),
}

impl StmtKind {
    /// The name this statement declares, for the single-name declarations.
    pub fn declared_name(&self) -> Option<&Ident> {
        match self {
            StmtKind::TypeAlias(decl) => Some(&decl.name),
            StmtKind::Interface(decl) => Some(&decl.name),
            StmtKind::Class(decl) => Some(&decl.name),
            StmtKind::Enum(decl) => Some(&decl.name),
            StmtKind::Namespace(decl) => Some(&decl.name),
            StmtKind::Variable(decl) => Some(&decl.name),
            StmtKind::Function(decl) => Some(&decl.name),
            StmtKind::Import(_)
            | StmtKind::Export(_)
            | StmtKind::ExportAssignment(_)
            | StmtKind::GlobalAugmentation(_) => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            StmtKind::Import(_) => "import",
            StmtKind::Export(_) => "export",
            StmtKind::ExportAssignment(_) => "export assignment",
            StmtKind::TypeAlias(_) => "type alias",
            StmtKind::Interface(_) => "interface",
            StmtKind::Class(_) => "class",
            StmtKind::Enum(_) => "enum",
            StmtKind::Namespace(_) => "namespace",
            StmtKind::GlobalAugmentation(_) => "global augmentation",
            StmtKind::Variable(_) => "variable",
            StmtKind::Function(_) => "function",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDecl {
    pub type_only: bool,
    /// `import React from 'react'`
    pub default: Option<Ident>,
    pub bindings: Option<ImportBindings>,
    pub module: StringLit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportBindings {
    /// `{ a, b as c }`
    Named(Vec<ImportSpecifier>),
    /// `* as ns`
    Namespace(Ident),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// The original name when renamed with `as`.
    pub property_name: Option<Ident>,
    /// The local binding.
    pub name: Ident,
    pub type_only: bool,
}

impl ImportSpecifier {
    /// Name of the member in the imported module.
    pub fn imported_name(&self) -> &str {
        self.property_name.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDecl {
    pub type_only: bool,
    pub specifiers: Vec<ExportSpecifier>,
    /// Present for re-exports: `export { a } from 'm'`.
    pub module: Option<StringLit>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportSpecifier {
    /// The local (or re-exported) name when renamed with `as`.
    pub property_name: Option<Ident>,
    /// The exported name.
    pub name: Ident,
}

impl ExportSpecifier {
    /// Name looked up in the local scope or the source module.
    pub fn local_name(&self) -> &str {
        self.property_name.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportAssignment {
    /// `export = x` rather than `export default x`.
    pub is_export_equals: bool,
    pub expression: EntityName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParam {
    pub name: Ident,
    pub constraint: Option<TypeNode>,
    pub default: Option<TypeNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAliasDecl {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub ty: TypeNode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<TypeReference>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub extends: Option<TypeReference>,
    pub implements: Vec<TypeReference>,
    pub members: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: Ident,
    pub is_const: bool,
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMember {
    pub name: PropertyName,
    pub initializer: Option<LiteralType>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub name: Ident,
    pub body: NamespaceBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NamespaceBody {
    Block(Vec<Stmt>),
    /// The inner part of a dotted declaration: `namespace a.b { }`.
    Nested(Box<NamespaceDecl>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDecl {
    pub kind: VariableKind,
    pub name: Ident,
    pub ty: Option<TypeNode>,
    pub initializer: Option<LiteralType>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub signature: Signature,
}

/// Parameters and return type shared by functions, methods and function types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub return_type: Option<TypeNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: Box<str>,
    pub rest: bool,
    pub optional: bool,
    pub ty: Option<TypeNode>,
}

/// A property key. Never resolved to a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyName {
    pub text: Box<str>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Member {
    Property(PropertySignature),
    Method(MethodSignature),
    Index(IndexSignature),
    Call(Signature),
    Construct(Signature),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySignature {
    pub name: PropertyName,
    pub optional: bool,
    pub readonly: bool,
    pub ty: Option<TypeNode>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: PropertyName,
    pub optional: bool,
    pub signature: Signature,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSignature {
    pub parameter: Box<str>,
    pub key: TypeNode,
    pub value: TypeNode,
    pub readonly: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeNode {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Keyword(KeywordType),
    Literal(LiteralType),
    Reference(TypeReference),
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Array(Box<TypeNode>),
    Tuple(Vec<TypeNode>),
    Object(Vec<Member>),
    Function(Box<Signature>),
    /// `typeof x`
    Query(EntityName),
    Operator(TypeOperator, Box<TypeNode>),
    /// `T["key"]`
    IndexedAccess(Box<TypeNode>, Box<TypeNode>),
}

impl TypeNode {
    pub fn new(kind: TypeKind, span: Span) -> Self {
        TypeNode { kind, span }
    }

    /// The text of a string literal type, if this is one.
    pub fn as_string_literal(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Literal(LiteralType::String(text)) => Some(text),
            _ => None,
        }
    }
}

/// A type reference: a name with optional type arguments.
///
/// Also used for `extends`/`implements` heritage clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeReference {
    pub name: EntityName,
    pub type_args: Option<Vec<TypeNode>>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeywordType {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    Object,
    This,
}

impl KeywordType {
    /// Recognize a keyword type by its spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "any" => KeywordType::Any,
            "unknown" => KeywordType::Unknown,
            "never" => KeywordType::Never,
            "void" => KeywordType::Void,
            "undefined" => KeywordType::Undefined,
            "null" => KeywordType::Null,
            "string" => KeywordType::String,
            "number" => KeywordType::Number,
            "boolean" => KeywordType::Boolean,
            "bigint" => KeywordType::BigInt,
            "symbol" => KeywordType::Symbol,
            "object" => KeywordType::Object,
            "this" => KeywordType::This,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordType::Any => "any",
            KeywordType::Unknown => "unknown",
            KeywordType::Never => "never",
            KeywordType::Void => "void",
            KeywordType::Undefined => "undefined",
            KeywordType::Null => "null",
            KeywordType::String => "string",
            KeywordType::Number => "number",
            KeywordType::Boolean => "boolean",
            KeywordType::BigInt => "bigint",
            KeywordType::Symbol => "symbol",
            KeywordType::Object => "object",
            KeywordType::This => "this",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralType {
    String(Box<str>),
    /// Kept as written.
    Number(Box<str>),
    Boolean(bool),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperator {
    Keyof,
    Readonly,
    Unique,
}

#[cfg(test)]
mod tests;
