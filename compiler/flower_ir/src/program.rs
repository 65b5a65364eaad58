//! The program-model contract.
//!
//! The rewrite engine never parses or binds anything itself. It asks a
//! [`ProgramModel`] which files exist, which of them belong to the implicit
//! standard library, and what symbol each name occurrence resolves to.

use std::fmt;

use bitflags::bitflags;

use crate::{FileId, Ident, SourceFile, Span, SymbolId};

bitflags! {
    /// What kinds of declaration a symbol merges.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u16 {
        const TYPE_ALIAS = 1;
        const INTERFACE = 1 << 1;
        const CLASS = 1 << 2;
        const ENUM = 1 << 3;
        const NAMESPACE = 1 << 4;
        const VARIABLE = 1 << 5;
        const FUNCTION = 1 << 6;
        const ALIAS = 1 << 7;
        const MODULE = 1 << 8;
        const TYPE_PARAMETER = 1 << 9;

        const VALUE = Self::VARIABLE.bits() | Self::FUNCTION.bits() | Self::CLASS.bits() | Self::ENUM.bits();
        const TYPE = Self::TYPE_ALIAS.bits() | Self::INTERFACE.bits() | Self::CLASS.bits() | Self::ENUM.bits() | Self::TYPE_PARAMETER.bits();
    }
}

impl SymbolFlags {
    /// A type alias sharing its name with a value.
    ///
    /// The target vocabulary has one namespace for both, so the type side
    /// has to be renamed.
    #[inline]
    pub fn is_type_value_collision(self) -> bool {
        self.contains(SymbolFlags::TYPE_ALIAS) && self.intersects(SymbolFlags::VALUE)
    }
}

/// One declaration contributing to a symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub file: FileId,
    pub span: Span,
    pub kind: DeclarationKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    TypeAlias,
    Interface,
    Class,
    Enum,
    Namespace,
    Variable,
    Function,
    TypeParameter,
    /// The symbol of an external module itself.
    Module,
    /// `import { imported_name as local } from 'module_specifier'`
    ImportSpecifier {
        module_specifier: Box<str>,
        imported_name: Box<str>,
    },
    /// `import local from 'module_specifier'`
    ImportClause { module_specifier: Box<str> },
    /// `import * as local from 'module_specifier'`
    NamespaceImport { module_specifier: Box<str> },
    /// `export { local_name as exported }`, optionally `from` a module.
    ExportSpecifier {
        module_specifier: Option<Box<str>>,
        local_name: Box<str>,
    },
}

impl DeclarationKind {
    /// The module an import-like declaration names, if any.
    pub fn module_specifier(&self) -> Option<&str> {
        match self {
            DeclarationKind::ImportSpecifier {
                module_specifier, ..
            }
            | DeclarationKind::ImportClause { module_specifier }
            | DeclarationKind::NamespaceImport { module_specifier } => Some(module_specifier),
            DeclarationKind::ExportSpecifier {
                module_specifier, ..
            } => module_specifier.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::TypeAlias => f.write_str("type alias"),
            DeclarationKind::Interface => f.write_str("interface"),
            DeclarationKind::Class => f.write_str("class"),
            DeclarationKind::Enum => f.write_str("enum"),
            DeclarationKind::Namespace => f.write_str("namespace"),
            DeclarationKind::Variable => f.write_str("variable"),
            DeclarationKind::Function => f.write_str("function"),
            DeclarationKind::TypeParameter => f.write_str("type parameter"),
            DeclarationKind::Module => f.write_str("module"),
            DeclarationKind::ImportSpecifier {
                module_specifier,
                imported_name,
            } => write!(f, "import of `{imported_name}` from '{module_specifier}'"),
            DeclarationKind::ImportClause { module_specifier } => {
                write!(f, "default import from '{module_specifier}'")
            }
            DeclarationKind::NamespaceImport { module_specifier } => {
                write!(f, "namespace import of '{module_specifier}'")
            }
            DeclarationKind::ExportSpecifier {
                module_specifier: Some(module_specifier),
                local_name,
            } => write!(f, "re-export of `{local_name}` from '{module_specifier}'"),
            DeclarationKind::ExportSpecifier {
                module_specifier: None,
                local_name,
            } => write!(f, "export of `{local_name}`"),
        }
    }
}

/// A symbol-resolved program.
///
/// Implementations own the parsed files and the binder's results; the
/// rewrite engine only reads through this trait.
pub trait ProgramModel {
    /// All files, in `FileId` order.
    fn source_files(&self) -> &[SourceFile];

    fn source_file(&self, file: FileId) -> Option<&SourceFile> {
        self.source_files().get(file.index())
    }

    /// Whether the file is part of the implicit standard library.
    fn is_default_library(&self, file: FileId) -> bool;

    /// The symbol a name occurrence resolves to.
    fn symbol_at(&self, name: &Ident) -> Option<SymbolId>;

    fn symbol_name(&self, symbol: SymbolId) -> &str;

    fn symbol_flags(&self, symbol: SymbolId) -> SymbolFlags;

    fn declarations(&self, symbol: SymbolId) -> &[Declaration];

    /// One step along an alias chain: what an import or re-export binds to.
    fn immediate_aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId>;
}
