//! What to do with one type name.

use std::fmt;

use flower_ir::{EntityName, TypeNode};

use crate::{Converter, MacroResult};

/// Signature of a type-reference macro.
///
/// Given the converter, the name as written, and the type arguments as
/// written (if any), produce the replacement reference.
pub type ConvertFn = fn(&mut dyn Converter, &EntityName, Option<&[TypeNode]>) -> MacroResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewriteRule {
    /// Replace the name everywhere it is referenced; arguments unchanged.
    FixedName { name: String },

    /// Rename a type that shares its name with a value. Applies at the
    /// definition and every reference; the value keeps its name.
    RenameType { name: String },

    /// Replace references with `name`, bound by an import of
    /// `imported_name` from `source_module`.
    SubstituteType {
        name: String,
        source_module: String,
        imported_name: String,
    },

    /// Rebuild the reference, arguments included, with custom code.
    TypeReferenceMacro(TypeReferenceMacro),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    FixedName,
    RenameType,
    SubstituteType,
    TypeReferenceMacro,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleKind::FixedName => "FixedName",
            RuleKind::RenameType => "RenameType",
            RuleKind::SubstituteType => "SubstituteType",
            RuleKind::TypeReferenceMacro => "TypeReferenceMacro",
        })
    }
}

impl RewriteRule {
    pub fn fixed_name(name: impl Into<String>) -> Self {
        RewriteRule::FixedName { name: name.into() }
    }

    pub fn rename_type(name: impl Into<String>) -> Self {
        RewriteRule::RenameType { name: name.into() }
    }

    pub fn substitute(
        name: impl Into<String>,
        source_module: impl Into<String>,
        imported_name: impl Into<String>,
    ) -> Self {
        RewriteRule::SubstituteType {
            name: name.into(),
            source_module: source_module.into(),
            imported_name: imported_name.into(),
        }
    }

    pub fn type_macro(name: &'static str, convert: ConvertFn) -> Self {
        RewriteRule::TypeReferenceMacro(TypeReferenceMacro { name, convert })
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            RewriteRule::FixedName { .. } => RuleKind::FixedName,
            RewriteRule::RenameType { .. } => RuleKind::RenameType,
            RewriteRule::SubstituteType { .. } => RuleKind::SubstituteType,
            RewriteRule::TypeReferenceMacro(_) => RuleKind::TypeReferenceMacro,
        }
    }

    /// The name emitted in place of the original, for the rules that have
    /// a fixed one.
    pub fn replacement_name(&self) -> Option<&str> {
        match self {
            RewriteRule::FixedName { name }
            | RewriteRule::RenameType { name }
            | RewriteRule::SubstituteType { name, .. } => Some(name),
            RewriteRule::TypeReferenceMacro(_) => None,
        }
    }

    pub fn is_rename(&self) -> bool {
        matches!(self, RewriteRule::RenameType { .. })
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteRule::FixedName { name } | RewriteRule::RenameType { name } => {
                write!(f, "{} {name}", self.kind())
            }
            RewriteRule::SubstituteType {
                name,
                source_module,
                imported_name,
            } => write!(
                f,
                "SubstituteType {name} (`{imported_name}` from '{source_module}')"
            ),
            RewriteRule::TypeReferenceMacro(mac) => write!(f, "TypeReferenceMacro {}", mac.name),
        }
    }
}

/// A named macro. Equality is by name.
#[derive(Copy, Clone)]
pub struct TypeReferenceMacro {
    pub name: &'static str,
    pub convert: ConvertFn,
}

impl TypeReferenceMacro {
    pub fn expand(
        &self,
        converter: &mut dyn Converter,
        type_name: &EntityName,
        type_args: Option<&[TypeNode]>,
    ) -> MacroResult {
        (self.convert)(converter, type_name, type_args)
    }
}

impl fmt::Debug for TypeReferenceMacro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeReferenceMacro").field(&self.name).finish()
    }
}

impl PartialEq for TypeReferenceMacro {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeReferenceMacro {}

#[cfg(test)]
mod tests;
