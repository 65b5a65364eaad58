//! The finished decision surface.

use flower_ir::{EntityName, Ident, ProgramModel, SymbolId};
use flower_rewrite::{NamespaceRewrite, RewriteRule};
use rustc_hash::FxHashMap;

/// Rewrite decisions keyed by symbol.
///
/// Two tracks: a symbol may carry a type rule (what its name becomes in type
/// position) or a namespace classification (the rules for names reached
/// through it as a qualifier). Symbol ids are only meaningful for the
/// program the table was built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable<'r> {
    types: FxHashMap<SymbolId, RewriteRule>,
    namespaces: FxHashMap<SymbolId, &'r NamespaceRewrite>,
}

impl<'r> SymbolTable<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a type rule, returning the one it replaces.
    pub(crate) fn assign(&mut self, symbol: SymbolId, rule: RewriteRule) -> Option<RewriteRule> {
        self.types.insert(symbol, rule)
    }

    pub(crate) fn assign_namespace(&mut self, symbol: SymbolId, rewrites: &'r NamespaceRewrite) {
        self.namespaces.insert(symbol, rewrites);
    }

    pub fn rule_for_symbol(&self, symbol: SymbolId) -> Option<&RewriteRule> {
        self.types.get(&symbol)
    }

    pub fn namespace_rule_for_symbol(&self, symbol: SymbolId) -> Option<&'r NamespaceRewrite> {
        self.namespaces.get(&symbol).copied()
    }

    /// The rule for `qualifier.name`, where `qualifier` is classified as a
    /// namespace.
    pub fn rule_for_qualified_name(&self, qualifier: SymbolId, name: &str) -> Option<&RewriteRule> {
        self.namespace_rule_for_symbol(qualifier)?.type_rule(name)
    }

    /// The rule for a type name as written.
    ///
    /// Tries the symbol the name resolves to first. For a qualified name,
    /// falls back to the qualifier's namespace classification, and then to
    /// the leftmost segment's, walking the rest of the path through nested
    /// namespaces. The fallback is what finds `React.Component` when the
    /// module behind `React` is not part of the program.
    pub fn rule_for_type_reference<P>(&self, program: &P, name: &EntityName) -> Option<&RewriteRule>
    where
        P: ProgramModel + ?Sized,
    {
        let direct = program
            .symbol_at(name.rightmost())
            .and_then(|symbol| self.rule_for_symbol(symbol));
        if direct.is_some() {
            return direct;
        }

        let qualifier = name.qualifier()?;
        let through_qualifier = program
            .symbol_at(qualifier.rightmost())
            .and_then(|symbol| self.rule_for_qualified_name(symbol, name.rightmost().as_str()));
        if through_qualifier.is_some() || qualifier.qualifier().is_none() {
            return through_qualifier;
        }

        let segments = name.segments();
        let (leftmost, rest) = segments.split_first()?;
        let rewrites = self.namespace_rule_for_symbol(program.symbol_at(leftmost)?)?;
        let path: Vec<&str> = rest.iter().map(|ident| ident.as_str()).collect();
        rewrites.lookup_path(&path)
    }

    /// The new name for a declaration whose type is renamed.
    pub fn renamed_declaration<P>(&self, program: &P, name: &Ident) -> Option<&str>
    where
        P: ProgramModel + ?Sized,
    {
        match self.rule_for_symbol(program.symbol_at(name)?)? {
            RewriteRule::RenameType { name } => Some(name),
            _ => None,
        }
    }

    /// Symbols with a type rule.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.namespaces.is_empty()
    }

    /// Type rules, ordered by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &RewriteRule)> {
        let mut entries: Vec<_> = self.types.iter().map(|(&symbol, rule)| (symbol, rule)).collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries.into_iter()
    }

    /// Namespace classifications, ordered by symbol.
    pub fn namespaces(&self) -> impl Iterator<Item = (SymbolId, &'r NamespaceRewrite)> + '_ {
        let mut entries: Vec<_> = self
            .namespaces
            .iter()
            .map(|(&symbol, &rewrites)| (symbol, rewrites))
            .collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries.into_iter()
    }

    pub fn rename_count(&self) -> usize {
        self.types.values().filter(|rule| rule.is_rename()).count()
    }
}
