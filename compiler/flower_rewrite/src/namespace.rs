//! Namespace-rewrite trees.

use rustc_hash::FxHashMap;

use crate::RewriteRule;

/// Rules for the type names of one module or namespace, plus nested
/// namespaces by name.
///
/// Pure data: built once and never tied to a particular program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceRewrite {
    types: FxHashMap<String, RewriteRule>,
    namespaces: FxHashMap<String, NamespaceRewrite>,
}

impl NamespaceRewrite {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, rule: RewriteRule) -> Self {
        self.types.insert(name.into(), rule);
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, name: impl Into<String>, namespace: NamespaceRewrite) -> Self {
        self.namespaces.insert(name.into(), namespace);
        self
    }

    pub fn type_rule(&self, name: &str) -> Option<&RewriteRule> {
        self.types.get(name)
    }

    pub fn namespace(&self, name: &str) -> Option<&NamespaceRewrite> {
        self.namespaces.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = (&str, &RewriteRule)> {
        self.types.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &NamespaceRewrite)> {
        self.namespaces.iter().map(|(name, ns)| (name.as_str(), ns))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.namespaces.is_empty()
    }

    /// The rule at a dotted path: every segment but the last names a
    /// namespace, the last names a type.
    ///
    /// `lookup_path(&["JSX", "Element"])` finds `Element` in namespace
    /// `JSX`.
    pub fn lookup_path(&self, path: &[&str]) -> Option<&RewriteRule> {
        let (last, namespaces) = path.split_last()?;
        let mut current = self;
        for segment in namespaces {
            current = current.namespace(segment)?;
        }
        current.type_rule(last)
    }

    /// Every rule in the tree with its dotted path, sorted by path.
    pub fn rule_paths(&self) -> Vec<(String, &RewriteRule)> {
        let mut out = Vec::new();
        self.collect_paths("", &mut out);
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    fn collect_paths<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a RewriteRule)>) {
        for (name, rule) in &self.types {
            out.push((format!("{prefix}{name}"), rule));
        }
        for (name, namespace) in &self.namespaces {
            namespace.collect_paths(&format!("{prefix}{name}."), out);
        }
    }

    /// Merge `other` into `self`. Namespaces merge recursively; on a type
    /// name present in both, `other`'s rule wins.
    pub fn merge(&mut self, other: NamespaceRewrite) {
        self.types.extend(other.types);
        for (name, namespace) in other.namespaces {
            match self.namespaces.get_mut(&name) {
                Some(existing) => existing.merge(namespace),
                None => {
                    self.namespaces.insert(name, namespace);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
