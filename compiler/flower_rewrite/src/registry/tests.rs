use super::*;
use crate::RewriteRule;
use pretty_assertions::assert_eq;

#[test]
fn builtin_libraries() {
    assert_eq!(builtin_registry().libraries(), vec!["react", "react-native"]);
}

#[test]
fn builtin_registry_is_shared() {
    assert!(std::ptr::eq(builtin_registry(), builtin_registry()));
    assert_eq!(builtin_registry(), &RewriteRegistry::builtin());
}

#[test]
fn builtin_lookups() {
    let registry = builtin_registry();
    assert_eq!(
        registry.default_library().type_rule("Readonly"),
        Some(&RewriteRule::fixed_name("$ReadOnly"))
    );
    assert!(registry
        .library("react")
        .and_then(|react| react.type_rule("Component"))
        .is_some());
    assert!(registry.global().lookup_path(&["JSX", "Element"]).is_some());
    assert!(registry.library("vue").is_none());
}

#[test]
fn with_library_merges() {
    let registry = RewriteRegistry::new()
        .with_library(
            "lib",
            NamespaceRewrite::new()
                .with_type("A", RewriteRule::fixed_name("A1"))
                .with_type("B", RewriteRule::fixed_name("B1")),
        )
        .with_library(
            "lib",
            NamespaceRewrite::new().with_type("B", RewriteRule::fixed_name("B2")),
        );
    let lib = registry.library("lib").cloned().unwrap_or_default();
    assert_eq!(lib.type_rule("A"), Some(&RewriteRule::fixed_name("A1")));
    assert_eq!(lib.type_rule("B"), Some(&RewriteRule::fixed_name("B2")));
}

#[test]
fn empty_registry() {
    let registry = RewriteRegistry::new();
    assert!(registry.default_library().is_empty());
    assert!(registry.global().is_empty());
    assert!(registry.libraries().is_empty());
}
