//! The builtin catalogs as seen from outside the crate.

use flower_rewrite::{builtin_registry, RuleKind};
use pretty_assertions::assert_eq;

fn listing(tree: &flower_rewrite::NamespaceRewrite) -> Vec<String> {
    tree.rule_paths()
        .into_iter()
        .map(|(path, rule)| format!("{path}: {}", rule.kind()))
        .collect()
}

#[test]
fn default_library_catalog() {
    assert_eq!(
        listing(builtin_registry().default_library()),
        vec![
            "Omit: TypeReferenceMacro",
            "Readonly: FixedName",
            "ReadonlyArray: FixedName",
            "Record: TypeReferenceMacro",
        ]
    );
}

#[test]
fn global_catalog() {
    assert_eq!(
        listing(builtin_registry().global()),
        vec![
            "JSX.Element: TypeReferenceMacro",
            "ReactNavigation.RootParamList: SubstituteType",
        ]
    );
}

#[test]
fn library_catalogs() {
    let registry = builtin_registry();
    let react = registry.library("react").map(listing).unwrap_or_default();
    assert_eq!(
        react,
        vec![
            "Component: TypeReferenceMacro",
            "ReactElement: TypeReferenceMacro",
            "ReactNode: FixedName",
            "Ref: SubstituteType",
            "RefAttributes: SubstituteType",
        ]
    );
    let native = registry
        .library("react-native")
        .map(listing)
        .unwrap_or_default();
    assert_eq!(
        native,
        vec!["StyleProp: SubstituteType", "ViewStyle: SubstituteType"]
    );
}

#[test]
fn substitute_names_share_a_prefix() {
    let registry = builtin_registry();
    let trees = [registry.global()]
        .into_iter()
        .chain(registry.libraries().into_iter().filter_map(|m| registry.library(m)));
    for tree in trees {
        for (path, rule) in tree.rule_paths() {
            if rule.kind() == RuleKind::SubstituteType {
                let name = rule.replacement_name().unwrap_or_default();
                assert!(
                    name.starts_with(flower_rewrite::SUBST_PREFIX),
                    "{path} substitutes unprefixed `{name}`"
                );
            }
        }
    }
}
