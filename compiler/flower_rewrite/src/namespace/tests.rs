use super::*;
use pretty_assertions::assert_eq;

fn sample() -> NamespaceRewrite {
    NamespaceRewrite::new()
        .with_type("Top", RewriteRule::fixed_name("$Top"))
        .with_namespace(
            "JSX",
            NamespaceRewrite::new()
                .with_type("Element", RewriteRule::fixed_name("React$Element"))
                .with_namespace(
                    "Inner",
                    NamespaceRewrite::new().with_type("Deep", RewriteRule::fixed_name("$Deep")),
                ),
        )
}

#[test]
fn lookup_by_path() {
    let tree = sample();
    assert_eq!(
        tree.lookup_path(&["JSX", "Element"]),
        Some(&RewriteRule::fixed_name("React$Element"))
    );
    assert_eq!(
        tree.lookup_path(&["JSX", "Inner", "Deep"]),
        Some(&RewriteRule::fixed_name("$Deep"))
    );
    assert_eq!(tree.lookup_path(&["Top"]), Some(&RewriteRule::fixed_name("$Top")));
    assert_eq!(tree.lookup_path(&["JSX"]), None);
    assert_eq!(tree.lookup_path(&["Missing", "Element"]), None);
    assert_eq!(tree.lookup_path(&[]), None);
}

#[test]
fn rule_paths_are_sorted() {
    let tree = sample();
    let paths: Vec<_> = tree.rule_paths().into_iter().map(|(p, _)| p).collect();
    assert_eq!(paths, vec!["JSX.Element", "JSX.Inner.Deep", "Top"]);
}

#[test]
fn merge_is_recursive_and_right_biased() {
    let mut tree = sample();
    tree.merge(
        NamespaceRewrite::new()
            .with_type("Top", RewriteRule::fixed_name("$Replaced"))
            .with_namespace(
                "JSX",
                NamespaceRewrite::new().with_type("Fragment", RewriteRule::fixed_name("$Frag")),
            ),
    );
    let paths: Vec<_> = tree
        .rule_paths()
        .into_iter()
        .map(|(p, r)| format!("{p}={}", r.replacement_name().unwrap_or("?")))
        .collect();
    assert_eq!(
        paths,
        vec![
            "JSX.Element=React$Element",
            "JSX.Fragment=$Frag",
            "JSX.Inner.Deep=$Deep",
            "Top=$Replaced",
        ]
    );
}

#[test]
fn emptiness() {
    assert!(NamespaceRewrite::new().is_empty());
    assert!(!sample().is_empty());
    assert_eq!(sample().types().count(), 1);
    assert_eq!(sample().namespaces().count(), 1);
}
