//! Standard-library names.
//!
//! Only top-level names take effect: the standard-library scan does not
//! descend into namespaces, so nested entries here would never match.

use flower_ir::{EntityName, TypeKind, TypeNode};

use crate::flow::{FlowName, FlowType, ObjectIndexer, ObjectProperty, ObjectType, PropertyKey};
use crate::{Converter, MacroOutput, MacroResult, NamespaceRewrite, RewriteError, RewriteRule};

pub(crate) fn rewrites() -> NamespaceRewrite {
    NamespaceRewrite::new()
        .with_type("Readonly", RewriteRule::fixed_name("$ReadOnly"))
        .with_type("ReadonlyArray", RewriteRule::fixed_name("$ReadOnlyArray"))
        .with_type("Record", RewriteRule::type_macro("Record", convert_record))
        .with_type("Omit", RewriteRule::type_macro("Omit", convert_omit))
}

pub(crate) fn convert_record(
    _converter: &mut dyn Converter,
    _type_name: &EntityName,
    type_args: Option<&[TypeNode]>,
) -> MacroResult {
    let found = type_args.map_or(0, <[TypeNode]>::len);
    if found != 2 {
        return Err(RewriteError::arity("2", found));
    }
    Err(RewriteError::unimplemented("Record"))
}

/// `Omit<T, K>` becomes `$Diff<T, {| ...keys: mixed |}>`.
pub(crate) fn convert_omit(
    converter: &mut dyn Converter,
    _type_name: &EntityName,
    type_args: Option<&[TypeNode]>,
) -> MacroResult {
    let [object, keys] = type_args.unwrap_or_default() else {
        let found = type_args.map_or(0, <[TypeNode]>::len);
        return Err(RewriteError::arity("2", found));
    };

    let subtrahend = match string_literal_keys(keys) {
        Some(names) => names.into_iter().fold(ObjectType::exact(), |object, name| {
            object.with_property(ObjectProperty::new(
                PropertyKey::StringLiteral(name.into()),
                FlowType::Mixed,
            ))
        }),
        None => ObjectType::exact().with_indexer(ObjectIndexer {
            name: Some("key".into()),
            key: converter.convert_type(keys),
            value: FlowType::Mixed,
        }),
    };

    Ok(MacroOutput::new(
        FlowName::ident("$Diff"),
        vec![converter.convert_type(object), FlowType::Object(subtrahend)],
    ))
}

/// `'a'` or `'a' | 'b' | ...`, as the list of strings.
fn string_literal_keys(keys: &TypeNode) -> Option<Vec<&str>> {
    match &keys.kind {
        TypeKind::Union(members) => members.iter().map(TypeNode::as_string_literal).collect(),
        _ => keys.as_string_literal().map(|key| vec![key]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::expand;
    use pretty_assertions::assert_eq;

    fn expand_omit(source: &str) -> String {
        match expand(convert_omit, source) {
            Ok(output) => output.into_type().to_string(),
            Err(e) => panic!("expansion failed: {e}"),
        }
    }

    #[test]
    fn omit_single_key() {
        assert_eq!(
            expand_omit("Omit<Props, 'style'>"),
            r#"$Diff<Props, {| "style": mixed |}>"#
        );
    }

    #[test]
    fn omit_key_union() {
        assert_eq!(
            expand_omit("Omit<Props, 'a' | 'b'>"),
            r#"$Diff<Props, {| "a": mixed, "b": mixed |}>"#
        );
    }

    #[test]
    fn omit_generic_keys() {
        assert_eq!(
            expand_omit("Omit<Props, K>"),
            "$Diff<Props, {| [key: K]: mixed |}>"
        );
        assert_eq!(
            expand_omit("Omit<Props, 'a' | K>"),
            "$Diff<Props, {| [key: \"a\" | K]: mixed |}>"
        );
    }

    #[test]
    fn omit_arity() {
        assert_eq!(
            expand(convert_omit, "Omit<A, 'b', C>"),
            Err(RewriteError::error("expected 2 arguments, got 3"))
        );
        assert_eq!(
            expand(convert_omit, "Omit"),
            Err(RewriteError::error("expected 2 arguments, got 0"))
        );
    }

    #[test]
    fn record_is_arity_checked_then_unimplemented() {
        assert_eq!(
            expand(convert_record, "Record<string>"),
            Err(RewriteError::error("expected 2 arguments, got 1"))
        );
        assert_eq!(
            expand(convert_record, "Record<string, number>"),
            Err(RewriteError::unimplemented("Record"))
        );
    }

    #[test]
    fn catalog_contents() {
        let catalog = rewrites();
        assert_eq!(
            catalog.type_rule("Readonly"),
            Some(&RewriteRule::fixed_name("$ReadOnly"))
        );
        assert_eq!(
            catalog.type_rule("ReadonlyArray"),
            Some(&RewriteRule::fixed_name("$ReadOnlyArray"))
        );
        assert!(catalog.namespaces().next().is_none());
    }
}
