//! Names that libraries add to the global scope with `declare global`.

use flower_ir::{EntityName, TypeNode};

use super::import_substitute;
use crate::flow::{FlowName, FlowType};
use crate::{Converter, MacroOutput, MacroResult, NamespaceRewrite, RewriteRule};

pub(crate) fn rewrites() -> NamespaceRewrite {
    NamespaceRewrite::new()
        .with_namespace(
            "JSX",
            NamespaceRewrite::new().with_type(
                "Element",
                RewriteRule::type_macro("JSX.Element", convert_jsx_element),
            ),
        )
        .with_namespace(
            "ReactNavigation",
            NamespaceRewrite::new().with_type(
                "RootParamList",
                import_substitute(
                    "react_navigation$ReactNavigation_RootParamList",
                    "ReactNavigation_RootParamList",
                    "tsflower/subst/react-navigation",
                ),
            ),
        )
}

/// `JSX.Element` is `React$Element<any>`.
pub(crate) fn convert_jsx_element(
    _converter: &mut dyn Converter,
    _type_name: &EntityName,
    _type_args: Option<&[TypeNode]>,
) -> MacroResult {
    Ok(MacroOutput::new(
        FlowName::ident("React$Element"),
        vec![FlowType::Any],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::expand;
    use pretty_assertions::assert_eq;

    #[test]
    fn jsx_element() {
        let expanded = expand(convert_jsx_element, "JSX.Element").map(|o| o.into_type().to_string());
        assert_eq!(expanded, Ok("React$Element<any>".to_string()));
    }

    #[test]
    fn nested_paths() {
        let catalog = rewrites();
        assert!(catalog.lookup_path(&["JSX", "Element"]).is_some());
        assert_eq!(
            catalog.lookup_path(&["ReactNavigation", "RootParamList"]),
            Some(&RewriteRule::substitute(
                "$tsflower_subst$react_navigation$ReactNavigation_RootParamList",
                "tsflower/subst/react-navigation",
                "ReactNavigation_RootParamList"
            ))
        );
        assert!(catalog.type_rule("JSX").is_none());
    }
}
