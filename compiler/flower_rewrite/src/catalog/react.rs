//! Names imported from `react`.

use flower_ir::{EntityName, TypeNode};

use super::import_substitute;
use crate::flow::{FlowName, FlowType};
use crate::{Converter, MacroOutput, MacroResult, NamespaceRewrite, RewriteError, RewriteRule};

const SUBST_MODULE: &str = "tsflower/subst/react";

pub(crate) fn rewrites() -> NamespaceRewrite {
    NamespaceRewrite::new()
        .with_type("Component", RewriteRule::type_macro("Component", convert_component))
        .with_type(
            "ReactElement",
            RewriteRule::type_macro("ReactElement", convert_react_element),
        )
        .with_type("ReactNode", RewriteRule::fixed_name("React$Node"))
        .with_type("Ref", import_substitute("React$Ref", "Ref", SUBST_MODULE))
        .with_type(
            "RefAttributes",
            import_substitute("React$RefAttributes", "RefAttributes", SUBST_MODULE),
        )
}

/// `Component<P, S>`: Flow requires both arguments, so missing ones are
/// filled with `{...}`.
pub(crate) fn convert_component(
    converter: &mut dyn Converter,
    type_name: &EntityName,
    type_args: Option<&[TypeNode]>,
) -> MacroResult {
    let args = type_args.unwrap_or_default();
    if args.len() > 2 {
        return Err(RewriteError::arity("0-2", args.len()));
    }
    let mut converted: Vec<FlowType> = args.iter().map(|a| converter.convert_type(a)).collect();
    converted.resize_with(2, FlowType::inexact_empty_object);
    Ok(MacroOutput::new(
        converter.convert_entity_name_as_type(type_name),
        converted,
    ))
}

/// `ReactElement<P, T>` becomes a `React$Element` of the element type.
///
/// With only `P`, the element type is a component taking `P`; with
/// neither, any element type.
pub(crate) fn convert_react_element(
    converter: &mut dyn Converter,
    _type_name: &EntityName,
    type_args: Option<&[TypeNode]>,
) -> MacroResult {
    let element_type = match type_args.unwrap_or_default() {
        [] => FlowType::named("React$ElementType"),
        [props] => FlowType::generic("React$ComponentType", vec![converter.convert_type(props)]),
        [_, ty] => converter.convert_type(ty),
        args => return Err(RewriteError::arity("0-2", args.len())),
    };
    Ok(MacroOutput::new(
        FlowName::ident("React$Element"),
        vec![element_type],
    ))
}
