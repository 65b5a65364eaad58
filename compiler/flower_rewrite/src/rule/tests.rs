use super::*;
use crate::{FlowName, MacroOutput, PlainConverter};
use pretty_assertions::assert_eq;

fn passthrough(
    converter: &mut dyn Converter,
    name: &EntityName,
    args: Option<&[TypeNode]>,
) -> MacroResult {
    let args = args.map(|args| args.iter().map(|a| converter.convert_type(a)).collect());
    Ok(MacroOutput {
        id: converter.convert_entity_name_as_type(name),
        type_args: args,
    })
}

fn other(_: &mut dyn Converter, _: &EntityName, _: Option<&[TypeNode]>) -> MacroResult {
    Err(crate::RewriteError::unimplemented("other"))
}

#[test]
fn kinds_and_names() {
    assert_eq!(RewriteRule::fixed_name("$ReadOnly").kind(), RuleKind::FixedName);
    assert_eq!(
        RewriteRule::rename_type("FooT").replacement_name(),
        Some("FooT")
    );
    assert!(RewriteRule::rename_type("FooT").is_rename());
    let substitute = RewriteRule::substitute("$subst$Ref", "tsflower/subst/react", "Ref");
    assert_eq!(substitute.replacement_name(), Some("$subst$Ref"));
    assert_eq!(
        substitute.to_string(),
        "SubstituteType $subst$Ref (`Ref` from 'tsflower/subst/react')"
    );
    assert_eq!(RewriteRule::type_macro("M", passthrough).replacement_name(), None);
}

#[test]
fn macros_compare_by_name() {
    assert_eq!(
        RewriteRule::type_macro("M", passthrough),
        RewriteRule::type_macro("M", other)
    );
    assert_ne!(
        RewriteRule::type_macro("M", passthrough),
        RewriteRule::type_macro("N", passthrough)
    );
    assert_eq!(
        format!("{:?}", RewriteRule::type_macro("M", passthrough)),
        r#"TypeReferenceMacro(TypeReferenceMacro("M"))"#
    );
}

#[test]
fn expand_calls_the_function() {
    let RewriteRule::TypeReferenceMacro(mac) = RewriteRule::type_macro("M", passthrough) else {
        panic!("not a macro");
    };
    let name = flower_ir::EntityName::Ident(flower_ir::Ident {
        name: "Thing".into(),
        span: flower_ir::Span::DUMMY,
        id: flower_ir::NodeId::new(flower_ir::FileId::from_raw(0), 0),
    });
    let output = mac.expand(&mut PlainConverter, &name, None);
    assert_eq!(
        output,
        Ok(MacroOutput {
            id: FlowName::ident("Thing"),
            type_args: None,
        })
    );
}
