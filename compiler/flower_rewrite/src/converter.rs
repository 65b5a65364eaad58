//! The converter seam.
//!
//! Macros call back into whatever is translating the surrounding file to
//! convert nested type arguments. The structural part of translation
//! (keywords, unions, object types, ...) is shared by every converter
//! through [`convert_structure`]; implementors only decide what a type
//! reference and a type name become.

use flower_ir::{
    EntityName, KeywordType, LiteralType, Member, Signature, TypeKind, TypeNode, TypeOperator,
    TypeReference,
};

use crate::flow::{
    FlowName, FlowType, FunctionParam, FunctionType, Marker, MarkerKind, ObjectIndexer,
    ObjectProperty, ObjectType, PropertyKey,
};

pub trait Converter {
    /// Translate a reference like `Foo<A, B>` or `NS.Foo`.
    fn convert_reference(&mut self, reference: &TypeReference) -> FlowType;

    /// Translate a type name in type position, without arguments.
    fn convert_entity_name_as_type(&mut self, name: &EntityName) -> FlowName;

    fn convert_type(&mut self, ty: &TypeNode) -> FlowType {
        convert_structure(self, ty)
    }
}

/// Translate everything but references structurally, delegating
/// references (at any depth) back to `converter`.
pub fn convert_structure<C: Converter + ?Sized>(converter: &mut C, ty: &TypeNode) -> FlowType {
    match &ty.kind {
        TypeKind::Keyword(keyword) => convert_keyword(*keyword),
        TypeKind::Literal(LiteralType::String(value)) => FlowType::StringLiteral(value.clone()),
        TypeKind::Literal(LiteralType::Number(value)) => FlowType::NumberLiteral(value.clone()),
        TypeKind::Literal(LiteralType::Boolean(value)) => FlowType::BooleanLiteral(*value),
        TypeKind::Reference(reference) => converter.convert_reference(reference),
        TypeKind::Union(members) => {
            FlowType::Union(members.iter().map(|m| converter.convert_type(m)).collect())
        }
        TypeKind::Intersection(members) => {
            FlowType::Intersection(members.iter().map(|m| converter.convert_type(m)).collect())
        }
        TypeKind::Array(element) => {
            FlowType::generic("Array", vec![converter.convert_type(element)])
        }
        TypeKind::Tuple(elements) => {
            FlowType::Tuple(elements.iter().map(|e| converter.convert_type(e)).collect())
        }
        TypeKind::Object(members) => convert_members(converter, members),
        TypeKind::Function(signature) => {
            FlowType::Function(Box::new(convert_signature(converter, signature)))
        }
        TypeKind::Query(name) => FlowType::Typeof(flow_name(name)),
        TypeKind::Operator(TypeOperator::Keyof, operand) => {
            FlowType::generic("$Keys", vec![converter.convert_type(operand)])
        }
        TypeKind::Operator(TypeOperator::Readonly, operand) => match &operand.kind {
            TypeKind::Array(element) => {
                FlowType::generic("$ReadOnlyArray", vec![converter.convert_type(element)])
            }
            _ => FlowType::generic("$ReadOnly", vec![converter.convert_type(operand)]),
        },
        TypeKind::Operator(TypeOperator::Unique, _) => FlowType::Symbol,
        TypeKind::IndexedAccess(object, index) => FlowType::IndexedAccess(
            Box::new(converter.convert_type(object)),
            Box::new(converter.convert_type(index)),
        ),
    }
}

/// The name as written, segment by segment.
pub fn flow_name(name: &EntityName) -> FlowName {
    FlowName::qualified(name.segments().into_iter().map(|s| s.as_str()))
}

fn convert_keyword(keyword: KeywordType) -> FlowType {
    match keyword {
        KeywordType::Any => FlowType::Any,
        KeywordType::Unknown => FlowType::Mixed,
        KeywordType::Never => FlowType::Empty,
        KeywordType::Void | KeywordType::Undefined => FlowType::Void,
        KeywordType::Null => FlowType::Null,
        KeywordType::String => FlowType::String,
        KeywordType::Number => FlowType::Number,
        KeywordType::Boolean => FlowType::Boolean,
        KeywordType::BigInt => FlowType::BigInt,
        KeywordType::Symbol => FlowType::Symbol,
        KeywordType::Object => FlowType::inexact_empty_object(),
        KeywordType::This => FlowType::named("this"),
    }
}

fn convert_members<C: Converter + ?Sized>(converter: &mut C, members: &[Member]) -> FlowType {
    let mut object = ObjectType::inexact();
    for member in members {
        match member {
            Member::Property(property) => object.properties.push(ObjectProperty {
                key: PropertyKey::from_text(&property.name.text),
                value: property
                    .ty
                    .as_ref()
                    .map_or(FlowType::Any, |ty| converter.convert_type(ty)),
                optional: property.optional,
                covariant: property.readonly,
            }),
            Member::Method(method) => object.properties.push(ObjectProperty {
                key: PropertyKey::from_text(&method.name.text),
                value: FlowType::Function(Box::new(convert_signature(
                    converter,
                    &method.signature,
                ))),
                optional: method.optional,
                covariant: false,
            }),
            Member::Index(index) => object.indexers.push(ObjectIndexer {
                name: Some(index.parameter.clone()),
                key: converter.convert_type(&index.key),
                value: converter.convert_type(&index.value),
            }),
            Member::Call(signature) => object
                .call_properties
                .push(convert_signature(converter, signature)),
            Member::Construct(_) => {
                return FlowType::Marker(Marker {
                    kind: MarkerKind::Unimplemented,
                    description: "construct signature in object type".into(),
                });
            }
        }
    }
    FlowType::Object(object)
}

fn convert_signature<C: Converter + ?Sized>(converter: &mut C, signature: &Signature) -> FunctionType {
    let mut function = FunctionType {
        type_params: signature
            .type_params
            .iter()
            .map(|p| p.name.name.clone())
            .collect(),
        ..FunctionType::default()
    };
    for param in &signature.params {
        let converted = FunctionParam {
            name: param.name.clone(),
            optional: param.optional,
            ty: param
                .ty
                .as_ref()
                .map_or(FlowType::Any, |ty| converter.convert_type(ty)),
        };
        if param.rest {
            function.rest = Some(converted);
        } else {
            function.params.push(converted);
        }
    }
    function.return_type = signature
        .return_type
        .as_ref()
        .map(|ty| converter.convert_type(ty));
    function
}

/// A converter that spells every name as written.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlainConverter;

impl Converter for PlainConverter {
    fn convert_reference(&mut self, reference: &TypeReference) -> FlowType {
        FlowType::Generic {
            name: self.convert_entity_name_as_type(&reference.name),
            args: reference
                .type_args
                .as_ref()
                .map(|args| args.iter().map(|a| self.convert_type(a)).collect()),
        }
    }

    fn convert_entity_name_as_type(&mut self, name: &EntityName) -> FlowName {
        flow_name(name)
    }
}
