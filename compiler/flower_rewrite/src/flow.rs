//! Output-side type syntax.
//!
//! Just enough of Flow's type language to express what rules and macros
//! produce. `Display` prints Flow source.

use std::fmt;

/// A possibly qualified type name: `React$Node`, `React.Element`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlowName {
    segments: Vec<Box<str>>,
}

impl FlowName {
    pub fn ident(name: impl Into<Box<str>>) -> Self {
        FlowName {
            segments: vec![name.into()],
        }
    }

    pub fn qualified<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        FlowName {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| &**s)
    }

    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }
}

impl fmt::Display for FlowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowType {
    Any,
    Mixed,
    Empty,
    Void,
    Null,
    String,
    Number,
    Boolean,
    BigInt,
    Symbol,
    StringLiteral(Box<str>),
    NumberLiteral(Box<str>),
    BooleanLiteral(bool),
    Generic {
        name: FlowName,
        args: Option<Vec<FlowType>>,
    },
    Union(Vec<FlowType>),
    Intersection(Vec<FlowType>),
    Tuple(Vec<FlowType>),
    Object(ObjectType),
    Function(Box<FunctionType>),
    Typeof(FlowName),
    IndexedAccess(Box<FlowType>, Box<FlowType>),
    /// A placeholder standing in for something that could not be
    /// translated.
    Marker(Marker),
}

impl FlowType {
    /// `name` with no type arguments.
    pub fn named(name: impl Into<Box<str>>) -> Self {
        FlowType::Generic {
            name: FlowName::ident(name),
            args: None,
        }
    }

    /// `name<args>`.
    pub fn generic(name: impl Into<Box<str>>, args: Vec<FlowType>) -> Self {
        FlowType::Generic {
            name: FlowName::ident(name),
            args: Some(args),
        }
    }

    /// `{...}`
    pub fn inexact_empty_object() -> Self {
        FlowType::Object(ObjectType::inexact())
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, FlowType::Marker(_))
    }

    fn needs_parens_in_union(&self) -> bool {
        matches!(self, FlowType::Function(_))
    }

    fn needs_parens_in_intersection(&self) -> bool {
        matches!(self, FlowType::Function(_) | FlowType::Union(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectType {
    pub exact: bool,
    pub properties: Vec<ObjectProperty>,
    pub indexers: Vec<ObjectIndexer>,
    pub call_properties: Vec<FunctionType>,
}

impl ObjectType {
    pub fn exact() -> Self {
        ObjectType {
            exact: true,
            ..ObjectType::default()
        }
    }

    pub fn inexact() -> Self {
        ObjectType::default()
    }

    #[must_use]
    pub fn with_property(mut self, property: ObjectProperty) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_indexer(mut self, indexer: ObjectIndexer) -> Self {
        self.indexers.push(indexer);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectProperty {
    pub key: PropertyKey,
    pub value: FlowType,
    pub optional: bool,
    /// Printed as `+key`.
    pub covariant: bool,
}

impl ObjectProperty {
    pub fn new(key: PropertyKey, value: FlowType) -> Self {
        ObjectProperty {
            key,
            value,
            optional: false,
            covariant: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Identifier(Box<str>),
    StringLiteral(Box<str>),
}

impl PropertyKey {
    /// An identifier key when `text` is a valid identifier, else a quoted
    /// string key.
    pub fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
        if valid {
            PropertyKey::Identifier(text.into())
        } else {
            PropertyKey::StringLiteral(text.into())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectIndexer {
    pub name: Option<Box<str>>,
    pub key: FlowType,
    pub value: FlowType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionType {
    pub type_params: Vec<Box<str>>,
    pub params: Vec<FunctionParam>,
    pub rest: Option<FunctionParam>,
    pub return_type: Option<FlowType>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionParam {
    pub name: Box<str>,
    pub optional: bool,
    pub ty: FlowType,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Error,
    Unimplemented,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub description: String,
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowType::Any => f.write_str("any"),
            FlowType::Mixed => f.write_str("mixed"),
            FlowType::Empty => f.write_str("empty"),
            FlowType::Void => f.write_str("void"),
            FlowType::Null => f.write_str("null"),
            FlowType::String => f.write_str("string"),
            FlowType::Number => f.write_str("number"),
            FlowType::Boolean => f.write_str("boolean"),
            FlowType::BigInt => f.write_str("bigint"),
            FlowType::Symbol => f.write_str("symbol"),
            FlowType::StringLiteral(value) => write_quoted(f, value),
            FlowType::NumberLiteral(value) => f.write_str(value),
            FlowType::BooleanLiteral(value) => write!(f, "{value}"),
            FlowType::Generic { name, args } => {
                write!(f, "{name}")?;
                if let Some(args) = args {
                    f.write_str("<")?;
                    write_list(f, args, ", ")?;
                    f.write_str(">")?;
                }
                Ok(())
            }
            FlowType::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write_grouped(f, member, member.needs_parens_in_union())?;
                }
                Ok(())
            }
            FlowType::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    write_grouped(f, member, member.needs_parens_in_intersection())?;
                }
                Ok(())
            }
            FlowType::Tuple(elements) => {
                f.write_str("[")?;
                write_list(f, elements, ", ")?;
                f.write_str("]")
            }
            FlowType::Object(object) => write!(f, "{object}"),
            FlowType::Function(function) => write!(f, "{function}"),
            FlowType::Typeof(name) => write!(f, "typeof {name}"),
            FlowType::IndexedAccess(object, index) => {
                let grouped = matches!(
                    **object,
                    FlowType::Union(_) | FlowType::Intersection(_) | FlowType::Function(_)
                );
                write_grouped(f, object, grouped)?;
                write!(f, "[{index}]")
            }
            FlowType::Marker(marker) => write!(f, "{marker}"),
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.exact { ("{|", "|}") } else { ("{", "}") };
        let mut entries: Vec<String> = Vec::new();
        for property in &self.properties {
            let variance = if property.covariant { "+" } else { "" };
            let optional = if property.optional { "?" } else { "" };
            let key = match &property.key {
                PropertyKey::Identifier(name) => name.to_string(),
                PropertyKey::StringLiteral(text) => quoted(text),
            };
            entries.push(format!("{variance}{key}{optional}: {}", property.value));
        }
        for indexer in &self.indexers {
            match &indexer.name {
                Some(name) => entries.push(format!("[{name}: {}]: {}", indexer.key, indexer.value)),
                None => entries.push(format!("[{}]: {}", indexer.key, indexer.value)),
            }
        }
        for call in &self.call_properties {
            entries.push(call.signature_string(": "));
        }
        if !self.exact {
            entries.push("...".to_string());
        }

        if entries.len() == 1 && !self.exact {
            return write!(f, "{open}...{close}");
        }
        if entries.is_empty() {
            return write!(f, "{open}{close}");
        }
        write!(f, "{open} {} {close}", entries.join(", "))
    }
}

impl FunctionType {
    /// `<T>(a: A, ...rest: R)` followed by `arrow` and the return type.
    fn signature_string(&self, arrow: &str) -> String {
        let mut out = String::new();
        if !self.type_params.is_empty() {
            out.push('<');
            out.push_str(&self.type_params.join(", "));
            out.push('>');
        }
        let mut params: Vec<String> = self.params.iter().map(FunctionParam::to_string).collect();
        if let Some(rest) = &self.rest {
            params.push(format!("...{rest}"));
        }
        out.push('(');
        out.push_str(&params.join(", "));
        out.push(')');
        out.push_str(arrow);
        match &self.return_type {
            Some(ty) => out.push_str(&ty.to_string()),
            None => out.push_str("mixed"),
        }
        out
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature_string(" => "))
    }
}

impl fmt::Display for FunctionParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{optional}: {}", self.name, self.ty)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            MarkerKind::Error => "tsflower-error",
            MarkerKind::Unimplemented => "tsflower-unimplemented",
        };
        write!(f, "$FlowFixMe /* {tag}: {} */", self.description)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[FlowType], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_grouped(f: &mut fmt::Formatter<'_>, ty: &FlowType, grouped: bool) -> fmt::Result {
    if grouped {
        write!(f, "({ty})")
    } else {
        write!(f, "{ty}")
    }
}

fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str(&quoted(text))
}
