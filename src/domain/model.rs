use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Position in the originating schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(system_id: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            system_id: Some(system_id.into()),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.system_id {
            Some(id) => write!(f, "{}:{}:{}", id, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// A generated class and its declared fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One schema property of a class together with the field emitted for it.
///
/// `declaration` is `None` when the host produced no field for the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(default)]
    pub property: PropertyKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customizations: Vec<Customization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<FieldDeclaration>,
}

impl FieldModel {
    pub fn new(name: impl Into<String>, ty: FieldType, property: PropertyKind) -> Self {
        Self {
            name: name.into(),
            property,
            customizations: Vec::new(),
            location: None,
            declaration: Some(FieldDeclaration {
                ty,
                initializer: None,
            }),
        }
    }

    pub fn with_customization(mut self, customization: Customization) -> Self {
        self.customizations.push(customization);
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn without_declaration(mut self) -> Self {
        self.declaration = None;
        self
    }

    pub fn field_type(&self) -> Option<&FieldType> {
        self.declaration.as_ref().map(|d| &d.ty)
    }

    pub fn initializer(&self) -> Option<&Expr> {
        self.declaration.as_ref().and_then(|d| d.initializer.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub ty: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initializer: Option<Expr>,
}

/// The kind of schema particle a field was generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    Attribute {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<AttributeDefault>,
    },
    Element,
    #[default]
    Other,
}

impl PropertyKind {
    pub fn attribute_with_default(lexical: impl Into<String>) -> Self {
        Self::Attribute {
            default: Some(AttributeDefault::new(lexical)),
        }
    }

    pub fn attribute() -> Self {
        Self::Attribute { default: None }
    }
}

/// Lexical default value declared on an attribute in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeDefault {
    pub lexical: String,
}

impl AttributeDefault {
    pub fn new(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
        }
    }
}

/// An out-of-band schema annotation attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customization {
    pub namespace: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
    /// Host bookkeeping: set once some pass has consumed this customization.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub acknowledged: bool,
}

impl Customization {
    pub fn new(namespace: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            tag: tag.into(),
            attributes: BTreeMap::new(),
            location: None,
            acknowledged: false,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is(&self, namespace: &str, tag: &str) -> bool {
        self.namespace == namespace && self.tag == tag
    }
}

/// Identifies one customization by its owner and position in the owner's list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomizationId {
    pub class: String,
    pub field: String,
    pub ordinal: usize,
}

impl fmt::Display for CustomizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}#{}", self.class, self.field, self.ordinal)
    }
}

/// Declared type of an emitted field, limited to what a default literal needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Integer,
    Float,
    Double,
    Decimal,
    String,
    Enum(EnumType),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Enum(e) => return write!(f, "enum {}", e.name),
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub constants: Vec<EnumConstant>,
}

/// Maps a schema enumeration value to the generated constant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub value: String,
    pub constant: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntKind {
    Byte,
    Short,
    Int,
    Long,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatKind {
    Float,
    Double,
}

impl FloatKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::Float => "f32",
            Self::Double => "f64",
        }
    }
}

/// A field initializer literal.
///
/// Numeric payloads are kept in canonical text form so that values outside
/// the native range (unbounded integers, decimals) survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum Expr {
    Bool { value: bool },
    Int { ty: IntKind, digits: String },
    Float { ty: FloatKind, text: String },
    Decimal { text: String },
    Str { value: String },
    EnumConstant { enum_name: String, constant: String },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool { value } => write!(f, "{}", value),
            Self::Int { digits, .. } => f.write_str(digits),
            Self::Float { ty, text } => match text.as_str() {
                "INF" => write!(f, "{}::INFINITY", ty.prefix()),
                "-INF" => write!(f, "{}::NEG_INFINITY", ty.prefix()),
                "NaN" => write!(f, "{}::NAN", ty.prefix()),
                _ => f.write_str(text),
            },
            Self::Decimal { text } => f.write_str(text),
            Self::Str { value } => write!(f, "{:?}", value),
            Self::EnumConstant {
                enum_name,
                constant,
            } => write!(f, "{}::{}", enum_name, constant),
        }
    }
}
