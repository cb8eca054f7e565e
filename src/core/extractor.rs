use crate::core::literal;
use crate::domain::diagnostic::Diagnostic;
use crate::domain::model::{Customization, Expr, FieldModel, FieldType, PropertyKind, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_AN_ATTRIBUTE: &str = "extension marker should only appear on attribute declarations";
pub const NO_DEFAULT_VALUE: &str =
    "extension marker should only appear on attribute declarations with a default value";
pub const MISSING_FIELD: &str = "was expecting to find a field but didn't";
pub const MISSING_VALUE: &str = "initializer customization is missing a value attribute";

/// Customization attribute read by [`ExtractionPolicy::AnnotationLiteral`].
pub const VALUE_ATTRIBUTE: &str = "value";

/// Where the initializer value comes from. Fixed for a whole pass run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionPolicy {
    /// Use the default declared on the schema attribute; the customization
    /// is only a marker.
    #[default]
    SchemaDefault,
    /// Use the customization's own `value` attribute.
    AnnotationLiteral,
}

impl ExtractionPolicy {
    pub const NAMES: [&'static str; 2] = ["schema-default", "annotation-literal"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "schema-default" => Some(Self::SchemaDefault),
            "annotation-literal" => Some(Self::AnnotationLiteral),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaDefault => f.write_str("schema-default"),
            Self::AnnotationLiteral => f.write_str("annotation-literal"),
        }
    }
}

/// Resolves the initializer for `field` from its canonical customization.
///
/// Every error is a fatal diagnostic attributed to the field, or to the
/// customization when the field has no location of its own.
pub fn extract(
    policy: ExtractionPolicy,
    field: &FieldModel,
    canonical: &Customization,
) -> Result<Expr, Diagnostic> {
    let location = field
        .location
        .clone()
        .or_else(|| canonical.location.clone());

    match policy {
        ExtractionPolicy::SchemaDefault => from_schema_default(field, location),
        ExtractionPolicy::AnnotationLiteral => from_annotation(field, canonical, location),
    }
}

fn from_schema_default(field: &FieldModel, location: Option<SourceLocation>) -> Result<Expr, Diagnostic> {
    let default = match &field.property {
        PropertyKind::Attribute { default: Some(default) } => default,
        PropertyKind::Attribute { default: None } => {
            return Err(Diagnostic::fatal(NO_DEFAULT_VALUE, location));
        }
        PropertyKind::Element | PropertyKind::Other => {
            return Err(Diagnostic::fatal(NOT_AN_ATTRIBUTE, location));
        }
    };

    let ty = declared_type(field, &location)?;
    literal::convert(&default.lexical, ty).map_err(|e| Diagnostic::fatal(e.to_string(), location))
}

fn from_annotation(
    field: &FieldModel,
    canonical: &Customization,
    location: Option<SourceLocation>,
) -> Result<Expr, Diagnostic> {
    let ty = declared_type(field, &location)?;
    let value = canonical
        .attribute(VALUE_ATTRIBUTE)
        .ok_or_else(|| Diagnostic::fatal(MISSING_VALUE, location.clone()))?;
    literal::convert(value, ty).map_err(|e| Diagnostic::fatal(e.to_string(), location))
}

fn declared_type<'f>(field: &'f FieldModel, location: &Option<SourceLocation>) -> Result<&'f FieldType, Diagnostic> {
    field
        .field_type()
        .ok_or_else(|| Diagnostic::fatal(MISSING_FIELD, location.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scanner::{NAMESPACE_URI, TAG_NAME};

    fn marker() -> Customization {
        Customization::new(NAMESPACE_URI, TAG_NAME).with_location(SourceLocation::new("host.xsd", 7, 3))
    }

    fn int_expr(digits: &str) -> Expr {
        Expr::Int {
            ty: crate::domain::model::IntKind::Int,
            digits: digits.to_string(),
        }
    }

    #[test]
    fn test_schema_default_from_attribute() {
        let field = FieldModel::new("retries", FieldType::Int, PropertyKind::attribute_with_default("3"));
        let expr = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap();
        assert_eq!(expr, int_expr("3"));
    }

    #[test]
    fn test_schema_default_ignores_annotation_value() {
        let field = FieldModel::new("retries", FieldType::Int, PropertyKind::attribute_with_default("3"));
        let customization = marker().with_attribute(VALUE_ATTRIBUTE, "99");
        let expr = extract(ExtractionPolicy::SchemaDefault, &field, &customization).unwrap();
        assert_eq!(expr, int_expr("3"));
    }

    #[test]
    fn test_element_kind_is_fatal() {
        let field = FieldModel::new("hostname", FieldType::String, PropertyKind::Element)
            .with_location(SourceLocation::new("host.xsd", 20, 5));
        let diag = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap_err();
        assert!(diag.is_fatal());
        assert_eq!(diag.message, NOT_AN_ATTRIBUTE);
        assert_eq!(diag.location.unwrap().line, 20);
    }

    #[test]
    fn test_other_kind_is_fatal_at_customization_location() {
        let field = FieldModel::new("any", FieldType::String, PropertyKind::Other);
        let diag = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap_err();
        assert_eq!(diag.message, NOT_AN_ATTRIBUTE);
        assert_eq!(diag.location.unwrap().line, 7);
    }

    #[test]
    fn test_attribute_without_default_is_fatal() {
        let field = FieldModel::new("timeout", FieldType::Int, PropertyKind::attribute());
        let diag = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap_err();
        assert_eq!(diag.message, NO_DEFAULT_VALUE);
    }

    #[test]
    fn test_missing_declaration_is_fatal() {
        let field = FieldModel::new("retries", FieldType::Int, PropertyKind::attribute_with_default("3"))
            .without_declaration();
        let diag = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap_err();
        assert_eq!(diag.message, MISSING_FIELD);
    }

    #[test]
    fn test_unparseable_default_is_fatal() {
        let field = FieldModel::new("retries", FieldType::Int, PropertyKind::attribute_with_default("three"));
        let diag = extract(ExtractionPolicy::SchemaDefault, &field, &marker()).unwrap_err();
        assert_eq!(diag.message, "default value `three` is not a valid int literal");
    }

    #[test]
    fn test_annotation_literal_policy() {
        let field = FieldModel::new("retries", FieldType::Int, PropertyKind::Element);
        let customization = marker().with_attribute(VALUE_ATTRIBUTE, "5");
        let expr = extract(ExtractionPolicy::AnnotationLiteral, &field, &customization).unwrap();
        assert_eq!(expr, int_expr("5"));

        let diag = extract(ExtractionPolicy::AnnotationLiteral, &field, &marker()).unwrap_err();
        assert_eq!(diag.message, MISSING_VALUE);

        let customization = marker().with_attribute(VALUE_ATTRIBUTE, "five");
        let diag = extract(ExtractionPolicy::AnnotationLiteral, &field, &customization).unwrap_err();
        assert!(diag.message.contains("not a valid int literal"));
    }

    #[test]
    fn test_policy_names_round_trip() {
        for name in ExtractionPolicy::NAMES {
            let policy = ExtractionPolicy::from_name(name).unwrap();
            assert_eq!(policy.to_string(), name);
        }
        assert!(ExtractionPolicy::from_name("both").is_none());
    }
}
