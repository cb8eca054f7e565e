use crate::domain::model::{Customization, FieldModel};

/// Namespace of the customization elements this pass consumes.
pub const NAMESPACE_URI: &str = "urn:attr-init:customization";

/// The one customization element this pass knows how to process.
pub const TAG_NAME: &str = "attrinit";

/// Name of the host switch that activates the pass.
pub const OPTION_NAME: &str = "Xattrinit";

/// A recognized customization and its position in the field's list.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    pub ordinal: usize,
    pub customization: &'a Customization,
}

/// Namespaces the host should route to this pass.
pub fn customization_uris() -> &'static [&'static str] {
    &[NAMESPACE_URI]
}

pub fn is_customization_tag_name(namespace: &str, local_name: &str) -> bool {
    namespace == NAMESPACE_URI && local_name == TAG_NAME
}

/// Recognized customizations on `field`, in declaration order.
pub fn scan(field: &FieldModel) -> Vec<Match<'_>> {
    field
        .customizations
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is(NAMESPACE_URI, TAG_NAME))
        .map(|(ordinal, customization)| Match {
            ordinal,
            customization,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldType, PropertyKind};

    fn field_with(customizations: Vec<Customization>) -> FieldModel {
        let mut field = FieldModel::new("port", FieldType::Int, PropertyKind::attribute_with_default("110"));
        field.customizations = customizations;
        field
    }

    #[test]
    fn test_scan_ignores_foreign_customizations() {
        let field = field_with(vec![
            Customization::new("urn:other", TAG_NAME),
            Customization::new(NAMESPACE_URI, "annotate"),
        ]);
        assert!(scan(&field).is_empty());
    }

    #[test]
    fn test_scan_keeps_declaration_order() {
        let field = field_with(vec![
            Customization::new("urn:other", "x"),
            Customization::new(NAMESPACE_URI, TAG_NAME).with_attribute("value", "1"),
            Customization::new(NAMESPACE_URI, TAG_NAME).with_attribute("value", "2"),
        ]);

        let matches = scan(&field);
        let ordinals: Vec<usize> = matches.iter().map(|m| m.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(matches[0].customization.attribute("value"), Some("1"));
    }

    #[test]
    fn test_scan_matches_acknowledged_customizations_too() {
        let mut customization = Customization::new(NAMESPACE_URI, TAG_NAME);
        customization.acknowledged = true;
        let field = field_with(vec![customization]);
        assert_eq!(scan(&field).len(), 1);
    }

    #[test]
    fn test_host_registration() {
        assert_eq!(customization_uris(), &[NAMESPACE_URI]);
        assert!(is_customization_tag_name(NAMESPACE_URI, TAG_NAME));
        assert!(!is_customization_tag_name(NAMESPACE_URI, "attrInit"));
        assert!(!is_customization_tag_name("urn:other", TAG_NAME));
    }
}
