//! Host-side bookkeeping for customizations consumed by the pass.

use crate::core::scanner;
use crate::domain::model::{ClassModel, Customization, CustomizationId};
use std::collections::BTreeSet;

/// Marks the given customizations as consumed. Returns how many were newly marked.
pub fn acknowledge(classes: &mut [ClassModel], ids: &BTreeSet<CustomizationId>) -> usize {
    let mut newly_marked = 0;
    for class in classes.iter_mut() {
        for field in class.fields.iter_mut() {
            for (ordinal, customization) in field.customizations.iter_mut().enumerate() {
                let id = CustomizationId {
                    class: class.name.clone(),
                    field: field.name.clone(),
                    ordinal,
                };
                if ids.contains(&id) && !customization.acknowledged {
                    customization.acknowledged = true;
                    newly_marked += 1;
                }
            }
        }
    }
    newly_marked
}

/// Customizations in one of our namespaces that nothing consumed, e.g. a
/// misspelled tag name.
pub fn unrecognized(classes: &[ClassModel]) -> Vec<(CustomizationId, &Customization)> {
    let namespaces = scanner::customization_uris();
    let mut found = Vec::new();
    for class in classes {
        for field in &class.fields {
            for (ordinal, customization) in field.customizations.iter().enumerate() {
                if customization.acknowledged || !namespaces.iter().any(|ns| *ns == customization.namespace) {
                    continue;
                }
                found.push((
                    CustomizationId {
                        class: class.name.clone(),
                        field: field.name.clone(),
                        ordinal,
                    },
                    customization,
                ));
            }
        }
    }
    found
}
