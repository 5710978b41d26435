use super::model::{NodeConfig, NodeField};
use crate::error::ValidationError;
use ahash::AHashSet;

/// A node name must start with an ASCII letter and contain only ASCII letters and digits.
pub fn is_valid_node_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

impl NodeConfig {
    /// Checks the document against the rules the wizard enforces before export.
    ///
    /// Every problem is reported, not only the first one. Generation does not
    /// depend on this passing.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::MissingValue("name".to_string()));
        } else if !is_valid_node_name(&self.name) {
            errors.push(ValidationError::InvalidNodeName(self.name.clone()));
        }
        for (label, value) in [
            ("displayName", &self.display_name),
            ("description", &self.description),
            ("version", &self.version),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::MissingValue(label.to_string()));
            }
        }

        let mut resource_ids = AHashSet::new();
        let mut resource_values = AHashSet::new();
        for resource in &self.resources {
            let scope = format!("resource '{}'", resource.value);
            if !resource_ids.insert(resource.id.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    scope: "resources".to_string(),
                    id: resource.id.clone(),
                });
            }
            if !resource_values.insert(resource.value.as_str()) {
                errors.push(ValidationError::DuplicateValue {
                    scope: "resources".to_string(),
                    value: resource.value.clone(),
                });
            }
            for (label, value) in [
                ("name", &resource.name),
                ("value", &resource.value),
                ("description", &resource.description),
            ] {
                if value.trim().is_empty() {
                    errors.push(ValidationError::MissingValue(format!("{scope}.{label}")));
                }
            }

            let mut operation_values = AHashSet::new();
            for operation in &resource.operations {
                if !operation_values.insert(operation.value.as_str()) {
                    errors.push(ValidationError::DuplicateValue {
                        scope: scope.clone(),
                        value: operation.value.clone(),
                    });
                }
                let op_scope = format!("{scope} operation '{}'", operation.value);
                for (label, value) in [
                    ("name", &operation.name),
                    ("value", &operation.value),
                    ("description", &operation.description),
                ] {
                    if value.trim().is_empty() {
                        errors.push(ValidationError::MissingValue(format!("{op_scope}.{label}")));
                    }
                }
                check_fields(&op_scope, &operation.fields, &mut errors);
            }
        }

        if !self.resources.iter().any(|r| !r.operations.is_empty()) {
            errors.push(ValidationError::NoOperations);
        }

        check_fields("additionalFields", &self.additional_fields, &mut errors);
        check_fields("authentication", &self.authentication.fields, &mut errors);
        if !self.authentication.is_configured() && !self.authentication.fields.is_empty() {
            errors.push(ValidationError::UnexpectedAuthFields(
                self.authentication.fields.len(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_fields(scope: &str, fields: &[NodeField], errors: &mut Vec<ValidationError>) {
    let mut ids = AHashSet::new();
    for field in fields {
        if !ids.insert(field.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                scope: scope.to_string(),
                id: field.id.clone(),
            });
        }
        if field.options.is_some() && field.effective_options().is_none() {
            errors.push(ValidationError::UnexpectedOptions {
                field: field.name.clone(),
                field_type: field.field_type,
            });
        }
    }
}
