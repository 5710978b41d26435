use super::model::{AuthType, NodeConfig, NodeField, Operation, Resource};
use crate::error::ConfigError;
use tracing::{debug, trace};
use uuid::Uuid;

/// Partial update of a resource's descriptive fields. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ResourcePatch {
    pub name: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
}

/// A single discrete change to a [`NodeConfig`], as produced by a form layer.
#[derive(Debug, Clone)]
pub enum ConfigEdit {
    SetName(String),
    SetDisplayName(String),
    SetDescription(String),
    SetVersion(String),
    SetIcon(String),
    SetAuthor(String),
    SetLicense(String),
    SetRepository(String),
    AddResource(Resource),
    UpdateResource {
        resource_id: String,
        patch: ResourcePatch,
    },
    RemoveResource(String),
    AddOperation {
        resource_id: String,
        operation: Operation,
    },
    /// Replaces everything but the id of an existing operation.
    UpdateOperation {
        resource_id: String,
        operation_id: String,
        operation: Operation,
    },
    RemoveOperation {
        resource_id: String,
        operation_id: String,
    },
    AddField {
        resource_id: String,
        operation_id: String,
        field: NodeField,
    },
    RemoveField {
        resource_id: String,
        operation_id: String,
        field_id: String,
    },
    AddAdditionalField(NodeField),
    RemoveAdditionalField(String),
    SetAuthType(AuthType),
    AddAuthField(NodeField),
    RemoveAuthField(String),
    AddKeyword(String),
    RemoveKeyword(String),
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn ensure_id(id: &mut String) {
    if id.is_empty() {
        *id = fresh_id();
    }
}

impl NodeConfig {
    /// Applies one edit in place.
    ///
    /// Removals of ids that are not present are no-ops. Edits addressing a
    /// resource or operation that does not exist fail without touching the document.
    pub fn apply(&mut self, edit: ConfigEdit) -> Result<(), ConfigError> {
        trace!(?edit, "Applying config edit");
        match edit {
            ConfigEdit::SetName(name) => self.name = name,
            ConfigEdit::SetDisplayName(display_name) => self.display_name = display_name,
            ConfigEdit::SetDescription(description) => self.description = description,
            ConfigEdit::SetVersion(version) => self.version = version,
            ConfigEdit::SetIcon(icon) => self.icon = icon,
            ConfigEdit::SetAuthor(author) => self.metadata.author = author,
            ConfigEdit::SetLicense(license) => self.metadata.license = license,
            ConfigEdit::SetRepository(repository) => self.metadata.repository = repository,
            ConfigEdit::AddResource(mut resource) => {
                ensure_id(&mut resource.id);
                for operation in &mut resource.operations {
                    ensure_id(&mut operation.id);
                }
                debug!(resource = %resource.value, "Adding resource");
                self.resources.push(resource);
            }
            ConfigEdit::UpdateResource { resource_id, patch } => {
                let resource = self.resource_mut(&resource_id)?;
                if let Some(name) = patch.name {
                    resource.name = name;
                }
                if let Some(value) = patch.value {
                    resource.value = value;
                }
                if let Some(description) = patch.description {
                    resource.description = description;
                }
            }
            ConfigEdit::RemoveResource(resource_id) => {
                self.resources.retain(|r| r.id != resource_id);
            }
            ConfigEdit::AddOperation {
                resource_id,
                mut operation,
            } => {
                ensure_id(&mut operation.id);
                let resource = self.resource_mut(&resource_id)?;
                debug!(resource = %resource.value, operation = %operation.value, "Adding operation");
                resource.operations.push(operation);
            }
            ConfigEdit::UpdateOperation {
                resource_id,
                operation_id,
                mut operation,
            } => {
                let current = self.operation_mut(&resource_id, &operation_id)?;
                operation.id = operation_id;
                *current = operation;
            }
            ConfigEdit::RemoveOperation {
                resource_id,
                operation_id,
            } => {
                if let Some(resource) = self.resources.iter_mut().find(|r| r.id == resource_id) {
                    resource.operations.retain(|op| op.id != operation_id);
                }
            }
            ConfigEdit::AddField {
                resource_id,
                operation_id,
                mut field,
            } => {
                ensure_id(&mut field.id);
                self.operation_mut(&resource_id, &operation_id)?
                    .fields
                    .push(field);
            }
            ConfigEdit::RemoveField {
                resource_id,
                operation_id,
                field_id,
            } => {
                if let Ok(operation) = self.operation_mut(&resource_id, &operation_id) {
                    operation.fields.retain(|f| f.id != field_id);
                }
            }
            ConfigEdit::AddAdditionalField(mut field) => {
                ensure_id(&mut field.id);
                self.additional_fields.push(field);
            }
            ConfigEdit::RemoveAdditionalField(field_id) => {
                self.additional_fields.retain(|f| f.id != field_id);
            }
            ConfigEdit::SetAuthType(auth_type) => self.authentication.set_type(auth_type),
            ConfigEdit::AddAuthField(mut field) => {
                ensure_id(&mut field.id);
                self.authentication.fields.push(field);
            }
            ConfigEdit::RemoveAuthField(field_id) => {
                self.authentication.fields.retain(|f| f.id != field_id);
            }
            ConfigEdit::AddKeyword(keyword) => {
                self.add_keyword(&keyword);
            }
            ConfigEdit::RemoveKeyword(keyword) => {
                self.remove_keyword(&keyword);
            }
        }
        Ok(())
    }

    /// Adds a keyword with set semantics. Returns `false` when nothing changed.
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() || self.metadata.keywords.iter().any(|k| k == keyword) {
            return false;
        }
        self.metadata.keywords.push(keyword.to_string());
        true
    }

    /// Removes a keyword if present. Returns `false` when nothing changed.
    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        let before = self.metadata.keywords.len();
        self.metadata.keywords.retain(|k| k != keyword);
        before != self.metadata.keywords.len()
    }

    fn resource_mut(&mut self, resource_id: &str) -> Result<&mut Resource, ConfigError> {
        self.resources
            .iter_mut()
            .find(|r| r.id == resource_id)
            .ok_or_else(|| ConfigError::UnknownResource(resource_id.to_string()))
    }

    fn operation_mut(
        &mut self,
        resource_id: &str,
        operation_id: &str,
    ) -> Result<&mut Operation, ConfigError> {
        self.resource_mut(resource_id)?
            .operations
            .iter_mut()
            .find(|op| op.id == operation_id)
            .ok_or_else(|| ConfigError::UnknownOperation {
                resource_id: resource_id.to_string(),
                operation_id: operation_id.to_string(),
            })
    }
}
