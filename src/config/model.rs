use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The closed set of input kinds a node field can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Boolean,
    DateTime,
    Options,
    Collection,
}

impl FieldType {
    /// The identifier the n8n runtime uses for this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::DateTime => "dateTime",
            FieldType::Options => "options",
            FieldType::Collection => "collection",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable entry of an `options` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    #[serde(alias = "label")]
    pub name: String,
    pub value: String,
}

/// A single user-configurable input, scoped to an operation, to the
/// credentials, or free-standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NodeField {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    /// Only meaningful when `field_type` is [`FieldType::Options`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl NodeField {
    /// A plain required string field, the shape used for credential inputs.
    pub fn required_string(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            field_type: FieldType::String,
            required: true,
            description: description.to_string(),
            options: None,
            default: None,
        }
    }

    /// The options to emit, honoring the rule that only `options` fields carry them.
    pub fn effective_options(&self) -> Option<&[FieldOption]> {
        match (self.field_type, &self.options) {
            (FieldType::Options, Some(options)) => Some(options),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declarative request template of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoutingRequest {
    #[serde(default)]
    pub method: HttpMethod,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qs: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Routing {
    #[serde(default)]
    pub request: RoutingRequest,
}

/// One verb a resource supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Operation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub action: HttpMethod,
    #[serde(default)]
    pub routing: Routing,
    #[serde(default)]
    pub fields: Vec<NodeField>,
}

/// One API entity or endpoint group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AuthType {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "apiKey", alias = "api-key")]
    ApiKey,
    #[serde(rename = "oauth2", alias = "oauth2-client-credentials")]
    OAuth2,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::None => "none",
            AuthType::ApiKey => "apiKey",
            AuthType::OAuth2 => "oauth2",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(rename = "type", default)]
    pub auth_type: AuthType,
    #[serde(default)]
    pub fields: Vec<NodeField>,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        self.auth_type != AuthType::None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            author: String::new(),
            license: "MIT".to_string(),
            repository: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// The root document describing the node package to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub authentication: AuthConfig,
    #[serde(default)]
    pub additional_fields: Vec<NodeField>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            version: "1.0.0".to_string(),
            icon: String::new(),
            resources: Vec::new(),
            authentication: AuthConfig::default(),
            additional_fields: Vec::new(),
            metadata: Metadata::default(),
        }
    }
}

impl NodeConfig {
    pub fn find_resource(&self, resource_id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == resource_id)
    }

    /// Every operation paired with the value of the resource owning it, in declaration order.
    pub fn operations_with_resource(&self) -> impl Iterator<Item = (&Resource, &Operation)> {
        self.resources
            .iter()
            .flat_map(|resource| resource.operations.iter().map(move |op| (resource, op)))
    }
}
