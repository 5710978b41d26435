use super::model::{AuthConfig, AuthType, NodeField};
use tracing::debug;

/// The canonical credential inputs for an authentication type.
///
/// `none` has no inputs, `apiKey` a single "API Key" and `oauth2` the client
/// credentials pair. All of them are required strings.
pub fn default_auth_fields(auth_type: AuthType) -> Vec<NodeField> {
    match auth_type {
        AuthType::None => Vec::new(),
        AuthType::ApiKey => vec![NodeField::required_string(
            "1",
            "API Key",
            "Your API key for authentication",
        )],
        AuthType::OAuth2 => vec![
            NodeField::required_string("1", "Client ID", "OAuth2 client ID"),
            NodeField::required_string("2", "Client Secret", "OAuth2 client secret"),
        ],
    }
}

impl AuthConfig {
    /// Builds an authentication section already holding the defaults for `auth_type`.
    pub fn with_type(auth_type: AuthType) -> Self {
        Self {
            auth_type,
            fields: default_auth_fields(auth_type),
        }
    }

    /// Switches to `auth_type`, always resetting the fields to the canonical set.
    ///
    /// Customized fields are discarded even when re-selecting the current type.
    pub fn set_type(&mut self, auth_type: AuthType) {
        debug!(
            from = %self.auth_type,
            to = %auth_type,
            dropped_fields = self.fields.len(),
            "Resetting authentication fields"
        );
        *self = Self::with_type(auth_type);
    }
}
