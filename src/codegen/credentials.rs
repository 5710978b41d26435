use super::SourceWriter;
use crate::config::{AuthType, NodeConfig};
use crate::naming::{class_name_of, field_identifier_of, quote};
use tracing::debug;

/// Rendered in place of a credentials file when authentication is `none`.
pub const NO_CREDENTIALS_COMMENT: &str = "// No credentials required for this node";

const DOCUMENTATION_URL_PLACEHOLDER: &str = "https://docs.example.com";
const TEST_BASE_URL_PLACEHOLDER: &str = "https://api.example.com";
const FALLBACK_API_KEY_FIELD: &str = "api_key";

pub(super) fn generate(config: &NodeConfig) -> String {
    let auth = &config.authentication;
    if auth.auth_type == AuthType::None {
        debug!(node = %config.name, "No authentication configured, skipping credentials file");
        return NO_CREDENTIALS_COMMENT.to_string();
    }

    let class_name = format!("{}Api", class_name_of(&config.name));
    let mut w = SourceWriter::new();

    w.scope("import {", "} from 'n8n-workflow';", |w| {
        w.line("IAuthenticateGeneric,");
        w.line("ICredentialTestRequest,");
        w.line("ICredentialType,");
        w.line("INodeProperties,");
    });
    w.line("");
    w.scope(
        format!("export class {class_name} implements ICredentialType {{"),
        "}",
        |w| {
            w.line(format!("name = {};", quote(&format!("{}Api", config.name))));
            w.line(format!(
                "displayName = {};",
                quote(&format!("{} API", config.display_name))
            ));
            w.line(format!(
                "documentationUrl = {};",
                quote(DOCUMENTATION_URL_PLACEHOLDER)
            ));
            w.scope("properties: INodeProperties[] = [", "];", |w| {
                for field in &auth.fields {
                    w.scope("{", "},", |w| {
                        w.line(format!("displayName: {},", quote(&field.name)));
                        w.line(format!("name: {},", quote(&field_identifier_of(&field.name))));
                        w.line(format!("type: {},", quote(field.field_type.as_str())));
                        w.line(format!("description: {},", quote(&field.description)));
                        w.line(format!("required: {},", field.required));
                    });
                }
            });
            w.line("");
            w.scope("authenticate: IAuthenticateGeneric = {", "};", |w| {
                w.line("type: 'generic',");
                w.scope("properties: {", "},", |w| {
                    w.scope("headers: {", "},", |w| {
                        // OAuth2 header wiring is left to the package author.
                        if auth.auth_type == AuthType::ApiKey {
                            let key_field = auth
                                .fields
                                .first()
                                .map(|f| field_identifier_of(&f.name))
                                .unwrap_or_else(|| FALLBACK_API_KEY_FIELD.to_string());
                            w.line(format!(
                                "Authorization: {},",
                                quote(&format!("=Bearer {{{{$credentials.{key_field}}}}}"))
                            ));
                        }
                    });
                });
            });
            w.line("");
            w.scope("test: ICredentialTestRequest = {", "};", |w| {
                w.scope("request: {", "},", |w| {
                    w.line(format!("baseURL: {},", quote(TEST_BASE_URL_PLACEHOLDER)));
                    w.line("url: '/test',");
                    w.line("method: 'GET',");
                });
            });
        },
    );

    let source = w.finish();
    debug!(
        class = %class_name,
        auth = %auth.auth_type,
        fields = auth.fields.len(),
        "Generated credentials file"
    );
    source
}
