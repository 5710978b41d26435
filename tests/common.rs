//! Common test utilities for building node descriptions.
use nodeforge::prelude::*;
use serde_json::json;

/// The "slack2" node: one `message` resource with a `send` operation, API key auth.
#[allow(dead_code)]
pub fn create_slack_config() -> NodeConfig {
    NodeConfig {
        name: "slack2".to_string(),
        display_name: "Slack 2".to_string(),
        description: "Talk to Slack".to_string(),
        version: "1.0.0".to_string(),
        icon: "slack2.svg".to_string(),
        resources: vec![Resource {
            id: "res-1".to_string(),
            name: "Message".to_string(),
            value: "message".to_string(),
            description: "A chat message".to_string(),
            operations: vec![Operation {
                id: "op-1".to_string(),
                name: "Send".to_string(),
                value: "send".to_string(),
                description: "Send a message".to_string(),
                action: HttpMethod::Post,
                routing: Routing {
                    request: RoutingRequest {
                        method: HttpMethod::Post,
                        url: "/chat.postMessage".to_string(),
                        ..Default::default()
                    },
                },
                fields: vec![create_text_field("f-1", "Channel Name")],
            }],
        }],
        authentication: AuthConfig::with_type(AuthType::ApiKey),
        additional_fields: Vec::new(),
        metadata: Metadata {
            author: "Jane Doe".to_string(),
            license: "MIT".to_string(),
            repository: "https://github.com/example/n8n-nodes-slack2".to_string(),
            keywords: vec!["slack".to_string(), "chat".to_string()],
        },
    }
}

/// Same as [`create_slack_config`] without authentication.
#[allow(dead_code)]
pub fn create_unauthenticated_config() -> NodeConfig {
    let mut config = create_slack_config();
    config.authentication.set_type(AuthType::None);
    config
}

/// Two resources with two operations each, for exercising table dispatch.
#[allow(dead_code)]
pub fn create_multi_resource_config() -> NodeConfig {
    let mut config = create_slack_config();
    config.resources[0].operations.push(Operation {
        id: "op-2".to_string(),
        name: "Delete".to_string(),
        value: "delete".to_string(),
        description: "Delete a message".to_string(),
        action: HttpMethod::Delete,
        routing: Routing {
            request: RoutingRequest {
                method: HttpMethod::Delete,
                url: "/chat.delete".to_string(),
                ..Default::default()
            },
        },
        fields: Vec::new(),
    });
    config.resources.push(Resource {
        id: "res-2".to_string(),
        name: "Channel".to_string(),
        value: "channel".to_string(),
        description: "A conversation channel".to_string(),
        operations: vec![Operation {
            id: "op-3".to_string(),
            name: "Archive".to_string(),
            value: "archive".to_string(),
            description: "Archive a channel".to_string(),
            action: HttpMethod::Post,
            routing: Routing {
                request: RoutingRequest {
                    method: HttpMethod::Post,
                    url: "/conversations.archive".to_string(),
                    body: Some(
                        json!({ "channel": "={{$parameter.channel_id}}" })
                            .as_object()
                            .cloned()
                            .unwrap_or_default(),
                    ),
                    ..Default::default()
                },
            },
            fields: vec![create_text_field("f-2", "Channel ID")],
        }],
    });
    config
}

#[allow(dead_code)]
pub fn create_text_field(id: &str, name: &str) -> NodeField {
    NodeField {
        id: id.to_string(),
        name: name.to_string(),
        field_type: FieldType::String,
        required: true,
        description: format!("The {}", name.to_lowercase()),
        options: None,
        default: None,
    }
}

/// A JSON document as saved by the form wizard, with ids from timestamps.
#[allow(dead_code)]
pub const WIZARD_DOCUMENT_JSON: &str = r#"{
  "name": "weatherApi",
  "displayName": "Weather API",
  "description": "Fetch forecasts",
  "version": "2.1.0",
  "icon": "",
  "resources": [
    {
      "id": "1718000000000",
      "name": "Forecast",
      "value": "forecast",
      "description": "Daily forecasts",
      "operations": [
        {
          "id": "1718000000001",
          "name": "Get",
          "value": "get",
          "description": "Get a forecast",
          "action": "GET",
          "routing": { "request": { "method": "GET", "url": "/forecast", "qs": { "units": "metric" } } },
          "fields": [
            {
              "id": "1718000000002",
              "name": "Units",
              "type": "options",
              "required": false,
              "description": "Measurement system",
              "options": [
                { "name": "Metric", "value": "metric" },
                { "name": "Imperial", "value": "imperial" }
              ],
              "default": "metric"
            }
          ]
        }
      ]
    }
  ],
  "authentication": {
    "type": "oauth2",
    "fields": [
      { "id": "1", "name": "Client ID", "type": "string", "required": true, "description": "OAuth2 client ID" },
      { "id": "2", "name": "Client Secret", "type": "string", "required": true, "description": "OAuth2 client secret" }
    ]
  },
  "additionalFields": [
    { "id": "1718000000003", "name": "Timeout", "type": "number", "required": false, "description": "Seconds to wait", "default": 30 }
  ],
  "metadata": {
    "author": "Weather Co",
    "license": "Apache-2.0",
    "repository": "https://github.com/weather/n8n-nodes-weatherapi",
    "keywords": ["weather"]
  }
}"#;
