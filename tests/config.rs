//! Tests for the configuration document: auth policy, edits, validation and loading.
mod common;
use common::*;
use nodeforge::config::{default_auth_fields, is_valid_node_name};
use nodeforge::prelude::*;
use pretty_assertions::assert_eq;

fn field_names(config: &NodeConfig) -> Vec<&str> {
    config
        .authentication
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect()
}

#[test]
fn test_default_config_matches_wizard_initial_state() {
    let config = NodeConfig::default();
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.metadata.license, "MIT");
    assert_eq!(config.authentication.auth_type, AuthType::None);
    assert!(config.authentication.fields.is_empty());
    assert!(config.resources.is_empty());
}

#[test]
fn test_auth_transitions_always_reset_to_defaults() {
    let mut config = create_slack_config();
    config
        .apply(ConfigEdit::AddAuthField(create_text_field("", "Workspace")))
        .unwrap();
    assert_eq!(config.authentication.fields.len(), 2);

    config.apply(ConfigEdit::SetAuthType(AuthType::ApiKey)).unwrap();
    assert_eq!(field_names(&config), vec!["API Key"]);

    config.apply(ConfigEdit::SetAuthType(AuthType::OAuth2)).unwrap();
    assert_eq!(field_names(&config), vec!["Client ID", "Client Secret"]);

    config.apply(ConfigEdit::SetAuthType(AuthType::None)).unwrap();
    assert!(config.authentication.fields.is_empty());
}

#[test]
fn test_default_auth_fields_are_required_strings() {
    for auth_type in [AuthType::ApiKey, AuthType::OAuth2] {
        for field in default_auth_fields(auth_type) {
            assert_eq!(field.field_type, FieldType::String);
            assert!(field.required);
        }
    }
    assert_eq!(
        default_auth_fields(AuthType::ApiKey)[0].description,
        "Your API key for authentication"
    );
}

#[test]
fn test_keywords_have_set_semantics() {
    let mut config = create_slack_config();
    assert!(!config.add_keyword("slack"));
    assert!(!config.add_keyword("   "));
    assert!(config.add_keyword("  messaging "));
    assert!(!config.remove_keyword("absent"));
    assert_eq!(config.metadata.keywords, vec!["slack", "chat", "messaging"]);

    config
        .apply(ConfigEdit::AddKeyword("chat".to_string()))
        .unwrap();
    config
        .apply(ConfigEdit::RemoveKeyword("slack".to_string()))
        .unwrap();
    assert_eq!(config.metadata.keywords, vec!["chat", "messaging"]);
}

#[test]
fn test_keyword_removal_trims_like_addition() {
    let mut config = NodeConfig::default();
    config
        .apply(ConfigEdit::AddKeyword(" slack ".to_string()))
        .unwrap();
    assert_eq!(config.metadata.keywords, vec!["slack"]);

    assert!(config.remove_keyword(" slack "));
    assert!(config.metadata.keywords.is_empty());
}

#[test]
fn test_added_items_receive_fresh_ids() {
    let mut config = NodeConfig::default();
    let resource = Resource {
        name: "Issue".to_string(),
        value: "issue".to_string(),
        description: "Tracker issues".to_string(),
        ..Default::default()
    };
    config.apply(ConfigEdit::AddResource(resource.clone())).unwrap();
    config.apply(ConfigEdit::AddResource(resource)).unwrap();

    let ids: Vec<_> = config.resources.iter().map(|r| r.id.clone()).collect();
    assert!(ids.iter().all(|id| !id.is_empty()));
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn test_operation_and_field_edits() {
    let mut config = create_slack_config();
    config
        .apply(ConfigEdit::AddField {
            resource_id: "res-1".to_string(),
            operation_id: "op-1".to_string(),
            field: create_text_field("f-9", "Text"),
        })
        .unwrap();
    assert_eq!(config.resources[0].operations[0].fields.len(), 2);

    config
        .apply(ConfigEdit::RemoveField {
            resource_id: "res-1".to_string(),
            operation_id: "op-1".to_string(),
            field_id: "f-1".to_string(),
        })
        .unwrap();
    assert_eq!(config.resources[0].operations[0].fields[0].id, "f-9");

    let replacement = Operation {
        id: "ignored".to_string(),
        name: "Post".to_string(),
        value: "post".to_string(),
        description: "Post a message".to_string(),
        ..Default::default()
    };
    config
        .apply(ConfigEdit::UpdateOperation {
            resource_id: "res-1".to_string(),
            operation_id: "op-1".to_string(),
            operation: replacement,
        })
        .unwrap();
    let operation = &config.resources[0].operations[0];
    assert_eq!(operation.id, "op-1");
    assert_eq!(operation.value, "post");

    config
        .apply(ConfigEdit::RemoveOperation {
            resource_id: "res-1".to_string(),
            operation_id: "op-1".to_string(),
        })
        .unwrap();
    assert!(config.resources[0].operations.is_empty());
}

#[test]
fn test_resource_patch_keeps_untouched_fields() {
    let mut config = create_slack_config();
    config
        .apply(ConfigEdit::UpdateResource {
            resource_id: "res-1".to_string(),
            patch: ResourcePatch {
                description: Some("Updated".to_string()),
                ..Default::default()
            },
        })
        .unwrap();
    let resource = &config.resources[0];
    assert_eq!(resource.description, "Updated");
    assert_eq!(resource.value, "message");
    assert_eq!(resource.operations.len(), 1);
}

#[test]
fn test_edits_on_missing_parents_fail_and_removals_are_noops() {
    let mut config = create_slack_config();
    let before = config.clone();

    let result = config.apply(ConfigEdit::AddOperation {
        resource_id: "nope".to_string(),
        operation: Operation::default(),
    });
    assert!(matches!(result, Err(ConfigError::UnknownResource(id)) if id == "nope"));

    let result = config.apply(ConfigEdit::AddField {
        resource_id: "res-1".to_string(),
        operation_id: "nope".to_string(),
        field: NodeField::default(),
    });
    assert!(matches!(result, Err(ConfigError::UnknownOperation { .. })));

    config
        .apply(ConfigEdit::RemoveResource("nope".to_string()))
        .unwrap();
    config
        .apply(ConfigEdit::RemoveAdditionalField("nope".to_string()))
        .unwrap();
    assert_eq!(config, before);
}

#[test]
fn test_node_name_rules() {
    assert!(is_valid_node_name("slack2"));
    assert!(is_valid_node_name("weatherApi"));
    assert!(!is_valid_node_name("2slack"));
    assert!(!is_valid_node_name("my-node"));
    assert!(!is_valid_node_name("my node"));
    assert!(!is_valid_node_name(""));
}

#[test]
fn test_valid_config_passes_validation() {
    assert_eq!(create_slack_config().validate(), Ok(()));
    assert_eq!(create_multi_resource_config().validate(), Ok(()));
}

#[test]
fn test_validation_reports_every_problem() {
    let mut config = create_slack_config();
    config.name = "2bad".to_string();
    config.display_name = " ".to_string();
    config.resources[0].operations.clear();
    let mut stray = create_text_field("x", "Level");
    stray.options = Some(vec![FieldOption {
        name: "High".to_string(),
        value: "high".to_string(),
    }]);
    config.additional_fields.push(stray);

    let errors = config.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::InvalidNodeName("2bad".to_string())));
    assert!(errors.contains(&ValidationError::MissingValue("displayName".to_string())));
    assert!(errors.contains(&ValidationError::NoOperations));
    assert!(errors.contains(&ValidationError::UnexpectedOptions {
        field: "Level".to_string(),
        field_type: FieldType::String,
    }));
}

#[test]
fn test_validation_catches_duplicates() {
    let mut config = create_multi_resource_config();
    config.resources[1].value = "message".to_string();
    config.resources[0].operations[1].value = "send".to_string();

    let errors = config.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::DuplicateValue {
        scope: "resources".to_string(),
        value: "message".to_string(),
    }));
    assert!(errors.contains(&ValidationError::DuplicateValue {
        scope: "resource 'message'".to_string(),
        value: "send".to_string(),
    }));
}

#[test]
fn test_wizard_document_loads() {
    let config = NodeConfig::from_json(WIZARD_DOCUMENT_JSON).expect("Failed to parse document");
    assert_eq!(config.name, "weatherApi");
    assert_eq!(config.display_name, "Weather API");
    assert_eq!(config.authentication.auth_type, AuthType::OAuth2);
    assert_eq!(config.additional_fields[0].field_type, FieldType::Number);

    let field = &config.resources[0].operations[0].fields[0];
    assert_eq!(field.field_type, FieldType::Options);
    assert_eq!(field.effective_options().map(|o| o.len()), Some(2));
    assert_eq!(
        config.resources[0].operations[0]
            .routing
            .request
            .qs
            .as_ref()
            .and_then(|qs| qs.get("units"))
            .map(String::as_str),
        Some("metric")
    );
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_partial_document_loads_with_defaults() {
    let config = NodeConfig::from_json(
        r#"{
  "displayName": "Draft",
  "resources": [{ "id": "r1", "operations": [{ "id": "o1", "fields": [{ "id": "f1" }] }] }]
}"#,
    )
    .expect("Failed to parse partial document");

    assert_eq!(config.name, "");
    assert_eq!(config.display_name, "Draft");
    let resource = &config.resources[0];
    assert_eq!(resource.name, "");
    assert_eq!(resource.value, "");
    assert_eq!(resource.operations[0].value, "");
    assert_eq!(resource.operations[0].fields[0].name, "");
    assert!(generate_node_file(&config).contains("displayName: 'Draft',"));
}

#[test]
fn test_config_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("node.json");
    let config = NodeConfig::from_json(WIZARD_DOCUMENT_JSON).unwrap();

    config.save(&path).expect("Failed to save config");
    let loaded = NodeConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_loading_reports_io_and_parse_errors() {
    let missing = NodeConfig::from_file("/definitely/not/here.json");
    assert!(matches!(missing, Err(ConfigError::Io { .. })));

    let malformed = NodeConfig::from_json("{ not json");
    assert!(matches!(malformed, Err(ConfigError::Parse(_))));
}
