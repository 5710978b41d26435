use super::{DispatchMode, GeneratorOptions, SourceWriter, to_pretty_json};
use crate::config::{NodeConfig, NodeField, Operation, Resource};
use crate::naming::{class_name_of, field_identifier_of, quote};
use serde_json::Value;
use tracing::debug;

const SUBTITLE_EXPRESSION: &str = r#"={{$parameter["operation"] + ": " + $parameter["resource"]}}"#;
const BASE_URL_PLACEHOLDER: &str = "https://api.example.com";

pub(super) fn generate(config: &NodeConfig, options: &GeneratorOptions) -> String {
    let class_name = class_name_of(&config.name);
    let mut w = SourceWriter::new();

    w.scope("import {", "} from 'n8n-workflow';", |w| {
        if options.dispatch == DispatchMode::Table {
            w.line("IDataObject,");
        }
        for import in [
            "IExecuteFunctions",
            "INodeExecutionData",
            "INodeType",
            "INodeTypeDescription",
            "NodeConnectionType",
        ] {
            w.line(format!("{import},"));
        }
    });
    w.line("");
    w.scope(
        format!("export class {class_name} implements INodeType {{"),
        "}",
        |w| {
            w.scope("description: INodeTypeDescription = {", "};", |w| {
                write_descriptor(w, config, options);
            });
            w.line("");
            write_execute(w, config, options);
        },
    );

    let source = w.finish();
    debug!(
        class = %class_name,
        resources = config.resources.len(),
        dispatch = ?options.dispatch,
        bytes = source.len(),
        "Generated node implementation"
    );
    source
}

/// The integer version n8n expects, taken from the leading component of a semver string.
pub(crate) fn node_version(version: &str) -> u32 {
    version
        .trim()
        .split('.')
        .next()
        .and_then(|major| major.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1)
}

fn write_descriptor(w: &mut SourceWriter, config: &NodeConfig, options: &GeneratorOptions) {
    w.line(format!("displayName: {},", quote(&config.display_name)));
    w.line(format!("name: {},", quote(&config.name)));
    w.line(format!("icon: {},", quote(&format!("file:{}.svg", config.name))));
    w.line("group: ['transform'],");
    w.line(format!("version: {},", node_version(&config.version)));
    w.line(format!("subtitle: {},", quote(SUBTITLE_EXPRESSION)));
    w.line(format!("description: {},", quote(&config.description)));
    w.scope("defaults: {", "},", |w| {
        w.line(format!("name: {},", quote(&config.display_name)));
    });
    w.line("inputs: [NodeConnectionType.Main],");
    w.line("outputs: [NodeConnectionType.Main],");
    w.scope("credentials: [", "],", |w| {
        w.scope("{", "},", |w| {
            w.line(format!("name: {},", quote(&format!("{}Api", config.name))));
            w.line(format!(
                "required: {},",
                config.authentication.is_configured()
            ));
        });
    });
    w.scope("requestDefaults: {", "},", |w| {
        w.line(format!("baseURL: {},", quote(BASE_URL_PLACEHOLDER)));
        w.scope("headers: {", "},", |w| {
            w.line("Accept: 'application/json',");
            w.line("'Content-Type': 'application/json',");
        });
    });
    w.scope("properties: [", "],", |w| {
        write_resource_selector(w, &config.resources);
        match options.dispatch {
            DispatchMode::FirstOperation => {
                write_operation_selector(w, config.resources.first());
            }
            DispatchMode::Table => {
                for resource in &config.resources {
                    write_operation_selector(w, Some(resource));
                }
            }
        }
        for (resource, operation) in config.operations_with_resource() {
            for field in &operation.fields {
                write_field(w, field, Some((resource.value.as_str(), operation.value.as_str())));
            }
        }
        if !config.additional_fields.is_empty() {
            write_additional_fields(w, &config.additional_fields);
        }
    });
}

fn write_resource_selector(w: &mut SourceWriter, resources: &[Resource]) {
    w.scope("{", "},", |w| {
        w.line("displayName: 'Resource',");
        w.line("name: 'resource',");
        w.line("type: 'options',");
        w.line("noDataExpression: true,");
        w.scope("options: [", "],", |w| {
            for resource in resources {
                w.scope("{", "},", |w| {
                    w.line(format!("name: {},", quote(&resource.name)));
                    w.line(format!("value: {},", quote(&resource.value)));
                    w.line(format!("description: {},", quote(&resource.description)));
                });
            }
        });
        let default = resources.first().map_or("", |r| r.value.as_str());
        w.line(format!("default: {},", quote(default)));
    });
}

/// The Operation selector shown while `resource` is selected.
fn write_operation_selector(w: &mut SourceWriter, resource: Option<&Resource>) {
    let resource_value = resource.map_or("", |r| r.value.as_str());
    let operations: &[Operation] = resource.map(|r| r.operations.as_slice()).unwrap_or_default();

    w.scope("{", "},", |w| {
        w.line("displayName: 'Operation',");
        w.line("name: 'operation',");
        w.line("type: 'options',");
        w.line("noDataExpression: true,");
        write_display_options(w, resource_value, None);
        w.scope("options: [", "],", |w| {
            for operation in operations {
                w.scope("{", "},", |w| {
                    w.line(format!("name: {},", quote(&operation.name)));
                    w.line(format!("value: {},", quote(&operation.value)));
                    w.line(format!("description: {},", quote(&operation.description)));
                    w.line(format!("action: {},", quote(operation.action.as_str())));
                    write_json_property(w, "routing", &to_pretty_json(&operation.routing));
                });
            }
        });
        let default = operations.first().map_or("", |op| op.value.as_str());
        w.line(format!("default: {},", quote(default)));
    });
}

fn write_display_options(w: &mut SourceWriter, resource: &str, operation: Option<&str>) {
    w.scope("displayOptions: {", "},", |w| {
        w.scope("show: {", "},", |w| {
            w.line(format!("resource: [{}],", quote(resource)));
            if let Some(operation) = operation {
                w.line(format!("operation: [{}],", quote(operation)));
            }
        });
    });
}

/// One property block for a field, optionally gated on a (resource, operation) pair.
fn write_field(w: &mut SourceWriter, field: &NodeField, show: Option<(&str, &str)>) {
    w.scope("{", "},", |w| {
        w.line(format!("displayName: {},", quote(&field.name)));
        w.line(format!("name: {},", quote(&field_identifier_of(&field.name))));
        w.line(format!("type: {},", quote(field.field_type.as_str())));
        w.line(format!("required: {},", field.required));
        w.line(format!("description: {},", quote(&field.description)));
        if let Some((resource, operation)) = show {
            write_display_options(w, resource, Some(operation));
        }
        if let Some(options) = field.effective_options() {
            w.scope("options: [", "],", |w| {
                for option in options {
                    w.line(format!(
                        "{{ name: {}, value: {} }},",
                        quote(&option.name),
                        quote(&option.value)
                    ));
                }
            });
        }
        if let Some(default) = &field.default {
            w.line(format!("default: {},", default_literal(default)));
        }
    });
}

fn write_additional_fields(w: &mut SourceWriter, fields: &[NodeField]) {
    w.scope("{", "},", |w| {
        w.line("displayName: 'Additional Fields',");
        w.line("name: 'additionalFields',");
        w.line("type: 'collection',");
        w.line("placeholder: 'Add Field',");
        w.line("default: {},");
        w.scope("options: [", "],", |w| {
            for field in fields {
                write_field(w, field, None);
            }
        });
    });
}

/// Strings become quoted literals; numbers, booleans and structured values are emitted as JSON.
pub(crate) fn default_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

/// Writes `key: <json>,` where the JSON may span several lines.
fn write_json_property(w: &mut SourceWriter, key: &str, json: &str) {
    let count = json.lines().count();
    for (i, line) in json.lines().enumerate() {
        let mut text = if i == 0 {
            format!("{key}: {line}")
        } else {
            line.to_string()
        };
        if i + 1 == count {
            text.push(',');
        }
        w.line(text);
    }
}

fn write_execute(w: &mut SourceWriter, config: &NodeConfig, options: &GeneratorOptions) {
    w.scope(
        "async execute(this: IExecuteFunctions): Promise<INodeExecutionData[][]> {",
        "}",
        |w| {
            w.line("const items = this.getInputData();");
            w.line("const returnData: INodeExecutionData[] = [];");
            if options.dispatch == DispatchMode::Table {
                write_routing_table(w, config);
            }
            w.line("");
            w.scope("for (let i = 0; i < items.length; i++) {", "}", |w| {
                w.scope("try {", "} catch (error) {", |w| {
                    w.line("const resource = this.getNodeParameter('resource', i) as string;");
                    w.line("const operation = this.getNodeParameter('operation', i) as string;");
                    w.line("");
                    w.line("let responseData;");
                    w.line("");
                    match options.dispatch {
                        DispatchMode::FirstOperation => write_first_dispatch(w, config),
                        DispatchMode::Table => write_table_dispatch(w),
                    }
                    w.line("");
                    w.line("const executionData = this.helpers.constructExecutionMetaData(");
                    w.line("  this.helpers.returnJsonArray(responseData as any),");
                    w.line("  { itemData: { item: i } }");
                    w.line(");");
                    w.line("");
                    w.line("returnData.push(...executionData);");
                });
                w.indented(|w| {
                    w.scope("if (this.continueOnFail()) {", "} else {", |w| {
                        w.line("const executionErrorData = this.helpers.constructExecutionMetaData(");
                        w.line("  this.helpers.returnJsonArray({ error: error.message }),");
                        w.line("  { itemData: { item: i } }");
                        w.line(");");
                        w.line("returnData.push(...executionErrorData);");
                    });
                    w.indented(|w| {
                        w.line("throw error;");
                    });
                    w.line("}");
                });
                w.line("}");
            });
            w.line("");
            w.line("return [returnData];");
        },
    );
}

fn write_first_dispatch(w: &mut SourceWriter, config: &NodeConfig) {
    let first_resource = config.resources.first();
    let resource_value = first_resource.map_or("", |r| r.value.as_str());
    let operation_value = first_resource
        .and_then(|r| r.operations.first())
        .map_or("", |op| op.value.as_str());

    w.scope(format!("if (resource === {}) {{", quote(resource_value)), "}", |w| {
        w.scope(
            format!("if (operation === {}) {{", quote(operation_value)),
            "}",
            |w| {
                w.scope("responseData = await this.makeRoutingRequest({", "});", |w| {
                    w.line("itemIndex: i,");
                    w.line("additionalKeys: {},");
                });
            },
        );
    });
}

fn write_routing_table(w: &mut SourceWriter, config: &NodeConfig) {
    w.scope("const routingTable: Record<string, IDataObject> = {", "};", |w| {
        for (resource, operation) in config.operations_with_resource() {
            let key = format!("{}:{}", resource.value, operation.value);
            write_json_property(w, &quote(&key), &to_pretty_json(&operation.routing.request));
        }
    });
}

fn write_table_dispatch(w: &mut SourceWriter) {
    w.line("const request = routingTable[`${resource}:${operation}`];");
    w.scope("if (request !== undefined) {", "}", |w| {
        w.scope("responseData = await this.makeRoutingRequest({", "});", |w| {
            w.line("itemIndex: i,");
            w.line("additionalKeys: {},");
            w.line("request,");
        });
    });
}
