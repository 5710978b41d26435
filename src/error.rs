use crate::config::FieldType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or editing a configuration document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse node config JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Resource '{0}' not found in the node config")]
    UnknownResource(String),

    #[error("Operation '{operation_id}' not found in resource '{resource_id}'")]
    UnknownOperation {
        resource_id: String,
        operation_id: String,
    },
}

/// A single rule violation found by [`crate::config::NodeConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is required")]
    MissingValue(String),

    #[error(
        "Node name '{0}' must start with a letter and contain only letters and numbers"
    )]
    InvalidNodeName(String),

    #[error("Duplicate id '{id}' in {scope}")]
    DuplicateId { scope: String, id: String },

    #[error("Duplicate value '{value}' in {scope}")]
    DuplicateValue { scope: String, value: String },

    #[error("At least one resource needs an operation")]
    NoOperations,

    #[error("Field '{field}' of type '{field_type}' carries options, only 'options' fields may")]
    UnexpectedOptions { field: String, field_type: FieldType },

    #[error("Authentication type 'none' cannot carry fields, found {0}")]
    UnexpectedAuthFields(usize),
}

/// Errors raised while handing a bundle to a packaging sink.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export: the node has no name")]
    NothingToExport,

    #[error("Could not write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bundle entry '{0}' would be written outside the output directory")]
    UnsafePath(String),

    #[error("Failed to build archive '{}': {message}", path.display())]
    Archive { path: PathBuf, message: String },
}
