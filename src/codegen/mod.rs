//! Artifact generators.
//!
//! Every generator is a pure function of a [`NodeConfig`]: the same document
//! always renders to the same text. The free functions use the default
//! [`GeneratorOptions`]; a [`CodeGenerator`] carries custom ones.

use crate::config::NodeConfig;
use serde::Serialize;
use tracing::error;

mod credentials;
mod manifest;
mod node;
mod package;
mod readme;
mod writer;

pub use credentials::NO_CREDENTIALS_COMMENT;
pub use manifest::Manifest;
pub use package::PackageDescriptor;

pub(crate) use writer::SourceWriter;

/// How the generated `execute` routine picks the request for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Only the first operation of the first resource is wired to a request,
    /// and the Operation selector lists that resource's operations.
    #[default]
    FirstOperation,
    /// Every (resource, operation) pair is dispatched through a lookup table
    /// keyed `"<resource>:<operation>"`, with one Operation selector per resource.
    Table,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
    pub dispatch: DispatchMode,
}

/// Renders every artifact of a node package with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    options: GeneratorOptions,
}

pub struct CodeGeneratorBuilder {
    options: GeneratorOptions,
}

impl CodeGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.options.dispatch = dispatch;
        self
    }

    pub fn build(self) -> CodeGenerator {
        CodeGenerator {
            options: self.options,
        }
    }
}

impl Default for CodeGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator {
    pub fn builder() -> CodeGeneratorBuilder {
        CodeGeneratorBuilder::new()
    }

    pub fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// The TypeScript node implementation (`<ClassName>.node.ts`).
    pub fn node_file(&self, config: &NodeConfig) -> String {
        node::generate(config, &self.options)
    }

    /// The credential type file, or a one-line comment when no authentication is configured.
    pub fn credentials_file(&self, config: &NodeConfig) -> String {
        credentials::generate(config)
    }

    /// The `n8n` manifest listing the built node and credential files.
    pub fn manifest(&self, config: &NodeConfig) -> String {
        manifest::generate(config)
    }

    pub fn package_json(&self, config: &NodeConfig) -> String {
        package::generate(config)
    }

    pub fn readme(&self, config: &NodeConfig) -> String {
        readme::generate(config)
    }
}

pub fn generate_node_file(config: &NodeConfig) -> String {
    node::generate(config, &GeneratorOptions::default())
}

pub fn generate_credentials_file(config: &NodeConfig) -> String {
    credentials::generate(config)
}

pub fn generate_manifest(config: &NodeConfig) -> String {
    manifest::generate(config)
}

pub fn generate_package_json(config: &NodeConfig) -> String {
    package::generate(config)
}

pub fn generate_readme(config: &NodeConfig) -> String {
    readme::generate(config)
}

/// Two-space indented JSON, the layout used for every JSON artifact.
///
/// Generation is best effort: a value that cannot be serialized renders as an
/// empty string and is logged.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        error!(error = %e, "Failed to serialize artifact JSON");
        String::new()
    })
}
