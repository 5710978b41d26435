//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! nodeforge crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nodeforge::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = NodeConfig::from_file("path/to/node.json")?;
//! if let Err(issues) = config.validate() {
//!     for issue in issues {
//!         eprintln!("{}", issue);
//!     }
//! }
//!
//! let bundle = assemble(&config);
//! for path in bundle.paths() {
//!     println!("{}", path);
//! }
//! export(&config, &DirectorySink::new("path/to/output"))?;
//! # Ok(())
//! # }
//! ```

// Configuration model
pub use crate::config::{
    AuthConfig, AuthType, ConfigEdit, FieldOption, FieldType, HttpMethod, Metadata, NodeConfig,
    NodeField, Operation, Resource, ResourcePatch, Routing, RoutingRequest,
};

// Generators
pub use crate::codegen::{
    CodeGenerator, DispatchMode, GeneratorOptions, Manifest, generate_credentials_file,
    generate_manifest, generate_node_file, generate_package_json, generate_readme,
};

// Bundling and export
pub use crate::bundle::{Bundle, BundleSink, DirectorySink, TarGzSink, assemble, export};

// Preview
pub use crate::preview::{ArtifactKind, PreviewCache};

// Naming helpers
pub use crate::naming::{class_name_of, field_identifier_of, package_name_of, quote};

// Error types
pub use crate::error::{ConfigError, ExportError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
