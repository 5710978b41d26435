//! # nodeforge - Node Package Code Generation Engine
//!
//! **nodeforge** turns a structured description of an API integration (its
//! resources, operations, authentication and metadata) into the source files
//! of an n8n community node package: the node implementation, the credential
//! type, the node manifest, `package.json` and a README.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the node**: Build a [`config::NodeConfig`], either in code, by
//!     applying [`config::ConfigEdit`]s, or by loading a JSON document.
//! 2.  **Preview**: Render any single artifact with the free functions in
//!     [`codegen`] or through [`preview::PreviewCache`].
//! 3.  **Export**: Assemble the full [`bundle::Bundle`] and hand it to a
//!     [`bundle::BundleSink`] that writes a directory or an archive.
//!
//! Generation is pure: the same document always yields the same text, and an
//! incomplete document still renders (with empty selectors and branches).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nodeforge::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut config = NodeConfig::default();
//!     config.apply(ConfigEdit::SetName("slack2".to_string()))?;
//!     config.apply(ConfigEdit::SetDisplayName("Slack 2".to_string()))?;
//!     config.apply(ConfigEdit::AddResource(Resource {
//!         id: "r1".to_string(),
//!         name: "Message".to_string(),
//!         value: "message".to_string(),
//!         description: "Chat messages".to_string(),
//!         operations: vec![Operation {
//!             name: "Send".to_string(),
//!             value: "send".to_string(),
//!             action: HttpMethod::Post,
//!             ..Default::default()
//!         }],
//!     }))?;
//!     config.apply(ConfigEdit::SetAuthType(AuthType::ApiKey))?;
//!
//!     // Preview a single artifact
//!     println!("{}", generate_node_file(&config));
//!
//!     // Export the whole package as a tarball
//!     let generator = CodeGenerator::builder()
//!         .with_dispatch(DispatchMode::Table)
//!         .build();
//!     let archive = generator.export(&config, &TarGzSink::new("out"))?;
//!     println!("Wrote {}", archive.display());
//!     Ok(())
//! }
//! ```

pub mod bundle;
pub mod codegen;
pub mod config;
pub mod error;
pub mod naming;
pub mod prelude;
pub mod preview;
