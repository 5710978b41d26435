use super::manifest::Manifest;
use super::to_pretty_json;
use crate::config::NodeConfig;
use crate::naming::package_name_of;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

/// Tag every community node package must carry to be discoverable.
pub const COMMUNITY_PACKAGE_KEYWORD: &str = "n8n-community-node-package";
const AUTHOR_EMAIL_PLACEHOLDER: &str = "example@example.com";

/// The distributable `package.json`, fields in the order they are written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub license: String,
    pub homepage: String,
    pub author: Value,
    pub repository: Value,
    pub engines: Value,
    pub package_manager: String,
    pub main: String,
    pub scripts: Value,
    pub files: Vec<String>,
    /// Same value the standalone manifest renders.
    pub n8n: Manifest,
    pub dev_dependencies: Value,
    pub peer_dependencies: Value,
}

impl PackageDescriptor {
    pub fn from_config(config: &NodeConfig) -> Self {
        let metadata = &config.metadata;

        // The fixed tag is prepended as-is, even if the user listed it too.
        let keywords = std::iter::once(COMMUNITY_PACKAGE_KEYWORD.to_string())
            .chain(metadata.keywords.iter().cloned())
            .collect();

        Self {
            name: package_name_of(&config.name),
            version: config.version.clone(),
            description: config.description.clone(),
            keywords,
            license: metadata.license.clone(),
            homepage: metadata.repository.clone(),
            author: json!({
                "name": metadata.author,
                "email": AUTHOR_EMAIL_PLACEHOLDER,
            }),
            repository: json!({
                "type": "git",
                "url": metadata.repository,
            }),
            engines: json!({
                "node": ">=18.10",
                "pnpm": ">=9.1",
            }),
            package_manager: "pnpm@9.1.4".to_string(),
            main: "index.js".to_string(),
            scripts: json!({
                "build": "tsc && gulp build:icons",
                "dev": "tsc --watch",
                "format": "prettier nodes credentials --write",
                "lint": "eslint nodes credentials package.json",
                "lint:fix": "eslint nodes credentials package.json --fix",
                "prepack": "npm run build && npm run lint -c .eslintrc.prepack.js nodes credentials && npm run format",
            }),
            files: vec!["dist".to_string()],
            n8n: Manifest::from_config(config),
            dev_dependencies: json!({
                "@typescript-eslint/parser": "^7.15.0",
                "eslint": "^8.56.0",
                "eslint-plugin-n8n-nodes-base": "^1.16.1",
                "gulp": "^4.0.2",
                "n8n-workflow": "*",
                "prettier": "^3.3.2",
                "typescript": "^5.5.3",
            }),
            peer_dependencies: json!({
                "n8n-workflow": "*",
            }),
        }
    }
}

pub(super) fn generate(config: &NodeConfig) -> String {
    let descriptor = PackageDescriptor::from_config(config);
    debug!(
        package = %descriptor.name,
        keywords = descriptor.keywords.len(),
        "Generated package descriptor"
    );
    to_pretty_json(&descriptor)
}
