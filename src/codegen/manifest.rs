use super::to_pretty_json;
use crate::config::NodeConfig;
use crate::naming::class_name_of;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The `n8n` section of a community node package: where the built files live.
///
/// This type is the single source of the manifest shape. The standalone
/// manifest and the copy nested in `package.json` are both rendered from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub nodes: Vec<String>,
    /// Omitted entirely, not `null`, when authentication is `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<String>>,
}

impl Manifest {
    pub fn from_config(config: &NodeConfig) -> Self {
        let class_name = class_name_of(&config.name);
        let nodes = vec![format!(
            "dist/nodes/{}/{}.node.js",
            config.name, class_name
        )];
        let credentials = config
            .authentication
            .is_configured()
            .then(|| vec![format!("dist/credentials/{class_name}Api.credentials.js")]);
        Self { nodes, credentials }
    }
}

pub(super) fn generate(config: &NodeConfig) -> String {
    let manifest = Manifest::from_config(config);
    debug!(
        node = %config.name,
        credentials = manifest.credentials.is_some(),
        "Generated node manifest"
    );
    to_pretty_json(&manifest)
}
