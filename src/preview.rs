//! Live preview of individual artifacts.
//!
//! Hosts re-render on every configuration change. Rendering is cheap and pure,
//! so [`render`] is enough; [`PreviewCache`] only skips work when the document
//! did not change between two calls.

use crate::codegen::CodeGenerator;
use crate::config::NodeConfig;
use ahash::{AHashMap, RandomState};
use std::fmt;
use tracing::trace;

/// The artifacts a preview can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Node,
    Credentials,
    Manifest,
    Package,
    Readme,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Node,
        ArtifactKind::Credentials,
        ArtifactKind::Manifest,
        ArtifactKind::Package,
        ArtifactKind::Readme,
    ];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Node => "node",
            ArtifactKind::Credentials => "credentials",
            ArtifactKind::Manifest => "manifest",
            ArtifactKind::Package => "package",
            ArtifactKind::Readme => "readme",
        };
        f.write_str(name)
    }
}

impl CodeGenerator {
    pub fn render(&self, kind: ArtifactKind, config: &NodeConfig) -> String {
        match kind {
            ArtifactKind::Node => self.node_file(config),
            ArtifactKind::Credentials => self.credentials_file(config),
            ArtifactKind::Manifest => self.manifest(config),
            ArtifactKind::Package => self.package_json(config),
            ArtifactKind::Readme => self.readme(config),
        }
    }
}

/// Renders one artifact with default generator options.
pub fn render(kind: ArtifactKind, config: &NodeConfig) -> String {
    CodeGenerator::default().render(kind, config)
}

// Fixed seeds so fingerprints agree between runs of one build.
const FINGERPRINT_SEEDS: (u64, u64, u64, u64) = (
    0x6e38_6e2d_6e6f_6465,
    0x666f_7267_6566_6f72,
    0x7072_6576_6965_7721,
    0x636f_6e66_6967_2e2e,
);

/// Content hash of a configuration document.
///
/// Only comparable between values produced by the same build.
///
/// Returns `None` if the document cannot be serialized, in which case callers
/// should not cache.
pub fn fingerprint(config: &NodeConfig) -> Option<u64> {
    let bytes = serde_json::to_vec(config).ok()?;
    let (k0, k1, k2, k3) = FINGERPRINT_SEEDS;
    Some(RandomState::with_seeds(k0, k1, k2, k3).hash_one(&bytes))
}

/// Memoizes rendered artifacts for the most recently seen document.
#[derive(Debug, Default)]
pub struct PreviewCache {
    generator: CodeGenerator,
    fingerprint: Option<u64>,
    rendered: AHashMap<ArtifactKind, String>,
}

impl PreviewCache {
    pub fn new(generator: CodeGenerator) -> Self {
        Self {
            generator,
            fingerprint: None,
            rendered: AHashMap::new(),
        }
    }

    /// Returns the artifact for `config`, rendering only when the document changed.
    pub fn get(&mut self, kind: ArtifactKind, config: &NodeConfig) -> &str {
        let current = fingerprint(config);
        if current.is_none() || current != self.fingerprint {
            trace!(?current, previous = ?self.fingerprint, "Config changed, clearing preview cache");
            self.rendered.clear();
            self.fingerprint = current;
        }
        let generator = &self.generator;
        self.rendered
            .entry(kind)
            .or_insert_with(|| generator.render(kind, config))
    }

    /// Number of artifacts currently held.
    pub fn cached(&self) -> usize {
        self.rendered.len()
    }
}
