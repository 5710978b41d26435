//! Bundle assembly: the complete path to content mapping of a node package.
//!
//! Paths depend only on the node `name` and its class-cased form. A bundle is
//! handed unchanged to a [`BundleSink`], which owns archive construction.

use crate::codegen::{CodeGenerator, to_pretty_json};
use crate::config::NodeConfig;
use crate::error::ExportError;
use crate::naming::{class_name_of, package_name_of};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

mod sink;

pub use sink::{BundleSink, DirectorySink, TarGzSink};

pub const PACKAGE_JSON_PATH: &str = "package.json";
pub const README_PATH: &str = "README.md";
pub const TSCONFIG_PATH: &str = "tsconfig.json";
pub const GULPFILE_PATH: &str = "gulpfile.js";

const GULPFILE: &str = "const { task, src, dest } = require('gulp');

task('build:icons', () => {
  return src('nodes/**/*.svg').pipe(dest('dist/nodes'));
});
";

pub fn node_file_path(config: &NodeConfig) -> String {
    format!("nodes/{}/{}.node.ts", config.name, class_name_of(&config.name))
}

pub fn node_manifest_path(config: &NodeConfig) -> String {
    format!("nodes/{}/{}.node.json", config.name, class_name_of(&config.name))
}

pub fn credentials_file_path(config: &NodeConfig) -> String {
    format!("credentials/{}Api.credentials.ts", class_name_of(&config.name))
}

/// Base name (without extension) used for archives of this package.
pub fn archive_stem(config: &NodeConfig) -> String {
    package_name_of(&config.name)
}

fn tsconfig() -> String {
    to_pretty_json(&json!({
        "extends": "n8n-workflow/tsconfig.json",
        "compilerOptions": {
            "outDir": "dist",
        },
        "include": ["nodes/**/*", "credentials/**/*"],
    }))
}

/// Generated files keyed by their path relative to the package root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bundle {
    stem: String,
    files: BTreeMap<String, String>,
}

impl Bundle {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            files: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The package name the bundle was assembled for, e.g. `n8n-nodes-slack`.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn into_files(self) -> BTreeMap<String, String> {
        self.files
    }
}

impl CodeGenerator {
    /// Renders every artifact of the package and lays them out by path.
    pub fn bundle(&self, config: &NodeConfig) -> Bundle {
        let mut bundle = Bundle::new(archive_stem(config));
        bundle.insert(node_file_path(config), self.node_file(config));
        bundle.insert(node_manifest_path(config), self.manifest(config));
        if config.authentication.is_configured() {
            bundle.insert(credentials_file_path(config), self.credentials_file(config));
        }
        bundle.insert(PACKAGE_JSON_PATH, self.package_json(config));
        bundle.insert(README_PATH, self.readme(config));
        bundle.insert(TSCONFIG_PATH, tsconfig());
        bundle.insert(GULPFILE_PATH, GULPFILE);

        debug!(
            package = %bundle.stem(),
            files = ?bundle.paths().collect::<Vec<_>>(),
            "Assembled bundle"
        );
        bundle
    }

    /// Assembles the bundle and hands it to `sink`.
    ///
    /// A node without a name has no meaningful bundle and is reported as
    /// [`ExportError::NothingToExport`], distinct from sink failures.
    pub fn export(
        &self,
        config: &NodeConfig,
        sink: &dyn BundleSink,
    ) -> Result<PathBuf, ExportError> {
        if config.name.trim().is_empty() {
            return Err(ExportError::NothingToExport);
        }
        let bundle = self.bundle(config);
        let location = sink.write(&bundle)?;
        info!(
            package = %bundle.stem(),
            files = bundle.len(),
            location = %location.display(),
            "Exported node package"
        );
        Ok(location)
    }
}

/// Assembles the bundle with default generator options.
pub fn assemble(config: &NodeConfig) -> Bundle {
    CodeGenerator::default().bundle(config)
}

/// Assembles with default generator options and hands the bundle to `sink`.
pub fn export(config: &NodeConfig, sink: &dyn BundleSink) -> Result<PathBuf, ExportError> {
    CodeGenerator::default().export(config, sink)
}
