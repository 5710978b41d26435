use super::Bundle;
use crate::error::ExportError;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Receives a finished bundle and turns it into something a user can take away.
pub trait BundleSink {
    /// Writes the bundle and returns where it ended up.
    fn write(&self, bundle: &Bundle) -> Result<PathBuf, ExportError>;
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ExportError + '_ {
    move |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Rejects entry paths that are absolute or climb out of the sink root.
fn ensure_relative(relative: &str) -> Result<(), ExportError> {
    let escapes = Path::new(relative).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(ExportError::UnsafePath(relative.to_string()));
    }
    Ok(())
}

/// Writes every entry as a file below `root`, creating directories as needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl BundleSink for DirectorySink {
    fn write(&self, bundle: &Bundle) -> Result<PathBuf, ExportError> {
        for (relative, _) in bundle.iter() {
            ensure_relative(relative)?;
        }
        for (relative, content) in bundle.iter() {
            let path = self.root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(io_error(parent))?;
            }
            fs::write(&path, content).map_err(io_error(&path))?;
            debug!(path = %path.display(), bytes = content.len(), "Wrote bundle file");
        }
        Ok(self.root.clone())
    }
}

/// Writes `<stem>.tar.gz` into `dir`, with every entry under a `<stem>/` prefix.
#[derive(Debug, Clone)]
pub struct TarGzSink {
    dir: PathBuf,
}

impl TarGzSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn archive_path(&self, bundle: &Bundle) -> PathBuf {
        self.dir.join(format!("{}.tar.gz", bundle.stem()))
    }
}

impl BundleSink for TarGzSink {
    fn write(&self, bundle: &Bundle) -> Result<PathBuf, ExportError> {
        let archive_path = self.archive_path(bundle);
        fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;
        let file = fs::File::create(&archive_path).map_err(io_error(&archive_path))?;

        let archive_err = |e: std::io::Error| ExportError::Archive {
            path: archive_path.clone(),
            message: e.to_string(),
        };

        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        for (relative, content) in bundle.iter() {
            let mut header = tar::Header::new_gnu();
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_mtime(0);
            builder
                .append_data(
                    &mut header,
                    format!("{}/{}", bundle.stem(), relative),
                    content.as_bytes(),
                )
                .map_err(archive_err)?;
        }
        builder
            .into_inner()
            .and_then(|encoder| encoder.finish())
            .map_err(archive_err)?;

        debug!(path = %archive_path.display(), entries = bundle.len(), "Wrote bundle archive");
        Ok(archive_path)
    }
}
