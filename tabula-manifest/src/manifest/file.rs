use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Result};

/// Represents a tabula.toml file with both raw content and parsed manifest.
pub struct TabulaToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TabulaToml {
    /// Open and parse a tabula.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    /// Resolve a manifest path against [`base_dir`](Self::base_dir).
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir().join(path)
    }

    /// Resolved location of the schema document.
    pub fn schema_path(&self) -> PathBuf {
        self.resolve(&self.manifest.generator.schema)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.generator.output)
    }
}
