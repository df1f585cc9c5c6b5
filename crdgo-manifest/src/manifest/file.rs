use std::path::{Path, PathBuf};

use super::Manifest;
use crate::Result;

/// Represents a crdgo.toml file with both raw content and parsed manifest.
pub struct CrdgoToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl CrdgoToml {
    /// Open and parse a crdgo.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
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

    /// Directory containing the file; relative manifest paths are resolved against it.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Take the manifest with every relative path resolved against [`base_dir`](Self::base_dir).
    pub fn into_manifest(self) -> Manifest {
        let base = self.base_dir().to_path_buf();
        self.manifest.rebase(&base)
    }
}
