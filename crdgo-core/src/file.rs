use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfChanged => {
            // Leaving identical files untouched keeps mtimes stable for build caches.
            match std::fs::read_to_string(path) {
                Ok(existing) if existing == content => Ok(WriteResult::Unchanged),
                _ => {
                    write_file(path, content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}

/// A rendered file held in memory
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: write if changed)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Override the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, &self.content, &self.rules)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Always rewrite the file
    Always,
    /// Rewrite only when the rendered content differs
    #[default]
    IfChanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pkg").join("crds").join("zz.generated.crds.go");

        write_file(&path, "package crds\n").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "package crds\n");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.go");

        let file = File::new(&path, "package a\n");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_rewrites_different() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.go");
        fs::write(&path, "package old\n").unwrap();

        let result = File::new(&path, "package new\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package new\n");
    }

    #[test]
    fn test_file_write_always() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.go");
        fs::write(&path, "package a\n").unwrap();

        let file = File::new(&path, "package a\n").with_rules(FileRules {
            overwrite: Overwrite::Always,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Written);
    }
}
