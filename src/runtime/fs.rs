//! File system queries used while locating packages.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn canonicalize_impl(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path)
            .with_context(|| format!("Failed to canonicalize {}", path.display()))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_file_impl(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context("Failed to read file to string")
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_fs() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file = dir.path().join("package.json");

        assert!(!runtime.is_file(&file));
        assert!(runtime.read_to_string(&file).is_err());

        std::fs::write(&file, r#"{"name":"x"}"#).unwrap();
        assert!(runtime.is_file(&file));
        assert!(!runtime.is_file(dir.path()));
        assert_eq!(runtime.read_to_string(&file).unwrap(), r#"{"name":"x"}"#);

        let canonical = runtime.canonicalize(&file).unwrap();
        assert!(canonical.is_absolute());
        assert!(canonical.ends_with("package.json"));
    }

    #[test]
    fn test_canonicalize_missing_path_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        assert!(runtime.canonicalize(&dir.path().join("missing")).is_err());
    }
}
