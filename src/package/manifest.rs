use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::runtime::Runtime;

/// The fields of a platform package's `package.json` the launcher reports on.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PackageManifest {
    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
