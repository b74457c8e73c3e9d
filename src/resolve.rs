//! Mapping the running platform to the executable that should be launched.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::{DOWNLOAD_URL, PACKAGE_NAME, TOOL_NAME};
use crate::package::PackageLocator;
use crate::platform::{HostPlatform, Target};

/// Why no executable could be found for this machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error(
        "{tool}: unsupported platform \"{key}\"\nSupported: {supported}\nDownload manually: {url}",
        tool = TOOL_NAME,
        supported = Target::supported_keys(),
        url = DOWNLOAD_URL
    )]
    UnsupportedPlatform { key: String },

    #[error(
        "{tool}: platform package \"{package}\" not found\nTry reinstalling: npm install {launcher}\nOr download manually: {url}",
        tool = TOOL_NAME,
        launcher = PACKAGE_NAME,
        url = DOWNLOAD_URL
    )]
    PackageNotFound { package: String },
}

/// Locate the prebuilt executable for `host`.
///
/// The returned path is not checked for existence; a missing or
/// non-executable file surfaces when it is spawned.
#[tracing::instrument(skip(locator))]
pub fn resolve_binary_path<L: PackageLocator + ?Sized>(
    host: &HostPlatform,
    locator: &L,
) -> Result<PathBuf, ResolveError> {
    let key = host.key();
    let target = Target::from_key(&key).ok_or(ResolveError::UnsupportedPlatform { key })?;
    let package = target.package_name();

    let root = locator
        .locate(package)
        .ok_or_else(|| ResolveError::PackageNotFound {
            package: package.to_string(),
        })?;
    debug!("{} is installed at {}", package, root.display());

    let path = binary_path(&root, target);
    debug!("Resolved binary {}", path.display());
    Ok(path)
}

/// `<package_root>/bin/winload`, with `.exe` for Windows targets.
pub fn binary_path(package_root: &Path, target: Target) -> PathBuf {
    let file_name = if target.is_windows() {
        format!("{TOOL_NAME}.exe")
    } else {
        TOOL_NAME.to_string()
    };
    package_root.join("bin").join(file_name)
}
