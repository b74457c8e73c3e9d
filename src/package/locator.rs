use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::PackageManifest;
use crate::runtime::Runtime;

/// Finds the installation root of a package by name.
#[cfg_attr(test, mockall::automock)]
pub trait PackageLocator {
    /// Returns the directory holding the package's `package.json`, or
    /// `None` if the package is not installed.
    fn locate(&self, package: &str) -> Option<PathBuf>;
}

/// Looks packages up the way Node's `require.resolve` does: in the
/// `node_modules` directory of the start directory and of each ancestor.
pub struct NodeModulesLocator<'a, R: Runtime> {
    runtime: &'a R,
    start: PathBuf,
}

impl<'a, R: Runtime> NodeModulesLocator<'a, R> {
    pub fn new(runtime: &'a R, start: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            start: start.into(),
        }
    }

    /// Search upward from the directory of the running executable.
    ///
    /// Symlinks are resolved first, so a launcher started through
    /// `node_modules/.bin` searches from its real install location. Falls back
    /// to the working directory when the executable cannot be determined.
    pub fn from_current_exe(runtime: &'a R) -> Self {
        let exe_dir = match runtime.current_exe() {
            Ok(exe) => {
                let exe = runtime.canonicalize(&exe).unwrap_or(exe);
                exe.parent().map(Path::to_path_buf)
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        };

        let start = exe_dir
            .or_else(|| runtime.current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(runtime, start)
    }

    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Candidate package roots, nearest first.
    fn candidates<'p>(&'p self, package: &'p str) -> impl Iterator<Item = PathBuf> + 'p {
        self.start
            .ancestors()
            .filter(|dir| dir.file_name().is_none_or(|name| name != "node_modules"))
            .map(move |dir| dir.join("node_modules").join(package))
    }

    fn inspect_manifest(&self, package: &str, path: &Path) {
        match PackageManifest::load(self.runtime, path) {
            Ok(manifest) => {
                if manifest.name.as_deref().is_some_and(|name| name != package) {
                    warn!(
                        "{} declares name {:?}, expected {:?}",
                        path.display(),
                        manifest.name.unwrap_or_default(),
                        package
                    );
                } else {
                    debug!(
                        "Found {} {}",
                        package,
                        manifest.version.as_deref().unwrap_or("(no version)")
                    );
                }
            }
            Err(e) => warn!("{:#}", e),
        }
    }
}

impl<R: Runtime> PackageLocator for NodeModulesLocator<'_, R> {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        for root in self.candidates(package) {
            let manifest = root.join("package.json");
            debug!("Probing {}", manifest.display());
            if self.runtime.is_file(&manifest) {
                self.inspect_manifest(package, &manifest);
                return Some(root);
            }
        }
        debug!("{} not found above {}", package, self.start.display());
        None
    }
}
