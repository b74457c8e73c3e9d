//! Environment and process information.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::RealRuntime;
use crate::platform::HostPlatform;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn host_platform_impl(&self) -> HostPlatform {
        HostPlatform::detect()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_exe_impl(&self) -> Result<PathBuf> {
        env::current_exe().context("Failed to locate the running executable")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn current_dir_impl(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_real_runtime_env() {
        let runtime = RealRuntime;

        let platform = runtime.host_platform();
        assert!(!platform.key().is_empty());

        let exe = runtime.current_exe().unwrap();
        assert!(exe.is_absolute());

        let cwd = runtime.current_dir().unwrap();
        assert!(cwd.is_absolute());
    }
}
