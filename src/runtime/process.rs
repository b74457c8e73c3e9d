//! Child process execution.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_inherited_impl(
        &self,
        program: &Path,
        args: &[OsString],
    ) -> Result<Option<i32>> {
        // No creation flags on Windows, so the child shares the parent's console.
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        debug!("{} exited with {}", program.display(), status);
        Ok(status.code())
    }
}
