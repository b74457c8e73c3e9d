//! Running the resolved binary in place of the launcher.
//!
//! The launcher has no options of its own. Every argument is forwarded as-is,
//! the child shares this process's standard streams, and its exit code
//! becomes ours.

use anyhow::Result;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

use crate::config::INFO_FLAGS;
use crate::package::{NodeModulesLocator, PackageLocator};
use crate::resolve::resolve_binary_path;
use crate::runtime::Runtime;

/// Exit status used when the child reports none (e.g. killed by a signal).
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// Resolve the binary for this machine, run it with `args` and return the
/// status the launcher should exit with.
pub fn run<R: Runtime, W: Write>(
    runtime: &R,
    args: &[OsString],
    diagnostics: &mut W,
) -> Result<i32> {
    let locator = NodeModulesLocator::from_current_exe(runtime);
    launch(runtime, &locator, args, diagnostics)
}

/// Same as [`run`] with an explicit package locator.
pub fn launch<R: Runtime, L: PackageLocator + ?Sized, W: Write>(
    runtime: &R,
    locator: &L,
    args: &[OsString],
    diagnostics: &mut W,
) -> Result<i32> {
    let host = runtime.host_platform();
    debug!("Platform key {}", host.key());
    let binary = resolve_binary_path(&host, locator)?;

    if wants_info(args) {
        if let Err(e) = write_info(diagnostics) {
            debug!("Failed to write launcher info: {}", e);
        }
    }

    let status = runtime.run_inherited(&binary, args)?;
    Ok(exit_code(status))
}

/// Whether any argument asks the wrapped tool for help or its version.
pub fn wants_info(args: &[OsString]) -> bool {
    args.iter()
        .filter_map(|arg| arg.to_str())
        .any(|arg| INFO_FLAGS.contains(&arg))
}

/// Tell the user this is the npm-installed native build, not a script.
pub fn write_info<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "ℹ️  This is the Rust binary edition (installed from npm)")?;
    writeln!(out)?;
    out.flush()
}

pub fn exit_code(status: Option<i32>) -> i32 {
    status.unwrap_or(FALLBACK_EXIT_CODE)
}
