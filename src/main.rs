use anyhow::Result;
use std::ffi::OsString;
use winload_rust_bin::config;
use winload_rust_bin::launch;
use winload_rust_bin::runtime::RealRuntime;

/// winload - npm launcher for the native winload binary
///
/// Finds the platform package npm installed next to this launcher
/// (winload-rust-bin-<os>-<arch>) and runs its `bin/winload` with every
/// argument passed through untouched. The launcher has no options of its own.
///
/// Set RUST_LOG=debug to see how the binary was located.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("{} {}", config::PACKAGE_NAME, config::VERSION);

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let runtime = RealRuntime;

    let code = launch::run(&runtime, &args, &mut std::io::stderr())?;
    std::process::exit(code);
}
