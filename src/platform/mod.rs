//! Platform detection and the fixed platform-to-package map
//!
//! `HostPlatform` reports what the process is running on, spelled the way
//! npm spells `process.platform` and `process.arch`. `Target` enumerates the
//! combinations that have a prebuilt package.

mod host;
mod target;

pub use host::HostPlatform;
pub use target::Target;
