//! Fixed identity of the launcher and the binary it dispatches to.

/// Name of the wrapped executable inside each platform package's `bin/`.
pub const TOOL_NAME: &str = "winload";

/// Name of the launcher package; platform packages are `<PACKAGE_NAME>-<os>-<arch>`.
pub const PACKAGE_NAME: &str = "winload-rust-bin";

/// Where users can fetch a binary by hand when no platform package fits.
pub const DOWNLOAD_URL: &str = "https://github.com/VincentZyuApps/winload/releases";

/// Arguments that make the launcher announce itself on stderr before spawning.
pub const INFO_FLAGS: [&str; 4] = ["--help", "-h", "--version", "-V"];

/// Launcher version embedded by `build.rs`.
pub const VERSION: &str = env!("WINLOAD_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_embedded() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_package_name_prefixes_tool_name() {
        assert!(PACKAGE_NAME.starts_with(TOOL_NAME));
    }
}
