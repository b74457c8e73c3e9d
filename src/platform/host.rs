/// Operating system and CPU architecture of the running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    pub os: String,
    pub arch: String,
}

impl HostPlatform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Detect the current platform
    pub fn detect() -> Self {
        Self::from_rust(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate Rust's target identifiers into npm's vocabulary.
    ///
    /// Identifiers without an npm counterpart are kept verbatim.
    pub fn from_rust(os: &str, arch: &str) -> Self {
        let os = match os {
            "windows" => "win32",
            "macos" => "darwin",
            other => other,
        };
        let arch = match arch {
            "x86_64" => "x64",
            "aarch64" => "arm64",
            "x86" => "ia32",
            other => other,
        };
        Self::new(os, arch)
    }

    /// Platform key, e.g. `linux-x64`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.os, self.arch)
    }
}
