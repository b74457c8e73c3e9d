use std::fmt;

/// A platform for which a prebuilt package is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Win32X64,
    Win32Arm64,
    LinuxX64,
    LinuxArm64,
    DarwinX64,
    DarwinArm64,
}

impl Target {
    /// Every supported target, in the order they are reported to users.
    pub const ALL: [Target; 6] = [
        Target::Win32X64,
        Target::Win32Arm64,
        Target::LinuxX64,
        Target::LinuxArm64,
        Target::DarwinX64,
        Target::DarwinArm64,
    ];

    pub const fn key(&self) -> &'static str {
        match self {
            Target::Win32X64 => "win32-x64",
            Target::Win32Arm64 => "win32-arm64",
            Target::LinuxX64 => "linux-x64",
            Target::LinuxArm64 => "linux-arm64",
            Target::DarwinX64 => "darwin-x64",
            Target::DarwinArm64 => "darwin-arm64",
        }
    }

    /// Name of the npm package that carries the binary for this target.
    pub const fn package_name(&self) -> &'static str {
        match self {
            Target::Win32X64 => "winload-rust-bin-win32-x64",
            Target::Win32Arm64 => "winload-rust-bin-win32-arm64",
            Target::LinuxX64 => "winload-rust-bin-linux-x64",
            Target::LinuxArm64 => "winload-rust-bin-linux-arm64",
            Target::DarwinX64 => "winload-rust-bin-darwin-x64",
            Target::DarwinArm64 => "winload-rust-bin-darwin-arm64",
        }
    }

    pub const fn is_windows(&self) -> bool {
        matches!(self, Target::Win32X64 | Target::Win32Arm64)
    }

    /// Exact, case-sensitive lookup of a platform key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Comma-separated list of all supported keys.
    pub fn supported_keys() -> String {
        Self::ALL
            .iter()
            .map(Target::key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
