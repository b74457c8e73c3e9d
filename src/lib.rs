pub mod config;
pub mod launch;
pub mod package;
pub mod platform;
pub mod resolve;
pub mod runtime;

/// Test utilities for cross-platform path handling.
#[cfg(test)]
pub mod test_utils {
    use std::path::PathBuf;

    /// Returns a project directory that npm installed into.
    /// - Unix: `/home/user/project`
    /// - Windows: `C:\Users\user\project`
    pub fn test_project() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user/project")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user\project")
        }
    }
}
