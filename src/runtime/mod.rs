//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Host platform and process location
//! - `fs` - Read-only file system queries
//! - `process` - Child process spawning with inherited stdio

mod env;
mod fs;
mod process;

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::platform::HostPlatform;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn host_platform(&self) -> HostPlatform;
    fn current_exe(&self) -> Result<PathBuf>;
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
    fn is_file(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Result<String>;

    // Process
    /// Run `program` with `args`, sharing this process's stdin, stdout and
    /// stderr, and block until it terminates.
    ///
    /// Returns the exit code, or `None` if the child was terminated by a signal.
    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn host_platform(&self) -> HostPlatform {
        self.host_platform_impl()
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>> {
        self.run_inherited_impl(program, args)
    }
}
