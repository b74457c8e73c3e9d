//! Package location module
//!
//! This module answers "where is npm package X installed, if at all?",
//! the one question the resolver asks of the host package manager.

mod locator;
mod manifest;

pub use locator::{NodeModulesLocator, PackageLocator};
pub use manifest::PackageManifest;

#[cfg(test)]
pub use locator::MockPackageLocator;
