//! Group/version data model shared by the informer and lister generators

pub mod group_version;
pub mod package;

pub use group_version::{GroupVersion, ParseGroupVersionError};
pub use package::{join_package_path, GroupVersions, PackageVersion};
