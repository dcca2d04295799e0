mod snapshot;
mod types;

pub use snapshot::{InstalledPackage, InstalledSnapshot, RootPackage};
pub use types::PackageType;
