pub mod collected_set;
pub mod descendant_pattern;
pub mod lockfile_snapshot;
pub mod module_descriptor;
pub mod package_key;

pub use collected_set::CollectedSet;
pub use descendant_pattern::DescendantPattern;
pub use lockfile_snapshot::{Dependency, LockfileSnapshot, SnapshotEntry};
pub use module_descriptor::{ModuleDescriptor, ModuleInfo};
pub use package_key::PackageKey;
