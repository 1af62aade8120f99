//! pnpm-descendants - node_modules patterns from pnpm dependency trees
//!
//! This library reads a `pnpm-lock.yaml`, collects every package reachable
//! from a set of root packages, and turns the collected packages into one
//! regular expression over `node_modules` paths. Bundler configuration uses
//! these patterns, e.g. to place a dependency tree into its own chunk.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`descendant_selection`): lockfile snapshot, root
//!   resolution, descendant collection and pattern building
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pnpm_descendants::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let snapshot = FileSystemReader::new().read_lockfile(Path::new("."))?;
//!
//! // Packages claimed by "react" are not repeated for "react-dom"
//! let mut collector = DescendantCollector::new(&snapshot);
//! let react = collector.create_descendant_pattern(&["react"])?;
//! let react_dom = collector.create_descendant_pattern(&["react-dom"])?;
//!
//! let test = make_test::<ModuleInfo>([react.into_regex()]);
//! assert!(test(&ModuleInfo::new("/app/node_modules/react/index.js")));
//! # let _ = react_dom;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod descendant_selection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::pnpm::PnpmLockfileParser;
    pub use crate::application::dto::{GroupSpec, PatternRequest, PatternResponse};
    pub use crate::application::use_cases::BuildPatternsUseCase;
    pub use crate::descendant_selection::domain::{
        CollectedSet, DescendantPattern, LockfileSnapshot, ModuleDescriptor, ModuleInfo,
        PackageKey,
    };
    pub use crate::descendant_selection::services::{
        make_test, DescendantCollector, ModuleTest, PatternBuilder, RootResolver,
    };
    pub use crate::ports::outbound::{
        LockfileReader, OutputPresenter, PatternFormatter, ProgressReporter,
    };
    pub use crate::shared::error::DescendantError;
    pub use crate::shared::Result;
}
