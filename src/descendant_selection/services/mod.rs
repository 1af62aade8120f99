mod descendant_collector;
mod pattern_builder;
mod root_resolver;

pub use descendant_collector::DescendantCollector;
pub use module_test::{make_test, ModuleTest};
pub use pattern_builder::PatternBuilder;
pub use root_resolver::RootResolver;
