/// Domain layer - lockfile graph, descendant traversal and module predicates
///
/// Pure logic: no file system, no console. Adapters feed it a
/// [`domain::LockfileSnapshot`] and render what it returns.
pub mod domain;
pub mod services;
