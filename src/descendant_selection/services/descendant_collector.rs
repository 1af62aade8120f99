use super::{PatternBuilder, RootResolver};
use crate::descendant_selection::domain::{
    CollectedSet, DescendantPattern, LockfileSnapshot, PackageKey,
};
use crate::shared::error::DescendantError;
use crate::shared::Result;

/// DescendantCollector - a traversal session over one lockfile snapshot
///
/// Every package emitted by [`collect_descendants`](Self::collect_descendants)
/// is remembered for the lifetime of the session. A later call whose
/// descendants overlap an earlier one only returns the packages not yet
/// claimed. This is what lets consecutive bundler cache groups split
/// `node_modules` without overlap: the first group to reach a package owns it.
///
/// The session is not shared: independent evaluations use independent
/// collectors.
#[derive(Debug)]
pub struct DescendantCollector<'a> {
    snapshot: &'a LockfileSnapshot,
    collected: CollectedSet,
}

/// Pending visit: the key and the key that referenced it (None for roots)
type Visit<'a> = (PackageKey, Option<&'a PackageKey>);

impl<'a> DescendantCollector<'a> {
    pub fn new(snapshot: &'a LockfileSnapshot) -> Self {
        Self {
            snapshot,
            collected: CollectedSet::new(),
        }
    }

    /// Collects the packages reachable from `names` that this session has not seen yet
    ///
    /// Roots are resolved up front, so an unknown or ambiguous name fails
    /// before anything is collected. Traversal is depth-first pre-order:
    /// parents before children, dependencies in declared order, roots left
    /// to right.
    ///
    /// # Errors
    /// - `PackageNotFound` / `AmbiguousPackage` from root resolution
    /// - `MissingDependencyRecord` if a dependency has no snapshot entry
    pub fn collect_descendants<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Vec<PackageKey>> {
        let roots = names
            .iter()
            .map(|name| RootResolver::resolve(self.snapshot, name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut list = Vec::new();
        for root in roots {
            self.visit(root.clone(), &mut list)?;
        }
        Ok(list)
    }

    /// Collects descendants of `names` and builds their `node_modules` pattern
    pub fn create_descendant_pattern<S: AsRef<str>>(
        &mut self,
        names: &[S],
    ) -> Result<DescendantPattern> {
        let keys = self.collect_descendants(names)?;
        PatternBuilder::build(&keys)
    }

    /// Packages claimed so far by this session
    pub fn collected(&self) -> &CollectedSet {
        &self.collected
    }

    /// Iterative pre-order walk from `root`.
    ///
    /// Children are pushed in reverse so they pop in declared order, and the
    /// collected check happens at pop time, which yields the same order as
    /// the recursive formulation without bounding the depth of the graph.
    fn visit(&mut self, root: PackageKey, list: &mut Vec<PackageKey>) -> Result<()> {
        let snapshot = self.snapshot;
        let mut stack: Vec<Visit<'a>> = vec![(root, None)];

        while let Some((key, parent)) = stack.pop() {
            if self.collected.contains(key.as_str()) {
                continue;
            }
            self.collected.insert(key.clone());
            list.push(key.clone());

            let entry = snapshot.get(key.as_str()).ok_or_else(|| {
                DescendantError::MissingDependencyRecord {
                    key: key.to_string(),
                    parent: parent.map(ToString::to_string).unwrap_or_default(),
                }
            })?;

            for dependency in entry.dependencies().iter().rev() {
                stack.push((dependency.key()?, Some(entry.key())));
            }
        }

        Ok(())
    }
}
