use crate::descendant_selection::domain::{LockfileSnapshot, PackageKey};
use crate::shared::error::DescendantError;
use crate::shared::Result;

/// RootResolver service mapping a requested package name to its snapshot key
///
/// Pure lookup over a [`LockfileSnapshot`]; never mutates it.
pub struct RootResolver;

impl RootResolver {
    /// Resolves `name` to exactly one package key
    ///
    /// # Arguments
    /// * `snapshot` - The lockfile index to search
    /// * `name` - Bare name (`react`, `@scope/pkg`) or version-qualified name (`react@18.2.0`)
    ///
    /// # Errors
    /// - `PackageNotFound` if no key matches
    /// - `AmbiguousPackage` if several keys match; the error lists all of them
    pub fn resolve<'a>(snapshot: &'a LockfileSnapshot, name: &str) -> Result<&'a PackageKey> {
        if let Some(entry) = snapshot.get(name) {
            return Ok(entry.key());
        }

        let matches: Vec<&PackageKey> = snapshot
            .keys()
            .filter(|key| key.is_candidate_for(name))
            .collect();

        match matches.as_slice() {
            [] => Err(DescendantError::PackageNotFound {
                name: name.to_string(),
            }
            .into()),
            [only] => Ok(*only),
            _ => Err(DescendantError::AmbiguousPackage {
                name: name.to_string(),
                matches: matches.iter().map(|k| k.to_string()).collect(),
            }
            .into()),
        }
    }
}
