/// What a bundler exposes about one of its modules.
///
/// Only two capabilities are required: an optional name used for condition
/// matching (usually the resource path) and the raw module identifier.
pub trait ModuleDescriptor {
    /// Name used for condition matching, if the module has one
    fn name_for_condition(&self) -> Option<&str>;

    /// Raw module identifier
    fn identifier(&self) -> &str;

    /// Identifier that patterns are tested against.
    ///
    /// An absent or empty condition name falls back to [`Self::identifier`].
    fn display_name(&self) -> &str {
        match self.name_for_condition() {
            Some(name) if !name.is_empty() => name,
            _ => self.identifier(),
        }
    }
}

/// Plain owned module description, e.g. built from a path given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    identifier: String,
    name_for_condition: Option<String>,
}

impl ModuleInfo {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name_for_condition: None,
        }
    }

    pub fn with_name_for_condition(mut self, name: impl Into<String>) -> Self {
        self.name_for_condition = Some(name.into());
        self
    }
}

impl ModuleDescriptor for ModuleInfo {
    fn name_for_condition(&self) -> Option<&str> {
        self.name_for_condition.as_deref()
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl ModuleDescriptor for str {
    fn name_for_condition(&self) -> Option<&str> {
        None
    }

    fn identifier(&self) -> &str {
        self
    }
}
