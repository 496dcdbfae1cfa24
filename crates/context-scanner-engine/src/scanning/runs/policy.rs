use std::collections::HashMap;

/// How the body of a command's `{...}` argument is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterPolicy {
    /// Nested commands and comments are recognised inside the braces.
    #[default]
    Structured,
    /// The body is literal text, emitted as a single `PlainText` run.
    Verbatim,
}

/// Commands whose argument is verbatim out of the box.
pub const DEFAULT_VERBATIM: &[&str] = &["type", "typ", "tex"];

/// Lookup table from command name (without the backslash) to its
/// [`ParameterPolicy`]. Names not in the table are [`ParameterPolicy::Structured`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbatimPolicy {
    table: HashMap<String, ParameterPolicy>,
}

impl VerbatimPolicy {
    /// A table with no verbatim commands at all.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with_verbatim<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut policy = Self::empty();
        policy.extend_verbatim(names);
        policy
    }

    pub fn extend_verbatim<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.insert(name, ParameterPolicy::Verbatim);
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, policy: ParameterPolicy) {
        self.table.insert(name.into(), policy);
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterPolicy> {
        self.table.remove(name)
    }

    pub fn policy_for(&self, name: &str) -> ParameterPolicy {
        self.table.get(name).copied().unwrap_or_default()
    }

    pub fn is_verbatim(&self, name: &str) -> bool {
        self.policy_for(name) == ParameterPolicy::Verbatim
    }
}

impl Default for VerbatimPolicy {
    fn default() -> Self {
        Self::with_verbatim(DEFAULT_VERBATIM.iter().copied())
    }
}
