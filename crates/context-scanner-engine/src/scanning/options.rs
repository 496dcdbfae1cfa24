use super::runs::VerbatimPolicy;

/// How deep commands nested inside arguments are followed before their own
/// arguments are left to the enclosing group.
pub const DEFAULT_MAX_NESTING: usize = 128;

/// Knobs for the run classifier. The outline scanner needs none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Which commands take a verbatim `{...}` argument.
    pub verbatim: VerbatimPolicy,
    /// Maximum nesting of commands inside arguments that is descended into.
    pub max_nesting: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            verbatim: VerbatimPolicy::default(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}
