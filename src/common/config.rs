//! Configuration for the tree validator.

/// Default bound on how many tree levels the validator will recurse into.
///
/// A B-tree with a fan-out of only 2 and 1024 levels would already hold
/// more keys than fit in memory, so real trees never get close. The bound
/// exists to turn a malformed, pathologically deep tree into an
/// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) instead
/// of a stack overflow.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Settings for a [`Validator`](crate::Validator).
///
/// # Example
/// ```
/// use btreecheck::ValidatorConfig;
///
/// let config = ValidatorConfig::default().with_max_depth(16);
/// assert_eq!(config.max_depth(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    max_depth: usize,
}

impl ValidatorConfig {
    /// Create a config with the given depth limit.
    ///
    /// The root always counts as one level, so a limit of 0 is raised to 1.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    /// Return a copy with a different depth limit.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self::new(max_depth)
    }

    /// Maximum number of tree levels (root included) that will be checked.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
