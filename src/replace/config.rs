//! Configuration options for replacement runs

/// An ordered (search, replacement) pair of literal substrings.
///
/// The search text must be non-empty; the replacement text may be empty,
/// meaning "delete all occurrences".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePair {
    old: String,
    new: String,
}

impl ReplacePair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Result<Self, String> {
        let old = old.into();
        if old.is_empty() {
            return Err("Search text must not be empty".to_string());
        }
        Ok(Self {
            old,
            new: new.into(),
        })
    }

    /// The literal text to search for
    pub fn old(&self) -> &str {
        &self.old
    }

    /// The literal replacement text
    pub fn new_text(&self) -> &str {
        &self.new
    }

    /// True when a second run cannot find anything left to replace: the
    /// replacement text does not reintroduce the search text.
    pub fn is_stable(&self) -> bool {
        !self.new.contains(&self.old)
    }
}

/// Replacement run configuration
#[derive(Debug, Clone)]
pub struct ReplaceConfig {
    /// Largest file size loaded into memory, in bytes
    pub memory_limit: usize,
    /// Follow symbolic links during traversal
    pub follow_links: bool,
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self {
            memory_limit: 100 * 1024 * 1024, // 100MB
            follow_links: false,
        }
    }
}

impl ReplaceConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-file memory limit
    pub fn with_memory_limit(mut self, limit_bytes: usize) -> Self {
        self.memory_limit = limit_bytes;
        self
    }

    /// Follow symbolic links during traversal
    pub fn with_follow_links(mut self, enabled: bool) -> Self {
        self.follow_links = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_limit < 1024 {
            return Err("Memory limit must be at least 1KB".to_string());
        }
        Ok(())
    }
}
