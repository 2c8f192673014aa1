//! Glob-based path exclusion.
//!
//! Each pattern is compiled twice: as written, and with an implicit `**/`
//! prefix so unanchored patterns match at any depth. A trailing `/` selects a
//! directory and everything under it.

use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::CoreError;

/// Compiled ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    glob_set: GlobSet,
    patterns: usize,
}

impl IgnoreFilter {
    /// Compile `patterns`. Empty patterns are dropped.
    ///
    /// Supported syntax: `*` and `?` stay within one path segment, `**`
    /// spans any number of segments, plus globset's `[abc]` and `{a,b}`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidPattern`] if a pattern does not parse.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, CoreError> {
        let mut builder = GlobSetBuilder::new();
        let mut count = 0;
        for raw in patterns {
            let raw: &str = raw.as_ref();
            if raw.is_empty() {
                continue;
            }
            let pattern = if raw.ends_with('/') {
                format!("{raw}**")
            } else {
                raw.to_owned()
            };
            let anywhere = format!("**/{}", pattern.trim_start_matches('/'));
            for candidate in [pattern.as_str(), anywhere.as_str()] {
                let glob = GlobBuilder::new(candidate)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| CoreError::InvalidPattern {
                        pattern: raw.to_owned(),
                        reason: e.kind().to_string(),
                    })?;
                builder.add(glob);
            }
            count += 1;
        }
        let glob_set = builder.build().map_err(|e| CoreError::InvalidPattern {
            pattern: e.glob().unwrap_or_default().to_owned(),
            reason: e.kind().to_string(),
        })?;
        Ok(Self {
            glob_set,
            patterns: count,
        })
    }

    /// Number of non-empty patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Whether `path` matches any pattern, in either form.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        let normalized = path.to_string_lossy().replace('\\', "/");
        self.glob_set.is_match(normalized.as_str())
    }
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self {
            glob_set: GlobSet::empty(),
            patterns: 0,
        }
    }
}
