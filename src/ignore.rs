use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

use crate::{constants::DEFAULT_EXCLUDED_DIRS, error::Result};

/// Glob patterns matched against template entries relative to the template root.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    globs: GlobSet,
    patterns: Vec<String>,
}

impl ExcludeSet {
    /// Builds a set from raw glob patterns, e.g. `**/coverage`.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let mut builder = GlobSetBuilder::new();
        for pattern in &patterns {
            debug!("Adding exclusion pattern: {} to globset", pattern);
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self { globs: builder.build()?, patterns })
    }

    /// Builds a set excluding entries with any of `names` as a path segment,
    /// at any depth, along with everything below them.
    pub fn from_dir_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = names.into_iter().flat_map(|name| {
            let name = globset::escape(name.as_ref());
            [format!("**/{name}"), format!("**/{name}/**")]
        });
        Self::from_patterns(patterns)
    }

    /// Build-output and dependency-cache directories.
    pub fn with_defaults() -> Result<Self> {
        Self::from_dir_names(DEFAULT_EXCLUDED_DIRS)
    }

    /// Whether `relative_path` (relative to the template root) is excluded.
    /// The root itself never is.
    pub fn is_excluded<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let relative_path = relative_path.as_ref();
        !relative_path.as_os_str().is_empty() && self.globs.is_match(relative_path)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
