//! Benchmark configuration
//!
//! Defaults mirror the interactive program: five timed repeats per candidate
//! and a call-depth ceiling of 3000 frames for the recursive candidate.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default number of timed invocations per candidate.
pub const DEFAULT_REPEATS: usize = 5;

/// Default call-depth ceiling for the recursive candidate.
pub const DEFAULT_RECURSION_LIMIT: usize = 3000;

/// Largest accepted ceiling. Keeps the real stack well clear of overflow,
/// including on 2 MiB test threads.
pub const MAX_RECURSION_LIMIT: usize = 5_000;

/// Default CSV export file name.
pub const DEFAULT_EXPORT_PATH: &str = "experiment_log.csv";

/// Validated benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    repeats: usize,
    recursion_limit: usize,
    export_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl BenchConfig {
    /// Create a new configuration builder
    #[must_use]
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Timed invocations per candidate.
    #[must_use]
    pub const fn repeats(&self) -> usize {
        self.repeats
    }

    /// Call-depth ceiling for the recursive candidate.
    #[must_use]
    pub const fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    /// Where `export` writes when no path is given.
    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct BenchConfigBuilder {
    repeats: Option<usize>,
    recursion_limit: Option<usize>,
    export_path: Option<PathBuf>,
}

impl BenchConfigBuilder {
    /// Set the number of timed repeats per candidate
    #[must_use]
    pub const fn repeats(mut self, repeats: usize) -> Self {
        self.repeats = Some(repeats);
        self
    }

    /// Set the call-depth ceiling for the recursive candidate
    #[must_use]
    pub const fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = Some(limit);
        self
    }

    /// Set the default export file
    #[must_use]
    pub fn export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = Some(path.into());
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `repeats` is zero or the recursion
    /// limit is outside `1..=MAX_RECURSION_LIMIT`.
    pub fn build(self) -> Result<BenchConfig> {
        let repeats = self.repeats.unwrap_or(DEFAULT_REPEATS);
        if repeats == 0 {
            return Err(Error::InvalidConfig(
                "repeats must be greater than 0".to_string(),
            ));
        }

        let recursion_limit = self.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT);
        if recursion_limit == 0 || recursion_limit > MAX_RECURSION_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "recursion limit {recursion_limit} out of range (1..={MAX_RECURSION_LIMIT})"
            )));
        }

        Ok(BenchConfig {
            repeats,
            recursion_limit,
            export_path: self
                .export_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH)),
        })
    }
}
