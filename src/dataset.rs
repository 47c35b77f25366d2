//! Input datasets: parsed from comma separated text or generated at random.

use std::fmt;

use rand::Rng;

use crate::{Error, Result};

/// Inclusive length range of generated datasets.
pub const RANDOM_LEN_RANGE: (usize, usize) = (10, 500);

/// Inclusive value range of generated elements.
pub const RANDOM_VALUE_RANGE: (i64, i64) = (1, 10_000);

/// An ordered, non-empty sequence of integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Wrap a vector of values.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyDataset` if `values` is empty.
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { values })
    }

    /// Parse comma separated integers.
    ///
    /// Pieces are trimmed and empty pieces skipped, so `"1, 2,,3,"` parses
    /// to `[1, 2, 3]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNumber` for the first piece that is not an
    /// integer, or `Error::EmptyDataset` if no numbers remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maxbench::dataset::Dataset;
    ///
    /// let data = Dataset::parse("10, 5, 100, 2, 8")?;
    /// assert_eq!(data.len(), 5);
    /// # Ok::<(), maxbench::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let values = text
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidNumber(piece.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }

    /// Generate a dataset whose length is uniform in `RANDOM_LEN_RANGE` and
    /// whose elements are uniform in `RANDOM_VALUE_RANGE`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let (min_len, max_len) = RANDOM_LEN_RANGE;
        let (min_value, max_value) = RANDOM_VALUE_RANGE;
        let len = rng.gen_range(min_len..=max_len);
        let values = (0..len)
            .map(|_| rng.gen_range(min_value..=max_value))
            .collect();
        Self { values }
    }

    /// Number of elements (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// First element. Every constructor rejects empty input, so the
    /// zero fallback is never observed.
    #[must_use]
    pub fn first(&self) -> i64 {
        self.values.first().copied().unwrap_or_default()
    }
}

impl fmt::Display for Dataset {
    /// Renders as the text the parser accepts, joined by `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
