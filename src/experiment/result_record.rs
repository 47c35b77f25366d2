//! Result Record - outcome of one comparison run

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which candidate won a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Iterative median was strictly lower.
    Iterative,
    /// Recursive median was lower or equal.
    Recursive,
    /// Recursive candidate exceeded the call-depth ceiling.
    Failed,
}

impl Winner {
    /// Decide the winner of two successful measurements.
    ///
    /// Equal medians go to `Recursive`.
    #[must_use]
    pub const fn from_medians(iterative_ns: u64, recursive_ns: u64) -> Self {
        if iterative_ns < recursive_ns {
            Self::Iterative
        } else {
            Self::Recursive
        }
    }

    /// Label used in the log table and the CSV export.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iterative => "Iterative",
            Self::Recursive => "Recursive",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Winner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Iterative" => Ok(Self::Iterative),
            "Recursive" => Ok(Self::Recursive),
            "Failed" => Ok(Self::Failed),
            other => Err(format!("unknown winner '{other}'")),
        }
    }
}

/// One row of the experiment log.
///
/// Created once per comparison run and never mutated afterwards. A failed
/// recursive measurement is recorded with `recursive_ns == 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    input_size: usize,
    iterative_ns: u64,
    recursive_ns: u64,
    winner: Winner,
    recorded_at: DateTime<Utc>,
}

impl ResultRecord {
    /// Record a run where both candidates succeeded.
    ///
    /// The winner is derived with [`Winner::from_medians`].
    #[must_use]
    pub fn new(input_size: usize, iterative_ns: u64, recursive_ns: u64) -> Self {
        Self::builder(input_size, iterative_ns)
            .recursive_ns(recursive_ns)
            .build()
    }

    /// Record a run where the recursive candidate failed.
    #[must_use]
    pub fn failed(input_size: usize, iterative_ns: u64) -> Self {
        Self::builder(input_size, iterative_ns).build()
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(input_size: usize, iterative_ns: u64) -> ResultRecordBuilder {
        ResultRecordBuilder::new(input_size, iterative_ns)
    }

    /// Number of elements in the compared dataset.
    #[must_use]
    pub const fn input_size(&self) -> usize {
        self.input_size
    }

    /// Iterative median in nanoseconds.
    #[must_use]
    pub const fn iterative_ns(&self) -> u64 {
        self.iterative_ns
    }

    /// Recursive median in nanoseconds, 0 if the recursive candidate failed.
    #[must_use]
    pub const fn recursive_ns(&self) -> u64 {
        self.recursive_ns
    }

    /// Winner of the run.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.winner
    }

    /// When the record was created.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// The exported columns: size, iterative ns, recursive ns, winner.
    #[must_use]
    pub const fn row(&self) -> (usize, u64, u64, Winner) {
        (
            self.input_size,
            self.iterative_ns,
            self.recursive_ns,
            self.winner,
        )
    }
}

/// Builder for `ResultRecord`.
///
/// The winner is always derived: from the two medians, or `Failed` when no
/// recursive median was set.
#[derive(Debug)]
pub struct ResultRecordBuilder {
    input_size: usize,
    iterative_ns: u64,
    recursive_ns: Option<u64>,
    recorded_at: DateTime<Utc>,
}

impl ResultRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(input_size: usize, iterative_ns: u64) -> Self {
        Self {
            input_size,
            iterative_ns,
            recursive_ns: None,
            recorded_at: Utc::now(),
        }
    }

    /// Set the recursive median.
    #[must_use]
    pub const fn recursive_ns(mut self, recursive_ns: u64) -> Self {
        self.recursive_ns = Some(recursive_ns);
        self
    }

    /// Set a custom timestamp.
    #[must_use]
    pub const fn recorded_at(mut self, recorded_at: DateTime<Utc>) -> Self {
        self.recorded_at = recorded_at;
        self
    }

    /// Build the `ResultRecord`.
    #[must_use]
    pub fn build(self) -> ResultRecord {
        let winner = match self.recursive_ns {
            Some(recursive_ns) => Winner::from_medians(self.iterative_ns, recursive_ns),
            None => Winner::Failed,
        };
        ResultRecord {
            input_size: self.input_size,
            iterative_ns: self.iterative_ns,
            recursive_ns: self.recursive_ns.unwrap_or(0),
            winner,
            recorded_at: self.recorded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_strictly_less() {
        assert_eq!(Winner::from_medians(10, 11), Winner::Iterative);
        assert_eq!(Winner::from_medians(11, 10), Winner::Recursive);
    }

    #[test]
    fn test_winner_tie_goes_to_recursive() {
        assert_eq!(Winner::from_medians(42, 42), Winner::Recursive);
    }

    #[test]
    fn test_winner_parse() {
        for winner in [Winner::Iterative, Winner::Recursive, Winner::Failed] {
            assert_eq!(winner.to_string().parse::<Winner>().unwrap(), winner);
        }
        assert!("Nobody".parse::<Winner>().is_err());
    }

    #[test]
    fn test_failed_record_sentinel() {
        let record = ResultRecord::failed(3000, 1234);
        assert_eq!(record.winner(), Winner::Failed);
        assert_eq!(record.recursive_ns(), 0);
        assert_eq!(record.iterative_ns(), 1234);
        assert_eq!(record.input_size(), 3000);
    }

    #[test]
    fn test_new_derives_winner() {
        let record = ResultRecord::new(5, 100, 300);
        assert_eq!(record.row(), (5, 100, 300, Winner::Iterative));
    }

    #[test]
    fn test_builder_always_derives_winner() {
        let at = DateTime::<Utc>::UNIX_EPOCH;
        let tie = ResultRecord::builder(5, 7).recursive_ns(7).recorded_at(at).build();
        assert_eq!(tie.winner(), Winner::Recursive);
        assert_eq!(tie.recorded_at(), at);

        let failed = ResultRecord::builder(5, 7).recorded_at(at).build();
        assert_eq!(failed.row(), (5, 7, 0, Winner::Failed));
    }
}
