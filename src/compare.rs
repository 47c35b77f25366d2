//! Comparator: measures both candidates on one dataset and logs the outcome.

use tracing::{info, warn};

use crate::algorithms::{Candidate, IterativeMax, RecursiveMax};
use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::experiment::{ExperimentLog, ResultRecord, Winner};
use crate::harness::{measure, Clock, MonotonicClock};
use crate::Result;

/// Everything one comparison run produced.
///
/// The maximum values are for display only; they play no part in deciding
/// the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    record: ResultRecord,
    iterative_value: i64,
    recursive_value: Option<i64>,
}

impl Comparison {
    /// The record appended to the log.
    #[must_use]
    pub const fn record(&self) -> &ResultRecord {
        &self.record
    }

    /// Maximum found by the iterative candidate.
    #[must_use]
    pub const fn iterative_value(&self) -> i64 {
        self.iterative_value
    }

    /// Maximum found by the recursive candidate, `None` if it failed.
    #[must_use]
    pub const fn recursive_value(&self) -> Option<i64> {
        self.recursive_value
    }

    /// Winner of the run.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.record.winner()
    }

    /// One-line verdict for display.
    #[must_use]
    pub fn announcement(&self, repeats: usize) -> String {
        match self.winner() {
            Winner::Iterative => format!("Iterative is Faster! (median of {repeats})"),
            Winner::Recursive => format!("Recursive is Faster! (median of {repeats})"),
            Winner::Failed => "Recursive Failed (recursion limit exceeded)".to_string(),
        }
    }

    /// Recursive maximum as displayed: the value, or `Error` on failure.
    #[must_use]
    pub fn recursive_display(&self) -> String {
        self.recursive_value
            .map_or_else(|| "Error".to_string(), |value| value.to_string())
    }
}

/// Runs the iterative and recursive candidates against each other.
#[derive(Debug)]
pub struct Comparator<K: Clock = MonotonicClock> {
    iterative: IterativeMax,
    recursive: RecursiveMax,
    repeats: usize,
    clock: K,
}

impl Comparator<MonotonicClock> {
    /// Comparator timed by the host monotonic clock.
    #[must_use]
    pub fn new(config: &BenchConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<K: Clock> Comparator<K> {
    /// Comparator timed by `clock`.
    #[must_use]
    pub fn with_clock(config: &BenchConfig, clock: K) -> Self {
        Self {
            iterative: IterativeMax,
            recursive: RecursiveMax::new(config.recursion_limit()),
            repeats: config.repeats(),
            clock,
        }
    }

    /// Timed invocations per candidate.
    #[must_use]
    pub const fn repeats(&self) -> usize {
        self.repeats
    }

    /// Measure both candidates on `data` and append the record to `log`.
    ///
    /// A recursion-depth failure is not an error here: it produces a record
    /// with winner `Failed` and a recursive median of 0.
    ///
    /// # Errors
    ///
    /// Only errors other than `Error::DepthExceeded` are returned, and no
    /// record is logged in that case.
    pub fn compare(&mut self, data: &Dataset, log: &mut ExperimentLog) -> Result<Comparison> {
        let iterative = measure(&self.iterative, data, self.repeats, &mut self.clock)?;

        let (record, recursive_value) =
            match measure(&self.recursive, data, self.repeats, &mut self.clock) {
                Ok(recursive) => (
                    ResultRecord::new(data.len(), iterative.median_ns(), recursive.median_ns()),
                    Some(recursive.value()),
                ),
                Err(err) if err.is_depth_exceeded() => {
                    warn!(
                        candidate = self.recursive.name(),
                        len = data.len(),
                        limit = self.recursive.limit(),
                        "{err}"
                    );
                    (ResultRecord::failed(data.len(), iterative.median_ns()), None)
                }
                Err(err) => return Err(err),
            };

        info!(
            len = record.input_size(),
            iterative_ns = record.iterative_ns(),
            recursive_ns = record.recursive_ns(),
            winner = %record.winner(),
            "comparison finished"
        );

        log.push(record.clone());
        Ok(Comparison {
            record,
            iterative_value: iterative.value(),
            recursive_value,
        })
    }
}
