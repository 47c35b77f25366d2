//! Measurement harness
//!
//! Runs a candidate a fixed number of times on one dataset, times each
//! invocation, and reduces the samples to their median. The median is used
//! rather than the mean so a single scheduler hiccup cannot skew the result.
//!
//! ## Example
//!
//! ```rust
//! use maxbench::algorithms::IterativeMax;
//! use maxbench::dataset::Dataset;
//! use maxbench::harness::{measure, StepClock};
//!
//! let data = Dataset::parse("3, 1, 4, 1, 5")?;
//! let mut clock = StepClock::new(100);
//! let m = measure(&IterativeMax, &data, 5, &mut clock)?;
//! assert_eq!(m.value(), 5);
//! assert_eq!(m.median_ns(), 100);
//! # Ok::<(), maxbench::Error>(())
//! ```

mod clock;

pub use clock::{Clock, MonotonicClock, StepClock};

use std::hint::black_box;

use tracing::debug;

use crate::algorithms::Candidate;
use crate::dataset::Dataset;
use crate::{Error, Result};

/// Outcome of a successful measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    value: i64,
    median_ns: u64,
    samples: usize,
}

impl Measurement {
    /// Value returned by the last invocation.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Median elapsed time in nanoseconds.
    #[must_use]
    pub const fn median_ns(&self) -> u64 {
        self.median_ns
    }

    /// Number of timed invocations reduced into the median.
    #[must_use]
    pub const fn samples(&self) -> usize {
        self.samples
    }
}

/// Time `candidate` on `data` `repeats` times and reduce to the median.
///
/// The value reported is the one computed by the last invocation. A failing
/// invocation aborts the remaining repeats and its error is returned as is.
///
/// # Errors
///
/// Propagates the candidate's error (`Error::DepthExceeded` for the
/// recursive candidate). Returns `Error::InvalidConfig` if `repeats` is zero.
pub fn measure<C, K>(candidate: &C, data: &Dataset, repeats: usize, clock: &mut K) -> Result<Measurement>
where
    C: Candidate + ?Sized,
    K: Clock + ?Sized,
{
    if repeats == 0 {
        return Err(Error::InvalidConfig(
            "repeats must be greater than 0".to_string(),
        ));
    }

    let mut samples = Vec::with_capacity(repeats);
    let mut value = data.first();
    for _ in 0..repeats {
        let start = clock.now_ns();
        let result = candidate.find_max(black_box(data));
        let end = clock.now_ns();
        value = black_box(result)?;
        samples.push(end.saturating_sub(start));
    }

    let median_ns = median(&mut samples);
    debug!(
        candidate = candidate.name(),
        len = data.len(),
        repeats,
        median_ns,
        "measured"
    );

    Ok(Measurement {
        value,
        median_ns,
        samples: repeats,
    })
}

/// Median of a sample set; sorts `samples` in place.
///
/// Odd length gives the middle order statistic. Even length gives the mean of
/// the two middle values, rounded down. An empty set yields 0.
///
/// ```rust
/// use maxbench::harness::median;
///
/// assert_eq!(median(&mut [5, 1, 9, 3, 7]), 5);
/// assert_eq!(median(&mut [4, 1, 3, 2]), 2);
/// ```
pub fn median(samples: &mut [u64]) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    samples.sort_unstable();
    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        samples[mid]
    } else {
        let (lo, hi) = (samples[mid - 1], samples[mid]);
        lo / 2 + hi / 2 + (lo % 2 + hi % 2) / 2
    }
}
