//! # maxbench: Iterative vs Recursive Maximum
//!
//! Times two ways of finding the maximum of a list of integers, a single
//! linear pass and a linear recursion, and reports which one was faster.
//!
//! ## Pipeline
//!
//! ```text
//! text ──parse──> Dataset ──> Comparator ──measure x2──> ResultRecord ──> ExperimentLog ──> CSV
//! ```
//!
//! - Each candidate runs `repeats` times (default 5) and is summarized by the
//!   median elapsed time, never the mean.
//! - The recursive candidate has an explicit call-depth ceiling (default
//!   3000). Datasets at or above it produce a `Failed` record instead of
//!   overflowing the stack.
//! - Equal medians are awarded to the recursive candidate.
//!
//! ## Example Usage
//!
//! ```rust
//! use maxbench::compare::Comparator;
//! use maxbench::dataset::Dataset;
//! use maxbench::experiment::{ExperimentLog, Winner};
//! use maxbench::BenchConfig;
//!
//! let config = BenchConfig::builder().repeats(5).recursion_limit(3000).build()?;
//! let mut comparator = Comparator::new(&config);
//! let mut log = ExperimentLog::new();
//!
//! let data = Dataset::parse("10, 5, 100, 2, 8")?;
//! let result = comparator.compare(&data, &mut log)?;
//! assert_eq!(result.iterative_value(), 100);
//! assert_ne!(result.winner(), Winner::Failed);
//!
//! let mut csv = Vec::new();
//! log.write_csv(&mut csv, config.repeats())?;
//! # Ok::<(), maxbench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod algorithms;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod harness;
pub mod session;

pub use config::{BenchConfig, BenchConfigBuilder};
pub use error::{Error, Result};
