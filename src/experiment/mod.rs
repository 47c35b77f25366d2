//! Experiment log schema
//!
//! Every comparison run produces one [`ResultRecord`]; the records are kept
//! in an append-only [`ExperimentLog`] that can be exported as CSV.
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentLog (1) ──< ResultRecord (N) [insertion order = run order]
//!                            │
//!                            └── Winner { Iterative | Recursive | Failed }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use maxbench::experiment::{ExperimentLog, ResultRecord, Winner};
//!
//! let mut log = ExperimentLog::new();
//! log.push(ResultRecord::new(5, 120, 340));
//! log.push(ResultRecord::failed(3000, 2100));
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.records()[1].winner(), Winner::Failed);
//! ```

mod log;
mod result_record;

pub use log::{csv_header, ExperimentLog};
pub use result_record::{ResultRecord, ResultRecordBuilder, Winner};
