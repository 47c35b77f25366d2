//! Experiment Log - append-only history of comparison runs
//!
//! Records keep insertion order, which is the chronological order of the
//! runs. The log lives in memory only; `export_csv` is the one way out.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::info;

use super::{ResultRecord, Winner};
use crate::{Error, Result};

/// Append-only, insertion-ordered log of result records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExperimentLog {
    records: Vec<ResultRecord>,
}

impl ExperimentLog {
    /// Create a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no run has been logged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of logged runs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Append a record.
    pub fn push(&mut self, record: ResultRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ResultRecord> {
        self.records.last()
    }

    /// Number of runs won by `winner`.
    #[must_use]
    pub fn count_by_winner(&self, winner: Winner) -> usize {
        self.records.iter().filter(|r| r.winner() == winner).count()
    }

    /// Write the log as CSV: a header naming the repeat count, then one row
    /// per record in chronological order.
    ///
    /// ```rust
    /// use maxbench::experiment::{ExperimentLog, ResultRecord};
    ///
    /// let mut log = ExperimentLog::new();
    /// log.push(ResultRecord::new(5, 120, 340));
    ///
    /// let mut out = Vec::new();
    /// log.write_csv(&mut out, 5)?;
    /// let text = String::from_utf8(out).unwrap();
    /// assert_eq!(
    ///     text,
    ///     "Input Size,Iterative Median Time (ns) over 5,\
    ///      Recursive Median Time (ns) over 5,Winner\n5,120,340,Iterative\n"
    /// );
    /// # Ok::<(), maxbench::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::Csv` or `Error::Io` if the writer fails.
    pub fn write_csv<W: Write>(&self, writer: W, repeats: usize) -> Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(csv_header(repeats))?;
        for record in &self.records {
            let (size, iterative_ns, recursive_ns, winner) = record.row();
            csv.write_record([
                size.to_string(),
                iterative_ns.to_string(),
                recursive_ns.to_string(),
                winner.to_string(),
            ])?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the log to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be created or written.
    pub fn export_csv(&self, path: impl AsRef<Path>, repeats: usize) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_csv(file, repeats)?;
        info!(path = %path.display(), rows = self.len(), "exported experiment log");
        Ok(())
    }

    /// Parse CSV produced by [`ExperimentLog::write_csv`].
    ///
    /// Timestamps are not part of the format; parsed records carry the time
    /// of parsing.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedLog` for a header that is not
    /// [`csv_header`] for some repeat count, a bad row, or a winner that
    /// contradicts its row's medians. Returns `Error::Csv` for unreadable CSV.
    pub fn read_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let header = csv.headers()?;
        let repeats = header
            .get(1)
            .and_then(|column| column.strip_prefix(ITERATIVE_COLUMN_PREFIX))
            .and_then(|n| n.parse::<usize>().ok());
        let known = repeats.is_some_and(|n| {
            header.len() == 4 && header.iter().eq(csv_header(n).iter().map(String::as_str))
        });
        if !known {
            return Err(Error::MalformedLog {
                row: 0,
                reason: "unexpected header".to_string(),
            });
        }

        let mut log = Self::new();
        for (idx, row) in csv.records().enumerate() {
            let row_no = idx + 1;
            let row = row?;
            if row.len() != 4 {
                return Err(Error::MalformedLog {
                    row: row_no,
                    reason: format!("expected 4 fields, found {}", row.len()),
                });
            }
            let bad = |reason: String| Error::MalformedLog {
                row: row_no,
                reason,
            };

            let size: usize = row[0]
                .parse()
                .map_err(|_| bad(format!("bad input size '{}'", &row[0])))?;
            let iterative_ns: u64 = row[1]
                .parse()
                .map_err(|_| bad(format!("bad iterative time '{}'", &row[1])))?;
            let recursive_ns: u64 = row[2]
                .parse()
                .map_err(|_| bad(format!("bad recursive time '{}'", &row[2])))?;
            let winner: Winner = row[3].parse().map_err(&bad)?;

            let record = match winner {
                Winner::Failed if recursive_ns != 0 => {
                    return Err(bad(format!(
                        "failed run with recursive time {recursive_ns}"
                    )));
                }
                Winner::Failed => ResultRecord::failed(size, iterative_ns),
                _ => ResultRecord::new(size, iterative_ns, recursive_ns),
            };
            if record.winner() != winner {
                return Err(bad(format!(
                    "winner {winner} contradicts medians {iterative_ns}/{recursive_ns}"
                )));
            }
            log.push(record);
        }
        Ok(log)
    }
}

const ITERATIVE_COLUMN_PREFIX: &str = "Iterative Median Time (ns) over ";

/// CSV header for a log measured with `repeats` invocations per candidate.
#[must_use]
pub fn csv_header(repeats: usize) -> [String; 4] {
    [
        "Input Size".to_string(),
        format!("{ITERATIVE_COLUMN_PREFIX}{repeats}"),
        format!("Recursive Median Time (ns) over {repeats}"),
        "Winner".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_default() {
        let log = ExperimentLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_log_preserves_order() {
        let mut log = ExperimentLog::new();
        log.push(ResultRecord::new(1, 10, 20));
        log.push(ResultRecord::failed(2, 30));
        log.push(ResultRecord::new(3, 50, 40));

        let sizes: Vec<usize> = log.records().iter().map(ResultRecord::input_size).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert_eq!(log.last().unwrap().input_size(), 3);
        assert_eq!(log.count_by_winner(Winner::Failed), 1);
        assert_eq!(log.count_by_winner(Winner::Iterative), 1);
        assert_eq!(log.count_by_winner(Winner::Recursive), 1);
    }

    #[test]
    fn test_header_names_repeats() {
        let header = csv_header(7);
        assert_eq!(header[1], "Iterative Median Time (ns) over 7");
        assert_eq!(header[2], "Recursive Median Time (ns) over 7");
    }

    #[test]
    fn test_empty_log_writes_header_only() {
        let mut out = Vec::new();
        ExperimentLog::new().write_csv(&mut out, 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_read_rejects_bad_header() {
        let err = ExperimentLog::read_csv("a,b\n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 0, .. }));
    }

    fn with_header(rows: &str) -> String {
        format!("{}\n{rows}", csv_header(5).join(","))
    }

    #[test]
    fn test_read_rejects_foreign_four_column_header() {
        let text = "Input Size,Price,Quantity,Winner\n5,1,2,Iterative\n";
        let err = ExperimentLog::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 0, .. }));
    }

    #[test]
    fn test_read_rejects_mismatched_repeat_counts() {
        let text = "Input Size,Iterative Median Time (ns) over 5,\
                    Recursive Median Time (ns) over 7,Winner\n";
        let err = ExperimentLog::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 0, .. }));
    }

    #[test]
    fn test_read_accepts_any_repeat_count() {
        let text = format!("{}\n9,4,8,Iterative\n", csv_header(11).join(","));
        let log = ExperimentLog::read_csv(text.as_bytes()).unwrap();
        assert_eq!(log.records()[0].row(), (9, 4, 8, Winner::Iterative));
    }

    #[test]
    fn test_read_rejects_bad_winner() {
        let text = with_header("5,1,2,Nobody\n");
        let err = ExperimentLog::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 1, .. }));
    }

    #[test]
    fn test_read_rejects_short_row() {
        let text = with_header("5,1,2,Iterative\n6,1\n");
        let err = ExperimentLog::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 2, .. }));
    }

    #[test]
    fn test_read_rejects_winner_contradicting_medians() {
        // Equal medians go to Recursive, never Iterative.
        let tie = with_header("5,7,7,Iterative\n");
        let err = ExperimentLog::read_csv(tie.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 1, .. }));

        let slower = with_header("5,1,2,Iterative\n5,9,2,Iterative\n");
        let err = ExperimentLog::read_csv(slower.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 2, .. }));
    }

    #[test]
    fn test_read_rejects_failed_with_recursive_time() {
        let text = with_header("3000,41000,12,Failed\n");
        let err = ExperimentLog::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MalformedLog { row: 1, .. }));
    }
}
