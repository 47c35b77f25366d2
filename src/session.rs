//! Interactive session state
//!
//! A [`Session`] owns everything the front end needs between commands: the
//! configuration, the comparator, the current input text, the last result and
//! the experiment log. The core modules hold no state of their own.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::compare::{Comparator, Comparison};
use crate::config::BenchConfig;
use crate::dataset::Dataset;
use crate::experiment::ExperimentLog;
use crate::harness::{Clock, MonotonicClock};
use crate::{Error, Result};

/// Input shown when a session starts.
pub const DEFAULT_INPUT: &str = "10, 5, 100, 2, 8";

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the input text
    SetInput(String),
    /// Print the current input text
    Show,
    /// Generate a random dataset into the input
    Random,
    /// Compare the candidates on the current input
    Run,
    /// Print the history table
    Log,
    /// Print the history as JSON lines
    LogJson,
    /// Write the history as CSV, optionally to a custom path
    Export(Option<PathBuf>),
    /// Print usage
    Help,
    /// Leave the session
    Quit,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// A line that starts like a number is taken as new input, so pasting
    /// `3, 1, 2` works without the `set` keyword.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_ascii_lowercase().as_str() {
            "run" | "r" => Self::Run,
            "random" | "gen" => Self::Random,
            "show" => Self::Show,
            "log" if rest.eq_ignore_ascii_case("json") => Self::LogJson,
            "log" => Self::Log,
            "export" if rest.is_empty() => Self::Export(None),
            "export" => Self::Export(Some(PathBuf::from(rest))),
            "set" => Self::SetInput(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ if line.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
                Self::SetInput(line.to_string())
            }
            _ => Self::Unknown(line.to_string()),
        }
    }
}

/// Usage text for `help`.
pub const HELP: &str = "\
Commands:
  <n1, n2, ...>   set the input numbers (or: set <n1, n2, ...>)
  show            print the current input
  random          generate 10-500 random numbers in 1..=10000
  run             compare iterative and recursive maximum
  log [json]      print the experiment history
  export [path]   write the history as CSV (default: experiment_log.csv)
  help            print this text
  quit            leave";

/// Application state for one interactive session.
#[derive(Debug)]
pub struct Session<K: Clock = MonotonicClock> {
    config: BenchConfig,
    comparator: Comparator<K>,
    log: ExperimentLog,
    input: String,
    last: Option<Comparison>,
    rng: StdRng,
}

impl Session<MonotonicClock> {
    /// Session timed by the host clock, with an entropy-seeded generator.
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        Self::with_parts(config, MonotonicClock::new(), StdRng::from_entropy())
    }
}

impl<K: Clock> Session<K> {
    /// Session with an explicit clock and random generator.
    #[must_use]
    pub fn with_parts(config: BenchConfig, clock: K, rng: StdRng) -> Self {
        let comparator = Comparator::with_clock(&config, clock);
        Self {
            config,
            comparator,
            log: ExperimentLog::new(),
            input: DEFAULT_INPUT.to_string(),
            last: None,
            rng,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text. It is validated only when a run starts.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Experiment history.
    #[must_use]
    pub const fn log(&self) -> &ExperimentLog {
        &self.log
    }

    /// Result of the most recent successful run.
    #[must_use]
    pub const fn last(&self) -> Option<&Comparison> {
        self.last.as_ref()
    }

    /// Export is available once at least one run has been logged.
    #[must_use]
    pub fn can_export(&self) -> bool {
        !self.log.is_empty()
    }

    /// Fill the input with a random dataset and return its size.
    pub fn generate_random(&mut self) -> usize {
        let data = Dataset::random(&mut self.rng);
        self.input = data.to_string();
        data.len()
    }

    /// Parse the input and compare both candidates on it.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyDataset` or `Error::InvalidNumber` for bad input;
    /// nothing is logged in that case.
    pub fn run(&mut self) -> Result<&Comparison> {
        let data = Dataset::parse(&self.input)?;
        let comparison = self.comparator.compare(&data, &mut self.log)?;
        Ok(&*self.last.insert(comparison))
    }

    /// Write the log as CSV to `path`, or to the configured default.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyLog` before the first run, `Error::Io` or
    /// `Error::Csv` if writing fails.
    pub fn export(&self, path: Option<&Path>) -> Result<PathBuf> {
        if !self.can_export() {
            return Err(Error::EmptyLog);
        }
        let path = path.unwrap_or_else(|| self.config.export_path());
        self.log.export_csv(path, self.config.repeats())?;
        Ok(path.to_path_buf())
    }

    /// Result panel for a comparison: values, median times and the verdict.
    #[must_use]
    pub fn render_result(&self, comparison: &Comparison) -> String {
        let repeats = self.config.repeats();
        let record = comparison.record();
        format!(
            "Iterative: max {} in {} ns (median/{repeats})\n\
             Recursive: max {} in {} ns (median/{repeats})\n\
             {}",
            comparison.iterative_value(),
            record.iterative_ns(),
            comparison.recursive_display(),
            record.recursive_ns(),
            comparison.announcement(repeats),
        )
    }

    /// History table, one line per run.
    #[must_use]
    pub fn render_log(&self) -> String {
        let mut out = format!(
            "{:>10} | {:>21} | {:>21} | {}\n",
            "Input Size", "Iterative Median (ns)", "Recursive Median (ns)", "Winner"
        );
        for record in self.log.records() {
            let (size, iterative_ns, recursive_ns, winner) = record.row();
            let _ = writeln!(
                out,
                "{size:>10} | {iterative_ns:>21} | {recursive_ns:>21} | {winner}"
            );
        }
        out
    }

    /// History as JSON lines.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if a record cannot be serialized.
    pub fn render_log_json(&self) -> Result<String> {
        let mut out = String::new();
        for record in self.log.records() {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::{ResultRecord, Winner};
    use crate::harness::StepClock;

    fn session(limit: usize) -> Session<StepClock> {
        let config = BenchConfig::builder().recursion_limit(limit).build().unwrap();
        Session::with_parts(config, StepClock::new(10), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("run"), Command::Run);
        assert_eq!(Command::parse("  RANDOM "), Command::Random);
        assert_eq!(Command::parse("log"), Command::Log);
        assert_eq!(Command::parse("log json"), Command::LogJson);
        assert_eq!(Command::parse("export"), Command::Export(None));
        assert_eq!(
            Command::parse("export out/runs.csv"),
            Command::Export(Some(PathBuf::from("out/runs.csv")))
        );
        assert_eq!(
            Command::parse("set 1, 2"),
            Command::SetInput("1, 2".to_string())
        );
        assert_eq!(
            Command::parse("-3, 4"),
            Command::SetInput("-3, 4".to_string())
        );
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("dance"), Command::Unknown("dance".to_string()));
    }

    #[test]
    fn test_default_input_run() {
        let mut session = session(3000);
        assert_eq!(session.input(), DEFAULT_INPUT);
        assert!(!session.can_export());

        let result = session.run().unwrap();
        assert_eq!(result.iterative_value(), 100);
        assert_eq!(result.recursive_value(), Some(100));
        assert_eq!(session.log().len(), 1);
        assert!(session.can_export());
        assert!(session.last().is_some());
    }

    #[test]
    fn test_invalid_input_logs_nothing() {
        let mut session = session(3000);
        session.set_input("1, x, 3");
        assert!(matches!(session.run(), Err(Error::InvalidNumber(_))));
        session.set_input("  ");
        assert!(matches!(session.run(), Err(Error::EmptyDataset)));
        assert!(session.log().is_empty());
        assert!(session.last().is_none());
    }

    #[test]
    fn test_generate_random_sets_input() {
        let mut session = session(3000);
        let len = session.generate_random();
        assert!((10..=500).contains(&len));
        assert_eq!(Dataset::parse(session.input()).unwrap().len(), len);
    }

    #[test]
    fn test_export_refused_when_empty() {
        let session = session(3000);
        assert!(matches!(session.export(None), Err(Error::EmptyLog)));
    }

    #[test]
    fn test_render_failed_result() {
        let mut session = session(4);
        session.set_input("1, 2, 3, 4");
        let comparison = session.run().unwrap().clone();
        assert_eq!(comparison.winner(), Winner::Failed);

        let panel = session.render_result(&comparison);
        assert!(panel.contains("Iterative: max 4 in 10 ns (median/5)"));
        assert!(panel.contains("Recursive: max Error in 0 ns (median/5)"));
        assert!(panel.contains("Recursive Failed"));
    }

    #[test]
    fn test_render_log_rows() {
        let mut session = session(3000);
        session.run().unwrap();
        session.run().unwrap();
        let table = session.render_log();
        assert_eq!(table.lines().count(), 3);
        assert!(table.lines().nth(1).unwrap().ends_with("Recursive"));
    }

    #[test]
    fn test_render_log_json() {
        let mut session = session(3000);
        session.run().unwrap();
        let json = session.render_log_json().unwrap();
        let record: ResultRecord = serde_json::from_str(json.trim()).unwrap();
        assert_eq!(record.row(), session.log().records()[0].row());
    }
}
