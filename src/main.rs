//! Interactive front end: reads commands from stdin, one per line.
//!
//! Run with: cargo run --release
//! Logging: RUST_LOG=maxbench=debug cargo run

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use maxbench::session::{Command, Session, HELP};
use maxbench::BenchConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maxbench=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = BenchConfig::builder().build()?;
    let mut session = Session::new(config);
    info!(
        repeats = session.config().repeats(),
        recursion_limit = session.config().recursion_limit(),
        "session started"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "=== Iterative vs Recursive Comparison ===")?;
    writeln!(stdout, "{HELP}")?;
    writeln!(stdout, "Input: {}", session.input())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading stdin")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Command::SetInput(text) => {
                session.set_input(text);
                writeln!(stdout, "Input updated. Type 'run' to compare.")?;
            }
            Command::Show => writeln!(stdout, "Input: {}", session.input())?,
            Command::Random => {
                let len = session.generate_random();
                writeln!(stdout, "Data Generated! ({len} numbers) Type 'run' to compare.")?;
            }
            Command::Run => match session.run() {
                Ok(comparison) => {
                    let comparison = comparison.clone();
                    writeln!(stdout, "{}", session.render_result(&comparison))?;
                }
                Err(err) => writeln!(stdout, "Error: {err}")?,
            },
            Command::Log => write!(stdout, "{}", session.render_log())?,
            Command::LogJson => write!(stdout, "{}", session.render_log_json()?)?,
            Command::Export(path) => match session.export(path.as_deref()) {
                Ok(path) => writeln!(stdout, "Log saved to '{}'", path.display())?,
                Err(err) => writeln!(stdout, "Error: {err}")?,
            },
            Command::Help => writeln!(stdout, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(stdout, "Unknown command '{text}'. Type 'help' for usage.")?;
            }
        }
    }

    info!(runs = session.log().len(), "session ended");
    Ok(())
}
