mod cli;

use std::fs::File;
use std::io::{BufReader, Write};

use agenda::generator::{generate, GeneratorConfig};
use agenda::text::load_agenda;
use agenda::IntervalSet;
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use qtty::Quantity;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_tracing();

    match args.command {
        Command::Check { file } => check(file),
        Command::Generate {
            first,
            step_hours,
            count,
            conflicts,
            seed,
        } => {
            let config = GeneratorConfig {
                first,
                step: Quantity::new(step_hours),
                repetitions: count,
                injected_conflicts: conflicts,
                seed,
            };
            let agenda = generate(&config).context("failed to generate agenda")?;
            print(&agenda)
        }
    }
}

fn check(file: Option<std::path::PathBuf>) -> anyhow::Result<()> {
    let mut agenda = match &file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            load_agenda(BufReader::new(file))
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => load_agenda(std::io::stdin().lock()).context("failed to load agenda from stdin")?,
    };

    let started = std::time::Instant::now();
    let mut conflicts = agenda.conflicts();
    let elapsed = started.elapsed();
    conflicts.sort_by_start();

    if conflicts.is_empty() {
        tracing::info!(appointments = agenda.len(), ?elapsed, "agenda has no conflicts");
        return Ok(());
    }
    tracing::info!(
        appointments = agenda.len(),
        conflicts = conflicts.len(),
        ?elapsed,
        "agenda has conflicts"
    );
    print(&conflicts)
}

fn print(agenda: &IntervalSet) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for appointment in agenda {
        writeln!(out, "{appointment}")?;
    }
    out.flush()?;
    Ok(())
}

fn init_tracing() {
    use std::io::IsTerminal;

    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );

    if std::io::stderr().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .init();
    }
}
