use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use passbook_core::FinalRecord;
use passbook_ingest::{ScanOutput, StatementEngine};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

mod check;
mod config;
mod logging;
mod output;
mod state;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "passbook",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PASSBOOK_BUILD_SHA"), ")"),
    about = "Extract transactions from bank statement text"
)]
struct Cli {
    /// Config file (default: ~/.passbook/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one or more statements (PDF, or extracted text with form-feed page breaks)
    Parse {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format (default: from config, else csv)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Write records here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Parse a statement and verify the output structure
    Check {
        input: PathBuf,

        /// CSV whose header row lists the expected columns
        #[arg(long)]
        expected: Option<PathBuf>,
    },

    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective config
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Parse {
            inputs,
            format,
            out,
        } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let format = format.unwrap_or(cfg.output.format);
            let schema = cfg.profile.schema.clone();
            let engine = Arc::new(StatementEngine::new(cfg.profile)?);

            let records = parse_all(engine, &inputs).await?;

            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("create {}", path.display()))?;
                    output::write_records(BufWriter::new(file), &records, &schema, format)?;
                    info!(records = records.len(), out = %path.display(), "wrote records");
                }
                None => {
                    let stdout = io::stdout();
                    let mut lock = stdout.lock();
                    output::write_records(&mut lock, &records, &schema, format)?;
                    lock.flush()?;
                }
            }
        }

        Command::Check { input, expected } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let schema = cfg.profile.schema.clone();
            let expected = expected
                .as_deref()
                .map(check::read_expected_headers)
                .transpose()?;

            let engine = Arc::new(StatementEngine::new(cfg.profile)?);
            let scanned = scan_blocking(engine, input.clone()).await?;

            if let Err(failure) =
                check::check_structure(&scanned.records, &schema, expected.as_deref())
            {
                bail!("{}: {}", input.display(), failure);
            }
            println!(
                "OK: {} transactions with the expected columns from {}",
                scanned.records.len(),
                input.display()
            );
        }

        Command::InitConfig { force } => {
            config::init_config(cli.config.as_deref(), force)?;
        }

        Command::ShowConfig => {
            let cfg = config::load_config(cli.config.as_deref())?;
            print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
        }
    }

    Ok(())
}

/// Scan every input on the blocking pool. Documents are independent, so they
/// run concurrently; records come back in input order.
async fn parse_all(engine: Arc<StatementEngine>, inputs: &[PathBuf]) -> Result<Vec<FinalRecord>> {
    let handles: Vec<_> = inputs
        .iter()
        .cloned()
        .map(|path| tokio::spawn(scan_blocking(Arc::clone(&engine), path)))
        .collect();

    let mut records = Vec::new();
    for (path, handle) in inputs.iter().zip(handles) {
        let scanned = handle.await.context("statement task failed")??;
        summarize(path, &scanned);
        records.extend(scanned.records);
    }
    Ok(records)
}

/// Scan one document off the async runtime. PDF extraction is blocking and
/// may panic on malformed files; a panic surfaces as an error for that path.
async fn scan_blocking(engine: Arc<StatementEngine>, path: PathBuf) -> Result<ScanOutput> {
    let label = path.display().to_string();
    tokio::task::spawn_blocking(move || engine.scan_file(&path))
        .await
        .with_context(|| format!("statement worker for {label} panicked"))?
        .with_context(|| format!("parsing {label}"))
}

fn summarize(path: &Path, scanned: &ScanOutput) {
    let dates: Vec<_> = scanned
        .records
        .iter()
        .filter_map(FinalRecord::date_parsed)
        .collect();
    let period = match (dates.iter().min(), dates.iter().max()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "-".to_string(),
    };

    info!(
        path = %path.display(),
        transactions = scanned.records.len(),
        period = %period,
        "parsed statement"
    );
    if scanned.records.is_empty() {
        warn!(path = %path.display(), "no transactions found (is the column header banner present?)");
    }
}
