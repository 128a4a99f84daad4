use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use url::Url;

use dict_download::utils::progress_report::{ProgressReportFn, ProgressState};
use dict_download::{get_download_iterator, DownloadConfig, DownloadError, RecordBatches, Result};

#[derive(Parser)]
#[command(name = "ljson-load")]
#[command(version)]
#[command(about = "Stream an LJSON dictionary download and validate its records in batches", long_about = None)]
struct Cli {
    /// Source URL (http, https or file) or a local file path
    #[arg(value_name = "SOURCE")]
    source: String,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of records per batch
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Per-read timeout in milliseconds
    #[arg(short, long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log progress against the record count in the header
    #[arg(short, long)]
    progress: bool,
}

fn log_progress(state: &mut ProgressState) -> bool {
    info!("{}: {}/{} records", state.state_id, state.current + 1, state.total);
    false
}

fn parse_source(source: &str) -> Result<Url> {
    match Url::parse(source) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = Path::new(source).canonicalize()?;
            Url::from_file_path(&path)
                .map_err(|_| DownloadError::invalid_parameter(format!("Invalid source path: {}", path.display())))
        }
        Err(e) => Err(e.into()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => DownloadConfig::from_file(path)?,
        None => DownloadConfig::default(),
    };
    if let Some(batch_size) = cli.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.read_timeout_ms = timeout_ms;
    }
    config.validate()?;

    let source = parse_source(&cli.source)?;
    let reporter = if cli.progress { Some(log_progress as ProgressReportFn) } else { None };

    let start = Instant::now();
    let records = get_download_iterator(&source, &config, reporter)?;
    let mut batches = RecordBatches::new(records, config.batch_size)?;
    let mut record_count = 0usize;
    let mut batch_count = 0usize;
    for batch in batches.by_ref() {
        let batch = batch?;
        record_count += batch.len();
        batch_count += 1;
    }
    let elapsed = start.elapsed();

    if let Some(header) = batches.inner().header() {
        if header.records != record_count as u64 {
            info!("Header announced {} records, read {}", header.records, record_count);
        }
    }
    info!("Loaded {} records in {} batches in {:.3}s", record_count, batch_count, elapsed.as_secs_f64());
    println!("records: {record_count}, batches: {batch_count}, elapsed: {}ms", elapsed.as_millis());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
