use clap::{Parser, ValueEnum};
use miette::Result;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Clone, ValueEnum, Debug)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "csvbench")]
#[command(version = "0.1.0")]
#[command(about = "Time repeated CSV parses with polars", long_about = None)]
struct Cli {
    /// Path to the CSV file to parse
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Reader options as a JSON object, e.g. '{"sep": ";", "header": false}'
    #[arg(value_name = "OPTIONS")]
    options: Option<String>,

    /// Increase logging verbosity (Info -> Debug)
    #[arg(short, long)]
    verbose: bool,

    /// Silence all logs
    #[arg(short, long)]
    quiet: bool,

    /// Log format (text or json)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    // Parse CLI args first
    let cli = Cli::parse();

    // Determine default log level
    let default_level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Initialize logging with EnvFilter (CSVBENCH_LOG > CLI args).
    // Logs go to stderr; stdout carries only the measurement rows.
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("CSVBENCH_LOG")
        .from_env_lossy();

    let run_id = Uuid::new_v4();

    match cli.log_format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .json()
                .with_span_list(false)
                .with_current_span(false)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    // Root span with run_id
    let _span = tracing::info_span!("root", run_id = %run_id).entered();

    let options = match &cli.options {
        Some(text) => csvbench::options::parse_literal(text)?,
        None => csvbench::options::OptionsMap::new(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    csvbench::bench::run_benchmark(&cli.file, &options, &mut out)?;

    Ok(())
}
