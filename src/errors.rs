use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CsvBenchError {
    #[error("Options error: {0}")]
    #[diagnostic(
        code("CSVBENCH-001"),
        help("The options argument must be a JSON object literal, e.g. '{{\"sep\": \";\"}}'.")
    )]
    OptionsError(#[from] serde_json::Error),

    #[error("Reader option error: {0}")]
    #[diagnostic(
        code("CSVBENCH-002"),
        help("Run with --help to see the recognized reader options and their types.")
    )]
    ReaderOptionError(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code("CSVBENCH-003"),
        help("Check file paths and permissions.")
    )]
    IoError(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    #[diagnostic(
        code("CSVBENCH-004"),
        help("An error occurred within the data processing engine.")
    )]
    PolarsError(#[from] polars::error::PolarsError),

    #[error(transparent)]
    #[diagnostic(code("CSVBENCH-000"))]
    Unknown(#[from] anyhow::Error),
}

pub type CsvBenchResult<T> = Result<T, CsvBenchError>;
