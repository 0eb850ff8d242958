use crate::errors::{CsvBenchError, CsvBenchResult};
use crate::options::{CsvOptions, OptionsMap};
use polars::prelude::*;
use std::path::Path;

/// Build a lazy CSV scan for `path` with the supplied reader options applied.
///
/// Option names are resolved here rather than at CLI parse time, so a bad
/// option fails the read step, not argument handling. Missing or unreadable
/// files surface as polars errors once the frame is collected.
pub fn read_csv<P: AsRef<Path>>(path: P, options: &OptionsMap) -> CsvBenchResult<LazyFrame> {
    let opts = CsvOptions::from_map(options)?;

    let mut reader = LazyCsvReader::new(path);
    if let Some(separator) = opts.separator {
        reader = reader.with_separator(separator);
    }
    if let Some(has_header) = opts.has_header {
        reader = reader.with_has_header(has_header);
    }
    if let Some(skip_rows) = opts.skip_rows {
        reader = reader.with_skip_rows(skip_rows);
    }
    if opts.n_rows.is_some() {
        reader = reader.with_n_rows(opts.n_rows);
    }
    if opts.quote_char.is_some() {
        reader = reader.with_quote_char(opts.quote_char);
    }
    if let Some(prefix) = opts.comment_prefix {
        reader = reader.with_comment_prefix(Some(prefix.as_str().into()));
    }
    if let Some(null_values) = opts.null_values {
        let values = null_values.into_iter().map(PlSmallStr::from).collect();
        reader = reader.with_null_values(Some(NullValues::AllColumns(values)));
    }
    if let Some(low_memory) = opts.low_memory {
        reader = reader.with_low_memory(low_memory);
    }

    reader.finish().map_err(CsvBenchError::PolarsError)
}
