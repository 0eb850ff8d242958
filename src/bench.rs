use crate::errors::CsvBenchResult;
use crate::io;
use crate::options::OptionsMap;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Library under test, emitted in the `package` column of every row.
pub const PACKAGE: &str = "polars";

/// Fixed number of timed repetitions per invocation.
pub const RUNS: usize = 6;

/// Repeatedly parse `path` with the supplied reader options, writing one
/// `package,run,elapsed` row per repetition.
///
/// The first error aborts the remaining repetitions; rows already written
/// stay written. The parsed table is dropped at the end of each iteration,
/// before the next timer starts, so one run's allocations are released
/// before the next is measured.
pub fn run_benchmark<P, W>(path: P, options: &OptionsMap, out: &mut W) -> CsvBenchResult<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();
    info!(path = %path.display(), runs = RUNS, "timing {} CSV reads", PACKAGE);

    writeln!(out, "package,run,elapsed")?;
    out.flush()?;

    for run in 1..=RUNS {
        let start = Instant::now();
        let df = io::read_csv(path, options)?.collect()?;
        let elapsed = start.elapsed().as_secs_f64();

        debug!(run, rows = df.height(), elapsed, "run complete");
        writeln!(out, "{PACKAGE},{run},{elapsed}")?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::parse_literal;
    use std::fs;
    use tempfile::tempdir;

    fn run_to_string(path: &Path, options: &OptionsMap) -> (CsvBenchResult<()>, String) {
        let mut out = Vec::new();
        let result = run_benchmark(path, options, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_emits_header_and_six_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.csv");
        fs::write(&path, "x,y\n1,2\n3,4").unwrap();

        let (result, output) = run_to_string(&path, &OptionsMap::new());
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + RUNS);
        assert_eq!(lines[0], "package,run,elapsed");
        for (i, line) in lines[1..].iter().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[0], PACKAGE);
            assert_eq!(fields[1].parse::<usize>().unwrap(), i + 1);
            let elapsed: f64 = fields[2].parse().unwrap();
            assert!(elapsed.is_finite());
            assert!(elapsed >= 0.0);
        }
    }

    #[test]
    fn test_nonexistent_file_stops_after_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let (result, output) = run_to_string(&path, &OptionsMap::new());
        assert!(result.is_err());
        assert_eq!(output.lines().collect::<Vec<_>>(), vec!["package,run,elapsed"]);
    }

    #[test]
    fn test_unknown_option_fails_first_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.csv");
        fs::write(&path, "x,y\n1,2").unwrap();

        let options = parse_literal(r#"{"dtype": "str"}"#).unwrap();
        let (result, output) = run_to_string(&path, &options);
        assert!(result.is_err());
        // Header is out before the read step rejects the option.
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_options_are_reused_each_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("semi.csv");
        fs::write(&path, "a;b\n1;2\n3;4").unwrap();

        let options = parse_literal(r#"{"sep": ";"}"#).unwrap();
        let (result, output) = run_to_string(&path, &options);
        result.unwrap();
        assert_eq!(output.lines().count(), 1 + RUNS);
    }
}
