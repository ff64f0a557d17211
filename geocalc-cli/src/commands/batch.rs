use anyhow::{Context, Result};
use geocalc::{units, GeoContext, Unit};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: u64,
    pub failed: u64,
}

pub fn run(
    ctx: &GeoContext,
    input: PathBuf,
    output: Option<PathBuf>,
    from_col: &str,
    to_col: &str,
    accuracy: Option<u32>,
    unit: Unit,
) -> Result<()> {
    let output_path = output.unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "points".to_string());
        input.with_file_name(format!("{}_distance.csv", stem))
    });

    let summary = process_csv(ctx, &input, &output_path, from_col, to_col, accuracy, unit)?;

    if summary.failed > 0 {
        eprintln!(
            "{} of {} rows could not be processed (see the error column)",
            summary.failed, summary.rows
        );
    }
    println!("Output written to: {}", output_path.display());

    let stats = ctx.cache_stats();
    tracing::info!(
        hits = stats.hit_count,
        misses = stats.miss_count,
        "conversion cache hit rate {:.1}%",
        stats.hit_rate() * 100.0
    );

    Ok(())
}

/// Read point pairs from `input` and write them back with a distance column.
///
/// Rows whose points can't be parsed keep an empty distance and carry the
/// error message in an `error` column; they don't abort the run.
pub fn process_csv(
    ctx: &GeoContext,
    input: &Path,
    output: &Path,
    from_col: &str,
    to_col: &str,
    accuracy: Option<u32>,
    unit: Unit,
) -> Result<BatchSummary> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let from_idx = headers
        .iter()
        .position(|h| h == from_col)
        .with_context(|| format!("Column '{}' not found in CSV", from_col))?;
    let to_idx = headers
        .iter()
        .position(|h| h == to_col)
        .with_context(|| format!("Column '{}' not found in CSV", to_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let total = records.len() as u64;

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let output_file = File::create(output).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let distance_header = format!("distance_{}", unit.symbol());
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push(&distance_header);
    new_headers.push("error");
    writer.write_record(&new_headers)?;

    let mut summary = BatchSummary::default();

    for record in records {
        let from = record.get(from_idx).unwrap_or_default();
        let to = record.get(to_idx).unwrap_or_default();

        let (distance, error) = match ctx.distance_from_strings(from, to, accuracy) {
            Ok(meters) => (
                units::convert(meters as f64, unit, ctx.default_precision()).to_string(),
                String::new(),
            ),
            Err(e) => {
                summary.failed += 1;
                tracing::debug!(from, to, error = %e, "skipping row");
                (String::new(), e.to_string())
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&distance);
        new_record.push(&error);
        writer.write_record(&new_record)?;

        summary.rows += 1;
        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("points.csv");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_process_csv() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(
            temp_dir.path(),
            "name,from,to\n\
             same,\"51.503293,-0.1195\",\"51.503293,-0.1195\"\n\
             mixed,\"51° 30' 0\"\" N,0° 7' 10.2\"\" W\",\"51.5,-0.1195\"\n\
             bad,\"north,south\",\"51.5,-0.1195\"\n",
        );
        let output = temp_dir.path().join("out.csv");

        let ctx = GeoContext::new(10);
        let summary =
            process_csv(&ctx, &input, &output, "from", "to", None, Unit::Meters).unwrap();
        assert_eq!(summary, BatchSummary { rows: 3, failed: 1 });

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["name", "from", "to", "distance_m", "error"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][3], "0");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[1][3], "0");
        assert_eq!(&rows[2][3], "");
        assert!(rows[2][4].contains("north"));
    }

    #[test]
    fn test_process_csv_units_and_accuracy() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(
            temp_dir.path(),
            "a,b\n\"52.2296756,21.0122287\",\"52.406374,16.9251681\"\n",
        );
        let output = temp_dir.path().join("out.csv");

        let ctx = GeoContext::new(10);
        process_csv(&ctx, &input, &output, "a", "b", Some(1000), Unit::Kilometers).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        let km: f64 = row[2].parse().unwrap();
        assert_eq!(km.fract(), 0.0);
        assert!((278.0..=280.0).contains(&km));
    }

    #[test]
    fn test_process_csv_missing_column() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_input(temp_dir.path(), "start,end\n\"0,0\",\"1,1\"\n");
        let output = temp_dir.path().join("out.csv");

        let ctx = GeoContext::new(10);
        let err = process_csv(&ctx, &input, &output, "from", "to", None, Unit::Meters)
            .unwrap_err();
        assert!(err.to_string().contains("from"));
    }
}
