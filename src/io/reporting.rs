// src/io/reporting.rs

use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::error::ReportError;
use crate::estimator::sweep::SweepRecord;

/// Writes sweep rows to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/weeks_to_fill.csv").
/// * `data` - The rows produced by [`sweep`](crate::estimator::sweep::sweep).
pub fn write_sweep_csv(file_path: &Path, data: &[SweepRecord]) -> Result<(), ReportError> {
    let wtr = csv::Writer::from_path(file_path)?;
    write_records(wtr, data)?;

    info!(
        rows = data.len(),
        path = %file_path.display(),
        "exported sweep"
    );
    Ok(())
}

/// Same as [`write_sweep_csv`] but to any writer, e.g. stdout.
pub fn write_sweep<W: Write>(out: W, data: &[SweepRecord]) -> Result<(), ReportError> {
    write_records(csv::Writer::from_writer(out), data)
}

fn write_records<W: Write>(mut wtr: csv::Writer<W>, data: &[SweepRecord]) -> Result<(), ReportError> {
    for record in data {
        wtr.serialize(record)?;
    }
    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::engine::Estimator;
    use crate::estimator::sweep::{sweep, SweepRange};
    use crate::model::inputs::{Field, InputSet};

    fn records() -> Vec<SweepRecord> {
        sweep(
            &Estimator::default(),
            &InputSet::default(),
            Field::EmptyChairs,
            SweepRange::new(1.0, 3.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn writes_header_and_one_row_per_step() {
        let mut buf = Vec::new();
        write_sweep(&mut buf, &records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("step,field,value,average_ticket"));
        assert!(lines[0].ends_with("yearly_loss,break_even_weeks"));
        assert!(lines[3].starts_with("2,empty-chairs,3.0,"));
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        write_sweep_csv(&path, &records()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let lost: Vec<f64> = reader
            .records()
            .map(|r| r.unwrap()[9].parse().unwrap())
            .collect();
        assert_eq!(lost, vec![2125.0, 4250.0, 6375.0]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = write_sweep_csv(Path::new("/nonexistent/dir/sweep.csv"), &records()).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }
}
